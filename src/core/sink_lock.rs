//! Process-wide table of per-sink write locks
//!
//! Every sink identity maps to one dedicated lock. Locks are created on
//! first request and live for the rest of the process.

use super::sink::SinkId;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Lock serializing record writes to one sink.
pub type SinkLock = Arc<Mutex<()>>;

static GLOBAL_TABLE: LazyLock<SinkLockTable> = LazyLock::new(SinkLockTable::new);

/// Registry mapping sink identities to their write locks.
///
/// The table's own guard only protects the map; it is never held while a
/// record is being written.
#[derive(Debug, Default)]
pub struct SinkLockTable {
    locks: Mutex<HashMap<SinkId, SinkLock>>,
}

impl SinkLockTable {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The table shared by every record in the process.
    pub fn global() -> &'static SinkLockTable {
        &GLOBAL_TABLE
    }

    /// Lock for `id`, registering a fresh one if none exists yet.
    pub fn get_lock(&self, id: SinkId) -> SinkLock {
        let mut locks = self.locks.lock();
        Arc::clone(locks.entry(id).or_insert_with(|| Arc::new(Mutex::new(()))))
    }

    /// Number of registered sinks
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }
}

/// Lock for `id` from the global table.
pub fn lock_for(id: SinkId) -> SinkLock {
    SinkLockTable::global().get_lock(id)
}
