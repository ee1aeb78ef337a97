//! Property-based tests for rust_record_logger using proptest

use proptest::prelude::*;
use rust_record_logger::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

/// Body of a record line after the timestamp and level.
fn fields_of(line: &str, level: LogLevel) -> String {
    let marker = format!(" level={} ", level.to_str());
    let (_, rest) = line.split_once(&marker).expect("level marker");
    rest.strip_suffix('}').expect("closing brace").to_string()
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that level names parse back to the same level
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that unknown raw levels render as an empty name
    #[test]
    fn test_level_name_total(raw in any::<u8>()) {
        let name = rust_record_logger::level_name(raw);
        if raw < 4 {
            prop_assert!(["DEBUG", "INFO", "WARN", "ERR"].contains(&name));
        } else {
            prop_assert_eq!(name, "");
        }
    }
}

// ============================================================================
// Record Tests
// ============================================================================

proptest! {
    /// Integer pairs come out in append order, unquoted
    #[test]
    fn test_integer_pairs_in_order(
        level in any_level(),
        pairs in proptest::collection::vec(("[a-z]{1,8}", any::<i64>()), 1..16),
    ) {
        let sink = Arc::new(MemorySink::new());
        let mut record = Record::begin(sink.clone(), level);
        for (key, value) in &pairs {
            record = record.pair(key.as_str(), *value);
        }
        drop(record);

        let lines = sink.lines();
        prop_assert_eq!(lines.len(), 1);

        let expected: Vec<String> = pairs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        prop_assert_eq!(fields_of(&lines[0], level), expected.join(" "));
    }

    /// Textual values are always wrapped in quotes
    #[test]
    fn test_text_values_quoted(value in "[a-zA-Z0-9 .,:/-]{0,32}") {
        let sink = Arc::new(MemorySink::new());
        Record::begin(sink.clone(), LogLevel::Info).field("v").field(value.as_str());

        let lines = sink.lines();
        prop_assert_eq!(fields_of(&lines[0], LogLevel::Info), format!("v=\"{}\"", value));
    }

    /// Arbitrary text never breaks a record across lines
    #[test]
    fn test_single_line_for_any_text(key in ".*", value in ".*") {
        let sink = Arc::new(MemorySink::new());
        Record::begin(sink.clone(), LogLevel::Info).field(key).field(value);

        let contents = sink.contents();
        prop_assert_eq!(contents.matches('\n').count(), 1);
        prop_assert!(contents.ends_with("}\n"), "contents should end with a closing brace and newline");
    }

    /// Exactly one write no matter how many handles exist or the drop order
    #[test]
    fn test_exactly_once_any_drop_order(
        count in 1usize..24,
        order in proptest::collection::vec(any::<prop::sample::Index>(), 24),
    ) {
        let sink = Arc::new(MemorySink::new());
        let mut handles = Vec::with_capacity(count);
        let mut current = Record::begin(sink.clone(), LogLevel::Info);
        for i in 0..count {
            current = current.field(i);
            handles.push(current.clone());
        }
        drop(current);

        for index in order.iter().take(count) {
            let victim = index.index(handles.len());
            handles.remove(victim);
            if !handles.is_empty() {
                prop_assert!(sink.contents().is_empty());
            }
        }
        prop_assert!(handles.is_empty());

        let lines = sink.lines();
        prop_assert_eq!(lines.len(), 1);

        let fields = fields_of(&lines[0], LogLevel::Info);
        let tokens: Vec<String> = (0..count)
            .map(|i| if i % 2 == 0 { format!("{}=", i) } else { format!("{} ", i) })
            .collect();
        let mut expected = tokens.concat();
        expected.pop();
        prop_assert_eq!(fields, expected);
    }
}
