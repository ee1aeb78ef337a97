//! Field values and their text tokens
//!
//! Fields alternate key, value, key, value. A key token is written as
//! `key=`, a value token as `value ` with textual values wrapped in double
//! quotes. Control characters are escaped so a record always stays on one
//! line.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Value type for record fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Pre-rendered text emitted as-is, without quotes
    Other(String),
    Null,
}

impl FieldValue {
    /// Render any `Display` value as an unquoted field.
    pub fn other(value: impl fmt::Display) -> Self {
        FieldValue::Other(value.to_string())
    }

    /// Whether this value is quoted when it sits in a value position.
    #[must_use]
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldValue::String(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) | FieldValue::Other(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

/// Token position inside a record, decided by the 0-based field index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Key,
    Value,
}

impl Position {
    pub fn of(index: usize) -> Self {
        if index % 2 == 0 {
            Position::Key
        } else {
            Position::Value
        }
    }
}

/// Append the token for `value` at `position` to `out`.
pub fn write_token(out: &mut String, value: &FieldValue, position: Position) {
    match position {
        Position::Key => {
            write_escaped(out, value, false);
            out.push('=');
        }
        Position::Value if value.is_textual() => {
            out.push('"');
            write_escaped(out, value, true);
            out.push_str("\" ");
        }
        Position::Value => {
            write_escaped(out, value, false);
            out.push(' ');
        }
    }
}

fn write_escaped(out: &mut String, value: &FieldValue, quoted: bool) {
    let text = match value {
        FieldValue::String(s) | FieldValue::Other(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    };

    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' | '\\' if quoted => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<char> for FieldValue {
    fn from(c: char) -> Self {
        FieldValue::String(c.to_string())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(i: $t) -> Self {
                FieldValue::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(u: $t) -> Self {
                FieldValue::UInt(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: impl Into<FieldValue>, position: Position) -> String {
        let mut out = String::new();
        write_token(&mut out, &value.into(), position);
        out
    }

    #[test]
    fn test_position_parity() {
        assert_eq!(Position::of(0), Position::Key);
        assert_eq!(Position::of(1), Position::Value);
        assert_eq!(Position::of(2), Position::Key);
        assert_eq!(Position::of(7), Position::Value);
    }

    #[test]
    fn test_key_tokens_are_never_quoted() {
        assert_eq!(token("msg", Position::Key), "msg=");
        assert_eq!(token(42, Position::Key), "42=");
    }

    #[test]
    fn test_textual_values_are_quoted() {
        assert_eq!(token("hello", Position::Value), "\"hello\" ");
        assert_eq!(token(String::from("1.0.0"), Position::Value), "\"1.0.0\" ");
        assert_eq!(token('x', Position::Value), "\"x\" ");
    }

    #[test]
    fn test_non_textual_values_are_bare() {
        assert_eq!(token(12, Position::Value), "12 ");
        assert_eq!(token(7_u64, Position::Value), "7 ");
        assert_eq!(token(2.5, Position::Value), "2.5 ");
        assert_eq!(token(true, Position::Value), "true ");
        assert_eq!(token(None::<i32>, Position::Value), "null ");
        assert_eq!(
            token(FieldValue::other(std::net::Ipv4Addr::LOCALHOST), Position::Value),
            "127.0.0.1 "
        );
    }

    #[test]
    fn test_escaping() {
        assert_eq!(token("a\nb", Position::Value), "\"a\\nb\" ");
        assert_eq!(token("say \"hi\"", Position::Value), "\"say \\\"hi\\\"\" ");
        assert_eq!(token("tab\tkey", Position::Key), "tab\\tkey=");
        // Quotes only matter inside quoted values
        assert_eq!(token("k\"", Position::Key), "k\"=");
    }
}
