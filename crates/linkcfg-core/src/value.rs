//! Option kinds and the values they carry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of value kinds an option can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// UTF-8 string.
    String,
    /// Signed 64-bit integer.
    Int,
    /// Boolean flag.
    Bool,
}

impl OptionKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
        }
    }

    /// Returns the zero value of this kind (`""`, `0` or `false`).
    pub fn zero(&self) -> OptionValue {
        match self {
            Self::String => OptionValue::Str(String::new()),
            Self::Int => OptionValue::Int(0),
            Self::Bool => OptionValue::Bool(false),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed option value.
///
/// Serialises untagged, so a record's value reads as a plain JSON string,
/// number or boolean.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl OptionValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Str(_) => OptionKind::String,
            Self::Int(_) => OptionKind::Int,
            Self::Bool(_) => OptionKind::Bool,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert_eq!(OptionKind::String.zero(), OptionValue::Str(String::new()));
        assert_eq!(OptionKind::Int.zero(), OptionValue::Int(0));
        assert_eq!(OptionKind::Bool.zero(), OptionValue::Bool(false));
    }

    #[test]
    fn test_untagged_serialization() {
        let values = vec![
            OptionValue::from(":443"),
            OptionValue::from(3600_i64),
            OptionValue::from(true),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[":443",3600,true]"#);
    }
}
