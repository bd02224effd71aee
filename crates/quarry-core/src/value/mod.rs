mod compare;


use crate::types::{Float64, Ulid};
use serde::{Deserialize, Serialize};

pub(crate) use compare::{compare_eq, strict_order_cmp};

///
/// Value
///
/// Literal and field-value union used throughout the predicate engine.
/// `Record` carries named sub-values so member access can descend into
/// nested structures during evaluation.
///
/// Null → the field's value is Option::None.
/// Unit → internal placeholder; not a real value.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float(Float64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Record(Vec<(String, Value)>),
    Text(String),
    Uint(u64),
    Ulid(Ulid),
    Unit,
}

impl Value {
    /// Look up a named entry on a `Record` value.
    /// Names match case-sensitively; non-record values have no entries.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Record(entries) => entries
                .iter()
                .find(|(entry_name, _)| entry_name == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short variant label for diagnostics.
    #[must_use]
    pub const fn variant(&self) -> &'static str {
        match self {
            Self::Blob(_) => "blob",
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::List(_) => "list",
            Self::Null => "null",
            Self::Record(_) => "record",
            Self::Text(_) => "text",
            Self::Uint(_) => "uint",
            Self::Ulid(_) => "ulid",
            Self::Unit => "unit",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(Float64::new(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Ulid> for Value {
    fn from(value: Ulid) -> Self {
        Self::Ulid(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}
