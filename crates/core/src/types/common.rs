//! Common types and utilities shared across domain models

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Which records a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Listing {
    /// Public listing: only records with `is_active = true`
    #[default]
    ActiveOnly,
    /// Administrative listing: active and soft-deleted records alike
    All,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listing::ActiveOnly => write!(f, "active only"),
            Listing::All => write!(f, "all"),
        }
    }
}

/// A column value carried by a create or update payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(i64),
    /// Nullable foreign key; `None` stores NULL
    OptionalInteger(Option<i64>),
    Text(String),
    Bool(bool),
}

/// One column assignment produced from a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub column: &'static str,
    pub value: FieldValue,
}

impl Change {
    pub fn integer(column: &'static str, value: i64) -> Self {
        Self {
            column,
            value: FieldValue::Integer(value),
        }
    }

    pub fn optional_integer(column: &'static str, value: Option<i64>) -> Self {
        Self {
            column,
            value: FieldValue::OptionalInteger(value),
        }
    }

    pub fn text(column: &'static str, value: impl Into<String>) -> Self {
        Self {
            column,
            value: FieldValue::Text(value.into()),
        }
    }

    pub fn bool(column: &'static str, value: bool) -> Self {
        Self {
            column,
            value: FieldValue::Bool(value),
        }
    }
}

/// Payloads that can be turned into column assignments
///
/// Create payloads return every column they carry. Update payloads return only
/// the fields that were explicitly set, which is what makes updates partial.
pub trait Changeset {
    /// Returns the column assignments carried by this payload
    fn changes(&self) -> Vec<Change>;
}

/// Deserializes a present value (including `null`) as `Some(..)`
///
/// Combined with `#[serde(default)]` this lets `Option<Option<T>>` tell a
/// missing key (`None`) apart from an explicit `null` (`Some(None)`).
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
