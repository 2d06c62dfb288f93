//! Storage-value hooks for database adapters.
//!
//! Drivers convert their column values into a [`StorageValue`] and hand it
//! to [`FromStorageValue`]; writes go the other way through
//! [`ToStorageValue`]. A `NULL` column is the empty identifier.

use chrono::{DateTime, Utc};

use crate::error::NidError;

/// A driver-neutral column value.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
}

impl StorageValue {
    /// Name of the value's type, used in scan errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            StorageValue::Null => "null",
            StorageValue::Bool(_) => "bool",
            StorageValue::Int(_) => "int",
            StorageValue::Float(_) => "float",
            StorageValue::Text(_) => "text",
            StorageValue::Bytes(_) => "bytes",
            StorageValue::Timestamp(_) => "timestamp",
        }
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, StorageValue::Null)
    }
}

/// Converts a value into its storage representation.
pub trait ToStorageValue {
    fn to_storage_value(&self) -> StorageValue;
}

/// Reconstructs a value from its storage representation.
pub trait FromStorageValue: Sized {
    fn from_storage_value(value: &StorageValue) -> Result<Self, NidError>;
}

impl<T: Into<StorageValue>> From<Option<T>> for StorageValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StorageValue::Null, Into::into)
    }
}

impl From<bool> for StorageValue {
    fn from(value: bool) -> Self {
        StorageValue::Bool(value)
    }
}

impl From<i64> for StorageValue {
    fn from(value: i64) -> Self {
        StorageValue::Int(value)
    }
}

impl From<f64> for StorageValue {
    fn from(value: f64) -> Self {
        StorageValue::Float(value)
    }
}

impl From<String> for StorageValue {
    fn from(value: String) -> Self {
        StorageValue::Text(value)
    }
}

impl From<&str> for StorageValue {
    fn from(value: &str) -> Self {
        StorageValue::Text(value.to_string())
    }
}

impl From<Vec<u8>> for StorageValue {
    fn from(value: Vec<u8>) -> Self {
        StorageValue::Bytes(value)
    }
}

impl From<&[u8]> for StorageValue {
    fn from(value: &[u8]) -> Self {
        StorageValue::Bytes(value.to_vec())
    }
}

impl From<DateTime<Utc>> for StorageValue {
    fn from(value: DateTime<Utc>) -> Self {
        StorageValue::Timestamp(value)
    }
}
