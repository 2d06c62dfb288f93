//! The sortable 16-byte base of every identifier.
//!
//! ```text
//! offset 0        8                16
//!        +--------+----------------+
//!        | millis |     random     |
//!        +--------+----------------+
//! ```
//!
//! The timestamp is an unsigned big-endian count of milliseconds since the
//! Unix epoch, so byte order, encoded string order, and creation order all
//! agree.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::TryCryptoRng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::encoding::{self, ENCODED_LEN};
use crate::error::NidError;
use crate::storage::{FromStorageValue, StorageValue, ToStorageValue};

/// Length of the timestamp part in bytes.
pub const TIME_LEN: usize = 8;

/// Length of the random part in bytes.
pub const RAND_LEN: usize = 8;

/// Total length of a base in bytes.
pub const BASE_LEN: usize = TIME_LEN + RAND_LEN;

/// Base of a [`Nid`](crate::Nid): a millisecond timestamp followed by
/// random bytes.
///
/// The all-zero value is the empty base and never identifies anything.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base([u8; BASE_LEN]);

impl Base {
    /// The empty base.
    pub const EMPTY: Self = Self([0; BASE_LEN]);

    /// Creates a base from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; BASE_LEN]) -> Self {
        Self(bytes)
    }

    /// Generates a new base at the current time.
    ///
    /// # Panics
    ///
    /// Panics if the operating system random source fails.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_at(Utc::now())
    }

    /// Generates a new base at the given time.
    ///
    /// The time is truncated to millisecond precision.
    ///
    /// # Panics
    ///
    /// Panics if the operating system random source fails.
    #[must_use]
    pub fn generate_at(ts: DateTime<Utc>) -> Self {
        expect_entropy(Self::try_generate_at(ts))
    }

    /// Generates a new base at the current time, reporting random source
    /// failures as [`NidError::Entropy`].
    pub fn try_generate() -> Result<Self, NidError> {
        Self::try_generate_at(Utc::now())
    }

    /// Generates a new base at the given time, reporting random source
    /// failures as [`NidError::Entropy`].
    pub fn try_generate_at(ts: DateTime<Utc>) -> Result<Self, NidError> {
        Self::try_generate_with(ts, &mut OsRng)
    }

    /// Generates a new base at the given time, drawing the random part
    /// from `rng`.
    pub fn try_generate_with<R>(ts: DateTime<Utc>, rng: &mut R) -> Result<Self, NidError>
    where
        R: TryCryptoRng + ?Sized,
    {
        let mut bytes = [0u8; BASE_LEN];
        bytes[..TIME_LEN].copy_from_slice(&(ts.timestamp_millis() as u64).to_be_bytes());
        rng.try_fill_bytes(&mut bytes[TIME_LEN..])
            .map_err(|e| NidError::Entropy(e.to_string()))?;

        Ok(Self(bytes))
    }

    /// Parses a base from its 26-character text form.
    ///
    /// An empty string yields [`Base::EMPTY`].
    pub fn parse(s: &str) -> Result<Self, NidError> {
        Self::parse_bytes(s.as_bytes())
    }

    /// Parses a base from the bytes of its text form.
    pub fn parse_bytes(src: &[u8]) -> Result<Self, NidError> {
        match src.len() {
            0 => Ok(Self::EMPTY),
            _ => encoding::decode(src).map(Self),
        }
    }

    /// Parses a base from its text form.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid base.
    #[must_use]
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(base) => base,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_ms(&self) -> i64 {
        let mut ts = [0u8; TIME_LEN];
        ts.copy_from_slice(&self.0[..TIME_LEN]);
        u64::from_be_bytes(ts) as i64
    }

    /// Returns the timestamp as a UTC instant, if it is representable.
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms())
    }

    /// Returns true if every byte is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BASE_LEN] {
        &self.0
    }

    /// Returns a copy of the raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; BASE_LEN] {
        self.0
    }

    /// Encodes the base into its 26-character text form.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

fn expect_entropy(result: Result<Base, NidError>) -> Base {
    match result {
        Ok(base) => base,
        Err(err) => {
            tracing::error!(error = %err, "cannot generate base id without entropy");
            panic!("{err}");
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded: [u8; ENCODED_LEN] = encoding::encode(&self.0);
        let s = std::str::from_utf8(&encoded).map_err(|_| fmt::Error)?;
        f.write_str(s)
    }
}

impl fmt::Debug for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Base({self})")
    }
}

impl FromStr for Base {
    type Err = NidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; BASE_LEN]> for Base {
    fn from(bytes: [u8; BASE_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Base> for [u8; BASE_LEN] {
    fn from(base: Base) -> Self {
        base.0
    }
}

impl TryFrom<&[u8]> for Base {
    type Error = NidError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; BASE_LEN]>::try_from(src)
            .map(Self)
            .map_err(|_| NidError::InvalidLength(src.len()))
    }
}

impl AsRef<[u8]> for Base {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Base {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for Base {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::EMPTY),
            Some(s) => Self::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}

impl ToStorageValue for Base {
    fn to_storage_value(&self) -> StorageValue {
        if self.is_empty() {
            StorageValue::Null
        } else {
            StorageValue::Bytes(self.0.to_vec())
        }
    }
}

impl FromStorageValue for Base {
    fn from_storage_value(value: &StorageValue) -> Result<Self, NidError> {
        match value {
            StorageValue::Null => Ok(Self::EMPTY),
            StorageValue::Text(s) => Self::parse(s),
            StorageValue::Bytes(b) if b.is_empty() => Ok(Self::EMPTY),
            StorageValue::Bytes(b) => Self::try_from(b.as_slice()),
            other => {
                tracing::trace!(source = other.type_name(), "rejected base scan source");
                Err(NidError::InvalidSource(other.type_name()))
            }
        }
    }
}
