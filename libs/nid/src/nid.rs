//! The named identifier: `{name}_{base}`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::base::Base;
use crate::error::NidError;
use crate::name::validate_name;
use crate::storage::{FromStorageValue, StorageValue, ToStorageValue};

/// Separator between the name and the encoded base.
pub const SEPARATOR: char = '_';

/// A named identifier.
///
/// Pairs a snake_case name with a sortable [`Base`]. An identifier whose
/// name or base is empty is the empty identifier; every constructor
/// collapses such pairs to [`Nid::EMPTY`], so empty identifiers always
/// compare equal.
///
/// Identifiers are created through a [`Naming`](crate::Naming) or parsed
/// from text.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nid {
    name: Cow<'static, str>,
    base: Base,
}

impl Nid {
    /// The empty identifier.
    pub const EMPTY: Self = Self {
        name: Cow::Borrowed(""),
        base: Base::EMPTY,
    };

    /// Pairs a name with a base, collapsing to [`Nid::EMPTY`] if either is
    /// empty. The name must already be valid.
    pub(crate) fn from_parts(name: Cow<'static, str>, base: Base) -> Self {
        if name.is_empty() || base.is_empty() {
            return Self::EMPTY;
        }

        Self { name, base }
    }

    /// Parses an identifier from its text form.
    ///
    /// The text is split at the last underscore; everything before it is the
    /// name and everything after it the encoded base. An empty string, or one
    /// whose base decodes to zero, yields [`Nid::EMPTY`].
    pub fn parse(s: &str) -> Result<Self, NidError> {
        if s.is_empty() {
            return Ok(Self::EMPTY);
        }

        let cut = match s.rfind(SEPARATOR) {
            Some(cut) if cut > 0 && cut < s.len() - 1 => cut,
            _ => return Err(NidError::InvalidFormat(s.to_string())),
        };

        let name = &s[..cut];
        if !validate_name(name) {
            return Err(NidError::InvalidIdentifierName(name.to_string()));
        }

        let base = Base::parse(&s[cut + 1..])?;

        Ok(Self::from_parts(Cow::Owned(name.to_string()), base))
    }

    /// Parses an identifier from the bytes of its text form.
    pub fn parse_bytes(src: &[u8]) -> Result<Self, NidError> {
        let s = std::str::from_utf8(src)
            .map_err(|_| NidError::InvalidFormat(String::from_utf8_lossy(src).into_owned()))?;
        Self::parse(s)
    }

    /// Parses an identifier from its text form.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid identifier.
    #[must_use]
    pub fn must_parse(s: &str) -> Self {
        match Self::parse(s) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the name, or `""` for the empty identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base.
    #[must_use]
    pub fn base(&self) -> Base {
        self.base
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() || self.base.is_empty()
    }
}

impl fmt::Display for Nid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        write!(f, "{}{}{}", self.name, SEPARATOR, self.base)
    }
}

impl fmt::Debug for Nid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nid({:?})", self.to_string())
    }
}

impl FromStr for Nid {
    type Err = NidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Nid {
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

impl<'de> Deserialize<'de> for Nid {
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

impl ToStorageValue for Nid {
    fn to_storage_value(&self) -> StorageValue {
        if self.is_empty() {
            StorageValue::Null
        } else {
            StorageValue::Text(self.to_string())
        }
    }
}

impl FromStorageValue for Nid {
    fn from_storage_value(value: &StorageValue) -> Result<Self, NidError> {
        match value {
            StorageValue::Null => Ok(Self::EMPTY),
            StorageValue::Text(s) => Self::parse(s),
            StorageValue::Bytes(b) => Self::parse_bytes(b),
            other => {
                tracing::trace!(source = other.type_name(), "rejected identifier scan source");
                Err(NidError::InvalidSource(other.type_name()))
            }
        }
    }
}
