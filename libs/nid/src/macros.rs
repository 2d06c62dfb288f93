//! Macros for defining typed identifiers.

/// Macro to define an identifier type pinned to one name.
///
/// This generates a newtype wrapper around [`Nid`](crate::Nid) with:
/// - `NAME` and `NAMING` constants (an invalid name fails to compile)
/// - `new()`, `new_at()` and `from_base()` to mint IDs
/// - `parse()` that rejects identifiers carrying another name
/// - `Display`, `FromStr`, `Serialize` and `Deserialize` implementations
/// - storage hooks, `Ord`, `Hash`, and other standard traits
///
/// The empty identifier is accepted by every typed identifier.
///
/// # Example
///
/// ```
/// nid::define_nid!(BookId, "book");
///
/// let id = BookId::new();
/// let parsed: BookId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// assert!("author_000034o1ibe7u02570ak9evj9s".parse::<BookId>().is_err());
/// ```
#[macro_export]
macro_rules! define_nid {
    ($name:ident, $prefix:literal) => {
        /// A typed identifier for this resource type.
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Nid);

        impl $name {
            /// The name carried by this identifier type.
            pub const NAME: &'static str = $prefix;

            /// The naming that mints this identifier type.
            pub const NAMING: $crate::Naming = $crate::Naming::from_static($prefix);

            /// Creates a new ID at the current time.
            #[must_use]
            pub fn new() -> Self {
                Self(Self::NAMING.create())
            }

            /// Creates a new ID at the given time.
            #[must_use]
            pub fn new_at(
                ts: $crate::__private::chrono::DateTime<$crate::__private::chrono::Utc>,
            ) -> Self {
                Self(Self::NAMING.create_at(ts))
            }

            /// Creates an ID from an existing base.
            #[must_use]
            pub fn from_base(base: $crate::Base) -> Self {
                Self(Self::NAMING.bind(base))
            }

            /// Parses an ID from a string.
            ///
            /// The string must be empty or in the format `{NAME}_{base}`.
            pub fn parse(s: &str) -> Result<Self, $crate::NidError> {
                Self::try_from($crate::Nid::parse(s)?)
            }

            /// Returns the underlying identifier.
            #[must_use]
            pub const fn nid(&self) -> &$crate::Nid {
                &self.0
            }

            /// Unwraps the underlying identifier.
            #[must_use]
            pub fn into_nid(self) -> $crate::Nid {
                self.0
            }

            /// Returns the base.
            #[must_use]
            pub fn base(&self) -> $crate::Base {
                self.0.base()
            }

            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl TryFrom<$crate::Nid> for $name {
            type Error = $crate::NidError;

            fn try_from(id: $crate::Nid) -> Result<Self, Self::Error> {
                if !id.is_empty() && id.name() != Self::NAME {
                    return Err($crate::NidError::NameMismatch {
                        expected: Self::NAME,
                        actual: id.name().to_string(),
                    });
                }

                Ok(Self(id))
            }
        }

        impl From<$name> for $crate::Nid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<$crate::Nid> for $name {
            fn as_ref(&self) -> &$crate::Nid {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::NidError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let id = <$crate::Nid as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::try_from(id).map_err($crate::__private::serde::de::Error::custom)
            }
        }

        impl $crate::ToStorageValue for $name {
            fn to_storage_value(&self) -> $crate::StorageValue {
                <$crate::Nid as $crate::ToStorageValue>::to_storage_value(&self.0)
            }
        }

        impl $crate::FromStorageValue for $name {
            fn from_storage_value(
                value: &$crate::StorageValue,
            ) -> Result<Self, $crate::NidError> {
                Self::try_from(<$crate::Nid as $crate::FromStorageValue>::from_storage_value(
                    value,
                )?)
            }
        }
    };
}
