//! Factories that mint and rebind identifiers under one name.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::base::Base;
use crate::error::NidError;
use crate::name::validate_name;
use crate::nid::Nid;

/// A validated name used to create, rename, and recognise [`Nid`]s.
///
/// A `Naming` can only be obtained through [`Naming::new`],
/// [`Naming::must_new`] or [`Naming::from_static`], so it always holds a
/// valid name.
///
/// ```
/// use nid::Naming;
///
/// const BOOK: Naming = Naming::from_static("book");
///
/// let id = BOOK.create();
/// assert!(BOOK.matches(&id));
/// assert!(id.to_string().starts_with("book_"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Naming {
    name: Cow<'static, str>,
}

impl Naming {
    /// Creates a naming, returning [`NidError::InvalidName`] unless the name
    /// is a non-empty snake_case string such as `user` or `user_profile`.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self, NidError> {
        let name = name.into();
        if !validate_name(&name) {
            return Err(NidError::InvalidName(name.into_owned()));
        }

        Ok(Self { name })
    }

    /// Creates a naming.
    ///
    /// # Panics
    ///
    /// Panics if the name is invalid.
    #[must_use]
    pub fn must_new(name: impl Into<Cow<'static, str>>) -> Self {
        match Self::new(name) {
            Ok(naming) => naming,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a naming from a static name.
    ///
    /// # Panics
    ///
    /// Panics if the name is invalid; in a `const` item this is a compile
    /// error.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        assert!(
            validate_name(name),
            "nid: invalid name: must be a non-empty snake_case string"
        );

        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a new identifier at the current time.
    ///
    /// # Panics
    ///
    /// Panics if the operating system random source fails.
    #[must_use]
    pub fn create(&self) -> Nid {
        self.bind(Base::generate())
    }

    /// Creates a new identifier at the given time.
    ///
    /// # Panics
    ///
    /// Panics if the operating system random source fails.
    #[must_use]
    pub fn create_at(&self, ts: DateTime<Utc>) -> Nid {
        self.bind(Base::generate_at(ts))
    }

    /// Creates a new identifier at the current time, reporting random
    /// source failures.
    pub fn try_create(&self) -> Result<Nid, NidError> {
        Base::try_generate().map(|base| self.bind(base))
    }

    /// Creates a new identifier at the given time, reporting random source
    /// failures.
    pub fn try_create_at(&self, ts: DateTime<Utc>) -> Result<Nid, NidError> {
        Base::try_generate_at(ts).map(|base| self.bind(base))
    }

    /// Returns true if the identifier carries this name.
    #[must_use]
    pub fn matches(&self, id: &Nid) -> bool {
        id.name() == self.name()
    }

    /// Pairs this name with an existing base.
    ///
    /// An empty base yields [`Nid::EMPTY`].
    #[must_use]
    pub fn bind(&self, base: Base) -> Nid {
        Nid::from_parts(self.name.clone(), base)
    }

    /// Renames an identifier, keeping its base.
    ///
    /// An empty identifier stays empty.
    #[must_use]
    pub fn rebind(&self, id: &Nid) -> Nid {
        if id.is_empty() {
            return Nid::EMPTY;
        }

        self.bind(id.base())
    }
}

impl fmt::Display for Naming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BOOK: Naming = Naming::from_static("book");

    const SAMPLE_BASE: Base = Base::from_bytes([
        0x00, 0x00, 0x01, 0x93, 0x01, 0x92, 0xdc, 0x7f, 0x00, 0x45, 0x38, 0x15, 0x44, 0xbb, 0xf3,
        0x4f,
    ]);

    fn millis(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[rstest]
    #[case::short("example")]
    #[case::full("abcdefghijklmnopqrstuvwxyz_0123456789")]
    fn test_new_accepts(#[case] name: &'static str) {
        assert_eq!(Naming::new(name).unwrap().name(), name);
        assert_eq!(Naming::must_new(name).name(), name);
        assert_eq!(Naming::new(name.to_string()).unwrap().name(), name);
    }

    #[rstest]
    #[case::empty("")]
    #[case::starts_underscore("_example")]
    #[case::ends_underscore("example_")]
    #[case::double_underscore("example__example")]
    #[case::starts_number("123_example")]
    #[case::uppercase("EXAMPLE")]
    fn test_new_rejects(#[case] name: &'static str) {
        let err = Naming::new(name).unwrap_err();
        assert!(err.is_invalid_name());
        assert_eq!(err, NidError::InvalidName(name.to_string()));
    }

    #[rstest]
    #[case::empty("")]
    #[case::starts_number("123_example")]
    #[case::uppercase("EXAMPLE")]
    #[should_panic(expected = "invalid name")]
    fn test_must_new_panics(#[case] name: &'static str) {
        let _ = Naming::must_new(name);
    }

    #[test]
    #[should_panic(expected = "invalid name")]
    fn test_from_static_panics_at_runtime() {
        let name = "Book";
        let _ = Naming::from_static(name);
    }

    #[test]
    fn test_create() {
        let id = BOOK.create();
        assert_eq!(id.name(), "book");
        assert!(!id.is_empty());

        let id = BOOK.try_create().unwrap();
        assert_eq!(id.name(), "book");
    }

    #[test]
    fn test_create_at() {
        let id = BOOK.create_at(millis(12345));
        assert_eq!(id.name(), "book");
        assert_eq!(id.base().time(), Some(millis(12345)));

        let id = BOOK.try_create_at(millis(12345)).unwrap();
        assert_eq!(id.base().timestamp_ms(), 12345);
    }

    #[test]
    fn test_matches() {
        assert!(BOOK.matches(&Nid::must_parse("book_000034o1ibe7u02570ak9evj9s")));
        assert!(!BOOK.matches(&Nid::must_parse("author_000034o1ibe7u02570ak9evj9s")));
        assert!(!BOOK.matches(&Nid::must_parse("book_shelf_000034o1ibe7u02570ak9evj9s")));
        assert!(!BOOK.matches(&Nid::EMPTY));
    }

    #[test]
    fn test_bind() {
        let id = BOOK.bind(SAMPLE_BASE);
        assert_eq!(id.to_string(), "book_000034o1ibe7u02570ak9evj9s");
        assert_eq!(id.base(), SAMPLE_BASE);
        assert_eq!(BOOK.bind(Base::EMPTY), Nid::EMPTY);
    }

    #[test]
    fn test_rebind() {
        let author = Nid::must_parse("author_000034o1ibe7u02570ak9evj9s");
        let renamed = BOOK.rebind(&author);
        assert_eq!(renamed.name(), "book");
        assert_eq!(renamed.base(), author.base());
        assert_eq!(BOOK.rebind(&Nid::EMPTY), Nid::EMPTY);
        assert!(BOOK.rebind(&Nid::EMPTY).name().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(BOOK.to_string(), "book");
    }
}
