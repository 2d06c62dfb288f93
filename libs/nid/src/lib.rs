//! # nid
//!
//! Named, sortable, unique identifiers.
//!
//! ## Design Principles
//!
//! - IDs are system-generated; names are fixed snake_case labels
//! - All IDs have a canonical string representation with strict parsing
//! - IDs support roundtrip serialization (parse → format → parse)
//! - Byte order, string order, and creation order agree
//!
//! ## ID Format
//!
//! Every identifier uses the format `{name}_{base}`, where `base` is 26
//! characters of sortable base32 over a 16-byte value: an 8-byte big-endian
//! millisecond timestamp followed by 8 random bytes.
//!
//! Examples:
//! - `book_000034o1ibe7u02570ak9evj9s`
//! - `user_profile_000034o1ibe7u02570ak9evj9s`
//!
//! The empty identifier is written as `""` in text and `null` in JSON and
//! storage.
//!
//! ```
//! use nid::{Base, Naming, Nid};
//!
//! let book = Naming::new("book")?;
//! let id = book.create();
//!
//! let parsed: Nid = id.to_string().parse()?;
//! assert_eq!(parsed, id);
//! assert!(book.matches(&parsed));
//!
//! let base = Base::must_parse("000034o1ibe7u02570ak9evj9s");
//! assert_eq!(book.bind(base).to_string(), "book_000034o1ibe7u02570ak9evj9s");
//! # Ok::<(), nid::NidError>(())
//! ```

mod base;
mod encoding;
mod error;
mod macros;
mod name;
mod naming;
mod nid;
mod order;
mod storage;

pub use base::{Base, BASE_LEN, RAND_LEN, TIME_LEN};
pub use encoding::{ALPHABET, ENCODED_LEN};
pub use error::NidError;
pub use name::validate_name;
pub use naming::Naming;
pub use nid::{Nid, SEPARATOR};
pub use order::{compare, compare_base, sort, sort_bases};
pub use storage::{FromStorageValue, StorageValue, ToStorageValue};

#[doc(hidden)]
pub mod __private {
    pub use chrono;
    pub use serde;
}
