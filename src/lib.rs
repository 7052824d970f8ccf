//! Names of people and organizations as they appear in ebook metadata, in
//! both the "common" form ("Larry Correia") and the "file-as" form
//! ("Correia, Larry"), plus MARC relator codes linking a name to a work.
//!
//! # Kinds of name
//!
//! Organizations, and the few people known by a single name ("Teller",
//! "Gharlane of Eddore"), have one-part names; their common and file-as forms
//! are identical.
//!
//! Most people have two-part names: a surname and whatever precedes it, which
//! we call the forename. The file-as form is the surname, a comma, and the
//! forename:
//!
//! ```text
//! Robert A. Heinlein    Heinlein, Robert A.
//! Mark L. Van Name      Van Name, Mark L.
//! P. C. Hodgell         Hodgell, P. C.
//! ```
//!
//! Some have a third part, a generational suffix, which stays at the end:
//!
//! ```text
//! James Tiptree Jr.     Tiptree, James Jr.
//! ```
//!
//! Every part is cleaned with [`clean`] before use, so surrounding whitespace
//! is dropped and internal runs of whitespace become single spaces.
//!
//! | method         | `Name::EMPTY` | one part       | two parts      | three parts            |
//! |----------------|---------------|----------------|----------------|------------------------|
//! | `common()`     | ""            | "Baen Books"   | "Dave Freer"   | "James Tiptree Jr."    |
//! | `file_as()`    | ""            | "Baen Books"   | "Freer, Dave"  | "Tiptree, James Jr."   |
//! | `surname()`    | ""            | "Baen Books"   | "Freer"        | "Tiptree"              |
//! | `forename()`   | ""            | ""             | "Dave"         | "James"                |
//! | `generation()` | ""            | ""             | ""             | "Jr."                  |
//! | `num_parts()`  | 0             | 1              | 2              | 3                      |
//!
//! # Related names
//!
//! A [`RelatedName`] pairs a name with a three-letter MARC relator code such
//! as "aut" (author) or "edc" (editor of compilation); see
//! <https://www.loc.gov/marc/relators/relaterm.html>.
//!
//! ```
//! use relname::{Name, RelatedName};
//!
//! let keith = Name::three_part("William H.", "Keith", "Jr.").unwrap();
//! assert_eq!("Keith, William H. Jr.", keith.file_as());
//!
//! let author = RelatedName::new(keith, "aut").unwrap();
//! assert_eq!("William H. Keith Jr. (aut)", author.to_string());
//! ```
//!
//! # Limitations
//!
//! There is no support for post-nominals ("Ph.D.", "FRS"), and title prefixes
//! ("Dr", "Sir") are simply part of the forename. Names are never parsed from
//! free text; callers supply the parts.

mod clean;
mod error;
mod name;
mod related;
mod relator;

#[cfg(feature = "serialization")]
mod serialization;

#[cfg(feature = "ffi")]
pub mod external;

pub use clean::{clean, is_clean};
pub use error::{EmptyPartError, Error, Result};
pub use name::Name;
pub use related::RelatedName;
pub use relator::Relator;
