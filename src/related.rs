use super::error::{Error, Result};
use super::relator::Relator;
use super::Name;
use std::fmt;
use std::ops::Deref;

/// A `Name` together with the relator code saying how that person or
/// organization contributed to a work: "aut" for an author, "edc" for the
/// editor of a compilation, and so on.
///
/// Dereferences to the `Name`, so `common()`, `file_as()` and the other
/// accessors work unchanged; only `Display` differs.
///
/// # Examples
/// ```
/// use relname::{Name, RelatedName};
///
/// let sarah = Name::two_part("Sarah A.", "Hoyt").unwrap();
/// let author = RelatedName::new(sarah, "aut").unwrap();
///
/// assert_eq!("Sarah A. Hoyt (aut)", author.to_string());
/// assert_eq!("Hoyt, Sarah A.", author.file_as());
/// assert_eq!("aut", author.relator());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelatedName {
    name: Name,
    relator: Relator,
}

impl RelatedName {
    /// Fails with `Error::BadRelatorCode` unless `code` is three letters from
    /// a-z, then with `Error::BadName` if `name` is `Name::EMPTY`.
    pub fn new(name: Name, code: &str) -> Result<RelatedName> {
        let relator = match Relator::parse(code) {
            Some(relator) => relator,
            None => {
                let err = Error::BadRelatorCode {
                    name,
                    code: code.to_string(),
                };
                tracing::debug!(error = %err, "rejected related name");
                return Err(err);
            }
        };

        if name.num_parts() == 0 {
            let err = Error::BadName {
                code: code.to_string(),
            };
            tracing::debug!(error = %err, "rejected related name");
            return Err(err);
        }

        Ok(RelatedName { name, relator })
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    pub fn into_name(self) -> Name {
        self.name
    }

    /// The three-letter code, e.g. "aut".
    #[inline]
    pub fn relator(&self) -> &str {
        self.relator.as_str()
    }

    #[inline]
    pub fn relator_code(&self) -> Relator {
        self.relator
    }
}

impl Deref for RelatedName {
    type Target = Name;

    #[inline]
    fn deref(&self) -> &Name {
        &self.name
    }
}

impl fmt::Display for RelatedName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name.common(), self.relator)
    }
}
