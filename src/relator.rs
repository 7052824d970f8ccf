use std::fmt;
use std::str;

static TERMS_BY_RELATOR: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/terms_by_relator.rs"));

/// A MARC relator code: three letters from a-z.
///
/// Codes are checked for shape only; "zzz" is as valid as "aut". See
/// <https://www.loc.gov/marc/relators/relaterm.html> for the full list.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Relator([u8; 3]);

impl Relator {
    /// Parses a code, which must be exactly three ASCII lowercase letters.
    ///
    /// # Examples
    /// ```
    /// use relname::Relator;
    ///
    /// assert_eq!("aut", Relator::parse("aut").unwrap().as_str());
    /// assert!(Relator::parse("Aut").is_none());
    /// assert!(Relator::parse("author").is_none());
    /// ```
    pub fn parse(code: &str) -> Option<Relator> {
        match *code.as_bytes() {
            [a, b, c] if [a, b, c].iter().all(u8::is_ascii_lowercase) => Some(Relator([a, b, c])),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: `parse` only admits ASCII lowercase bytes
        unsafe { str::from_utf8_unchecked(&self.0) }
    }

    /// The Library of Congress term for common codes, e.g. "Editor of
    /// compilation" for `edc`. `None` doesn't mean the code is invalid.
    pub fn term(&self) -> Option<&'static str> {
        TERMS_BY_RELATOR.get(self.as_str()).cloned()
    }
}

impl fmt::Display for Relator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Relator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Relator").field(&self.as_str()).finish()
    }
}
