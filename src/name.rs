use super::clean::clean;
use super::error::{EmptyPartError, Error, Result};
use compact_str::CompactString;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;

/// The name of a person or organization, with one, two or three parts.
///
/// Stored as the cleaned common form plus the byte range of the surname:
///
/// | shape      | `surname_start` | `surname_end`         |
/// |------------|-----------------|-----------------------|
/// | empty      | 0               | 0 (`== text.len()`)   |
/// | one part   | 0               | `text.len()`          |
/// | two parts  | > 0             | `text.len()`          |
/// | three parts| > 0             | `< text.len() - 1`    |
///
/// With a forename, the byte before `surname_start` is the separating space;
/// with a generation, so is the byte at `surname_end`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Name {
    text: CompactString,
    surname_start: u16,
    surname_end: u16,
}

impl Name {
    /// The zero value: no parts, and every accessor returns "".
    pub const EMPTY: Name = Name {
        text: CompactString::new_inline(""),
        surname_start: 0,
        surname_end: 0,
    };

    /// Constructs a one-part name, for organizations ("Baen Books") and
    /// people known by a single name ("Teller").
    ///
    /// # Examples
    /// ```
    /// use relname::Name;
    ///
    /// let baen = Name::one_part("Baen  Books").unwrap();
    /// assert_eq!("Baen Books", baen.common());
    /// assert_eq!("Baen Books", baen.file_as());
    /// assert_eq!(1, baen.num_parts());
    ///
    /// assert!(Name::one_part(" \t ").is_err());
    /// ```
    pub fn one_part(text: &str) -> Result<Name> {
        let cleaned = clean(text);
        if cleaned.is_empty() {
            return Err(empty_part(&[text]));
        }

        let end = offset(cleaned.len())?;
        Ok(Name {
            text: CompactString::new(cleaned),
            surname_start: 0,
            surname_end: end,
        })
    }

    /// Constructs a two-part name: everything before the surname, then the
    /// surname. Either part may contain several words.
    ///
    /// # Examples
    /// ```
    /// use relname::Name;
    ///
    /// let name = Name::two_part("Mark L.", "Van Name").unwrap();
    /// assert_eq!("Mark L. Van Name", name.common());
    /// assert_eq!("Van Name, Mark L.", name.file_as());
    /// ```
    pub fn two_part(forename: &str, surname: &str) -> Result<Name> {
        let f = clean(forename);
        let s = clean(surname);
        if f.is_empty() || s.is_empty() {
            return Err(empty_part(&[forename, surname]));
        }

        let len = f.len() + 1 + s.len();
        let end = offset(len)?;
        let mut text = CompactString::with_capacity(len);
        text.push_str(&f);
        text.push(' ');
        text.push_str(&s);

        Ok(Name {
            text,
            surname_start: end - s.len() as u16,
            surname_end: end,
        })
    }

    /// Constructs a three-part name, for people with a generational suffix
    /// ("Jr.", "III", "fils").
    ///
    /// The generation should be a single word; it is the only part `file_as`
    /// moves to the end.
    ///
    /// # Examples
    /// ```
    /// use relname::Name;
    ///
    /// let name = Name::three_part("James", "Tiptree", "Jr.").unwrap();
    /// assert_eq!("James Tiptree Jr.", name.common());
    /// assert_eq!("Tiptree, James Jr.", name.file_as());
    /// assert_eq!("Jr.", name.generation());
    /// ```
    pub fn three_part(forename: &str, surname: &str, generation: &str) -> Result<Name> {
        let f = clean(forename);
        let s = clean(surname);
        let g = clean(generation);
        if f.is_empty() || s.is_empty() || g.is_empty() {
            return Err(empty_part(&[forename, surname, generation]));
        }

        let len = f.len() + 1 + s.len() + 1 + g.len();
        offset(len)?;
        let mut text = CompactString::with_capacity(len);
        text.push_str(&f);
        text.push(' ');
        text.push_str(&s);
        let end = text.len() as u16;
        text.push(' ');
        text.push_str(&g);

        Ok(Name {
            text,
            surname_start: (f.len() + 1) as u16,
            surname_end: end,
        })
    }

    #[inline]
    fn start(&self) -> usize {
        self.surname_start.into()
    }

    #[inline]
    fn end(&self) -> usize {
        self.surname_end.into()
    }

    /// The name in reading order, e.g. "James Tiptree Jr.".
    #[inline]
    pub fn common(&self) -> &str {
        self.text.as_str()
    }

    /// The name in catalog order: "Tiptree, James Jr.", "Freer, Dave", or
    /// "Baen Books" for one-part names, which borrow.
    pub fn file_as(&self) -> Cow<str> {
        if self.surname_start == 0 {
            return Cow::Borrowed(self.common());
        }

        let generation = self.generation();
        let mut result = String::with_capacity(self.text.len() + 1);
        result.push_str(self.surname());
        result.push_str(", ");
        result.push_str(self.forename());
        if !generation.is_empty() {
            result.push(' ');
            result.push_str(generation);
        }
        Cow::Owned(result)
    }

    /// The main part of the name, which may be several words ("Van Scyoc").
    /// Empty only for `Name::EMPTY`; the whole text for one-part names.
    #[inline]
    pub fn surname(&self) -> &str {
        &self.text.as_str()[self.start()..self.end()]
    }

    /// Whatever precedes the surname, or "" for one-part and empty names.
    #[inline]
    pub fn forename(&self) -> &str {
        if self.surname_start == 0 {
            ""
        } else {
            &self.text.as_str()[..self.start() - 1]
        }
    }

    /// The generational suffix, or "" unless this is a three-part name.
    #[inline]
    pub fn generation(&self) -> &str {
        if self.end() == self.text.len() {
            ""
        } else {
            &self.text.as_str()[self.end() + 1..]
        }
    }

    /// 1, 2 or 3 according to the constructor used; 0 for `Name::EMPTY`.
    pub fn num_parts(&self) -> usize {
        if self.surname_start == 0 {
            if self.text.is_empty() {
                0
            } else {
                1
            }
        } else if self.end() == self.text.len() {
            2
        } else {
            3
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.common())
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.common()
    }
}

fn empty_part(args: &[&str]) -> Error {
    let err = Error::from(EmptyPartError::new(args));
    tracing::debug!(error = %err, "rejected name");
    err
}

#[inline]
fn offset(len: usize) -> Result<u16> {
    u16::try_from(len).map_err(|_| {
        let err = Error::TooLong { len };
        tracing::debug!(error = %err, "rejected name");
        err
    })
}
