use super::clean::clean;
use super::Name;
use compact_str::CompactString;
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a `Name` or `RelatedName` could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One of `Name::one_part`, `Name::two_part` or `Name::three_part` was
    /// given a part that was empty or contained only whitespace.
    #[error(transparent)]
    EmptyPart(#[from] EmptyPartError),

    /// `RelatedName::new` was given a code other than three letters from a-z.
    #[error("RelatedName::new({:?}, {code:?}): relator code must be three letters from a-z", .name.common())]
    BadRelatorCode { name: Name, code: String },

    /// `RelatedName::new` was given the empty name.
    #[error("RelatedName::new(Name::EMPTY, {code:?}): need a non-empty name")]
    BadName { code: String },

    /// The cleaned name would not fit in the offsets a `Name` stores.
    #[error("name text is {len} bytes; at most {} are supported", u16::MAX)]
    TooLong { len: usize },
}

/// The raw, uncleaned arguments of a failed `Name` constructor call.
///
/// The arity of the call is the number of arguments kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyPartError {
    pub args: SmallVec<[CompactString; 3]>,
}

impl EmptyPartError {
    pub(crate) fn new(args: &[&str]) -> EmptyPartError {
        EmptyPartError {
            args: args.iter().map(|arg| CompactString::new(arg)).collect(),
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// How many of the arguments clean to the empty string.
    pub fn blank_count(&self) -> usize {
        self.args.iter().filter(|arg| clean(arg).is_empty()).count()
    }

    fn constructor(&self) -> Option<&'static str> {
        match self.arity() {
            1 => Some("one_part"),
            2 => Some("two_part"),
            3 => Some("three_part"),
            _ => None,
        }
    }
}

impl fmt::Display for EmptyPartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let constructor = match self.constructor() {
            Some(constructor) => constructor,
            None => return write!(f, "BUG: bad empty-part error {:?}", self),
        };

        let plural = if self.blank_count() == 1 { "" } else { "s" };
        write!(
            f,
            "empty or whitespace-only argument{} in Name::{}(",
            plural, constructor
        )?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", arg.as_str())?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for EmptyPartError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_part(args: &[&str]) -> Error {
        Error::from(EmptyPartError::new(args))
    }

    #[test]
    fn one_blank_argument() {
        assert_eq!(
            r#"empty or whitespace-only argument in Name::one_part(" \t ")"#,
            empty_part(&[" \t "]).to_string()
        );
        assert_eq!(
            r#"empty or whitespace-only argument in Name::two_part("", "Smith")"#,
            empty_part(&["", "Smith"]).to_string()
        );
        assert_eq!(
            r#"empty or whitespace-only argument in Name::two_part(" John ", "")"#,
            empty_part(&[" John ", ""]).to_string()
        );
    }

    #[test]
    fn several_blank_arguments() {
        assert_eq!(
            r#"empty or whitespace-only arguments in Name::two_part(" ", "\t")"#,
            empty_part(&[" ", "\t"]).to_string()
        );
        assert_eq!(
            r#"empty or whitespace-only arguments in Name::three_part("", "Keith", "\n")"#,
            empty_part(&["", "Keith", "\n"]).to_string()
        );
    }

    #[test]
    fn counts() {
        let err = EmptyPartError::new(&["William", " ", ""]);
        assert_eq!(3, err.arity());
        assert_eq!(2, err.blank_count());
    }

    #[test]
    fn impossible_arity() {
        let err = EmptyPartError {
            args: SmallVec::new(),
        };
        assert_eq!(
            "BUG: bad empty-part error EmptyPartError { args: [] }",
            err.to_string()
        );

        let err = EmptyPartError::new(&["one", "two", "three", "four"]);
        assert!(err.to_string().starts_with("BUG: bad empty-part error"));
    }

    #[test]
    fn relator_errors() {
        let sarah = Name::two_part("Sarah A.", "Hoyt").unwrap();
        let err = Error::BadRelatorCode {
            name: sarah,
            code: "Aut".to_string(),
        };
        assert_eq!(
            r#"RelatedName::new("Sarah A. Hoyt", "Aut"): relator code must be three letters from a-z"#,
            err.to_string()
        );

        let err = Error::BadName {
            code: "aut".to_string(),
        };
        assert_eq!(
            r#"RelatedName::new(Name::EMPTY, "aut"): need a non-empty name"#,
            err.to_string()
        );
    }

    #[test]
    fn too_long() {
        assert_eq!(
            "name text is 70000 bytes; at most 65535 are supported",
            Error::TooLong { len: 70000 }.to_string()
        );
    }
}
