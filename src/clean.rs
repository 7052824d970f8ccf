use std::borrow::Cow;

/// Is this string already in the form `clean` would produce?
///
/// True when there is no leading or trailing whitespace, no whitespace
/// character other than U+0020, and no two adjacent spaces.
#[inline]
pub fn is_clean(s: &str) -> bool {
    let mut prev_space = true;
    for c in s.chars() {
        if c == ' ' {
            if prev_space {
                return false;
            }
            prev_space = true;
        } else if c.is_whitespace() {
            return false;
        } else {
            prev_space = false;
        }
    }

    // An empty string is clean; anything else must not end with a space
    s.is_empty() || !prev_space
}

#[inline(never)]
fn do_clean(s: &str) -> String {
    let mut cleaned = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(word);
    }
    cleaned
}

/// Replaces every run of whitespace (' ', '\t', '\n', '\r', U+00A0 and the
/// rest of Unicode `White_Space`) with a single space, and strips leading and
/// trailing whitespace.
///
/// Borrows when the input is already clean, so cleaning twice is free.
///
/// # Examples
/// ```
/// use relname::clean;
///
/// assert_eq!("a b c", clean("a     b\nc   "));
/// assert_eq!("", clean("\n    \r"));
/// assert_eq!("«»", clean("«»"));
/// ```
pub fn clean(s: &str) -> Cow<str> {
    if is_clean(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(do_clean(s))
    }
}
