//! A C API for constructing `Name` and `RelatedName` objects and reading
//! their renderings.
//!
//! Constructors return null on failure. Every returned string is owned by the
//! caller and must be released with `relname_free_string`.

extern crate libc;

use self::libc::c_char;
use super::{clean, Name, RelatedName};
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

macro_rules! str_to_char_star {
    ($str:expr) => {{
        // Input arrives as C strings, so no part can contain a NUL
        let s = CString::new($str).unwrap_or_default();
        s.into_raw()
    }};
}

unsafe fn to_str<'a>(input: *const c_char) -> Cow<'a, str> {
    CStr::from_ptr(input).to_string_lossy()
}

#[no_mangle]
pub unsafe extern "C" fn relname_name_one_part(text: *const c_char) -> Option<Box<Name>> {
    Name::one_part(&to_str(text)).ok().map(Box::new)
}

#[no_mangle]
pub unsafe extern "C" fn relname_name_two_part(
    forename: *const c_char,
    surname: *const c_char,
) -> Option<Box<Name>> {
    Name::two_part(&to_str(forename), &to_str(surname))
        .ok()
        .map(Box::new)
}

#[no_mangle]
pub unsafe extern "C" fn relname_name_three_part(
    forename: *const c_char,
    surname: *const c_char,
    generation: *const c_char,
) -> Option<Box<Name>> {
    Name::three_part(&to_str(forename), &to_str(surname), &to_str(generation))
        .ok()
        .map(Box::new)
}

#[no_mangle]
pub unsafe extern "C" fn relname_related_new(
    name: &Name,
    code: *const c_char,
) -> Option<Box<RelatedName>> {
    RelatedName::new(name.clone(), &to_str(code))
        .ok()
        .map(Box::new)
}

#[no_mangle]
pub unsafe extern "C" fn relname_free_name(name_ptr: *mut Name) {
    if !name_ptr.is_null() {
        mem::drop(Box::from_raw(name_ptr));
    }
}

#[no_mangle]
pub unsafe extern "C" fn relname_free_related(related_ptr: *mut RelatedName) {
    if !related_ptr.is_null() {
        mem::drop(Box::from_raw(related_ptr));
    }
}

#[no_mangle]
pub unsafe extern "C" fn relname_free_string(str_ptr: *mut c_char) {
    if !str_ptr.is_null() {
        mem::drop(CString::from_raw(str_ptr));
    }
}

#[no_mangle]
pub unsafe extern "C" fn relname_clean(input: *const c_char) -> *const c_char {
    str_to_char_star!(clean(&to_str(input)).into_owned())
}

#[no_mangle]
pub unsafe extern "C" fn relname_common(name: &Name) -> *const c_char {
    str_to_char_star!(name.common())
}

#[no_mangle]
pub unsafe extern "C" fn relname_file_as(name: &Name) -> *const c_char {
    str_to_char_star!(name.file_as().into_owned())
}

#[no_mangle]
pub unsafe extern "C" fn relname_surname(name: &Name) -> *const c_char {
    str_to_char_star!(name.surname())
}

#[no_mangle]
pub unsafe extern "C" fn relname_forename(name: &Name) -> *const c_char {
    str_to_char_star!(name.forename())
}

#[no_mangle]
pub unsafe extern "C" fn relname_generation(name: &Name) -> *const c_char {
    str_to_char_star!(name.generation())
}

#[no_mangle]
pub unsafe extern "C" fn relname_num_parts(name: &Name) -> u32 {
    name.num_parts() as u32
}

#[no_mangle]
pub unsafe extern "C" fn relname_related_name(related: &RelatedName) -> *const Name {
    related.name()
}

#[no_mangle]
pub unsafe extern "C" fn relname_related_relator(related: &RelatedName) -> *const c_char {
    str_to_char_star!(related.relator())
}

#[no_mangle]
pub unsafe extern "C" fn relname_related_display(related: &RelatedName) -> *const c_char {
    str_to_char_star!(related.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take_string(s: *const c_char) -> String {
        let owned = CStr::from_ptr(s).to_string_lossy().into_owned();
        relname_free_string(s as *mut c_char);
        owned
    }

    #[test]
    fn round_trip_through_c() {
        let forename = CString::new("William H.  ").unwrap();
        let surname = CString::new("  Keith").unwrap();
        let generation = CString::new("Jr.").unwrap();
        let code = CString::new("aut").unwrap();

        unsafe {
            let name = relname_name_three_part(forename.as_ptr(), surname.as_ptr(), generation.as_ptr())
                .unwrap();
            assert_eq!(3, relname_num_parts(&name));
            assert_eq!("William H. Keith Jr.", take_string(relname_common(&name)));
            assert_eq!("Keith, William H. Jr.", take_string(relname_file_as(&name)));
            assert_eq!("Keith", take_string(relname_surname(&name)));
            assert_eq!("William H.", take_string(relname_forename(&name)));
            assert_eq!("Jr.", take_string(relname_generation(&name)));

            let related = relname_related_new(&name, code.as_ptr()).unwrap();
            assert_eq!("aut", take_string(relname_related_relator(&related)));
            assert_eq!(
                "William H. Keith Jr. (aut)",
                take_string(relname_related_display(&related))
            );
            assert_eq!(*name, *relname_related_name(&related));

            relname_free_related(Box::into_raw(related));
            relname_free_name(Box::into_raw(name));
        }
    }

    #[test]
    fn failures_are_null() {
        let blank = CString::new(" \t").unwrap();
        let smith = CString::new("Smith").unwrap();
        let bad_code = CString::new("AUT").unwrap();

        unsafe {
            assert!(relname_name_one_part(blank.as_ptr()).is_none());
            assert!(relname_name_two_part(blank.as_ptr(), smith.as_ptr()).is_none());

            let name = relname_name_one_part(smith.as_ptr()).unwrap();
            assert!(relname_related_new(&name, bad_code.as_ptr()).is_none());
            relname_free_name(Box::into_raw(name));

            assert_eq!("", take_string(relname_clean(blank.as_ptr())));
        }
    }
}
