#![no_main]
use libfuzzer_sys::fuzz_target;
use relname::{clean, is_clean};

fuzz_target!(|data: &str| {
    let once = clean(data);
    assert!(is_clean(&once));
    assert_eq!(once, clean(&once));
});
