#![no_main]
use libfuzzer_sys::fuzz_target;
use relname::{is_clean, Name, RelatedName};

fuzz_target!(|data: ([String; 3], u8, String)| {
    let ([f, s, g], arity, code) = data;
    let name = match arity % 3 {
        0 => Name::one_part(&f),
        1 => Name::two_part(&f, &s),
        _ => Name::three_part(&f, &s, &g),
    };

    if let Ok(name) = name {
        assert_eq!(usize::from(arity % 3) + 1, name.num_parts());
        assert!(is_clean(name.common()));
        assert!(!name.surname().is_empty());
        assert_eq!(name.common().len() + 1, name.file_as().len() + (name.num_parts() == 1) as usize);

        if let Ok(related) = RelatedName::new(name, &code) {
            assert_eq!(code, related.relator());
        }
    }
});
