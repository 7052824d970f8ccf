use alloc_counter::{count_alloc, AllocCounterSystem};
use relname::{clean, Name, RelatedName};

#[global_allocator]
static A: AllocCounterSystem = AllocCounterSystem;

// Long enough that the text lives on the heap rather than inline
const FORENAME: &str = "Sir Terence David John";
const SURNAME: &str = "Pratchett-Montgomery-Wolfe";

#[test]
fn accessors_do_not_allocate() {
    let name = Name::three_part(FORENAME, SURNAME, "III").unwrap();
    let org = Name::one_part("The Science Fiction Book Club of America").unwrap();
    let related = RelatedName::new(name.clone(), "aut").unwrap();

    let (counts, total) = count_alloc(|| {
        name.common().len()
            + name.surname().len()
            + name.forename().len()
            + name.generation().len()
            + name.num_parts()
            + org.file_as().len()
            + related.relator().len()
            + related.surname().len()
            + Name::EMPTY.file_as().len()
    });
    assert_eq!((0, 0, 0), counts);
    assert_eq!(176, total);
}

#[test]
fn file_as_allocates_once() {
    let name = Name::three_part(FORENAME, SURNAME, "III").unwrap();
    let (counts, file_as) = count_alloc(|| name.file_as().into_owned());
    assert_eq!((1, 0, 0), counts);
    assert_eq!(
        "Pratchett-Montgomery-Wolfe, Sir Terence David John III",
        file_as
    );
}

#[test]
fn cleaning_clean_text_does_not_allocate() {
    let text = "William H. Keith Jr. and the Science Fiction Book Club";
    let (counts, cleaned) = count_alloc(|| clean(text).len());
    assert_eq!((0, 0, 0), counts);
    assert_eq!(text.len(), cleaned);
}

#[test]
fn short_names_are_inline() {
    let (counts, name) = count_alloc(|| Name::two_part("Dave", "Freer").unwrap());
    assert_eq!((0, 0, 0), counts);
    assert_eq!("Freer, Dave", name.file_as());
}
