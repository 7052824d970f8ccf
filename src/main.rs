use relname::{clean, Name, RelatedName};
use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;
use tracing_subscriber::EnvFilter;

#[cfg_attr(rustfmt, rustfmt_skip)]
const USAGE: &str = "
Usage:
    relname name <part> [<part> [<part>]]
    relname related <code> <part> [<part> [<part>]]
    relname clean -

With the `name` command, relname builds a one-, two- or three-part name from
its arguments (forename, surname, generation) and prints it as JSON, with both
the common and the file-as form. It exits with status 1 if any part is blank.

With the `related` command, the name is paired with a three-letter MARC relator
code such as `aut` or `edc`, which must be lowercase.

With the `clean` command, relname reads newline-separated strings from stdin
and prints each with its whitespace collapsed and trimmed.

Set RUST_LOG=debug to see why input was rejected.
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() >= 3 && args.len() <= 5 && args[1] == "name" {
        name_mode(&args[2..]);
    } else if args.len() >= 4 && args.len() <= 6 && args[1] == "related" {
        related_mode(&args[2], &args[3..]);
    } else if args.len() == 3 && args[1] == "clean" && args[2] == "-" {
        clean_mode();
    } else {
        eprintln!("{}", USAGE);
        process::exit(64);
    }
}

fn build_name(parts: &[String]) -> relname::Result<Name> {
    match parts {
        [text] => Name::one_part(text),
        [forename, surname] => Name::two_part(forename, surname),
        [forename, surname, generation] => Name::three_part(forename, surname, generation),
        _ => unreachable!("argument count checked in main"),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(e),
    }
}

fn fail<E: std::fmt::Display>(e: E) -> ! {
    eprintln!("{}", e);
    process::exit(1);
}

fn name_mode(parts: &[String]) {
    match build_name(parts) {
        Ok(name) => print_json(&name),
        Err(e) => fail(e),
    }
}

fn related_mode(code: &str, parts: &[String]) {
    match build_name(parts).and_then(|name| RelatedName::new(name, code)) {
        Ok(related) => print_json(&related),
        Err(e) => fail(e),
    }
}

fn clean_mode() {
    let reader = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    for line in reader.lines() {
        match line {
            Ok(input) => {
                if writeln!(&mut stdout, "{}", clean(&input)).is_err() {
                    break;
                }
            }
            Err(e) => fail(e),
        }
    }
}
