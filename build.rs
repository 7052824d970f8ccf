use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct RelatorData {
    terms_by_relator: BTreeMap<String, String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/relator_data.json")?;
    let relators: RelatorData = serde_json::from_str(&json)?;

    // The lookup key is whatever `Relator::as_str` returns, so a key that
    // could never be parsed as a relator would be dead weight
    if let Some(bad) = relators
        .terms_by_relator
        .keys()
        .find(|code| code.len() != 3 || !code.bytes().all(|b| b.is_ascii_lowercase()))
    {
        return Err(format!("bad relator code {:?} in build/relator_data.json", bad).into());
    }

    write_map(
        &output.join("terms_by_relator.rs"),
        &relators.terms_by_relator,
        |v| format!("{:?}", v),
    )?;

    Ok(())
}

fn write_map<'a, F>(output: &Path, map: &'a BTreeMap<String, String>, transform: F) -> Result<()>
where
    F: Fn(&'a String) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.to_string(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
