//! Customizing parsing and output with IniOptions.
//!
//! Run with: cargo run --example custom_options

use inidoc::{from_slice, from_str_with_options, CaseMode, IniOptions, LineEnding, TextEncoding};
use std::error::Error;

const INPUT: &str = "\
[Paths]
Root = /srv
root = /tmp
[features]
fast_mode
";

fn main() -> Result<(), Box<dyn Error>> {
    // Case-sensitive names, key-only lines, Windows line endings, no spaces
    let options = IniOptions::new()
        .with_case_mode(CaseMode::Sensitive)
        .with_allow_key_only(true)
        .with_line_ending(LineEnding::CrLf)
        .with_spaces(false);

    let ini = from_str_with_options(INPUT, options)?;
    println!("Root = {:?}, root = {:?}", ini.get("Paths", "Root"), ini.get("Paths", "root"));
    println!("fast_mode present: {}", ini.key_exists("features", "fast_mode"));
    println!("Saved: {:?}", ini.save());

    // Options are plain serde data
    let json = serde_json::to_string(ini.options())?;
    println!("Options as JSON: {json}");

    // Re-encode as UTF-16 with a byte-order mark and read it back
    let utf16 = ini.save_as(TextEncoding::Utf16Le)?;
    let back = from_slice(&utf16)?;
    println!("UTF-16 output: {} bytes, {} sections", utf16.len(), back.sections().len());

    Ok(())
}
