//! Repeated keys with multikey mode.
//!
//! Run with: cargo run --example multikey

use inidoc::{from_str_with_options, IniOptions};
use std::error::Error;

const MIRRORS: &str = "\
[mirrors]
url = https://a.example.org
url = https://b.example.org
url = https://c.example.org
timeout = 30
";

fn main() -> Result<(), Box<dyn Error>> {
    // Without multikey the last value wins
    let single = from_str_with_options(MIRRORS, IniOptions::new())?;
    println!("single-value: {:?}", single.get_all("mirrors", "url"));

    let mut multi = from_str_with_options(MIRRORS, IniOptions::new().with_multikey(true))?;
    let (first, has_more) = multi.get_with_multiple("mirrors", "url");
    println!("multikey: first = {first:?}, more = {has_more}");

    for (key, value) in multi.get_section("mirrors").unwrap_or_default() {
        println!("  {key} -> {value:?}");
    }

    // Remove one mirror, then replace the timeout outright
    multi.delete_value("mirrors", "url", Some("https://b.example.org"), false);
    multi.set_int("mirrors", "timeout", 60, None, false, true);

    println!("\nSaved:\n{}", multi.save());
    Ok(())
}
