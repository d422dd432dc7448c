//! Booleans, integers and floats on top of text values.
//!
//! Run with: cargo run --example typed_values

use inidoc::{from_str, Ini};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let ini = from_str("[features]\ncache = yes\nverbose = off\nmask = 0x1F\nratio = 2.5e-1\nbroken = 12abc\n")?;

    println!("cache   = {}", ini.get_bool("features", "cache", false));
    println!("verbose = {}", ini.get_bool("features", "verbose", true));
    println!("mask    = {}", ini.get_int("features", "mask", 0));
    println!("ratio   = {}", ini.get_float("features", "ratio", 1.0));
    println!("broken  = {} (default)", ini.get_int("features", "broken", -1));

    let mut out = Ini::new();
    out.set_bool("flags", "enabled", true, Some("turned on by the installer"), false);
    out.set_int("flags", "mode", 0o755, None, false, false);
    out.set_int("flags", "color", 0xFF8800, None, true, false);
    out.set_float("flags", "scale", 1.25, None, false);

    println!("\nSaved:\n{}", out.save());
    Ok(())
}
