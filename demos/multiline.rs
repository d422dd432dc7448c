//! Multi-line block values.
//!
//! Run with: cargo run --example multiline

use inidoc::{from_str_with_options, IniOptions};
use std::error::Error;

const MOTD: &str = "\
[banner]
motd = <<<END
Welcome to the build server.
  Please be gentle.
END
footer = bye
";

fn main() -> Result<(), Box<dyn Error>> {
    let options = IniOptions::new().with_multiline(true);
    let mut ini = from_str_with_options(MOTD, options.clone())?;

    println!("motd:\n{}\n", ini.get_or("banner", "motd", ""));

    // Values with line breaks are written back as generated blocks
    ini.set("banner", "motd", "Maintenance tonight.\nEND_OF_TEXT is just text here.");
    let saved = ini.save();
    println!("Saved:\n{saved}");

    let reloaded = from_str_with_options(&saved, options)?;
    assert_eq!(reloaded.get("banner", "motd"), ini.get("banner", "motd"));
    println!("✓ Round-trip successful");

    Ok(())
}
