//! Load, query, edit and save an INI document.
//!
//! Run with: cargo run --example simple

use inidoc::from_str;
use std::error::Error;

const CONFIG: &str = "\
; application settings

[server]
; address to bind
host = 127.0.0.1
port = 8080

[logging]
level = info
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut ini = from_str(CONFIG)?;

    println!("Sections: {:?}", ini.sections());
    println!("server.host = {:?}", ini.get("server", "host"));
    println!("server.port = {}", ini.get_int("server", "port", 80));
    println!("logging.file = {}", ini.get_or("logging", "file", "<stderr>"));

    // Update in place; comments and ordering stay untouched
    ini.set("server", "port", "9090");
    ini.set("logging", "file", "/var/log/app.log");
    ini.delete("logging", Some("level"), false);

    println!("\nSaved:\n{}", ini.save());

    let reloaded = from_str(&ini.save())?;
    assert_eq!(reloaded.get("server", "port"), Some("9090"));
    println!("✓ Round-trip successful");

    Ok(())
}
