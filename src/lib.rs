//! # inidoc
//!
//! An INI document engine that loads configuration text into an ordered,
//! queryable model and writes it back without losing structure.
//!
//! ## What does it keep?
//!
//! Everything a person editing the file would care about: the order of
//! sections and keys, comments before sections and entries, a leading file
//! comment, repeated keys, key-only lines and multi-line values. Editing one
//! value and saving changes that value and nothing else.
//!
//! ## Key Features
//!
//! - **Order-preserving**: Sections and keys are written back in the order they were read
//! - **Comment-preserving**: Comments stay attached to the item that follows them
//! - **Multikey**: Repeated keys can be kept as an ordered list of values
//! - **Multi-line values**: `key = <<<TAG` blocks on input, generated blocks on output
//! - **Encoding-aware**: UTF-8, UTF-16 and UTF-32 input selected by byte-order mark
//! - **Lenient**: Malformed lines degrade gracefully instead of failing the load
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! inidoc = "0.1"
//! ```
//!
//! ### Loading and Saving
//!
//! ```rust
//! use inidoc::from_str;
//!
//! let text = "\
//! ; database settings
//! [database]
//! host = localhost
//! port = 5432
//! ";
//!
//! let mut ini = from_str(text).unwrap();
//! assert_eq!(ini.get("database", "host"), Some("localhost"));
//! assert_eq!(ini.get_int("database", "port", 0), 5432);
//!
//! ini.set("database", "host", "db.internal");
//! assert_eq!(
//!     ini.save(),
//!     "; database settings\n[database]\nhost = db.internal\nport = 5432\n"
//! );
//! ```
//!
//! ### Repeated Keys
//!
//! ```rust
//! use inidoc::{from_str_with_options, IniOptions};
//!
//! let text = "[mirrors]\nurl = a\nurl = b\nurl = c\n";
//!
//! let single = from_str_with_options(text, IniOptions::new()).unwrap();
//! assert_eq!(single.get_all("mirrors", "url"), vec!["c"]);
//!
//! let multi = from_str_with_options(text, IniOptions::new().with_multikey(true)).unwrap();
//! assert_eq!(multi.get_all("mirrors", "url"), vec!["a", "b", "c"]);
//! ```
//!
//! ### Building Documents with the ini! Macro
//!
//! ```rust
//! use inidoc::ini;
//!
//! let doc = ini! {
//!     "" => { "name" => "demo" },
//!     "server" => { "port" => 8080, "tls" => true },
//! };
//!
//! assert_eq!(doc.get_int("server", "port", 0), 8080);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Loading**: O(n) in the input length, single pass, no backtracking
//! - **Lookup**: O(1) average per section and per key
//! - **Saving**: O(n) in the document size
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Lookups on missing data return `Option` or `-1`, never panic
//! - Only byte-level input and I/O can fail, reported through [`Error`]
//!
//! ## Format Reference
//!
//! See the [`format`] module for the accepted grammar and the exact output
//! layout.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Load, query, edit and save a document
//! - **`multikey.rs`** - Working with repeated keys
//! - **`multiline.rs`** - Multi-line block values
//! - **`typed_values.rs`** - Booleans, integers and floats
//! - **`custom_options.rs`** - Case sensitivity, line endings and encodings
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod key;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod text;
pub mod value;

pub use de::{ParseReport, Parser};
pub use document::Ini;
pub use error::{Error, Result};
pub use key::KeyComparator;
pub use map::{Entry, IniMap, KeyGroup, Section, SetOutcome};
pub use options::{CaseMode, IniOptions, LineEnding};
pub use ser::Serializer;
pub use text::{TextEncoding, Transcoder, UtfTranscoder};

use std::io;

/// Parse a string of INI text into a new document with default options.
///
/// # Examples
///
/// ```rust
/// use inidoc::from_str;
///
/// let ini = from_str("[point]\nx = 1\ny = 2\n").unwrap();
/// assert_eq!(ini.keys("point"), vec!["x", "y"]);
/// ```
///
/// # Errors
///
/// Text input is parsed leniently and does not currently fail; the `Result`
/// keeps the signature in line with the byte-level entry points.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Ini> {
    from_str_with_options(s, IniOptions::default())
}

/// Parse a string of INI text into a new document with custom options.
///
/// # Examples
///
/// ```rust
/// use inidoc::{from_str_with_options, IniOptions};
///
/// let options = IniOptions::new().with_allow_key_only(true);
/// let ini = from_str_with_options("[features]\nfast_mode\n", options).unwrap();
/// assert!(ini.key_exists("features", "fast_mode"));
/// assert_eq!(ini.get("features", "fast_mode"), None);
/// ```
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: IniOptions) -> Result<Ini> {
    let mut ini = Ini::with_options(options);
    ini.load(s)?;
    Ok(ini)
}

/// Parse raw bytes of INI text, honouring a leading byte-order mark.
///
/// # Examples
///
/// ```rust
/// use inidoc::from_slice;
///
/// let ini = from_slice(b"\xEF\xBB\xBF[a]\r\nk = v\r\n").unwrap();
/// assert_eq!(ini.get("a", "k"), Some("v"));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid in their detected encoding.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Ini> {
    let mut ini = Ini::new();
    ini.load_bytes(v)?;
    Ok(ini)
}

/// Read INI text from an I/O stream until EOF.
///
/// # Examples
///
/// ```rust
/// use inidoc::from_reader;
/// use std::io::Cursor;
///
/// let ini = from_reader(Cursor::new(b"[a]\nk = v\n")).unwrap();
/// assert_eq!(ini.get("a", "k"), Some("v"));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the bytes cannot be decoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Ini>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&bytes)
}

/// Render a document as INI text.
///
/// Same as [`Ini::save`].
#[must_use]
pub fn to_string(ini: &Ini) -> String {
    ini.save()
}

/// Write a document to an I/O stream, as [`Ini::to_bytes`] renders it.
///
/// # Examples
///
/// ```rust
/// use inidoc::{from_str, to_writer};
///
/// let ini = from_str("[a]\nk=v").unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &ini).unwrap();
/// assert_eq!(buffer, b"[a]\nk = v\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, ini: &Ini) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(&ini.to_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
