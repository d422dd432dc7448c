//! The [`Ini`] document.
//!
//! `Ini` ties together the options, the entry store and the text engine. It is
//! the type most users work with: load text into it, query and mutate it, and
//! save it back.
//!
//! ## Loading
//!
//! Loads are additive. Loading a second text into a document merges it into
//! what is already there, as if the texts had been concatenated. A leading
//! document comment is only recognised when loading into an empty document;
//! later loads attach it to whatever follows.
//!
//! ```rust
//! use inidoc::Ini;
//!
//! let mut ini = Ini::new();
//! ini.load("[db]\nhost = a\n").unwrap();
//! ini.load("[db]\nport = 5432\n[cache]\nttl = 60\n").unwrap();
//!
//! assert_eq!(ini.sections(), vec!["db", "cache"]);
//! assert_eq!(ini.keys("db"), vec!["host", "port"]);
//! ```
//!
//! ## Byte input
//!
//! [`Ini::load_bytes`] accepts raw file contents. A byte-order mark selects
//! UTF-8, UTF-16 or UTF-32; without one the input must be UTF-8.
//!
//! ```rust
//! use inidoc::{Ini, TextEncoding};
//!
//! let mut source = Ini::new();
//! source.set("greeting", "text", "こんにちは");
//! let bytes = source.save_as(TextEncoding::Utf16Be).unwrap();
//!
//! let mut copy = Ini::new();
//! copy.load_bytes(&bytes).unwrap();
//! assert_eq!(copy.get("greeting", "text"), Some("こんにちは"));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::de::Parser;
use crate::map::{IniMap, Section, SetOutcome};
use crate::options::{IniOptions, LineEnding};
use crate::ser::Serializer;
use crate::text::{decode_document, TextEncoding, Transcoder, UtfTranscoder};
use crate::{Error, Result};

/// An INI document.
///
/// # Examples
///
/// ```rust
/// use inidoc::{Ini, SetOutcome};
///
/// let mut ini = Ini::new();
/// assert_eq!(ini.set("server", "port", "8080"), SetOutcome::Inserted);
/// assert_eq!(ini.set("SERVER", "Port", "9090"), SetOutcome::Updated);
///
/// assert_eq!(ini.get("server", "port"), Some("9090"));
/// assert_eq!(ini.get_or("server", "host", "localhost"), "localhost");
/// assert_eq!(ini.save(), "[server]\nport = 9090\n");
/// ```
#[derive(Clone, Debug)]
pub struct Ini {
    options: IniOptions,
    map: IniMap,
    comment: Option<String>,
}

impl Ini {
    /// Creates an empty document with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(IniOptions::default())
    }

    /// Creates an empty document with the given options.
    ///
    /// The case mode is fixed from here on.
    #[must_use]
    pub fn with_options(options: IniOptions) -> Self {
        let map = IniMap::new(options.case_mode.comparator(), options.multikey);
        Ini {
            options,
            map,
            comment: None,
        }
    }

    #[must_use]
    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    /// Read-only access to the underlying store.
    #[must_use]
    pub fn map(&self) -> &IniMap {
        &self.map
    }

    /// Switches multikey mode for later loads and mutations.
    ///
    /// Keys that already hold several values keep them.
    pub fn set_multikey(&mut self, multikey: bool) {
        self.options.multikey = multikey;
        self.map.set_multikey(multikey);
    }

    pub fn set_multiline(&mut self, multiline: bool) {
        self.options.multiline = multiline;
    }

    pub fn set_allow_key_only(&mut self, allow_key_only: bool) {
        self.options.allow_key_only = allow_key_only;
    }

    pub fn set_spaces(&mut self, spaces: bool) {
        self.options.spaces = spaces;
    }

    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.options.line_ending = line_ending;
    }

    pub fn set_write_bom(&mut self, write_bom: bool) {
        self.options.write_bom = write_bom;
    }

    /// Parses `text` and merges it into the document.
    ///
    /// A leading U+FEFF is ignored. Parsing is lenient, so text input never
    /// fails; the `Result` matches the byte-level loaders.
    ///
    /// # Errors
    ///
    /// Currently none for `&str` input.
    pub fn load(&mut self, text: &str) -> Result<()> {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        let report = Parser::new(text, self.options.multiline, self.options.allow_key_only)
            .with_document_comment(self.comment.is_none() && self.map.is_empty())
            .parse_into(&mut self.map);

        if report.document_comment.is_some() {
            self.comment = report.document_comment;
        }
        tracing::debug!(
            lines = report.lines,
            entries = report.entries,
            sections = self.map.len(),
            "loaded INI text"
        );
        Ok(())
    }

    /// Decodes raw bytes and merges them into the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid in the encoding their
    /// byte-order mark announces, or not UTF-8 when there is none.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.load_bytes_with(bytes, &UtfTranscoder)
    }

    /// Like [`load_bytes`](Self::load_bytes), converting non-UTF-8 input with
    /// a custom transcoder.
    ///
    /// # Errors
    ///
    /// Returns whatever decoding or the transcoder reports.
    pub fn load_bytes_with(&mut self, bytes: &[u8], transcoder: &dyn Transcoder) -> Result<()> {
        let text = decode_document(bytes, transcoder)?;
        self.load(&text)
    }

    /// Renders the document as text.
    #[must_use]
    pub fn save(&self) -> String {
        let mut serializer = Serializer::new(&self.options);
        serializer.write_document(&self.map, self.comment.as_deref());
        let output = serializer.into_inner();
        tracing::debug!(bytes = output.len(), sections = self.map.len(), "saved INI text");
        output
    }

    /// Renders the document as UTF-8 bytes, with a byte-order mark when
    /// [`IniOptions::write_bom`] is set.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let text = self.save();
        let mut bytes = Vec::with_capacity(text.len() + 3);
        if self.options.write_bom {
            bytes.extend_from_slice(TextEncoding::Utf8.bom());
        }
        bytes.extend_from_slice(text.as_bytes());
        bytes
    }

    /// Renders the document in another encoding.
    ///
    /// UTF-16 and UTF-32 output always starts with a byte-order mark so that
    /// [`load_bytes`](Self::load_bytes) can read it back; UTF-8 output follows
    /// [`IniOptions::write_bom`].
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails.
    pub fn save_as(&self, encoding: TextEncoding) -> Result<Vec<u8>> {
        self.save_as_with(encoding, &UtfTranscoder)
    }

    /// Like [`save_as`](Self::save_as) with a custom transcoder.
    ///
    /// # Errors
    ///
    /// Returns whatever the transcoder reports.
    pub fn save_as_with(&self, encoding: TextEncoding, transcoder: &dyn Transcoder) -> Result<Vec<u8>> {
        if encoding == TextEncoding::Utf8 {
            return Ok(self.to_bytes());
        }
        let encoded = transcoder.convert(self.save().as_bytes(), TextEncoding::Utf8, encoding)?;
        let mut bytes = encoding.bom().to_vec();
        bytes.extend(encoded);
        Ok(bytes)
    }

    /// First value of a key, `None` if missing or key-only.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.map.get_value(section, key)
    }

    /// First value of a key, or `default`.
    #[must_use]
    pub fn get_or<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key).unwrap_or(default)
    }

    /// First value of a key and whether the key holds more than one.
    #[must_use]
    pub fn get_with_multiple(&self, section: &str, key: &str) -> (Option<&str>, bool) {
        self.map.get_value_with_multiple(section, key)
    }

    /// All values of a key in insertion order.
    #[must_use]
    pub fn get_all(&self, section: &str, key: &str) -> Vec<&str> {
        self.map.get_all_values(section, key)
    }

    /// Every `(key, value)` pair of a section in insertion order, duplicates
    /// included. `None` if the section does not exist.
    #[must_use]
    pub fn get_section(&self, section: &str) -> Option<Vec<(&str, Option<&str>)>> {
        self.map.get_section(section)
    }

    #[must_use]
    pub fn section(&self, section: &str) -> Option<&Section> {
        self.map.section(section)
    }

    /// Sets `key = value`, creating the section and key as needed.
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> SetOutcome {
        self.set_value(section, Some(key), Some(value), None, false)
    }

    /// The general mutation. See [`IniMap::set_value`] for the rules.
    pub fn set_value(
        &mut self,
        section: &str,
        key: Option<&str>,
        value: Option<&str>,
        comment: Option<&str>,
        force_replace: bool,
    ) -> SetOutcome {
        self.map.set_value(section, key, value, comment, force_replace)
    }

    /// Creates an empty section, or touches an existing one.
    pub fn add_section(&mut self, section: &str) -> SetOutcome {
        self.set_value(section, None, None, None, false)
    }

    /// Deletes a key, or the whole section when `key` is `None`.
    ///
    /// Returns `false` if nothing matched.
    pub fn delete(&mut self, section: &str, key: Option<&str>, remove_if_empty: bool) -> bool {
        match key {
            Some(key) => self.map.delete_key(section, key, remove_if_empty),
            None => self.map.delete_section(section),
        }
    }

    /// Deletes the values of `key` equal to `value`; all of them when `value`
    /// is `None`.
    pub fn delete_value(
        &mut self,
        section: &str,
        key: &str,
        value: Option<&str>,
        remove_if_empty: bool,
    ) -> bool {
        self.map.delete_value(section, key, value, remove_if_empty)
    }

    #[must_use]
    pub fn section_exists(&self, section: &str) -> bool {
        self.map.section_exists(section)
    }

    #[must_use]
    pub fn key_exists(&self, section: &str, key: &str) -> bool {
        self.map.key_exists(section, key)
    }

    /// Number of unique keys in a section, or `-1` if it does not exist.
    #[must_use]
    pub fn section_size(&self, section: &str) -> isize {
        self.map.section_size(section)
    }

    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        self.map.section_names()
    }

    #[must_use]
    pub fn keys(&self, section: &str) -> Vec<&str> {
        self.map.key_names(section)
    }

    /// Removes all sections and the document comment. Options are kept.
    pub fn reset(&mut self) {
        self.map.clear();
        self.comment = None;
    }

    /// `true` when the document holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The leading document comment, markers included.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<&str>) {
        self.comment = comment.map(str::to_string);
    }
}

impl Default for Ini {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Ini {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s)
    }
}

impl fmt::Display for Ini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.save())
    }
}
