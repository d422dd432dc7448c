//! INI serialization.
//!
//! This module provides the [`Serializer`] that turns an [`IniMap`] back
//! into text.
//!
//! ## Overview
//!
//! Output follows the store's order exactly:
//!
//! - **Document comment** first, followed by a blank line
//! - **Unnamed section** next, without a header
//! - **Named sections** in insertion order, separated by blank lines
//! - **Keys** in insertion order, each value of a multikey in insertion order
//!
//! Values containing line breaks are written as generated blocks:
//!
//! ```text
//! key = <<<END_OF_TEXT
//! first line
//! second line
//! END_OF_TEXT
//! ```
//!
//! The tag gets a numeric suffix whenever the value itself contains it.
//!
//! ## Usage
//!
//! ```rust
//! use inidoc::Ini;
//!
//! let mut ini = Ini::new();
//! ini.set("server", "host", "localhost");
//! ini.set("", "name", "demo");
//!
//! assert_eq!(ini.save(), "name = demo\n\n\n[server]\nhost = localhost\n");
//! ```
//!
//! `Ini` also implements `serde::Serialize`, mapping sections to maps of keys:
//!
//! ```rust
//! use inidoc::from_str;
//!
//! let ini = from_str("[server]\nhost = localhost\n").unwrap();
//! let json = serde_json::to_string(&ini).unwrap();
//! assert_eq!(json, r#"{"server":{"host":"localhost"}}"#);
//! ```

use serde::ser::{Serialize, SerializeMap, SerializeSeq};

use crate::map::{Entry, IniMap, KeyGroup, Section};
use crate::options::IniOptions;
use crate::text::{normalize_line_breaks, trim_blanks};
use crate::Ini;

const BLOCK_TAG: &str = "END_OF_TEXT";

/// The INI serializer.
///
/// Created via [`Serializer::new`]; feed it a store with
/// [`write_document`](Serializer::write_document).
pub struct Serializer<'a> {
    output: String,
    options: &'a IniOptions,
    needs_separator: bool,
}

impl<'a> Serializer<'a> {
    pub fn new(options: &'a IniOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            needs_separator: false,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes the whole document: optional leading comment, the unnamed
    /// section, then every named section.
    pub fn write_document(&mut self, map: &IniMap, comment: Option<&str>) {
        if let Some(comment) = comment {
            self.write_comment(comment);
            self.newline();
        }

        let (unnamed, named): (Vec<&Section>, Vec<&Section>) =
            map.iter().partition(|section| section.name().is_empty());
        for section in unnamed.into_iter().chain(named) {
            self.write_section(section);
        }
    }

    fn newline(&mut self) {
        self.output.push_str(self.options.line_ending.as_str());
    }

    /// The unnamed section only gets an explicit `[]` header when it carries
    /// a comment, so the comment stays attached to it on reload.
    fn write_section(&mut self, section: &Section) {
        if !section.name().is_empty() || section.comment().is_some() {
            if self.needs_separator {
                self.newline();
                self.newline();
            }
            if let Some(comment) = section.comment() {
                self.write_comment(comment);
            }
            self.output.push('[');
            self.output.push_str(section.name());
            self.output.push(']');
            self.newline();
            self.needs_separator = true;
        }

        for group in section.keys() {
            self.write_group(group);
        }
    }

    fn write_group(&mut self, group: &KeyGroup) {
        for entry in group.entries() {
            self.write_entry(group.name(), entry);
            self.needs_separator = true;
        }
    }

    fn write_entry(&mut self, key: &str, entry: &Entry) {
        if let Some(comment) = entry.comment() {
            self.write_comment(comment);
        }
        self.output.push_str(key);
        match entry.value() {
            None => {}
            Some(value) if self.needs_block(value) => self.write_block(value),
            Some(value) => {
                self.output.push_str(self.options.separator());
                self.output.push_str(value);
            }
        }
        self.newline();
    }

    /// Line breaks always force a block. With multi-line parsing on, so do
    /// values whose edges would be trimmed or that look like a block opener.
    fn needs_block(&self, value: &str) -> bool {
        value.contains(&['\n', '\r'][..])
            || (self.options.multiline
                && (value.starts_with("<<<") || trim_blanks(value) != value))
    }

    fn write_block(&mut self, value: &str) {
        let tag = block_tag(value);
        self.output.push_str(self.options.separator());
        self.output.push_str("<<<");
        self.output.push_str(&tag);
        self.newline();
        for line in normalize_line_breaks(value).split('\n') {
            self.output.push_str(line);
            self.newline();
        }
        self.output.push_str(&tag);
    }

    fn write_comment(&mut self, comment: &str) {
        for line in normalize_line_breaks(comment).split('\n') {
            let line = trim_blanks(line);
            if line.is_empty() {
                self.output.push(';');
            } else if line.starts_with(';') || line.starts_with('#') {
                self.output.push_str(line);
            } else {
                self.output.push_str("; ");
                self.output.push_str(line);
            }
            self.newline();
        }
    }
}

/// Picks a block terminator that does not occur anywhere in `value`.
///
/// # Examples
///
/// ```rust
/// use inidoc::ser::block_tag;
///
/// assert_eq!(block_tag("plain\ntext"), "END_OF_TEXT");
/// assert_eq!(block_tag("mentions END_OF_TEXT\nhere"), "END_OF_TEXT_1");
/// ```
#[must_use]
pub fn block_tag(value: &str) -> String {
    let mut tag = BLOCK_TAG.to_string();
    let mut suffix = 0u32;
    while value.contains(tag.as_str()) {
        suffix += 1;
        tag = format!("{BLOCK_TAG}_{suffix}");
    }
    tag
}

impl Serialize for Ini {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.map().len()))?;
        for section in self.map() {
            map.serialize_entry(section.name(), &SectionRef(section))?;
        }
        map.end()
    }
}

struct SectionRef<'a>(&'a Section);

impl Serialize for SectionRef<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for group in self.0.keys() {
            map.serialize_entry(group.name(), &GroupRef(group))?;
        }
        map.end()
    }
}

/// A single value serializes as a string (or unit for key-only entries),
/// several values as a sequence.
struct GroupRef<'a>(&'a KeyGroup);

impl Serialize for GroupRef<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.0.len() == 1 {
            return match self.0.first().and_then(Entry::value) {
                Some(value) => serializer.serialize_str(value),
                None => serializer.serialize_unit(),
            };
        }
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for entry in self.0.entries() {
            seq.serialize_element(&entry.value())?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IniOptions, LineEnding};

    fn ini(options: IniOptions) -> Ini {
        Ini::with_options(options)
    }

    #[test]
    fn test_unnamed_section_written_first() {
        let mut doc = Ini::new();
        doc.set("foo", "skey", "sval");
        doc.set("", "rkey", "rval");
        doc.set("bar", "skey", "sval");

        assert_eq!(
            doc.save(),
            "rkey = rval\n\n\n[foo]\nskey = sval\n\n\n[bar]\nskey = sval\n"
        );
    }

    #[test]
    fn test_empty_sections_and_comments() {
        let mut doc = Ini::new();
        doc.set_value("first", None, None, Some("about first"), false);
        doc.set_value("second", Some("k"), Some("v"), Some("; note\n# other"), false);

        assert_eq!(
            doc.save(),
            "; about first\n[first]\n\n\n[second]\n; note\n# other\nk = v\n"
        );
    }

    #[test]
    fn test_unnamed_section_comment_written() {
        let mut doc = Ini::new();
        doc.set_value("", None, None, Some("root notes"), false);
        doc.set("", "k", "v");
        doc.set("s", "x", "1");
        assert_eq!(doc.save(), "; root notes\n[]\nk = v\n\n\n[s]\nx = 1\n");
    }

    #[test]
    fn test_block_output() {
        let mut doc = Ini::new();
        doc.set("s", "k", "a\nb");
        assert_eq!(doc.save(), "[s]\nk = <<<END_OF_TEXT\na\nb\nEND_OF_TEXT\n");
    }

    #[test]
    fn test_block_for_padded_value_only_when_multiline() {
        let mut plain = Ini::new();
        plain.set("s", "k", "  padded ");
        assert_eq!(plain.save(), "[s]\nk =   padded \n");

        let mut multi = ini(IniOptions::new().with_multiline(true));
        multi.set("s", "k", "  padded ");
        assert_eq!(
            multi.save(),
            "[s]\nk = <<<END_OF_TEXT\n  padded \nEND_OF_TEXT\n"
        );
    }

    #[test]
    fn test_line_ending_and_spaces() {
        let mut doc = ini(
            IniOptions::new()
                .with_line_ending(LineEnding::CrLf)
                .with_spaces(false),
        );
        doc.set("s", "a", "1");
        doc.set_value("s", Some("flag"), None, None, false);
        assert_eq!(doc.save(), "[s]\r\na=1\r\nflag\r\n");
    }

    #[test]
    fn test_document_comment_first() {
        let mut doc = Ini::new();
        doc.set_comment(Some("top of file"));
        doc.set("s", "k", "v");
        assert_eq!(doc.save(), "; top of file\n\n[s]\nk = v\n");
    }

    #[test]
    fn test_block_tag_avoids_collisions() {
        assert_eq!(block_tag("END_OF_TEXT END_OF_TEXT_1"), "END_OF_TEXT_2");
    }

    #[test]
    fn test_serde_multikey_and_key_only() {
        let mut doc = ini(IniOptions::new().with_multikey(true));
        doc.set("s", "k", "1");
        doc.set("s", "k", "2");
        doc.set_value("s", Some("flag"), None, None, false);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json, serde_json::json!({"s": {"k": ["1", "2"], "flag": null}}));
    }
}
