//! INI parsing.
//!
//! This module provides the [`Parser`], a line-oriented state machine that
//! feeds an [`IniMap`].
//!
//! ## Overview
//!
//! Each physical line is classified once:
//!
//! - **Blank**: skipped
//! - **Comment** (`;` or `#` first): collected and attached to whatever comes next
//! - **Header** (`[` first): switches the current section
//! - **Key/value** (contains `=`): split at the first `=`, both sides trimmed
//!   of spaces and tabs
//! - **Key-only** (no `=`): kept only when key-only entries are enabled
//!
//! With multi-line values enabled, `key = <<<TAG` switches the parser into a
//! block state that copies lines verbatim until one trims to exactly `TAG`.
//!
//! ## Leniency
//!
//! The parser never rejects input. A header without `]` uses the rest of the
//! line as its name, and a block that is still open at the end of input takes
//! everything after the opener as its value. Both cases are logged at `debug`.
//!
//! ## Usage
//!
//! Most users should go through [`Ini::load`](crate::Ini::load):
//!
//! ```rust
//! use inidoc::from_str;
//!
//! let ini = from_str("; greeting\n[hello]\nname = world\n").unwrap();
//! assert_eq!(ini.get("hello", "name"), Some("world"));
//! ```
//!
//! ## Direct Parser Usage
//!
//! ```rust
//! use inidoc::{IniMap, KeyComparator, Parser};
//!
//! let mut map = IniMap::new(KeyComparator::CaseInsensitive, false);
//! let report = Parser::new("root = 1\n[a]\nk = <<<END\n", true, false).parse_into(&mut map);
//!
//! assert_eq!(map.get_value("", "root"), Some("1"));
//! assert_eq!(report.entries, 2);
//! ```

use crate::map::IniMap;
use crate::text::{trim_blanks, Lines};

const BLOCK_OPEN: &str = "<<<";

/// A `key = <<<TAG` value being collected.
#[derive(Debug)]
struct Block<'a> {
    section: &'a str,
    key: &'a str,
    tag: &'a str,
    value: String,
    comment: Option<String>,
    opened_at: usize,
}

#[derive(Debug)]
enum State<'a> {
    /// Before the first header; entries go to the unnamed section.
    OutsideSection,
    InSection(&'a str),
    InMultilineBlock(Block<'a>),
}

/// Summary of one parser run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Physical lines consumed.
    pub lines: usize,
    /// Entries handed to the store, duplicates included.
    pub entries: usize,
    /// A leading comment block followed by a blank line, if one was found
    /// and document comments were enabled.
    pub document_comment: Option<String>,
}

/// The INI line parser.
///
/// Created via [`Parser::new`] and consumed by [`Parser::parse_into`].
pub struct Parser<'a> {
    input: &'a str,
    multiline: bool,
    allow_key_only: bool,
    document_comment: bool,
    state: State<'a>,
    pending_comment: Option<String>,
    seen_content: bool,
    line: usize,
    report: ParseReport,
}

impl<'a> Parser<'a> {
    /// Creates a parser over already-decoded text.
    #[must_use]
    pub fn new(input: &'a str, multiline: bool, allow_key_only: bool) -> Self {
        Parser {
            input,
            multiline,
            allow_key_only,
            document_comment: false,
            state: State::OutsideSection,
            pending_comment: None,
            seen_content: false,
            line: 0,
            report: ParseReport::default(),
        }
    }

    /// Lets a leading comment block followed by a blank line become the
    /// document comment instead of attaching to the first entry.
    #[must_use]
    pub fn with_document_comment(mut self, enabled: bool) -> Self {
        self.document_comment = enabled;
        self
    }

    /// Parses every line into `map`, merging with whatever it already holds.
    pub fn parse_into(mut self, map: &mut IniMap) -> ParseReport {
        for raw in Lines::new(self.input) {
            self.line += 1;
            let state = std::mem::replace(&mut self.state, State::OutsideSection);
            self.state = match state {
                State::InMultilineBlock(block) => self.block_line(block, raw, map),
                state => self.line_in(state, raw, map),
            };
        }

        let state = std::mem::replace(&mut self.state, State::OutsideSection);
        if let State::InMultilineBlock(block) = state {
            tracing::debug!(
                line = block.opened_at,
                tag = block.tag,
                "multi-line block not terminated, keeping the remainder as its value"
            );
            self.close_block(block, map);
        }
        if let Some(comment) = self.pending_comment.take() {
            tracing::debug!(comment = comment.as_str(), "dropping trailing comment");
        }

        self.report.lines = self.line;
        self.report
    }

    fn line_in(&mut self, state: State<'a>, raw: &'a str, map: &mut IniMap) -> State<'a> {
        let line = trim_blanks(raw);

        if line.is_empty() {
            if self.document_comment && !self.seen_content && self.pending_comment.is_some() {
                self.report.document_comment = self.pending_comment.take();
                self.document_comment = false;
            }
            return state;
        }

        if line.starts_with(';') || line.starts_with('#') {
            tracing::trace!(line = self.line, "comment");
            match &mut self.pending_comment {
                Some(comment) => {
                    comment.push('\n');
                    comment.push_str(line);
                }
                None => self.pending_comment = Some(line.to_string()),
            }
            return state;
        }

        self.seen_content = true;

        if let Some(rest) = line.strip_prefix('[') {
            let name = match rest.rfind(']') {
                Some(end) => &rest[..end],
                None => {
                    tracing::debug!(line = self.line, "section header without closing bracket");
                    rest
                }
            };
            let name = trim_blanks(name);
            tracing::trace!(line = self.line, section = name, "section header");
            let comment = self.pending_comment.take();
            map.set_value(name, None, None, comment.as_deref(), false);
            return State::InSection(name);
        }

        let section = match &state {
            State::InSection(name) => *name,
            _ => "",
        };

        match line.split_once('=') {
            Some((key, value)) => {
                let key = trim_blanks(key);
                let value = trim_blanks(value);
                if key.is_empty() {
                    tracing::debug!(line = self.line, "skipping entry with empty key");
                    return state;
                }
                if self.multiline {
                    if let Some(tag) = value.strip_prefix(BLOCK_OPEN) {
                        tracing::trace!(line = self.line, key, "multi-line block opened");
                        return State::InMultilineBlock(Block {
                            section,
                            key,
                            tag: trim_blanks(tag),
                            value: String::new(),
                            comment: self.pending_comment.take(),
                            opened_at: self.line,
                        });
                    }
                }
                tracing::trace!(line = self.line, key, "entry");
                self.emit(map, section, key, Some(value));
            }
            None if self.allow_key_only => {
                tracing::trace!(line = self.line, key = line, "key-only entry");
                self.emit(map, section, line, None);
            }
            None => tracing::trace!(line = self.line, "ignoring line without '='"),
        }
        state
    }

    fn block_line(&mut self, mut block: Block<'a>, raw: &'a str, map: &mut IniMap) -> State<'a> {
        if trim_blanks(raw) == block.tag {
            let section = block.section;
            self.close_block(block, map);
            return State::InSection(section);
        }
        block.value.push_str(raw);
        block.value.push('\n');
        State::InMultilineBlock(block)
    }

    fn close_block(&mut self, mut block: Block<'a>, map: &mut IniMap) {
        if block.value.ends_with('\n') {
            block.value.pop();
        }
        self.report.entries += 1;
        map.set_value(
            block.section,
            Some(block.key),
            Some(&block.value),
            block.comment.as_deref(),
            false,
        );
    }

    fn emit(&mut self, map: &mut IniMap, section: &str, key: &str, value: Option<&str>) {
        let comment = self.pending_comment.take();
        self.report.entries += 1;
        map.set_value(section, Some(key), value, comment.as_deref(), false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyComparator;

    fn parse(input: &str, multiline: bool, key_only: bool) -> IniMap {
        let mut map = IniMap::new(KeyComparator::CaseInsensitive, false);
        Parser::new(input, multiline, key_only).parse_into(&mut map);
        map
    }

    #[test]
    fn test_implicit_section() {
        let map = parse("a = 1\n[s]\nb = 2\n", false, false);
        assert_eq!(map.get_value("", "a"), Some("1"));
        assert_eq!(map.get_value("s", "b"), Some("2"));
        assert_eq!(map.section_names(), vec!["", "s"]);
    }

    #[test]
    fn test_header_trimming_and_malformed() {
        let map = parse("[  spaced  ]\nk=v\n[open\nk=w\n", false, false);
        assert_eq!(map.get_value("spaced", "k"), Some("v"));
        assert_eq!(map.get_value("open", "k"), Some("w"));
    }

    #[test]
    fn test_header_uses_last_bracket() {
        let map = parse("[a[b]c]\nk=v\n", false, false);
        assert!(map.section_exists("a[b]c"));
    }

    #[test]
    fn test_comments_attach_to_next_item() {
        let map = parse("; one\n# two\n[s]\n; three\nk = v\n", false, false);
        assert_eq!(map.section("s").unwrap().comment(), Some("; one\n# two"));
        assert_eq!(map.get_entry("s", "k").unwrap().comment(), Some("; three"));
    }

    #[test]
    fn test_document_comment_split_by_blank_line() {
        let mut map = IniMap::default();
        let report = Parser::new("; file header\n\n; section note\n[s]\n", false, false)
            .with_document_comment(true)
            .parse_into(&mut map);
        assert_eq!(report.document_comment.as_deref(), Some("; file header"));
        assert_eq!(map.section("s").unwrap().comment(), Some("; section note"));
    }

    #[test]
    fn test_document_comment_disabled() {
        let mut map = IniMap::default();
        let report = Parser::new("; header\n\nk = v\n", false, false).parse_into(&mut map);
        assert_eq!(report.document_comment, None);
        assert_eq!(map.get_entry("", "k").unwrap().comment(), Some("; header"));
    }

    #[test]
    fn test_empty_key_skipped() {
        let map = parse("[s]\n= orphan\nk = v\n", false, false);
        assert_eq!(map.key_names("s"), vec!["k"]);
    }

    #[test]
    fn test_key_only_toggle() {
        let map = parse("[s]\nflag\n", false, true);
        assert!(map.key_exists("s", "flag"));
        let map = parse("[s]\nflag\n", false, false);
        assert!(!map.key_exists("s", "flag"));
        assert_eq!(map.section_size("s"), 0);
    }

    #[test]
    fn test_block_basic() {
        let map = parse("[s]\nk = <<<END\nLine 1\n  Line 2\nEND\nafter = 1\n", true, false);
        assert_eq!(map.get_value("s", "k"), Some("Line 1\n  Line 2"));
        assert_eq!(map.get_value("s", "after"), Some("1"));
    }

    #[test]
    fn test_block_disabled_is_plain_text() {
        let map = parse("[s]\nk = <<<END\nLine\nEND\n", false, false);
        assert_eq!(map.get_value("s", "k"), Some("<<<END"));
    }

    #[test]
    fn test_block_unterminated_takes_remainder() {
        let mut map = IniMap::default();
        let report = Parser::new("[s]\nk = <<<END\ncontent\n[t]\n", true, false).parse_into(&mut map);
        assert_eq!(map.get_value("s", "k"), Some("content\n[t]"));
        assert!(!map.section_exists("t"));
        assert_eq!(report.lines, 4);
        assert_eq!(report.entries, 1);
    }

    #[test]
    fn test_block_empty_tag_closes_on_blank_line() {
        let map = parse("[s]\nk = <<<\ncontent\n\nnext = 1\n", true, false);
        assert_eq!(map.get_value("s", "k"), Some("content"));
        assert_eq!(map.get_value("s", "next"), Some("1"));
    }

    #[test]
    fn test_block_keeps_comment() {
        let map = parse("[s]\n; about k\nk = <<<E\nx\nE\n", true, false);
        assert_eq!(map.get_entry("s", "k").unwrap().comment(), Some("; about k"));
    }
}
