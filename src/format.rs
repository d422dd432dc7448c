//! INI Format Reference
//!
//! This module documents the dialect of INI read and written by this library.
//! It contains no code.
//!
//! # Overview
//!
//! A document is a sequence of lines. Each line is classified on its own,
//! after trimming surrounding whitespace, except inside a multi-line block
//! where lines are taken verbatim.
//!
//! ```text
//! document       := line*
//! line           := blank | comment | header | keyvalue | keyonly | multiline-open
//! blank          := whitespace*
//! comment        := (';' | '#') text
//! header         := '[' name ']'
//! keyvalue       := key '=' value
//! keyonly        := key                    ; only when key-only entries are enabled
//! multiline-open := key '=' '<<<' tag      ; only when multi-line values are enabled
//! ```
//!
//! Lines may end in `\n`, `\r\n` or `\r`, mixed freely.
//!
//! # Sections
//!
//! ```text
//! [database]
//! host = localhost
//! ```
//!
//! **Rules**:
//! - The name is everything between `[` and the *last* `]`, trimmed
//! - Text after the last `]` is ignored
//! - A header without `]` uses the rest of the line as the name
//! - Entries before the first header belong to the unnamed section `""`
//! - A repeated header reopens the existing section; it is never duplicated
//!
//! # Entries
//!
//! The line is split at the first `=`. Key and value are trimmed.
//!
//! | Line | Key | Value |
//! |------|-----|-------|
//! | `name = Alice` | `name` | `Alice` |
//! | `url=a=b` | `url` | `a=b` |
//! | `empty =` | `empty` | `` (empty string) |
//! | `= orphan` | skipped | |
//! | `flag` | `flag` (key-only mode) | none |
//!
//! A line without `=` is ignored unless key-only entries are enabled. A
//! key-only entry has no value at all, which is different from an empty one.
//!
//! ## Repeated Keys
//!
//! By default a repeated key updates the earlier entry in place, keeping its
//! position. In multikey mode each occurrence is kept:
//!
//! ```text
//! [a]
//! k = 1
//! k = 2
//! ```
//!
//! | Mode | `get("a", "k")` | `get_all("a", "k")` |
//! |------|-----------------|---------------------|
//! | default | `2` | `[2]` |
//! | multikey | `1` | `[1, 2]` |
//!
//! # Name Comparison
//!
//! Section and key names compare ASCII case-insensitively by default, so
//! `[Net]` and `[NET]` are the same section. The spelling first seen is the
//! one written back. With case-sensitive comparison names are matched byte
//! for byte. Values are always compared exactly.
//!
//! # Comments
//!
//! Comment lines are kept verbatim, marker included, and attach to the next
//! section header or entry. Consecutive comment lines form one comment.
//!
//! ```text
//! ; file header          <- document comment (followed by a blank line)
//!
//! ; about the section    <- section comment
//! [server]
//! # about the key        <- entry comment
//! port = 8080
//! ```
//!
//! A comment block at the very start of the input that is followed by a blank
//! line becomes the *document comment*. Comments at the end of the input,
//! with nothing after them, are dropped.
//!
//! A `;` or `#` later in a line is part of the value. There are no inline
//! comments.
//!
//! # Multi-line Values
//!
//! With multi-line values enabled, a value of `<<<TAG` opens a block:
//!
//! ```text
//! motd = <<<END
//! Welcome!
//!   Indentation is kept.
//! END
//! ```
//!
//! **Rules**:
//! - Lines inside the block are copied verbatim, blank lines included
//! - The block ends at the first line that trims to exactly `TAG`
//! - The final line break before the terminator is not part of the value
//! - `<<<` with an empty tag ends at the first blank line
//! - A block still open at the end of input takes the rest of the input
//!
//! Without multi-line values enabled, `<<<END` is an ordinary value.
//!
//! # Output Layout
//!
//! [`Ini::save`](crate::Ini::save) writes:
//!
//! 1. The document comment, then a blank line
//! 2. The unnamed section's entries, without a header unless the section has a
//!    comment, in which case the comment and `[]` come first
//! 3. Each named section, preceded by two blank lines when anything came before
//!    it, as its comment, then `[name]`, then its entries
//!
//! Each entry is its comment (if any) followed by `key = value`, `key=value`
//! when spaces are disabled, or just `key` for key-only entries. Comments
//! without a leading `;` or `#` get `; ` prepended.
//!
//! Values that contain line breaks are written as blocks with a generated
//! tag, `END_OF_TEXT` or `END_OF_TEXT_<n>` when the value contains that text.
//! With multi-line values enabled, values with surrounding whitespace or
//! starting with `<<<` are written as blocks too, so they survive a reload.
//!
//! ```text
//! name = demo
//!
//!
//! [server]
//! motd = <<<END_OF_TEXT
//! line one
//! line two
//! END_OF_TEXT
//! ```
//!
//! # Encodings
//!
//! | Leading bytes | Encoding |
//! |---------------|----------|
//! | `EF BB BF` | UTF-8 |
//! | `FF FE 00 00` | UTF-32LE |
//! | `00 00 FE FF` | UTF-32BE |
//! | `FF FE` | UTF-16LE |
//! | `FE FF` | UTF-16BE |
//! | none | UTF-8 |
//!
//! Output is UTF-8 unless another encoding is requested with
//! [`Ini::save_as`](crate::Ini::save_as).
