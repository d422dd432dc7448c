//! Byte-level input handling: encodings, byte-order marks and line splitting.
//!
//! The engine works on exactly one representation, a UTF-8 `str`. Everything
//! else is converted at the boundary:
//!
//! - [`decode_document`] sniffs a byte-order mark, strips it, and hands
//!   UTF-16/UTF-32 input to a [`Transcoder`].
//! - [`Lines`] splits text on `\n`, `\r\n` and `\r` alike.
//! - [`normalize_line_breaks`] folds the same three forms into `\n`.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::text::{decode_document, Lines, UtfTranscoder};
//!
//! let bytes = b"\xEF\xBB\xBF[a]\r\nk=1\rj=2\n";
//! let text = decode_document(bytes, &UtfTranscoder).unwrap();
//! let lines: Vec<&str> = Lines::new(&text).collect();
//! assert_eq!(lines, vec!["[a]", "k=1", "j=2"]);
//! ```

use std::borrow::Cow;

use crate::{Error, Result};

/// Text encodings understood by [`UtfTranscoder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl TextEncoding {
    /// Returns the conventional name of this encoding.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf32Le => "UTF-32LE",
            TextEncoding::Utf32Be => "UTF-32BE",
        }
    }

    /// Returns the byte-order mark for this encoding.
    #[must_use]
    pub const fn bom(&self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8 => b"\xEF\xBB\xBF",
            TextEncoding::Utf16Le => b"\xFF\xFE",
            TextEncoding::Utf16Be => b"\xFE\xFF",
            TextEncoding::Utf32Le => b"\xFF\xFE\x00\x00",
            TextEncoding::Utf32Be => b"\x00\x00\xFE\xFF",
        }
    }
}

/// Converts a whole buffer between encodings.
///
/// Implement this to plug in a different conversion library; the document
/// only ever asks for conversions to or from UTF-8.
pub trait Transcoder {
    fn convert(&self, bytes: &[u8], source: TextEncoding, target: TextEncoding)
        -> Result<Vec<u8>>;
}

/// Strict UTF-8/16/32 transcoder. Malformed input is an error, never replaced.
#[derive(Clone, Copy, Debug, Default)]
pub struct UtfTranscoder;

impl Transcoder for UtfTranscoder {
    fn convert(
        &self,
        bytes: &[u8],
        source: TextEncoding,
        target: TextEncoding,
    ) -> Result<Vec<u8>> {
        if source == target {
            return Ok(bytes.to_vec());
        }
        let text = decode(bytes, source)?;
        Ok(encode(&text, target))
    }
}

fn decode(bytes: &[u8], source: TextEncoding) -> Result<Cow<'_, str>> {
    match source {
        TextEncoding::Utf8 => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|e| Error::invalid_utf8(e.valid_up_to())),
        TextEncoding::Utf16Le => decode_utf16(bytes, encoding_rs::UTF_16LE, source),
        TextEncoding::Utf16Be => decode_utf16(bytes, encoding_rs::UTF_16BE, source),
        TextEncoding::Utf32Le => decode_utf32(bytes, u32::from_le_bytes, source),
        TextEncoding::Utf32Be => decode_utf32(bytes, u32::from_be_bytes, source),
    }
}

fn decode_utf16<'a>(
    bytes: &'a [u8],
    encoding: &'static encoding_rs::Encoding,
    source: TextEncoding,
) -> Result<Cow<'a, str>> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| Error::encoding(source.name(), "invalid code unit sequence"))
}

fn decode_utf32(
    bytes: &[u8],
    read: fn([u8; 4]) -> u32,
    source: TextEncoding,
) -> Result<Cow<'static, str>> {
    let chunks = bytes.chunks_exact(4);
    if !chunks.remainder().is_empty() {
        return Err(Error::encoding(source.name(), "length is not a multiple of 4"));
    }
    let mut text = String::with_capacity(bytes.len() / 4);
    for chunk in chunks {
        let unit = read([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let ch = char::from_u32(unit).ok_or_else(|| {
            Error::encoding(source.name(), &format!("invalid code point {unit:#x}"))
        })?;
        text.push(ch);
    }
    Ok(Cow::Owned(text))
}

fn encode(text: &str, target: TextEncoding) -> Vec<u8> {
    match target {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        TextEncoding::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        TextEncoding::Utf32Le => text.chars().flat_map(|c| u32::from(c).to_le_bytes()).collect(),
        TextEncoding::Utf32Be => text.chars().flat_map(|c| u32::from(c).to_be_bytes()).collect(),
    }
}

/// Detects a byte-order mark, returning the encoding and the mark's length.
///
/// UTF-32LE is checked before UTF-16LE since its mark starts with the same
/// two bytes.
#[must_use]
pub fn sniff_bom(bytes: &[u8]) -> Option<(TextEncoding, usize)> {
    [
        TextEncoding::Utf32Le,
        TextEncoding::Utf32Be,
        TextEncoding::Utf8,
        TextEncoding::Utf16Le,
        TextEncoding::Utf16Be,
    ]
    .into_iter()
    .find(|encoding| bytes.starts_with(encoding.bom()))
    .map(|encoding| (encoding, encoding.bom().len()))
}

/// Turns a raw buffer into UTF-8 text ready for parsing.
///
/// Input without a byte-order mark must be UTF-8 and is borrowed as-is.
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] for bad UTF-8 and whatever the transcoder
/// reports for other encodings.
pub fn decode_document<'a>(bytes: &'a [u8], transcoder: &dyn Transcoder) -> Result<Cow<'a, str>> {
    match sniff_bom(bytes) {
        None => decode(bytes, TextEncoding::Utf8),
        Some((TextEncoding::Utf8, len)) => decode(&bytes[len..], TextEncoding::Utf8),
        Some((encoding, len)) => {
            tracing::debug!(encoding = encoding.name(), "transcoding input to UTF-8");
            let converted = transcoder.convert(&bytes[len..], encoding, TextEncoding::Utf8)?;
            String::from_utf8(converted)
                .map(Cow::Owned)
                .map_err(|e| Error::invalid_utf8(e.utf8_error().valid_up_to()))
        }
    }
}

/// Replaces `\r\n` and lone `\r` with `\n`, borrowing when there is nothing to do.
#[must_use]
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Strips spaces and tabs from both ends. Other Unicode whitespace is content.
///
/// ```rust
/// use inidoc::text::trim_blanks;
///
/// assert_eq!(trim_blanks(" \tvalue\t "), "value");
/// assert_eq!(trim_blanks("\u{3000}値\u{3000}"), "\u{3000}値\u{3000}");
/// ```
#[must_use]
pub fn trim_blanks(text: &str) -> &str {
    text.trim_matches(|c| c == ' ' || c == '\t')
}

/// Iterator over the physical lines of a text, without terminators.
///
/// A final terminator does not produce a trailing empty line.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Lines { rest: text }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(&['\r', '\n'][..]) {
            Some(end) => {
                let line = &self.rest[..end];
                let skip = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[end + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
