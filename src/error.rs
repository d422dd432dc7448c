//! Error types for loading and saving INI documents.
//!
//! The parser is deliberately lenient, so very little input is rejected
//! outright. Errors come from the byte boundary instead:
//!
//! - **Encoding Errors**: bytes that are not valid in their source encoding
//! - **Unsupported Encodings**: a conversion the active [`Transcoder`] cannot perform
//! - **I/O Errors**: reader/writer failures in the adapter functions
//!
//! Missing sections and keys are *not* errors. Lookups return `Option`, size
//! queries return `-1`, and mutations report whether anything changed.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::{from_slice, Error};
//!
//! let result = from_slice(b"[s]\nkey = \xff\xfe\xfd");
//! assert!(matches!(result, Err(Error::InvalidUtf8 { .. })));
//! ```
//!
//! [`Transcoder`]: crate::text::Transcoder

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while loading or saving a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes are not UTF-8 once the byte-order mark has been handled
    #[error("Invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// Input bytes are malformed for the named encoding
    #[error("Malformed {encoding} input: {msg}")]
    Encoding { encoding: String, msg: String },

    /// The transcoder has no route between the requested encodings
    #[error("Unsupported encoding conversion: {0}")]
    UnsupportedEncoding(String),

    /// Any other failure, typically reported by a custom transcoder
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an encoding error for bytes that do not decode cleanly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Error;
    ///
    /// let err = Error::encoding("UTF-16LE", "odd number of bytes");
    /// assert!(err.to_string().contains("UTF-16LE"));
    /// ```
    pub fn encoding(encoding: &str, msg: &str) -> Self {
        Error::Encoding {
            encoding: encoding.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an error for a conversion the transcoder cannot perform.
    pub fn unsupported_encoding(msg: &str) -> Self {
        Error::UnsupportedEncoding(msg.to_string())
    }

    /// Creates an invalid UTF-8 error pointing at the first bad byte.
    pub fn invalid_utf8(offset: usize) -> Self {
        Error::InvalidUtf8 { offset }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
