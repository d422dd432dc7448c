//! Configuration options for INI documents.
//!
//! This module provides types that control how a document is parsed and
//! written:
//!
//! - [`IniOptions`]: Main configuration struct
//! - [`CaseMode`]: How section and key names are compared
//! - [`LineEnding`]: Line terminator used on output
//!
//! Options are fixed per [`Ini`](crate::Ini) instance. They are plain data and
//! implement `serde::{Serialize, Deserialize}`, so a host application can keep
//! them in its own configuration.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::{from_str_with_options, IniOptions, CaseMode};
//!
//! let options = IniOptions::new()
//!     .with_case_mode(CaseMode::Sensitive)
//!     .with_multikey(true);
//!
//! let ini = from_str_with_options("[S]\nk = 1\nk = 2\n", options).unwrap();
//! assert_eq!(ini.get_all("S", "k"), vec!["1", "2"]);
//! assert!(!ini.section_exists("s"));
//! ```

use serde::{Deserialize, Serialize};

use crate::key::KeyComparator;

/// How section and key names are compared.
///
/// Values are always compared byte-exact regardless of this setting.
///
/// # Examples
///
/// ```rust
/// use inidoc::CaseMode;
///
/// assert_eq!(CaseMode::default(), CaseMode::Insensitive);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// ASCII letters compare case-insensitively; all other bytes compare exactly.
    #[default]
    Insensitive,
    /// Raw byte comparison.
    Sensitive,
}

impl CaseMode {
    /// Returns the comparator implementing this mode.
    #[must_use]
    pub const fn comparator(self) -> KeyComparator {
        match self {
            CaseMode::Insensitive => KeyComparator::CaseInsensitive,
            CaseMode::Sensitive => KeyComparator::CaseSensitive,
        }
    }
}

/// Line terminator written by the serializer.
///
/// Input accepts all three forms regardless of this setting.
///
/// # Examples
///
/// ```rust
/// use inidoc::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// assert_eq!(LineEnding::Cr.as_str(), "\r");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// Configuration options for parsing and writing INI documents.
///
/// # Examples
///
/// ```rust
/// use inidoc::{IniOptions, LineEnding};
///
/// // Defaults: case-insensitive, single value per key, no multi-line blocks
/// let options = IniOptions::new();
/// assert!(!options.multikey);
///
/// // Custom configuration
/// let options = IniOptions::new()
///     .with_multiline(true)
///     .with_allow_key_only(true)
///     .with_line_ending(LineEnding::CrLf)
///     .with_spaces(false);
/// assert!(options.multiline);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IniOptions {
    pub case_mode: CaseMode,
    /// Repeated keys in a section are kept as separate ordered values.
    pub multikey: bool,
    /// `key = <<<TAG` opens a block value on load.
    pub multiline: bool,
    /// Lines without `=` are loaded as key-only entries.
    pub allow_key_only: bool,
    /// Write `key = value` instead of `key=value`.
    pub spaces: bool,
    pub line_ending: LineEnding,
    /// Prefix byte output with a UTF-8 byte-order mark.
    pub write_bom: bool,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            case_mode: CaseMode::default(),
            multikey: false,
            multiline: false,
            allow_key_only: false,
            spaces: true,
            line_ending: LineEnding::default(),
            write_bom: false,
        }
    }
}

impl IniOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::{CaseMode, IniOptions};
    ///
    /// let options = IniOptions::new();
    /// assert_eq!(options.case_mode, CaseMode::Insensitive);
    /// assert!(options.spaces);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how section and key names are compared.
    #[must_use]
    pub fn with_case_mode(mut self, case_mode: CaseMode) -> Self {
        self.case_mode = case_mode;
        self
    }

    /// Enables or disables multiple values per key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::IniOptions;
    ///
    /// let options = IniOptions::new().with_multikey(true);
    /// assert!(options.multikey);
    /// ```
    #[must_use]
    pub fn with_multikey(mut self, multikey: bool) -> Self {
        self.multikey = multikey;
        self
    }

    /// Enables or disables `<<<TAG` block values on load.
    ///
    /// Values containing newlines are always written as blocks; this flag only
    /// controls whether the parser recognises them.
    #[must_use]
    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Enables or disables key-only entries (lines with no `=`).
    #[must_use]
    pub fn with_allow_key_only(mut self, allow_key_only: bool) -> Self {
        self.allow_key_only = allow_key_only;
        self
    }

    /// Sets whether `=` is surrounded by spaces on output.
    #[must_use]
    pub fn with_spaces(mut self, spaces: bool) -> Self {
        self.spaces = spaces;
        self
    }

    /// Sets the line ending used on output.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Sets whether byte output starts with a UTF-8 byte-order mark.
    #[must_use]
    pub fn with_bom(mut self, write_bom: bool) -> Self {
        self.write_bom = write_bom;
        self
    }

    pub(crate) fn separator(&self) -> &'static str {
        if self.spaces {
            " = "
        } else {
            "="
        }
    }
}
