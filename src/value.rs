//! Typed access to stored values.
//!
//! Values are always stored as text. The helpers here parse and format the
//! three common scalar types, and [`Ini`] gains `get_*`/`set_*` methods built
//! on them.
//!
//! Getters never fail: a missing key or text that does not parse yields the
//! caller's default, so a typo in a config file degrades to the default
//! instead of an error.
//!
//! | Type | Accepted on read | Written as |
//! |------|------------------|------------|
//! | `bool` | `true t yes y 1 on` / `false f no n 0 off of` (any case) | `true` / `false` |
//! | `i64` | decimal, or `0x`/`0X` hex, optional `-` | decimal, or `0x..` lowercase |
//! | `f64` | decimal or scientific notation | shortest round-trip form |
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::Ini;
//!
//! let mut ini = Ini::new();
//! ini.set_int("limits", "mask", 255, None, true, false);
//! ini.set_bool("flags", "debug", true, None, false);
//!
//! assert_eq!(ini.get("limits", "mask"), Some("0xff"));
//! assert_eq!(ini.get_int("limits", "mask", 0), 255);
//! assert!(ini.get_bool("flags", "debug", false));
//! assert_eq!(ini.get_float("flags", "missing", 1.5), 1.5);
//! ```

use crate::text::trim_blanks;
use crate::{Ini, SetOutcome};

/// Parses a boolean word, case-insensitively.
///
/// # Examples
///
/// ```rust
/// use inidoc::value::parse_bool;
///
/// assert_eq!(parse_bool("YeS"), Some(true));
/// assert_eq!(parse_bool("off"), Some(false));
/// assert_eq!(parse_bool("maybe"), None);
/// ```
#[must_use]
pub fn parse_bool(text: &str) -> Option<bool> {
    match trim_blanks(text).to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" | "on" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "off" | "of" => Some(false),
        _ => None,
    }
}

/// Parses a whole string as a decimal or `0x`-prefixed hexadecimal integer.
///
/// # Examples
///
/// ```rust
/// use inidoc::value::parse_int;
///
/// assert_eq!(parse_int("-123"), Some(-123));
/// assert_eq!(parse_int("0xFF"), Some(255));
/// assert_eq!(parse_int("123abc"), None);
/// assert_eq!(parse_int(""), None);
/// ```
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    let text = trim_blanks(text);
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (digits, radix) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Parses a floating-point number in decimal or scientific notation.
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    trim_blanks(text).parse().ok()
}

#[must_use]
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Formats an integer, as `0x`-prefixed lowercase hex when `hex` is set.
///
/// Negative hex values keep their sign: `-255` becomes `-0xff`.
#[must_use]
pub fn format_int(value: i64, hex: bool) -> String {
    match (hex, value < 0) {
        (false, _) => value.to_string(),
        (true, false) => format!("0x{value:x}"),
        (true, true) => format!("-0x{:x}", value.unsigned_abs()),
    }
}

#[must_use]
pub fn format_float(value: f64) -> String {
    value.to_string()
}

impl Ini {
    /// Reads a boolean, falling back to `default` when missing or unrecognised.
    #[must_use]
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get(section, key).and_then(parse_bool).unwrap_or(default)
    }

    /// Stores `true` or `false`.
    pub fn set_bool(
        &mut self,
        section: &str,
        key: &str,
        value: bool,
        comment: Option<&str>,
        force_replace: bool,
    ) -> SetOutcome {
        self.set_value(section, Some(key), Some(format_bool(value)), comment, force_replace)
    }

    /// Reads an integer, falling back to `default` when missing or not numeric.
    #[must_use]
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get(section, key).and_then(parse_int).unwrap_or(default)
    }

    /// Stores an integer in decimal, or hexadecimal when `hex` is set.
    pub fn set_int(
        &mut self,
        section: &str,
        key: &str,
        value: i64,
        comment: Option<&str>,
        hex: bool,
        force_replace: bool,
    ) -> SetOutcome {
        let text = format_int(value, hex);
        self.set_value(section, Some(key), Some(&text), comment, force_replace)
    }

    /// Reads a float, falling back to `default` when missing or not numeric.
    #[must_use]
    pub fn get_float(&self, section: &str, key: &str, default: f64) -> f64 {
        self.get(section, key).and_then(parse_float).unwrap_or(default)
    }

    pub fn set_float(
        &mut self,
        section: &str,
        key: &str,
        value: f64,
        comment: Option<&str>,
        force_replace: bool,
    ) -> SetOutcome {
        let text = format_float(value);
        self.set_value(section, Some(key), Some(&text), comment, force_replace)
    }
}
