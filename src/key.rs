//! Name comparison for sections and keys.
//!
//! [`KeyComparator`] is the single equivalence relation a document uses for
//! both section names and key names. Values never pass through it.
//!
//! Case-insensitive comparison folds only ASCII `A-Z`. Anything outside the
//! ASCII range is compared byte for byte, so `"testé"` and `"TESTÉ"` stay
//! distinct even in the default mode.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::KeyComparator;
//! use std::cmp::Ordering;
//!
//! let cmp = KeyComparator::CaseInsensitive;
//! assert!(cmp.equivalent("Section", "SECTION"));
//! assert!(!cmp.equivalent("testé", "TESTÉ"));
//! assert_eq!(cmp.order("alpha", "BETA"), Ordering::Less);
//!
//! let exact = KeyComparator::CaseSensitive;
//! assert!(!exact.equivalent("Key", "key"));
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;

/// Equivalence relation over section and key names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyComparator {
    /// Folds ASCII letters before comparing.
    #[default]
    CaseInsensitive,
    /// Compares raw bytes.
    CaseSensitive,
}

impl KeyComparator {
    /// Returns `true` when both names refer to the same section or key.
    #[must_use]
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        match self {
            KeyComparator::CaseInsensitive => a.eq_ignore_ascii_case(b),
            KeyComparator::CaseSensitive => a == b,
        }
    }

    /// Total order consistent with [`equivalent`](Self::equivalent).
    #[must_use]
    pub fn order(&self, a: &str, b: &str) -> Ordering {
        match self {
            KeyComparator::CaseInsensitive => {
                let lhs = a.bytes().map(|b| b.to_ascii_lowercase());
                let rhs = b.bytes().map(|b| b.to_ascii_lowercase());
                lhs.cmp(rhs)
            }
            KeyComparator::CaseSensitive => a.as_bytes().cmp(b.as_bytes()),
        }
    }

    /// Canonical form used as the hash key in the entry store.
    ///
    /// Two names are equivalent exactly when their index keys are equal.
    /// Borrows when no folding is needed.
    #[must_use]
    pub fn index_key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            KeyComparator::CaseInsensitive if name.bytes().any(|b| b.is_ascii_uppercase()) => {
                Cow::Owned(name.to_ascii_lowercase())
            }
            _ => Cow::Borrowed(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_key_borrows_when_already_folded() {
        let cmp = KeyComparator::CaseInsensitive;
        assert!(matches!(cmp.index_key("lower"), Cow::Borrowed("lower")));
        assert_eq!(cmp.index_key("MiXeD"), "mixed");
        assert!(matches!(
            KeyComparator::CaseSensitive.index_key("MiXeD"),
            Cow::Borrowed("MiXeD")
        ));
    }

    #[test]
    fn test_non_ascii_is_exact() {
        let cmp = KeyComparator::CaseInsensitive;
        assert_eq!(cmp.index_key("TESTÉ"), "testÉ");
        assert!(!cmp.equivalent("testé", "TESTÉ"));
        assert!(cmp.equivalent("テスト", "テスト"));
    }

    #[test]
    fn test_order_agrees_with_equivalence() {
        let pairs = [("a", "A"), ("Key1", "key1"), ("abc", "abd"), ("", "x")];
        for cmp in [KeyComparator::CaseInsensitive, KeyComparator::CaseSensitive] {
            for (a, b) in pairs {
                assert_eq!(cmp.equivalent(a, b), cmp.order(a, b) == Ordering::Equal);
                assert_eq!(cmp.order(a, b), cmp.order(b, a).reverse());
            }
        }
    }

    #[test]
    fn test_case_sensitive_order_is_bytewise() {
        let cmp = KeyComparator::CaseSensitive;
        assert_eq!(cmp.order("Z", "a"), Ordering::Less);
        assert_eq!(KeyComparator::CaseInsensitive.order("Z", "a"), Ordering::Greater);
    }
}
