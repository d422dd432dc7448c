//! Ordered multimap storing sections and their entries.
//!
//! This module provides [`IniMap`], the store behind every [`Ini`](crate::Ini)
//! document. Sections and keys live in [`IndexMap`]s keyed by the comparator's
//! [`index_key`](KeyComparator::index_key), so lookups are O(1) while
//! iteration follows insertion order.
//!
//! ## Layout
//!
//! ```text
//! IniMap
//!   └─ Section  (display name, comment, order)
//!        └─ KeyGroup  (display name)
//!             └─ Entry  (value, comment, order)   one per value in multikey mode
//! ```
//!
//! Every section and entry receives a stamp from a document-wide counter when
//! it is created. Stamps never drive lookup; they only give the per-entry
//! section view its original interleaving.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::{IniMap, KeyComparator, SetOutcome};
//!
//! let mut map = IniMap::new(KeyComparator::CaseInsensitive, false);
//! assert_eq!(map.set_value("Net", Some("Host"), Some("a"), None, false), SetOutcome::Inserted);
//! assert_eq!(map.set_value("net", Some("host"), Some("b"), None, false), SetOutcome::Updated);
//!
//! assert_eq!(map.get_value("NET", "HOST"), Some("b"));
//! assert_eq!(map.section_names(), vec!["Net"]);
//! ```

use indexmap::map::Entry as MapEntry;
use indexmap::IndexMap;

use crate::key::KeyComparator;

/// Result of a store mutation that may create or modify data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetOutcome {
    /// A new section, key or (multikey) value was added.
    Inserted,
    /// Existing data was modified in place.
    Updated,
}

/// One stored value with its comment and insertion stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    value: Option<String>,
    comment: Option<String>,
    order: u64,
}

impl Entry {
    fn new(value: Option<&str>, comment: Option<&str>, order: u64) -> Self {
        Entry {
            value: value.map(str::to_string),
            comment: comment.map(str::to_string),
            order,
        }
    }

    /// The value, or `None` for a key-only entry.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Insertion stamp, unique within the document.
    #[must_use]
    pub fn order(&self) -> u64 {
        self.order
    }
}

/// All entries stored under one key, in insertion order.
///
/// Never empty while it is reachable from a [`Section`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGroup {
    name: String,
    entries: Vec<Entry>,
}

impl KeyGroup {
    /// The key as first written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// The entry with the smallest stamp.
    #[must_use]
    pub fn first(&self) -> Option<&Entry> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A named group of keys.
///
/// The empty name denotes the implicit section holding entries that appear
/// before the first header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    comment: Option<String>,
    order: u64,
    keys: IndexMap<String, KeyGroup>,
}

impl Section {
    fn new(name: &str, order: u64) -> Self {
        Section {
            name: name.to_string(),
            comment: None,
            order,
            keys: IndexMap::new(),
        }
    }

    /// The section name as first written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    #[must_use]
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Number of unique keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key groups in insertion order.
    pub fn keys(&self) -> indexmap::map::Values<'_, String, KeyGroup> {
        self.keys.values()
    }

    /// Every entry as `(key, entry)`, ordered by insertion stamp.
    ///
    /// Unlike [`keys`](Self::keys), entries of different keys interleave the
    /// way they were added.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &Entry)> {
        let mut all: Vec<(&str, &Entry)> = self
            .keys
            .values()
            .flat_map(|group| group.entries.iter().map(move |e| (group.name.as_str(), e)))
            .collect();
        all.sort_by_key(|(_, entry)| entry.order);
        all
    }

    fn group(&self, index: &str) -> Option<&KeyGroup> {
        self.keys.get(index)
    }
}

/// Ordered, comparator-aware multimap of sections to entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniMap {
    comparator: KeyComparator,
    multikey: bool,
    sections: IndexMap<String, Section>,
    next_order: u64,
}

fn stamp(counter: &mut u64) -> u64 {
    let order = *counter;
    *counter += 1;
    order
}

impl IniMap {
    /// Creates an empty store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::{IniMap, KeyComparator};
    ///
    /// let map = IniMap::new(KeyComparator::CaseSensitive, true);
    /// assert!(map.is_empty());
    /// assert!(map.multikey());
    /// ```
    #[must_use]
    pub fn new(comparator: KeyComparator, multikey: bool) -> Self {
        IniMap {
            comparator,
            multikey,
            sections: IndexMap::new(),
            next_order: 0,
        }
    }

    #[must_use]
    pub fn comparator(&self) -> KeyComparator {
        self.comparator
    }

    #[must_use]
    pub fn multikey(&self) -> bool {
        self.multikey
    }

    /// Changes how later inserts treat existing keys. Stored data is untouched.
    pub fn set_multikey(&mut self, multikey: bool) {
        self.multikey = multikey;
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Removes every section. The order counter keeps running.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Sections in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Section> {
        self.sections.values()
    }

    #[must_use]
    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(self.comparator.index_key(section).as_ref())
    }

    fn group(&self, section: &str, key: &str) -> Option<&KeyGroup> {
        self.section(section)?
            .group(self.comparator.index_key(key).as_ref())
    }

    /// Inserts or updates a value.
    ///
    /// - The section is created (appended) when missing.
    /// - `key = None` only creates or touches the section; `comment` then
    ///   goes to a section that has none yet.
    /// - A missing key is appended.
    /// - An existing key is updated in place, unless multikey mode is on; then
    ///   the value is appended, or replaces all values when `force_replace`.
    ///
    /// A `None` comment never clears an existing one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::{IniMap, KeyComparator, SetOutcome};
    ///
    /// let mut map = IniMap::new(KeyComparator::CaseInsensitive, true);
    /// map.set_value("s", Some("k"), Some("1"), None, false);
    /// map.set_value("s", Some("k"), Some("2"), None, false);
    /// assert_eq!(map.get_all_values("s", "k"), vec!["1", "2"]);
    ///
    /// let outcome = map.set_value("s", Some("k"), Some("3"), None, true);
    /// assert_eq!(outcome, SetOutcome::Updated);
    /// assert_eq!(map.get_all_values("s", "k"), vec!["3"]);
    /// ```
    pub fn set_value(
        &mut self,
        section: &str,
        key: Option<&str>,
        value: Option<&str>,
        comment: Option<&str>,
        force_replace: bool,
    ) -> SetOutcome {
        let comparator = self.comparator;
        let multikey = self.multikey;

        let mut created = false;
        let target = match self.sections.entry(comparator.index_key(section).into_owned()) {
            MapEntry::Occupied(occupied) => occupied.into_mut(),
            MapEntry::Vacant(vacant) => {
                created = true;
                tracing::trace!(section, "new section");
                vacant.insert(Section::new(section, stamp(&mut self.next_order)))
            }
        };

        let Some(key) = key else {
            if target.comment.is_none() {
                target.comment = comment.map(str::to_string);
            }
            return if created {
                SetOutcome::Inserted
            } else {
                SetOutcome::Updated
            };
        };

        match target.keys.entry(comparator.index_key(key).into_owned()) {
            MapEntry::Vacant(vacant) => {
                tracing::trace!(section, key, "new key");
                vacant.insert(KeyGroup {
                    name: key.to_string(),
                    entries: vec![Entry::new(value, comment, stamp(&mut self.next_order))],
                });
                SetOutcome::Inserted
            }
            MapEntry::Occupied(mut occupied) => {
                let group = occupied.get_mut();
                if multikey && !force_replace {
                    group
                        .entries
                        .push(Entry::new(value, comment, stamp(&mut self.next_order)));
                    return SetOutcome::Inserted;
                }

                let order = match group.entries.first() {
                    Some(first) => first.order,
                    None => stamp(&mut self.next_order),
                };
                let comment = comment
                    .map(str::to_string)
                    .or_else(|| group.entries.first().and_then(|e| e.comment.clone()));
                group.entries.clear();
                group.entries.push(Entry {
                    value: value.map(str::to_string),
                    comment,
                    order,
                });
                SetOutcome::Updated
            }
        }
    }

    /// First value stored for the key.
    ///
    /// Returns `None` when the section or key is missing, and for key-only
    /// entries.
    #[must_use]
    pub fn get_value(&self, section: &str, key: &str) -> Option<&str> {
        self.get_entry(section, key).and_then(Entry::value)
    }

    /// Like [`get_value`](Self::get_value), also reporting whether the key
    /// holds more than one value.
    #[must_use]
    pub fn get_value_with_multiple(&self, section: &str, key: &str) -> (Option<&str>, bool) {
        match self.group(section, key) {
            Some(group) => (group.first().and_then(Entry::value), group.len() > 1),
            None => (None, false),
        }
    }

    /// First entry stored for the key.
    #[must_use]
    pub fn get_entry(&self, section: &str, key: &str) -> Option<&Entry> {
        self.group(section, key)?.first()
    }

    /// Every value of the key in insertion order; key-only entries are skipped.
    #[must_use]
    pub fn get_all_values(&self, section: &str, key: &str) -> Vec<&str> {
        self.group(section, key)
            .map(|group| group.entries.iter().filter_map(Entry::value).collect())
            .unwrap_or_default()
    }

    /// Per-entry view of a section, duplicates included.
    ///
    /// Returns `None` for a missing section and an empty list for an empty one.
    #[must_use]
    pub fn get_section(&self, section: &str) -> Option<Vec<(&str, Option<&str>)>> {
        self.section(section).map(|s| {
            s.entries()
                .into_iter()
                .map(|(key, entry)| (key, entry.value()))
                .collect()
        })
    }

    /// Number of unique keys in the section, or `-1` if it does not exist.
    #[must_use]
    pub fn section_size(&self, section: &str) -> isize {
        self.section(section)
            .map_or(-1, |s| isize::try_from(s.len()).unwrap_or(isize::MAX))
    }

    #[must_use]
    pub fn section_exists(&self, section: &str) -> bool {
        self.section(section).is_some()
    }

    #[must_use]
    pub fn key_exists(&self, section: &str, key: &str) -> bool {
        self.group(section, key).is_some()
    }

    /// Section names in insertion order, as first written.
    #[must_use]
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.values().map(Section::name).collect()
    }

    /// Unique key names of a section in insertion order; empty if missing.
    #[must_use]
    pub fn key_names(&self, section: &str) -> Vec<&str> {
        self.section(section)
            .map(|s| s.keys().map(KeyGroup::name).collect())
            .unwrap_or_default()
    }

    /// Removes a key with all its values.
    ///
    /// With `remove_section_if_empty`, the section goes too once nothing is
    /// left in it.
    pub fn delete_key(&mut self, section: &str, key: &str, remove_section_if_empty: bool) -> bool {
        let section_index = self.comparator.index_key(section);
        let key_index = self.comparator.index_key(key);
        let Some(target) = self.sections.get_mut(section_index.as_ref()) else {
            return false;
        };
        if target.keys.shift_remove(key_index.as_ref()).is_none() {
            return false;
        }
        if remove_section_if_empty && target.keys.is_empty() {
            self.sections.shift_remove(section_index.as_ref());
        }
        true
    }

    /// Removes only the entries of `key` whose value equals `value` exactly.
    ///
    /// `value = None` removes the whole key, like
    /// [`delete_key`](Self::delete_key).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::{IniMap, KeyComparator};
    ///
    /// let mut map = IniMap::new(KeyComparator::CaseInsensitive, true);
    /// for v in ["value", "value123", "123value"] {
    ///     map.set_value("s", Some("key"), Some(v), None, false);
    /// }
    /// assert!(map.delete_value("s", "key", Some("value"), false));
    /// assert_eq!(map.get_all_values("s", "key"), vec!["value123", "123value"]);
    /// assert!(!map.delete_value("s", "key", Some("value"), false));
    /// ```
    pub fn delete_value(
        &mut self,
        section: &str,
        key: &str,
        value: Option<&str>,
        remove_section_if_empty: bool,
    ) -> bool {
        let Some(value) = value else {
            return self.delete_key(section, key, remove_section_if_empty);
        };

        let section_index = self.comparator.index_key(section);
        let key_index = self.comparator.index_key(key);
        let Some(target) = self.sections.get_mut(section_index.as_ref()) else {
            return false;
        };
        let Some(group) = target.keys.get_mut(key_index.as_ref()) else {
            return false;
        };

        let before = group.entries.len();
        group.entries.retain(|entry| entry.value() != Some(value));
        if group.entries.len() == before {
            return false;
        }
        if group.entries.is_empty() {
            target.keys.shift_remove(key_index.as_ref());
        }
        if remove_section_if_empty && target.keys.is_empty() {
            self.sections.shift_remove(section_index.as_ref());
        }
        true
    }

    /// Removes a section and everything in it.
    pub fn delete_section(&mut self, section: &str) -> bool {
        self.sections
            .shift_remove(self.comparator.index_key(section).as_ref())
            .is_some()
    }
}

impl Default for IniMap {
    fn default() -> Self {
        Self::new(KeyComparator::default(), false)
    }
}

impl<'a> IntoIterator for &'a IniMap {
    type Item = &'a Section;
    type IntoIter = indexmap::map::Values<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(multikey: bool) -> IniMap {
        IniMap::new(KeyComparator::CaseInsensitive, multikey)
    }

    #[test]
    fn test_update_keeps_position() {
        let mut m = map(false);
        m.set_value("s", Some("a"), Some("1"), None, false);
        m.set_value("s", Some("b"), Some("2"), None, false);
        m.set_value("s", Some("A"), Some("3"), None, false);

        assert_eq!(m.key_names("s"), vec!["a", "b"]);
        assert_eq!(m.get_value("s", "a"), Some("3"));
        let view = m.get_section("s").unwrap();
        assert_eq!(view, vec![("a", Some("3")), ("b", Some("2"))]);
    }

    #[test]
    fn test_comment_survives_update_without_comment() {
        let mut m = map(false);
        m.set_value("s", Some("k"), Some("1"), Some("; keep me"), false);
        m.set_value("s", Some("k"), Some("2"), None, false);
        assert_eq!(m.get_entry("s", "k").unwrap().comment(), Some("; keep me"));

        m.set_value("s", Some("k"), Some("3"), Some("; new"), false);
        assert_eq!(m.get_entry("s", "k").unwrap().comment(), Some("; new"));
    }

    #[test]
    fn test_multikey_has_multiple() {
        let mut m = map(true);
        m.set_value("s", Some("k"), Some("a"), None, false);
        assert_eq!(m.get_value_with_multiple("s", "k"), (Some("a"), false));
        m.set_value("s", Some("k"), Some("b"), None, false);
        assert_eq!(m.get_value_with_multiple("s", "k"), (Some("a"), true));
        assert_eq!(m.get_value_with_multiple("s", "missing"), (None, false));
    }

    #[test]
    fn test_entries_interleave_by_order() {
        let mut m = map(true);
        m.set_value("s", Some("k1"), Some("1"), None, false);
        m.set_value("s", Some("k2"), Some("2"), None, false);
        m.set_value("s", Some("k1"), Some("3"), None, false);

        let view = m.get_section("s").unwrap();
        assert_eq!(view, vec![("k1", Some("1")), ("k2", Some("2")), ("k1", Some("3"))]);
        assert_eq!(m.section_size("s"), 2);
    }

    #[test]
    fn test_force_replace_keeps_slot() {
        let mut m = map(true);
        m.set_value("s", Some("a"), Some("1"), None, false);
        m.set_value("s", Some("b"), Some("x"), None, false);
        m.set_value("s", Some("a"), Some("2"), None, false);
        m.set_value("s", Some("a"), Some("3"), None, true);

        assert_eq!(m.get_all_values("s", "a"), vec!["3"]);
        assert_eq!(m.key_names("s"), vec!["a", "b"]);
        assert_eq!(m.get_section("s").unwrap()[0], ("a", Some("3")));
    }

    #[test]
    fn test_section_only_insert() {
        let mut m = map(false);
        assert_eq!(m.set_value("s", None, None, Some("; hdr"), false), SetOutcome::Inserted);
        assert_eq!(m.set_value("S", None, None, None, false), SetOutcome::Updated);
        assert_eq!(m.section_size("s"), 0);
        assert_eq!(m.get_section("s"), Some(vec![]));
        assert_eq!(m.section("s").unwrap().comment(), Some("; hdr"));
    }

    #[test]
    fn test_delete_value_drops_emptied_key() {
        let mut m = map(true);
        m.set_value("s", Some("k"), Some("v"), None, false);
        m.set_value("s", Some("other"), Some("v"), None, false);
        assert!(m.delete_value("s", "k", Some("v"), true));
        assert!(!m.key_exists("s", "k"));
        // "other" still holds the section open
        assert!(m.section_exists("s"));
    }

    #[test]
    fn test_delete_reinsert_moves_to_end() {
        let mut m = map(false);
        for name in ["one", "two", "three"] {
            m.set_value(name, Some("k"), Some("v"), None, false);
        }
        assert!(m.delete_section("ONE"));
        m.set_value("one", Some("k"), Some("v"), None, false);
        assert_eq!(m.section_names(), vec!["two", "three", "one"]);
    }

    #[test]
    fn test_key_only_entry() {
        let mut m = map(false);
        m.set_value("s", Some("flag"), None, None, false);
        assert!(m.key_exists("s", "flag"));
        assert_eq!(m.get_value("s", "flag"), None);
        assert!(m.get_all_values("s", "flag").is_empty());
        assert_eq!(m.get_entry("s", "flag").unwrap().value(), None);
    }
}
