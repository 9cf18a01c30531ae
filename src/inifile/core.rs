// inirs/src/inifile/core.rs

//! Core IniFile struct and basic operations.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::entry::IniEntry;
use crate::error::Result;
use crate::name;
use crate::parser::{LoadMode, Parser};

/// Lookup key for an entry: the (section, key) pair after normalization.
type EntryKey = (String, String);

/// An in-memory INI document.
///
/// Entries are kept in a map keyed on the normalized `(section, key)` pair
/// for O(1) lookup, plus an insertion-order list used for iteration and for
/// the stable sort at render time. In the default case-insensitive mode,
/// names are lowercased for every comparison while the casing of the first
/// write is what gets persisted.
///
/// An `IniFile` is a plain owned value with no interior synchronization;
/// sharing one across threads must be serialized by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "IniFileRepr", into = "IniFileRepr")]
pub struct IniFile {
    /// Entries keyed by normalized (section, key).
    entries: HashMap<EntryKey, IniEntry>,
    /// Insertion order of entry keys.
    order: Vec<EntryKey>,
    /// Whether section and variable names compare case-sensitively.
    case_sensitive: bool,
}

impl IniFile {
    /// Create a new empty, case-insensitive document.
    pub fn new() -> Self {
        Self::with_case_sensitivity(false)
    }

    /// Create a new empty document with explicit case sensitivity.
    pub fn with_case_sensitivity(case_sensitive: bool) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            case_sensitive,
        }
    }

    /// Whether name comparisons are case-sensitive.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn normalize(&self, name: &str) -> String {
        if self.case_sensitive {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }

    fn entry_key(&self, section: &str, key: &str) -> EntryKey {
        (self.normalize(section), self.normalize(key))
    }

    /// Check if any entry lives under the given section.
    ///
    /// A name that fails the grammar can never have been stored, so this
    /// returns `false` for invalid names instead of failing.
    pub fn has_section(&self, section: &str) -> bool {
        if !name::is_valid_name(section) {
            return false;
        }
        let target = self.normalize(section);
        self.order.iter().any(|(sec, _)| *sec == target)
    }

    /// Check if a variable is stored under the given section.
    pub fn has_variable(&self, section: &str, key: &str) -> bool {
        if !name::is_valid_name(section) || !name::is_valid_name(key) {
            return false;
        }
        self.entries.contains_key(&self.entry_key(section, key))
    }

    /// Store a string value, overwriting in place if the pair exists.
    ///
    /// The first write of a pair fixes the persisted casing of both names;
    /// later writes with different casing only update the value.
    pub fn set_string(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        name::validate(section)?;
        name::validate(key)?;
        self.insert_entry(IniEntry::new(section, key, value));
        Ok(())
    }

    /// Insert without name validation. Used by `set_string` after validating
    /// and by deserialization, which must round-trip whatever was stored.
    pub(crate) fn insert_entry(&mut self, entry: IniEntry) {
        let entry_key = self.entry_key(&entry.section, &entry.key);
        if let Some(existing) = self.entries.get_mut(&entry_key) {
            existing.value = entry.value;
            return;
        }
        self.order.push(entry_key.clone());
        self.entries.insert(entry_key, entry);
    }

    /// Look up the entry for a pair, if stored.
    pub(crate) fn entry(&self, section: &str, key: &str) -> Option<&IniEntry> {
        self.entries.get(&self.entry_key(section, key))
    }

    /// Remove a single variable. Returns whether one was removed.
    pub fn remove_variable(&mut self, section: &str, key: &str) -> Result<bool> {
        name::validate(section)?;
        name::validate(key)?;
        let entry_key = self.entry_key(section, key);
        if self.entries.remove(&entry_key).is_some() {
            self.order.retain(|k| *k != entry_key);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove every entry under a section. Returns whether any was removed.
    pub fn remove_section(&mut self, section: &str) -> Result<bool> {
        name::validate(section)?;
        let target = self.normalize(section);
        let before = self.order.len();
        self.entries.retain(|(sec, _), _| *sec != target);
        self.order.retain(|(sec, _)| *sec != target);
        Ok(self.order.len() != before)
    }

    /// Iterate over all entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &IniEntry> {
        self.order.iter().filter_map(move |k| self.entries.get(k))
    }

    /// Distinct section names in insertion order, with their stored casing.
    pub fn section_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for entry in self.entries() {
            if seen.insert(self.normalize(&entry.section)) {
                names.push(entry.section.as_str());
            }
        }
        names
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries, keeping the case-sensitivity setting.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Parse INI text into this document.
    ///
    /// [`LoadMode::Replace`] clears existing contents first;
    /// [`LoadMode::Merge`] overlays the text onto them, overriding entries
    /// with the same normalized pair and leaving the rest untouched.
    /// Parsing is not transactional: entries from lines before the first
    /// malformed one remain applied.
    pub fn load_str(&mut self, content: &str, mode: LoadMode) -> Result<()> {
        if mode == LoadMode::Replace {
            self.clear();
        }
        Parser::new(self).parse(content)
    }
}

impl Default for IniFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat serialized form: tuple-keyed maps are not representable in JSON,
/// so (de)serialization goes through the entry list in insertion order.
#[derive(Serialize, Deserialize)]
struct IniFileRepr {
    case_sensitive: bool,
    entries: Vec<IniEntry>,
}

impl From<IniFileRepr> for IniFile {
    fn from(repr: IniFileRepr) -> Self {
        let mut ini = IniFile::with_case_sensitivity(repr.case_sensitive);
        for entry in repr.entries {
            ini.insert_entry(entry);
        }
        ini
    }
}

impl From<IniFile> for IniFileRepr {
    fn from(ini: IniFile) -> Self {
        let entries = ini.entries().cloned().collect();
        IniFileRepr {
            case_sensitive: ini.case_sensitive,
            entries,
        }
    }
}
