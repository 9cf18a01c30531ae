// inirs/src/inifile/entry.rs

//! The stored (section, key, value) triple.

use serde::{Deserialize, Serialize};

/// One stored entry of an INI document.
///
/// `section` and `key` keep the casing they were first written with; the
/// value is always kept as text and converted by the typed accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IniEntry {
    /// Section the entry belongs to, as first written.
    pub section: String,
    /// Variable name, as first written.
    pub key: String,
    /// Raw text value.
    pub value: String,
}

impl IniEntry {
    /// Create a new entry.
    pub fn new<S, K, V>(section: S, key: K, value: V) -> Self
    where
        S: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            section: section.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}
