// inirs/src/name.rs

//! Validation of section and variable names.
//!
//! Both halves of an entry address share one grammar: one or more ASCII
//! alphanumeric characters, nothing else. Every public operation that takes
//! a name runs it through [`validate`] before touching the store.

use crate::error::{IniError, Result};

/// Check a section or variable name against the name grammar.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Validate a name, producing an [`IniError::InvalidName`] on failure.
pub fn validate(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(IniError::InvalidName {
            name: name.to_string(),
        })
    }
}
