// inirs/src/inifile/formatting.rs

//! Deterministic rendering of a document to INI text.

use std::fmt;

use super::core::IniFile;
use super::entry::IniEntry;

/// Canonical line terminator for rendered output.
pub(crate) const LINE_ENDING: &str = "\r\n";

impl IniFile {
    /// Render the document to its canonical text form.
    ///
    /// Output is rebuilt from scratch: entries are stable-sorted by section
    /// name (ordinal comparison, insertion order within a section), each
    /// section is introduced by a blank line and a `[Section]` header, and
    /// lines are joined with CRLF. Comments and original ordering from
    /// parsed input are never reproduced.
    pub fn to_ini_string(&self) -> String {
        let mut entries: Vec<&IniEntry> = self.entries().collect();
        entries.sort_by(|a, b| a.section.cmp(&b.section));

        let mut output = String::new();
        let mut current: Option<&str> = None;
        for entry in entries {
            if current != Some(entry.section.as_str()) {
                output.push_str(LINE_ENDING);
                output.push_str(LINE_ENDING);
                output.push('[');
                output.push_str(&entry.section);
                output.push(']');
                current = Some(entry.section.as_str());
            }
            output.push_str(LINE_ENDING);
            output.push_str(&entry.key);
            output.push('=');
            output.push_str(&entry.value);
        }

        // The first section header is not preceded by a blank line.
        output.trim_start_matches(LINE_ENDING).to_string()
    }
}

impl fmt::Display for IniFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ini_string())
    }
}
