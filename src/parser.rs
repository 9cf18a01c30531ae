// inirs/src/parser.rs

//! Line-oriented parser that populates an [`IniFile`] from INI text.

use crate::error::{IniError, Result};
use crate::inifile::IniFile;
use crate::name;

/// How [`IniFile::load_str`] treats existing contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Clear the document before parsing.
    #[default]
    Replace,
    /// Keep existing entries; entries with the same normalized pair are
    /// overridden, the rest are left untouched.
    Merge,
}

/// Parser over a block of INI text.
///
/// Lines are processed independently and in order; the only state carried
/// between lines is the current section and the line number used for error
/// positions.
pub struct Parser<'a> {
    ini: &'a mut IniFile,
    current_section: Option<String>,
    line: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser writing into the given document.
    pub fn new(ini: &'a mut IniFile) -> Self {
        Self {
            ini,
            current_section: None,
            line: 0,
        }
    }

    /// Parse a block of text, accepting either line ending convention.
    ///
    /// Carriage returns are stripped up front, then the text is split into
    /// lines on line feeds. Aborts at the first malformed line; entries
    /// from earlier lines remain applied.
    pub fn parse(&mut self, content: &str) -> Result<()> {
        let content = content.replace('\r', "");
        for (index, line) in content.split('\n').enumerate() {
            self.line = index + 1;
            self.parse_line(line)?;
        }
        Ok(())
    }

    fn parse_line(&mut self, raw: &str) -> Result<()> {
        // Everything from the first ';' onward is comment, even inside a
        // would-be value.
        let uncommented = match raw.find(';') {
            Some(start) => &raw[..start],
            None => raw,
        };
        let line = uncommented.trim();
        if line.is_empty() {
            return Ok(());
        }

        if let Some(section) = section_header(line) {
            self.current_section = Some(section.to_string());
            return Ok(());
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| IniError::parse_error("expected 'Key=Value', found no '='", self.line))?;
        name::validate(key)?;
        let section = self.current_section.clone().ok_or_else(|| {
            IniError::parse_error("key/value line before any [Section] header", self.line)
        })?;
        self.ini.set_string(&section, key, value)
    }
}

/// Match `[Name]` where Name satisfies the name grammar.
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|name| name::is_valid_name(name))
}
