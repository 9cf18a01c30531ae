// inirs/src/inifile/typed.rs

//! Typed accessors over the stored text values.
//!
//! Getters come in two forms: the plain form fails with
//! [`IniError::VariableNotFound`] or [`IniError::TypeConversion`], the
//! `_or` form falls back to a caller-supplied default on any failure.
//! Setters canonicalize to text and delegate to
//! [`IniFile::set_string`](super::IniFile::set_string).

use super::convert;
use super::core::IniFile;
use crate::error::{IniError, Result};
use crate::name;

fn conversion_error(section: &str, key: &str, value: &str, expected: &'static str) -> IniError {
    IniError::TypeConversion {
        section: section.to_string(),
        variable: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

impl IniFile {
    /// Look up a raw string value.
    pub fn get_string(&self, section: &str, key: &str) -> Result<&str> {
        name::validate(section)?;
        name::validate(key)?;
        self.entry(section, key)
            .map(|entry| entry.value.as_str())
            .ok_or_else(|| IniError::VariableNotFound {
                section: section.to_string(),
                variable: key.to_string(),
            })
    }

    /// Look up a raw string value, falling back to a default.
    pub fn get_string_or<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get_string(section, key).unwrap_or(default)
    }

    /// Look up a boolean. The stored text must be `true` or `false`,
    /// compared case-insensitively after trimming.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool> {
        let value = self.get_string(section, key)?;
        convert::parse_bool_text(value)
            .ok_or_else(|| conversion_error(section, key, value, "boolean"))
    }

    /// Look up a boolean, falling back to a default.
    pub fn get_bool_or(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_bool(section, key).unwrap_or(default)
    }

    /// Look up an integer. Parsing is strict: float-looking text such as
    /// `"3.5"` fails rather than being truncated.
    pub fn get_i64(&self, section: &str, key: &str) -> Result<i64> {
        let value = self.get_string(section, key)?;
        convert::parse_int_text(value)
            .ok_or_else(|| conversion_error(section, key, value, "integer"))
    }

    /// Look up an integer, falling back to a default.
    pub fn get_i64_or(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_i64(section, key).unwrap_or(default)
    }

    /// Look up a floating-point value in invariant decimal notation
    /// (optional sign, optional fraction, optional exponent).
    pub fn get_f64(&self, section: &str, key: &str) -> Result<f64> {
        let value = self.get_string(section, key)?;
        convert::parse_float_text(value)
            .ok_or_else(|| conversion_error(section, key, value, "floating-point number"))
    }

    /// Look up a floating-point value, falling back to a default.
    pub fn get_f64_or(&self, section: &str, key: &str, default: f64) -> f64 {
        self.get_f64(section, key).unwrap_or(default)
    }

    /// Look up a character. A value that trims to a single character
    /// returns it; a non-empty value trimming to nothing returns a space.
    pub fn get_char(&self, section: &str, key: &str) -> Result<char> {
        let value = self.get_string(section, key)?;
        convert::parse_char_text(value)
            .ok_or_else(|| conversion_error(section, key, value, "character"))
    }

    /// Look up a character, falling back to a default.
    pub fn get_char_or(&self, section: &str, key: &str, default: char) -> char {
        self.get_char(section, key).unwrap_or(default)
    }

    /// Store a boolean as `True` or `False`.
    pub fn set_bool(&mut self, section: &str, key: &str, value: bool) -> Result<()> {
        self.set_string(section, key, convert::bool_text(value))
    }

    /// Store an integer as plain decimal text.
    pub fn set_i64(&mut self, section: &str, key: &str, value: i64) -> Result<()> {
        self.set_string(section, key, &value.to_string())
    }

    /// Store a floating-point value as round-trip decimal text.
    pub fn set_f64(&mut self, section: &str, key: &str, value: f64) -> Result<()> {
        self.set_string(section, key, &value.to_string())
    }

    /// Store a character as a one-character string.
    pub fn set_char(&mut self, section: &str, key: &str, value: char) -> Result<()> {
        self.set_string(section, key, &value.to_string())
    }
}
