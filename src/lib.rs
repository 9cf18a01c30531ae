// inirs/src/lib.rs

//! A Rust-native library for reading and writing INI-style configuration
//! files.
//!
//! This library provides functionality to:
//! - Parse INI text into an in-memory [`IniFile`] document
//! - Query and mutate entries through typed accessors (string, boolean,
//!   integer, character, floating-point)
//! - Render a document back to deterministic, section-sorted text
//! - Convert between formats (JSON, YAML) behind cargo features
//!
//! Section and variable names are ASCII alphanumeric and, by default,
//! compared case-insensitively; values are free-form text. Rendered output
//! is always rebuilt from scratch: comments and original ordering of
//! parsed input are not preserved.

pub mod error;
pub mod inifile;
pub mod name;
pub mod parser;

#[cfg(feature = "cli")]
pub mod cli;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::debug;

pub use error::{IniError, Result};
pub use inifile::{IniEntry, IniFile};
pub use parser::{LoadMode, Parser};

/// Parse an INI document from a file path.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), inirs::IniError> {
///     let ini = inirs::read("settings.ini")?;
///     println!("{}", ini);
///     Ok(())
/// }
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<IniFile> {
    let path = path.as_ref();
    debug!("reading INI document from {}", path.display());
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    reads(&contents)
}

/// Parse an INI document from a string.
///
/// # Examples
///
/// ```
/// fn main() -> Result<(), inirs::IniError> {
///     let ini = inirs::reads("[server]\r\nport=8080\r\n")?;
///     assert_eq!(ini.get_i64("server", "port")?, 8080);
///     Ok(())
/// }
/// ```
pub fn reads(content: &str) -> Result<IniFile> {
    let mut ini = IniFile::new();
    ini.load_str(content, LoadMode::Replace)?;
    Ok(ini)
}

/// Render a document to its canonical text form.
pub fn writes(ini: &IniFile) -> String {
    ini.to_ini_string()
}

/// Write a document to a file.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), inirs::IniError> {
/// let mut ini = inirs::IniFile::new();
/// ini.set_string("server", "host", "example.com")?;
/// ini.set_i64("server", "port", 8080)?;
///
/// inirs::write(&ini, "settings.ini")?;
/// # Ok(())
/// # }
/// ```
pub fn write<P: AsRef<Path>>(ini: &IniFile, path: P) -> Result<()> {
    write_with_options(ini, path, &WriteOptions::default())
}

/// Write a document to a file with specific options.
pub fn write_with_options<P: AsRef<Path>>(
    ini: &IniFile,
    path: P,
    options: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();

    if !options.force && path.exists() {
        return Err(IniError::FileAlreadyExists(path.to_path_buf()));
    }

    debug!("writing {} entries to {}", ini.len(), path.display());
    let mut file = File::create(path)?;
    write_to_writer(ini, &mut file)
}

/// Write a document to any writer implementing the Write trait.
pub fn write_to_writer<W: Write>(ini: &IniFile, writer: &mut W) -> Result<()> {
    writer.write_all(ini.to_ini_string().as_bytes())?;
    Ok(())
}

/// Options for controlling file output.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Force overwrite existing files
    pub force: bool,
}

#[cfg(feature = "json")]
/// Convert a document to JSON string.
pub fn to_json(ini: &IniFile) -> Result<String> {
    serde_json::to_string_pretty(ini).map_err(IniError::from)
}

#[cfg(feature = "json")]
/// Parse a document from JSON string.
pub fn from_json(json: &str) -> Result<IniFile> {
    serde_json::from_str(json).map_err(IniError::from)
}

#[cfg(feature = "yaml")]
/// Convert a document to YAML string.
pub fn to_yaml(ini: &IniFile) -> Result<String> {
    serde_yaml::to_string(ini).map_err(IniError::from)
}

#[cfg(feature = "yaml")]
/// Parse a document from YAML string.
pub fn from_yaml(yaml: &str) -> Result<IniFile> {
    serde_yaml::from_str(yaml).map_err(IniError::from)
}
