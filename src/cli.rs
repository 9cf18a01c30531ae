// inirs/src/cli.rs

//! Command line interface for inspecting and editing INI files.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use crate::{IniFile, WriteOptions};

#[derive(Parser)]
#[command(name = "inirs")]
#[command(about = "Read and write INI-style configuration files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value of a variable
    Get {
        file: PathBuf,
        section: String,
        key: String,
        /// Value to print when the variable is missing or unreadable
        #[arg(long)]
        default: Option<String>,
    },
    /// Set a variable and write the file back
    Set {
        file: PathBuf,
        section: String,
        key: String,
        value: String,
    },
    /// Remove a variable, or a whole section when no key is given
    Remove {
        file: PathBuf,
        section: String,
        key: Option<String>,
    },
    /// List the sections of a file
    Sections { file: PathBuf },
    /// Parse a file and report whether it is well-formed
    Check { file: PathBuf },
    /// Rewrite a file in canonical form (sorted, comments dropped)
    Fmt { file: PathBuf },
}

/// Run the CLI against the process arguments.
pub fn run() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            file,
            section,
            key,
            default,
        } => {
            let ini = load(&file)?;
            let value = match default {
                Some(ref default) => ini.get_string_or(&section, &key, default).to_string(),
                None => ini.get_string(&section, &key)?.to_string(),
            };
            println!("{}", value);
        }
        Commands::Set {
            file,
            section,
            key,
            value,
        } => {
            let mut ini = if file.exists() {
                load(&file)?
            } else {
                IniFile::new()
            };
            ini.set_string(&section, &key, &value)?;
            save(&ini, &file)?;
        }
        Commands::Remove { file, section, key } => {
            let mut ini = load(&file)?;
            let removed = match key {
                Some(ref key) => ini.remove_variable(&section, key)?,
                None => ini.remove_section(&section)?,
            };
            if removed {
                save(&ini, &file)?;
            } else {
                info!("nothing matched in {}", file.display());
            }
        }
        Commands::Sections { file } => {
            for name in load(&file)?.section_names() {
                println!("{}", name);
            }
        }
        Commands::Check { file } => {
            let ini = load(&file)?;
            println!(
                "{}: {} entries in {} sections",
                file.display(),
                ini.len(),
                ini.section_names().len()
            );
        }
        Commands::Fmt { file } => {
            let ini = load(&file)?;
            save(&ini, &file)?;
        }
    }

    Ok(())
}

fn load(file: &PathBuf) -> anyhow::Result<IniFile> {
    crate::read(file).with_context(|| format!("failed to read {}", file.display()))
}

fn save(ini: &IniFile, file: &PathBuf) -> anyhow::Result<()> {
    crate::write_with_options(ini, file, &WriteOptions { force: true })
        .with_context(|| format!("failed to write {}", file.display()))
}
