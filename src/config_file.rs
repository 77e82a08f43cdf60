//! Catalog file handling for cmdbook

use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::commands::command::Command;
use crate::commands::item::CommandItem;

/// Errors that can occur while loading or saving the catalog
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read catalog file {path}: {source}")]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Unable to write catalog file {path}: {source}")]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Unable to locate the running executable: {0}")]
    UnknownExecutablePath(std::io::Error),
    #[error("Unable to parse YAML catalog file {path}: {source}")]
    Yaml {
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("Unable to parse JSON catalog file {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },
}

/// Default catalog file name, looked up next to the executable
const FILENAME: &str = "config.yaml";

/// The catalog a fresh installation starts with
#[must_use]
pub fn default_commands() -> Vec<Command> {
    vec![Command {
        name: "Add user".to_string(),
        command: vec![
            CommandItem {
                desc: "Create the account and set a password".to_string(),
                cmd: "net user ${username} ${password} /add".to_string(),
            },
            CommandItem {
                desc: "Put the account in the administrators group".to_string(),
                cmd: "net localgroup administrators ${username} /add".to_string(),
            },
        ],
    }]
}

/// Resolves the default catalog location: `config.yaml` in the directory
/// holding the running executable.
///
/// # Errors
///
/// Returns `ConfigError::UnknownExecutablePath` if the executable path
/// cannot be determined.
pub fn default_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::UnknownExecutablePath)?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(FILENAME))
}

/// Loads and parses a catalog file. A `json` extension switches the parser
/// from YAML to JSON.
///
/// # Errors
///
/// Returns `ConfigError::Read` if the file cannot be read, or
/// `ConfigError::Yaml`/`ConfigError::Json` if parsing fails.
pub fn load(file: &Path) -> Result<Vec<Command>, ConfigError> {
    let contents = std::fs::read_to_string(file).map_err(|e| ConfigError::Read {
        source: e,
        path: file.to_path_buf(),
    })?;
    let commands: Vec<Command> = if file.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&contents).map_err(|e| ConfigError::Json {
            source: e,
            path: file.to_path_buf(),
        })?
    } else {
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Yaml {
            source: e,
            path: file.to_path_buf(),
        })?
    };
    debug!("Loaded {} commands from {}", commands.len(), file.display());
    Ok(commands)
}

/// Serializes the catalog and writes it to `file`, matching the format
/// `load` expects for that extension.
///
/// # Errors
///
/// Returns `ConfigError::Yaml`/`ConfigError::Json` if serialization fails,
/// or `ConfigError::Write` if the file cannot be written.
pub fn save(file: &Path, commands: &[Command]) -> Result<(), ConfigError> {
    let contents = if file.extension().is_some_and(|ext| ext == "json") {
        serde_json::to_string_pretty(commands).map_err(|e| ConfigError::Json {
            source: e,
            path: file.to_path_buf(),
        })?
    } else {
        serde_yaml::to_string(commands).map_err(|e| ConfigError::Yaml {
            source: e,
            path: file.to_path_buf(),
        })?
    };
    std::fs::write(file, contents).map_err(|e| ConfigError::Write {
        source: e,
        path: file.to_path_buf(),
    })?;
    debug!("Saved {} commands to {}", commands.len(), file.display());
    Ok(())
}

/// Seeds the default catalog at `file` if nothing exists there yet.
///
/// # Errors
///
/// Returns `ConfigError::Write` if the seed file cannot be written.
pub fn ensure_exists(file: &Path) -> Result<(), ConfigError> {
    if !file.exists() {
        info!("Seeding default catalog at {}", file.display());
        save(file, &default_commands())?;
    }
    Ok(())
}
