//! Core implementation of the cmdbook command catalog
//!
//! cmdbook keeps a catalog of named shell command recipes in a YAML file.
//! Each recipe is a `Command` holding an ordered list of `CommandItem`
//! steps (a description plus the literal command text). The library loads
//! and edits that catalog, and hydrates raw JSON values exchanged with
//! external frontends into typed records. Nothing here ever executes a
//! command; the catalog is data only.

use std::path::PathBuf;

use log::debug;

use crate::config_file::ConfigError;
use crate::store::CommandStore;

pub mod commands;
pub mod config_file;
pub mod hydrate;
pub mod store;

/// Open the command store from a file (or the default `config.yaml` next
/// to the running executable), seeding the default catalog on first use.
///
/// # Errors
///
/// Returns `ConfigError` if the catalog path cannot be resolved, the file
/// cannot be seeded or read, or its contents fail to parse.
pub fn open_store(path: Option<&str>) -> Result<CommandStore, ConfigError> {
    let path = match path {
        Some(file) => PathBuf::from(file),
        None => config_file::default_path()?,
    };
    debug!("Opening command store at {}", path.display());
    CommandStore::open(&path)
}
