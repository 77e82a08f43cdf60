//! File-backed command store
//!
//! Owns the in-memory catalog and keeps it in sync with the file on disk.
//! Every mutating operation writes the whole catalog back before returning,
//! so the file is always the source of truth between runs.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::commands::command::Command;
use crate::config_file::{self, ConfigError};

/// Errors that can occur while operating on the store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid index {index}: catalog holds {len} commands")]
    InvalidIndex { index: usize, len: usize },
}

/// The command catalog bound to its backing file
#[derive(Debug)]
pub struct CommandStore {
    path: PathBuf,
    commands: Vec<Command>,
}

impl CommandStore {
    /// Opens the catalog at `path`, seeding the built-in default catalog
    /// first if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be seeded, read, or parsed.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        config_file::ensure_exists(path)?;
        let commands = config_file::load(path)?;
        Ok(CommandStore {
            path: path.to_path_buf(),
            commands,
        })
    }

    /// The catalog in file order
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up a command by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Appends a command and saves the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Config` if the catalog cannot be written.
    pub fn add(&mut self, command: Command) -> Result<(), StoreError> {
        debug!("Adding command '{}'", command.name);
        self.commands.push(command);
        self.save()
    }

    /// Replaces the command at `index` and saves the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidIndex` if `index` is out of range (the
    /// catalog is left untouched), or `StoreError::Config` on write failure.
    pub fn update(&mut self, index: usize, command: Command) -> Result<(), StoreError> {
        self.check_index(index)?;
        debug!("Updating command at index {index} to '{}'", command.name);
        self.commands[index] = command;
        self.save()
    }

    /// Deletes the command at `index`, saves the catalog, and returns the
    /// removed command.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidIndex` if `index` is out of range (the
    /// catalog is left untouched), or `StoreError::Config` on write failure.
    pub fn remove(&mut self, index: usize) -> Result<Command, StoreError> {
        self.check_index(index)?;
        let removed = self.commands.remove(index);
        debug!("Removed command '{}'", removed.name);
        self.save()?;
        Ok(removed)
    }

    /// Re-reads the catalog from disk, replacing the in-memory copy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed; the
    /// in-memory catalog is left as it was.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let commands = config_file::load(&self.path)?;
        self.commands = commands;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index >= self.commands.len() {
            return Err(StoreError::InvalidIndex {
                index,
                len: self.commands.len(),
            });
        }
        Ok(())
    }

    fn save(&self) -> Result<(), StoreError> {
        config_file::save(&self.path, &self.commands)?;
        Ok(())
    }
}
