//! Repository port for value table persistence.
//!
//! This module defines the trait boundary between the learning agent and the
//! storage formats its learned values are written to.

use std::path::Path;

use crate::{Result, agents::ValueTable};

/// Port for persisting and loading learned value tables.
///
/// Implementations must round-trip every key/value pair exactly:
/// `load(save(table)) == table`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use noughts::{agents::ValueTable, ports::ValueTableRepository};
///
/// fn backup<R: ValueTableRepository>(repo: &R, table: &ValueTable) -> noughts::Result<()> {
///     repo.save(table, Path::new("policy.json"))
/// }
/// ```
pub trait ValueTableRepository {
    /// Save a value table to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path cannot be created or written to
    /// - Serialization fails
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()>;

    /// Load a value table from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The contents are not a valid value table
    fn load(&self, path: &Path) -> Result<ValueTable>;
}
