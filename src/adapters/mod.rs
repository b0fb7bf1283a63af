//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module: storage formats for learned values and the console
//! display.

use std::path::Path;

use crate::{Error, Result, ports::ValueTableRepository};

pub mod console;
pub mod in_memory_repository;
pub mod json_repository;
pub mod msgpack_repository;

pub use console::{GridRenderer, format_grid};
pub use in_memory_repository::InMemoryRepository;
pub use json_repository::JsonRepository;
pub use msgpack_repository::MsgPackRepository;

/// Pick the file repository matching a path's extension.
///
/// `.json` selects [`JsonRepository`], `.msgpack`/`.mpk` select
/// [`MsgPackRepository`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for any other extension.
pub fn repository_for_path(path: &Path) -> Result<Box<dyn ValueTableRepository + Send + Sync>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => Ok(Box::new(JsonRepository::new())),
        Some("msgpack" | "mpk") => Ok(Box::new(MsgPackRepository::new())),
        _ => Err(Error::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
