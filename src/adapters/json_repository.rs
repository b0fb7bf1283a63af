//! JSON implementation of the value table repository.
//!
//! The durable text format: a single JSON object mapping state keys to values.
//! Floats are written in shortest round-trip form and parsed back exactly.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use log::warn;

use crate::{Result, agents::ValueTable, error::Error, ports::ValueTableRepository};

/// JSON-based value table repository.
///
/// ```text
/// {
///   "x../.o./...": 0.12,
///   "x.x/.o./o..": 0.5
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    /// Create a new JSON repository.
    pub fn new() -> Self {
        Self
    }
}

impl ValueTableRepository for JsonRepository {
    fn save(&self, table: &ValueTable, path: &Path) -> Result<()> {
        // JSON has no encoding for NaN or infinity; serde_json would write null
        if let Some((key, value)) = table.iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::SerializationContext {
                operation: "serialize value table to JSON".to_string(),
                message: format!("state {key} has non-finite value {value}"),
            });
        }

        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, table).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize value table to JSON".to_string(),
                message: e.to_string(),
            }
        })?;
        writeln!(writer)?;

        writer.flush().map_err(|source| Error::Io {
            operation: format!("write file {path:?}"),
            source,
        })
    }

    fn load(&self, path: &Path) -> Result<ValueTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let table: ValueTable =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                Error::SerializationContext {
                    operation: format!("deserialize value table from {path:?}"),
                    message: e.to_string(),
                }
            })?;

        if table.is_empty() {
            warn!("value table at {} is empty", path.display());
        }
        Ok(table)
    }
}
