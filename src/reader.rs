//! Log reading - line-delimited JSON training logs
//!
//! A training log is one JSON object per line. Lines are parsed eagerly and
//! any malformed line is fatal: a truncated or corrupted log should fail the
//! report, not silently thin it out.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{Error, Result};

/// One parsed log line: an arbitrary JSON object.
///
/// Records are ephemeral; they exist only between parsing and loss
/// extraction and carry whatever fields the training loop logged.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    /// Field under which the per-step training loss is logged.
    pub const LOSS_KEY: &'static str = "total_loss";

    /// Get an arbitrary field by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get the `total_loss` field, if this record carries one.
    #[must_use]
    pub fn total_loss(&self) -> Option<&Value> {
        self.get(Self::LOSS_KEY)
    }
}

impl From<Map<String, Value>> for LogRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Read a line-delimited JSON log file into a sequence of records.
///
/// Blank (whitespace-only) lines are skipped; every other line must parse
/// as a single JSON object. Record order is line order.
///
/// # Errors
///
/// - [`Error::NotFound`] if `path` does not exist
/// - [`Error::InvalidInput`] if `path` is a directory
/// - [`Error::Parse`] if a non-blank line is not a JSON object, carrying
///   the 1-based line number
pub fn read_records(path: &Path) -> Result<Vec<LogRecord>> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    if path.is_dir() {
        return Err(Error::InvalidInput(format!(
            "log file {} is a directory",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: LogRecord = serde_json::from_str(&line).map_err(|e| Error::Parse {
            line: idx + 1,
            message: e.to_string(),
        })?;
        records.push(record);
    }

    debug!(path = %path.display(), records = records.len(), "log file read");
    Ok(records)
}
