//! Reads forecast CSV files from the data directory into [`Row`]s.
//!
//! Every call opens and parses the file again; nothing is cached, so a file
//! rewritten by the forecast job is picked up on the next request.

use common::Row;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

const UTF8_BOM: char = '\u{feff}';

/// What to do with a record whose field count differs from the header's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRowPolicy {
    /// Keep the row: missing columns become empty strings, extra fields are dropped
    #[default]
    Pad,
    /// Drop the row
    Skip,
    /// Fail the whole read
    Reject,
}

/// Errors raised while reading a dataset that exists on disk
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed row at line {line} of {}: expected {expected} fields, found {found}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV reader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Loads named CSV files relative to a base directory.
#[derive(Debug, Clone)]
pub struct CsvProvider {
    base_dir: PathBuf,
    policy: MalformedRowPolicy,
}

impl CsvProvider {
    pub fn new(base_dir: impl Into<PathBuf>, policy: MalformedRowPolicy) -> Self {
        Self {
            base_dir: base_dir.into(),
            policy,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.path_of(filename).is_file()
    }

    /// Parses `filename` into rows keyed by its header.
    ///
    /// A missing file is logged and yields an empty vector. The parse runs on
    /// the blocking thread pool.
    #[instrument(skip(self), fields(base_dir = %self.base_dir.display()))]
    pub async fn read_rows(&self, filename: &str) -> Result<Vec<Row>, ProviderError> {
        let path = self.path_of(filename);
        let policy = self.policy;
        tokio::task::spawn_blocking(move || read_csv_file(&path, policy)).await?
    }
}

/// Blocking variant of [`CsvProvider::read_rows`] for a full path.
pub fn read_csv_file(path: &Path, policy: MalformedRowPolicy) -> Result<Vec<Row>, ProviderError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("File not found: {}", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ProviderError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let rows = parse_rows(file, policy, path)?;
    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parses CSV text whose first record is the header.
///
/// `origin` is only used in error messages and logs.
pub fn parse_rows<R: Read>(
    reader: R,
    policy: MalformedRowPolicy,
    origin: &Path,
) -> Result<Vec<Row>, ProviderError> {
    let csv_error = |source: csv::Error| ProviderError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = header_names(reader.headers().map_err(csv_error)?);
    let expected = headers.len();
    trace!(?headers, "Parsed header");

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let found = record.len();

        if found != expected {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            match policy {
                MalformedRowPolicy::Reject => {
                    return Err(ProviderError::MalformedRow {
                        path: origin.to_path_buf(),
                        line,
                        expected,
                        found,
                    });
                }
                MalformedRowPolicy::Skip => {
                    warn!(line, expected, found, "Skipping malformed row in {}", origin.display());
                    continue;
                }
                MalformedRowPolicy::Pad => {
                    warn!(line, expected, found, "Padding malformed row in {}", origin.display());
                }
            }
        }

        let mut row = Row::with_capacity(expected);
        for (index, column) in headers.iter().enumerate() {
            row.insert(column.as_str(), record.get(index).unwrap_or_default());
        }
        rows.push(row);
    }

    Ok(rows)
}

fn header_names(record: &StringRecord) -> Vec<String> {
    record
        .iter()
        .enumerate()
        .map(|(index, name)| {
            if index == 0 {
                name.trim_start_matches(UTF8_BOM).to_string()
            } else {
                name.to_string()
            }
        })
        .collect()
}
