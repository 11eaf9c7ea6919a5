use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::GenerationError;
use crate::table::Table;

pub mod csv_writer;
pub mod xlsx_writer;

pub use csv_writer::CsvWriter;
pub use xlsx_writer::XlsxWriter;

/// Persists one table as one file
pub trait SheetWriter: Send + Sync {
    fn extension(&self) -> &'static str;
    fn write(&self, table: &Table, path: &Path) -> Result<(), GenerationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn writer(self) -> Box<dyn SheetWriter> {
        match self {
            OutputFormat::Xlsx => Box::new(XlsxWriter::new()),
            OutputFormat::Csv => Box::new(CsvWriter::new()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Xlsx => f.write_str("xlsx"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(GenerationError::UnknownCategory {
                kind: "output format",
                label: other.to_string(),
            }),
        }
    }
}

/// Write `bytes` next to `path` then rename onto it, creating the parent
/// directory when missing. Readers never observe a partial file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), GenerationError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| GenerationError::Persist {
        path: path.display().to_string(),
        source: e.error,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "file persisted");
    Ok(())
}
