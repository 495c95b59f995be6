// Run-time error log: one timestamped, numbered line per recorded failure

use chrono::Local;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Failures a conversion run can record, numbered for the log format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error("invalid command")]
    InvalidCommand,

    #[error("invalid argument")]
    InvalidArgument,

    #[error("file access denied: {0}")]
    AccessDenied(String),

    #[error("invalid csv file format")]
    InvalidCsvFormat,

    #[error("data missing at line {0}")]
    DataMissing(usize),
}

impl RunError {
    pub fn code(&self) -> u8 {
        match self {
            RunError::InvalidCommand => 1,
            RunError::InvalidArgument => 2,
            RunError::AccessDenied(_) => 3,
            RunError::InvalidCsvFormat => 4,
            RunError::DataMissing(_) => 5,
        }
    }
}

/// Append-only error log file.
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    /// Open the log for appending, failing up front if it is not writable.
    /// The run must not start at all when errors cannot be recorded.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path })
    }

    /// Append one `[YYYY:MM:DD HH:MM:SS] Error NN: <text>` line.
    pub fn record(&self, err: &RunError) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let stamp = Local::now().format("%Y:%m:%d %H:%M:%S");
        writeln!(file, "[{}] Error {:02}: {}", stamp, err.code(), err)
    }
}
