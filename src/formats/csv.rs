//! CSV input for aggregated air-quality summary files
//!
//! The upstream aggregation stage writes five columns (`id,time,value,aqi,
//! pollution`); the frame codec only ever consumes the first four.

use crate::codec::frame::SummaryRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use thiserror::Error;

/// Exact header line the upstream stage produces.
pub const DUST_AQI_HEADER: &str = "id,time,value,aqi,pollution";

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid CSV format: expected header {expected:?}, found {found:?}")]
    InvalidHeader {
        expected: &'static str,
        found: String,
    },

    #[error("Invalid CSV format: file is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CsvError>;

/// Line-by-line reader over an aggregated summary file.
///
/// Checks the header up front, then yields `(line_pos, record)` pairs with
/// positions starting at 1 for the first data row. Rows are handed over raw;
/// all field validation happens in the frame assembler.
pub struct AqiReader {
    lines: Lines<BufReader<File>>,
    line_pos: usize,
}

impl AqiReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mut lines = BufReader::new(file).lines();

        let header = lines.next().ok_or(CsvError::Empty)??;
        if header.trim_end() != DUST_AQI_HEADER {
            return Err(CsvError::InvalidHeader {
                expected: DUST_AQI_HEADER,
                found: header,
            });
        }

        Ok(Self { lines, line_pos: 0 })
    }
}

impl Iterator for AqiReader {
    type Item = Result<(usize, SummaryRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        self.line_pos += 1;
        Some(Ok((self.line_pos, parse_record_line(&line))))
    }
}

/// Split one data line into the four raw record fields.
///
/// Missing trailing fields come back empty (and reject downstream); anything
/// past the fourth comma is ignored.
pub fn parse_record_line(line: &str) -> SummaryRecord {
    let mut fields = line.splitn(5, ',').map(str::trim);
    SummaryRecord {
        id: fields.next().unwrap_or("").to_string(),
        time: fields.next().unwrap_or("").to_string(),
        value: fields.next().unwrap_or("").to_string(),
        aqi: fields.next().unwrap_or("").to_string(),
    }
}
