// Conversion pipeline: summary rows in, hex-rendered telemetry frames out

pub mod errlog;

use crate::codec::frame::{FrameAssembler, RejectReason};
use crate::codec::hex::hex_line;
use crate::formats::csv::{AqiReader, CsvError};
use chrono::TimeZone;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data missing at line {line}: {reason}")]
    DataMissing { line: usize, reason: RejectReason },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Encode every record from `reader` and write one hex line per frame.
///
/// Records are processed strictly in input order. The first malformed record
/// aborts the whole run with its 1-based data-row position; rows already
/// written stay written. Returns the number of frames written on success.
pub fn convert<Tz, W>(
    reader: AqiReader,
    assembler: &FrameAssembler<Tz>,
    out: &mut W,
) -> Result<usize>
where
    Tz: TimeZone,
    W: Write,
{
    let mut written = 0usize;

    for item in reader {
        let (line, record) = item?;
        match assembler.assemble(&record) {
            Ok(frame) => {
                writeln!(out, "{}", hex_line(frame.as_bytes()))?;
                written += 1;
                tracing::debug!(line, "frame written");
            }
            Err(reason) => {
                tracing::error!(line, %reason, "malformed record, aborting conversion");
                return Err(ConvertError::DataMissing { line, reason });
            }
        }
    }

    Ok(written)
}

/// File-to-file wrapper used by the binary. Output is written row by row, so
/// an aborted run leaves the successfully converted prefix behind.
pub fn convert_file<Tz: TimeZone>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    assembler: &FrameAssembler<Tz>,
) -> Result<usize> {
    let reader = AqiReader::open(input)?;
    let mut out = File::create(output)?;
    convert(reader, assembler, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_converts_all_rows_in_order() {
        let file = csv_file(
            "id,time,value,aqi,pollution\n\
             1,2024:05:01 10:00:00,23.4,45,Good\n\
             2,2024:05:01 11:00:00,57.1,104,Unhealthy\n",
        );

        let reader = AqiReader::open(file.path()).unwrap();
        let mut out = Vec::new();
        let written = convert(reader, &FrameAssembler::new(Utc), &mut out).unwrap();

        assert_eq!(written, 2);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].trim_end(),
            "7A 0F 01 66 32 12 A0 41 BB 33 33 00 2D 17 7F"
        );
        // FIFO: row order is preserved
        assert!(lines[1].starts_with("7A 0F 02 "));
    }

    #[test]
    fn test_fail_fast_on_first_malformed_row() {
        let file = csv_file(
            "id,time,value,aqi,pollution\n\
             1,2024:05:01 10:00:00,23.4,45,Good\n\
             2,2024:05:01 11:00:00,57.1,104,Unhealthy\n\
             ,2024:05:01 12:00:00,12.0,30,Good\n\
             4,2024:05:01 13:00:00,9.9,20,Good\n",
        );

        let reader = AqiReader::open(file.path()).unwrap();
        let mut out = Vec::new();
        let err = convert(reader, &FrameAssembler::new(Utc), &mut out).unwrap_err();

        match err {
            ConvertError::DataMissing { line, reason } => {
                assert_eq!(line, 3);
                assert_eq!(reason, RejectReason::EmptyField("id"));
            }
            other => panic!("unexpected error: {other}"),
        }

        // Rows before the failure were written; nothing after it was
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(!text.lines().any(|l| l.starts_with("7A 0F 04 ")));
    }

    #[test]
    fn test_convert_file_leaves_prefix_on_abort() {
        let input = csv_file(
            "id,time,value,aqi,pollution\n\
             1,2024:05:01 10:00:00,23.4,45,Good\n\
             0,2024:05:01 11:00:00,57.1,104,Unhealthy\n",
        );
        let output = NamedTempFile::new().unwrap();

        let err = convert_file(input.path(), output.path(), &FrameAssembler::new(Utc));
        assert!(matches!(
            err,
            Err(ConvertError::DataMissing { line: 2, .. })
        ));

        let written = std::fs::read_to_string(output.path()).unwrap();
        assert_eq!(written.lines().count(), 1);
    }

    #[test]
    fn test_convert_file_success() {
        let input = csv_file(
            "id,time,value,aqi,pollution\n\
             1,2024:05:01 10:00:00,23.4,45,Good\n",
        );
        let output = NamedTempFile::new().unwrap();

        let written =
            convert_file(input.path(), output.path(), &FrameAssembler::new(Utc)).unwrap();
        assert_eq!(written, 1);

        let text = std::fs::read_to_string(output.path()).unwrap();
        assert_eq!(text, "7A 0F 01 66 32 12 A0 41 BB 33 33 00 2D 17 7F \n");
    }

    #[test]
    fn test_header_mismatch_surfaces_as_csv_error() {
        let input = csv_file("wrong,header\n");
        let output = NamedTempFile::new().unwrap();

        let err = convert_file(input.path(), output.path(), &FrameAssembler::new(Utc));
        assert!(matches!(err, Err(ConvertError::Csv(_))));
    }
}
