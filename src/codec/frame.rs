// Frame assembly: one summary record in, one delimited telemetry frame out

use super::checksum;
use super::datetime::{self, DateTimeError};
use super::endian::host_byte_order;
use super::field;
use chrono::{Local, TimeZone};
use thiserror::Error;

/// Marks the first byte of every valid frame.
pub const START_BYTE: u8 = 0x7A;
/// Marks the last byte of every valid frame.
pub const END_BYTE: u8 = 0x7F;

pub const ID_WIDTH: usize = 1;
pub const TIME_WIDTH: usize = 4;
pub const VALUE_WIDTH: usize = 4;
pub const AQI_WIDTH: usize = 2;
pub const CHECKSUM_WIDTH: usize = 1;
pub const LENGTH_WIDTH: usize = 1;
pub const MARKER_WIDTH: usize = 1;

/// Complete frame size: both markers, the length byte, all payload fields and
/// the checksum.
pub const FRAME_LEN: usize = 2 * MARKER_WIDTH
    + LENGTH_WIDTH
    + ID_WIDTH
    + TIME_WIDTH
    + VALUE_WIDTH
    + AQI_WIDTH
    + CHECKSUM_WIDTH;

// The wire contract is byte-exact; widths are fixed, never derived at runtime.
const _: () = assert!(FRAME_LEN == 15);

/// Value of the LENGTH byte at offset 1.
pub const FRAME_LENGTH_BYTE: u8 = FRAME_LEN as u8;

/// One-byte stand-in emitted on the wire for a rejected record. Unambiguous
/// because a real frame always starts with [`START_BYTE`].
pub const REJECT_SENTINEL: [u8; 1] = [0x00];

/// Raw text fields of one aggregated summary row, exactly as the CSV
/// collaborator hands them over. Consumed once per encode; nothing is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    pub id: String,
    pub time: String,
    pub value: String,
    pub aqi: String,
}

/// Why a record could not be encoded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectReason {
    #[error("{0} field is empty")]
    EmptyField(&'static str),

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] DateTimeError),

    #[error("timestamp does not exist in the target timezone")]
    NonexistentTime,

    #[error("id is not a positive integer")]
    InvalidId,

    #[error("value is not a number")]
    InvalidValue,

    #[error("aqi is not an integer")]
    InvalidAqi,
}

/// A complete, checksummed, delimited telemetry frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame([u8; FRAME_LEN]);

impl EncodedFrame {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl AsRef<[u8]> for EncodedFrame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Builds frames from summary records.
///
/// Stateless across records; the timezone used for epoch conversion is the
/// only configuration. Production uses local time (matching `mktime`); tests
/// pin a fixed zone for reproducible byte vectors.
pub struct FrameAssembler<Tz: TimeZone> {
    tz: Tz,
}

impl FrameAssembler<Local> {
    /// Assembler converting timestamps against the host's local timezone.
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl<Tz: TimeZone> FrameAssembler<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Encode one record, or explain why it is malformed.
    ///
    /// Values wider than their wire field truncate silently: id to 1 byte,
    /// epoch seconds to 4, aqi to 2. That matches the narrow field widths of
    /// the format and is not an error condition.
    pub fn assemble(&self, record: &SummaryRecord) -> Result<EncodedFrame, RejectReason> {
        for (name, text) in [
            ("id", &record.id),
            ("time", &record.time),
            ("value", &record.value),
            ("aqi", &record.aqi),
        ] {
            if text.is_empty() {
                return Err(RejectReason::EmptyField(name));
            }
        }

        let ts = datetime::parse(&record.time)?;
        let id: i64 = record.id.parse().map_err(|_| RejectReason::InvalidId)?;
        if id <= 0 {
            return Err(RejectReason::InvalidId);
        }
        let value: f32 = record.value.parse().map_err(|_| RejectReason::InvalidValue)?;
        let aqi: i64 = record.aqi.parse().map_err(|_| RejectReason::InvalidAqi)?;
        let epoch = ts
            .epoch_seconds_in(&self.tz)
            .ok_or(RejectReason::NonexistentTime)?;

        let order = host_byte_order();
        let mut frame = [0u8; FRAME_LEN];
        frame[0] = START_BYTE;
        frame[1] = FRAME_LENGTH_BYTE;
        frame[2..3].copy_from_slice(&field::encode_u8(id as u8));
        frame[3..7].copy_from_slice(&field::encode_i32(epoch as i32, order));
        frame[7..11].copy_from_slice(&field::encode_f32(value, order));
        frame[11..13].copy_from_slice(&field::encode_i16(aqi as i16, order));
        // Checksum covers LENGTH through AQI, never the markers
        frame[13] = checksum::negative_sum(&frame[1..13]);
        frame[14] = END_BYTE;

        Ok(EncodedFrame(frame))
    }

    /// Wire-level variant: the frame bytes, or the one-byte zero sentinel for
    /// a rejected record.
    pub fn assemble_wire(&self, record: &SummaryRecord) -> Vec<u8> {
        match self.assemble(record) {
            Ok(frame) => frame.to_vec(),
            Err(_) => REJECT_SENTINEL.to_vec(),
        }
    }
}
