// dust-telemetry: fixed-layout binary telemetry frames from per-sensor
// air-quality summary records

pub mod codec;
pub mod convert;
pub mod formats;

// Re-export commonly used types
pub use codec::checksum::negative_sum;
pub use codec::datetime::Timestamp;
pub use codec::endian::{host_byte_order, ByteOrder};
pub use codec::frame::{
    EncodedFrame, FrameAssembler, RejectReason, SummaryRecord, END_BYTE, FRAME_LEN, START_BYTE,
};
pub use codec::hex::hex_line;
pub use convert::{convert, convert_file, ConvertError};
pub use formats::csv::AqiReader;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
