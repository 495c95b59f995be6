// Frame codec: timestamp parsing, endianness-normalized field encoding,
// negative-sum checksum, frame assembly and hex rendering

pub mod checksum;
pub mod datetime;
pub mod endian;
pub mod field;
pub mod frame;
pub mod hex;

pub use endian::{host_byte_order, ByteOrder};
pub use frame::{EncodedFrame, FrameAssembler, RejectReason, SummaryRecord};
pub use hex::hex_line;
