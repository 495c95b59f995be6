// Host byte-order detection
// The probe result is process-wide and computed once

use lazy_static::lazy_static;

/// Byte ordering of a multi-byte value in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte first (wire order).
    Big,
    /// Least significant byte first.
    Little,
}

/// f32 probe value with bit pattern 0x436A8000. Its low byte is 0x00, so on a
/// little-endian host it lands first in memory.
const PROBE_VALUE: f32 = 234.5;

fn probe_byte_order() -> ByteOrder {
    if PROBE_VALUE.to_ne_bytes()[0] == 0x00 {
        ByteOrder::Little
    } else {
        ByteOrder::Big
    }
}

lazy_static! {
    static ref HOST_ORDER: ByteOrder = probe_byte_order();
}

/// Byte order of the running host, probed once and cached.
pub fn host_byte_order() -> ByteOrder {
    *HOST_ORDER
}
