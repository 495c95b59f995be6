// Fixed-width field encoding to wire (most-significant-byte-first) order

use super::endian::ByteOrder;

/// Reverse native-layout bytes when the host stores the low byte first, so the
/// result is always most-significant-byte-first.
fn to_wire<const N: usize>(mut native: [u8; N], order: ByteOrder) -> [u8; N] {
    if order == ByteOrder::Little {
        native.reverse();
    }
    native
}

/// Encode an unsigned 1-byte integer. Width 1 is the same in either order.
pub fn encode_u8(value: u8) -> [u8; 1] {
    [value]
}

/// Encode a signed 2-byte integer in wire order.
pub fn encode_i16(value: i16, order: ByteOrder) -> [u8; 2] {
    let native = match order {
        ByteOrder::Big => value.to_be_bytes(),
        ByteOrder::Little => value.to_le_bytes(),
    };
    to_wire(native, order)
}

/// Encode a signed 4-byte integer in wire order.
pub fn encode_i32(value: i32, order: ByteOrder) -> [u8; 4] {
    let native = match order {
        ByteOrder::Big => value.to_be_bytes(),
        ByteOrder::Little => value.to_le_bytes(),
    };
    to_wire(native, order)
}

/// Encode an IEEE-754 single-precision float in wire order.
/// Goes through the raw bit pattern rather than reinterpreting memory.
pub fn encode_f32(value: f32, order: ByteOrder) -> [u8; 4] {
    let bits = value.to_bits();
    let native = match order {
        ByteOrder::Big => bits.to_be_bytes(),
        ByteOrder::Little => bits.to_le_bytes(),
    };
    to_wire(native, order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32_normalized_under_both_orders() {
        let value = 0x0102_0304;
        let big = encode_i32(value, ByteOrder::Big);
        let little = encode_i32(value, ByteOrder::Little);

        // The emitted sequence is wire order regardless of the probed host
        assert_eq!(big, [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(big, little);
    }

    #[test]
    fn test_i16_normalized_under_both_orders() {
        assert_eq!(encode_i16(0x2D, ByteOrder::Big), [0x00, 0x2D]);
        assert_eq!(encode_i16(0x2D, ByteOrder::Little), [0x00, 0x2D]);
        assert_eq!(encode_i16(-1, ByteOrder::Little), [0xFF, 0xFF]);
        assert_eq!(encode_i16(-2, ByteOrder::Big), [0xFF, 0xFE]);
    }

    #[test]
    fn test_f32_uses_bit_pattern() {
        // 234.5 = 0x436A8000
        assert_eq!(encode_f32(234.5, ByteOrder::Big), [0x43, 0x6A, 0x80, 0x00]);
        assert_eq!(
            encode_f32(234.5, ByteOrder::Little),
            [0x43, 0x6A, 0x80, 0x00]
        );
        // 23.4 = 0x41BB3333
        assert_eq!(encode_f32(23.4, ByteOrder::Little), [0x41, 0xBB, 0x33, 0x33]);
    }

    #[test]
    fn test_negative_timestamp() {
        // Pre-epoch times encode as two's complement
        assert_eq!(encode_i32(-1, ByteOrder::Little), [0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_u8_width_one() {
        assert_eq!(encode_u8(0x7A), [0x7A]);
        assert_eq!(encode_u8(0), [0]);
    }
}
