/// Reinterpret an unsigned byte as two's-complement (values >= 128 map to value - 256).
pub(crate) fn signed_u8(value: u8) -> i8 {
    i8::from_le_bytes([value])
}

/// Reinterpret an unsigned word as two's-complement (values >= 32768 map to value - 65536).
pub(crate) fn signed_u16(value: u16) -> i16 {
    i16::from_le_bytes(value.to_le_bytes())
}

/// Map a reserved sentinel to `None`.
pub(crate) fn optional_unless(value: u16, sentinel: u16) -> Option<u16> {
    if value == sentinel { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::{optional_unless, signed_u8, signed_u16};

    #[test]
    fn signed_u8_boundaries() {
        assert_eq!(signed_u8(0), 0);
        assert_eq!(signed_u8(127), 127);
        assert_eq!(signed_u8(128), -128);
        assert_eq!(signed_u8(129), -127);
        assert_eq!(signed_u8(255), -1);
    }

    #[test]
    fn signed_u16_boundaries() {
        assert_eq!(signed_u16(32767), 32767);
        assert_eq!(signed_u16(32768), -32768);
        assert_eq!(signed_u16(0xFE0C), -500);
        assert_eq!(signed_u16(0xFFFF), -1);
    }

    #[test]
    fn optional_unless_sentinel() {
        assert_eq!(optional_unless(0xFFFF, 0xFFFF), None);
        assert_eq!(optional_unless(0x0010, 0xFFFF), Some(0x0010));
    }
}
