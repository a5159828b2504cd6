//! Pure varint encoding and decoding over byte buffers.

use bytes::{Buf, BufMut};

use super::constants::{MARKER_U16, MARKER_U32, MARKER_U64, MAX_VARINT_LEN, payload_len};
use super::error::VarIntError;

/// Encode a value into its shortest varint form.
///
/// | Value range          | Bytes | Layout              |
/// |----------------------|-------|---------------------|
/// | `< 0xFD`             | 1     | the value itself    |
/// | `<= 0xFFFF`          | 3     | `0xFD` + LE `u16`   |
/// | `<= 0xFFFF_FFFF`     | 5     | `0xFE` + LE `u32`   |
/// | anything larger      | 9     | `0xFF` + LE `u64`   |
pub fn encode(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    put_varint(&mut out, value);
    out
}

/// Number of bytes `encode(value)` produces.
pub const fn encoded_len(value: u64) -> usize {
    if value < MARKER_U16 as u64 {
        1
    } else if value <= u16::MAX as u64 {
        3
    } else if value <= u32::MAX as u64 {
        5
    } else {
        MAX_VARINT_LEN
    }
}

/// Append the varint encoding of `value` to `buf`.
pub fn put_varint<B: BufMut>(buf: &mut B, value: u64) {
    if value < MARKER_U16 as u64 {
        buf.put_u8(value as u8);
    } else if value <= u16::MAX as u64 {
        buf.put_u8(MARKER_U16);
        buf.put_u16_le(value as u16);
    } else if value <= u32::MAX as u64 {
        buf.put_u8(MARKER_U32);
        buf.put_u32_le(value as u32);
    } else {
        buf.put_u8(MARKER_U64);
        buf.put_u64_le(value);
    }
}

/// Decode a varint from the start of `data`.
///
/// Returns the value and the number of bytes consumed. Non-minimal
/// encodings are accepted as-is.
pub fn decode(data: &[u8]) -> Result<(u64, usize), VarIntError> {
    let mut buf = data;
    let value = get_varint(&mut buf)?;
    Ok((value, data.len() - buf.len()))
}

/// Decode a varint from `buf`, advancing past it.
///
/// On [`VarIntError::NeedMoreData`] nothing is consumed, so the caller can
/// retry once more bytes have arrived.
pub fn get_varint<B: Buf>(buf: &mut B) -> Result<u64, VarIntError> {
    if !buf.has_remaining() {
        return Err(VarIntError::NeedMoreData(1));
    }

    let marker = buf.chunk()[0];
    let needed = 1 + payload_len(marker);
    if buf.remaining() < needed {
        return Err(VarIntError::NeedMoreData(needed - buf.remaining()));
    }
    buf.advance(1);

    let value = match marker {
        MARKER_U16 => buf.get_u16_le() as u64,
        MARKER_U32 => buf.get_u32_le() as u64,
        MARKER_U64 => buf.get_u64_le(),
        byte => byte as u64,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::{Bytes, BytesMut};

    #[test]
    fn test_encode_boundaries() {
        assert_eq!(encode(0), [0x00]);
        assert_eq!(encode(252), [0xFC]);
        assert_eq!(encode(253), [0xFD, 0xFD, 0x00]);
        assert_eq!(encode(65535), [0xFD, 0xFF, 0xFF]);
        assert_eq!(encode(65536), [0xFE, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(encode(4294967295), [0xFE, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            encode(4294967296),
            [0xFF, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
        );
        assert_eq!(encode(u64::MAX), [0xFF; 9]);
    }

    #[test]
    fn test_encoded_len_matches_encode() {
        let values = [
            0,
            1,
            252,
            253,
            254,
            0xFFFF,
            0x1_0000,
            0xFFFF_FFFF,
            0x1_0000_0000,
            u64::MAX,
        ];
        for value in values {
            assert_eq!(encoded_len(value), encode(value).len(), "value {value}");
        }
    }

    #[test]
    fn test_decode_reports_consumed() {
        let data = [0xFE, 0x00, 0x00, 0x01, 0x00, 0xAA];
        assert_eq!(decode(&data).unwrap(), (65536, 5));
        assert_eq!(decode(&[0x07, 0xFF]).unwrap(), (7, 1));
    }

    #[test]
    fn test_decode_accepts_non_minimal() {
        assert_eq!(decode(&[0xFD, 0x05, 0x00]).unwrap(), (5, 3));
        assert_eq!(decode(&[0xFF, 0x01, 0, 0, 0, 0, 0, 0, 0]).unwrap(), (1, 9));
    }

    #[test]
    fn test_decode_short_input() {
        assert!(matches!(decode(&[]), Err(VarIntError::NeedMoreData(1))));
        assert!(matches!(decode(&[0xFD, 0x01]), Err(VarIntError::NeedMoreData(1))));
        assert!(matches!(decode(&[0xFF, 0x01]), Err(VarIntError::NeedMoreData(7))));
    }

    #[test]
    fn test_get_varint_leaves_buffer_on_short_input() {
        let mut buf = Bytes::from_static(&[0xFE, 0x01, 0x02]);
        assert!(get_varint(&mut buf).is_err());
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_buffer_sequence() {
        let mut buf = BytesMut::new();
        for value in [1, 300, 70_000, 5_000_000_000] {
            put_varint(&mut buf, value);
        }
        assert_eq!(buf.len(), 1 + 3 + 5 + 9);

        let mut buf = buf.freeze();
        assert_eq!(get_varint(&mut buf).unwrap(), 1);
        assert_eq!(get_varint(&mut buf).unwrap(), 300);
        assert_eq!(get_varint(&mut buf).unwrap(), 70_000);
        assert_eq!(get_varint(&mut buf).unwrap(), 5_000_000_000);
        assert!(!buf.has_remaining());
    }
}
