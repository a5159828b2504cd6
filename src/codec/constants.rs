//! Constants describing the varint wire format.

/// Marker for a 2-byte little-endian payload.
pub const MARKER_U16: u8 = 0xFD;

/// Marker for a 4-byte little-endian payload.
pub const MARKER_U32: u8 = 0xFE;

/// Marker for an 8-byte little-endian payload.
pub const MARKER_U64: u8 = 0xFF;

/// Longest possible encoding: marker plus a `u64` payload.
pub const MAX_VARINT_LEN: usize = 9;

/// Number of payload bytes that follow the given first byte.
///
/// Returns 0 when the byte is the value itself (0..=252).
pub const fn payload_len(marker: u8) -> usize {
    match marker {
        MARKER_U16 => 2,
        MARKER_U32 => 4,
        MARKER_U64 => 8,
        _ => 0,
    }
}
