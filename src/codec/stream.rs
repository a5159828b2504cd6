//! Varint adapters over `std::io` readers and writers.

use std::io::{self, Read, Write};

use tracing::{debug, trace};

use super::constants::{MAX_VARINT_LEN, payload_len};
use super::error::VarIntError;
use super::varint::{decode, encode};

/// Encode `value` and write it to `writer` in one `write_all` call.
///
/// Returns the number of bytes written. Sink failures are surfaced as
/// [`VarIntError::Write`] rather than dropped.
pub fn write_varint<W: Write>(writer: &mut W, value: u64) -> Result<usize, VarIntError> {
    let bytes = encode(value);
    writer.write_all(&bytes).map_err(VarIntError::Write)?;
    Ok(bytes.len())
}

/// Read one varint from `reader`.
///
/// The marker byte is read first, then exactly as many payload bytes as
/// it announces. A payload cut short by end-of-stream is reported as
/// [`VarIntError::Truncated`] and never decoded as a narrower value.
pub fn read_varint<R: Read>(reader: &mut R) -> Result<u64, VarIntError> {
    let mut frame = [0u8; MAX_VARINT_LEN];
    reader
        .read_exact(&mut frame[..1])
        .map_err(VarIntError::MarkerRead)?;

    let marker = frame[0];
    let needed = payload_len(marker);
    trace!(marker, needed, "read varint marker");

    if needed > 0 {
        reader
            .read_exact(&mut frame[1..=needed])
            .map_err(|err| match err.kind() {
                io::ErrorKind::UnexpectedEof => {
                    debug!(marker, needed, "varint payload cut short");
                    VarIntError::Truncated { marker, needed }
                }
                _ => VarIntError::PayloadRead(err),
            })?;
    }

    let (value, _) = decode(&frame[..=needed])?;
    Ok(value)
}

/// Read one varint, treating end-of-stream before the marker as `None`.
///
/// Useful for draining a source that holds a sequence of varints. End of
/// stream in the middle of a payload is still an error.
pub fn try_read_varint<R: Read>(reader: &mut R) -> Result<Option<u64>, VarIntError> {
    match read_varint(reader) {
        Err(err) if err.is_end_of_stream() => Ok(None),
        other => other.map(Some),
    }
}
