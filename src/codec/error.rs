//! Errors raised while reading or writing varints.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VarIntError {
    /// The source failed or ended before the first byte could be read.
    #[error("failed to read varint marker byte")]
    MarkerRead(#[source] io::Error),

    /// The source ended before the payload announced by the marker was complete.
    #[error("truncated varint: marker {marker:#04x} needs {needed} payload byte(s)")]
    Truncated { marker: u8, needed: usize },

    /// The source failed while reading the payload.
    #[error("failed to read varint payload")]
    PayloadRead(#[source] io::Error),

    #[error("failed to write varint")]
    Write(#[source] io::Error),

    /// A slice or buffer ran out before the encoding was complete.
    #[error("need {0} byte(s) more data")]
    NeedMoreData(usize),
}

impl VarIntError {
    /// Whether the error came from the input side of the codec.
    pub fn is_read_error(&self) -> bool {
        !matches!(self, VarIntError::Write(_))
    }

    /// Whether the source was exhausted before a new varint started.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, VarIntError::MarkerRead(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
