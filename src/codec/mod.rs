//! Varint encoding, decoding and stream adapters.

pub mod constants;
mod error;
mod stream;
mod varint;

// Re-export public API
pub use error::VarIntError;
pub use stream::{read_varint, try_read_varint, write_varint};
pub use varint::{decode, encode, encoded_len, get_varint, put_varint};
