//! Bitcoin-style variable-length integer codec.
//!
//! Values below `0xFD` take a single byte. Larger values are written as a
//! marker byte (`0xFD`, `0xFE` or `0xFF`) followed by a little-endian
//! `u16`, `u32` or `u64` payload.

pub mod codec;

pub use codec::{
    VarIntError, decode, encode, encoded_len, get_varint, put_varint, read_varint,
    try_read_varint, write_varint,
};
