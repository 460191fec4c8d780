//! CRC-8 checksum (poly 0xD5, init 0xFF, MSB-first, no final XOR) over a
//! 16-bit word, packaged as a native module for an embedded scripting host.
//! The Rust API and the exported C symbol `crc8` compute the same value.

pub mod crc;
pub mod error;
pub mod ffi;
pub mod word;

pub use crc::{CHECK, Crc8, INIT, POLYNOMIAL, crc8, crc8_bytes, is_valid};
pub use error::Error;
pub use word::{Word, crc8_of, crc8_str, parse_word};
