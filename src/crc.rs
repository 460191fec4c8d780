//! CRC-8 with polynomial 0xD5, init 0xFF, MSB-first, no reflection and no
//! final XOR. Bit-by-bit implementation.

/// Generator polynomial, without the implicit x^8 term.
pub const POLYNOMIAL: u8 = 0xD5;

/// Initial register value. Also the CRC of an empty message.
pub const INIT: u8 = 0xFF;

/// CRC of ASCII `"123456789"`.
pub const CHECK: u8 = 0x7C;

/// Fold one byte into the register.
#[inline]
const fn step(mut crc: u8, byte: u8) -> u8 {
    crc ^= byte;
    let mut bit = 0;
    while bit < 8 {
        if crc & 0x80 != 0 {
            crc = (crc << 1) ^ POLYNOMIAL;
        } else {
            crc <<= 1;
        }
        bit += 1;
    }
    crc
}

/// CRC of a 16-bit word, high byte first.
///
/// ```
/// assert_eq!(crc8_d5::crc8(0x0000), 0x78);
/// assert_eq!(crc8_d5::crc8(0xFFFF), 0xF9);
/// ```
#[inline]
#[must_use]
pub const fn crc8(x: u16) -> u8 {
    let [high, low] = x.to_be_bytes();
    step(step(INIT, high), low)
}

/// CRC over an arbitrary byte slice with the same parameters as [`crc8`].
#[must_use]
pub const fn crc8_bytes(data: &[u8]) -> u8 {
    let mut crc = INIT;
    let mut i = 0;
    while i < data.len() {
        crc = step(crc, data[i]);
        i += 1;
    }
    crc
}

/// Validate a message whose last byte is the CRC of the bytes before it.
///
/// There is no final XOR, so a correctly framed message leaves a zero
/// register behind. An empty slice carries no checksum and is never valid.
#[must_use]
pub const fn is_valid(data: &[u8]) -> bool {
    !data.is_empty() && crc8_bytes(data) == 0
}

/// Incremental CRC state, for data that arrives in pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc8 {
    crc: u8,
}

impl Crc8 {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { crc: INIT }
    }

    /// One-shot checksum, same as [`crc8_bytes`].
    #[inline]
    #[must_use]
    pub const fn checksum(data: &[u8]) -> u8 {
        crc8_bytes(data)
    }

    pub fn update(&mut self, data: &[u8]) {
        self.crc = data.iter().fold(self.crc, |crc, &byte| step(crc, byte));
    }

    #[inline]
    #[must_use]
    pub const fn finalize(self) -> u8 {
        self.crc
    }
}

impl Default for Crc8 {
    fn default() -> Self {
        Self::new()
    }
}
