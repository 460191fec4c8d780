//! C ABI export for hosts that load the checksum as a native module.

use crate::word::crc8_of;

/// `crc8(x)` for the host's native integer. Only the low 16 bits of `x` are
/// used; the result is always in `0..=255`.
#[unsafe(no_mangle)]
pub extern "C" fn crc8(x: isize) -> isize {
    isize::from(crc8_of(x))
}
