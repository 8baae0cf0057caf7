//! Big-endian bit-field codec over a 64-bit word.
//!
//! Every UM instruction word, and every byte group read from a program
//! binary, is packed and unpacked through these primitives. A field has a
//! `width` in `0..=64` and a least-significant-bit offset `lsb`, with
//! `width + lsb <= 64`; callers that violate that contract have a bug, so we
//! assert rather than return a `Result` for it. The only recoverable failure
//! is writing a value that doesn't fit its advertised width.
//!
//! A width-zero field always reads as `0` and can only be written with `0`;
//! any other value overflows. Signed extraction relies on Rust's `>>` being
//! an arithmetic (sign-extending) shift for signed integer types, so no
//! manual sign-extension is needed on any platform Rust targets.

use thiserror::Error;

/// Failure writing a value into a bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitpackError {
    /// `value` does not fit in a field of the given `width`.
    #[error("value does not fit in a {width}-bit field at offset {lsb}")]
    Overflow {
        /// Width of the field, in bits.
        width: u32,
        /// Least-significant-bit offset of the field.
        lsb: u32,
    },
}

fn field_mask(width: u32, lsb: u32) -> u64 {
    if width == 64 {
        u64::MAX
    } else {
        ((1u64 << width) - 1) << lsb
    }
}

/// `true` iff `n` fits unsigned in `width` bits.
pub fn fits_unsigned(n: u64, width: u32) -> bool {
    assert!(width <= 64, "width must be <= 64");
    if width == 0 {
        return n == 0;
    }
    let shift = 64 - width;
    (n << shift) >> shift == n
}

/// `true` iff `n` fits two's-complement signed in `width` bits.
pub fn fits_signed(n: i64, width: u32) -> bool {
    assert!(width <= 64, "width must be <= 64");
    if width == 0 {
        return n == 0;
    }
    let shift = 64 - width;
    (n << shift) >> shift == n
}

/// Extract the `width`-bit unsigned field at `lsb`. Returns `0` when `width` is `0`.
pub fn get_unsigned(word: u64, width: u32, lsb: u32) -> u64 {
    if width == 0 {
        return 0;
    }
    assert!(width <= 64 && width + lsb <= 64, "bit field out of range");
    (word & field_mask(width, lsb)) >> lsb
}

/// Extract the `width`-bit signed field at `lsb`, sign-extending. Returns `0`
/// when `width` is `0`.
pub fn get_signed(word: u64, width: u32, lsb: u32) -> i64 {
    if width == 0 {
        return 0;
    }
    assert!(width <= 64 && width + lsb <= 64, "bit field out of range");
    let shift = 64 - (lsb + width);
    ((word as i64) << shift) >> (64 - width)
}

/// Return `word` with bits `[lsb, lsb+width)` replaced by `value`.
///
/// # Errors
///
/// Returns [`BitpackError::Overflow`] if `value` does not fit unsigned in
/// `width` bits.
pub fn new_unsigned(
    word: u64,
    width: u32,
    lsb: u32,
    value: u64,
) -> Result<u64, BitpackError> {
    assert!(width <= 64 && width + lsb <= 64, "bit field out of range");
    if !fits_unsigned(value, width) {
        return Err(BitpackError::Overflow { width, lsb });
    }
    if width == 0 {
        return Ok(word);
    }
    let mask = field_mask(width, lsb);
    Ok((word & !mask) | ((value << lsb) & mask))
}

/// Return `word` with bits `[lsb, lsb+width)` replaced by the two's-complement
/// encoding of `value`.
///
/// # Errors
///
/// Returns [`BitpackError::Overflow`] if `value` does not fit signed in
/// `width` bits.
pub fn new_signed(word: u64, width: u32, lsb: u32, value: i64) -> Result<u64, BitpackError> {
    assert!(width <= 64 && width + lsb <= 64, "bit field out of range");
    if !fits_signed(value, width) {
        return Err(BitpackError::Overflow { width, lsb });
    }
    if width == 0 {
        return Ok(word);
    }
    let mask = field_mask(width, lsb);
    Ok((word & !mask) | ((value as u64) << lsb & mask))
}
