//! Engine parameters.

/// Number of general-purpose registers in the register file.
pub const REGISTER_COUNT: usize = 8;

/// Number of fresh identifiers allocated into the free pool each time the
/// segment table grows. The exact value is an implementation detail; it
/// only bounds the amortised cost of `map`.
pub const SEGMENT_TABLE_GROWTH: usize = 1024;

/// The sentinel word `input` stores on end-of-file.
pub const INPUT_EOF_SENTINEL: u32 = 0xFFFF_FFFF;
