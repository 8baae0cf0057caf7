//! Instruction encoding for the UM core: the bit-field codec, the 32-bit
//! instruction decoder, and the opcode table.
#![warn(missing_docs)]

pub mod bitpack;
pub mod instruction;
pub mod opcode;

pub use bitpack::BitpackError;
pub use instruction::Instruction;
pub use opcode::{DecodeError, Opcode};

/// The UM's natural word size.
pub type Word = u32;

/// Index of one of the eight general-purpose registers, `0..=7`.
pub type RegId = u8;
