//! The fourteen UM operations.

use std::fmt;
use thiserror::Error;

/// A 4-bit opcode outside `0..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid opcode {0:#x}, valid range is 0..=13")]
pub struct DecodeError(pub u8);

/// One of the fourteen UM operations.
///
/// Opcodes `0..=12` use the three-register layout (`A`, `B`, `C`); opcode `13`
/// (`LoadImmediate`) uses a single register and a 25-bit immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[repr(u8)]
pub enum Opcode {
    /// `if R[C] != 0 { R[A] = R[B] }`
    ConditionalMove = 0,
    /// `R[A] = segment[R[B]][R[C]]`
    SegmentedLoad = 1,
    /// `segment[R[A]][R[B]] = R[C]`
    SegmentedStore = 2,
    /// `R[A] = (R[B] + R[C]) mod 2^32`
    Add = 3,
    /// `R[A] = (R[B] * R[C]) mod 2^32`
    Multiply = 4,
    /// `R[A] = R[B] / R[C]` (unsigned; division by zero is fatal)
    Divide = 5,
    /// `R[A] = !(R[B] & R[C])`
    Nand = 6,
    /// Terminate successfully.
    Halt = 7,
    /// Allocate a segment of `R[C]` words; `R[B] = id`.
    MapSegment = 8,
    /// Release segment `R[C]`. Segment `0` must never be the target.
    UnmapSegment = 9,
    /// Write the low byte of `R[C]` to standard output; `R[C]` must be `0..=255`.
    Output = 10,
    /// Read one byte from standard input into `R[C]`; `0xFFFFFFFF` on EOF.
    Input = 11,
    /// `duplicate_into_zero(R[B]); pc = R[C]`
    LoadProgram = 12,
    /// `R[A] = value` (25-bit unsigned immediate)
    LoadImmediate = 13,
}

impl Opcode {
    /// The opcodes that use the three-register layout (everything but
    /// [`Opcode::LoadImmediate`]).
    pub const fn is_three_register(self) -> bool {
        !matches!(self, Opcode::LoadImmediate)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(op: u8) -> Result<Self, Self::Error> {
        use Opcode::*;
        Ok(match op {
            0 => ConditionalMove,
            1 => SegmentedLoad,
            2 => SegmentedStore,
            3 => Add,
            4 => Multiply,
            5 => Divide,
            6 => Nand,
            7 => Halt,
            8 => MapSegment,
            9 => UnmapSegment,
            10 => Output,
            11 => Input,
            12 => LoadProgram,
            13 => LoadImmediate,
            other => return Err(DecodeError(other)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_opcode_round_trips_through_its_discriminant() {
        for op in Opcode::iter() {
            let byte = op as u8;
            assert_eq!(Opcode::try_from(byte).unwrap(), op);
        }
    }

    #[test]
    fn opcodes_outside_range_are_rejected() {
        for byte in 14..=255u8 {
            assert_eq!(Opcode::try_from(byte), Err(DecodeError(byte)));
        }
    }
}
