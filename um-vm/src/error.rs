//! Runtime fault taxonomy.
//!
//! The UM core has exactly one storage backend (the in-process
//! [`crate::segment::SegmentStore`]), so faults are a single flat enum
//! rather than split by a generic storage-error parameter. Every variant
//! here is a fatal, unrecoverable condition: the engine never retries or
//! recovers, it converts a `Fault` straight into a process exit.

use thiserror::Error;

/// A fatal runtime condition. Every variant terminates the process with a
/// non-zero exit status once it reaches the top level.
#[derive(Debug, Error)]
pub enum Fault {
    /// The 4-bit opcode field did not name one of the fourteen operations.
    #[error("invalid instruction: {0}")]
    Decode(#[from] um_asm::DecodeError),

    /// Division by zero in the `Divide` instruction.
    #[error("division by zero")]
    DivideByZero,

    /// `load`, `store`, or `unmap` named a segment identifier that is not
    /// currently live.
    #[error("segment {0} is not mapped")]
    UnknownSegment(u32),

    /// `load` or `store` named an offset at or beyond the segment's length.
    #[error("offset {offset} is out of range for segment {id} (length {length})")]
    OffsetOutOfRange {
        /// The segment identifier.
        id: u32,
        /// The offset that was requested.
        offset: u32,
        /// The segment's length, in words.
        length: u32,
    },

    /// `unmap` named segment `0`, which is never a legal unmap target.
    #[error("segment 0 cannot be unmapped")]
    UnmapZero,

    /// `output`'s `R[C]` held a value outside `0..=255`.
    #[error("output value {0:#010x} is not a single byte")]
    OutputOutOfRange(u32),

    /// The program binary's size was not a positive multiple of 4 bytes.
    #[error("program file size must be a positive multiple of 4 bytes, got {0}")]
    MisalignedProgram(u64),

    /// Reading the program file or a standard stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
