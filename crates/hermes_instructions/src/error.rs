use thiserror::Error;

/// Broken invariants of an instruction or route. These come from a malformed
/// route upstream and are never recovered from.
#[derive(Debug, Error)]
pub enum InstructionError {
    #[error("Instruction must contain at least one point {instruction}")]
    EmptyInstruction { instruction: String },

    #[error("Turn code not found: {0}")]
    UnknownTurnCode(i32),

    #[error("Reached via instruction without a via position")]
    MissingViaPosition,

    #[error("Instruction has a time but no distance {instruction}")]
    ZeroDistance { instruction: String },

    #[error("Distance must be finite and not negative {instruction}")]
    InvalidDistance { instruction: String },

    #[error("Time overflows after {instruction}")]
    TimeOverflow { instruction: String },

    #[error("Invalid coordinates at point {index}: {reason}")]
    InvalidCoordinates { index: usize, reason: String },
}
