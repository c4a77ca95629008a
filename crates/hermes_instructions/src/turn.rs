use std::fmt::Display;

use crate::error::InstructionError;

/// Maneuver kind of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnCode {
    SharpLeft,
    Left,
    SlightLeft,
    Continue,
    SlightRight,
    Right,
    SharpRight,
    Finish,
    /// `via_position` is the 1-based index of the reached via point.
    ReachedVia { via_position: usize },
}

impl TurnCode {
    pub const SHARP_LEFT: i32 = -3;
    pub const LEFT: i32 = -2;
    pub const SLIGHT_LEFT: i32 = -1;
    pub const CONTINUE: i32 = 0;
    pub const SLIGHT_RIGHT: i32 = 1;
    pub const RIGHT: i32 = 2;
    pub const SHARP_RIGHT: i32 = 3;
    pub const FINISH: i32 = 4;
    pub const REACHED_VIA: i32 = 5;

    /// `via_position` is only read for [`TurnCode::REACHED_VIA`].
    pub fn from_sign(sign: i32, via_position: Option<usize>) -> Result<TurnCode, InstructionError> {
        let turn = match sign {
            Self::SHARP_LEFT => TurnCode::SharpLeft,
            Self::LEFT => TurnCode::Left,
            Self::SLIGHT_LEFT => TurnCode::SlightLeft,
            Self::CONTINUE => TurnCode::Continue,
            Self::SLIGHT_RIGHT => TurnCode::SlightRight,
            Self::RIGHT => TurnCode::Right,
            Self::SHARP_RIGHT => TurnCode::SharpRight,
            Self::FINISH => TurnCode::Finish,
            Self::REACHED_VIA => TurnCode::ReachedVia {
                via_position: via_position.ok_or(InstructionError::MissingViaPosition)?,
            },
            _ => return Err(InstructionError::UnknownTurnCode(sign)),
        };

        Ok(turn)
    }

    pub fn sign(&self) -> i32 {
        match self {
            TurnCode::SharpLeft => Self::SHARP_LEFT,
            TurnCode::Left => Self::LEFT,
            TurnCode::SlightLeft => Self::SLIGHT_LEFT,
            TurnCode::Continue => Self::CONTINUE,
            TurnCode::SlightRight => Self::SLIGHT_RIGHT,
            TurnCode::Right => Self::RIGHT,
            TurnCode::SharpRight => Self::SHARP_RIGHT,
            TurnCode::Finish => Self::FINISH,
            TurnCode::ReachedVia { .. } => Self::REACHED_VIA,
        }
    }

    pub fn via_position(&self) -> Option<usize> {
        match self {
            TurnCode::ReachedVia { via_position } => Some(*via_position),
            _ => None,
        }
    }
}

impl TryFrom<i32> for TurnCode {
    type Error = InstructionError;

    fn try_from(sign: i32) -> Result<Self, Self::Error> {
        TurnCode::from_sign(sign, None)
    }
}

impl Display for TurnCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sign())
    }
}
