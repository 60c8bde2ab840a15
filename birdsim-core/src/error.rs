use thiserror::Error;

use crate::CreatureId;

/// Errors raised while configuring or driving a simulation
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("creature total must be non-negative, got {0}")]
    NegativeTotal(i64),
    #[error("fish percentage must lie within [0, 100], got {0}")]
    FishPercentOutOfRange(f32),
    #[error("bounds must be finite and non-negative, got ({x}, {y})")]
    InvalidBounds { x: f32, y: f32 },
    #[error("base speed must be finite, got {0}")]
    InvalidSpeed(f32),
    #[error("no shared movement values were provided; movers cannot tick without a base speed")]
    MissingMovementValues,
    #[error("creature {0} is not in the holder")]
    UnknownCreature(CreatureId),
    #[error("creature {0} appears more than once in the tick order")]
    DuplicateCreature(CreatureId),
}

pub type Result<T> = std::result::Result<T, SimError>;
