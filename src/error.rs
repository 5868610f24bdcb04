use crate::plateau::PlateauSize;
use crate::rover::Coordinate;
use glam::I64Vec2;
use thiserror::Error;

/// Every way a mission run can fail. All of them abort the whole run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MissionError {
    #[error("Invalid command: {0:?}")]
    InvalidCommand(char),

    /// `attempted` is wider than [`Coordinate`] so a step past the `i32` range is reported exactly.
    #[error("Rover would leave the plateau: attempted {attempted}, plateau is {bounds}")]
    OutOfBounds {
        attempted: I64Vec2,
        bounds: PlateauSize,
    },

    #[error("Position {0} is already occupied by another rover")]
    OccupiedPosition(Coordinate),

    #[error("Got {starts} starting positions but {commands} command sequences")]
    LengthMismatch { starts: usize, commands: usize },

    #[error("Invalid direction: {0:?}")]
    InvalidDirection(char),

    #[error("Plateau corner must be non-negative, got ({x}, {y})")]
    InvalidPlateau { x: i32, y: i32 },
}

pub type Result<T> = std::result::Result<T, MissionError>;
