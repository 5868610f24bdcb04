//! Rover state and the primitive operations the interpreter dispatches to.

use crate::error::MissionError;
use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the plateau grid. Validity is only meaningful against a [`PlateauSize`](crate::PlateauSize).
pub type Coordinate = IVec2;

/// One of the four compass headings, in turning order N → E → S → W → N.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    const CYCLE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn index(self) -> i32 {
        self as i32
    }

    /// Rotates a quarter turn. Right walks the cycle forward, Left walks it backward.
    pub fn turn(self, turn: Turn) -> Direction {
        let offset = match turn {
            Turn::Left => -1,
            Turn::Right => 1,
        };
        Self::CYCLE[(self.index() + offset).rem_euclid(4) as usize]
    }

    /// Unit displacement of a single forward move.
    pub fn step(self) -> Coordinate {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// The heading turned 180 degrees.
    pub fn opposite(self) -> Direction {
        self.turn(Turn::Right).turn(Turn::Right)
    }

    /// Single-letter form used by mission input and output (`N`, `E`, `S`, `W`).
    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = MissionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Self::North),
            'E' => Ok(Self::East),
            'S' => Ok(Self::South),
            'W' => Ok(Self::West),
            _ => Err(MissionError::InvalidDirection(c)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

/// A rover's full state at an instant: where it stands and which way it faces.
///
/// Positions are values. Every operation returns a new position instead of mutating this one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoverPosition {
    pub coordinate: Coordinate,
    pub direction: Direction,
}

impl RoverPosition {
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self {
            coordinate: IVec2::new(x, y),
            direction,
        }
    }

    pub fn x(&self) -> i32 {
        self.coordinate.x
    }

    pub fn y(&self) -> i32 {
        self.coordinate.y
    }

    /// Same coordinate, heading rotated by `turn`.
    pub fn turned(self, turn: Turn) -> Self {
        Self {
            direction: self.direction.turn(turn),
            ..self
        }
    }

    /// The cell one step ahead, widened so a step past the `i32` range cannot wrap.
    /// Not bounds-checked.
    pub fn ahead(&self) -> I64Vec2 {
        self.coordinate.as_i64vec2() + self.direction.step().as_i64vec2()
    }
}

/// Renders as `x y D`, e.g. `1 3 N`.
impl fmt::Display for RoverPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x(), self.y(), self.direction)
    }
}

/// Operations a rover command can map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoverOp {
    /// Rotate in place (`L` / `R`).
    Turn(Turn),
    /// Advance one cell in the current heading (`M`).
    Move,
}
