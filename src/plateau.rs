use crate::error::{MissionError, Result};
use crate::rover::Coordinate;
use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The plateau's inclusive upper-right corner. The lower-left corner is always `(0, 0)`.
///
/// Both components are non-negative; a `0 x 0` plateau is the single cell `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IVec2", into = "IVec2")]
pub struct PlateauSize(IVec2);

impl PlateauSize {
    pub fn new(x: i32, y: i32) -> Result<Self> {
        if x < 0 || y < 0 {
            return Err(MissionError::InvalidPlateau { x, y });
        }
        Ok(Self(IVec2::new(x, y)))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    pub fn corner(&self) -> Coordinate {
        self.0
    }

    /// Whether `coordinate` lies within `[0, x] x [0, y]`.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.contains_wide(coordinate.as_i64vec2())
    }

    /// [`contains`](Self::contains) for a candidate that may lie outside the `i32` range.
    pub fn contains_wide(&self, coordinate: I64Vec2) -> bool {
        coordinate.cmpge(I64Vec2::ZERO).all() && coordinate.cmple(self.0.as_i64vec2()).all()
    }
}

impl TryFrom<IVec2> for PlateauSize {
    type Error = MissionError;

    fn try_from(corner: IVec2) -> Result<Self> {
        Self::new(corner.x, corner.y)
    }
}

impl From<PlateauSize> for IVec2 {
    fn from(size: PlateauSize) -> Self {
        size.0
    }
}

impl fmt::Display for PlateauSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
