//! # rover-mission
//!
//! Simulates rovers driven across a bounded rectangular plateau by `L`/`R`/`M` command strings.
//!
//! Each rover's command sequence is folded over its starting [`RoverPosition`] by the
//! [`RoverInterpreter`]. Missions run strictly in input order, and every finalized position is
//! checked against the ones before it so that no two rovers come to rest on the same cell.
//! Parsing mission text and formatting results are left to the caller.

pub mod error;
pub mod interpreter;
pub mod plateau;
pub mod rover;

pub use error::*;
pub use interpreter::*;
pub use plateau::*;
pub use rover::*;
