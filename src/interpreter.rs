//! Interpreter that folds rover command strings over starting positions.
//!
//! The entry point is [`RoverInterpreter`]. Configure it with a [`MissionConfig`], optionally
//! register extra command aliases via [`RoverInterpreter::set_op`], then call
//! [`RoverInterpreter::run_missions`]. [`execute_mission`] does the same with the defaults.

use crate::error::{MissionError, Result};
use crate::plateau::PlateauSize;
use crate::rover::{Coordinate, RoverOp, RoverPosition, Turn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// What to do when the starting positions and command sequences differ in length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthPolicy {
    /// Refuse to run with [`MissionError::LengthMismatch`].
    #[default]
    Strict,
    /// Run as many missions as the shorter list allows.
    Truncate,
}

/// Configuration for mission interpretation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MissionConfig {
    /// How to pair starting positions with command sequences of a different count.
    /// Default: [`LengthPolicy::Strict`].
    pub length_policy: LengthPolicy,
}

/// Interprets rover command sequences on a plateau.
///
/// Holds no state between runs, so repeated calls with the same inputs give the same results.
#[derive(Clone, Debug)]
pub struct RoverInterpreter {
    op_map: HashMap<char, RoverOp>,
    config: MissionConfig,
}

impl Default for RoverInterpreter {
    fn default() -> Self {
        Self::new(MissionConfig::default())
    }
}

impl RoverInterpreter {
    /// Creates an interpreter with the standard `L`, `R`, `M` commands registered.
    pub fn new(config: MissionConfig) -> Self {
        let mut interpreter = Self {
            op_map: HashMap::new(),
            config,
        };
        interpreter.populate_standard_commands();
        interpreter
    }

    /// The configuration this interpreter was built with.
    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// Assigns an operation to a command character.
    ///
    /// Commands are matched after uppercasing, so `symbol` is stored uppercased as well.
    pub fn set_op(&mut self, symbol: char, op: RoverOp) {
        self.op_map.insert(symbol.to_ascii_uppercase(), op);
    }

    /// Builder form of [`set_op`](Self::set_op).
    pub fn with_op(mut self, symbol: char, op: RoverOp) -> Self {
        self.set_op(symbol, op);
        self
    }

    /// Registers `L`, `R` and `M`.
    pub fn populate_standard_commands(&mut self) {
        let mappings = [
            ('L', RoverOp::Turn(Turn::Left)),
            ('R', RoverOp::Turn(Turn::Right)),
            ('M', RoverOp::Move),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Applies a single command to `position`.
    ///
    /// Turns always succeed. A move fails with [`MissionError::OutOfBounds`] when the cell
    /// ahead lies outside `bounds`. Unmapped commands fail with [`MissionError::InvalidCommand`].
    pub fn apply(
        &self,
        position: RoverPosition,
        command: char,
        bounds: PlateauSize,
    ) -> Result<RoverPosition> {
        let op = self
            .op_map
            .get(&command)
            .ok_or(MissionError::InvalidCommand(command))?;

        let next = match op {
            RoverOp::Turn(turn) => position.turned(*turn),
            RoverOp::Move => {
                let attempted = position.ahead();
                if !bounds.contains_wide(attempted) {
                    return Err(MissionError::OutOfBounds { attempted, bounds });
                }
                // In bounds, so it fits back into i32.
                RoverPosition {
                    coordinate: attempted.as_ivec2(),
                    ..position
                }
            }
        };

        trace!(%command, from = %position, to = %next, "applied command");
        Ok(next)
    }

    /// Folds a whole command sequence over `start`, uppercasing it first.
    ///
    /// An empty sequence leaves the rover where it started.
    pub fn drive(
        &self,
        start: RoverPosition,
        commands: &str,
        bounds: PlateauSize,
    ) -> Result<RoverPosition> {
        commands
            .to_uppercase()
            .chars()
            .try_fold(start, |position, command| {
                self.apply(position, command, bounds)
            })
    }

    /// Runs every mission in order and returns the finalized positions.
    ///
    /// Mission `i` drives `starts[i]` with `command_sequences[i]`. Its final coordinate must not
    /// coincide with the final coordinate of any earlier mission, regardless of heading, or the
    /// run fails with [`MissionError::OccupiedPosition`]. The first error of any kind aborts the
    /// run and no partial results are returned.
    pub fn run_missions<S: AsRef<str>>(
        &self,
        bounds: PlateauSize,
        starts: &[RoverPosition],
        command_sequences: &[S],
    ) -> Result<Vec<RoverPosition>> {
        if starts.len() != command_sequences.len() {
            match self.config.length_policy {
                LengthPolicy::Strict => {
                    return Err(MissionError::LengthMismatch {
                        starts: starts.len(),
                        commands: command_sequences.len(),
                    });
                }
                LengthPolicy::Truncate => debug!(
                    starts = starts.len(),
                    commands = command_sequences.len(),
                    "truncating missions to the shorter input"
                ),
            }
        }

        let mut finalized = Vec::with_capacity(starts.len().min(command_sequences.len()));
        let mut occupied: HashSet<Coordinate> = HashSet::with_capacity(finalized.capacity());

        for (index, (start, commands)) in starts.iter().zip(command_sequences).enumerate() {
            let commands = commands.as_ref();
            debug!(mission = index, %start, commands, "starting mission");

            let end = self.drive(*start, commands, bounds)?;

            if !occupied.insert(end.coordinate) {
                return Err(MissionError::OccupiedPosition(end.coordinate));
            }

            debug!(mission = index, %end, "mission finalized");
            finalized.push(end);
        }

        Ok(finalized)
    }
}

/// Runs the missions with the standard command set and default configuration.
///
/// See [`RoverInterpreter::run_missions`].
pub fn execute_mission<S: AsRef<str>>(
    plateau_size: PlateauSize,
    starting_positions: &[RoverPosition],
    command_sequences: &[S],
) -> Result<Vec<RoverPosition>> {
    RoverInterpreter::default().run_missions(plateau_size, starting_positions, command_sequences)
}
