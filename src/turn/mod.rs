//! Turns: snapshots, moves and move outcomes.
//!
//! A turn is played in three phases (select, target, finalize). Each
//! accepted phase yields a new `TurnSnapshot`; the finalize phase closes
//! the turn and derives the next one.

mod moves;
mod outcome;
mod snapshot;

pub use moves::{Finalization, Move, Phase, Selectable};
pub use outcome::MoveOutcome;
pub use snapshot::{PendingAction, TurnSnapshot};
