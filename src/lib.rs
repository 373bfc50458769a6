//! # siam
//!
//! Rules engine for a two-player push game on a 5x5 board with three
//! neutral mountains in the middle row.
//!
//! ## Design Principles
//!
//! 1. **Snapshots Are Values**: every accepted move produces a new
//!    `TurnSnapshot`. Nothing is mutated in place, so old snapshots can be
//!    shared with observers without locking.
//!
//! 2. **Validate, Then Apply**: the validator is pure and decides
//!    legality; the processor trusts it and computes the result.
//!
//! 3. **Exact Arithmetic**: push strength is fixed-point, so mountain
//!    resistance sums are exact.
//!
//! ## Architecture
//!
//! - **Three-Phase Turns**: select, target, finalize. Target infers a
//!   `PendingAction`; finalize supplies a facing or `confirm`.
//!
//! - **Persistent Data Structures**: O(1) cloning of boards and history
//!   via `im`.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, players, pieces, config, errors
//! - `board`: Board, geometry, push engine
//! - `turn`: Turn snapshots, moves, outcomes
//! - `rules`: Validator, processor, `RulesEngine`
//! - `session`: History, undo, shared handle

pub mod core;
pub mod board;
pub mod turn;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Coord, Direction, ErrorKind, MoveError, OffBoard, ParseMoveError, Piece, Player,
    PlayerMap, RulesConfig, SessionError,
};

pub use crate::board::{Board, PushResult, Strength};

pub use crate::turn::{Finalization, Move, MoveOutcome, PendingAction, Phase, Selectable, TurnSnapshot};

pub use crate::rules::{RulesEngine, SiamRules};

pub use crate::session::{Session, SharedSession};
