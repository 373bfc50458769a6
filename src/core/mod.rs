//! Core value types: coordinates, directions, players, pieces,
//! configuration and errors.
//!
//! Everything here is a small `Copy` value or a plain error enum. The
//! board and the rules build on top of these.

pub mod coord;
pub mod player;
pub mod piece;
pub mod config;
pub mod error;

pub use coord::{Coord, Direction, BOARD_SIZE};
pub use player::{Player, PlayerMap};
pub use piece::Piece;
pub use config::{RulesConfig, MAX_BULLPEN};
pub use error::{ConfigError, ErrorKind, MoveError, OffBoard, ParseMoveError, SessionError};
