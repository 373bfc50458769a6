//! Error types.
//!
//! Move rejections are ordinary values: the validator returns
//! `Err(MoveError)` and the engine reports `MoveOutcome::NotValid`.
//! Nothing in the move path panics on bad input.

use super::coord::{Coord, Direction};
use super::player::Player;

/// Coarse classification of a rejected move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    WrongPlayer,
    GameOver,
    InvalidSelection,
    InvalidTarget,
    InvalidFinalize,
    MalformedMove,
}

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("not your turn ({expected} to move)")]
    NotYourTurn { expected: Player },

    #[error("game is over, {winner} won")]
    GameOver { winner: Player },

    // === Select ===
    #[error("already selected")]
    AlreadySelected,

    #[error("bullpen is empty")]
    EmptyBullpen,

    #[error("no piece of yours at {0}")]
    NotOwnPiece(Coord),

    // === Target ===
    #[error("select something first")]
    NothingSelected,

    #[error("already targeted")]
    AlreadyTargeted,

    #[error("{0} is not on an edge")]
    NotOnEdge(Coord),

    #[error("cannot target the bullpen from the bullpen")]
    BullpenToBullpen,

    #[error("{0} is not adjacent")]
    NotAdjacent(Coord),

    #[error("{0} is not in front of the selected piece")]
    NotInFront(Coord),

    #[error("insufficient push strength")]
    InsufficientStrength,

    // === Finalize ===
    #[error("nothing to finalize")]
    NothingToFinalize,

    #[error("this move needs a direction")]
    ExpectedDirection,

    #[error("this move needs confirm")]
    ExpectedConfirm,

    #[error("same direction")]
    SameDirection,

    #[error("cannot push {0} from this edge")]
    InvalidPushDirection(Direction),

    // === Shape ===
    #[error("malformed move: {0}")]
    Malformed(#[from] ParseMoveError),

    #[error("malformed move: {0}")]
    OffBoard(#[from] OffBoard),

    #[error("move does not fit the current turn")]
    Inconsistent,
}

impl MoveError {
    /// Classify this rejection.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        use MoveError::*;

        match self {
            NotYourTurn { .. } => ErrorKind::WrongPlayer,
            GameOver { .. } => ErrorKind::GameOver,
            AlreadySelected | EmptyBullpen | NotOwnPiece(_) => ErrorKind::InvalidSelection,
            NothingSelected
            | AlreadyTargeted
            | NotOnEdge(_)
            | BullpenToBullpen
            | NotAdjacent(_)
            | NotInFront(_)
            | InsufficientStrength => ErrorKind::InvalidTarget,
            NothingToFinalize
            | ExpectedDirection
            | ExpectedConfirm
            | SameDirection
            | InvalidPushDirection(_) => ErrorKind::InvalidFinalize,
            Malformed(_) | MoveError::OffBoard(_) | Inconsistent => ErrorKind::MalformedMove,
        }
    }
}

/// A coordinate outside `1..=5` on either axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("({x},{y}) is off the board")]
pub struct OffBoard {
    pub x: i16,
    pub y: i16,
}

/// Textual move notation that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("expected `<player> <phase> <payload>`, got {0:?}")]
    Shape(String),

    #[error("unknown player {0:?}")]
    Player(String),

    #[error("unknown phase {0:?}")]
    Phase(String),

    #[error("payload {payload:?} does not fit phase {phase}")]
    Payload { phase: String, payload: String },
}

/// Errors from session history operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no prior turn to undo")]
    NoPriorTurn,
}

/// Errors that can occur when building a rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::SameDirection.to_string(), "same direction");
        assert_eq!(
            MoveError::NotYourTurn { expected: Player::A }.to_string(),
            "not your turn (A to move)"
        );
        assert_eq!(
            MoveError::NotOnEdge(Coord::new(3, 3)).to_string(),
            "3,3 is not on an edge"
        );
    }

    #[test]
    fn test_move_error_kind() {
        assert_eq!(MoveError::EmptyBullpen.kind(), ErrorKind::InvalidSelection);
        assert_eq!(MoveError::AlreadyTargeted.kind(), ErrorKind::InvalidTarget);
        assert_eq!(MoveError::InsufficientStrength.kind(), ErrorKind::InvalidTarget);
        assert_eq!(MoveError::SameDirection.kind(), ErrorKind::InvalidFinalize);
        assert_eq!(
            MoveError::from(ParseMoveError::Phase("jump".into())).kind(),
            ErrorKind::MalformedMove
        );

        let off = MoveError::from(OffBoard { x: 6, y: 5 });
        assert_eq!(off.kind(), ErrorKind::MalformedMove);
        assert_eq!(off.to_string(), "malformed move: (6,5) is off the board");
    }

    #[test]
    fn test_session_error_display() {
        assert_eq!(SessionError::NoPriorTurn.to_string(), "no prior turn to undo");
    }
}
