//! Move legality.
//!
//! `validate` decides whether a move may be applied to a snapshot. It
//! never mutates anything and always gives the same answer for the same
//! inputs. The first failing check wins:
//!
//! 1. the game must not be over
//! 2. the mover must be the current player
//! 3. a coordinate payload must lie on the board
//! 4. the phase-specific rules below

use crate::board::{
    edge_push_directions, is_in_front, is_orthogonal_adjacent, is_pushable,
    is_pushable_from_edge, on_edge,
};
use crate::core::{MoveError, OffBoard};
use crate::turn::{Finalization, Move, PendingAction, Phase, Selectable, TurnSnapshot};

/// Check a move against a snapshot without applying it.
pub fn validate(snapshot: &TurnSnapshot, mv: &Move) -> Result<(), MoveError> {
    if let Some(winner) = snapshot.winner {
        return Err(MoveError::GameOver { winner });
    }
    if mv.player != snapshot.current_player {
        return Err(MoveError::NotYourTurn {
            expected: snapshot.current_player,
        });
    }
    if snapshot.completed {
        return Err(MoveError::Inconsistent);
    }
    if let Phase::Select(Selectable::Cell(c)) | Phase::Target(Selectable::Cell(c)) = mv.phase {
        if !c.is_on_board() {
            return Err(OffBoard {
                x: c.x().into(),
                y: c.y().into(),
            }
            .into());
        }
    }

    match mv.phase {
        Phase::Select(what) => validate_select(snapshot, what),
        Phase::Target(what) => validate_target(snapshot, what),
        Phase::Finalize(finalization) => validate_finalize(snapshot, finalization),
    }
}

fn validate_select(snapshot: &TurnSnapshot, what: Selectable) -> Result<(), MoveError> {
    if snapshot.selected.is_some() {
        return Err(MoveError::AlreadySelected);
    }

    let player = snapshot.current_player;
    match what {
        Selectable::Bullpen if snapshot.bullpen(player) == 0 => Err(MoveError::EmptyBullpen),
        Selectable::Bullpen => Ok(()),
        Selectable::Cell(c) if snapshot.board[c].is_owned_by(player) => Ok(()),
        Selectable::Cell(c) => Err(MoveError::NotOwnPiece(c)),
    }
}

fn validate_target(snapshot: &TurnSnapshot, target: Selectable) -> Result<(), MoveError> {
    let Some(selected) = snapshot.selected else {
        return Err(MoveError::NothingSelected);
    };
    if snapshot.targeted.is_some() {
        return Err(MoveError::AlreadyTargeted);
    }

    let board = &snapshot.board;
    match (selected, target) {
        (Selectable::Bullpen, Selectable::Bullpen) => Err(MoveError::BullpenToBullpen),

        // Entering from the bullpen.
        (Selectable::Bullpen, Selectable::Cell(t)) => {
            if !on_edge(t) {
                return Err(MoveError::NotOnEdge(t));
            }
            if board[t].is_empty() {
                return Ok(());
            }
            let any_feasible = edge_push_directions(t)
                .into_iter()
                .any(|d| is_pushable_from_edge(board, t, d));
            if any_feasible {
                Ok(())
            } else {
                Err(MoveError::InsufficientStrength)
            }
        }

        // Withdraw.
        (Selectable::Cell(s), Selectable::Bullpen) => {
            if on_edge(s) {
                Ok(())
            } else {
                Err(MoveError::NotOnEdge(s))
            }
        }

        // Rotate in place.
        (Selectable::Cell(s), Selectable::Cell(t)) if s == t => Ok(()),

        // Step or push.
        (Selectable::Cell(s), Selectable::Cell(t)) => {
            if !is_orthogonal_adjacent(s, t) {
                return Err(MoveError::NotAdjacent(t));
            }
            if board[t].is_empty() {
                return Ok(());
            }
            if !is_in_front(board, s, t) {
                return Err(MoveError::NotInFront(t));
            }
            if !is_pushable(board, s) {
                return Err(MoveError::InsufficientStrength);
            }
            Ok(())
        }
    }
}

fn validate_finalize(snapshot: &TurnSnapshot, finalization: Finalization) -> Result<(), MoveError> {
    let Some(action) = snapshot.pending_action else {
        return Err(MoveError::NothingToFinalize);
    };

    let direction = match (action.needs_direction(), finalization) {
        (false, Finalization::Confirm) => return Ok(()),
        (false, Finalization::Face(_)) => return Err(MoveError::ExpectedConfirm),
        (true, Finalization::Confirm) => return Err(MoveError::ExpectedDirection),
        (true, Finalization::Face(d)) => d,
    };

    match action {
        PendingAction::MoveAndRotate => Ok(()),

        PendingAction::RotateInPlace => {
            let coord = snapshot
                .selected
                .and_then(Selectable::coord)
                .ok_or(MoveError::Inconsistent)?;
            if snapshot.board[coord].facing() == Some(direction) {
                Err(MoveError::SameDirection)
            } else {
                Ok(())
            }
        }

        PendingAction::PushFromOffBoard => {
            let target = snapshot
                .targeted
                .and_then(Selectable::coord)
                .ok_or(MoveError::Inconsistent)?;
            let inward = edge_push_directions(target).contains(&direction);
            if inward && is_pushable_from_edge(&snapshot.board, target, direction) {
                Ok(())
            } else {
                Err(MoveError::InvalidPushDirection(direction))
            }
        }

        PendingAction::Push(_) | PendingAction::Withdraw => Err(MoveError::ExpectedConfirm),
    }
}
