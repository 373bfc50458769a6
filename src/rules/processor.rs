//! Move application.
//!
//! `apply` turns a validated move into a new snapshot. It trusts the
//! validator: a combination the validator would have rejected falls
//! through to `MoveOutcome::NotValid(MoveError::Inconsistent)`.

use log::{debug, info, warn};

use crate::board::{closest_pusher, execute_push, execute_push_from_edge, Board, PushResult};
use crate::core::{Direction, MoveError, Piece, Player, PlayerMap};
use crate::turn::{
    Finalization, Move, MoveOutcome, PendingAction, Phase, Selectable, TurnSnapshot,
};

/// Apply a validated move.
#[must_use]
pub fn apply(snapshot: &TurnSnapshot, mv: &Move) -> MoveOutcome {
    match mv.phase {
        Phase::Select(what) => MoveOutcome::Continue(TurnSnapshot {
            selected: Some(what),
            ..snapshot.clone()
        }),
        Phase::Target(what) => match infer_action(snapshot, what) {
            Some(action) => MoveOutcome::Continue(TurnSnapshot {
                targeted: Some(what),
                pending_action: Some(action),
                ..snapshot.clone()
            }),
            None => inconsistent(snapshot, mv),
        },
        Phase::Finalize(finalization) => {
            finalize(snapshot, finalization).unwrap_or_else(|| inconsistent(snapshot, mv))
        }
    }
}

/// The action implied by targeting `target` after the current selection.
#[must_use]
pub fn infer_action(snapshot: &TurnSnapshot, target: Selectable) -> Option<PendingAction> {
    let board = &snapshot.board;
    let action = match (snapshot.selected?, target) {
        (Selectable::Bullpen, Selectable::Bullpen) => return None,
        (Selectable::Bullpen, Selectable::Cell(t)) if board[t].is_empty() => PendingAction::MoveAndRotate,
        (Selectable::Bullpen, Selectable::Cell(_)) => PendingAction::PushFromOffBoard,
        (Selectable::Cell(_), Selectable::Bullpen) => PendingAction::Withdraw,
        (Selectable::Cell(s), Selectable::Cell(t)) if s == t => PendingAction::RotateInPlace,
        (Selectable::Cell(_), Selectable::Cell(t)) if board[t].is_empty() => PendingAction::MoveAndRotate,
        (Selectable::Cell(s), Selectable::Cell(_)) => PendingAction::Push(board[s].facing()?),
    };
    Some(action)
}

fn finalize(snapshot: &TurnSnapshot, finalization: Finalization) -> Option<MoveOutcome> {
    let player = snapshot.current_player;
    let board = &snapshot.board;
    let mut bullpens = snapshot.bullpens;

    let outcome = match (
        snapshot.pending_action?,
        snapshot.selected?,
        snapshot.targeted?,
        finalization,
    ) {
        (PendingAction::MoveAndRotate, Selectable::Bullpen, Selectable::Cell(t), Finalization::Face(d)) => {
            bullpens[player] -= 1;
            let next = board.with(t, Piece::occupied(player, d));
            conclude(snapshot, finalization, next, bullpens, None)
        }

        (
            PendingAction::MoveAndRotate | PendingAction::RotateInPlace,
            Selectable::Cell(s),
            Selectable::Cell(t),
            Finalization::Face(d),
        ) => {
            let next = board.with(s, Piece::Empty).with(t, Piece::occupied(player, d));
            conclude(snapshot, finalization, next, bullpens, None)
        }

        (PendingAction::Withdraw, Selectable::Cell(s), Selectable::Bullpen, Finalization::Confirm) => {
            bullpens[player] += 1;
            let next = board.with(s, Piece::Empty);
            conclude(snapshot, finalization, next, bullpens, None)
        }

        (PendingAction::Push(d), Selectable::Cell(s), Selectable::Cell(_), Finalization::Confirm) => {
            let result = execute_push(board, s, d);
            resolve_push(snapshot, finalization, &result, d, bullpens)
        }

        (PendingAction::PushFromOffBoard, Selectable::Bullpen, Selectable::Cell(t), Finalization::Face(d)) => {
            bullpens[player] -= 1;
            let result = execute_push_from_edge(board, t, player, d);
            resolve_push(snapshot, finalization, &result, d, bullpens)
        }

        _ => return None,
    };
    Some(outcome)
}

/// Merge a push into the board and settle whatever fell off.
fn resolve_push(
    snapshot: &TurnSnapshot,
    finalization: Finalization,
    result: &PushResult,
    direction: Direction,
    mut bullpens: PlayerMap<u8>,
) -> MoveOutcome {
    let board = result.apply_to(&snapshot.board);

    let winner = match result.ejected() {
        Some(Piece::Mountain) => {
            Some(closest_pusher(&result.shifted, direction).unwrap_or(snapshot.current_player))
        }
        Some(Piece::Occupied { owner, .. }) => {
            debug!("{} piece pushed off the board, returned to bullpen", owner);
            bullpens[owner] += 1;
            None
        }
        Some(Piece::Empty) | None => None,
    };

    conclude(snapshot, finalization, board, bullpens, winner)
}

/// Close the turn: build the turn record and derive the next snapshot.
fn conclude(
    snapshot: &TurnSnapshot,
    finalization: Finalization,
    board: Board,
    bullpens: PlayerMap<u8>,
    winner: Option<Player>,
) -> MoveOutcome {
    let record = TurnSnapshot {
        finalized: Some(finalization),
        completed: true,
        winner,
        ..snapshot.clone()
    };
    let next = record.advance(board, bullpens);

    match winner {
        Some(player) => {
            info!(
                "turn {}: mountain pushed off the board, {} wins",
                record.turn_number, player
            );
            MoveOutcome::GameWon(record, next)
        }
        None => {
            debug!(
                "turn {} complete, {} to move",
                record.turn_number, next.current_player
            );
            MoveOutcome::TurnEnds(record, next)
        }
    }
}

fn inconsistent(snapshot: &TurnSnapshot, mv: &Move) -> MoveOutcome {
    warn!(
        "move {} does not fit turn {} (selected {:?}, targeted {:?}, pending {:?})",
        mv, snapshot.turn_number, snapshot.selected, snapshot.targeted, snapshot.pending_action
    );
    MoveOutcome::NotValid(MoveError::Inconsistent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    fn staged(
        pieces: &[(Coord, Piece)],
        selected: Selectable,
        targeted: Selectable,
    ) -> TurnSnapshot {
        let mut snapshot = TurnSnapshot::default();
        for &(c, p) in pieces {
            snapshot.board.set(c, p);
        }
        snapshot.selected = Some(selected);
        snapshot.targeted = Some(targeted);
        snapshot.pending_action = infer_action(&snapshot, targeted);
        snapshot
    }

    #[test]
    fn test_infer_action() {
        let origin = Coord::new(1, 1);
        let mut snapshot = TurnSnapshot::default();
        snapshot.board.set(origin, Piece::occupied(Player::A, Direction::Up));
        snapshot.board.set(Coord::new(1, 2), Piece::occupied(Player::B, Direction::Up));

        snapshot.selected = Some(Selectable::Cell(origin));
        assert_eq!(infer_action(&snapshot, origin.into()), Some(PendingAction::RotateInPlace));
        assert_eq!(infer_action(&snapshot, Selectable::Bullpen), Some(PendingAction::Withdraw));
        assert_eq!(
            infer_action(&snapshot, Coord::new(2, 1).into()),
            Some(PendingAction::MoveAndRotate)
        );
        assert_eq!(
            infer_action(&snapshot, Coord::new(1, 2).into()),
            Some(PendingAction::Push(Direction::Up))
        );

        snapshot.selected = Some(Selectable::Bullpen);
        assert_eq!(
            infer_action(&snapshot, Coord::new(5, 5).into()),
            Some(PendingAction::MoveAndRotate)
        );
        assert_eq!(
            infer_action(&snapshot, Coord::new(1, 2).into()),
            Some(PendingAction::PushFromOffBoard)
        );
        assert_eq!(infer_action(&snapshot, Selectable::Bullpen), None);

        snapshot.selected = None;
        assert_eq!(infer_action(&snapshot, origin.into()), None);
    }

    #[test]
    fn test_select_and_target_continue() {
        let snapshot = TurnSnapshot::default();
        let outcome = apply(&snapshot, &Move::select(Player::A, Selectable::Bullpen));
        let MoveOutcome::Continue(selected) = outcome else {
            panic!("expected Continue");
        };
        assert_eq!(selected.selected, Some(Selectable::Bullpen));
        assert!(snapshot.selected.is_none());

        let outcome = apply(&selected, &Move::target(Player::A, Coord::new(1, 1)));
        let MoveOutcome::Continue(targeted) = outcome else {
            panic!("expected Continue");
        };
        assert_eq!(targeted.pending_action, Some(PendingAction::MoveAndRotate));
        assert_eq!(targeted.targeted, Some(Selectable::Cell(Coord::new(1, 1))));
    }

    #[test]
    fn test_step_and_rotate() {
        let from = Coord::new(2, 2);
        let to = Coord::new(2, 1);
        let snapshot = staged(
            &[(from, Piece::occupied(Player::A, Direction::Up))],
            from.into(),
            to.into(),
        );

        let MoveOutcome::TurnEnds(record, next) = apply(&snapshot, &Move::face(Player::A, Direction::Left)) else {
            panic!("expected TurnEnds");
        };
        assert!(record.completed);
        assert_eq!(record.board, snapshot.board);
        assert_eq!(record.finalized, Some(Finalization::Face(Direction::Left)));
        assert_eq!(next.board[from], Piece::Empty);
        assert_eq!(next.board[to], Piece::occupied(Player::A, Direction::Left));
        assert_eq!(next.bullpen(Player::A), 5);
    }

    #[test]
    fn test_push_ejects_opponent_to_bullpen() {
        let mut snapshot = staged(
            &[
                (Coord::new(4, 1), Piece::occupied(Player::A, Direction::Right)),
                (Coord::new(5, 1), Piece::occupied(Player::B, Direction::Up)),
            ],
            Coord::new(4, 1).into(),
            Coord::new(5, 1).into(),
        );
        snapshot.bullpens[Player::A] = 4;
        snapshot.bullpens[Player::B] = 4;

        let MoveOutcome::TurnEnds(_, next) = apply(&snapshot, &Move::confirm(Player::A)) else {
            panic!("expected TurnEnds");
        };
        assert_eq!(next.board[Coord::new(5, 1)], Piece::occupied(Player::A, Direction::Right));
        assert_eq!(next.board[Coord::new(4, 1)], Piece::Empty);
        assert_eq!(next.bullpen(Player::B), 5);
        assert_eq!(next.bullpen(Player::A), 4);
        assert_eq!(next.pieces_accounted(Player::A), 5);
        assert_eq!(next.pieces_accounted(Player::B), 5);
    }

    #[test]
    fn test_push_from_off_board_settles_both_bullpens() {
        // A enters at (1,1) behind two of its own pieces; B's last piece
        // falls off the far end of row 1.
        let mut snapshot = staged(
            &[
                (Coord::new(1, 1), Piece::occupied(Player::A, Direction::Right)),
                (Coord::new(2, 1), Piece::occupied(Player::A, Direction::Right)),
                (Coord::new(3, 1), Piece::occupied(Player::B, Direction::Up)),
                (Coord::new(4, 1), Piece::occupied(Player::B, Direction::Up)),
                (Coord::new(5, 1), Piece::occupied(Player::B, Direction::Up)),
            ],
            Selectable::Bullpen,
            Coord::new(1, 1).into(),
        );
        snapshot.bullpens[Player::A] = 3;
        snapshot.bullpens[Player::B] = 2;

        let MoveOutcome::TurnEnds(_, next) = apply(&snapshot, &Move::face(Player::A, Direction::Right)) else {
            panic!("expected TurnEnds");
        };
        assert_eq!(next.bullpen(Player::A), 2);
        assert_eq!(next.bullpen(Player::B), 3);
        assert_eq!(next.board[Coord::new(1, 1)], Piece::occupied(Player::A, Direction::Right));
        assert_eq!(next.board[Coord::new(2, 1)], Piece::occupied(Player::A, Direction::Right));
        assert_eq!(next.board[Coord::new(3, 1)], Piece::occupied(Player::A, Direction::Right));
        assert_eq!(next.board[Coord::new(5, 1)], Piece::occupied(Player::B, Direction::Up));
        assert_eq!(next.pieces_accounted(Player::A), 5);
        assert_eq!(next.pieces_accounted(Player::B), 5);
    }

    #[test]
    fn test_mountain_off_board_wins() {
        let mut snapshot = staged(
            &[
                (Coord::new(3, 3), Piece::Empty),
                (Coord::new(3, 4), Piece::occupied(Player::B, Direction::Up)),
                (Coord::new(3, 5), Piece::Mountain),
            ],
            Coord::new(3, 4).into(),
            Coord::new(3, 5).into(),
        );
        snapshot.current_player = Player::B;

        let MoveOutcome::GameWon(record, last) = apply(&snapshot, &Move::confirm(Player::B)) else {
            panic!("expected GameWon");
        };
        assert_eq!(record.winner, Some(Player::B));
        assert_eq!(last.winner, Some(Player::B));
        assert_eq!(last.board.count_mountains(), 2);
        assert_eq!(last.board[Coord::new(3, 5)], Piece::occupied(Player::B, Direction::Up));
    }

    #[test]
    fn test_inconsistent_finalize_falls_back() {
        let mut snapshot = TurnSnapshot::default();
        snapshot.selected = Some(Selectable::Bullpen);
        snapshot.targeted = Some(Selectable::Cell(Coord::new(1, 1)));
        snapshot.pending_action = Some(PendingAction::Withdraw);

        let outcome = apply(&snapshot, &Move::confirm(Player::A));
        assert_eq!(outcome, MoveOutcome::NotValid(MoveError::Inconsistent));
    }
}
