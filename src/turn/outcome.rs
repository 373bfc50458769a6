//! Result of submitting a move.

use super::snapshot::TurnSnapshot;
use crate::core::{MoveError, Player};

/// What happened to a submitted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Accepted; the turn is still open.
    Continue(TurnSnapshot),

    /// Rejected; the snapshot is unchanged.
    NotValid(MoveError),

    /// Accepted and the turn is complete: `(turn record, next turn)`.
    TurnEnds(TurnSnapshot, TurnSnapshot),

    /// Accepted and a mountain left the board: `(turn record, final snapshot)`.
    GameWon(TurnSnapshot, TurnSnapshot),
}

impl MoveOutcome {
    /// True unless the move was rejected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, MoveOutcome::NotValid(_))
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn error(&self) -> Option<&MoveError> {
        match self {
            MoveOutcome::NotValid(err) => Some(err),
            _ => None,
        }
    }

    /// The snapshot play continues from, if the move was accepted.
    #[must_use]
    pub fn latest(&self) -> Option<&TurnSnapshot> {
        match self {
            MoveOutcome::Continue(s) => Some(s),
            MoveOutcome::TurnEnds(_, next) | MoveOutcome::GameWon(_, next) => Some(next),
            MoveOutcome::NotValid(_) => None,
        }
    }

    /// The winner, if this move ended the game.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            MoveOutcome::GameWon(_, last) => last.winner,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let snapshot = TurnSnapshot::default();

        let cont = MoveOutcome::Continue(snapshot.clone());
        assert!(cont.is_valid());
        assert_eq!(cont.latest(), Some(&snapshot));
        assert_eq!(cont.winner(), None);

        let rejected = MoveOutcome::NotValid(MoveError::AlreadySelected);
        assert!(!rejected.is_valid());
        assert_eq!(rejected.error(), Some(&MoveError::AlreadySelected));
        assert_eq!(rejected.latest(), None);

        let mut last = snapshot.clone();
        last.winner = Some(Player::B);
        let won = MoveOutcome::GameWon(snapshot, last.clone());
        assert_eq!(won.winner(), Some(Player::B));
        assert_eq!(won.latest(), Some(&last));
    }
}
