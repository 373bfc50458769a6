//! Single-writer game session.

use im::Vector;
use log::{debug, info, warn};

use crate::core::{Player, SessionError};
use crate::rules::{RulesEngine, SiamRules};
use crate::turn::{Move, MoveOutcome, TurnSnapshot};

/// One game: the rules plus the ordered snapshot history.
///
/// `history[0]` is always the snapshot play continues from. Entries
/// behind it are completed turn records, newest first, ending with the
/// record of turn 0 (or the initial snapshot itself before any turn
/// completes).
#[derive(Clone, Debug)]
pub struct Session<R: RulesEngine = SiamRules> {
    rules: R,
    history: Vector<TurnSnapshot>,
}

impl Default for Session<SiamRules> {
    fn default() -> Self {
        Self::new(SiamRules::default())
    }
}

impl<R: RulesEngine> Session<R> {
    /// Start a new game.
    #[must_use]
    pub fn new(rules: R) -> Self {
        let history = Vector::unit(rules.initial_snapshot());
        Self { rules, history }
    }

    /// The rules engine.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The snapshot play continues from.
    #[must_use]
    pub fn current(&self) -> &TurnSnapshot {
        // The history is created non-empty and `undo_turn` never pops the
        // last entry.
        &self.history[0]
    }

    /// Whole history, most recent first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnSnapshot> {
        &self.history
    }

    /// Completed turn records, most recent first.
    pub fn turn_history(&self) -> impl Iterator<Item = &TurnSnapshot> {
        self.history.iter().filter(|s| s.completed)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.rules.is_terminal(self.current())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    // === Moves ===

    /// Validate and apply a move against the current snapshot.
    ///
    /// A rejected move leaves the history untouched.
    pub fn submit(&mut self, mv: Move) -> MoveOutcome {
        let outcome = self.rules.submit(self.current(), &mv);

        match &outcome {
            MoveOutcome::Continue(next) => {
                debug!("{} accepted", mv);
                self.history[0] = next.clone();
            }
            MoveOutcome::TurnEnds(record, next) | MoveOutcome::GameWon(record, next) => {
                debug!("{} accepted, turn {} complete", mv, record.turn_number);
                self.history[0] = record.clone();
                self.history.push_front(next.clone());
            }
            MoveOutcome::NotValid(err) => {
                warn!("{} rejected: {}", mv, err);
            }
        }

        outcome
    }

    // === Undo ===

    /// Discard the in-progress selection on the current snapshot.
    pub fn undo_move(&mut self) {
        let cleared = self.current().cleared();
        self.history[0] = cleared;
    }

    /// Step back one phase of the current turn.
    ///
    /// Drops the target (and its pending action) if there is one,
    /// otherwise the selection. Does nothing on a clean snapshot.
    pub fn undo_action(&mut self) {
        let current = self.current();
        let stepped = if current.targeted.is_some() {
            TurnSnapshot {
                targeted: None,
                pending_action: None,
                ..current.clone()
            }
        } else {
            TurnSnapshot {
                selected: None,
                ..current.clone()
            }
        };
        self.history[0] = stepped;
    }

    /// Discard the most recent completed turn.
    ///
    /// The current snapshot is dropped and the turn record beneath it is
    /// reopened, restoring the position from the start of that turn.
    pub fn undo_turn(&mut self) -> Result<(), SessionError> {
        if self.history.len() < 2 {
            return Err(SessionError::NoPriorTurn);
        }

        self.history.pop_front();
        let reopened = self.current().reopened();
        info!(
            "undid turn {}, {} to move",
            reopened.turn_number, reopened.current_player
        );
        self.history[0] = reopened;
        Ok(())
    }
}
