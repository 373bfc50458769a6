//! Thread-shareable session handle.
//!
//! One mutex per game serializes writers. Readers get cloned snapshots
//! (or the whole persistent history) and never hold the lock while they
//! look at them.

use im::Vector;
use std::sync::{Arc, Mutex, MutexGuard};

use super::history::Session;
use crate::core::SessionError;
use crate::rules::{RulesEngine, SiamRules};
use crate::turn::{Move, MoveOutcome, TurnSnapshot};

/// Cloneable handle to one game.
#[derive(Debug)]
pub struct SharedSession<R: RulesEngine = SiamRules> {
    inner: Arc<Mutex<Session<R>>>,
}

impl<R: RulesEngine> Clone for SharedSession<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SharedSession<SiamRules> {
    fn default() -> Self {
        Self::new(Session::default())
    }
}

impl<R: RulesEngine> SharedSession<R> {
    #[must_use]
    pub fn new(session: Session<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // A panic while holding the lock cannot leave a half-applied move
    // behind: every write replaces whole snapshots.
    fn lock(&self) -> MutexGuard<'_, Session<R>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Submit a move. Callers are served strictly one at a time.
    pub fn submit(&self, mv: Move) -> MoveOutcome {
        self.lock().submit(mv)
    }

    /// Clone of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> TurnSnapshot {
        self.lock().current().clone()
    }

    /// Clone of the whole history, most recent first. O(1).
    #[must_use]
    pub fn history(&self) -> Vector<TurnSnapshot> {
        self.lock().history().clone()
    }

    pub fn undo_move(&self) {
        self.lock().undo_move();
    }

    pub fn undo_action(&self) {
        self.lock().undo_action();
    }

    pub fn undo_turn(&self) -> Result<(), SessionError> {
        self.lock().undo_turn()
    }
}
