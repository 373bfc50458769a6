//! Rules engine trait and the standard rules.
//!
//! The session layer only talks to a `RulesEngine`:
//! - `initial_snapshot` to start a game
//! - `validate` then `apply` for every submitted move
//! - `is_terminal` to detect the end of the game

use super::{processor, validator};
use crate::core::{ConfigError, Coord, Direction, MoveError, Player, RulesConfig};
use crate::turn::{Finalization, Move, MoveOutcome, Phase, Selectable, TurnSnapshot};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` must not depend on anything but its arguments
/// - `apply` may assume `validate` accepted the move
/// - `is_terminal`: return `None` if the game continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Check a move without applying it.
    fn validate(&self, snapshot: &TurnSnapshot, mv: &Move) -> Result<(), MoveError>;

    /// Apply a validated move.
    fn apply(&self, snapshot: &TurnSnapshot, mv: &Move) -> MoveOutcome;

    // === Convenience Methods ===

    /// Starting position for this engine's configuration.
    fn initial_snapshot(&self) -> TurnSnapshot {
        TurnSnapshot::initial(self.config())
    }

    /// Validate, then apply if legal.
    fn submit(&self, snapshot: &TurnSnapshot, mv: &Move) -> MoveOutcome {
        match self.validate(snapshot, mv) {
            Ok(()) => self.apply(snapshot, mv),
            Err(err) => MoveOutcome::NotValid(err),
        }
    }

    /// The winner, once there is one.
    fn is_terminal(&self, snapshot: &TurnSnapshot) -> Option<Player> {
        snapshot.winner
    }

    /// Every move the current player may submit next.
    ///
    /// Enumerates the candidate payloads for all three phases and keeps
    /// the ones `validate` accepts.
    fn legal_moves(&self, snapshot: &TurnSnapshot) -> Vec<Move> {
        let player = snapshot.current_player;
        let spots = || {
            std::iter::once(Selectable::Bullpen).chain(Coord::all().map(Selectable::Cell))
        };
        let finalizations = std::iter::once(Finalization::Confirm)
            .chain(Direction::ALL.into_iter().map(Finalization::Face));

        spots()
            .map(Phase::Select)
            .chain(spots().map(Phase::Target))
            .chain(finalizations.map(Phase::Finalize))
            .map(|phase| Move::new(player, phase))
            .filter(|mv| self.validate(snapshot, mv).is_ok())
            .collect()
    }
}

/// The standard rules.
#[derive(Clone, Debug, Default)]
pub struct SiamRules {
    config: RulesConfig,
}

impl SiamRules {
    /// Create rules from a validated configuration.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl RulesEngine for SiamRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn validate(&self, snapshot: &TurnSnapshot, mv: &Move) -> Result<(), MoveError> {
        validator::validate(snapshot, mv)
    }

    fn apply(&self, snapshot: &TurnSnapshot, mv: &Move) -> MoveOutcome {
        processor::apply(snapshot, mv)
    }
}
