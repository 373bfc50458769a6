//! Turn snapshots.
//!
//! A `TurnSnapshot` is the whole game position plus the in-progress
//! select/target/finalize state of the current turn. Snapshots are
//! values: every move produces a new one and a superseded snapshot is
//! never touched again. Cloning is cheap because the board is persistent.
//!
//! ## Lifecycle
//!
//! 1. A turn starts with `selected`, `targeted`, `pending_action` and
//!    `finalized` cleared and `completed == false`.
//! 2. Select and target fill in the selection fields.
//! 3. A successful finalize produces the turn record (`completed == true`,
//!    board as it stood at the start of the turn) and the next snapshot
//!    via [`TurnSnapshot::advance`].

use serde::{Deserialize, Serialize};

use super::moves::{Finalization, Selectable};
use crate::board::Board;
use crate::core::{Direction, Player, PlayerMap, RulesConfig};

/// What a completed select + target implies. Fixed once inferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingAction {
    /// Place from the bullpen onto an empty edge cell, or step onto an
    /// adjacent empty cell. Facing is chosen at finalize.
    MoveAndRotate,
    /// Turn a piece in place. Facing is chosen at finalize.
    RotateInPlace,
    /// Push the chain ahead of the selected piece along its facing.
    Push(Direction),
    /// Enter from the bullpen onto an occupied edge cell, pushing its
    /// chain. Direction is chosen at finalize.
    PushFromOffBoard,
    /// Take an edge piece back into the bullpen.
    Withdraw,
}

impl PendingAction {
    /// True if finalize takes a direction rather than `confirm`.
    #[must_use]
    pub const fn needs_direction(self) -> bool {
        matches!(
            self,
            PendingAction::MoveAndRotate | PendingAction::RotateInPlace | PendingAction::PushFromOffBoard
        )
    }
}

/// Complete state of one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    // === Position ===
    pub board: Board,

    /// Pieces each player holds off the board.
    pub bullpens: PlayerMap<u8>,

    // === Progression ===
    /// Player whose turn it is.
    pub current_player: Player,

    /// Completed turns before this one (starts at 0).
    pub turn_number: u32,

    /// Set once a mountain leaves the board. Terminal.
    pub winner: Option<Player>,

    // === In-progress move ===
    pub selected: Option<Selectable>,
    pub targeted: Option<Selectable>,
    pub pending_action: Option<PendingAction>,

    /// Payload the turn was finalized with.
    pub finalized: Option<Finalization>,

    pub completed: bool,
}

impl TurnSnapshot {
    /// Create a fresh turn 0 snapshot.
    #[must_use]
    pub fn new(board: Board, bullpens: PlayerMap<u8>, current_player: Player) -> Self {
        Self {
            board,
            bullpens,
            current_player,
            turn_number: 0,
            winner: None,
            selected: None,
            targeted: None,
            pending_action: None,
            finalized: None,
            completed: false,
        }
    }

    /// Standard starting position for `config`.
    #[must_use]
    pub fn initial(config: &RulesConfig) -> Self {
        Self::new(
            Board::standard(),
            PlayerMap::with_value(config.bullpen_size),
            config.first_player,
        )
    }

    /// True once the game has a winner.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Pieces `player` holds in reserve.
    #[must_use]
    pub fn bullpen(&self, player: Player) -> u8 {
        self.bullpens[player]
    }

    /// On-board pieces plus reserve for `player`.
    ///
    /// Constant over a game: it always equals the configured
    /// `RulesConfig::bullpen_size` (5 with the default rules), since a
    /// piece only ever moves between the board and its owner's bullpen.
    #[must_use]
    pub fn pieces_accounted(&self, player: Player) -> usize {
        self.board.count_pieces(player) + self.bullpens[player] as usize
    }

    /// Copy with the in-progress selection discarded.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            selected: None,
            targeted: None,
            pending_action: None,
            ..self.clone()
        }
    }

    /// Copy of a completed turn record reopened for play: selection,
    /// completion and any winner it produced are discarded.
    #[must_use]
    pub fn reopened(&self) -> Self {
        Self {
            finalized: None,
            completed: false,
            winner: None,
            ..self.cleared()
        }
    }

    /// Derive the next turn from this completed one.
    ///
    /// Selection state is reset, the turn counter increments and the
    /// other player moves. A winner carries over, making the result
    /// terminal.
    #[must_use]
    pub fn advance(&self, board: Board, bullpens: PlayerMap<u8>) -> Self {
        Self {
            board,
            bullpens,
            current_player: self.current_player.opponent(),
            turn_number: self.turn_number + 1,
            winner: self.winner,
            selected: None,
            targeted: None,
            pending_action: None,
            finalized: None,
            completed: false,
        }
    }
}

impl Default for TurnSnapshot {
    fn default() -> Self {
        Self::initial(&RulesConfig::default())
    }
}
