//! Cell contents.

use serde::{Deserialize, Serialize};

use super::coord::Direction;
use super::player::Player;

/// What occupies a board cell.
///
/// Mountains have no owner and never move on their own; they are only
/// ever pushed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty,
    Mountain,
    Occupied { owner: Player, facing: Direction },
}

impl Piece {
    /// A player's piece.
    #[must_use]
    pub const fn occupied(owner: Player, facing: Direction) -> Self {
        Piece::Occupied { owner, facing }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[must_use]
    pub const fn is_mountain(self) -> bool {
        matches!(self, Piece::Mountain)
    }

    /// Owner of a player's piece.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Piece::Occupied { owner, .. } => Some(owner),
            _ => None,
        }
    }

    /// Facing of a player's piece.
    #[must_use]
    pub const fn facing(self) -> Option<Direction> {
        match self {
            Piece::Occupied { facing, .. } => Some(facing),
            _ => None,
        }
    }

    /// True if `player` owns this piece.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner() == Some(player)
    }
}
