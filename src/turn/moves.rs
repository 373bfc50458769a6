//! Move representation.
//!
//! A move is one phase of a turn submitted by a player:
//!
//! - `Select` a piece or the bullpen
//! - `Target` a cell or the bullpen
//! - `Finalize` with a facing direction or `confirm`
//!
//! Moves also have a compact text notation:
//!
//! ```
//! use siam::turn::Move;
//! use siam::core::{Coord, Direction, Player};
//!
//! let mv: Move = "A target 1,2".parse().unwrap();
//! assert_eq!(mv, Move::target(Player::A, Coord::new(1, 2)));
//!
//! let mv: Move = "B finalize left".parse().unwrap();
//! assert_eq!(mv, Move::face(Player::B, Direction::Left));
//! assert_eq!(mv.to_string(), "B finalize left");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Coord, Direction, ParseMoveError, Player};

/// Something a player can select or target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selectable {
    Cell(Coord),
    Bullpen,
}

impl Selectable {
    /// The coordinate, if this is a cell.
    #[must_use]
    pub const fn coord(self) -> Option<Coord> {
        match self {
            Selectable::Cell(c) => Some(c),
            Selectable::Bullpen => None,
        }
    }
}

impl From<Coord> for Selectable {
    fn from(coord: Coord) -> Self {
        Selectable::Cell(coord)
    }
}

impl std::fmt::Display for Selectable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selectable::Cell(c) => write!(f, "{}", c),
            Selectable::Bullpen => f.write_str("bullpen"),
        }
    }
}

/// Payload of the finalize phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finalization {
    /// Accept a fully determined push or withdrawal.
    Confirm,
    /// Choose the facing (or push direction) for the moved piece.
    Face(Direction),
}

impl std::fmt::Display for Finalization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finalization::Confirm => f.write_str("confirm"),
            Finalization::Face(d) => write!(f, "{}", d),
        }
    }
}

/// The phase of a move and its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Select(Selectable),
    Target(Selectable),
    Finalize(Finalization),
}

/// One phase of a turn, submitted by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub phase: Phase,
}

impl Move {
    #[must_use]
    pub const fn new(player: Player, phase: Phase) -> Self {
        Self { player, phase }
    }

    /// Select a cell or the bullpen.
    #[must_use]
    pub fn select(player: Player, what: impl Into<Selectable>) -> Self {
        Self::new(player, Phase::Select(what.into()))
    }

    /// Target a cell or the bullpen.
    #[must_use]
    pub fn target(player: Player, what: impl Into<Selectable>) -> Self {
        Self::new(player, Phase::Target(what.into()))
    }

    /// Finalize with a facing direction.
    #[must_use]
    pub const fn face(player: Player, direction: Direction) -> Self {
        Self::new(player, Phase::Finalize(Finalization::Face(direction)))
    }

    /// Finalize with `confirm`.
    #[must_use]
    pub const fn confirm(player: Player) -> Self {
        Self::new(player, Phase::Finalize(Finalization::Confirm))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.phase {
            Phase::Select(s) => write!(f, "{} select {}", self.player, s),
            Phase::Target(s) => write!(f, "{} target {}", self.player, s),
            Phase::Finalize(fin) => write!(f, "{} finalize {}", self.player, fin),
        }
    }
}

fn parse_selectable(payload: &str) -> Option<Selectable> {
    if payload == "bullpen" {
        return Some(Selectable::Bullpen);
    }
    let (x, y) = payload.split_once(',')?;
    let x = x.trim().parse::<i16>().ok()?;
    let y = y.trim().parse::<i16>().ok()?;
    Coord::try_new(x, y).map(Selectable::Cell)
}

fn parse_finalization(payload: &str) -> Option<Finalization> {
    if payload == "confirm" {
        return Some(Finalization::Confirm);
    }
    payload.parse::<Direction>().ok().map(Finalization::Face)
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [player, phase, payload] = parts.as_slice() else {
            return Err(ParseMoveError::Shape(s.to_string()));
        };

        let player = match player.to_ascii_uppercase().as_str() {
            "A" => Player::A,
            "B" => Player::B,
            _ => return Err(ParseMoveError::Player(player.to_string())),
        };

        let payload_lower = payload.to_ascii_lowercase();
        let phase_lower = phase.to_ascii_lowercase();
        let bad_payload = || ParseMoveError::Payload {
            phase: phase_lower.clone(),
            payload: payload.to_string(),
        };

        let phase = match phase_lower.as_str() {
            "select" => Phase::Select(parse_selectable(&payload_lower).ok_or_else(bad_payload)?),
            "target" => Phase::Target(parse_selectable(&payload_lower).ok_or_else(bad_payload)?),
            "finalize" => Phase::Finalize(parse_finalization(&payload_lower).ok_or_else(bad_payload)?),
            _ => return Err(ParseMoveError::Phase(phase.to_string())),
        };

        Ok(Move::new(player, phase))
    }
}
