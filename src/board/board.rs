//! The 5x5 board.
//!
//! Backed by an `im::HashMap` so that every turn snapshot can own its
//! board while cloning stays O(1). The map is total: every one of the
//! 25 coordinates always holds exactly one `Piece`.

use im::HashMap as ImHashMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Index;

use crate::core::{Coord, Piece, Player};

/// Cells holding a mountain at the start of a game.
pub const MOUNTAIN_START: [Coord; 3] = [Coord::new(2, 3), Coord::new(3, 3), Coord::new(4, 3)];

/// Total mapping from coordinates to pieces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: ImHashMap<Coord, Piece>,
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: Coord::all().map(|c| (c, Piece::Empty)).collect(),
        }
    }

    /// The starting position: three mountains across the middle row.
    #[must_use]
    pub fn standard() -> Self {
        MOUNTAIN_START
            .iter()
            .fold(Self::empty(), |board, &c| board.with(c, Piece::Mountain))
    }

    /// Piece at `coord`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Piece {
        self[coord]
    }

    /// Replace the piece at `coord`.
    pub fn set(&mut self, coord: Coord, piece: Piece) {
        self.cells.insert(coord, piece);
    }

    /// Copy of this board with `coord` replaced.
    #[must_use]
    pub fn with(&self, coord: Coord, piece: Piece) -> Self {
        Self {
            cells: self.cells.update(coord, piece),
        }
    }

    /// Iterate over `(coord, piece)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().map(move |c| (c, self[c]))
    }

    /// Number of mountains still on the board.
    #[must_use]
    pub fn count_mountains(&self) -> usize {
        self.cells.values().filter(|p| p.is_mountain()).count()
    }

    /// Number of `player`'s pieces on the board.
    #[must_use]
    pub fn count_pieces(&self, player: Player) -> usize {
        self.cells.values().filter(|p| p.is_owned_by(player)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<Coord> for Board {
    type Output = Piece;

    fn index(&self, coord: Coord) -> &Self::Output {
        self.cells.get(&coord).unwrap_or(&Piece::Empty)
    }
}

// Serialized as an ordered list of entries so the encoding is stable.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

// Every cell exactly once. Off-board coordinates are already refused by
// `Coord`'s own `Deserialize`.
impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<(Coord, Piece)> = Vec::deserialize(deserializer)?;
        let mut cells = ImHashMap::new();
        for (coord, piece) in entries {
            if cells.insert(coord, piece).is_some() {
                return Err(D::Error::custom(format!("duplicate cell {}", coord)));
            }
        }
        if let Some(missing) = Coord::all().find(|c| !cells.contains_key(c)) {
            return Err(D::Error::custom(format!("missing cell {}", missing)));
        }
        Ok(Board { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn test_standard_board() {
        let board = Board::standard();

        assert_eq!(board.count_mountains(), 3);
        assert_eq!(board[Coord::new(2, 3)], Piece::Mountain);
        assert_eq!(board[Coord::new(3, 3)], Piece::Mountain);
        assert_eq!(board[Coord::new(4, 3)], Piece::Mountain);
        assert_eq!(board[Coord::new(1, 3)], Piece::Empty);
        assert_eq!(board.iter().count(), 25);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::standard();
        let c = Coord::new(1, 1);
        let updated = board.with(c, Piece::occupied(Player::A, Direction::Up));

        assert_eq!(board[c], Piece::Empty);
        assert_eq!(updated[c], Piece::occupied(Player::A, Direction::Up));
        assert_eq!(updated.count_pieces(Player::A), 1);
        assert_eq!(updated.count_pieces(Player::B), 0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let board = Board::standard().with(Coord::new(5, 5), Piece::occupied(Player::B, Direction::Left));
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_malformed_boards() {
        let mut entries: Vec<serde_json::Value> = Board::standard()
            .iter()
            .map(|entry| serde_json::to_value(entry).unwrap())
            .collect();

        // Extra off-board mountain.
        let mut extra = entries.clone();
        extra.push(serde_json::json!([{"x": 9, "y": 9}, "Mountain"]));
        assert!(serde_json::from_value::<Board>(extra.into()).is_err());

        // Same cell twice.
        let mut duplicate = entries.clone();
        duplicate.push(entries[0].clone());
        let err = serde_json::from_value::<Board>(duplicate.into()).unwrap_err();
        assert!(err.to_string().contains("duplicate cell 1,1"), "{}", err);

        // Short list.
        entries.pop();
        let err = serde_json::from_value::<Board>(entries.into()).unwrap_err();
        assert!(err.to_string().contains("missing cell 5,5"), "{}", err);
    }
}
