//! Push physics.
//!
//! A push moves the contiguous chain of pieces starting at the pusher one
//! cell in the push direction. Every piece in the chain contributes a
//! signed strength along the push axis:
//!
//! - a piece facing the push direction adds `+1` in that direction
//! - a piece facing against it subtracts `1`
//! - a piece facing across the axis contributes nothing
//! - a mountain resists with `0.67`
//!
//! The push succeeds when the total keeps the pusher's sign.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use super::geometry::{oriented_line, pusher_index};
use super::strength::Strength;
use crate::core::{Coord, Direction, Piece, Player};

/// Where a shifted piece ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Cell(Coord),
    OffBoard,
}

impl Destination {
    fn after_step(from: Coord, direction: Direction) -> Self {
        from.step(direction).map_or(Destination::OffBoard, Destination::Cell)
    }
}

/// Pieces moved by a push, in chain order (pusher first).
pub type Shifted = SmallVec<[(Destination, Piece); 6]>;

/// Scalar strengths along the push axis, pusher first.
pub type Scalars = SmallVec<[Strength; 6]>;

/// Board changes produced by a push.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushResult {
    /// Cell the pusher left, if it started on the board.
    pub vacated: Option<Coord>,

    /// Every moved piece with its new position.
    pub shifted: Shifted,
}

impl PushResult {
    /// The piece that fell off the board, if any.
    #[must_use]
    pub fn ejected(&self) -> Option<Piece> {
        self.shifted
            .iter()
            .find(|(dest, _)| *dest == Destination::OffBoard)
            .map(|&(_, piece)| piece)
    }

    /// Merge the on-board positions into `board`.
    ///
    /// The ejected piece is not merged; the caller settles it.
    #[must_use]
    pub fn apply_to(&self, board: &Board) -> Board {
        let mut next = board.clone();
        if let Some(vacated) = self.vacated {
            next.set(vacated, Piece::Empty);
        }
        for &(dest, piece) in &self.shifted {
            if let Destination::Cell(coord) = dest {
                next.set(coord, piece);
            }
        }
        next
    }
}

/// Strength vector `(x, y)` a piece contributes to a push in `push`.
#[must_use]
pub fn push_strength(piece: Piece, push: Direction) -> (Strength, Strength) {
    match piece {
        Piece::Empty => (Strength::ZERO, Strength::ZERO),
        Piece::Mountain => {
            let resistance = Strength::MOUNTAIN.signed(-push.sign());
            (resistance, resistance)
        }
        Piece::Occupied { facing, .. } => {
            let unit = Strength::UNIT.signed(facing.sign());
            if facing.is_horizontal() {
                (unit, Strength::ZERO)
            } else {
                (Strength::ZERO, unit)
            }
        }
    }
}

/// Contiguous run of non-empty cells from the start of `line_from_pusher`,
/// stopping before the first empty cell.
#[must_use]
pub fn involved_pieces(line_from_pusher: &[(Coord, Piece)]) -> &[(Coord, Piece)] {
    let end = line_from_pusher
        .iter()
        .position(|(_, piece)| piece.is_empty())
        .unwrap_or(line_from_pusher.len());
    &line_from_pusher[..end]
}

/// Project each piece's strength onto the axis of `direction`.
#[must_use]
pub fn applicable_strength(involved: &[(Coord, Piece)], direction: Direction) -> Scalars {
    involved
        .iter()
        .map(|&(_, piece)| {
            let (x, y) = push_strength(piece, direction);
            if direction.is_horizontal() {
                x
            } else {
                y
            }
        })
        .collect()
}

/// True if the summed strength keeps the sign of the pusher (the first
/// scalar) and is non-zero.
#[must_use]
pub fn feasible(scalars: &[Strength]) -> bool {
    let Some(pusher) = scalars.first() else {
        return false;
    };
    let total: Strength = scalars.iter().sum();
    pusher.signum() != 0 && total.signum() == pusher.signum()
}

fn chain_from(board: &Board, origin: Coord, direction: Direction) -> SmallVec<[(Coord, Piece); 5]> {
    let line = oriented_line(board, origin, direction);
    let from = pusher_index(origin, direction);
    involved_pieces(&line[from..]).iter().copied().collect()
}

/// Can the piece at `pusher` push along its facing?
#[must_use]
pub fn is_pushable(board: &Board, pusher: Coord) -> bool {
    let Some(direction) = board[pusher].facing() else {
        return false;
    };
    let chain = chain_from(board, pusher, direction);
    feasible(&applicable_strength(&chain, direction))
}

/// Can a piece entering at `target` push in `direction`?
///
/// A synthetic pusher facing `direction` is placed ahead of the chain
/// that starts at `target`.
#[must_use]
pub fn is_pushable_from_edge(board: &Board, target: Coord, direction: Direction) -> bool {
    let chain = chain_from(board, target, direction);
    let mut scalars: Scalars = SmallVec::new();
    scalars.push(Strength::UNIT.signed(direction.sign()));
    scalars.extend(applicable_strength(&chain, direction));
    feasible(&scalars)
}

/// Shift the chain starting at `pusher` one cell in `direction`.
#[must_use]
pub fn execute_push(board: &Board, pusher: Coord, direction: Direction) -> PushResult {
    let shifted = chain_from(board, pusher, direction)
        .into_iter()
        .map(|(coord, piece)| (Destination::after_step(coord, direction), piece))
        .collect();

    PushResult {
        vacated: Some(pusher),
        shifted,
    }
}

/// Place a new piece for `entering` at `target`, shifting the chain that
/// occupies `target` one cell in `direction`.
#[must_use]
pub fn execute_push_from_edge(
    board: &Board,
    target: Coord,
    entering: Player,
    direction: Direction,
) -> PushResult {
    let mut shifted: Shifted = SmallVec::new();
    shifted.push((Destination::Cell(target), Piece::occupied(entering, direction)));
    shifted.extend(
        chain_from(board, target, direction)
            .into_iter()
            .map(|(coord, piece)| (Destination::after_step(coord, direction), piece)),
    );

    PushResult {
        vacated: None,
        shifted,
    }
}

/// Owner of the on-board piece facing `direction` that sits furthest along
/// the chain, i.e. nearest the edge the chain was pushed toward.
#[must_use]
pub fn closest_pusher(shifted: &[(Destination, Piece)], direction: Direction) -> Option<Player> {
    shifted
        .iter()
        .rev()
        .filter(|(dest, _)| matches!(dest, Destination::Cell(_)))
        .find(|(_, piece)| piece.facing() == Some(direction))
        .and_then(|(_, piece)| piece.owner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(hundredths: i32) -> Strength {
        Strength::from_hundredths(hundredths)
    }

    fn a(facing: Direction) -> Piece {
        Piece::occupied(Player::A, facing)
    }

    fn b(facing: Direction) -> Piece {
        Piece::occupied(Player::B, facing)
    }

    #[test]
    fn test_feasible_mountain_ratios() {
        assert!(feasible(&[s(100), s(-67)]));
        assert!(!feasible(&[s(100), s(-67), s(-67)]));
        assert!(feasible(&[s(100), s(100), s(-67), s(-67)]));
        assert!(!feasible(&[s(100), s(100), s(-67), s(-67), s(-67)]));
        assert!(feasible(&[s(100), s(100), s(100), s(-67), s(-67), s(-67)]));
    }

    #[test]
    fn test_feasible_negative_direction() {
        assert!(feasible(&[s(-100), s(67)]));
        assert!(!feasible(&[s(-100), s(67), s(67)]));
        assert!(!feasible(&[s(-100), s(100)]));
        assert!(!feasible(&[]));
    }

    #[test]
    fn test_push_strength() {
        assert_eq!(push_strength(a(Direction::Right), Direction::Right), (s(100), s(0)));
        assert_eq!(push_strength(a(Direction::Down), Direction::Right), (s(0), s(-100)));
        assert_eq!(push_strength(Piece::Mountain, Direction::Up), (s(-67), s(-67)));
        assert_eq!(push_strength(Piece::Mountain, Direction::Left), (s(67), s(67)));
        assert_eq!(push_strength(Piece::Empty, Direction::Left), (s(0), s(0)));
    }

    #[test]
    fn test_involved_pieces_stops_at_gap() {
        let c = |x| Coord::new(x, 1);
        let line = [
            (c(1), a(Direction::Right)),
            (c(2), b(Direction::Up)),
            (c(3), Piece::Empty),
            (c(4), Piece::Mountain),
        ];
        let involved = involved_pieces(&line);
        assert_eq!(involved.len(), 2);
        assert_eq!(involved[1].0, c(2));
    }

    #[test]
    fn test_applicable_strength_projects_axis() {
        let line = [
            (Coord::new(1, 1), a(Direction::Up)),
            (Coord::new(1, 2), b(Direction::Left)),
            (Coord::new(1, 3), b(Direction::Down)),
            (Coord::new(1, 4), Piece::Mountain),
        ];
        let scalars = applicable_strength(&line, Direction::Up);
        assert_eq!(scalars.as_slice(), &[s(100), s(0), s(-100), s(-67)]);
    }

    #[test]
    fn test_is_pushable_against_opposing_piece() {
        let board = Board::empty()
            .with(Coord::new(2, 2), a(Direction::Right))
            .with(Coord::new(3, 2), b(Direction::Left));
        assert!(!is_pushable(&board, Coord::new(2, 2)));

        let board = board.with(Coord::new(1, 2), a(Direction::Right));
        assert!(is_pushable(&board, Coord::new(1, 2)));
    }

    #[test]
    fn test_is_pushable_from_edge() {
        let board = Board::standard()
            .with(Coord::new(3, 1), b(Direction::Left))
            .with(Coord::new(3, 2), a(Direction::Left));
        // Two sideways pieces and one mountain in column 3.
        assert!(is_pushable_from_edge(&board, Coord::new(3, 1), Direction::Up));

        let blocked = board.with(Coord::new(3, 4), b(Direction::Down));
        assert!(!is_pushable_from_edge(&blocked, Coord::new(3, 1), Direction::Up));

        // Sideways piece then all three mountains along row 3.
        let row = Board::standard().with(Coord::new(1, 3), b(Direction::Up));
        assert!(!is_pushable_from_edge(&row, Coord::new(1, 3), Direction::Right));

        // Empty target needs nothing.
        assert!(is_pushable_from_edge(&board, Coord::new(1, 1), Direction::Right));
    }

    #[test]
    fn test_execute_push_shifts_chain() {
        let board = Board::empty()
            .with(Coord::new(1, 1), a(Direction::Up))
            .with(Coord::new(1, 2), b(Direction::Left));

        let result = execute_push(&board, Coord::new(1, 1), Direction::Up);
        assert_eq!(result.ejected(), None);

        let next = result.apply_to(&board);
        assert_eq!(next[Coord::new(1, 1)], Piece::Empty);
        assert_eq!(next[Coord::new(1, 2)], a(Direction::Up));
        assert_eq!(next[Coord::new(1, 3)], b(Direction::Left));
    }

    #[test]
    fn test_execute_push_ejects_last_piece() {
        let board = Board::empty()
            .with(Coord::new(4, 5), a(Direction::Right))
            .with(Coord::new(5, 5), b(Direction::Down));

        let result = execute_push(&board, Coord::new(4, 5), Direction::Right);
        assert_eq!(result.ejected(), Some(b(Direction::Down)));

        let next = result.apply_to(&board);
        assert_eq!(next[Coord::new(4, 5)], Piece::Empty);
        assert_eq!(next[Coord::new(5, 5)], a(Direction::Right));
        assert_eq!(next.count_pieces(Player::B), 0);
    }

    #[test]
    fn test_execute_push_from_edge() {
        let board = Board::standard();
        let result = execute_push_from_edge(&board, Coord::new(3, 5), Player::B, Direction::Down);

        assert_eq!(result.vacated, None);
        assert_eq!(result.ejected(), None);

        let next = result.apply_to(&board);
        assert_eq!(next[Coord::new(3, 5)], b(Direction::Down));
        assert_eq!(next[Coord::new(3, 3)], Piece::Mountain);

        // Entering on an empty cell only places the piece.
        let next = execute_push_from_edge(&board, Coord::new(3, 1), Player::A, Direction::Up).apply_to(&board);
        assert_eq!(next[Coord::new(3, 1)], a(Direction::Up));
        assert_eq!(next[Coord::new(3, 2)], Piece::Empty);
    }

    #[test]
    fn test_closest_pusher_picks_furthest_along() {
        let shifted = [
            (Destination::Cell(Coord::new(1, 3)), a(Direction::Right)),
            (Destination::Cell(Coord::new(2, 3)), b(Direction::Right)),
            (Destination::Cell(Coord::new(3, 3)), a(Direction::Up)),
            (Destination::OffBoard, Piece::Mountain),
        ];
        assert_eq!(closest_pusher(&shifted, Direction::Right), Some(Player::B));
        assert_eq!(closest_pusher(&shifted, Direction::Left), None);
    }
}
