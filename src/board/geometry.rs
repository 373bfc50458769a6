//! Board geometry: boundary predicates, adjacency and oriented lines.

use smallvec::SmallVec;

use super::board::Board;
use crate::core::{Coord, Direction, Piece, BOARD_SIZE};

/// A full row or column ordered along a push direction.
pub type Line = SmallVec<[(Coord, Piece); 5]>;

/// True if either axis sits on the board boundary.
#[must_use]
pub fn on_edge(coord: Coord) -> bool {
    let boundary = |v: u8| v == 1 || v == BOARD_SIZE;
    boundary(coord.x()) || boundary(coord.y())
}

/// True if both axes sit on the board boundary.
#[must_use]
pub fn on_corner(coord: Coord) -> bool {
    let boundary = |v: u8| v == 1 || v == BOARD_SIZE;
    boundary(coord.x()) && boundary(coord.y())
}

/// True if `a` and `b` share a side (or are the same cell).
#[must_use]
pub fn is_orthogonal_adjacent(a: Coord, b: Coord) -> bool {
    let dx = (a.x() as i16 - b.x() as i16).abs();
    let dy = (a.y() as i16 - b.y() as i16).abs();
    dx + dy < 2
}

/// True if `to` is the cell directly ahead of the piece at `from`.
#[must_use]
pub fn is_in_front(board: &Board, from: Coord, to: Coord) -> bool {
    board[from]
        .facing()
        .and_then(|facing| from.step(facing))
        .is_some_and(|ahead| ahead == to)
}

/// The row (left/right) or column (up/down) through `origin`, ordered so
/// that index 0 is the cell furthest behind and pushing advances toward
/// the end.
#[must_use]
pub fn oriented_line(board: &Board, origin: Coord, direction: Direction) -> Line {
    let axis: SmallVec<[u8; 5]> = if direction.sign() > 0 {
        (1..=BOARD_SIZE).collect()
    } else {
        (1..=BOARD_SIZE).rev().collect()
    };

    axis.into_iter()
        .map(|v| {
            let coord = if direction.is_horizontal() {
                Coord::new(v, origin.y())
            } else {
                Coord::new(origin.x(), v)
            };
            (coord, board[coord])
        })
        .collect()
}

/// Position of `origin` within its oriented line (0-based).
#[must_use]
pub fn pusher_index(origin: Coord, direction: Direction) -> usize {
    let v = if direction.is_horizontal() { origin.x() } else { origin.y() };
    if direction.sign() > 0 {
        (v - 1) as usize
    } else {
        (BOARD_SIZE - v) as usize
    }
}

/// Directions a piece entering the board at `coord` can push in.
///
/// One inward direction on a straight edge, two on a corner, none for
/// interior cells.
#[must_use]
pub fn edge_push_directions(coord: Coord) -> SmallVec<[Direction; 2]> {
    let mut directions = SmallVec::new();
    if coord.x() == 1 {
        directions.push(Direction::Right);
    }
    if coord.x() == BOARD_SIZE {
        directions.push(Direction::Left);
    }
    if coord.y() == 1 {
        directions.push(Direction::Up);
    }
    if coord.y() == BOARD_SIZE {
        directions.push(Direction::Down);
    }
    directions
}
