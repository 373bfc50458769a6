//! Board coordinates and facing directions.
//!
//! Coordinates are 1-based `(x, y)` pairs on a 5x5 grid. `x` grows to the
//! right, `y` grows upward:
//!
//! ```text
//!   y
//!   5  . . . . .
//!   4  . . . . .
//!   3  . M M M .
//!   2  . . . . .
//!   1  . . . . .
//!      1 2 3 4 5  x
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::OffBoard;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 5;

/// A cell on the board. Both axes are in `1..=BOARD_SIZE`.
///
/// The fields are private: every constructor, including `Deserialize`,
/// rejects off-board values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Create a coordinate.
    ///
    /// Out-of-range coordinates are a programming error. Use `try_new` or
    /// `TryFrom` for untrusted input.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x >= 1 && x <= BOARD_SIZE, "x out of range");
        assert!(y >= 1 && y <= BOARD_SIZE, "y out of range");
        Self { x, y }
    }

    /// Create a coordinate from signed components, or `None` if off the board.
    #[must_use]
    pub fn try_new(x: i16, y: i16) -> Option<Self> {
        let range = 1..=BOARD_SIZE as i16;
        if range.contains(&x) && range.contains(&y) {
            Some(Self { x: x as u8, y: y as u8 })
        } else {
            None
        }
    }

    /// Bypasses the range check so tests can build what `Deserialize`
    /// and the constructors refuse.
    #[cfg(test)]
    pub(crate) const fn unchecked(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// True if both axes are in `1..=BOARD_SIZE`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.x >= 1 && self.x <= BOARD_SIZE && self.y >= 1 && self.y <= BOARD_SIZE
    }

    /// The neighbouring cell in `direction`, or `None` past the edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Self::try_new(self.x as i16 + dx, self.y as i16 + dy)
    }

    /// All 25 coordinates in row-major order (bottom row first).
    pub fn all() -> impl Iterator<Item = Coord> {
        (1..=BOARD_SIZE).flat_map(|y| (1..=BOARD_SIZE).map(move |x| Coord { x, y }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = OffBoard;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Coord::try_new(x.into(), y.into()).ok_or(OffBoard {
            x: x.into(),
            y: y.into(),
        })
    }
}

// Same `{"x", "y"}` shape as `Serialize`, checked through `TryFrom`.
impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            x: u8,
            y: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        Coord::try_from((raw.x, raw.y)).map_err(D::Error::custom)
    }
}

/// A facing or push direction.
///
/// Mountains have no facing; they are represented with `Piece::facing()`
/// returning `None` rather than a neutral direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True for left/right.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// +1 for right/up, -1 for left/down.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Up | Direction::Right => 1,
            Direction::Down | Direction::Left => -1,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(()),
        }
    }
}
