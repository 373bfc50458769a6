//! Board geometry and the push engine.
//!
//! Everything in this module is a pure function over a `Board` value.
//! Callers own the snapshot that holds the board; nothing here mutates
//! a board that was handed in by reference.

mod board;
pub mod geometry;
pub mod push;
mod strength;

pub use board::{Board, MOUNTAIN_START};
pub use geometry::{
    edge_push_directions, is_in_front, is_orthogonal_adjacent, on_corner, on_edge,
    oriented_line, pusher_index, Line,
};
pub use push::{
    applicable_strength, closest_pusher, execute_push, execute_push_from_edge, feasible,
    involved_pieces, is_pushable, is_pushable_from_edge, push_strength, Destination,
    PushResult, Scalars, Shifted,
};
pub use strength::Strength;
