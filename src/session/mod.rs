//! Game sessions.
//!
//! A `Session` owns one game's history and applies moves strictly one at
//! a time through a `RulesEngine`. `SharedSession` wraps a session in a
//! mutex so several threads can submit moves and observe snapshots.
//!
//! ## Example
//!
//! ```
//! use siam::core::{Coord, Direction, Player};
//! use siam::session::Session;
//! use siam::turn::{MoveOutcome, Selectable, Move};
//!
//! let mut session: Session = Session::default();
//! session.submit(Move::select(Player::A, Selectable::Bullpen));
//! session.submit(Move::target(Player::A, Coord::new(1, 1)));
//! let outcome = session.submit(Move::face(Player::A, Direction::Up));
//!
//! assert!(matches!(outcome, MoveOutcome::TurnEnds(..)));
//! assert_eq!(session.current().current_player, Player::B);
//!
//! session.undo_turn().unwrap();
//! assert_eq!(session.current().current_player, Player::A);
//! ```

mod history;
mod shared;

pub use history::Session;
pub use shared::SharedSession;
