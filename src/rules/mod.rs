//! Move validation and application.
//!
//! - `validator`: decides legality, never mutates
//! - `processor`: computes the resulting snapshots of a legal move
//! - `engine`: the `RulesEngine` trait tying both together
//!
//! The session layer calls into `RulesEngine` and never interprets the
//! push rules directly.

pub mod engine;
pub mod processor;
pub mod validator;

pub use engine::{RulesEngine, SiamRules};
pub use processor::{apply, infer_action};
pub use validator::validate;
