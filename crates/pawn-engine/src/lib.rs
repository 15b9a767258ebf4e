//! Chess game replay: resolves recorded SAN moves against a mutable board.
//!
//! This crate provides:
//! - [`Board`] - 64 squares plus a turn counter, built from the initial
//!   arrangement or a FEN piece placement
//! - [`possible_paths`] / [`capture_paths`] - movement shape per material
//! - [`San`] - field-by-field decoding of SAN tokens
//! - [`Resolver`] - finds the origin of a SAN move and applies it
//! - [`Replay`] - a cursor over one recorded game
//! - [`BoardActor`] - a tokio task that owns a board and serializes callers
//!
//! # Architecture
//!
//! Replay trusts the record. Candidate paths are occupancy-blind by default
//! and legality (check, pins) is never verified; the resolver only needs one
//! origin consistent with the shape of the move and the token's hints.
//! [`ResolverOptions`] switches on stricter occupancy handling, and
//! [`ReplayRules`] is where further checks plug in.
//!
//! # Example
//!
//! ```
//! use pawn_engine::Board;
//!
//! let mut board = Board::new();
//! board.play("e4").unwrap();
//! board.play("e5").unwrap();
//! board.play("Nf3").unwrap();
//! assert_eq!(
//!     board.placement(),
//!     "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R"
//! );
//! ```

mod actor;
mod board;
mod game;
pub mod movegen;
mod options;
mod resolver;
pub mod rules;
pub mod san;

pub use actor::{ActorError, BoardActor, BoardHandle};
pub use board::{Board, PlacementError, Square};
pub use game::Replay;
pub use movegen::{capture_paths, possible_paths};
pub use options::{FailurePolicy, Occupancy, ResolverOptions, TieBreak};
pub use resolver::{ResolveError, Resolver};
pub use rules::{Lenient, ReplayRules};
pub use san::San;
