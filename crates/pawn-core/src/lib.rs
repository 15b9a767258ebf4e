//! Core types for chess replay.
//!
//! This crate provides the value types shared by the replay engine and the
//! PGN tooling:
//! - [`File`], [`Rank`], and [`Position`] for board coordinates
//! - [`Direction`] and [`Path`] for single steps and rays
//! - [`Material`], [`Piece`], and [`Color`] for piece identity
//! - [`Move`] for a resolved board transition

mod color;
mod geometry;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use geometry::{Direction, GeometryError, Path};
pub use mov::Move;
pub use piece::{Material, Piece};
pub use position::{File, Position, PositionParseError, Rank};
