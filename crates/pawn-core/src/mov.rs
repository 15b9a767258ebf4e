//! Move representation.

use crate::{Material, Piece, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A committed board transition, produced by resolving one SAN token.
///
/// Castling is reported as the king's displacement only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The piece that moved, as it stood on the origin square.
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
    /// True if the SAN token marked a capture.
    pub takes: bool,
    /// Material the pawn was promoted to, if any.
    pub promotion: Option<Material>,
}

impl Move {
    /// Creates a quiet move with no capture or promotion.
    #[inline]
    pub const fn new(piece: Piece, from: Position, to: Position) -> Self {
        Move {
            piece,
            from,
            to,
            takes: false,
            promotion: None,
        }
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_coordinate(&self) -> String {
        let promo = match self.promotion.and_then(Material::letter) {
            Some(c) => c.to_ascii_lowercase().to_string(),
            None => String::new(),
        };
        format!("{}{}{}", self.from, self.to, promo)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
