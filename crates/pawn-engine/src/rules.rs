//! Extension points for rules the resolver does not enforce itself.
//!
//! The resolver replays recorded games and only checks movement shape.
//! Legality checks (check, pins) and en passant plug in through
//! [`ReplayRules`] without the resolver carrying partial logic for them.

use crate::Board;
use pawn_core::{Piece, Position};

/// Hooks consulted while resolving a SAN token.
///
/// # Example
///
/// ```
/// use pawn_engine::{Board, ReplayRules, Resolver};
/// use pawn_core::{Material, Piece, Position};
///
/// /// Refuses to move the king anywhere.
/// struct FrozenKing;
///
/// impl ReplayRules for FrozenKing {
///     fn admits(&self, _: &Board, piece: Piece, _: Position, _: Position) -> bool {
///         piece.material != Material::King
///     }
/// }
///
/// let mut board = Board::new();
/// let resolver = Resolver::default().with_rules(FrozenKing);
/// assert!(resolver.resolve(&mut board, "e4").is_ok());
/// ```
pub trait ReplayRules {
    /// Returns false to veto `piece` moving from `from` to `to`.
    ///
    /// Called for every shape-consistent candidate before tie-breaking.
    fn admits(&self, _board: &Board, _piece: Piece, _from: Position, _to: Position) -> bool {
        true
    }

    /// Names an extra square to clear when a pawn captures onto `to`.
    ///
    /// This is where en passant would be expressed.
    fn en_passant_victim(
        &self,
        _board: &Board,
        _pawn: Piece,
        _from: Position,
        _to: Position,
    ) -> Option<Position> {
        None
    }
}

/// Admits every candidate and clears nothing extra.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lenient;

impl ReplayRules for Lenient {}

impl<R: ReplayRules + ?Sized> ReplayRules for &R {
    fn admits(&self, board: &Board, piece: Piece, from: Position, to: Position) -> bool {
        (**self).admits(board, piece, from, to)
    }

    fn en_passant_victim(
        &self,
        board: &Board,
        pawn: Piece,
        from: Position,
        to: Position,
    ) -> Option<Position> {
        (**self).en_passant_victim(board, pawn, from, to)
    }
}
