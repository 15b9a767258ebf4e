//! Move resolution: SAN token + board state → a committed [`Move`].
//!
//! The resolver searches the squares holding the side-to-move's piece of
//! the decoded material for an origin whose candidate paths reach the
//! decoded destination, applies the origin hints carried by the token,
//! then mutates the board and advances the turn.

use crate::movegen::{capture_paths, possible_paths};
use crate::options::{FailurePolicy, Occupancy, ResolverOptions, TieBreak};
use crate::rules::{Lenient, ReplayRules};
use crate::{Board, San};
use pawn_core::{Color, File, Material, Move, Path, Piece, Position, Rank};
use thiserror::Error;

/// Errors returned when a SAN token cannot be applied to the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No square satisfies the token's movement shape and origin hints.
    #[error("no origin found for {side} move {san:?}")]
    NoOriginFound { san: String, side: Color },

    /// The token names no destination square.
    #[error("no destination square in {0:?}")]
    MissingDestination(String),
}

/// What a resolved token does to the board.
#[derive(Debug, Clone, Copy)]
enum Plan {
    Castle {
        king: Move,
        rook_from: Position,
        rook_to: Position,
    },
    Normal {
        mov: Move,
        victim: Option<Position>,
    },
}

/// Resolves SAN tokens against a [`Board`].
///
/// # Example
///
/// ```
/// use pawn_engine::{Board, Resolver};
///
/// let mut board = Board::new();
/// let resolver = Resolver::default();
/// let m = resolver.resolve(&mut board, "e4").unwrap();
/// assert_eq!(m.to_string(), "e2e4");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<R = Lenient> {
    options: ResolverOptions,
    rules: R,
}

impl Resolver<Lenient> {
    pub fn new(options: ResolverOptions) -> Self {
        Resolver {
            options,
            rules: Lenient,
        }
    }
}

impl Default for Resolver<Lenient> {
    fn default() -> Self {
        Resolver::new(ResolverOptions::default())
    }
}

impl<R: ReplayRules> Resolver<R> {
    /// Replaces the rule hooks consulted during resolution.
    pub fn with_rules<S: ReplayRules>(self, rules: S) -> Resolver<S> {
        Resolver {
            options: self.options,
            rules,
        }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolves `token` for the side to move, applies it, and advances the
    /// turn.
    ///
    /// On failure the board is untouched; the turn counter advances only
    /// under [`FailurePolicy::AdvanceTurn`].
    pub fn resolve(&self, board: &mut Board, token: &str) -> Result<Move, ResolveError> {
        let san = San::new(token);
        let side = board.side_to_move();

        match self.plan(board, &san, side) {
            Ok(plan) => {
                let mov = commit(board, plan);
                board.advance_turn();
                tracing::debug!(san = %san, %mov, turn = board.turn(), "resolved move");
                Ok(mov)
            }
            Err(err) => {
                tracing::warn!(san = %san, %side, error = %err, "could not resolve move");
                if self.options.on_failure == FailurePolicy::AdvanceTurn {
                    board.advance_turn();
                }
                Err(err)
            }
        }
    }

    fn plan(&self, board: &Board, san: &San<'_>, side: Color) -> Result<Plan, ResolveError> {
        let no_origin = || ResolveError::NoOriginFound {
            san: san.as_str().to_string(),
            side,
        };

        if san.is_castle() {
            return castle_plan(board, san, side).ok_or_else(no_origin);
        }

        let to = san
            .destination()
            .ok_or_else(|| ResolveError::MissingDestination(san.as_str().to_string()))?;
        let piece = Piece::new(side, san.material());
        let pawn_capture = san.takes() && piece.material == Material::Pawn;

        let candidates: Vec<Position> = board
            .positions_of(piece)
            .filter(|&from| self.reaches(board, piece, from, to, pawn_capture))
            .filter(|&from| self.rules.admits(board, piece, from, to))
            .collect();

        let from = self
            .select(&candidates, san.origin_file(), san.origin_rank())
            .ok_or_else(no_origin)?;

        let victim = if pawn_capture {
            self.rules.en_passant_victim(board, piece, from, to)
        } else {
            None
        };
        let promotion = match piece.material {
            Material::Pawn => san.promoted_to(),
            _ => None,
        };

        Ok(Plan::Normal {
            mov: Move {
                piece,
                from,
                to,
                takes: san.takes(),
                promotion,
            },
            victim,
        })
    }

    fn reaches(
        &self,
        board: &Board,
        piece: Piece,
        from: Position,
        to: Position,
        pawn_capture: bool,
    ) -> bool {
        if pawn_capture {
            return capture_paths(piece, from).iter().any(|path| {
                let open = self.open_prefix(board, piece, path, false);
                open.first() == Some(&to)
            });
        }
        let pawn_push = piece.material == Material::Pawn;
        possible_paths(piece, from)
            .iter()
            .any(|path| self.open_prefix(board, piece, path, pawn_push).contains(&to))
    }

    /// The part of `path` the piece can actually travel.
    fn open_prefix<'p>(
        &self,
        board: &Board,
        piece: Piece,
        path: &'p Path,
        pawn_push: bool,
    ) -> &'p [Position] {
        if self.options.occupancy == Occupancy::Blind {
            return path;
        }
        for (i, &position) in path.iter().enumerate() {
            if let Some(other) = board.piece_at(position) {
                let len = if !pawn_push && other.color != piece.color {
                    i + 1
                } else {
                    i
                };
                return &path[..len];
            }
        }
        path
    }

    fn select(
        &self,
        candidates: &[Position],
        file: Option<File>,
        rank: Option<Rank>,
    ) -> Option<Position> {
        let file_matches = |p: &&Position| file == Some(p.file());
        let rank_matches = |p: &&Position| rank == Some(p.rank());

        match self.options.tie_break {
            TieBreak::StorageOrder => {
                if file.is_none() && rank.is_none() {
                    candidates.first().copied()
                } else {
                    candidates
                        .iter()
                        .find(|p| file_matches(p) || rank_matches(p))
                        .copied()
                }
            }
            TieBreak::Ranked => {
                let exact = |p: &&Position| {
                    file.map_or(true, |f| p.file() == f) && rank.map_or(true, |r| p.rank() == r)
                };
                candidates
                    .iter()
                    .find(exact)
                    .or_else(|| candidates.iter().find(file_matches))
                    .or_else(|| candidates.iter().find(rank_matches))
                    .copied()
            }
        }
    }
}

fn castle_plan(board: &Board, san: &San<'_>, side: Color) -> Option<Plan> {
    let rank = side.back_rank();
    let (king_to, rook_from, rook_to) = if san.is_castle_king_side() {
        (File::G, File::H, File::F)
    } else {
        (File::C, File::A, File::D)
    };

    let king = Piece::new(side, Material::King);
    let rook = Piece::new(side, Material::Rook);
    let king_from = Position::new(File::E, rank);
    let rook_from = Position::new(rook_from, rank);

    if !board.square(king_from).holds(king) || !board.square(rook_from).holds(rook) {
        return None;
    }

    Some(Plan::Castle {
        king: Move::new(king, king_from, Position::new(king_to, rank)),
        rook_from,
        rook_to: Position::new(rook_to, rank),
    })
}

fn commit(board: &mut Board, plan: Plan) -> Move {
    match plan {
        Plan::Castle {
            king,
            rook_from,
            rook_to,
        } => {
            let rook = board.piece_at(rook_from);
            board.set_piece(king.from, None);
            board.set_piece(rook_from, None);
            board.set_piece(king.to, Some(king.piece));
            board.set_piece(rook_to, rook);
            king
        }
        Plan::Normal { mov, victim } => {
            let placed = match mov.promotion {
                Some(material) => Piece::new(mov.piece.color, material),
                None => mov.piece,
            };
            board.set_piece(mov.from, None);
            if let Some(victim) = victim {
                board.set_piece(victim, None);
            }
            board.set_piece(mov.to, Some(placed));
            mov
        }
    }
}

impl Board {
    /// Resolves and applies `token` with the default [`Resolver`].
    pub fn play(&mut self, token: &str) -> Result<Move, ResolveError> {
        Resolver::default().resolve(self, token)
    }
}
