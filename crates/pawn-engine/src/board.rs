//! Mutable board state: 64 squares and a turn counter.

use pawn_core::{Color, File, Material, Piece, Position, Rank};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when building a board from FEN piece placement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    /// The placement does not have eight `/`-separated ranks.
    #[error("expected 8 ranks, got {0}")]
    RankCount(usize),

    /// A character is neither a piece letter nor a digit.
    #[error("invalid character '{found}' in rank {rank}")]
    InvalidChar { found: char, rank: u8 },

    /// A rank does not describe exactly eight squares.
    #[error("rank {rank} has {squares} squares, expected 8")]
    RankWidth { rank: u8, squares: u32 },
}

/// One square of the board and whatever stands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    position: Position,
    piece: Option<Piece>,
}

impl Square {
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Returns true if this square holds exactly `piece`.
    #[inline]
    pub fn holds(&self, piece: Piece) -> bool {
        self.piece == Some(piece)
    }
}

/// Algebraic rendering: material letter then coordinates ("Re4", "e4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(letter) = self.piece.and_then(|p| p.material.letter()) {
            write!(f, "{}", letter)?;
        }
        write!(f, "{}", self.position)
    }
}

const BACK_ROW: [Material; 8] = [
    Material::Rook,
    Material::Knight,
    Material::Bishop,
    Material::Queen,
    Material::King,
    Material::Bishop,
    Material::Knight,
    Material::Rook,
];

/// A chess board for replaying recorded games.
///
/// Holds exactly one [`Square`] per [`Position`], stored in position index
/// order (a1, b1, ..., h8), and a turn counter that starts at zero with
/// White to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; 64],
    turn: u32,
}

impl Board {
    /// FEN piece placement of the standard initial arrangement.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Creates a board in the standard initial arrangement.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &material) in File::ALL.iter().zip(BACK_ROW.iter()) {
            for color in [Color::White, Color::Black] {
                let back = Position::new(*file, color.back_rank());
                let pawn = Position::new(*file, color.pawn_rank());
                board.set_piece(back, Some(Piece::new(color, material)));
                board.set_piece(pawn, Some(Piece::new(color, Material::Pawn)));
            }
        }
        board
    }

    /// Creates a board with no pieces, White to move.
    pub fn empty() -> Self {
        let mut squares = [Square {
            position: Position::A1,
            piece: None,
        }; 64];
        for position in Position::all() {
            squares[position.index() as usize].position = position;
        }
        Board { squares, turn: 0 }
    }

    /// Builds a board from the piece-placement field of a FEN string.
    ///
    /// The turn counter starts at zero (White to move).
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::RankCount(rows.len()));
        }

        let mut board = Board::empty();
        for (rank, row) in Rank::ALL.iter().rev().zip(rows) {
            let rank_number = rank.index() + 1;
            let mut file = 0u32;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if let Some(f) = u8::try_from(file).ok().and_then(File::from_index) {
                        board.set_piece(Position::new(f, *rank), Some(piece));
                    }
                    file += 1;
                } else {
                    return Err(PlacementError::InvalidChar {
                        found: c,
                        rank: rank_number,
                    });
                }
            }
            if file != 8 {
                return Err(PlacementError::RankWidth {
                    rank: rank_number,
                    squares: file,
                });
            }
        }
        Ok(board)
    }

    /// Returns the FEN piece placement of the current arrangement.
    pub fn placement(&self) -> String {
        let mut fen = String::new();
        for (i, row) in self.rows().iter().enumerate() {
            let mut empty_count = 0;
            for square in row {
                match square.piece {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if i < 7 {
                fen.push('/');
            }
        }
        fen
    }

    /// Returns a copy of this board with `color` to move.
    pub fn with_side_to_move(mut self, color: Color) -> Self {
        if self.side_to_move() != color {
            self.turn += 1;
        }
        self
    }

    /// Returns the square at `position`.
    #[inline]
    pub fn square(&self, position: Position) -> &Square {
        &self.squares[position.index() as usize]
    }

    /// Returns the piece at `position`, if any.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.square(position).piece
    }

    /// Places `piece` on `position`, or clears it with `None`.
    #[inline]
    pub fn set_piece(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.index() as usize].piece = piece;
    }

    /// Returns the number of half-moves attempted on this board.
    #[inline]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the color to move: White on even turns, Black on odd.
    #[inline]
    pub const fn side_to_move(&self) -> Color {
        if self.turn % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub(crate) fn advance_turn(&mut self) {
        self.turn += 1;
    }

    /// Iterates squares in storage order (a1, b1, ..., h8).
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Iterates the positions currently holding `piece`, in storage order.
    pub fn positions_of(&self, piece: Piece) -> impl Iterator<Item = Position> + '_ {
        self.squares
            .iter()
            .filter(move |square| square.holds(piece))
            .map(|square| square.position)
    }

    /// Returns the board as rows for display: rank 8 first, files a to h.
    pub fn rows(&self) -> [[Square; 8]; 8] {
        let mut rows = [[self.squares[0]; 8]; 8];
        for (row, rank) in rows.iter_mut().zip(Rank::ALL.iter().rev()) {
            for (cell, file) in row.iter_mut().zip(File::ALL) {
                *cell = *self.square(Position::new(file, *rank));
            }
        }
        rows
    }

    /// Returns all 64 squares in display order (rank 8 to 1, file a to h).
    pub fn snapshot(&self) -> Vec<Square> {
        self.rows().into_iter().flatten().collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board with figurines, rank 8 on top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.rows().iter().zip(Rank::ALL.iter().rev()) {
            write!(f, "{} ", rank)?;
            for square in row {
                let c = square.piece.map_or('·', Piece::figurine);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in File::ALL {
            write!(f, " {}", file)?;
        }
        writeln!(f)
    }
}
