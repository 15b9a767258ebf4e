//! Piece and material representation.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six kinds of chess material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Material {
    Pawn = 0,
    Rook = 1,
    Bishop = 2,
    Knight = 3,
    Queen = 4,
    King = 5,
}

/// Figurines indexed by `[color][material]`.
const FIGURINES: [[char; 6]; 2] = [
    ['♙', '♖', '♗', '♘', '♕', '♔'],
    ['♟', '♜', '♝', '♞', '♛', '♚'],
];

impl Material {
    /// All materials in order.
    pub const ALL: [Material; 6] = [
        Material::Pawn,
        Material::Rook,
        Material::Bishop,
        Material::Knight,
        Material::Queen,
        Material::King,
    ];

    /// Returns the index of this material (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the SAN letter for this material, `None` for pawns.
    pub const fn letter(self) -> Option<char> {
        match self {
            Material::Pawn => None,
            Material::Rook => Some('R'),
            Material::Bishop => Some('B'),
            Material::Knight => Some('N'),
            Material::Queen => Some('Q'),
            Material::King => Some('K'),
        }
    }

    /// Maps an uppercase SAN letter to its material.
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'R' => Some(Material::Rook),
            'B' => Some(Material::Bishop),
            'N' => Some(Material::Knight),
            'Q' => Some(Material::Queen),
            'K' => Some(Material::King),
            _ => None,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Material::Pawn => "Pawn",
            Material::Rook => "Rook",
            Material::Bishop => "Bishop",
            Material::Knight => "Knight",
            Material::Queen => "Queen",
            Material::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A colored piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub material: Material,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, material: Material) -> Self {
        Piece { color, material }
    }

    /// Returns the Unicode figurine (FAN) for this piece.
    pub const fn figurine(self) -> char {
        FIGURINES[self.color.index()][self.material.index()]
    }

    /// Returns the FEN character: uppercase for White, lowercase for Black.
    pub const fn to_fen_char(self) -> char {
        let c = match self.material {
            Material::Pawn => 'p',
            Material::Rook => 'r',
            Material::Bishop => 'b',
            Material::Knight => 'n',
            Material::Queen => 'q',
            Material::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a FEN character into a piece.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let material = match c.to_ascii_lowercase() {
            'p' => Material::Pawn,
            'r' => Material::Rook,
            'b' => Material::Bishop,
            'n' => Material::Knight,
            'q' => Material::Queen,
            'k' => Material::King,
            _ => return None,
        };
        Some(Piece { color, material })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_letters() {
        assert_eq!(Material::Pawn.letter(), None);
        assert_eq!(Material::Knight.letter(), Some('N'));
        assert_eq!(Material::King.letter(), Some('K'));
        for m in Material::ALL {
            if let Some(c) = m.letter() {
                assert_eq!(Material::from_letter(c), Some(m));
            }
        }
        assert_eq!(Material::from_letter('P'), None);
        assert_eq!(Material::from_letter('n'), None);
    }

    #[test]
    fn piece_fen_chars() {
        let white_pawn = Piece::new(Color::White, Material::Pawn);
        let black_knight = Piece::new(Color::Black, Material::Knight);
        assert_eq!(white_pawn.to_fen_char(), 'P');
        assert_eq!(black_knight.to_fen_char(), 'n');
        assert_eq!(Piece::from_fen_char('P'), Some(white_pawn));
        assert_eq!(Piece::from_fen_char('n'), Some(black_knight));
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn figurines() {
        assert_eq!(Piece::new(Color::White, Material::King).figurine(), '♔');
        assert_eq!(Piece::new(Color::Black, Material::Pawn).figurine(), '♟');
        assert_eq!(Piece::new(Color::Black, Material::Knight).figurine(), '♞');
    }

    #[test]
    fn display() {
        let piece = Piece::new(Color::Black, Material::Queen);
        assert_eq!(piece.to_string(), "Black Queen");
    }
}
