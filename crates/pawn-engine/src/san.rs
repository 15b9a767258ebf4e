//! Standard Algebraic Notation (SAN) decoding.
//!
//! A [`San`] wraps a raw token and decodes its fields on demand. Decoding
//! never fails: fields that are missing from the token come back as `None`
//! or `false`, and the resolver decides what an incomplete token means.
//!
//! Examples: "e4", "Nf3", "Bxc6", "O-O", "b1=Q+", "Nbd2", "R1e1", "Ra8xb8"

use pawn_core::{File, Material, Position, Rank};
use std::fmt;

/// A raw SAN token with decoded accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct San<'a> {
    token: &'a str,
}

impl<'a> San<'a> {
    pub fn new(token: &'a str) -> Self {
        San {
            token: token.trim(),
        }
    }

    /// Returns the token as given (surrounding whitespace trimmed).
    pub fn as_str(&self) -> &'a str {
        self.token
    }

    /// The moving material: a leading R, B, N, Q or K names it, anything
    /// else (a file letter, a digit) means a pawn.
    pub fn material(&self) -> Material {
        self.token
            .chars()
            .next()
            .and_then(Material::from_letter)
            .unwrap_or(Material::Pawn)
    }

    /// True if the token marks a capture.
    pub fn takes(&self) -> bool {
        self.token.contains('x')
    }

    /// The last file+rank pair in the token.
    ///
    /// Taking the last pair handles fully disambiguated tokens such as
    /// "Ra8xb8", where the origin pair appears first.
    pub fn destination(&self) -> Option<Position> {
        let chars: Vec<char> = self.token.chars().collect();
        chars.windows(2).rev().find_map(|pair| {
            let file = File::from_char(pair[0])?;
            let rank = Rank::from_char(pair[1])?;
            Some(Position::new(file, rank))
        })
    }

    /// The origin file hint, present only when the token names more than
    /// one file.
    pub fn origin_file(&self) -> Option<File> {
        let mut files = self.token.chars().filter_map(File::from_char);
        let first = files.next()?;
        files.next().map(|_| first)
    }

    /// The origin rank hint, present only when the token names more than
    /// one rank.
    pub fn origin_rank(&self) -> Option<Rank> {
        let mut ranks = self.token.chars().filter_map(Rank::from_char);
        let first = ranks.next()?;
        ranks.next().map(|_| first)
    }

    pub fn origin_disambiguated(&self) -> bool {
        self.origin_file().is_some() || self.origin_rank().is_some()
    }

    /// The material named after '=', if the token is a promotion.
    pub fn promoted_to(&self) -> Option<Material> {
        let (_, rest) = self.token.split_once('=')?;
        rest.chars().next().and_then(Material::from_letter)
    }

    pub fn is_promotion(&self) -> bool {
        self.promoted_to().is_some()
    }

    pub fn is_check(&self) -> bool {
        self.token.ends_with('+')
    }

    pub fn is_checkmate(&self) -> bool {
        self.token.ends_with('#')
    }

    pub fn is_castle_king_side(&self) -> bool {
        self.without_suffix() == "O-O"
    }

    pub fn is_castle_queen_side(&self) -> bool {
        self.without_suffix() == "O-O-O"
    }

    pub fn is_castle(&self) -> bool {
        self.is_castle_king_side() || self.is_castle_queen_side()
    }

    fn without_suffix(&self) -> &'a str {
        self.token.trim_end_matches(['+', '#'])
    }
}

impl fmt::Display for San<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}
