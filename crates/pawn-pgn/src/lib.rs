//! Portable Game Notation (PGN) parsing and writing.
//!
//! [`PgnParser`] reads records from any character stream; [`PgnRecord`]
//! holds the tags, the numbered movetext and the result of one game and
//! renders back to export-style PGN through `Display`.
//!
//! The parser knows nothing about chess rules: SAN tokens are stored as
//! text and handed to a move resolver by the caller.
//!
//! # Example
//!
//! ```
//! use pawn_pgn::{parse_all, Outcome};
//!
//! let text = r#"
//! [White "Carlsen,M"]
//! [Black "Anand,V"]
//! [Result "1-0"]
//!
//! 1.d4 Nf6 2.Bf4 d5 3.e3 c5 1-0
//! "#;
//!
//! let records = parse_all(text).unwrap();
//! assert_eq!(records[0].matchup(), "Carlsen,M vs Anand,V");
//! assert_eq!(records[0].outcome, Some(Outcome::WhiteWins));
//! ```

mod parser;
mod record;

pub use parser::{parse, parse_all, PgnParser};
pub use record::{MovetextMove, Outcome, PgnRecord, Tags, SEVEN_TAG_ROSTER};

use thiserror::Error;

/// Errors for PGN text that cannot be read as a record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PgnError {
    /// A `{` comment runs to the end of the input.
    #[error("unterminated comment starting at line {line}")]
    UnterminatedComment { line: usize },

    /// A `(` variation is never closed.
    #[error("unterminated variation starting at line {line}")]
    UnterminatedVariation { line: usize },

    /// A `[` tag pair lacks its key, quoted value or closing bracket.
    #[error("malformed tag pair at line {line}")]
    MalformedTag { line: usize },

    /// A token appeared where the movetext cycle expects something else.
    #[error("unexpected token {token:?} at line {line}")]
    UnexpectedToken { token: String, line: usize },

    /// A move number is zero or too large.
    #[error("invalid move number {token:?} at line {line}")]
    InvalidMoveNumber { token: String, line: usize },
}

impl PgnError {
    /// Line on which the offending span or token starts.
    pub fn line(&self) -> usize {
        match self {
            PgnError::UnterminatedComment { line }
            | PgnError::UnterminatedVariation { line }
            | PgnError::MalformedTag { line }
            | PgnError::UnexpectedToken { line, .. }
            | PgnError::InvalidMoveNumber { line, .. } => *line,
        }
    }
}
