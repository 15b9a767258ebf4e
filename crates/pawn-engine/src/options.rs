//! Resolver policy knobs.
//!
//! All fields default, so an empty `[resolver]` TOML table (or none at all)
//! yields [`ResolverOptions::default`].

use serde::{Deserialize, Serialize};

/// How to choose between several origins that reach the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Exact file+rank match, then file match, then rank match. A token
    /// without hints takes the first candidate in storage order; a token
    /// whose hints match no candidate does not resolve.
    #[default]
    Ranked,
    /// The first candidate in storage order whose file or rank equals a
    /// hint; without hints, the first candidate.
    StorageOrder,
}

/// Whether candidate rays see the pieces standing on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occupancy {
    /// Rays run to the board edge regardless of what stands on them.
    #[default]
    Blind,
    /// Rays stop at the first occupied square, which is reachable only if
    /// it holds an opposing piece. Pawn pushes never land on a piece.
    Truncated,
}

/// What a failed resolution does to the turn counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Board and turn are left untouched.
    #[default]
    KeepTurn,
    /// The turn counter advances even though nothing moved.
    AdvanceTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    pub tie_break: TieBreak,
    pub occupancy: Occupancy,
    pub on_failure: FailurePolicy,
}
