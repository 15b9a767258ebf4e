//! Game replay with a movable cursor.
//!
//! A [`Replay`] owns a board and the recorded SAN tokens of one game. The
//! cursor (`ply`) counts the tokens consumed so far; stepping back rebuilds
//! the board from the starting arrangement since board mutations are not
//! reversible in general (captured pieces are simply overwritten).

use crate::options::FailurePolicy;
use crate::resolver::{ResolveError, Resolver};
use crate::rules::{Lenient, ReplayRules};
use crate::Board;
use pawn_core::Move;

/// Replays a recorded game token by token.
///
/// # Example
///
/// ```
/// use pawn_engine::Replay;
///
/// let mut replay = Replay::new(["e4", "e5", "Nf3"]);
/// replay.seek(3).unwrap();
/// assert_eq!(replay.ply(), 3);
/// assert_eq!(replay.moves().last().unwrap().to_string(), "g1f3");
/// ```
#[derive(Debug, Clone)]
pub struct Replay<R = Lenient> {
    start: Board,
    board: Board,
    tokens: Vec<String>,
    /// One entry per consumed token; `None` for a token that failed and was
    /// skipped under [`FailurePolicy::AdvanceTurn`].
    history: Vec<Option<Move>>,
    resolver: Resolver<R>,
}

impl Replay<Lenient> {
    /// Creates a replay from the standard initial arrangement.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Replay::with_resolver(Board::new(), tokens, Resolver::default())
    }
}

impl<R: ReplayRules> Replay<R> {
    /// Creates a replay from a custom starting board and resolver.
    pub fn with_resolver<I, S>(start: Board, tokens: I, resolver: Resolver<R>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Replay {
            board: start.clone(),
            start,
            tokens: tokens.into_iter().map(Into::into).collect(),
            history: Vec::new(),
            resolver,
        }
    }

    /// Returns the board at the current cursor.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of tokens consumed.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.ply() == self.tokens.len()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the token the next [`step_forward`](Self::step_forward) would
    /// resolve.
    pub fn next_token(&self) -> Option<&str> {
        self.tokens.get(self.ply()).map(String::as_str)
    }

    /// Iterates the moves played up to the cursor, skipping failed tokens.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.history.iter().flatten()
    }

    /// Resolves the next token.
    ///
    /// Returns `Ok(None)` once every token has been consumed. On failure the
    /// cursor advances only under [`FailurePolicy::AdvanceTurn`], matching
    /// what the resolver did to the turn counter.
    pub fn step_forward(&mut self) -> Result<Option<Move>, ResolveError> {
        let Some(token) = self.tokens.get(self.history.len()) else {
            return Ok(None);
        };
        match self.resolver.resolve(&mut self.board, token) {
            Ok(mov) => {
                self.history.push(Some(mov));
                Ok(Some(mov))
            }
            Err(err) => {
                if self.resolver.options().on_failure == FailurePolicy::AdvanceTurn {
                    self.history.push(None);
                }
                Err(err)
            }
        }
    }

    /// Undoes the last consumed token. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        match self.ply() {
            0 => false,
            ply => {
                self.rewind(ply - 1);
                true
            }
        }
    }

    /// Moves the cursor to `ply`, clamped to the number of tokens.
    ///
    /// Stops at the first token that fails to resolve and returns its error.
    pub fn seek(&mut self, ply: usize) -> Result<(), ResolveError> {
        let target = ply.min(self.tokens.len());
        if target < self.ply() {
            self.rewind(target);
            return Ok(());
        }
        while self.ply() < target {
            self.step_forward()?;
        }
        Ok(())
    }

    /// Plays every remaining token.
    pub fn run(&mut self) -> Result<(), ResolveError> {
        self.seek(self.tokens.len())
    }

    /// Rebuilds the board from the start and replays the first `ply` tokens.
    fn rewind(&mut self, ply: usize) {
        self.board = self.start.clone();
        let replayed: Vec<Option<Move>> = self.history.drain(..).take(ply).collect();
        for (token, recorded) in self.tokens.iter().zip(replayed) {
            let result = self.resolver.resolve(&mut self.board, token);
            debug_assert_eq!(result.ok(), recorded);
            self.history.push(recorded);
        }
    }
}
