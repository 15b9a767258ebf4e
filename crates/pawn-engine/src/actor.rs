//! Single-owner board task.
//!
//! A [`BoardActor`] runs on its own tokio task and is the only code that
//! touches its board. Callers hold a cloneable [`BoardHandle`] and submit
//! tokens over a queue, so concurrent submissions are applied one at a time
//! in arrival order.

use crate::resolver::{ResolveError, Resolver};
use crate::rules::{Lenient, ReplayRules};
use crate::Board;
use pawn_core::Move;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

const QUEUE_CAPACITY: usize = 100;

/// Errors returned through a [`BoardHandle`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActorError {
    /// The actor task has exited and no longer accepts commands.
    #[error("board actor has stopped")]
    Closed,

    /// The actor applied the token and the resolver rejected it.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

enum Command {
    Play {
        san: String,
        reply: oneshot::Sender<Result<Move, ResolveError>>,
    },
    Snapshot {
        reply: oneshot::Sender<Board>,
    },
}

/// Owns a board and applies queued tokens to it.
pub struct BoardActor<R = Lenient> {
    board: Board,
    resolver: Resolver<R>,
    commands: mpsc::Receiver<Command>,
}

impl<R> BoardActor<R>
where
    R: ReplayRules + Send + 'static,
{
    /// Spawns the actor on the current tokio runtime and returns its handle.
    ///
    /// The task ends once every handle has been dropped.
    pub fn spawn(board: Board, resolver: Resolver<R>) -> BoardHandle {
        let (sender, commands) = mpsc::channel(QUEUE_CAPACITY);
        let actor = BoardActor {
            board,
            resolver,
            commands,
        };
        tokio::spawn(actor.run());
        BoardHandle { sender }
    }

    async fn run(mut self) {
        tracing::info!(turn = self.board.turn(), "board actor started");
        while let Some(command) = self.commands.recv().await {
            match command {
                Command::Play { san, reply } => {
                    let result = self.resolver.resolve(&mut self.board, &san);
                    // The caller may have given up waiting.
                    let _ = reply.send(result);
                }
                Command::Snapshot { reply } => {
                    let _ = reply.send(self.board.clone());
                }
            }
        }
        tracing::info!(turn = self.board.turn(), "board actor stopped");
    }
}

/// Cloneable access to a running [`BoardActor`].
#[derive(Debug, Clone)]
pub struct BoardHandle {
    sender: mpsc::Sender<Command>,
}

impl BoardHandle {
    /// Spawns an actor over the standard initial arrangement.
    pub fn spawn_default() -> Self {
        BoardActor::spawn(Board::new(), Resolver::default())
    }

    /// Submits a SAN token and waits for the resolved move.
    pub async fn play(&self, san: impl Into<String>) -> Result<Move, ActorError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Command::Play {
                san: san.into(),
                reply,
            })
            .await
            .map_err(|_| ActorError::Closed)?;
        Ok(response.await.map_err(|_| ActorError::Closed)??)
    }

    /// Returns a copy of the board as it stands after every queued token.
    pub async fn snapshot(&self) -> Result<Board, ActorError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Command::Snapshot { reply })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Closed)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Play { san, .. } => f.debug_struct("Play").field("san", san).finish(),
            Command::Snapshot { .. } => f.write_str("Snapshot"),
        }
    }
}
