//! Error types for game operations.

use thiserror::Error;

/// Dealing was attempted on an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur during a game step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can end an interactive game.
#[derive(Debug, Error)]
pub enum PlayError<E> {
    /// A game step failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Reading a move or showing an event failed.
    #[error("table I/O failed: {0}")]
    Input(E),
}
