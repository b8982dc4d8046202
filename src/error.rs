//! Error types for the stax engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The deck is empty and the discard pile has nothing left to recycle.
    /// Fatal for the running game: there are no cards left to draw.
    #[error("draw pile exhausted: deck is empty and the discard pile has no cards to recycle")]
    DeckExhausted,

    /// A pending input wait was cancelled by a stop signal. Graceful
    /// shutdown, never a rule failure.
    #[error("input wait cancelled by stop signal")]
    Cancelled,

    /// The game was assembled from inconsistent parts (empty turn ring,
    /// seat/kind mismatch, deck too small to deal). Caller bug.
    #[error("invalid game setup: {0}")]
    InvalidSetup(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
