//! stax - rules-and-turn engine for a stacking card game
//!
//! Draw/skip/reverse/wild penalty mechanics over a recycling deck, with a
//! single sequential game loop driving both poll-based bots and an
//! asynchronously resolved human player.

pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod zones;

pub use error::{EngineError, Result};
