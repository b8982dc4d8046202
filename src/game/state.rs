//! Read-only projections of the game for views and controllers

use crate::core::{Card, PlayerId, PlayerKind};
use serde::Serialize;

/// Immutable snapshot of the observable game state, recomputed on demand.
/// A pure read: never stored as a source of truth.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// The discard pile's anchor card.
    pub top_card: Card,
    /// Copy of the active player's hand.
    pub active_hand: Vec<Card>,
    pub active_player: PlayerId,
    /// Pending forced-draw penalty, 0 when none.
    pub sanction: u32,
    pub deck_size: usize,
    pub discard_size: usize,
}

/// Per-player setup data handed to the view at game start, so it can build
/// its own seat representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerSetup {
    pub id: PlayerId,
    pub is_human: bool,
}

impl PlayerSetup {
    pub fn new(id: PlayerId, kind: PlayerKind) -> Self {
        PlayerSetup {
            id,
            is_human: kind == PlayerKind::Human,
        }
    }
}
