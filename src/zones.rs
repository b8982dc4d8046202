//! Card piles: the draw deck and the discard pile
//!
//! The deck draws from the top and refills itself from the discard pile's
//! recycle extraction. The discard pile is append-only and always keeps its
//! top card (the anchor) out of any recycle.

use crate::core::{Card, Color};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// The draw pile. Top of the stack = next card drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A deck over an explicit card list, top = last element. Used for
    /// deterministic setups in tests and experiments.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    /// The standard deck, shuffled with the provided RNG.
    pub fn standard(rng: &mut impl rand::Rng) -> Self {
        let mut cards = crate::core::standard_deck();
        cards.shuffle(rng);
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw the top card. An empty deck yields `None`; the caller decides
    /// whether a refill can recover it.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Reload the deck from the discard pile's recycle extraction, shuffled.
    ///
    /// Recycled native-black cards drop any color assigned during play and
    /// go back in as Black. The pile keeps its anchor card, so refilling
    /// from a pile of K cards yields K-1 drawable cards.
    pub fn refill_from(&mut self, pile: &mut DiscardPile, rng: &mut impl rand::Rng) {
        let mut recycled: Vec<Card> = pile
            .extract_all_except_top()
            .into_iter()
            .map(|card| {
                if card.is_native_black() {
                    card.with_color(Color::Black)
                } else {
                    card
                }
            })
            .collect();
        recycled.shuffle(rng);
        self.cards.extend(recycled);
    }
}

/// Append-only play history. The top card is the current anchor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new() -> Self {
        DiscardPile { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The most recently played card, if any.
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Remove and return every card except the top one. A pile that was
    /// non-empty before the call keeps exactly one card: its former top.
    pub fn extract_all_except_top(&mut self) -> Vec<Card> {
        if self.cards.len() <= 1 {
            return Vec::new();
        }
        let keep_from = self.cards.len() - 1;
        self.cards.drain(..keep_from).collect()
    }
}
