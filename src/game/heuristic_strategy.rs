//! Aggressive heuristic decision policies
//!
//! Evaluation-based play: penalty cards first, then turn denial, then high
//! numerals. Deterministic, so games against it replay exactly under a
//! fixed seed.

use crate::core::{Card, CardEffect, Color, Value};
use crate::game::strategy::{CardStrategy, ColorStrategy, StrategyView};

/// Disruption score used to rank candidates. Higher is more aggressive.
pub(crate) fn disruption_score(card: &Card) -> u32 {
    let mut score = card.draw_amount() as u32 * 100;
    if card.has_effect(CardEffect::SkipNext) {
        score += 50;
    }
    if card.has_effect(CardEffect::ReverseTurn) {
        score += 40;
    }
    score + numeral_rank(card.value())
}

fn numeral_rank(value: Value) -> u32 {
    Value::NUMERALS
        .iter()
        .position(|&v| v == value)
        .map(|p| p as u32)
        .unwrap_or(0)
}

/// Always plays the most disruptive legal card.
#[derive(Debug, Default)]
pub struct AggressiveStrategy;

impl AggressiveStrategy {
    pub fn new() -> Self {
        AggressiveStrategy
    }
}

impl CardStrategy for AggressiveStrategy {
    fn choose_card(&mut self, view: &StrategyView) -> Option<Card> {
        view.candidates
            .iter()
            .max_by_key(|card| disruption_score(card))
            .cloned()
    }
}

/// Picks the chromatic color the hand holds most of, so the chosen color
/// keeps as many follow-up plays open as possible. Ties resolve in suit
/// order; a hand with no chromatic cards falls back to the first suit.
#[derive(Debug, Default)]
pub struct MostFrequentColorStrategy;

impl MostFrequentColorStrategy {
    pub fn new() -> Self {
        MostFrequentColorStrategy
    }
}

impl ColorStrategy for MostFrequentColorStrategy {
    fn choose_color(&mut self, view: &StrategyView) -> Color {
        Color::CHROMATIC
            .iter()
            .copied()
            .max_by_key(|&color| view.hand.iter().filter(|c| c.color() == color).count())
            .unwrap_or(Color::CHROMATIC[0])
    }
}
