//! Penalty ("malus") accumulator

use crate::core::{Card, Value};
use serde::{Deserialize, Serialize};

/// Accumulates forced-draw penalties until a player resolves them, either by
/// accepting the draw or by stacking another penalty card on top.
///
/// Accumulation triggers on a closed set of values (DrawTwo, WildDrawFour),
/// deliberately independent of the card's generic draw power: custom event
/// cards with draw power do not feed the malus machine. No stacking cap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sanctioner {
    malus: u32,
}

impl Sanctioner {
    pub fn new() -> Self {
        Sanctioner { malus: 0 }
    }

    /// A sanction is pending iff the accumulated amount is positive.
    pub fn is_active(&self) -> bool {
        self.malus > 0
    }

    pub fn amount(&self) -> u32 {
        self.malus
    }

    /// Add the penalty carried by `card`, if any.
    pub fn accumulate(&mut self, card: &Card) {
        match card.value() {
            Value::DrawTwo => self.malus += 2,
            Value::WildDrawFour => self.malus += 4,
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        self.malus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardEffect, Color};

    #[test]
    fn test_starts_inactive() {
        let sanctioner = Sanctioner::new();
        assert!(!sanctioner.is_active());
        assert_eq!(sanctioner.amount(), 0);
    }

    #[test]
    fn test_accumulate_penalty_cards() {
        let mut sanctioner = Sanctioner::new();

        sanctioner.accumulate(&Card::new(Color::Red, Value::DrawTwo));
        assert!(sanctioner.is_active());
        assert_eq!(sanctioner.amount(), 2);

        sanctioner.accumulate(&Card::new(Color::Black, Value::WildDrawFour));
        assert_eq!(sanctioner.amount(), 6);
    }

    #[test]
    fn test_non_penalty_cards_are_noops() {
        let mut sanctioner = Sanctioner::new();
        sanctioner.accumulate(&Card::new(Color::Red, Value::Five));
        sanctioner.accumulate(&Card::new(Color::Blue, Value::Skip));
        sanctioner.accumulate(&Card::new(Color::Black, Value::Wild));
        assert!(!sanctioner.is_active());
    }

    #[test]
    fn test_draw_power_alone_does_not_accumulate() {
        // Custom event cards carry draw power but are not in the trigger
        // set; the accumulator must ignore them.
        let mut sanctioner = Sanctioner::new();
        let chaos = Card::with_attributes(
            Color::Red,
            Value::Seven,
            10,
            [CardEffect::AlwaysPlayable],
        );
        sanctioner.accumulate(&chaos);
        assert!(!sanctioner.is_active());
    }

    #[test]
    fn test_reset() {
        let mut sanctioner = Sanctioner::new();
        sanctioner.accumulate(&Card::new(Color::Red, Value::DrawTwo));
        sanctioner.reset();
        assert!(!sanctioner.is_active());
        assert_eq!(sanctioner.amount(), 0);
    }
}
