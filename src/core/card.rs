//! Card types and definitions

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Card colors: five chromatic suits plus Black for natively wild cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
    Black,
}

impl Color {
    /// The five playable suits, in deck-building order.
    pub const CHROMATIC: [Color; 5] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
    ];

    pub fn is_chromatic(&self) -> bool {
        !matches!(self, Color::Black)
    }
}

/// Face values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Value {
    pub const NUMERALS: [Value; 10] = [
        Value::Zero,
        Value::One,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
    ];
}

/// Special effects a card can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    /// The next player in turn order is skipped.
    SkipNext,
    /// Turn order direction flips.
    ReverseTurn,
    /// The player assigns a new color when playing this card.
    ChangeColor,
    /// Legal on any top card, regardless of color or value.
    AlwaysPlayable,
}

/// An immutable card value.
///
/// Reassigning the color (playing a wild) goes through [`Card::with_color`],
/// which produces a new card and preserves draw power, effects, and the
/// native-black flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    color: Color,
    value: Value,
    /// Forced-draw penalty this card imposes when played.
    draw_amount: u8,
    effects: SmallVec<[CardEffect; 2]>,
    /// True only for cards that are wild regardless of the color currently
    /// assigned to them.
    native_black: bool,
}

impl Card {
    /// Create a standard card: draw power and effects derive from the value.
    pub fn new(color: Color, value: Value) -> Self {
        let (draw_amount, effects, native_black): (u8, &[CardEffect], bool) = match value {
            Value::Skip => (0, &[CardEffect::SkipNext], false),
            Value::Reverse => (0, &[CardEffect::ReverseTurn], false),
            Value::DrawTwo => (2, &[CardEffect::SkipNext], false),
            Value::Wild => (0, &[CardEffect::ChangeColor], true),
            Value::WildDrawFour => (4, &[CardEffect::ChangeColor, CardEffect::SkipNext], true),
            _ => (0, &[], false),
        };
        Card {
            color,
            value,
            draw_amount,
            effects: SmallVec::from_slice(effects),
            native_black,
        }
    }

    /// Create a card with explicit draw power and effects, for event cards
    /// outside the standard table. Cards built black are natively wild.
    pub fn with_attributes(
        color: Color,
        value: Value,
        draw_amount: u8,
        effects: impl IntoIterator<Item = CardEffect>,
    ) -> Self {
        Card {
            color,
            value,
            draw_amount,
            effects: effects.into_iter().collect(),
            native_black: color == Color::Black,
        }
    }

    /// A copy of this card with the color reassigned. Draw power, effects,
    /// and the native-black flag carry over unchanged.
    pub fn with_color(&self, color: Color) -> Card {
        Card {
            color,
            value: self.value,
            draw_amount: self.draw_amount,
            effects: self.effects.clone(),
            native_black: self.native_black,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn draw_amount(&self) -> u8 {
        self.draw_amount
    }

    pub fn has_effect(&self, effect: CardEffect) -> bool {
        self.effects.contains(&effect)
    }

    pub fn is_native_black(&self) -> bool {
        self.native_black
    }

    /// Wild right now: natively black, or currently showing Black.
    pub fn is_wild(&self) -> bool {
        self.native_black || self.color == Color::Black
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.native_black && self.color != Color::Black {
            write!(f, "{:?} (as {:?})", self.value, self.color)
        } else {
            write!(f, "{:?} {:?}", self.color, self.value)
        }
    }
}

/// Build the standard deck: per chromatic color one Zero, two of each
/// One..Nine, two Skip, two Reverse, two DrawTwo; plus four Wild and four
/// WildDrawFour. Unshuffled.
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(133);
    for &color in &Color::CHROMATIC {
        cards.push(Card::new(color, Value::Zero));
        for &value in &Value::NUMERALS[1..] {
            cards.push(Card::new(color, value));
            cards.push(Card::new(color, value));
        }
        for value in [Value::Skip, Value::Reverse, Value::DrawTwo] {
            cards.push(Card::new(color, value));
            cards.push(Card::new(color, value));
        }
    }
    for _ in 0..4 {
        cards.push(Card::new(Color::Black, Value::Wild));
        cards.push(Card::new(Color::Black, Value::WildDrawFour));
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_two_attributes() {
        let card = Card::new(Color::Red, Value::DrawTwo);
        assert_eq!(card.draw_amount(), 2);
        assert!(card.has_effect(CardEffect::SkipNext));
        assert!(!card.is_native_black());
    }

    #[test]
    fn test_wild_draw_four_attributes() {
        let card = Card::new(Color::Black, Value::WildDrawFour);
        assert_eq!(card.draw_amount(), 4);
        assert!(card.has_effect(CardEffect::ChangeColor));
        assert!(card.has_effect(CardEffect::SkipNext));
        assert!(card.is_native_black());
        assert!(card.is_wild());
    }

    #[test]
    fn test_custom_event_card() {
        let chaos = Card::with_attributes(
            Color::Red,
            Value::Seven,
            10,
            [CardEffect::ReverseTurn, CardEffect::AlwaysPlayable],
        );
        assert_eq!(chaos.draw_amount(), 10);
        assert!(chaos.has_effect(CardEffect::ReverseTurn));
        assert!(chaos.has_effect(CardEffect::AlwaysPlayable));
        assert!(!chaos.has_effect(CardEffect::SkipNext));
        assert!(!chaos.is_native_black());
    }

    #[test]
    fn test_with_color_preserves_attributes() {
        let original = Card::new(Color::Black, Value::WildDrawFour);
        let blue = original.with_color(Color::Blue);

        assert_eq!(blue.color(), Color::Blue);
        assert_eq!(blue.value(), Value::WildDrawFour);
        assert_eq!(blue.draw_amount(), 4);
        assert!(blue.has_effect(CardEffect::ChangeColor));
        assert!(blue.has_effect(CardEffect::SkipNext));
        assert!(blue.is_native_black(), "recolored wild stays natively wild");
        assert!(blue.is_wild());
        assert_ne!(original, blue);
    }

    #[test]
    fn test_recolored_numeral_is_not_wild() {
        let card = Card::new(Color::Red, Value::Five).with_color(Color::Green);
        assert!(!card.is_wild());
        assert_eq!(card.draw_amount(), 0);
    }

    #[test]
    fn test_standard_deck_composition() {
        let deck = standard_deck();
        // 5 colors x (1 zero + 18 numerals + 6 action) + 8 wilds
        assert_eq!(deck.len(), 133);
        assert_eq!(
            deck.iter().filter(|c| c.value() == Value::Wild).count(),
            4
        );
        assert_eq!(
            deck.iter()
                .filter(|c| c.value() == Value::WildDrawFour)
                .count(),
            4
        );
        assert!(deck
            .iter()
            .all(|c| c.is_native_black() == (c.color() == Color::Black)));
    }
}
