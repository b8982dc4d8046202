//! Stateless legality predicates
//!
//! Two distinct entry points gate card placement: a normal play and a
//! defense against an active penalty. A defense is strictly narrower than a
//! play; the two are never merged.

use crate::core::{Card, CardEffect};

/// Whether `candidate` may be placed on `top` as a normal play: matching
/// color, matching value, always-playable, or currently wild.
pub fn is_valid_play(top: &Card, candidate: &Card) -> bool {
    candidate.color() == top.color()
        || candidate.value() == top.value()
        || candidate.has_effect(CardEffect::AlwaysPlayable)
        || candidate.is_wild()
}

/// Whether `candidate` legally counters the penalty imposed by `top`.
///
/// Stacking rule: the defense must itself impose a penalty at least as
/// strong as the anchor's. A card with zero draw power can never defend.
pub fn is_valid_defense(top: &Card, candidate: &Card) -> bool {
    candidate.draw_amount() > 0 && candidate.draw_amount() >= top.draw_amount()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Value};

    #[test]
    fn test_color_match() {
        let top = Card::new(Color::Red, Value::Five);
        assert!(is_valid_play(&top, &Card::new(Color::Red, Value::Nine)));
        assert!(!is_valid_play(&top, &Card::new(Color::Blue, Value::Nine)));
    }

    #[test]
    fn test_value_match() {
        let top = Card::new(Color::Red, Value::Five);
        assert!(is_valid_play(&top, &Card::new(Color::Blue, Value::Five)));
        assert!(is_valid_play(&top, &Card::new(Color::Green, Value::Five)));
    }

    #[test]
    fn test_wild_is_always_a_valid_play() {
        let top = Card::new(Color::Red, Value::Five);
        assert!(is_valid_play(&top, &Card::new(Color::Black, Value::Wild)));

        // A wild stays playable after its color was reassigned.
        let recolored = Card::new(Color::Black, Value::WildDrawFour).with_color(Color::Green);
        assert!(is_valid_play(&top, &recolored));
    }

    #[test]
    fn test_always_playable_effect() {
        let top = Card::new(Color::Red, Value::Five);
        let event = Card::with_attributes(
            Color::Blue,
            Value::Seven,
            0,
            [CardEffect::AlwaysPlayable],
        );
        assert!(is_valid_play(&top, &event));
    }

    #[test]
    fn test_defense_requires_draw_power() {
        let top = Card::new(Color::Red, Value::DrawTwo);
        assert!(!is_valid_defense(&top, &Card::new(Color::Red, Value::Five)));
        assert!(!is_valid_defense(&top, &Card::new(Color::Red, Value::Skip)));
    }

    #[test]
    fn test_defense_stacking_rule() {
        let draw_two = Card::new(Color::Red, Value::DrawTwo);
        let draw_four = Card::new(Color::Black, Value::WildDrawFour);

        // Equal or stronger penalties stack; weaker ones do not.
        assert!(is_valid_defense(&draw_two, &Card::new(Color::Blue, Value::DrawTwo)));
        assert!(is_valid_defense(&draw_two, &draw_four));
        assert!(is_valid_defense(&draw_four, &draw_four));
        assert!(!is_valid_defense(&draw_four, &Card::new(Color::Blue, Value::DrawTwo)));
    }
}
