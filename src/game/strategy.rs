//! Bot decision capabilities
//!
//! The game loop polls a flat strategy interface; concrete policies are
//! injected at composition time. Strategies are pure over the view they are
//! given: no hidden I/O, no access to the deck or other hands.

use crate::core::{Card, Color, PlayerId};

/// What a strategy is allowed to see when deciding.
#[derive(Debug)]
pub struct StrategyView<'a> {
    /// The deciding player's full hand.
    pub hand: &'a [Card],
    /// The legal subset of the hand for this attempt (defense candidates
    /// while a sanction is pending, normal plays otherwise).
    pub candidates: &'a [Card],
    pub top_card: &'a Card,
    /// Pending forced-draw penalty, 0 when none.
    pub sanction: u32,
    /// Hand size of the strategy's watched rival. Populated only for
    /// strategies that declare one; never the hand's contents.
    pub rival_hand_size: Option<usize>,
}

/// Card-choice capability. Returning `None` signals draw intent (or, under
/// an active sanction, acceptance of the penalty).
pub trait CardStrategy: Send {
    fn choose_card(&mut self, view: &StrategyView) -> Option<Card>;

    /// The rival whose hand size this strategy may observe. The default is
    /// no visibility; only the informed variant overrides this, as an
    /// explicit exception wired by the coordinator.
    fn watched_rival(&self) -> Option<PlayerId> {
        None
    }
}

/// Color-choice capability, consulted when a natively wild card is played.
pub trait ColorStrategy: Send {
    fn choose_color(&mut self, view: &StrategyView) -> Color;
}

/// A bot's full decision kit: card choice plus color choice.
pub struct BotBrain {
    cards: Box<dyn CardStrategy>,
    colors: Box<dyn ColorStrategy>,
}

impl BotBrain {
    pub fn new(cards: Box<dyn CardStrategy>, colors: Box<dyn ColorStrategy>) -> Self {
        BotBrain { cards, colors }
    }

    pub fn watched_rival(&self) -> Option<PlayerId> {
        self.cards.watched_rival()
    }

    /// Produce this attempt's decision. A picked native-black card still
    /// showing Black gets a color assigned before it is submitted.
    pub fn decide(&mut self, view: &StrategyView) -> Option<Card> {
        let pick = self.cards.choose_card(view)?;
        if pick.is_native_black() && pick.color() == Color::Black {
            let color = self.colors.choose_color(view);
            return Some(pick.with_color(color));
        }
        Some(pick)
    }
}
