//! Informed decision policy
//!
//! Watches one designated rival's hand size (never its contents) and shifts
//! between hoarding disruption and spending it. The hand-size visibility is
//! an explicit, documented exception wired by the coordinator; it is not a
//! general capability of strategies.

use crate::core::{Card, PlayerId};
use crate::game::heuristic_strategy::disruption_score;
use crate::game::strategy::{CardStrategy, StrategyView};

/// Rival hand sizes at or below this count trigger full aggression.
const PRESSURE_THRESHOLD: usize = 2;

pub struct InformedStrategy {
    rival: PlayerId,
}

impl InformedStrategy {
    pub fn new(rival: PlayerId) -> Self {
        InformedStrategy { rival }
    }
}

impl CardStrategy for InformedStrategy {
    fn choose_card(&mut self, view: &StrategyView) -> Option<Card> {
        if view.candidates.is_empty() {
            return None;
        }
        let rival_about_to_win = view
            .rival_hand_size
            .is_some_and(|n| n <= PRESSURE_THRESHOLD);

        if rival_about_to_win {
            // Spend the most disruptive card to deny the rival's finish.
            view.candidates
                .iter()
                .max_by_key(|card| disruption_score(card))
                .cloned()
        } else {
            // Keep disruption in reserve; shed the blandest legal card.
            view.candidates
                .iter()
                .min_by_key(|card| disruption_score(card))
                .cloned()
        }
    }

    fn watched_rival(&self) -> Option<PlayerId> {
        Some(self.rival)
    }
}
