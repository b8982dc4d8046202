//! Player representation
//!
//! Pure state only: decision-making lives in the coordinator's strategies,
//! not in the player itself, so the game state stays a plain data graph.

use crate::core::{Card, PlayerId};
use serde::{Deserialize, Serialize};

/// How a seat is driven: polled strategy or externally resolved input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Bot,
    Human,
}

/// A player in the game: id, hand, and seat kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    kind: PlayerKind,
    /// Hand order carries no meaning; it is kept stable for deterministic
    /// iteration.
    hand: Vec<Card>,
}

impl Player {
    pub fn new(id: PlayerId, kind: PlayerKind) -> Self {
        Player {
            id,
            kind,
            hand: Vec::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_bot(&self) -> bool {
        self.kind == PlayerKind::Bot
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove the hand copy backing `candidate`, if present.
    ///
    /// A played native-black card may have been recolored on the way in, so
    /// it matches its hand copy by value and native-black flag rather than
    /// by strict equality.
    pub fn take_card(&mut self, candidate: &Card) -> Option<Card> {
        let pos = self.hand.iter().position(|held| {
            held == candidate
                || (candidate.is_native_black()
                    && held.is_native_black()
                    && held.value() == candidate.value())
        })?;
        Some(self.hand.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Value};

    #[test]
    fn test_hand_grows_and_shrinks() {
        let mut player = Player::new(PlayerId::new(1), PlayerKind::Bot);
        assert_eq!(player.hand_size(), 0);

        let card = Card::new(Color::Red, Value::Five);
        player.add_card(card.clone());
        assert_eq!(player.hand_size(), 1);

        assert!(player.take_card(&card).is_some());
        assert!(player.hand().is_empty());
        assert!(player.take_card(&card).is_none());
    }

    #[test]
    fn test_take_recolored_wild() {
        let mut player = Player::new(PlayerId::new(1), PlayerKind::Human);
        let wild = Card::new(Color::Black, Value::WildDrawFour);
        player.add_card(wild.clone());

        // The view hands back a recolored copy; it must match the black
        // original still in hand.
        let played = wild.with_color(Color::Green);
        let taken = player.take_card(&played).expect("wild must match");
        assert_eq!(taken.color(), Color::Black);
        assert!(player.hand().is_empty());
    }

    #[test]
    fn test_take_card_rejects_foreign_card() {
        let mut player = Player::new(PlayerId::new(2), PlayerKind::Bot);
        player.add_card(Card::new(Color::Blue, Value::Two));

        let foreign = Card::new(Color::Red, Value::Nine);
        assert!(player.take_card(&foreign).is_none());
        assert_eq!(player.hand_size(), 1);
    }
}
