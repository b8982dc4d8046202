//! Game orchestration: setup, turn execution, and the card resource graph
//!
//! The manager owns every mutable piece of game state (players, deck,
//! discard pile, scheduler, sanctioner) as one explicit struct. All
//! mutation funnels through its operations; callers hold no other handle to
//! the resource graph.

use crate::core::{Card, CardEffect, Player, PlayerId, PlayerKind};
use crate::game::scheduler::Scheduler;
use crate::game::state::{GameState, PlayerSetup};
use crate::rules::{validator, Sanctioner};
use crate::zones::{Deck, DiscardPile};
use crate::{EngineError, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_HAND_SIZE: usize = 7;

const DEFAULT_SEED: u64 = 0x5EED_CA4D_5EED_CA4D;

/// Configuration required to bootstrap a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Seat kinds in ring order; ids are assigned 1..=n in this order.
    pub seats: Vec<PlayerKind>,
    pub hand_size: usize,
    pub seed: u64,
    /// Explicit deck (top = last card) instead of a shuffled standard deck.
    /// Used for deterministic tests and scripted setups.
    pub deck: Option<Vec<Card>>,
}

impl GameConfig {
    pub fn new(seats: Vec<PlayerKind>) -> Self {
        GameConfig {
            seats,
            hand_size: DEFAULT_HAND_SIZE,
            seed: DEFAULT_SEED,
            deck: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }
}

/// The turn state machine and sole owner of the card resource graph.
pub struct GameManager {
    players: Vec<Player>,
    scheduler: Scheduler,
    sanctioner: Sanctioner,
    deck: Deck,
    discard: DiscardPile,
    rng: ChaCha8Rng,
    /// Fixed card total established at init; the conservation reference.
    total_cards: usize,
    config: GameConfig,
}

impl GameManager {
    pub fn new(config: GameConfig) -> Result<Self> {
        let ids = seat_ids(&config.seats);
        let mut manager = GameManager {
            scheduler: Scheduler::new(&ids)?,
            players: Vec::new(),
            sanctioner: Sanctioner::new(),
            deck: Deck::from_cards(Vec::new()),
            discard: DiscardPile::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            total_cards: 0,
            config,
        };
        manager.init()?;
        Ok(manager)
    }

    /// (Re)build the game from config: fresh deck, fresh hands, start card
    /// on the discard pile. Re-runnable, so a finished game can restart.
    pub fn init(&mut self) -> Result<()> {
        if self.config.hand_size == 0 {
            return Err(EngineError::InvalidSetup(
                "starting hand size must be at least 1".to_string(),
            ));
        }
        let ids = seat_ids(&self.config.seats);
        self.scheduler = Scheduler::new(&ids)?;
        self.players = ids
            .iter()
            .zip(&self.config.seats)
            .map(|(&id, &kind)| Player::new(id, kind))
            .collect();
        self.sanctioner.reset();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.deck = match &self.config.deck {
            Some(cards) => Deck::from_cards(cards.clone()),
            None => Deck::standard(&mut self.rng),
        };
        self.discard = DiscardPile::new();

        let hand_size = self.config.hand_size;
        for index in 0..self.players.len() {
            for _ in 0..hand_size {
                let card = self.draw_from_deck().map_err(|_| deal_error())?;
                self.players[index].add_card(card);
            }
        }
        let start_card = self.draw_from_deck().map_err(|_| deal_error())?;
        self.discard.add(start_card);

        self.total_cards = self.cards_in_play();
        Ok(())
    }

    /// Snapshot of the observable state. A pure read, recomputed on demand.
    pub fn game_state(&self) -> GameState {
        let active = &self.players[self.active_index()];
        GameState {
            top_card: self.top_card().clone(),
            active_hand: active.hand().to_vec(),
            active_player: active.id(),
            sanction: self.sanctioner.amount(),
            deck_size: self.deck.len(),
            discard_size: self.discard.len(),
        }
    }

    /// Per-seat setup data for the view.
    pub fn game_setup(&self) -> Vec<PlayerSetup> {
        self.players
            .iter()
            .map(|p| PlayerSetup::new(p.id(), p.kind()))
            .collect()
    }

    /// Advance the turn ring and return the new active player.
    pub fn next_player(&mut self) -> PlayerId {
        self.scheduler.advance()
    }

    /// First player in ring-scan order whose hand is empty. Pure read;
    /// the loop checks it once per completed turn.
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.hand().is_empty())
            .map(Player::id)
    }

    /// Execute the active player's turn with the chosen card, `None`
    /// meaning draw intent (or, under an active sanction, acceptance).
    ///
    /// `Ok(false)` is a rejected move: nothing mutated, the same player
    /// must choose again. `Err(DeckExhausted)` is fatal for the game.
    pub fn execute_turn(&mut self, candidate: Option<Card>) -> Result<bool> {
        if self.sanctioner.is_active() {
            return self.handle_malus(candidate);
        }

        let Some(card) = candidate else {
            self.draw_for_active(1)?;
            return Ok(true);
        };

        if !validator::is_valid_play(self.top_card(), &card) {
            return Ok(false);
        }
        self.place_card(card)
    }

    /// The active hand filtered by the applicable legality predicate:
    /// defense while a sanction is pending, normal play otherwise.
    pub fn legal_candidates(&self) -> Vec<Card> {
        let top = self.top_card();
        let predicate: fn(&Card, &Card) -> bool = if self.sanctioner.is_active() {
            validator::is_valid_defense
        } else {
            validator::is_valid_play
        };
        self.players[self.active_index()]
            .hand()
            .iter()
            .filter(|card| predicate(top, card))
            .cloned()
            .collect()
    }

    /// Hand size of an arbitrary player. Supports the view's seat display
    /// and the informed bot's documented hand-count exception; hand
    /// contents are never exposed this way.
    pub fn hand_size_of(&self, id: PlayerId) -> Option<usize> {
        self.players
            .iter()
            .find(|p| p.id() == id)
            .map(Player::hand_size)
    }

    pub fn sanction_amount(&self) -> u32 {
        self.sanctioner.amount()
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_size(&self) -> usize {
        self.discard.len()
    }

    /// The fixed card total established at init.
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Cards currently observable across deck, discard pile, and hands.
    /// Equals `total_cards()` at every observable instant.
    pub fn cards_in_play(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self.players.iter().map(Player::hand_size).sum::<usize>()
    }

    /// Resolve a turn under an active sanction: accept the penalty by
    /// drawing, or defend by stacking another penalty card.
    fn handle_malus(&mut self, candidate: Option<Card>) -> Result<bool> {
        let Some(card) = candidate else {
            let amount = self.sanctioner.amount() as usize;
            self.draw_for_active(amount)?;
            self.sanctioner.reset();
            return Ok(true);
        };

        if !validator::is_valid_defense(self.top_card(), &card) {
            return Ok(false);
        }
        // A successful defense re-accumulates: the obligation keeps
        // stacking until someone accepts it.
        self.place_card(card)
    }

    /// Move an accepted card from the active hand to the discard pile and
    /// apply its effects. Rejects candidates the hand does not hold.
    fn place_card(&mut self, card: Card) -> Result<bool> {
        let index = self.active_index();
        if self.players[index].take_card(&card).is_none() {
            return Ok(false);
        }
        self.discard.add(card.clone());
        self.apply_effects(&card);
        Ok(true)
    }

    fn apply_effects(&mut self, card: &Card) {
        if card.has_effect(CardEffect::SkipNext) {
            self.scheduler.skip();
        }
        if card.has_effect(CardEffect::ReverseTurn) {
            self.scheduler.reverse();
        }
        self.sanctioner.accumulate(card);
    }

    /// Draw from the deck, refilling from the discard pile first when the
    /// deck is out. Exhaustion after a refill attempt is fatal.
    fn draw_from_deck(&mut self) -> Result<Card> {
        if self.deck.is_empty() {
            self.deck.refill_from(&mut self.discard, &mut self.rng);
        }
        self.deck.draw().ok_or(EngineError::DeckExhausted)
    }

    fn draw_for_active(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            let card = self.draw_from_deck()?;
            let index = self.active_index();
            self.players[index].add_card(card);
        }
        Ok(())
    }

    fn active_index(&self) -> usize {
        let id = self.scheduler.current_player();
        self.players
            .iter()
            .position(|p| p.id() == id)
            .expect("scheduler ids always map to players")
    }

    /// The discard anchor. The pile is non-empty from init onward.
    fn top_card(&self) -> &Card {
        self.discard
            .peek()
            .expect("discard pile holds the anchor after init")
    }
}

fn seat_ids(seats: &[PlayerKind]) -> Vec<PlayerId> {
    (1..=seats.len() as u32).map(PlayerId::new).collect()
}

fn deal_error() -> EngineError {
    EngineError::InvalidSetup("deck too small to deal starting hands".to_string())
}
