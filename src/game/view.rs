//! Presentation boundary
//!
//! The coordinator pushes into a `GameView` only after a turn sub-step has
//! fully resolved; implementations never reach back into game state.

use crate::core::PlayerId;
use crate::game::state::{GameState, PlayerSetup};
use std::sync::{Arc, Mutex};

/// Verbosity level for console output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only errors and the game outcome
    Minimal = 1,
    /// Normal - turns and key actions (default)
    #[default]
    Normal = 2,
    /// Verbose - full table state every update
    Verbose = 3,
}

/// Push contract from the coordinator to a display.
pub trait GameView: Send {
    fn init_game(&mut self, setup: &[PlayerSetup]);
    fn update_view(&mut self, state: &GameState);
    fn show_current_player(&mut self, id: PlayerId);
    fn show_message(&mut self, text: &str);
    fn show_error(&mut self, text: &str);
}

/// Latest snapshot published by a view, for input drivers that need to map
/// user commands onto the current hand.
pub type SharedSnapshot = Arc<Mutex<Option<GameState>>>;

/// Line-oriented console display.
pub struct ConsoleView {
    verbosity: VerbosityLevel,
    /// When set, every pushed snapshot is also published here.
    snapshot: Option<SharedSnapshot>,
}

impl ConsoleView {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        ConsoleView {
            verbosity,
            snapshot: None,
        }
    }

    /// Publish each pushed snapshot into `shared` as well, so an external
    /// input driver (e.g. the stdin seat) can read the current hand.
    pub fn with_shared_snapshot(mut self, shared: SharedSnapshot) -> Self {
        self.snapshot = Some(shared);
        self
    }

    fn at_least(&self, level: VerbosityLevel) -> bool {
        self.verbosity >= level
    }
}

impl GameView for ConsoleView {
    fn init_game(&mut self, setup: &[PlayerSetup]) {
        if self.at_least(VerbosityLevel::Normal) {
            let seats: Vec<String> = setup
                .iter()
                .map(|s| {
                    format!("{} ({})", s.id, if s.is_human { "human" } else { "bot" })
                })
                .collect();
            println!("Game start: {}", seats.join(", "));
        }
    }

    fn update_view(&mut self, state: &GameState) {
        if let Some(shared) = &self.snapshot {
            *shared.lock().expect("snapshot lock poisoned") = Some(state.clone());
        }
        if self.at_least(VerbosityLevel::Verbose) {
            println!(
                "Table: top {} | deck {} | pile {} | sanction {}",
                state.top_card, state.deck_size, state.discard_size, state.sanction
            );
            for (index, card) in state.active_hand.iter().enumerate() {
                println!("  [{index}] {card}");
            }
        } else if self.at_least(VerbosityLevel::Normal) {
            println!("Top card: {}", state.top_card);
            if state.sanction > 0 {
                println!("Pending penalty: draw {}", state.sanction);
            }
        }
    }

    fn show_current_player(&mut self, id: PlayerId) {
        if self.at_least(VerbosityLevel::Normal) {
            println!("--- {id}'s turn ---");
        }
    }

    fn show_message(&mut self, text: &str) {
        if self.at_least(VerbosityLevel::Normal) {
            println!("{text}");
        }
    }

    fn show_error(&mut self, text: &str) {
        if self.at_least(VerbosityLevel::Minimal) {
            eprintln!("{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Color, Value};

    #[test]
    fn test_shared_snapshot_is_published() {
        let shared: SharedSnapshot = Arc::new(Mutex::new(None));
        let mut view =
            ConsoleView::new(VerbosityLevel::Silent).with_shared_snapshot(Arc::clone(&shared));

        let state = GameState {
            top_card: Card::new(Color::Red, Value::Five),
            active_hand: vec![Card::new(Color::Blue, Value::Two)],
            active_player: PlayerId::new(1),
            sanction: 0,
            deck_size: 10,
            discard_size: 1,
        };
        view.update_view(&state);

        let published = shared.lock().unwrap();
        let published = published.as_ref().expect("snapshot published");
        assert_eq!(published.active_player, PlayerId::new(1));
        assert_eq!(published.active_hand.len(), 1);
    }
}
