//! Game orchestration: turn ring, manager, strategies, loop

pub mod coordinator;
pub mod heuristic_strategy;
pub mod informed_strategy;
pub mod manager;
pub mod random_strategy;
pub mod scheduler;
pub mod state;
pub mod strategy;
pub mod view;

pub use coordinator::{InputBridge, Seat, StopHandle, TurnCoordinator};
pub use heuristic_strategy::{AggressiveStrategy, MostFrequentColorStrategy};
pub use informed_strategy::InformedStrategy;
pub use manager::{GameConfig, GameManager, DEFAULT_HAND_SIZE};
pub use random_strategy::{RandomColorStrategy, RandomStrategy};
pub use scheduler::Scheduler;
pub use state::{GameState, PlayerSetup};
pub use strategy::{BotBrain, CardStrategy, ColorStrategy, StrategyView};
pub use view::{ConsoleView, GameView, SharedSnapshot, VerbosityLevel};
