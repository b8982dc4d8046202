//! The game loop and its concurrency bridge
//!
//! One sequential loop task is the exclusive mutator of game state. Bots
//! are paced with a think-delay and polled synchronously; a human seat
//! suspends the loop on a single-resolution completion primitive that the
//! UI resolves from whatever context its events arrive on. Rejected moves
//! retry on the same seat with a fresh primitive per attempt.

use crate::core::{Card, PlayerId};
use crate::game::manager::GameManager;
use crate::game::strategy::{BotBrain, StrategyView};
use crate::game::view::GameView;
use crate::{EngineError, Result};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{oneshot, watch};

const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(500);

/// Single-resolution bridge between the loop and an external input source.
///
/// The loop arms a fresh one-shot channel per attempt and suspends on it;
/// `on_card_played` / `on_draw_requested` resolve the pending attempt.
/// Resolving twice, or with nothing pending, is a safe no-op. Arming again
/// invalidates any stale sender, so a late resolution of a previous attempt
/// can never leak into a new one.
pub struct InputBridge {
    slot: Mutex<Option<oneshot::Sender<Option<Card>>>>,
}

impl InputBridge {
    fn new() -> Self {
        InputBridge {
            slot: Mutex::new(None),
        }
    }

    /// The human chose a card (already recolored if it was a wild).
    pub fn on_card_played(&self, card: Card) {
        self.resolve(Some(card));
    }

    /// The human chose to draw instead (or to accept an active penalty).
    pub fn on_draw_requested(&self) {
        self.resolve(None);
    }

    /// Drop any pending attempt so its waiter unblocks with a cancellation.
    pub fn cancel(&self) {
        self.slot.lock().expect("bridge lock poisoned").take();
    }

    /// Install a fresh completion primitive for one attempt.
    fn arm(&self) -> oneshot::Receiver<Option<Card>> {
        let (tx, rx) = oneshot::channel();
        *self.slot.lock().expect("bridge lock poisoned") = Some(tx);
        rx
    }

    fn resolve(&self, decision: Option<Card>) {
        if let Some(tx) = self.slot.lock().expect("bridge lock poisoned").take() {
            // The waiter may already be gone (cancelled attempt); either
            // way the primitive resolves at most once.
            let _ = tx.send(decision);
        }
    }
}

/// Handle for stopping a running loop from outside. Marks the loop for
/// termination and unblocks any pending human-input wait.
#[derive(Clone)]
pub struct StopHandle {
    stop: Arc<watch::Sender<bool>>,
    bridge: Arc<InputBridge>,
}

impl StopHandle {
    pub fn stop(&self) {
        let _ = self.stop.send(true);
        self.bridge.cancel();
    }
}

/// How a seat is driven by the loop.
pub enum Seat {
    Bot(BotBrain),
    Human,
}

/// The sequential game loop: drives the manager, branches per seat kind,
/// and owns the human-input bridge.
pub struct TurnCoordinator<V: GameView> {
    manager: GameManager,
    view: V,
    seats: Vec<(PlayerId, Seat)>,
    bridge: Arc<InputBridge>,
    stop_tx: Arc<watch::Sender<bool>>,
    stop_rx: watch::Receiver<bool>,
    think_delay: Duration,
}

impl<V: GameView> TurnCoordinator<V> {
    /// Wire a loop over an initialized manager. `seats` must line up with
    /// the manager's players, one per id in ring order, bot seats on bot
    /// players and a human seat on each human player.
    pub fn new(manager: GameManager, view: V, seats: Vec<Seat>) -> Result<Self> {
        let setup = manager.game_setup();
        if setup.len() != seats.len() {
            return Err(EngineError::InvalidSetup(format!(
                "{} seats provided for {} players",
                seats.len(),
                setup.len()
            )));
        }
        for (info, seat) in setup.iter().zip(&seats) {
            let seat_is_human = matches!(seat, Seat::Human);
            if info.is_human != seat_is_human {
                return Err(EngineError::InvalidSetup(format!(
                    "seat kind mismatch for {}",
                    info.id
                )));
            }
        }

        let (stop_tx, stop_rx) = watch::channel(false);
        Ok(TurnCoordinator {
            seats: setup.iter().map(|s| s.id).zip(seats).collect(),
            manager,
            view,
            bridge: Arc::new(InputBridge::new()),
            stop_tx: Arc::new(stop_tx),
            stop_rx,
            think_delay: DEFAULT_THINK_DELAY,
        })
    }

    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// The bridge the UI resolves human decisions through.
    pub fn bridge(&self) -> Arc<InputBridge> {
        Arc::clone(&self.bridge)
    }

    /// Read access to the managed game, e.g. for inspecting the final
    /// state after the loop returns.
    pub fn manager(&self) -> &GameManager {
        &self.manager
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            stop: Arc::clone(&self.stop_tx),
            bridge: Arc::clone(&self.bridge),
        }
    }

    /// Run the game to completion, re-initializing the manager first so a
    /// finished table restarts cleanly. Returns the winner's id, or `None`
    /// when stopped before a winner emerged. Resource exhaustion is fatal
    /// and propagates after being reported to the view.
    pub async fn run(&mut self) -> Result<Option<PlayerId>> {
        self.manager.init()?;
        self.view.init_game(&self.manager.game_setup());
        self.view.update_view(&self.manager.game_state());

        loop {
            // Winner check happens once per completed turn, never mid-turn.
            if let Some(winner) = self.manager.winner() {
                self.view.show_message(&format!("{winner} wins the game"));
                return Ok(Some(winner));
            }
            if *self.stop_rx.borrow() {
                return Ok(None);
            }

            let current = self.manager.next_player();
            self.view.show_current_player(current);
            // Advancing the ring is a resolved sub-step; push the new
            // active player's perspective before asking for a decision.
            self.view.update_view(&self.manager.game_state());

            match self.take_turn(current).await {
                Ok(()) => self.view.update_view(&self.manager.game_state()),
                // A cancelled wait is a graceful stop, not a game failure.
                Err(EngineError::Cancelled) => return Ok(None),
                Err(err) => {
                    self.view.show_error(&format!("game over: {err}"));
                    return Err(err);
                }
            }
        }
    }

    async fn take_turn(&mut self, current: PlayerId) -> Result<()> {
        // Split borrows: the seat table and the manager/view are disjoint.
        let Self {
            manager,
            view,
            seats,
            bridge,
            stop_rx,
            think_delay,
            ..
        } = self;
        let seat = seats
            .iter_mut()
            .find_map(|(id, seat)| (*id == current).then_some(seat))
            .expect("every player id has a seat");

        match seat {
            Seat::Bot(brain) => bot_turn(manager, view, stop_rx, *think_delay, brain).await,
            Seat::Human => human_turn(manager, view, stop_rx, bridge).await,
        }
    }
}

/// Poll-retry protocol for a bot seat: think-delay, poll the strategy,
/// submit; on rejection, repeat with a freshly polled decision.
async fn bot_turn<V: GameView>(
    manager: &mut GameManager,
    view: &mut V,
    stop_rx: &mut watch::Receiver<bool>,
    think_delay: Duration,
    brain: &mut BotBrain,
) -> Result<()> {
    loop {
        if *stop_rx.borrow() {
            return Err(EngineError::Cancelled);
        }
        // Pacing only, so spectators can follow; not a correctness wait.
        tokio::time::sleep(think_delay).await;

        let state = manager.game_state();
        let candidates = manager.legal_candidates();
        let rival_hand_size = brain
            .watched_rival()
            .and_then(|id| manager.hand_size_of(id));
        let decision = brain.decide(&StrategyView {
            hand: &state.active_hand,
            candidates: &candidates,
            top_card: &state.top_card,
            sanction: state.sanction,
            rival_hand_size,
        });

        if manager.execute_turn(decision.clone())? {
            match decision {
                Some(card) => {
                    view.show_message(&format!("{} plays {}", state.active_player, card));
                }
                None if state.sanction > 0 => view.show_message(&format!(
                    "{} accepts the penalty and draws {}",
                    state.active_player, state.sanction
                )),
                None => {
                    view.show_message(&format!("{} draws a card", state.active_player));
                }
            }
            return Ok(());
        }
        // Rejected: the same seat chooses again on the next iteration.
    }
}

/// Await-retry protocol for a human seat: arm a fresh primitive, suspend
/// until the UI resolves it or a stop signal arrives.
async fn human_turn<V: GameView>(
    manager: &mut GameManager,
    view: &mut V,
    stop_rx: &mut watch::Receiver<bool>,
    bridge: &InputBridge,
) -> Result<()> {
    loop {
        if *stop_rx.borrow() {
            return Err(EngineError::Cancelled);
        }
        let receiver = bridge.arm();
        let decision = tokio::select! {
            resolved = receiver => match resolved {
                Ok(decision) => decision,
                // Sender dropped without resolving: cancelled attempt.
                Err(_) => return Err(EngineError::Cancelled),
            },
            _ = stop_rx.changed() => return Err(EngineError::Cancelled),
        };

        if manager.execute_turn(decision)? {
            return Ok(());
        }
        view.show_error("Invalid move, choose again");
    }
}
