//! stax - Main Binary
//!
//! Runs a table of bot seats, optionally with one or more human seats
//! driven from stdin through the coordinator's input bridge.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use stax::core::{Color, PlayerId, PlayerKind};
use stax::game::{
    AggressiveStrategy, BotBrain, ConsoleView, GameConfig, GameManager, InformedStrategy,
    InputBridge, MostFrequentColorStrategy, RandomColorStrategy, RandomStrategy, Seat,
    SharedSnapshot, StopHandle, TurnCoordinator, VerbosityLevel, DEFAULT_HAND_SIZE,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Seat kind for one ring position
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SeatArg {
    /// Plays a random legal card
    Random,
    /// Plays the most disruptive legal card
    Aggressive,
    /// Watches the next seat's hand size and times its disruption
    Informed,
    /// Driven from stdin
    Human,
}

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "stax")]
#[command(about = "stax - stacking card game engine", long_about = None)]
struct Cli {
    /// Seats in ring order (comma separated)
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_value = "aggressive,random"
    )]
    seats: Vec<SeatArg>,

    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Starting hand size
    #[arg(long, default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Bot think delay in milliseconds (pacing only)
    #[arg(long, default_value_t = 500)]
    think_delay_ms: u64,

    /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, default_value = "normal", short = 'v')]
    verbosity: VerbosityArg,

    /// Print the final result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let kinds: Vec<PlayerKind> = cli
        .seats
        .iter()
        .map(|seat| match seat {
            SeatArg::Human => PlayerKind::Human,
            _ => PlayerKind::Bot,
        })
        .collect();
    let player_count = kinds.len() as u32;
    let has_human = kinds.contains(&PlayerKind::Human);

    let mut config = GameConfig::new(kinds).with_hand_size(cli.hand_size);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let manager = GameManager::new(config).context("failed to set up the game")?;

    let shared: SharedSnapshot = Arc::new(Mutex::new(None));
    let mut view = ConsoleView::new(cli.verbosity.0);
    if has_human {
        view = view.with_shared_snapshot(Arc::clone(&shared));
    }

    let seats: Vec<Seat> = cli
        .seats
        .iter()
        .enumerate()
        .map(|(index, &arg)| build_seat(arg, index as u32, player_count, cli.seed))
        .collect();

    let mut coordinator = TurnCoordinator::new(manager, view, seats)
        .context("failed to wire the game loop")?
        .with_think_delay(Duration::from_millis(cli.think_delay_ms));

    if has_human {
        print_input_help();
        spawn_stdin_driver(
            coordinator.bridge(),
            coordinator.stop_handle(),
            Arc::clone(&shared),
        );
    }

    let winner = coordinator.run().await.context("game failed")?;

    if cli.json {
        let result = serde_json::json!({
            "winner": winner,
        });
        println!("{result}");
    } else if winner.is_none() {
        println!("Game stopped before a winner emerged");
    }
    Ok(())
}

/// Build one seat's decision kit. The informed seat watches the next ring
/// position; seeded strategies keep a `--seed` run reproducible.
fn build_seat(arg: SeatArg, index: u32, player_count: u32, seed: Option<u64>) -> Seat {
    let id = index + 1;
    let rival = PlayerId::new(id % player_count + 1);
    match arg {
        SeatArg::Human => Seat::Human,
        SeatArg::Random => {
            let (cards, colors) = match seed {
                Some(seed) => (
                    RandomStrategy::with_seed(seed ^ u64::from(id)),
                    RandomColorStrategy::with_seed(seed.rotate_left(8) ^ u64::from(id)),
                ),
                None => (RandomStrategy::new(), RandomColorStrategy::new()),
            };
            Seat::Bot(BotBrain::new(Box::new(cards), Box::new(colors)))
        }
        SeatArg::Aggressive => Seat::Bot(BotBrain::new(
            Box::new(AggressiveStrategy::new()),
            Box::new(MostFrequentColorStrategy::new()),
        )),
        SeatArg::Informed => Seat::Bot(BotBrain::new(
            Box::new(InformedStrategy::new(rival)),
            Box::new(MostFrequentColorStrategy::new()),
        )),
    }
}

fn print_input_help() {
    println!("Commands: <index> [color]  play the numbered card from your hand");
    println!("          d                draw a card / accept a pending penalty");
    println!("          q                quit the game");
    println!("Colors (for wild cards): red yellow green blue purple");
}

/// Drive human seats from stdin. Reads the latest snapshot the view has
/// published to map hand indices onto cards, and resolves the bridge; a
/// resolution landing when no human wait is pending is a safe no-op.
fn spawn_stdin_driver(bridge: Arc<InputBridge>, stop: StopHandle, shared: SharedSnapshot) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    stop.stop();
                    return;
                }
                Ok(_) => {}
            }
            let input = line.trim().to_lowercase();
            match input.as_str() {
                "" => continue,
                "q" | "quit" => {
                    stop.stop();
                    return;
                }
                "d" | "draw" => bridge.on_draw_requested(),
                _ => handle_play_command(&bridge, &shared, &input),
            }
        }
    });
}

fn handle_play_command(bridge: &InputBridge, shared: &SharedSnapshot, input: &str) {
    let mut parts = input.split_whitespace();
    let index = match parts.next().and_then(|p| p.parse::<usize>().ok()) {
        Some(index) => index,
        None => {
            eprintln!("Unrecognized command '{input}'");
            return;
        }
    };
    let color = parts.next().map(parse_color);

    let card = {
        let snapshot = shared.lock().expect("snapshot lock poisoned");
        let Some(state) = snapshot.as_ref() else {
            eprintln!("No hand to play from yet");
            return;
        };
        match state.active_hand.get(index) {
            Some(card) => card.clone(),
            None => {
                eprintln!("No card at index {index}");
                return;
            }
        }
    };

    if card.is_native_black() {
        match color {
            Some(Some(color)) => bridge.on_card_played(card.with_color(color)),
            _ => eprintln!("Wild cards need a color, e.g. '{index} blue'"),
        }
    } else {
        bridge.on_card_played(card);
    }
}

fn parse_color(s: &str) -> Option<Color> {
    match s {
        "red" | "r" => Some(Color::Red),
        "yellow" | "y" => Some(Color::Yellow),
        "green" | "g" => Some(Color::Green),
        "blue" | "b" => Some(Color::Blue),
        "purple" | "p" => Some(Color::Purple),
        _ => None,
    }
}
