//! Determinized Monte Carlo Tree Search for two-player Schnapsen.
//!
//! - [`cards`]: the 20-card deck
//! - [`gameplay`]: the rule engine and the per-seat imperfect-information view
//! - [`mcts`]: game-agnostic UCT search over a petgraph arena
//! - [`agent`]: hidden-card reconstruction and the per-turn `decide` entry point
//! - [`duel`]: the agent against a random player, end to end
pub mod agent;
pub mod cards;
pub mod duel;
pub mod gameplay;
pub mod mcts;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Rollout scores, UCT values and round utilities.
pub type Utility = f32;

// ============================================================================
// GAME RULES
// ============================================================================
/// Cards dealt to each player.
pub const HAND_SIZE: usize = 5;
/// Round points that win a round on the spot.
pub const TARGET_POINTS: u8 = 66;
/// Game points that win a match (a "Bummerl").
pub const MATCH_POINTS: u8 = 7;
/// Lost matches that end the game, unless a caller picks another threshold.
pub const LOSS_THRESHOLD: u8 = 1;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// UCT exploration constant.
pub const EXPLORATION: Utility = std::f32::consts::SQRT_2;
/// Extra rollout depth for up to four marriage declarations in a round.
pub const MARRIAGE_HEADROOM: usize = 4;
/// Largest fraction of a match a round utility can add on top of 10 per lost match.
pub const HEURISTIC_SLACK: Utility = 9.99;
/// Reserved from every time budget for determinization and bookkeeping.
pub const SAFETY_MARGIN: std::time::Duration = std::time::Duration::from_millis(2);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
