//! Duel Binary
//!
//! Plays the MCTS agent against a uniform random player and reports
//! the result.
//!
//! Options: --games, --millis, --threshold, --seed, --iterations, --json

use schnapsen_mcts::*;

fn main() -> anyhow::Result<()> {
    log();
    duel::Duel::run()
}
