//! Host harness: the MCTS agent against a uniform random player.
use crate::agent::*;
use crate::gameplay::*;
use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::time::Duration;
use std::time::Instant;

/// A series of full games between an [`Agent`] and a random player,
/// switching seats every game. Every action either side returns is checked
/// against the true game before it is applied.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(author, version, about = "Pit the MCTS agent against a random player")
)]
pub struct Duel {
    /// games to play
    #[cfg_attr(feature = "cli", arg(short, long, default_value_t = 10))]
    pub games: usize,
    /// thinking time per decision
    #[cfg_attr(feature = "cli", arg(short, long, default_value_t = 100))]
    pub millis: u64,
    /// lost matches that end a game
    #[cfg_attr(feature = "cli", arg(short, long, default_value_t = LOSS_THRESHOLD))]
    pub threshold: u8,
    #[cfg_attr(feature = "cli", arg(short, long, default_value_t = 0))]
    pub seed: u64,
    /// cap search iterations per decision
    #[cfg_attr(feature = "cli", arg(long))]
    pub iterations: Option<usize>,
    /// print the report as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,
}

#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    pub games: usize,
    pub agent: usize,
    pub random: usize,
    pub decisions: usize,
    pub mean_ms: f64,
}

impl Duel {
    pub fn play(&self) -> anyhow::Result<Report> {
        anyhow::ensure!(self.threshold > 0, "a game needs at least one match to lose");
        let mut agent = Agent::new(AgentConfig {
            seed: Some(self.seed),
            iterations: self.iterations,
            ..AgentConfig::default()
        });
        let ref mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(1));
        let time = Duration::from_millis(self.millis);
        let mut thinking = Duration::ZERO;
        let mut report = Report::default();
        for n in 0..self.games {
            let seat = Player::from(n % 2);
            let mut game = Game::new(self.seed.wrapping_add(n as u64), self.threshold);
            while !game.is_over() {
                let action = match game.turn() == seat {
                    true => {
                        let start = Instant::now();
                        let action = agent.decide(&game.view(seat), time)?;
                        thinking += start.elapsed();
                        report.decisions += 1;
                        action
                    }
                    false => *game
                        .legal()
                        .choose(rng)
                        .ok_or_else(|| anyhow::anyhow!("no legal action in {}", game))?,
                };
                anyhow::ensure!(
                    game.is_allowed(&action),
                    "{} chose illegal {} in {}",
                    game.turn(),
                    action,
                    game
                );
                game = game.try_apply(action)?;
            }
            report.games += 1;
            match game.losses(seat) < game.threshold() {
                true => report.agent += 1,
                false => report.random += 1,
            }
            log::info!(
                "game {:>4} | agent {:>4} | random {:>4}",
                n + 1,
                report.agent,
                report.random
            );
        }
        if report.decisions > 0 {
            report.mean_ms = thinking.as_secs_f64() * 1e3 / report.decisions as f64;
        }
        Ok(report)
    }
}

#[cfg(feature = "cli")]
impl Duel {
    pub fn run() -> anyhow::Result<()> {
        use clap::Parser;
        let duel = Self::parse();
        let report = duel.play()?;
        match duel.json {
            true => println!("{}", serde_json::to_string_pretty(&report)?),
            false => log::info!("{}", report),
        }
        Ok(())
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "agent {} random {} over {} games, {} decisions at {:.1}ms",
            self.agent, self.random, self.games, self.decisions, self.mean_ms
        )
    }
}
