use super::config::AgentConfig;
use super::determinize::determinize;
use crate::gameplay::*;
use crate::mcts::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use std::time::Instant;

/// A Schnapsen player backed by determinized Monte Carlo Tree Search.
///
/// Every call to [`decide`](Self::decide) samples one world consistent
/// with the view, searches it until the time budget runs out, and plays
/// the most visited move. Nothing survives between calls except the RNG.
#[derive(Debug, Clone)]
pub struct Agent {
    config: AgentConfig,
    rng: SmallRng,
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(AgentConfig::default())
    }
}

impl Agent {
    pub fn new(config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self { config, rng }
    }

    /// Choose a legal action for the player to move within `time`.
    ///
    /// Errors if it is not the viewer's turn, or if the view cannot be
    /// turned into a consistent world.
    pub fn decide(&mut self, view: &View, time: Duration) -> anyhow::Result<Action> {
        let start = Instant::now();
        let legal = view.legal();
        match legal {
            [] => anyhow::bail!("{} has no legal action", view.hero()),
            [only] => return Ok(*only),
            _ => {}
        }
        let mut budget = Budget::until(start + time.saturating_sub(self.config.margin));
        if let Some(cap) = self.config.iterations {
            budget = budget.capped(cap);
        }
        let world = determinize(view, &mut self.rng)?;
        let mut search = Search::new(world, budget, self.config.exploration, &mut self.rng);
        search.run(&mut self.rng);
        log::trace!("\n{}", search.tree());
        let action = match search.best().filter(|action| legal.contains(action)) {
            Some(action) => action,
            None => {
                log::warn!(
                    "search starved after {} iterations, falling back",
                    search.iterations()
                );
                legal[0]
            }
        };
        log::debug!(
            "{} {} after {:>6} iterations in {:>4}ms ({}/{} visits)",
            view.hero(),
            action,
            search.iterations(),
            start.elapsed().as_millis(),
            search.visits(action),
            search.tree().root().data().visits(),
        );
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::IndexedRandom;

    #[test]
    fn decisions_are_always_legal() {
        let mut agent = Agent::new(AgentConfig::seeded(1).capped(64));
        let ref mut rng = SmallRng::seed_from_u64(2);
        for seed in 0..6 {
            let mut game = Game::new(seed, 1);
            while !game.is_over() {
                let action = match game.turn() {
                    Player::P0 => agent
                        .decide(&game.view(Player::P0), Duration::from_secs(5))
                        .unwrap(),
                    Player::P1 => *game.legal().choose(rng).unwrap(),
                };
                assert!(game.is_allowed(&action));
                game = game.apply(action);
            }
        }
    }

    #[test]
    fn single_choice_skips_the_search() {
        let mut agent = Agent::new(AgentConfig::seeded(3));
        let ref mut rng = SmallRng::seed_from_u64(4);
        let mut found = 0;
        for seed in 0..32 {
            let mut game = Game::new(seed, 1);
            while !game.is_over() {
                let legal = game.legal();
                if let [only] = legal.as_slice() {
                    let view = game.view(game.turn());
                    let action = agent.decide(&view, Duration::ZERO).unwrap();
                    assert_eq!(action, *only);
                    found += 1;
                }
                game = game.apply(*legal.choose(rng).unwrap());
            }
        }
        assert!(found > 0);
    }

    #[test]
    fn starved_search_falls_back_to_a_legal_action() {
        let mut agent = Agent::new(AgentConfig::seeded(5));
        let game = Game::new(6, 1);
        let view = game.view(game.turn());
        let action = agent.decide(&view, Duration::ZERO).unwrap();
        assert_eq!(action, view.legal()[0]);
    }

    #[test]
    fn deadline_is_respected() {
        let mut agent = Agent::new(AgentConfig::seeded(7));
        let game = Game::new(8, 1);
        let view = game.view(game.turn());
        let start = Instant::now();
        let action = agent.decide(&view, Duration::from_millis(50)).unwrap();
        assert!(start.elapsed() < Duration::from_millis(500));
        assert!(view.legal().contains(&action));
    }

    #[test]
    fn waiting_seat_cannot_decide() {
        let mut agent = Agent::default();
        let game = Game::new(9, 1);
        let view = game.view(game.turn().other());
        assert!(agent.decide(&view, Duration::from_millis(10)).is_err());
    }

    #[test]
    fn seeded_agents_agree() {
        let game = Game::new(10, 1);
        let view = game.view(game.turn());
        let mut a = Agent::new(AgentConfig::seeded(11).capped(200));
        let mut b = Agent::new(AgentConfig::seeded(11).capped(200));
        let time = Duration::from_secs(10);
        assert_eq!(a.decide(&view, time).unwrap(), b.decide(&view, time).unwrap());
    }
}
