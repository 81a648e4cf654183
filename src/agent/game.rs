use crate::gameplay::*;
use crate::mcts::TreeGame;
use crate::*;

/// Schnapsen as seen by the tree search.
impl TreeGame for Game {
    type A = Action;
    type P = Player;

    fn turn(&self) -> Player {
        Game::turn(self)
    }
    fn legal(&self) -> Vec<Action> {
        Game::legal(self)
    }
    fn apply(&self, action: Action) -> Self {
        Game::apply(self, action)
    }
    fn is_over(&self) -> bool {
        Game::is_over(self)
    }
    /// Roughly the rest of the current round: both players' remaining
    /// plays, the exchange and the close if they are still possible, one
    /// play fewer when the mover answers a lead, and room for marriages.
    fn horizon(&self) -> usize {
        let plays = 2 * self.hand(Game::turn(self)).size();
        let exchange = match self.swapped() {
            None if !self.is_closed() && !self.stock().is_empty() => 1,
            _ => 0,
        };
        let close = match self.is_closed() {
            true => 0,
            false => 1,
        };
        let answer = match self.lead() {
            Some(_) => 1,
            None => 0,
        };
        (plays + exchange + close + MARRIAGE_HEADROOM).saturating_sub(answer)
    }
    /// Match outcome once the game is over, otherwise the round utility
    /// scaled below the largest value it can take.
    fn score(&self, hero: Player) -> Utility {
        match Game::is_over(self) {
            true if self.losses(hero) < self.threshold() => 1.,
            true => 0.,
            false => self.utility(hero) / (self.threshold() as Utility * 10. + HEURISTIC_SLACK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::IndexedRandom;

    #[test]
    fn fresh_deal_horizon() {
        let game = Game::new(1, 1);
        // 10 plays, exchange, close, 4 marriages
        assert_eq!(TreeGame::horizon(&game), 16);
        let game = Game::apply(&game, Game::legal(&game)[0]);
        assert!(game.lead().is_some());
        assert_eq!(TreeGame::horizon(&game), 15);
    }

    #[test]
    fn closed_stock_shortens_rollouts() {
        let game = Game::new(5, 1);
        let closed = Game::apply(&game, Action::Close);
        assert_eq!(Game::turn(&closed), Game::turn(&game));
        assert_eq!(TreeGame::horizon(&closed), 14);
    }

    #[test]
    fn scores_stay_in_unit_range() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        for seed in 0..16 {
            let mut game = Game::new(seed, 2);
            while !Game::is_over(&game) {
                for hero in Player::both() {
                    let score = TreeGame::score(&game, hero);
                    assert!((0. ..1.).contains(&score));
                }
                let action = *Game::legal(&game).choose(rng).unwrap();
                game = Game::apply(&game, action);
            }
            let winner = match game.losses(Player::P0) < game.threshold() {
                true => Player::P0,
                false => Player::P1,
            };
            assert_eq!(TreeGame::score(&game, winner), 1.);
            assert_eq!(TreeGame::score(&game, winner.other()), 0.);
        }
    }
}
