use super::game::TreeGame;
use crate::Utility;
use rand::Rng;
use rand::seq::SliceRandom;

/// Node weight of the search tree.
///
/// The untried actions are shuffled exactly once, when the node is
/// created, and then consumed front to back through a cursor. That fixed
/// order is the node's exploration order.
#[derive(Debug, Clone)]
pub struct Data<G: TreeGame> {
    game: G,
    untried: Vec<G::A>,
    cursor: usize,
    visits: usize,
    score: Utility,
}

impl<G: TreeGame> Data<G> {
    pub fn new<R: Rng>(game: G, rng: &mut R) -> Self {
        let mut untried = game.legal();
        untried.shuffle(rng);
        Self {
            game,
            untried,
            cursor: 0,
            visits: 0,
            score: 0.,
        }
    }
    pub fn game(&self) -> &G {
        &self.game
    }
    pub fn visits(&self) -> usize {
        self.visits
    }
    pub fn score(&self) -> Utility {
        self.score
    }
    /// mean rollout score through this node
    pub fn mean(&self) -> Utility {
        match self.visits {
            0 => 0.,
            n => self.score / n as Utility,
        }
    }
    pub fn is_expanded(&self) -> bool {
        self.cursor >= self.untried.len()
    }
    /// pop the next untried action in exploration order
    pub fn untried(&mut self) -> Option<G::A> {
        let action = self.untried.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(action)
    }
    /// the only way statistics change
    pub fn credit(&mut self, score: Utility) {
        self.visits += 1;
        self.score += score;
    }
}
