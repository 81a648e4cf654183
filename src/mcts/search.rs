use super::budget::Budget;
use super::game::TreeGame;
use super::node::Node;
use super::tree::Tree;
use super::uct::uct;
use crate::Utility;
use petgraph::graph::NodeIndex;
use rand::Rng;
use rand::seq::IndexedRandom;

/// One Monte Carlo Tree Search over a fully known game state.
///
/// The player to move at the root is the hero; every rollout is scored
/// from their seat. Each iteration runs four phases:
///
/// 1. **select** descends by UCT while nodes are fully expanded
/// 2. **expand** adds one untried child of the selected node
/// 3. **simulate** plays uniformly random actions up to the game's horizon
/// 4. **backpropagate** credits the score to the new node and its ancestors
///
/// The tree lives only as long as the search and is dropped with it.
pub struct Search<G: TreeGame> {
    hero: G::P,
    tree: Tree<G>,
    budget: Budget,
    exploration: Utility,
    iterations: usize,
}

impl<G: TreeGame> Search<G> {
    pub fn new<R: Rng>(game: G, budget: Budget, exploration: Utility, rng: &mut R) -> Self {
        Self {
            hero: game.turn(),
            tree: Tree::new(game, rng),
            budget,
            exploration,
            iterations: 0,
        }
    }
    pub fn tree(&self) -> &Tree<G> {
        &self.tree
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// iterate until the budget runs out
    pub fn run<R: Rng>(&mut self, rng: &mut R) {
        while !self.budget.exhausted(self.iterations) {
            self.step(rng);
        }
    }
    /// one select → expand → simulate → backpropagate cycle
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        let leaf = self.select();
        let node = self.expand(leaf, rng);
        let score = self.simulate(node, rng);
        self.backpropagate(node, score);
        self.iterations += 1;
        log::trace!("iteration {:>6} scored {:.3}", self.iterations, score);
    }

    pub fn select(&self) -> NodeIndex {
        let mut node = self.tree.root();
        while node.data().is_expanded() && !node.game().is_over() && !self.budget.expired() {
            match self.choose(node) {
                Some(child) => node = child,
                None => break,
            }
        }
        node.index()
    }
    /// highest UCT child, first one wins ties
    fn choose<'tree>(&self, node: Node<'tree, G>) -> Option<Node<'tree, G>> {
        let parent = node.data().visits();
        let adversarial = node.game().turn() != self.hero;
        let mut best = None;
        let mut high = Utility::NEG_INFINITY;
        for child in node.children() {
            let data = child.data();
            let value = uct(
                data.score(),
                data.visits(),
                parent,
                adversarial,
                self.exploration,
            );
            if value > high {
                high = value;
                best = Some(child);
            }
        }
        best
    }

    /// the new child, or the node itself if it is terminal or has nothing left to try
    pub fn expand<R: Rng>(&mut self, index: NodeIndex, rng: &mut R) -> NodeIndex {
        if self.tree.at(index).game().is_over() {
            return index;
        }
        self.tree.grow(index, rng).unwrap_or(index)
    }

    pub fn simulate<R: Rng>(&self, index: NodeIndex, rng: &mut R) -> Utility {
        let mut game = self.tree.at(index).game().clone();
        let horizon = game.horizon();
        let mut depth = 0;
        while depth < horizon && !game.is_over() && !self.budget.expired() {
            match game.legal().choose(rng) {
                Some(action) => game = game.apply(*action),
                None => break,
            }
            depth += 1;
        }
        game.score(self.hero)
    }

    pub fn backpropagate(&mut self, index: NodeIndex, score: Utility) {
        self.tree.backpropagate(index, score);
    }

    /// The action of the most visited root child, first one on ties.
    /// None when the root never grew a child.
    pub fn best(&self) -> Option<G::A> {
        self.tree
            .root()
            .children()
            .into_iter()
            .fold(None::<Node<'_, G>>, |best, child| match best {
                Some(best) if best.data().visits() >= child.data().visits() => Some(best),
                _ => Some(child),
            })
            .and_then(|child| child.incoming())
    }
    /// visits of the root child reached through `action`
    pub fn visits(&self, action: G::A) -> usize {
        self.tree
            .root()
            .children()
            .into_iter()
            .find(|child| child.incoming() == Some(action))
            .map(|child| child.data().visits())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EXPLORATION;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::time::Duration;
    use std::time::Instant;

    /// take one or two stones, whoever takes the last stone wins
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Nim {
        left: u8,
        turn: u8,
    }

    impl TreeGame for Nim {
        type A = u8;
        type P = u8;
        fn turn(&self) -> u8 {
            self.turn
        }
        fn legal(&self) -> Vec<u8> {
            (1..=2).filter(|n| *n <= self.left).collect()
        }
        fn apply(&self, action: u8) -> Self {
            Self {
                left: self.left - action,
                turn: 1 - self.turn,
            }
        }
        fn is_over(&self) -> bool {
            self.left == 0
        }
        fn horizon(&self) -> usize {
            self.left as usize
        }
        fn score(&self, hero: u8) -> Utility {
            match self.is_over() {
                true if self.turn != hero => 1.,
                true => 0.,
                false => 0.5,
            }
        }
    }

    fn nim(left: u8) -> Nim {
        Nim { left, turn: 0 }
    }
    fn forever() -> Budget {
        Budget::within(Duration::from_secs(3600))
    }

    #[test]
    fn unvisited_children_are_selected_first() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut search = Search::new(nim(5), forever(), EXPLORATION, rng);
        let a = search.expand(NodeIndex::new(0), rng);
        let b = search.expand(NodeIndex::new(0), rng);
        assert!(search.tree().root().data().is_expanded());
        search.backpropagate(a, 1.);
        search.backpropagate(a, 1.);
        assert_eq!(search.select(), b);
    }

    /// two root children with one identical rollout each
    fn twins() -> (Search<Nim>, NodeIndex, NodeIndex) {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let mut search = Search::new(nim(5), forever(), EXPLORATION, rng);
        let a = search.expand(NodeIndex::new(0), rng);
        let b = search.expand(NodeIndex::new(0), rng);
        search.backpropagate(a, 0.5);
        search.backpropagate(b, 0.5);
        (search, a, b)
    }

    #[test]
    fn selection_ties_keep_the_first_child() {
        let (search, a, b) = twins();
        let root = search.tree().root();
        let chosen = search.choose(root).map(|child| child.index());
        assert!(a < b);
        assert_eq!(chosen, Some(a));
        assert_eq!(search.select(), a);
    }

    #[test]
    fn visit_ties_keep_the_first_child() {
        let (search, a, b) = twins();
        let tree = search.tree();
        assert_eq!(tree.at(a).data().visits(), tree.at(b).data().visits());
        assert_eq!(search.best(), tree.at(a).incoming());
    }

    #[test]
    fn tree_renders_every_edge() {
        let ref mut rng = SmallRng::seed_from_u64(10);
        let mut search = Search::new(nim(4), forever().capped(20), EXPLORATION, rng);
        search.run(rng);
        let drawing = search.tree().to_string();
        assert!(drawing.starts_with("ROOT"));
        assert!(drawing.contains("    20 "));
        assert_eq!(drawing.matches("──").count(), search.tree().size() - 1);
    }

    #[test]
    fn expansion_stops_at_terminal_states() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut search = Search::new(nim(0), forever().capped(10), EXPLORATION, rng);
        let root = NodeIndex::new(0);
        assert_eq!(search.expand(root, rng), root);
        assert_eq!(search.tree().size(), 1);
        search.run(rng);
        assert_eq!(search.tree().root().data().visits(), 10);
        assert_eq!(search.best(), None);
    }

    #[test]
    fn visits_sum_over_children() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let mut search = Search::new(nim(9), forever().capped(500), EXPLORATION, rng);
        search.run(rng);
        assert_eq!(search.iterations(), 500);
        let tree = search.tree();
        let root = tree.root();
        assert_eq!(root.data().visits(), 500);
        for index in tree.graph().node_indices() {
            let node = tree.at(index);
            if node.game().is_over() {
                continue;
            }
            let below = node
                .children()
                .iter()
                .map(|child| child.data().visits())
                .sum::<usize>();
            let own = match node.parent() {
                Some(_) => 1,
                None => 0,
            };
            assert_eq!(node.data().visits(), own + below);
        }
        let below = root
            .children()
            .iter()
            .map(|child| child.data().score())
            .sum::<Utility>();
        assert!((root.data().score() - below).abs() < 1e-3);
    }

    #[test]
    fn backpropagation_credits_every_ancestor() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let mut search = Search::new(nim(6), forever(), EXPLORATION, rng);
        let child = search.expand(NodeIndex::new(0), rng);
        let grandchild = search.expand(child, rng);
        search.backpropagate(grandchild, 0.25);
        for index in [NodeIndex::new(0), child, grandchild] {
            let data = search.tree().at(index).data();
            assert_eq!(data.visits(), 1);
            assert_eq!(data.score(), 0.25);
        }
    }

    #[test]
    fn best_is_most_visited() {
        let ref mut rng = SmallRng::seed_from_u64(6);
        let mut search = Search::new(nim(8), forever().capped(300), EXPLORATION, rng);
        search.run(rng);
        let best = search.best().unwrap();
        let most = search
            .tree()
            .root()
            .children()
            .iter()
            .map(|child| child.data().visits())
            .max()
            .unwrap();
        assert_eq!(search.visits(best), most);
    }

    #[test]
    fn finds_the_winning_move() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut search = Search::new(nim(4), forever().capped(2000), EXPLORATION, rng);
        search.run(rng);
        assert_eq!(search.best(), Some(1));
    }

    #[test]
    fn deadline_is_respected() {
        let ref mut rng = SmallRng::seed_from_u64(8);
        let start = Instant::now();
        let budget = Budget::within(Duration::from_millis(20));
        let mut search = Search::new(nim(200), budget, EXPLORATION, rng);
        search.run(rng);
        assert!(start.elapsed() < Duration::from_millis(500));
        assert!(search.iterations() > 0);
    }
}
