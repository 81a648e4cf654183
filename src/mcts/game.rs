use crate::Utility;
use std::fmt::Debug;

/// Everything tree search needs to know about a game.
///
/// States are values: `apply` returns the successor and leaves `self`
/// untouched, so sibling branches of the tree never share mutable state.
/// The search itself knows nothing about cards; it only asks whose turn it
/// is, what can be done, how deep a rollout may go and how good the end of
/// a rollout looks from the searching player's seat.
pub trait TreeGame: Clone {
    /// edge type of the tree
    type A: Copy + Eq + Debug;
    /// seat type
    type P: Copy + Eq + Debug;

    fn turn(&self) -> Self::P;
    /// empty iff the game is over
    fn legal(&self) -> Vec<Self::A>;
    fn apply(&self, action: Self::A) -> Self;
    fn is_over(&self) -> bool;
    /// maximum number of random actions a rollout from here may take
    fn horizon(&self) -> usize;
    /// rollout payoff for `hero`, normalized to roughly [0, 1]
    fn score(&self, hero: Self::P) -> Utility;
}
