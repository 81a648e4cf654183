use crate::Utility;

/// Upper confidence bound of a child seen from its parent.
///
/// Unvisited children are worth +∞ so every sibling gets one rollout
/// before any is ranked. Scores are always credited from the searching
/// player's seat; when the opponent moves at the parent the exploitation
/// term is flipped so the opponent is assumed to pick what hurts us most.
pub fn uct(
    score: Utility,
    visits: usize,
    parent: usize,
    adversarial: bool,
    exploration: Utility,
) -> Utility {
    if visits == 0 {
        return Utility::INFINITY;
    }
    let mean = score / visits as Utility;
    let exploit = match adversarial {
        true => 1. - mean,
        false => mean,
    };
    let explore = exploration * ((parent as Utility).ln() / visits as Utility).sqrt();
    exploit + explore
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EXPLORATION;

    #[test]
    fn unvisited_is_infinite() {
        assert_eq!(uct(0., 0, 10, false, EXPLORATION), Utility::INFINITY);
        assert_eq!(uct(0., 0, 10, true, EXPLORATION), Utility::INFINITY);
    }

    #[test]
    fn opponent_moves_flip_exploitation() {
        let ours = uct(3., 4, 4, false, 0.);
        let theirs = uct(3., 4, 4, true, 0.);
        assert!((ours - 0.75).abs() < 1e-6);
        assert!((theirs - 0.25).abs() < 1e-6);
    }

    #[test]
    fn exploration_shrinks_with_visits() {
        let rare = uct(1., 2, 100, false, EXPLORATION);
        let common = uct(25., 50, 100, false, EXPLORATION);
        assert!(rare > common);
        let bonus = uct(0., 1, 1, false, EXPLORATION);
        assert_eq!(bonus, 0.);
    }
}
