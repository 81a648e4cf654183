use crate::cards::*;
use crate::gameplay::*;
use rand::Rng;
use rand::seq::SliceRandom;

/// Sample one complete game consistent with everything `view` reveals.
///
/// Cards the hero can account for (their hand, the trump indicator, the
/// card on the table, every completed trick) are set aside. Of the rest,
/// some can only be in the opponent's hand: both cards of a marriage they
/// declared that have not been played yet, the old trump they picked up
/// with an exchange, and the trump indicator itself once the stock is
/// gone. Everything else is shuffled, the stock takes what it needs (with
/// the trump indicator back at its bottom) and the opponent gets the rest.
///
/// The only randomness is the shuffle and the seed of future deals, both
/// drawn from `rng`. A hand size that does not add up means the view
/// itself is inconsistent; that is reported as an error, never patched.
pub fn determinize<R: Rng>(view: &View, rng: &mut R) -> anyhow::Result<Game> {
    let trump = view.trump();
    let table = view.lead().map(Hand::from).unwrap_or_default();
    let played = view.played();
    let known = view
        .hand()
        .union(played)
        .union(table)
        .union(Hand::from(trump));
    let unknown = Hand::deck().minus(known);
    let swapped = view.swapped().map(Hand::from).unwrap_or_default();
    let mut pinned = view
        .marriages(view.opponent())
        .union(swapped)
        .intersect(unknown);
    if view.stock() == 0 && !view.hand().union(played).union(table).contains(&trump) {
        pinned.insert(trump);
    }
    let mut pool = Vec::<Card>::from(unknown.minus(pinned));
    pool.shuffle(rng);
    let draws = view.stock().saturating_sub(1);
    if pool.len() < draws {
        log::error!("{} unknown cards cannot fill a stock of {}", pool.len(), view.stock());
        anyhow::bail!("stock of {} outnumbers unknown cards {}", view.stock(), pool.len());
    }
    let mut stock = pool.split_off(pool.len() - draws);
    if view.stock() > 0 {
        stock.push(trump);
    }
    let hidden = pinned.union(Hand::from(pool));
    if hidden.size() != view.hidden() {
        log::error!(
            "opponent should hold {} cards, reconstructed {} ({} pinned)",
            view.hidden(),
            hidden.size(),
            pinned.size()
        );
        anyhow::bail!(
            "determinized opponent hand {} does not match expected size {}",
            hidden,
            view.hidden()
        );
    }
    Ok(Game::assume(view, hidden, stock, rng.random()))
}
