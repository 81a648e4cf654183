use super::*;
use crate::cards::*;
use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// A closed stock remembers who closed it and whether the opponent
/// had taken any trick at that moment, which decides the penalty
/// if the closer fails to reach 66.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closure {
    closer: Player,
    snubbed: bool,
}

impl Closure {
    pub fn closer(&self) -> Player {
        self.closer
    }
    /// the opponent had no trick when the stock was closed
    pub fn snubbed(&self) -> bool {
        self.snubbed
    }
}

/// The full-information state of a Schnapsen game.
///
/// `Game` is the rule engine: it knows both hands and the order of the
/// stock, decides whose turn it is, which actions are legal, and how
/// tricks, rounds and matches are scored.
///
/// State transitions are functional: [`apply`](Self::apply) returns a new
/// `Game` rather than mutating in place. This lets tree search branch
/// without undo logic, and no two branches ever share mutable state.
///
/// A game spans several rounds. Every new round is dealt from a `SmallRng`
/// derived from `seed` and the deal counter, so the engine itself never
/// carries a random generator and transitions stay deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    seed: u64,
    deal: u32,
    dealer: Player,
    leader: Player,
    hands: [Hand; 2],
    stock: Vec<Card>,
    trump: Card,
    swapped: Option<Card>,
    lead: Option<Card>,
    tricks: [Vec<[Card; 2]>; 2],
    marriages: [Hand; 2],
    points: [u8; 2],
    pending: [u8; 2],
    closure: Option<Closure>,
    scores: [u8; 2],
    losses: [u8; 2],
    threshold: u8,
}

/// Game entry points.
impl Game {
    /// A fresh game: P1 deals the first round, P0 leads.
    pub fn new(seed: u64, threshold: u8) -> Self {
        assert!(threshold > 0, "a game needs at least one match to lose");
        Self::dealt(seed, 0, Player::P1, [0; 2], [0; 2], threshold)
    }
    /// Rebuilds a full state from one player's view plus a guess at
    /// everything that view hides: the opponent's hand, the stock order
    /// (front is drawn next, last is the trump indicator) and the seed of
    /// future deals.
    pub fn assume(view: &View, hidden: Hand, stock: Vec<Card>, seed: u64) -> Self {
        let hero = view.hero();
        let mut hands = [Hand::empty(); 2];
        hands[usize::from(hero)] = view.hand();
        hands[usize::from(hero.other())] = hidden;
        Self {
            seed,
            deal: view.deal(),
            dealer: view.dealer(),
            leader: view.leader(),
            hands,
            stock,
            trump: view.trump(),
            swapped: view.swapped(),
            lead: view.lead(),
            tricks: Player::both().map(|p| view.tricks(p).to_vec()),
            marriages: Player::both().map(|p| view.marriages(p)),
            points: Player::both().map(|p| view.points(p)),
            pending: Player::both().map(|p| view.pending(p)),
            closure: view.closure(),
            scores: Player::both().map(|p| view.scores(p)),
            losses: Player::both().map(|p| view.losses(p)),
            threshold: view.threshold(),
        }
    }
    fn dealt(
        seed: u64,
        deal: u32,
        dealer: Player,
        scores: [u8; 2],
        losses: [u8; 2],
        threshold: u8,
    ) -> Self {
        let ref mut rng = Self::rng(seed, deal);
        let mut deck = Deck::shuffled(rng);
        let mut hands = [Hand::empty(); 2];
        hands[usize::from(dealer.other())] = deck.deal(HAND_SIZE);
        hands[usize::from(dealer)] = deck.deal(HAND_SIZE);
        let trump = deck.draw().expect("20 card deck outlasts the deal");
        let mut stock = Vec::<Card>::from(deck);
        stock.push(trump);
        Self {
            seed,
            deal,
            dealer,
            leader: dealer.other(),
            hands,
            stock,
            trump,
            swapped: None,
            lead: None,
            tricks: [Vec::new(), Vec::new()],
            marriages: [Hand::empty(); 2],
            points: [0; 2],
            pending: [0; 2],
            closure: None,
            scores,
            losses,
            threshold,
        }
    }
    /// deterministic per-deal randomness
    fn rng(seed: u64, deal: u32) -> SmallRng {
        let ref mut hasher = DefaultHasher::new();
        seed.hash(hasher);
        deal.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }
}

/// Public state accessors.
impl Game {
    pub fn turn(&self) -> Player {
        match self.lead {
            Some(_) => self.leader.other(),
            None => self.leader,
        }
    }
    pub fn is_over(&self) -> bool {
        self.losses.iter().any(|n| *n >= self.threshold)
    }
    pub fn hand(&self, player: Player) -> Hand {
        self.hands[usize::from(player)]
    }
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }
    pub fn trump(&self) -> Card {
        self.trump
    }
    pub fn suit(&self) -> Suit {
        self.trump.suit()
    }
    pub fn swapped(&self) -> Option<Card> {
        self.swapped
    }
    pub fn lead(&self) -> Option<Card> {
        self.lead
    }
    pub fn leader(&self) -> Player {
        self.leader
    }
    pub fn dealer(&self) -> Player {
        self.dealer
    }
    pub fn deal(&self) -> u32 {
        self.deal
    }
    pub fn tricks(&self, player: Player) -> &[[Card; 2]] {
        &self.tricks[usize::from(player)]
    }
    pub fn marriages(&self, player: Player) -> Hand {
        self.marriages[usize::from(player)]
    }
    pub fn points(&self, player: Player) -> u8 {
        self.points[usize::from(player)]
    }
    pub fn pending(&self, player: Player) -> u8 {
        self.pending[usize::from(player)]
    }
    pub fn closure(&self) -> Option<Closure> {
        self.closure
    }
    pub fn is_closed(&self) -> bool {
        self.closure.is_some()
    }
    pub fn scores(&self, player: Player) -> u8 {
        self.scores[usize::from(player)]
    }
    pub fn losses(&self, player: Player) -> u8 {
        self.losses[usize::from(player)]
    }
    pub fn threshold(&self) -> u8 {
        self.threshold
    }
    /// cards taken in completed tricks by either player
    pub fn played(&self) -> Hand {
        self.tricks
            .iter()
            .flatten()
            .flatten()
            .copied()
            .collect()
    }
    /// Round utility for one player: the opponent's lost matches weigh
    /// 10, game points 1 each, and round points fill the fraction.
    /// Below `threshold * 10 + 9.99` for every unfinished game.
    pub fn utility(&self, player: Player) -> Utility {
        let p = usize::from(player);
        let o = usize::from(player.other());
        10. * self.losses[o] as Utility
            + self.scores[p] as Utility
            + self.points[p].min(TARGET_POINTS) as Utility / (TARGET_POINTS + 1) as Utility
    }
    /// What `player` is allowed to see.
    pub fn view(&self, player: Player) -> View {
        View::from((self, player))
    }
}

/// Action validation and application.
impl Game {
    /// Returns a new game state with the action applied.
    ///
    /// Panics if the action is not legal in the current state.
    pub fn apply(&self, action: Action) -> Self {
        self.try_apply(action).expect("legal action")
    }
    /// Fallible version of [`apply`](Self::apply).
    pub fn try_apply(&self, action: Action) -> anyhow::Result<Self> {
        if !self.is_allowed(&action) {
            return Err(anyhow::anyhow!(
                "illegal action {} for {} in deal {}",
                action,
                self.turn(),
                self.deal
            ));
        }
        let mut child = self.clone();
        child.act(action);
        Ok(child)
    }
    /// All legal actions for the player to move. Empty once the game is over.
    pub fn legal(&self) -> Vec<Action> {
        if self.is_over() {
            return vec![];
        }
        match self.lead {
            Some(led) => self.answers(led).map(Action::Play).collect(),
            None => {
                let hand = self.hand(self.turn());
                let mut options = hand.map(Action::Play).collect::<Vec<_>>();
                options.extend(
                    hand.filter(|c| c.partner().is_some_and(|m| hand.contains(&m)))
                        .map(Action::Marry),
                );
                if self.may_exchange() {
                    options.push(Action::Exchange);
                }
                if self.may_close() {
                    options.push(Action::Close);
                }
                options
            }
        }
    }
    pub fn is_allowed(&self, action: &Action) -> bool {
        self.legal().contains(action)
    }
    /// strict play applies once the stock is closed or drawn out
    pub fn is_strict(&self) -> bool {
        self.is_closed() || self.stock.is_empty()
    }
    fn may_exchange(&self) -> bool {
        let jack = Card::from((Rank::Jack, self.suit()));
        self.closure.is_none()
            && self.stock.len() > 2
            && self.hand(self.turn()).contains(&jack)
    }
    fn may_close(&self) -> bool {
        self.closure.is_none() && self.stock.len() > 2
    }
    /// Cards the responder may answer `led` with. Under strict play:
    /// follow suit and head the trick if possible, else trump, else anything.
    fn answers(&self, led: Card) -> Hand {
        let hand = self.hand(self.turn());
        if !self.is_strict() {
            return hand;
        }
        let follow = hand.of(&led.suit());
        let heads = follow
            .filter(|c| led.loses_to(c, self.suit()))
            .collect::<Hand>();
        let trumps = hand.of(&self.suit());
        [heads, follow, trumps, hand]
            .into_iter()
            .find(|h| !h.is_empty())
            .unwrap_or(hand)
    }
}

/// State mutations. Only reachable through `try_apply` on a private clone.
impl Game {
    fn act(&mut self, action: Action) {
        let player = self.turn();
        match action {
            Action::Exchange => self.exchange(player),
            Action::Close => self.close(player),
            Action::Marry(card) => self.marry(player, card),
            Action::Play(card) => match self.lead {
                None => self.open(player, card),
                Some(led) => self.answer(led, card),
            },
        }
    }
    fn exchange(&mut self, player: Player) {
        let jack = Card::from((Rank::Jack, self.suit()));
        let hand = &mut self.hands[usize::from(player)];
        hand.remove(jack);
        hand.insert(self.trump);
        if let Some(bottom) = self.stock.last_mut() {
            *bottom = jack;
        }
        self.swapped = Some(self.trump);
        self.trump = jack;
    }
    fn close(&mut self, player: Player) {
        self.closure = Some(Closure {
            closer: player,
            snubbed: self.tricks(player.other()).is_empty(),
        });
    }
    fn marry(&mut self, player: Player, card: Card) {
        let p = usize::from(player);
        let bonus = if card.is_trump(self.suit()) { 40 } else { 20 };
        self.marriages[p].insert(card);
        if let Some(partner) = card.partner() {
            self.marriages[p].insert(partner);
        }
        if self.tricks[p].is_empty() {
            self.pending[p] += bonus;
        } else {
            self.points[p] += bonus;
        }
        if self.points[p] >= TARGET_POINTS {
            self.settle(player);
        } else {
            self.open(player, card);
        }
    }
    fn open(&mut self, player: Player, card: Card) {
        self.hands[usize::from(player)].remove(card);
        self.lead = Some(card);
    }
    fn answer(&mut self, led: Card, card: Card) {
        let responder = self.leader.other();
        self.hands[usize::from(responder)].remove(card);
        self.lead = None;
        let winner = if led.loses_to(&card, self.suit()) {
            responder
        } else {
            self.leader
        };
        let w = usize::from(winner);
        self.tricks[w].push([led, card]);
        self.points[w] += led.points() + card.points() + self.pending[w];
        self.pending[w] = 0;
        self.leader = winner;
        if self.closure.is_none() {
            for player in [winner, winner.other()] {
                if !self.stock.is_empty() {
                    let drawn = self.stock.remove(0);
                    self.hands[usize::from(player)].insert(drawn);
                }
            }
        }
        if self.points[w] >= TARGET_POINTS {
            self.settle(winner);
        } else if self.hands.iter().all(Hand::is_empty) {
            match self.closure {
                Some(closure) => self.settle(closure.closer().other()),
                None => self.settle(winner),
            }
        }
    }
    /// Round is over: award game points, book a lost match if someone
    /// reached the match target, and deal the next round unless the
    /// game is over.
    fn settle(&mut self, winner: Player) {
        let loser = winner.other();
        let award = match self.closure {
            Some(closure) if closure.closer() != winner => match closure.snubbed() {
                true => 3,
                false => 2,
            },
            _ if self.tricks(loser).is_empty() => 3,
            _ if self.points(loser) < TARGET_POINTS / 2 => 2,
            _ => 1,
        };
        log::trace!("{} wins deal {} for {} game points", winner, self.deal, award);
        self.lead = None;
        self.scores[usize::from(winner)] += award;
        if self.scores[usize::from(winner)] >= MATCH_POINTS {
            self.losses[usize::from(loser)] += 1;
            self.scores = [0; 2];
        }
        if !self.is_over() {
            *self = Self::dealt(
                self.seed,
                self.deal + 1,
                self.dealer.other(),
                self.scores,
                self.losses,
                self.threshold,
            );
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "deal {} trump {} stock {} | P0 {} {}pts | P1 {} {}pts",
            self.deal,
            self.trump,
            self.stock.len(),
            self.hands[0],
            self.points[0],
            self.hands[1],
            self.points[1],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::IndexedRandom;

    /// every card is in exactly one place
    fn partition(game: &Game) -> Vec<Hand> {
        vec![
            game.hand(Player::P0),
            game.hand(Player::P1),
            game.stock().iter().copied().collect(),
            game.played(),
            game.lead().map(Hand::from).unwrap_or_default(),
        ]
    }

    fn is_partitioned(game: &Game) -> bool {
        let parts = partition(game);
        let union = parts.iter().copied().fold(Hand::empty(), Hand::add);
        let total = parts.iter().map(Hand::size).sum::<usize>();
        union == Hand::deck() && total == 20 && game.stock().len() == parts[2].size()
    }

    #[test]
    fn fresh_deal() {
        let game = Game::new(1, 1);
        assert_eq!(game.hand(Player::P0).size(), 5);
        assert_eq!(game.hand(Player::P1).size(), 5);
        assert_eq!(game.stock().len(), 10);
        assert_eq!(game.stock().last(), Some(&game.trump()));
        assert_eq!(game.turn(), Player::P0);
        assert!(is_partitioned(&game));
    }

    #[test]
    fn deals_are_reproducible() {
        assert_eq!(Game::new(9, 1), Game::new(9, 1));
        assert_ne!(Game::new(9, 1), Game::new(10, 1));
    }

    #[test]
    fn random_games_conserve_cards() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for seed in 0..64 {
            let mut game = Game::new(seed, 2);
            while !game.is_over() {
                assert!(is_partitioned(&game), "{}", game);
                let action = *game.legal().choose(rng).unwrap();
                game = game.apply(action);
            }
            assert!(game.legal().is_empty());
            assert!(Player::both().iter().any(|p| game.losses(*p) >= 2));
        }
    }

    #[test]
    fn utility_stays_below_normalizer() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        for seed in 0..32 {
            let mut game = Game::new(seed, 3);
            while !game.is_over() {
                for p in Player::both() {
                    let bound = game.threshold() as Utility * 10. + HEURISTIC_SLACK;
                    assert!(game.utility(p) < bound);
                }
                let action = *game.legal().choose(rng).unwrap();
                game = game.apply(action);
            }
        }
    }

    #[test]
    fn strict_play_forces_following_suit() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        for seed in 0..64 {
            let mut game = Game::new(seed, 1);
            while !game.is_over() {
                if let (Some(led), true) = (game.lead(), game.is_strict()) {
                    let hand = game.hand(game.turn());
                    let follow = hand.of(&led.suit());
                    for action in game.legal() {
                        let card = action.card().unwrap();
                        if !follow.is_empty() {
                            assert_eq!(card.suit(), led.suit());
                        }
                    }
                }
                let action = *game.legal().choose(rng).unwrap();
                game = game.apply(action);
            }
        }
    }

    #[test]
    fn exchange_swaps_jack_under_stock() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut seen = 0;
        for seed in 0..256 {
            let mut game = Game::new(seed, 1);
            while !game.is_over() && game.deal() == 0 {
                if game.legal().contains(&Action::Exchange) {
                    let before = game.trump();
                    let after = game.apply(Action::Exchange);
                    assert_eq!(after.swapped(), Some(before));
                    assert_eq!(after.trump().rank(), Rank::Jack);
                    assert_eq!(after.stock().last(), Some(&after.trump()));
                    assert!(after.hand(game.turn()).contains(&before));
                    assert_eq!(after.turn(), game.turn());
                    assert!(!after.legal().contains(&Action::Exchange));
                    seen += 1;
                    break;
                }
                let action = *game.legal().choose(rng).unwrap();
                game = game.apply(action);
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn illegal_actions_are_rejected() {
        let game = Game::new(4, 1);
        let foreign = game.hand(Player::P1).next().unwrap();
        assert!(game.try_apply(Action::Play(foreign)).is_err());
        assert!(game.try_apply(Action::Close).is_ok());
    }

    #[test]
    fn closing_keeps_the_lead() {
        let game = Game::new(5, 1);
        let closed = game.apply(Action::Close);
        assert!(closed.is_closed());
        assert!(closed.is_strict());
        assert_eq!(closed.turn(), game.turn());
        assert!(!closed.legal().contains(&Action::Close));
        assert_eq!(closed.closure().map(|c| c.closer()), Some(Player::P0));
        assert_eq!(closed.closure().map(|c| c.snubbed()), Some(true));
    }

    #[test]
    fn losing_a_match_ends_the_game() {
        let ref mut rng = SmallRng::seed_from_u64(6);
        let mut game = Game::new(11, 1);
        let mut deals = 0;
        while !game.is_over() {
            deals = game.deal();
            let action = *game.legal().choose(rng).unwrap();
            game = game.apply(action);
        }
        assert!(deals >= 2, "7 game points need at least 3 rounds");
        let loser = Player::both().into_iter().find(|p| game.losses(*p) == 1);
        assert!(loser.is_some());
    }
}
