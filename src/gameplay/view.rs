use super::*;
use crate::cards::*;

/// The imperfect-information view of a [`Game`] from one seat.
///
/// Exposes exactly what a player at the table knows: their own hand, every
/// completed trick, the declared marriages, the face-up trump (and the card
/// it replaced, after an exchange), the card led into the current trick,
/// how many cards the stock holds, and the scoreboard. The opponent's hand,
/// the order of the stock and the seed of future deals stay hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub(crate) hero: Player,
    pub(crate) turn: Player,
    pub(crate) deal: u32,
    pub(crate) dealer: Player,
    pub(crate) leader: Player,
    pub(crate) hand: Hand,
    pub(crate) lead: Option<Card>,
    pub(crate) trump: Card,
    pub(crate) swapped: Option<Card>,
    pub(crate) stock: usize,
    pub(crate) closure: Option<Closure>,
    pub(crate) tricks: [Vec<[Card; 2]>; 2],
    pub(crate) marriages: [Hand; 2],
    pub(crate) points: [u8; 2],
    pub(crate) pending: [u8; 2],
    pub(crate) scores: [u8; 2],
    pub(crate) losses: [u8; 2],
    pub(crate) threshold: u8,
    pub(crate) legal: Vec<Action>,
}

impl From<(&Game, Player)> for View {
    fn from((game, hero): (&Game, Player)) -> Self {
        Self {
            hero,
            turn: game.turn(),
            deal: game.deal(),
            dealer: game.dealer(),
            leader: game.leader(),
            hand: game.hand(hero),
            lead: game.lead(),
            trump: game.trump(),
            swapped: game.swapped(),
            stock: game.stock().len(),
            closure: game.closure(),
            tricks: Player::both().map(|p| game.tricks(p).to_vec()),
            marriages: Player::both().map(|p| game.marriages(p)),
            points: Player::both().map(|p| game.points(p)),
            pending: Player::both().map(|p| game.pending(p)),
            scores: Player::both().map(|p| game.scores(p)),
            losses: Player::both().map(|p| game.losses(p)),
            threshold: game.threshold(),
            legal: match game.turn() == hero {
                true => game.legal(),
                false => vec![],
            },
        }
    }
}

impl View {
    pub fn hero(&self) -> Player {
        self.hero
    }
    pub fn opponent(&self) -> Player {
        self.hero.other()
    }
    pub fn turn(&self) -> Player {
        self.turn
    }
    pub fn deal(&self) -> u32 {
        self.deal
    }
    pub fn dealer(&self) -> Player {
        self.dealer
    }
    pub fn leader(&self) -> Player {
        self.leader
    }
    pub fn hand(&self) -> Hand {
        self.hand
    }
    pub fn lead(&self) -> Option<Card> {
        self.lead
    }
    pub fn trump(&self) -> Card {
        self.trump
    }
    pub fn swapped(&self) -> Option<Card> {
        self.swapped
    }
    /// cards left in the stock, counting the face-up trump under it
    pub fn stock(&self) -> usize {
        self.stock
    }
    pub fn closure(&self) -> Option<Closure> {
        self.closure
    }
    pub fn is_closed(&self) -> bool {
        self.closure.is_some()
    }
    pub fn tricks(&self, player: Player) -> &[[Card; 2]] {
        &self.tricks[usize::from(player)]
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
    pub fn marriages(&self, player: Player) -> Hand {
        self.marriages[usize::from(player)]
    }
    pub fn points(&self, player: Player) -> u8 {
        self.points[usize::from(player)]
    }
    pub fn pending(&self, player: Player) -> u8 {
        self.pending[usize::from(player)]
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
    /// legal actions of the hero; empty when it is not their turn
    pub fn legal(&self) -> &[Action] {
        &self.legal
    }
    /// How many cards the opponent must be holding. Whoever led into the
    /// current trick already gave up one card of their hand.
    pub fn hidden(&self) -> usize {
        match self.lead {
            None => self.hand.size(),
            Some(_) if self.leader == self.hero => self.hand.size() + 1,
            Some(_) => self.hand.size().saturating_sub(1),
        }
    }
}
