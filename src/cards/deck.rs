use super::card::Card;
use super::hand::Hand;
use rand::Rng;
use rand::seq::SliceRandom;

/// A shuffled 20-card deck, dealt from the front.
///
/// Unlike [`Hand`], a Deck is ordered: dealing order matters for who
/// receives which card and for the stock, whose last card is the face-up
/// trump indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut cards = Vec::<Card>::from(Hand::deck());
        cards.shuffle(rng);
        Self(cards)
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// deal the next `n` cards as a Hand
    pub fn deal(&mut self, n: usize) -> Hand {
        assert!(self.0.len() >= n, "deck exhausted");
        self.0.drain(..n).collect()
    }
    pub fn draw(&mut self) -> Option<Card> {
        match self.0.is_empty() {
            true => None,
            false => Some(self.0.remove(0)),
        }
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
