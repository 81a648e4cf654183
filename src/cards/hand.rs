use super::card::Card;
use super::suit::Suit;

/// Hand represents an unordered set of Cards. the whole 20-card deck fits
/// in the 20 LSBs of a single u32, so set algebra (union, difference,
/// intersection) is one instruction and there is no heap allocation.
/// Each bit represents a unique card in the (unordered) set.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Hand(u32);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    /// all 20 cards
    pub const fn deck() -> Self {
        Self(Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u32::from(*card) != 0
    }
    pub fn add(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 | rhs.0)
    }
    pub fn union(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
    pub fn minus(&self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
    pub fn intersect(&self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
    pub fn of(&self, suit: &Suit) -> Self {
        Self(self.0 & u32::from(*suit))
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u32::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u32::from(card);
    }
    const fn mask() -> u32 {
        0x000FFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u32 isomorphism
impl From<u32> for Hand {
    fn from(n: u32) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u32 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u32::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter()
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(Self::from(Card::parse(s)?))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = Vec::<Card>::from(*self)
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        write!(f, "[{}]", cards.join(" "))
    }
}
