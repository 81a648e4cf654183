use super::rank::Rank;
use super::suit::Suit;

/// A Schnapsen card encoded as a single byte.
///
/// The 20 cards are bijectively mapped to `0..20` where the encoding is
/// `suit * 5 + rank`, so each suit owns five contiguous bits of a [`Hand`].
/// Identity is (rank, suit): two cards are equal iff they are the same card.
///
/// Trump status and the marriage partner are not stored. Both are derived
/// on demand from the deal context, so a card never carries mutable state.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 5)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 5)
    }
    pub fn points(&self) -> u8 {
        self.rank().points()
    }
    /// the other half of a marriage, if this card can be married at all
    pub fn partner(&self) -> Option<Card> {
        self.rank()
            .partner()
            .map(|rank| Card::from((rank, self.suit())))
    }
    pub fn is_trump(&self, trump: Suit) -> bool {
        self.suit() == trump
    }
    /// whether `other`, played after `self` was led, takes the trick
    pub fn loses_to(&self, other: &Card, trump: Suit) -> bool {
        if self.suit() == other.suit() {
            other.rank() > self.rank()
        } else {
            other.is_trump(trump)
        }
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(s) * 5 + u8::from(r))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a suit-sorted deck 0..20
/// Qh
/// 11
/// 0b00001011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 20, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u32 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Qh
/// xxxxxxxxxxxx 00000000100000000000
impl From<Card> for u32 {
    fn from(c: Card) -> u32 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                let rank = Rank::try_from(rank.to_string().as_str())?;
                let suit = Suit::try_from(suit.to_string().as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(anyhow::anyhow!("card must be 2 characters: {:?}", s)),
        }
    }
}
impl Card {
    /// Parses whitespace-separated card notations, e.g. `"Qh Kh As"`.
    pub fn parse(s: &str) -> anyhow::Result<Vec<Self>> {
        s.split_whitespace().map(Self::try_from).collect()
    }
}
