/// The five Schnapsen ranks, in trick-taking order.
/// Ten outranks King: the discriminant is strength, not face value.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Rank {
    #[default]
    Jack = 0,
    Queen = 1,
    King = 2,
    Ten = 3,
    Ace = 4,
}

impl Rank {
    pub const fn all() -> [Self; 5] {
        [Rank::Jack, Rank::Queen, Rank::King, Rank::Ten, Rank::Ace]
    }
    /// card points won when this rank is taken in a trick
    pub const fn points(&self) -> u8 {
        match self {
            Rank::Jack => 2,
            Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ten => 10,
            Rank::Ace => 11,
        }
    }
    /// Queen and King pair up into a marriage
    pub const fn partner(&self) -> Option<Self> {
        match self {
            Rank::Queen => Some(Rank::King),
            Rank::King => Some(Rank::Queen),
            _ => None,
        }
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Jack,
            1 => Rank::Queen,
            2 => Rank::King,
            3 => Rank::Ten,
            4 => Rank::Ace,
            _ => panic!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "T" => Ok(Rank::Ten),
            "A" => Ok(Rank::Ace),
            _ => Err(anyhow::anyhow!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ten => "T",
                Rank::Ace => "A",
            }
        )
    }
}
