use crate::cards::*;

/// Everything a player can do on their turn.
///
/// Exchanging and closing do not end the turn: the same player
/// still has to lead a card afterwards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// lead or answer with a card
    Play(Card),
    /// announce Queen and King of one suit, leading the given one
    Marry(Card),
    /// swap the trump Jack from hand for the face-up trump card
    Exchange,
    /// close the stock: no more drawing, strict play from now on
    Close,
}

impl Action {
    pub fn card(&self) -> Option<Card> {
        match self {
            Action::Play(card) | Action::Marry(card) => Some(*card),
            Action::Exchange | Action::Close => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Play(card) => write!(f, "PLAY  {}", card),
            Action::Marry(card) => write!(f, "MARRY {}", card),
            Action::Exchange => write!(f, "EXCHANGE"),
            Action::Close => write!(f, "CLOSE"),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut words = s.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("PLAY"), Some(card), None) => Ok(Action::Play(Card::try_from(card)?)),
            (Some("MARRY"), Some(card), None) => Ok(Action::Marry(Card::try_from(card)?)),
            (Some("EXCHANGE"), None, None) => Ok(Action::Exchange),
            (Some("CLOSE"), None, None) => Ok(Action::Close),
            _ => Err(anyhow::anyhow!("invalid action: {:?}", s)),
        }
    }
}
