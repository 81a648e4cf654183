//! The 20-card Schnapsen deck.
//!
//! - [`Card`]: a single card as a `(Rank, Suit)` tuple encoded in one byte
//! - [`Hand`]: an unordered set of cards as a 20-bit bitmask
//! - [`Deck`]: a shuffled, ordered collection for dealing
mod card;
mod deck;
mod hand;
mod rank;
mod suit;

pub use card::*;
pub use deck::*;
pub use hand::*;
pub use rank::*;
pub use suit::*;
