//! Schnapsen rules for two players.
//!
//! - [`Game`]: the full-information state machine (legal actions, transitions, scoring)
//! - [`View`]: what one seat is allowed to see of a `Game`
//! - [`Action`]: play, marriage, trump exchange, closing the stock
//! - [`Player`]: one of the two seats
mod action;
mod game;
mod player;
mod view;

pub use action::*;
pub use game::*;
pub use player::*;
pub use view::*;
