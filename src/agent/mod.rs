//! The decision engine: rebuild a hidden-information view into one
//! concrete world, then search it.
mod config;
mod decide;
mod determinize;
mod game;

pub use config::*;
pub use decide::*;
pub use determinize::*;
