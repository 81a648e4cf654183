//! Game-agnostic UCT tree search.
//!
//! Anything implementing [`TreeGame`] can be searched. The tree is a
//! petgraph arena built fresh for every [`Search`] and dropped with it.
mod budget;
mod data;
mod game;
mod node;
mod search;
mod tree;
mod uct;

pub use budget::*;
pub use data::*;
pub use game::*;
pub use node::*;
pub use search::*;
pub use tree::*;
pub use uct::*;
