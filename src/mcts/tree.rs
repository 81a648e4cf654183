use super::data::Data;
use super::game::TreeGame;
use super::node::Node;
use crate::Utility;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use rand::Rng;
use std::fmt::Formatter;
use std::fmt::Result;

/// The search tree, stored as an arena.
///
/// Nodes are game states with their statistics, edges are the actions
/// between them. The root is always `NodeIndex::new(0)`. Each node has at
/// most one incoming edge, so walking back to the root is a chain of
/// incoming-neighbor lookups instead of a reference cycle.
#[derive(Debug)]
pub struct Tree<G: TreeGame>(DiGraph<Data<G>, G::A>);

impl<G: TreeGame> Tree<G> {
    pub fn new<R: Rng>(game: G, rng: &mut R) -> Self {
        let mut graph = DiGraph::with_capacity(1, 0);
        graph.add_node(Data::new(game, rng));
        Self(graph)
    }
    pub fn root(&self) -> Node<'_, G> {
        self.at(NodeIndex::new(0))
    }
    pub fn at(&self, index: NodeIndex) -> Node<'_, G> {
        Node::from((index, &self.0))
    }
    pub fn size(&self) -> usize {
        self.0.node_count()
    }
    pub fn graph(&self) -> &DiGraph<Data<G>, G::A> {
        &self.0
    }
    /// Materialize the next untried child of `index`. None if every
    /// action has already been tried (or there never were any).
    pub fn grow<R: Rng>(&mut self, index: NodeIndex, rng: &mut R) -> Option<NodeIndex> {
        let action = self.0.node_weight_mut(index)?.untried()?;
        let child = self.0[index].game().apply(action);
        let child = self.0.add_node(Data::new(child, rng));
        self.0.add_edge(index, child, action);
        Some(child)
    }
    /// Credit `score` to `index` and every ancestor up to the root.
    pub fn backpropagate(&mut self, index: NodeIndex, score: Utility) {
        let path = self.at(index).ancestry();
        for index in path {
            self.0[index].credit(score);
        }
    }
    fn draw(&self, f: &mut Formatter, index: NodeIndex, prefix: &str) -> Result {
        let data = &self.0[index];
        if index == NodeIndex::new(0) {
            writeln!(f, "ROOT   {:>6} {:.3}", data.visits(), data.mean())?;
        }
        let children = self.at(index).children();
        let n = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let stem = if last { "└" } else { "├" };
            let gaps = if last { "    " } else { "│   " };
            let edge = child.incoming().expect("child has a parent edge");
            let data = child.data();
            writeln!(
                f,
                "{}{}──{:?} → {:>6} {:.3}",
                prefix,
                stem,
                edge,
                data.visits(),
                data.mean()
            )?;
            self.draw(f, child.index(), &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
}

impl<G: TreeGame> std::fmt::Display for Tree<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.draw(f, NodeIndex::new(0), "")
    }
}
