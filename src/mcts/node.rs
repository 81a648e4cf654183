use super::data::Data;
use super::game::TreeGame;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// A Node is a wrapper around a NodeIndex and a &Graph.
/// because they are thin wrappers around an index, they're
/// cheap to Copy. holding reference to Graph is useful
/// for navigational methods.
#[derive(Debug)]
pub struct Node<'tree, G: TreeGame> {
    index: NodeIndex,
    graph: &'tree DiGraph<Data<G>, G::A>,
}

impl<G: TreeGame> Clone for Node<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<G: TreeGame> Copy for Node<'_, G> {}

impl<'tree, G: TreeGame> From<(NodeIndex, &'tree DiGraph<Data<G>, G::A>)> for Node<'tree, G> {
    fn from((index, graph): (NodeIndex, &'tree DiGraph<Data<G>, G::A>)) -> Self {
        Self { index, graph }
    }
}

impl<'tree, G: TreeGame> Node<'tree, G> {
    pub fn spawn(&self, index: NodeIndex) -> Node<'tree, G> {
        Self::from((index, self.graph))
    }
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    pub fn data(&self) -> &'tree Data<G> {
        self.graph
            .node_weight(self.index)
            .expect("valid node index")
    }
    pub fn game(&self) -> &'tree G {
        self.data().game()
    }
    /// the action that led here, None at the root
    pub fn incoming(&self) -> Option<G::A> {
        self.graph
            .edges_directed(self.index, Incoming)
            .next()
            .map(|edge| *edge.weight())
    }
    pub fn parent(&self) -> Option<Node<'tree, G>> {
        self.graph
            .neighbors_directed(self.index, Incoming)
            .next()
            .map(|index| self.spawn(index))
    }
    /// children in the order they were expanded
    pub fn children(&self) -> Vec<Node<'tree, G>> {
        let mut children = self
            .graph
            .neighbors_directed(self.index, Outgoing)
            .collect::<Vec<_>>();
        children.sort();
        children
            .into_iter()
            .map(|index| self.spawn(index))
            .collect()
    }
    /// this node, its parent, and so on up to the root
    pub fn ancestry(&self) -> Vec<NodeIndex> {
        std::iter::successors(Some(*self), |node| node.parent())
            .map(|node| node.index())
            .collect()
    }
}
