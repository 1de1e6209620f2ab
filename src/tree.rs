use tracing::{debug, trace};

use crate::frequency::FrequencyTable;
use crate::queue::PriorityQueue;
use crate::symbol::Symbol;


/// Index of a node inside a [`HuffmanTree`] arena.
pub type NodeId = usize;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {

    Parent { count: usize, left: NodeId, right: NodeId },
    Leaf { count: usize, value: T },

}

impl<T> Node<T> {

    /// Weight of the node. Trees read back from a container carry no weights and
    /// report 0 everywhere.
    pub const fn count(&self) -> usize {
        match self {
            Node::Parent { count, .. } |
            Node::Leaf { count, .. }
                => *count
        }
    }


    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

}


/// Binary prefix-code tree stored as a flat arena.
///
/// Every node is owned by the arena and children are referenced by index, so the
/// tree cannot contain cycles: a parent is always pushed after both its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<T> {

    nodes: Vec<Node<T>>,
    root: NodeId

}

impl<T> HuffmanTree<T>
where
    T: Symbol
{

    /// Builds the tree minimizing the weighted path length of the table's symbols.
    ///
    /// The two lightest nodes are merged until one is left, the first one popped
    /// becoming the left child. Equal weights are popped in creation order: leaves
    /// in order of first appearance, then merged nodes in the order they were made.
    ///
    /// Returns `None` for an empty table. A table with a single symbol yields a
    /// tree whose root is that symbol's leaf.
    pub fn build(frequencies: &FrequencyTable<T>) -> Option<Self> {

        let mut nodes = Vec::with_capacity(frequencies.len() * 2);
        let mut queue = PriorityQueue::with_capacity(frequencies.len());

        for (value, count) in frequencies.iter() {
            queue.push(count, nodes.len());
            nodes.push(Node::Leaf { count, value });
        }

        while queue.len() > 1 {

            let (Some((left_count, left)), Some((right_count, right))) = (queue.pop(), queue.pop()) else {
                break;
            };

            let count = left_count + right_count;
            trace!(left, right, count, "merging nodes");

            queue.push(count, nodes.len());
            nodes.push(Node::Parent { count, left, right });
        }

        let (_, root) = queue.pop()?;

        debug!(symbols = frequencies.len(), nodes = nodes.len(), "built prefix tree");

        Some(Self { nodes, root })
    }


    /// Assembles a tree from an arena. The caller guarantees that every index is in
    /// bounds and that every node except `root` has exactly one parent.
    pub(crate) fn from_parts(nodes: Vec<Node<T>>, root: NodeId) -> Self {
        Self { nodes, root }
    }


    pub const fn root(&self) -> NodeId {
        self.root
    }


    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id]
    }


    /// Child of `id` on the `right` side (bit 1) or left side (bit 0), if any.
    pub fn child(&self, id: NodeId, right: bool) -> Option<NodeId> {
        match self.nodes[id] {
            Node::Parent { left, right: r, .. } => Some(if right { r } else { left }),
            Node::Leaf { .. } => None,
        }
    }


    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }


    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }


    pub fn leaf_count(&self) -> usize {
        self.nodes.iter()
            .filter(|node| node.is_leaf())
            .count()
    }


    /// Sum of weight times depth over all leaves.
    pub fn weighted_path_length(&self) -> usize {

        let mut total = 0;
        let mut stack = vec![(self.root, 0)];

        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                Node::Parent { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                },
                Node::Leaf { count, .. } => total += count * depth,
            }
        }

        total
    }

}
