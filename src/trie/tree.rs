use super::{NodeId, TrieNode};
use crate::pattern::Segment;

#[derive(Debug)]
pub struct TrieTree<H> {
    pub(crate) nodes: Vec<TrieNode<H>>,
    pub(crate) max_depth: usize,
    pub(crate) route_count: usize,
}

impl<H> Default for TrieTree<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> TrieTree<H> {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(Segment::root(), None)],
            max_depth: 0,
            route_count: 0,
        }
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode<H> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TrieNode<H> {
        &mut self.nodes[id.index()]
    }

    /// Longest segment chain of any inserted pattern.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of `(method, pattern)` registrations.
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    /// Nodes in the arena, virtual root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Rebuilds the pattern that leads to `id`, for diagnostics.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut labels: Vec<&str> = Vec::new();
        let mut cursor = Some(id);

        while let Some(current) = cursor {
            if current == NodeId::ROOT {
                break;
            }
            let node = self.node(current);
            labels.push(node.segment.raw_label());
            cursor = node.parent;
        }

        labels.reverse();
        let joined = labels.join("/");
        if joined.is_empty() {
            "/".to_string()
        } else {
            joined
        }
    }
}
