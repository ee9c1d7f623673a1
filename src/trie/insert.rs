use crate::enums::HttpMethod;
use crate::errors::{RouteError, RouteResult};
use crate::pattern::Segment;

use super::{NodeId, TrieNode, TrieTree};

impl<H> TrieTree<H> {
    /// Attaches `handler` under `method` at the end of `segments`.
    ///
    /// Every conflict is detected while walking the existing nodes, before any
    /// node is created, so a failed insert leaves the tree as it was.
    #[tracing::instrument(level = "trace", skip(self, segments, handler), fields(pattern = %pattern, method = ?method, segments = segments.len() as u64))]
    pub fn insert(
        &mut self,
        pattern: &str,
        segments: Vec<Segment>,
        method: HttpMethod,
        handler: H,
    ) -> RouteResult<NodeId> {
        let depth = segments.len();
        let mut current = NodeId::ROOT;
        let mut existing = 0usize;

        for segment in &segments {
            match self.find_child(current, segment, pattern)? {
                Some(child) => {
                    current = child;
                    existing += 1;
                }
                None => break,
            }
        }

        if existing == depth && self.node(current).handler(method).is_some() {
            tracing::debug!(pattern = %pattern, method = %method, "duplicate route rejected");
            return Err(RouteError::DuplicateRoute {
                method,
                pattern: pattern.to_string(),
            });
        }

        let created = depth - existing;
        for segment in segments.into_iter().skip(existing) {
            current = self.push_child(current, segment);
        }

        self.node_mut(current).set_handler(method, handler);
        self.max_depth = self.max_depth.max(depth);
        self.route_count += 1;

        tracing::event!(
            tracing::Level::TRACE,
            operation = "insert",
            method = ?method,
            created = created as u64,
            depth = depth as u64,
            nodes = self.nodes.len() as u64
        );

        Ok(current)
    }

    /// Child of `parent` that `segment` reuses, erroring on an ambiguous sibling.
    fn find_child(
        &self,
        parent: NodeId,
        segment: &Segment,
        pattern: &str,
    ) -> RouteResult<Option<NodeId>> {
        let node = self.node(parent);

        if segment.kind().is_static() {
            return Ok(node.static_child(segment.raw_label()));
        }

        for &child in node.dynamic_children() {
            let other = &self.node(child).segment;
            if other.same_shape(segment) {
                return Ok(Some(child));
            }
            if other.conflicts_with(segment) {
                tracing::debug!(
                    pattern = %pattern,
                    segment = %segment.raw_label(),
                    existing = %other.raw_label(),
                    "conflicting parameter rejected"
                );
                return Err(RouteError::ConflictingParameter {
                    pattern: pattern.to_string(),
                    segment: segment.raw_label().to_string(),
                    existing: self.path_of(child),
                });
            }
        }

        Ok(None)
    }

    fn push_child(&mut self, parent: NodeId, segment: Segment) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let is_static = segment.kind().is_static();
        let label: Box<str> = segment.raw_label().into();

        if is_static {
            self.nodes.push(TrieNode::new(segment, Some(parent)));
            self.node_mut(parent).static_children.insert(label, id);
            return id;
        }

        // kind precedence, then literal specificity, then label; never registration order
        let rank = sibling_rank(&segment);
        let at = {
            let siblings = self.node(parent).dynamic_children();
            siblings
                .iter()
                .position(|c| sibling_rank(&self.node(*c).segment) > rank)
                .unwrap_or(siblings.len())
        };
        self.nodes.push(TrieNode::new(segment, Some(parent)));
        self.node_mut(parent).dynamic_children.insert(at, id);
        id
    }
}

fn sibling_rank(segment: &Segment) -> (u8, std::cmp::Reverse<usize>, &str) {
    (
        segment.kind().precedence(),
        std::cmp::Reverse(segment.specificity()),
        segment.raw_label(),
    )
}
