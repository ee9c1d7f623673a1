use smallvec::SmallVec;

use crate::enums::HttpMethod;
use crate::path::PathSegments;
use crate::pattern::{CapturedParam, SegmentKind, match_segment};
use crate::trie::{NodeId, TrieTree};

/// Result of one walk: the matched leaf, or the first leaf reached without
/// a handler for the method.
pub(crate) struct Resolution<'t> {
    pub(crate) matched: Option<NodeId>,
    pub(crate) candidate: Option<NodeId>,
    pub(crate) captures: SmallVec<[CapturedParam<'t>; 8]>,
    /// Path segment index a matched wildcard binds from.
    pub(crate) wildcard: Option<usize>,
}

struct Resolver<'t, 'p, H> {
    tree: &'t TrieTree<H>,
    path: &'p PathSegments<'p>,
    method: HttpMethod,
    max_len: usize,
    captures: SmallVec<[CapturedParam<'t>; 8]>,
    candidate: Option<NodeId>,
    wildcard: Option<usize>,
}

#[tracing::instrument(level = "trace", skip(tree, path), fields(method = ?method, segments = path.len() as u64))]
pub(crate) fn resolve<'t, H>(
    tree: &'t TrieTree<H>,
    path: &PathSegments<'_>,
    method: HttpMethod,
    max_len: usize,
) -> Resolution<'t> {
    let mut resolver = Resolver {
        tree,
        path,
        method,
        max_len,
        captures: SmallVec::new(),
        candidate: None,
        wildcard: None,
    };

    let matched = resolver.walk(NodeId::ROOT, 0);

    Resolution {
        matched,
        candidate: resolver.candidate,
        captures: resolver.captures,
        wildcard: resolver.wildcard,
    }
}

impl<'t, 'p, H> Resolver<'t, 'p, H> {
    /// `depth` is the index of the next path segment to consume.
    fn walk(&mut self, node: NodeId, depth: usize) -> Option<NodeId> {
        if depth == self.path.len() {
            return self.finish(node);
        }

        let (tree, path) = (self.tree, self.path);
        let current = tree.node(node);
        let (seg, seg_l) = (path.segment(depth), path.lowered_segment(depth));

        if let Some(child) = current.static_child(seg_l)
            && let Some(found) = self.walk(child, depth + 1)
        {
            return Some(found);
        }

        for &child in current.dynamic_children() {
            let segment = tree.node(child).segment();

            if segment.kind() == SegmentKind::Wildcard {
                if let Some(found) = self.bind_wildcard(child, depth) {
                    return Some(found);
                }
                continue;
            }

            let checkpoint = self.captures.len();
            if let Some(caps) = match_segment(seg, seg_l, segment, self.max_len) {
                let base = path.span(depth).0;
                self.captures
                    .extend(caps.into_iter().map(|(k, (o, l))| (k, (base + o, l))));
                if let Some(found) = self.walk(child, depth + 1) {
                    return Some(found);
                }
                self.captures.truncate(checkpoint);
            }

            // an optional parameter may also match nothing
            if segment.kind() == SegmentKind::OptionalParam
                && let Some(found) = self.walk(child, depth)
            {
                return Some(found);
            }
        }

        None
    }

    /// All path segments consumed at `node`.
    fn finish(&mut self, node: NodeId) -> Option<NodeId> {
        let tree = self.tree;
        let current = tree.node(node);

        if current.is_leaf() {
            if current.handler(self.method).is_some() {
                return Some(node);
            }
            if self.candidate.is_none() {
                self.candidate = Some(node);
            }
        }

        for &child in current.dynamic_children() {
            match tree.node(child).segment().kind() {
                SegmentKind::OptionalParam | SegmentKind::Wildcard => {
                    if let Some(found) = self.finish(child) {
                        return Some(found);
                    }
                }
                _ => {}
            }
        }

        None
    }

    fn bind_wildcard(&mut self, node: NodeId, depth: usize) -> Option<NodeId> {
        let found = self.finish(node)?;
        if !self.path.remainder(depth).is_empty() {
            self.wildcard = Some(depth);
        }
        Some(found)
    }
}
