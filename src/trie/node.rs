use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::enums::{HTTP_METHOD_COUNT, HttpMethod, MethodSet};
use crate::pattern::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Virtual root above the `/` segment and the bare `*` route.
    pub const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

pub(super) type StaticMap = FastHashMap<Box<str>, NodeId>;

#[derive(Debug)]
pub struct TrieNode<H> {
    pub(crate) segment: Segment,
    pub(crate) parent: Option<NodeId>,
    pub(crate) static_children: StaticMap,
    // kept sorted by segment precedence, then by literal specificity within a kind
    pub(crate) dynamic_children: SmallVec<[NodeId; 4]>,
    pub(crate) handlers: [Option<H>; HTTP_METHOD_COUNT],
    pub(crate) methods: MethodSet,
}

impl<H> TrieNode<H> {
    pub(crate) fn new(segment: Segment, parent: Option<NodeId>) -> Self {
        Self {
            segment,
            parent,
            static_children: StaticMap::default(),
            dynamic_children: SmallVec::new(),
            handlers: std::array::from_fn(|_| None),
            methods: MethodSet::empty(),
        }
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        !self.methods.is_empty()
    }

    #[inline]
    pub fn methods(&self) -> MethodSet {
        self.methods
    }

    #[inline]
    pub fn handler(&self, method: HttpMethod) -> Option<&H> {
        self.handlers[method.index()].as_ref()
    }

    #[inline]
    pub fn static_child(&self, label: &str) -> Option<NodeId> {
        self.static_children.get(label).copied()
    }

    #[inline]
    pub fn dynamic_children(&self) -> &[NodeId] {
        &self.dynamic_children
    }

    pub(crate) fn set_handler(&mut self, method: HttpMethod, handler: H) {
        self.handlers[method.index()] = Some(handler);
        self.methods |= MethodSet::of(method);
    }
}
