mod insert;
mod node;
mod tree;

pub use node::{NodeId, TrieNode};
pub use tree::TrieTree;
