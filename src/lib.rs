pub mod chars;
pub mod enums;
pub mod errors;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod router;
pub mod trie;

pub use enums::{HttpMethod, MethodSet, MethodToken};
pub use errors::{RouteError, RouteResult};
pub use matcher::{MatchOutcome, Params};
pub use path::PathError;
pub use pattern::{PatternError, Segment, SegmentKind, tokenize};
pub use router::{
    RouteTable, Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
    RouterResult,
};
