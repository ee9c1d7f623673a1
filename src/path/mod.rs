mod error;
mod normalize;
mod split;

pub use error::{PathError, PathResult};
pub use normalize::{NormalizationOptions, keep_segment, retain_segments, validate_path};
pub use split::{PathSegments, SegmentSpan, split_path};
