mod error;
mod lexer;
mod matcher;
mod segment;

pub use error::{PatternError, PatternResult};
pub use lexer::tokenize;
pub use matcher::{CaptureList, CapturedParam, ParamOffset, match_segment};
pub use segment::{Parameter, Segment, SegmentKind, SegmentPart};
