use crate::enums::HttpMethod;
use crate::path::PathError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("route already exists: {method} {pattern}")]
    DuplicateRoute { method: HttpMethod, pattern: String },
    #[error("segment '{segment}' of '{pattern}' conflicts with existing segment '{existing}'")]
    ConflictingParameter {
        pattern: String,
        segment: String,
        existing: String,
    },
    #[error("unsupported http method '{token}'")]
    UnsupportedMethod { token: String },
    #[error("segment '{segment}' exceeds the maximum length of {limit}")]
    SegmentTooLong { segment: String, limit: usize },
}

pub type RouteResult<T> = Result<T, RouteError>;
