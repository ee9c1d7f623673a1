use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("path '{pattern}' must start with '/' or be the wildcard '*'")]
    MustStartWithSlashOrWildcard { pattern: String },
    #[error("regex group opened at index {start} in pattern '{pattern}' has no closing ')'")]
    UnterminatedRegex { pattern: String, start: usize },
    #[error("')' at index {index} in pattern '{pattern}' has no opening '('")]
    UnmatchedRegexClose { pattern: String, index: usize },
    #[error("wildcard '*' at index {index} in pattern '{pattern}' must be a whole final segment and appear once")]
    InvalidWildcard { pattern: String, index: usize },
    #[error(
        "invalid parameter name '{name}' at index {index} in pattern '{pattern}' (found {found:?})"
    )]
    InvalidParameterName {
        pattern: String,
        name: String,
        index: usize,
        found: Option<char>,
    },
    #[error("parameters at index {index} in pattern '{pattern}' need a separating delimiter")]
    MissingParameterSeparator { pattern: String, index: usize },
    #[error("segment '{segment}' in pattern '{pattern}' cannot be both optional and multi-parameter")]
    OptionalConflictsWithMulti { pattern: String, segment: String },
    #[error("'?' at index {index} in pattern '{pattern}' must directly follow a parameter that ends its segment")]
    MisplacedOptional { pattern: String, index: usize },
    #[error("regex '{regex}' in pattern '{pattern}' is invalid: {error}")]
    InvalidRegex {
        pattern: String,
        regex: String,
        error: String,
    },
    #[error("duplicate parameter name '{name}' in pattern '{pattern}'")]
    DuplicateParameterName { pattern: String, name: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
