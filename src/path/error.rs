use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path contains disallowed character {character:?} at index {index} in '{input}'")]
    InvalidCharacter {
        input: String,
        character: char,
        index: usize,
    },
}

pub type PathResult<T> = Result<T, PathError>;
