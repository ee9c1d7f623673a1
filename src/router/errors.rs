use crate::errors::RouteError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{pattern}'")]
    AddWhileSealed { pattern: String },
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type RouterResult<T> = Result<T, RouterError>;
