mod params;
mod resolver;

use crate::enums::HttpMethod;

pub use params::{Params, WILDCARD_KEY};
pub(crate) use params::captures_to_params;
pub(crate) use resolver::resolve;

/// Outcome of a lookup; misses are values, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<H> {
    Matched { handler: H, bindings: Params },
    NotFound,
    MethodNotAllowed { allowed_methods: Vec<HttpMethod> },
}

impl<H> MatchOutcome<H> {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    pub fn handler(&self) -> Option<&H> {
        match self {
            MatchOutcome::Matched { handler, .. } => Some(handler),
            _ => None,
        }
    }

    pub fn bindings(&self) -> Option<&Params> {
        match self {
            MatchOutcome::Matched { bindings, .. } => Some(bindings),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Matched { .. } => "matched",
            MatchOutcome::NotFound => "not_found",
            MatchOutcome::MethodNotAllowed { .. } => "method_not_allowed",
        }
    }
}
