use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

use crate::errors::{RouteError, RouteResult};

pub const HTTP_METHOD_COUNT: usize = 16;

#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Patch = 3,
    Delete = 4,
    Head = 5,
    Options = 6,
    Propfind = 7,
    Proppatch = 8,
    Mkcol = 9,
    Copy = 10,
    Move = 11,
    Lock = 12,
    Unlock = 13,
    Trace = 14,
    Search = 15,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; HTTP_METHOD_COUNT] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Propfind,
        HttpMethod::Proppatch,
        HttpMethod::Mkcol,
        HttpMethod::Copy,
        HttpMethod::Move,
        HttpMethod::Lock,
        HttpMethod::Unlock,
        HttpMethod::Trace,
        HttpMethod::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Propfind => "PROPFIND",
            HttpMethod::Proppatch => "PROPPATCH",
            HttpMethod::Mkcol => "MKCOL",
            HttpMethod::Copy => "COPY",
            HttpMethod::Move => "MOVE",
            HttpMethod::Lock => "LOCK",
            HttpMethod::Unlock => "UNLOCK",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Search => "SEARCH",
        }
    }

    /// Resolves a method token, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(token))
    }

    pub fn is_supported(token: &str) -> bool {
        Self::from_token(token).is_some()
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| RouteError::UnsupportedMethod {
            token: s.to_string(),
        })
    }
}

/// Anything `insert`/`match_route` accept as a method.
pub trait MethodToken {
    fn to_method(&self) -> RouteResult<HttpMethod>;
}

impl MethodToken for HttpMethod {
    fn to_method(&self) -> RouteResult<HttpMethod> {
        Ok(*self)
    }
}

impl MethodToken for &str {
    fn to_method(&self) -> RouteResult<HttpMethod> {
        self.parse()
    }
}

impl MethodToken for String {
    fn to_method(&self) -> RouteResult<HttpMethod> {
        self.parse()
    }
}

impl MethodToken for &String {
    fn to_method(&self) -> RouteResult<HttpMethod> {
        self.parse()
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MethodSet: u16 {
        const GET = 1 << 0;
        const POST = 1 << 1;
        const PUT = 1 << 2;
        const PATCH = 1 << 3;
        const DELETE = 1 << 4;
        const HEAD = 1 << 5;
        const OPTIONS = 1 << 6;
        const PROPFIND = 1 << 7;
        const PROPPATCH = 1 << 8;
        const MKCOL = 1 << 9;
        const COPY = 1 << 10;
        const MOVE = 1 << 11;
        const LOCK = 1 << 12;
        const UNLOCK = 1 << 13;
        const TRACE = 1 << 14;
        const SEARCH = 1 << 15;
    }
}

impl MethodSet {
    #[inline(always)]
    pub fn of(method: HttpMethod) -> Self {
        Self::from_bits_retain(1 << method.index())
    }

    #[inline(always)]
    pub fn has(&self, method: HttpMethod) -> bool {
        self.contains(Self::of(method))
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> Vec<HttpMethod> {
        HttpMethod::ALL
            .iter()
            .copied()
            .filter(|m| self.has(*m))
            .collect()
    }
}

impl From<HttpMethod> for MethodSet {
    fn from(method: HttpMethod) -> Self {
        MethodSet::of(method)
    }
}
