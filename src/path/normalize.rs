use crate::chars::is_forbidden_path_char;
use crate::path::{PathError, PathResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationOptions {
    pub allow_duplicate_slash: bool,
    pub strict_trailing_slash: bool,
    pub case_sensitive: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            allow_duplicate_slash: false,
            strict_trailing_slash: false,
            case_sensitive: true,
        }
    }
}

/// Whether the segment at `index` of `total` survives normalization.
///
/// The root segment is always kept. An empty trailing segment is a trailing
/// slash; an empty interior one comes from `//`.
#[inline]
pub fn keep_segment(
    index: usize,
    total: usize,
    is_empty: bool,
    options: &NormalizationOptions,
) -> bool {
    if index == 0 || !is_empty {
        return true;
    }
    if index + 1 == total {
        options.strict_trailing_slash
    } else {
        options.allow_duplicate_slash
    }
}

/// Drops the empty segments `options` asks to ignore, for patterns and paths alike.
pub fn retain_segments<C, T>(
    items: C,
    is_empty: impl Fn(&T) -> bool,
    options: NormalizationOptions,
) -> impl Iterator<Item = T>
where
    C: IntoIterator<Item = T>,
    C::IntoIter: ExactSizeIterator,
{
    let iter = items.into_iter();
    let total = iter.len();
    iter.enumerate()
        .filter(move |(i, item)| keep_segment(*i, total, is_empty(item), &options))
        .map(|(_, item)| item)
}

#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn validate_path(path: &str) -> PathResult<()> {
    match path.char_indices().find(|(_, c)| is_forbidden_path_char(*c)) {
        Some((index, character)) => Err(PathError::InvalidCharacter {
            input: path.to_string(),
            character,
            index,
        }),
        None => Ok(()),
    }
}
