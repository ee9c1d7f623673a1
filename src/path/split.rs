use crate::chars::PATH_SEPARATOR;
use memchr::memchr_iter;
use smallvec::SmallVec;
use std::borrow::Cow;

use super::{NormalizationOptions, retain_segments};

pub type SegmentSpan = (usize, usize);

/// Byte spans of the `/`-separated segments of `path`, root segment first.
///
/// `path` must start with `/`; `/` alone yields only the root span.
pub fn split_path(path: &str) -> SmallVec<[SegmentSpan; 8]> {
    let mut spans: SmallVec<[SegmentSpan; 8]> = SmallVec::new();
    spans.push((0, 0));

    if path.len() <= 1 {
        return spans;
    }

    let mut start = 1usize;
    for pos in memchr_iter(PATH_SEPARATOR, &path.as_bytes()[1..]) {
        let end = pos + 1;
        spans.push((start, end));
        start = end + 1;
    }
    spans.push((start, path.len()));
    spans
}

/// A concrete request path split for matching.
#[derive(Debug)]
pub struct PathSegments<'a> {
    original: &'a str,
    lowered: Cow<'a, str>,
    spans: SmallVec<[SegmentSpan; 8]>,
}

impl<'a> PathSegments<'a> {
    pub fn new(path: &'a str, options: &NormalizationOptions) -> Self {
        let spans = retain_segments(split_path(path), |&(s, e): &SegmentSpan| s == e, *options).collect();

        let lowered = if !options.case_sensitive && path.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(path.to_ascii_lowercase())
        } else {
            Cow::Borrowed(path)
        };

        Self {
            original: path,
            lowered,
            spans,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    #[inline]
    pub fn original(&self) -> &'a str {
        self.original
    }

    #[inline]
    pub fn span(&self, index: usize) -> SegmentSpan {
        self.spans[index]
    }

    #[inline]
    pub fn segment(&self, index: usize) -> &str {
        let (s, e) = self.spans[index];
        &self.original[s..e]
    }

    #[inline]
    pub fn lowered_segment(&self, index: usize) -> &str {
        let (s, e) = self.spans[index];
        &self.lowered[s..e]
    }

    /// Kept segments from `index` onward joined by `/`; the root segment is skipped.
    ///
    /// Borrows from the path unless normalization dropped a segment in between.
    pub fn remainder(&self, index: usize) -> Cow<'a, str> {
        let original = self.original;
        let kept = self.spans.get(index.max(1)..).unwrap_or_default();
        let (Some(first), Some(last)) = (kept.first(), kept.last()) else {
            return Cow::Borrowed("");
        };

        if kept.windows(2).all(|w| w[1].0 == w[0].1 + 1) {
            return Cow::Borrowed(&original[first.0..last.1]);
        }

        let mut joined = String::with_capacity(last.1 - first.0);
        for (n, &(s, e)) in kept.iter().enumerate() {
            if n > 0 {
                joined.push(PATH_SEPARATOR as char);
            }
            joined.push_str(&original[s..e]);
        }
        Cow::Owned(joined)
    }
}
