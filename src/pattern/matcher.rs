use crate::chars::MULTI_PARAM_SEPARATOR;
use memchr::{memchr, memmem};
use smallvec::SmallVec;

use super::{Segment, SegmentPart};

pub type ParamOffset = (usize, usize);
pub type CapturedParam<'p> = (&'p str, ParamOffset);
pub type CaptureList<'p> = SmallVec<[CapturedParam<'p>; 4]>;

/// Matches one concrete segment against a parameterized `Segment`.
///
/// `seg_l` is `seg` with the case folding the table applies to literals; both
/// share byte offsets. Captures are `(key, (offset, len))` into `seg`, and the
/// whole segment must be consumed.
#[tracing::instrument(level = "trace", skip(seg_l, segment), fields(seg = %seg, parts = segment.parts().len() as u64))]
pub fn match_segment<'p>(
    seg: &str,
    seg_l: &str,
    segment: &'p Segment,
    max_len: usize,
) -> Option<CaptureList<'p>> {
    let parts = segment.parts();
    let separated = segment.has_separator();
    let mut pos = 0usize;
    let mut out: CaptureList<'p> = SmallVec::new();

    for (idx, part) in parts.iter().enumerate() {
        match part {
            SegmentPart::Literal(lit) => {
                if !seg_l.get(pos..)?.starts_with(lit.as_str()) {
                    return None;
                }
                pos += lit.len();
            }
            SegmentPart::Separator => {
                if seg.as_bytes().get(pos) != Some(&MULTI_PARAM_SEPARATOR) {
                    return None;
                }
                pos += 1;
            }
            SegmentPart::Param(i) => {
                let param = segment.parameters().get(*i)?;

                if let Some(re) = param.pattern() {
                    let m = re.find(seg.get(pos..)?)?;
                    if m.end() == 0 || m.end() > max_len {
                        return None;
                    }
                    out.push((param.key(), (pos, m.end())));
                    pos += m.end();
                    continue;
                }

                let end = plain_capture_end(seg, seg_l, pos, parts, idx)?;
                if end <= pos || end - pos > max_len {
                    return None;
                }

                let (mut start, mut len) = (pos, end - pos);
                if separated {
                    let value = &seg.as_bytes()[start..end];
                    if find_top_level(value, MULTI_PARAM_SEPARATOR).is_some() {
                        return None;
                    }
                    if is_wrapped(value) {
                        start += 1;
                        len -= 2;
                    }
                }

                out.push((param.key(), (start, len)));
                pos = end;
            }
        }
    }

    (pos == seg.len()).then_some(out)
}

/// End of a regex-free capture starting at `pos`, decided by the part after it.
fn plain_capture_end(
    seg: &str,
    seg_l: &str,
    pos: usize,
    parts: &[SegmentPart],
    idx: usize,
) -> Option<usize> {
    match parts.get(idx + 1) {
        None => Some(seg.len()),
        Some(SegmentPart::Separator) => {
            find_top_level(&seg.as_bytes()[pos..], MULTI_PARAM_SEPARATOR).map(|p| pos + p)
        }
        Some(SegmentPart::Literal(lit)) if idx + 2 == parts.len() => {
            // a trailing literal pins the capture to the segment end
            let end = seg_l.len().checked_sub(lit.len())?;
            let tail = seg_l.get(end..)?;
            (end >= pos && tail == lit.as_str()).then_some(end)
        }
        Some(SegmentPart::Literal(lit)) => {
            let hay = &seg_l.as_bytes()[pos..];
            let rel = if lit.len() == 1 {
                memchr(lit.as_bytes()[0], hay)
            } else {
                memmem::find(hay, lit.as_bytes())
            };
            rel.map(|p| pos + p)
        }
        Some(SegmentPart::Param(_)) => None,
    }
}

/// First `target` byte outside parentheses.
fn find_top_level(bytes: &[u8], target: u8) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            _ if b == target && depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// `(...)` where the opening parenthesis closes at the last byte.
fn is_wrapped(bytes: &[u8]) -> bool {
    if bytes.len() <= 2 || bytes[0] != b'(' || bytes[bytes.len() - 1] != b')' {
        return false;
    }

    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == bytes.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}
