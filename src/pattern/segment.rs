use regex::Regex;
use smallvec::{SmallVec, smallvec};
use std::sync::Arc;

use super::PatternResult;
use super::lexer::compile_group;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SegmentKind {
    Static,
    /// Literal that was written with a doubled `::`.
    Escaped,
    Param,
    OptionalParam,
    MultiParam,
    ParamRegex,
    Regex,
    MultiRegex,
    Wildcard,
}

impl SegmentKind {
    /// Lower is tried first among dynamic siblings.
    #[inline]
    pub fn precedence(self) -> u8 {
        match self {
            SegmentKind::Static | SegmentKind::Escaped => 0,
            SegmentKind::Param => 1,
            SegmentKind::OptionalParam => 2,
            SegmentKind::MultiParam => 3,
            SegmentKind::ParamRegex => 4,
            SegmentKind::Regex => 5,
            SegmentKind::MultiRegex => 6,
            SegmentKind::Wildcard => 7,
        }
    }

    #[inline]
    pub fn is_static(self) -> bool {
        matches!(self, SegmentKind::Static | SegmentKind::Escaped)
    }

    #[inline]
    pub fn has_regex(self) -> bool {
        matches!(
            self,
            SegmentKind::ParamRegex | SegmentKind::Regex | SegmentKind::MultiRegex
        )
    }

    /// Kinds that bind one whole segment without a regex.
    #[inline]
    fn is_plain_param(self) -> bool {
        matches!(
            self,
            SegmentKind::Param | SegmentKind::OptionalParam | SegmentKind::MultiParam
        )
    }
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub(crate) name: Option<String>,
    pub(crate) literal_value: Option<String>,
    pub(crate) optional: bool,
    pub(crate) pattern: Option<Arc<Regex>>,
    pub(crate) key: Box<str>,
}

impl Parameter {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Regex source exactly as written, parentheses included.
    pub fn literal_value(&self) -> Option<&str> {
        self.literal_value.as_deref()
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_deref()
    }

    /// Binding name: the parameter name, or the ordinal of an anonymous capture.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.literal_value == other.literal_value
            && self.optional == other.optional
            && self.key == other.key
    }
}

impl Eq for Parameter {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentPart {
    Literal(String),
    Param(usize),
    /// Multi-parameter `-` delimiter.
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub(crate) raw_label: String,
    pub(crate) kind: SegmentKind,
    pub(crate) parameters: SmallVec<[Parameter; 2]>,
    pub(crate) parts: SmallVec<[SegmentPart; 4]>,
}

impl Segment {
    pub(crate) fn literal(label: String, kind: SegmentKind) -> Self {
        let parts = if label.is_empty() {
            SmallVec::new()
        } else {
            smallvec![SegmentPart::Literal(label.clone())]
        };
        Self {
            raw_label: label,
            kind,
            parameters: SmallVec::new(),
            parts,
        }
    }

    pub(crate) fn root() -> Self {
        Self::literal(String::new(), SegmentKind::Static)
    }

    pub(crate) fn wildcard() -> Self {
        Self {
            raw_label: "*".to_string(),
            kind: SegmentKind::Wildcard,
            parameters: SmallVec::new(),
            parts: SmallVec::new(),
        }
    }

    pub fn raw_label(&self) -> &str {
        &self.raw_label
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parts(&self) -> &[SegmentPart] {
        &self.parts
    }

    pub fn has_separator(&self) -> bool {
        self.parts.contains(&SegmentPart::Separator)
    }

    /// Literal text before the first parameter.
    pub fn prefix(&self) -> &str {
        match self.parts.first() {
            Some(SegmentPart::Literal(lit)) if !self.kind.is_static() => lit,
            _ => "",
        }
    }

    /// Literal bytes the segment pins down; more is tried first among same-kind siblings.
    pub fn specificity(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match part {
                SegmentPart::Literal(lit) => lit.len(),
                _ => 0,
            })
            .sum()
    }

    /// Same kind, literals, separators, regex sources and optional flags; names ignored.
    fn signature_eq(&self, other: &Segment) -> bool {
        if self.kind != other.kind || self.parts.len() != other.parts.len() {
            return false;
        }
        self.parts
            .iter()
            .zip(other.parts.iter())
            .all(|(a, b)| match (a, b) {
                (SegmentPart::Literal(la), SegmentPart::Literal(lb)) => la == lb,
                (SegmentPart::Separator, SegmentPart::Separator) => true,
                (SegmentPart::Param(ia), SegmentPart::Param(ib)) => {
                    let (pa, pb) = (&self.parameters[*ia], &other.parameters[*ib]);
                    pa.literal_value == pb.literal_value && pa.optional == pb.optional
                }
                _ => false,
            })
    }

    /// Two registrations that may share one trie node.
    pub fn same_shape(&self, other: &Segment) -> bool {
        self.signature_eq(other)
            && self
                .parameters
                .iter()
                .zip(other.parameters.iter())
                .all(|(a, b)| a.name == b.name)
    }

    /// Siblings that would be indistinguishable for the same literal input.
    pub fn conflicts_with(&self, other: &Segment) -> bool {
        if self.same_shape(other) {
            return false;
        }
        if self.signature_eq(other) {
            return true;
        }

        let optional_involved =
            self.kind == SegmentKind::OptionalParam || other.kind == SegmentKind::OptionalParam;

        optional_involved
            && self.kind.is_plain_param()
            && other.kind.is_plain_param()
            && self.prefix() == other.prefix()
    }

    /// ASCII-lowercases every literal the matcher compares against the path
    /// and recompiles regex constraints case-insensitively.
    pub(crate) fn fold_case(&mut self, pattern: &str) -> PatternResult<()> {
        if self.kind.is_static() {
            self.raw_label.make_ascii_lowercase();
        }
        for part in self.parts.iter_mut() {
            if let SegmentPart::Literal(lit) = part {
                lit.make_ascii_lowercase();
            }
        }
        for param in self.parameters.iter_mut() {
            if let Some(source) = &param.literal_value {
                param.pattern = Some(compile_group(pattern, source, true)?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pattern::tokenize;

    fn last(pattern: &str) -> super::Segment {
        tokenize(pattern)
            .expect("pattern should tokenize")
            .pop()
            .expect("at least one segment")
    }

    #[test]
    fn params_with_different_names_conflict() {
        let a = last("/users/:id");
        let b = last("/users/:name");
        assert!(a.conflicts_with(&b));
        assert!(!a.same_shape(&b));
    }

    #[test]
    fn identical_params_share_a_node() {
        let a = last("/users/:id");
        let b = last("/users/:id");
        assert!(a.same_shape(&b));
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn distinct_regex_sources_coexist() {
        let a = last("/users/:id(\\d+)");
        let b = last("/users/:slug([a-z]+)");
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn optional_param_conflicts_with_multi_param() {
        let a = last("/near/:id?");
        let b = last("/near/:lat-:lng");
        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
    }

    #[test]
    fn prefixed_params_are_distinguishable() {
        let a = last("/api/v:version");
        let b = last("/api/r:revision");
        assert!(!a.conflicts_with(&b));
        assert_eq!(a.prefix(), "v");
    }

    #[test]
    fn fold_case_lowers_literals_only() {
        let mut seg = last("/files/IMG:id(\\D+).PNG");
        seg.fold_case("/files/IMG:id(\\D+).PNG")
            .expect("regex should recompile");
        assert_eq!(seg.prefix(), "img");
        assert_eq!(seg.parameters()[0].literal_value(), Some("(\\D+)"));
    }

    #[test]
    fn fold_case_makes_regex_case_insensitive() {
        let mut seg = last("/x/(ABC)");
        seg.fold_case("/x/(ABC)").expect("regex should recompile");
        let re = seg.parameters()[0].pattern().expect("compiled constraint");
        assert!(re.is_match("abc"));
        assert!(re.is_match("AbC"));
    }

    #[test]
    fn specificity_counts_literal_bytes() {
        assert_eq!(last("/api/:id").specificity(), 0);
        assert_eq!(last("/api/v:ver").specificity(), 1);
        assert_eq!(last("/f/:name::json").specificity(), 5);
        assert_eq!(last("/d/(\\d+)px").specificity(), 2);
    }
}
