use crate::chars::{
    is_multi_param_separator, is_param_name_continue, is_param_name_start, is_path_separator,
    is_reserved_identifier,
};
use hashbrown::HashSet;
use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;
use std::sync::Arc;

use super::{Parameter, PatternError, PatternResult, Segment, SegmentKind, SegmentPart};

#[derive(Default)]
struct PatternState {
    anonymous: usize,
    names: HashSet<String>,
}

/// Splits a route pattern into typed segments, root segment first.
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn tokenize(pattern: &str) -> PatternResult<Vec<Segment>> {
    if pattern == "*" {
        return Ok(vec![Segment::wildcard()]);
    }

    match pattern.chars().next() {
        Some(c) if is_path_separator(c) => {}
        Some('*') => {
            return Err(PatternError::InvalidWildcard {
                pattern: pattern.to_string(),
                index: 0,
            });
        }
        _ => {
            return Err(PatternError::MustStartWithSlashOrWildcard {
                pattern: pattern.to_string(),
            });
        }
    }

    let raw = split_pattern(pattern)?;
    let mut state = PatternState::default();
    let mut segments = Vec::with_capacity(raw.len() + 1);
    segments.push(Segment::root());

    let total = raw.len();
    for (n, (offset, text)) in raw.into_iter().enumerate() {
        let segment = SegmentLexer::new(pattern, text, offset, &mut state).lex()?;

        if segment.kind == SegmentKind::Wildcard && n + 1 != total {
            return Err(PatternError::InvalidWildcard {
                pattern: pattern.to_string(),
                index: offset,
            });
        }

        segments.push(segment);
    }

    tracing::event!(
        tracing::Level::TRACE,
        operation = "tokenize",
        segments = segments.len() as u64
    );

    Ok(segments)
}

/// Segments after the leading `/`, split at group depth 0, with their byte offsets.
fn split_pattern(pattern: &str) -> PatternResult<SmallVec<[(usize, &str); 8]>> {
    let bytes = pattern.as_bytes();
    let mut out = SmallVec::new();

    if bytes.len() == 1 {
        return Ok(out);
    }

    let mut depth = 0usize;
    let mut open_at = 0usize;
    let mut start = 1usize;
    let mut i = 1usize;

    while i < bytes.len() {
        let b = bytes[i];

        if depth > 0 && b == b'\\' {
            i += 2;
            continue;
        }

        match b {
            b'(' => {
                if depth == 0 {
                    open_at = i;
                }
                depth += 1;
            }
            b')' => {
                if depth == 0 {
                    return Err(PatternError::UnmatchedRegexClose {
                        pattern: pattern.to_string(),
                        index: i,
                    });
                }
                depth -= 1;
            }
            _ if depth == 0 && is_path_separator(b as char) => {
                out.push((start, &pattern[start..i]));
                start = i + 1;
            }
            _ => {}
        }

        i += 1;
    }

    if depth > 0 {
        return Err(PatternError::UnterminatedRegex {
            pattern: pattern.to_string(),
            start: open_at,
        });
    }

    out.push((start, &pattern[start..]));
    Ok(out)
}

struct SegmentLexer<'a, 's> {
    pattern: &'a str,
    text: &'a str,
    offset: usize,
    chars: Vec<(usize, char)>,
    index: usize,
    state: &'s mut PatternState,
    label: String,
    literal: String,
    parts: SmallVec<[SegmentPart; 4]>,
    parameters: SmallVec<[Parameter; 2]>,
    escaped: bool,
    optional: bool,
}

impl<'a, 's> SegmentLexer<'a, 's> {
    fn new(pattern: &'a str, text: &'a str, offset: usize, state: &'s mut PatternState) -> Self {
        Self {
            pattern,
            text,
            offset,
            chars: text.char_indices().collect(),
            index: 0,
            state,
            label: String::with_capacity(text.len()),
            literal: String::new(),
            parts: SmallVec::new(),
            parameters: SmallVec::new(),
            escaped: false,
            optional: false,
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    #[inline]
    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.index + ahead).map(|(_, c)| *c)
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.index += 1;
        Some(ch)
    }

    /// Byte index of the current char within the whole pattern.
    #[inline]
    fn position(&self) -> usize {
        self.offset
            + self
                .chars
                .get(self.index)
                .map_or(self.text.len(), |(i, _)| *i)
    }

    fn lex(mut self) -> PatternResult<Segment> {
        while let Some(ch) = self.peek() {
            match ch {
                ':' => self.lex_colon()?,
                '(' => {
                    let group = self.read_group()?;
                    self.flush_literal();
                    self.push_parameter(None, Some(group))?;
                }
                ')' => {
                    return Err(PatternError::UnmatchedRegexClose {
                        pattern: self.pattern.to_string(),
                        index: self.position(),
                    });
                }
                '*' => {
                    if self.text == "*" {
                        return Ok(Segment::wildcard());
                    }
                    return Err(PatternError::InvalidWildcard {
                        pattern: self.pattern.to_string(),
                        index: self.position(),
                    });
                }
                '?' => {
                    if self.parameters.iter().any(|p| p.literal_value.is_some()) {
                        return Err(PatternError::OptionalConflictsWithMulti {
                            pattern: self.pattern.to_string(),
                            segment: self.text.to_string(),
                        });
                    }
                    return Err(PatternError::MisplacedOptional {
                        pattern: self.pattern.to_string(),
                        index: self.position(),
                    });
                }
                _ => {
                    self.bump();
                    self.literal.push(ch);
                    self.label.push(ch);
                }
            }
        }

        Ok(self.finish())
    }

    fn lex_colon(&mut self) -> PatternResult<()> {
        if self.peek_at(1) == Some(':') {
            if self.peek_at(2) == Some(':') {
                self.index += 2;
                return Err(PatternError::InvalidParameterName {
                    pattern: self.pattern.to_string(),
                    name: String::new(),
                    index: self.position(),
                    found: Some(':'),
                });
            }

            self.index += 2;
            self.literal.push(':');
            self.label.push(':');
            self.escaped = true;
            return Ok(());
        }

        self.bump();
        self.label.push(':');
        self.lex_parameter()
    }

    fn lex_parameter(&mut self) -> PatternResult<()> {
        let name_start = self.position();
        let mut name = String::new();

        match self.peek() {
            Some(c) if is_param_name_start(c) => {}
            found => {
                return Err(PatternError::InvalidParameterName {
                    pattern: self.pattern.to_string(),
                    name,
                    index: name_start,
                    found,
                });
            }
        }

        while let Some(c) = self.peek()
            && is_param_name_continue(c)
        {
            name.push(c);
            self.bump();
        }

        self.label.push_str(&name);
        self.flush_literal();

        match self.peek() {
            None => self.push_parameter(Some(name), None)?,
            Some('?') => {
                let at = self.position();
                self.bump();
                self.label.push('?');

                if self.peek().is_some_and(is_multi_param_separator)
                    || !self.parameters.is_empty()
                {
                    return Err(PatternError::OptionalConflictsWithMulti {
                        pattern: self.pattern.to_string(),
                        segment: self.text.to_string(),
                    });
                }
                if self.peek().is_some() {
                    return Err(PatternError::MisplacedOptional {
                        pattern: self.pattern.to_string(),
                        index: at,
                    });
                }

                self.optional = true;
                self.push_parameter(Some(name), None)?;
            }
            Some(c) if is_multi_param_separator(c) => {
                self.push_parameter(Some(name), None)?;
                self.bump();
                self.label.push('-');

                if self.peek() != Some(':') || self.peek_at(1) == Some(':') {
                    return Err(PatternError::InvalidParameterName {
                        pattern: self.pattern.to_string(),
                        name: String::new(),
                        index: self.position(),
                        found: self.peek(),
                    });
                }

                self.parts.push(SegmentPart::Separator);
            }
            Some('(') => {
                let group = self.read_group()?;
                self.push_parameter(Some(name), Some(group))?;
            }
            // `::` after a name is a literal colon, left to the main loop
            Some(':') if self.peek_at(1) == Some(':') => {
                self.push_parameter(Some(name), None)?;
            }
            Some(':') => {
                return Err(PatternError::MissingParameterSeparator {
                    pattern: self.pattern.to_string(),
                    index: self.position(),
                });
            }
            Some('*') => {
                return Err(PatternError::InvalidWildcard {
                    pattern: self.pattern.to_string(),
                    index: self.position(),
                });
            }
            Some(')') => {
                return Err(PatternError::UnmatchedRegexClose {
                    pattern: self.pattern.to_string(),
                    index: self.position(),
                });
            }
            found => {
                return Err(PatternError::InvalidParameterName {
                    pattern: self.pattern.to_string(),
                    name,
                    index: self.position(),
                    found,
                });
            }
        }

        Ok(())
    }

    /// Reads a balanced `( ... )` group and returns it with its parentheses.
    fn read_group(&mut self) -> PatternResult<String> {
        let start = self.position();
        let mut depth = 0usize;
        let mut source = String::new();

        while let Some(ch) = self.bump() {
            source.push(ch);
            self.label.push(ch);

            match ch {
                '\\' => {
                    let Some(escaped) = self.bump() else {
                        break;
                    };
                    source.push(escaped);
                    self.label.push(escaped);
                }
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(source);
                    }
                }
                _ => {}
            }
        }

        Err(PatternError::UnterminatedRegex {
            pattern: self.pattern.to_string(),
            start,
        })
    }

    fn push_parameter(&mut self, name: Option<String>, group: Option<String>) -> PatternResult<()> {
        if let Some(n) = &name {
            if !self.state.names.insert(n.clone()) {
                return Err(PatternError::DuplicateParameterName {
                    pattern: self.pattern.to_string(),
                    name: n.clone(),
                });
            }
            if is_reserved_identifier(n) {
                tracing::warn!(
                    pattern = %self.pattern,
                    name = %n,
                    "parameter name is a reserved identifier"
                );
            }
        }

        let compiled = match &group {
            Some(source) => Some(compile_group(self.pattern, source, false)?),
            None => None,
        };

        let key = match &name {
            Some(n) => n.as_str().into(),
            None => {
                let ordinal = self.state.anonymous;
                self.state.anonymous += 1;
                ordinal.to_string().into_boxed_str()
            }
        };

        self.parts.push(SegmentPart::Param(self.parameters.len()));
        self.parameters.push(Parameter {
            name,
            literal_value: group,
            optional: self.optional,
            pattern: compiled,
            key,
        });

        Ok(())
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.parts
                .push(SegmentPart::Literal(std::mem::take(&mut self.literal)));
        }
    }

    fn finish(mut self) -> Segment {
        self.flush_literal();

        if self.parameters.is_empty() {
            let kind = if self.escaped {
                SegmentKind::Escaped
            } else {
                SegmentKind::Static
            };
            return Segment::literal(self.label, kind);
        }

        let regexes = self
            .parameters
            .iter()
            .filter(|p| p.pattern.is_some())
            .count();
        let named = self.parameters.iter().filter(|p| p.name.is_some()).count();

        let kind = if regexes >= 2 {
            SegmentKind::MultiRegex
        } else if regexes == 1 {
            if named == 0 {
                SegmentKind::Regex
            } else {
                SegmentKind::ParamRegex
            }
        } else if self.optional {
            SegmentKind::OptionalParam
        } else if named >= 2 {
            SegmentKind::MultiParam
        } else {
            SegmentKind::Param
        };

        Segment {
            raw_label: self.label,
            kind,
            parameters: self.parameters,
            parts: self.parts,
        }
    }
}

/// Compiles a group anchored at the current offset of the segment.
pub(super) fn compile_group(
    pattern: &str,
    source: &str,
    case_insensitive: bool,
) -> PatternResult<Arc<Regex>> {
    RegexBuilder::new(&format!("^(?:{source})"))
        .case_insensitive(case_insensitive)
        .build()
        .map(Arc::new)
        .map_err(|e| PatternError::InvalidRegex {
            pattern: pattern.to_string(),
            regex: source.to_string(),
            error: e.to_string(),
        })
}
