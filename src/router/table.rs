use crate::chars::is_path_separator;
use crate::enums::MethodToken;
use crate::errors::{RouteError, RouteResult};
use crate::matcher::{MatchOutcome, WILDCARD_KEY, captures_to_params, resolve};
use crate::path::{PathSegments, retain_segments, validate_path};
use crate::pattern::{PatternError, Segment, tokenize};
use crate::router::RouterOptions;
use crate::trie::TrieTree;

/// One route trie with the options it was built under.
#[derive(Debug)]
pub struct RouteTable<H> {
    tree: TrieTree<H>,
    options: RouterOptions,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTable<H> {
    pub fn new() -> Self {
        Self::with_options(RouterOptions::default())
    }

    pub fn with_options(options: RouterOptions) -> Self {
        Self {
            tree: TrieTree::new(),
            options,
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn tree(&self) -> &TrieTree<H> {
        &self.tree
    }

    pub fn max_depth(&self) -> usize {
        self.tree.max_depth()
    }

    pub fn route_count(&self) -> usize {
        self.tree.route_count()
    }

    /// Drops every route; options are kept.
    pub fn reset(&mut self) {
        self.tree.reset();
    }

    #[tracing::instrument(level = "trace", skip(self, method, handler), fields(pattern = %pattern))]
    pub fn insert(&mut self, pattern: &str, method: impl MethodToken, handler: H) -> RouteResult<()> {
        let method = method.to_method()?;
        let limit = self.options.max_segment_length;

        let mut segments: Vec<Segment> = retain_segments(
            tokenize(pattern)?,
            |s: &Segment| s.kind().is_static() && s.raw_label().is_empty(),
            self.options.normalization(),
        )
        .collect();

        for segment in segments.iter_mut() {
            if segment.raw_label().len() > limit {
                return Err(RouteError::SegmentTooLong {
                    segment: segment.raw_label().to_string(),
                    limit,
                });
            }
            if !self.options.case_sensitive {
                segment.fold_case(pattern)?;
            }
        }

        self.tree.insert(pattern, segments, method, handler)?;
        Ok(())
    }

    #[tracing::instrument(level = "trace", skip(self, method), fields(path = %path))]
    pub fn match_route(&self, path: &str, method: impl MethodToken) -> RouteResult<MatchOutcome<H>>
    where
        H: Clone,
    {
        let method = method.to_method()?;

        if !path.starts_with(is_path_separator) {
            return Err(PatternError::MustStartWithSlashOrWildcard {
                pattern: path.to_string(),
            }
            .into());
        }
        validate_path(path)?;

        let segments = PathSegments::new(path, &self.options.normalization());
        let resolution = resolve(
            &self.tree,
            &segments,
            method,
            self.options.max_segment_length,
        );

        let matched = resolution
            .matched
            .and_then(|id| self.tree.node(id).handler(method));

        let outcome = match (matched, resolution.candidate) {
            (Some(handler), _) => {
                let mut bindings = captures_to_params(path, resolution.captures);
                if let Some(from) = resolution.wildcard {
                    bindings.push(WILDCARD_KEY, segments.remainder(from).into_owned());
                }
                MatchOutcome::Matched {
                    handler: handler.clone(),
                    bindings,
                }
            }
            (None, Some(candidate)) => MatchOutcome::MethodNotAllowed {
                allowed_methods: self.tree.node(candidate).methods().methods(),
            },
            (None, None) => MatchOutcome::NotFound,
        };

        if self.options.debug {
            tracing::debug!(path = %path, method = %method, outcome = outcome.as_str(), "route lookup");
        }
        tracing::event!(
            tracing::Level::TRACE,
            operation = "match",
            method = ?method,
            outcome = outcome.as_str()
        );

        Ok(outcome)
    }
}
