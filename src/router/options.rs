use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::NormalizationOptions;

pub const DEFAULT_MAX_SEGMENT_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    pub case_sensitive: bool,
    pub strict_trailing_slash: bool,
    pub allow_duplicate_slash: bool,
    pub max_segment_length: usize,
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            strict_trailing_slash: false,
            allow_duplicate_slash: false,
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_segment_length == 0 {
            return Err(RouterOptionsError::MaxSegmentLengthInvalid { provided: 0 });
        }
        Ok(())
    }

    pub(crate) fn normalization(&self) -> NormalizationOptions {
        NormalizationOptions {
            allow_duplicate_slash: self.allow_duplicate_slash,
            strict_trailing_slash: self.strict_trailing_slash,
            case_sensitive: self.case_sensitive,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn strict_trailing_slash(mut self, value: bool) -> Self {
        self.options.strict_trailing_slash = value;
        self
    }

    pub fn allow_duplicate_slash(mut self, value: bool) -> Self {
        self.options.allow_duplicate_slash = value;
        self
    }

    pub fn max_segment_length(mut self, value: usize) -> Self {
        self.options.max_segment_length = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_segment_length must be at least 1 (got {provided})")]
    MaxSegmentLengthInvalid { provided: usize },
}
