//! Boilerplate line filter producing a one-line description.

use lazy_static::lazy_static;
use regex::RegexSet;
use tracing::trace;

use crate::error::ConfigError;

use super::patterns::{BOILERPLATE, BOILERPLATE_PATTERNS};

lazy_static! {
    static ref DEFAULT_FILTER: DescriptionFilter = DescriptionFilter::new();
}

/// Immutable set of boilerplate patterns.
///
/// A line is dropped when, after trimming and lowercasing, it is empty or any
/// pattern is found in it. Kept lines are trimmed, keep their original case
/// and are joined with single spaces.
#[derive(Debug, Clone)]
pub struct DescriptionFilter {
    patterns: RegexSet,
}

impl DescriptionFilter {
    /// Filter with the built-in boilerplate set.
    pub fn new() -> Self {
        Self {
            patterns: BOILERPLATE.clone(),
        }
    }

    /// Filter with a substitute pattern set.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            patterns: RegexSet::new(patterns)?,
        })
    }

    /// Built-in set extended with extra patterns.
    pub fn with_extra_patterns<S: AsRef<str>>(extra: &[S]) -> Result<Self, ConfigError> {
        if extra.is_empty() {
            return Ok(Self::new());
        }
        Self::from_patterns(
            BOILERPLATE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .chain(extra.iter().map(|p| p.as_ref().to_string())),
        )
    }

    /// Number of patterns in the set.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Whether a single line would be dropped.
    pub fn is_boilerplate(&self, line: &str) -> bool {
        let lowered = line.trim().to_lowercase();
        lowered.is_empty() || self.patterns.is_match(&lowered)
    }

    /// Remove boilerplate lines and join the rest.
    pub fn filter(&self, text: &str) -> String {
        text.lines()
            .filter(|line| {
                let drop = self.is_boilerplate(line);
                if drop {
                    trace!("Dropping line: {:?}", line);
                }
                !drop
            })
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for DescriptionFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter text with the built-in boilerplate set.
pub fn filter_description(text: &str) -> String {
    DEFAULT_FILTER.filter(text)
}
