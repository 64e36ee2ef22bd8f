//! Breadth-first brace expansion.

use std::collections::{HashSet, VecDeque};

use crate::config::ExpandConfig;
use crate::error::{KataError, Result};

use super::groups::{check_balanced, innermost_group};

/// Expands `{a,b}` alternation groups, nested or sequential.
///
/// By default structurally equal expansions reached through different
/// groups are kept once; `keep_duplicates(true)` keeps every path.
#[derive(Debug, Clone, Default)]
pub struct Expander {
    keep_duplicates: bool,
    max_results: Option<usize>,
}

impl Expander {
    /// Create an expander with default options (deduplicating, unbounded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an expander from the `expand` section of a config file.
    pub fn from_config(config: &ExpandConfig) -> Self {
        Self {
            keep_duplicates: config.keep_duplicates,
            max_results: config.max_results,
        }
    }

    /// Keep equal expansions produced by different choices.
    pub fn keep_duplicates(mut self, keep: bool) -> Self {
        self.keep_duplicates = keep;
        self
    }

    /// Fail once more than `limit` fully expanded strings have been produced.
    pub fn max_results(mut self, limit: Option<usize>) -> Self {
        self.max_results = limit;
        self
    }

    /// Expand every group in `input`.
    ///
    /// Each pass resolves the innermost group of the first pending string
    /// and appends one variant per alternative. Strings are resolved one
    /// level at a time, so the loop ends as soon as the front string is
    /// brace-free. Brace-free strings are never popped again; only they
    /// count towards `max_results`.
    pub fn expand(&self, input: &str) -> Result<Vec<String>> {
        check_balanced(input)?;

        let mut pending: VecDeque<String> = VecDeque::from([input.to_string()]);
        let mut queued: HashSet<String> = HashSet::new();
        if !self.keep_duplicates {
            queued.insert(input.to_string());
        }
        let mut finished = 0;

        loop {
            let variants: Vec<String> = match pending.front().and_then(|s| innermost_group(s)) {
                Some(group) => group
                    .alternatives()
                    .map(|alternative| group.substitute(alternative))
                    .collect(),
                None => break,
            };
            if let Some(resolved) = pending.pop_front() {
                queued.remove(&resolved);
            }

            for variant in variants {
                if !self.keep_duplicates && !queued.insert(variant.clone()) {
                    continue;
                }
                if !variant.contains('{') {
                    finished += 1;
                    self.check_limit(finished)?;
                }
                pending.push_back(variant);
            }
        }

        self.check_limit(pending.len())?;
        Ok(pending.into())
    }

    fn check_limit(&self, count: usize) -> Result<()> {
        match self.max_results {
            Some(limit) if count > limit => Err(KataError::TooManyExpansions { limit }),
            _ => Ok(()),
        }
    }
}
