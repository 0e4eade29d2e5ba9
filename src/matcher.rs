//! Fuzzy matching used to filter suggestions.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// Score and matched ranges for a single candidate.
///
/// Ranges are half-open `(start, end)` char offsets into the candidate text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: i64,
    pub matches: Vec<(usize, usize)>,
}

/// A query normalised once per request and reused for every candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    /// Query as matched against candidates. Empty means "match everything".
    pub normalized: String,
}

pub trait QueryMatcher: Send + Sync {
    fn prepare_query(&self, text: &str) -> PreparedQuery;
    fn fuzzy_match(&self, query: &PreparedQuery, text: &str) -> Option<SearchResult>;
}

pub struct SkimQueryMatcher {
    matcher: SkimMatcherV2,
}

impl SkimQueryMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl Default for SkimQueryMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryMatcher for SkimQueryMatcher {
    fn prepare_query(&self, text: &str) -> PreparedQuery {
        PreparedQuery {
            normalized: text.trim().to_lowercase(),
        }
    }

    fn fuzzy_match(&self, query: &PreparedQuery, text: &str) -> Option<SearchResult> {
        if query.normalized.is_empty() {
            return None;
        }
        let (score, indices) = self.matcher.fuzzy_indices(text, &query.normalized)?;
        Some(SearchResult {
            score,
            matches: to_ranges(&indices),
        })
    }
}

/// Collapse sorted char indices into contiguous half-open ranges.
pub fn to_ranges(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
