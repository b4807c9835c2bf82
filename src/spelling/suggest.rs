//! Spelling suggestion ranking.
//!
//! The ranker scans the whole dictionary for every query, scores each word by
//! Levenshtein distance and keeps the closest `k`. Words at equal distance
//! keep their dictionary enumeration order, in both the sequential and the
//! parallel scan.

use std::time::Instant;

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellRankError};
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// Number of suggestions returned when nothing else is configured.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// A dictionary word paired with its distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredWord {
    /// The dictionary word.
    pub word: String,
    /// Edit distance from the query.
    pub distance: usize,
}

impl ScoredWord {
    /// Create a new scored word.
    pub fn new(word: impl Into<String>, distance: usize) -> Self {
        ScoredWord {
            word: word.into(),
            distance,
        }
    }
}

/// Suggestions ordered by ascending distance, ties in dictionary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedResult {
    suggestions: Vec<ScoredWord>,
}

impl RankedResult {
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredWord> {
        self.suggestions.iter()
    }

    /// The closest suggestion, if any.
    pub fn best(&self) -> Option<&ScoredWord> {
        self.suggestions.first()
    }

    /// Suggested words without their distances.
    pub fn words(&self) -> Vec<&str> {
        self.suggestions.iter().map(|s| s.word.as_str()).collect()
    }

    pub fn as_slice(&self) -> &[ScoredWord] {
        &self.suggestions
    }

    pub fn into_vec(self) -> Vec<ScoredWord> {
        self.suggestions
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a ScoredWord;
    type IntoIter = std::slice::Iter<'a, ScoredWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.iter()
    }
}

/// Outcome of checking one query against a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "suggestions", rename_all = "snake_case")]
pub enum SpellCheck {
    /// The query is a dictionary word; no distances were computed.
    Correct,
    /// The query is unknown; closest dictionary words first.
    Suggestions(RankedResult),
}

impl SpellCheck {
    pub fn is_correct(&self) -> bool {
        matches!(self, SpellCheck::Correct)
    }

    /// The suggestions, or `None` for a correctly spelled query.
    pub fn suggestions(&self) -> Option<&RankedResult> {
        match self {
            SpellCheck::Correct => None,
            SpellCheck::Suggestions(ranked) => Some(ranked),
        }
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Drop candidates farther than this. `None` scores every word exactly.
    pub max_distance: Option<usize>,
    /// Scan the dictionary on a rayon thread pool.
    pub parallel: bool,
    /// Thread pool size for the parallel scan.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_distance: None,
            parallel: false,
            thread_pool_size: None,
        }
    }
}

/// Main spelling suggestion engine.
///
/// Borrows the dictionary read-only for its whole lifetime, so a single
/// loaded dictionary can back any number of engines and queries.
pub struct SuggestionEngine<'a> {
    dictionary: &'a SpellingDictionary,
    config: SuggestionConfig,
    thread_pool: Option<ThreadPool>,
}

impl<'a> SuggestionEngine<'a> {
    /// Create a sequential engine with the default configuration.
    pub fn new(dictionary: &'a SpellingDictionary) -> Self {
        SuggestionEngine {
            dictionary,
            config: SuggestionConfig::default(),
            thread_pool: None,
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(
        dictionary: &'a SpellingDictionary,
        config: SuggestionConfig,
    ) -> Result<Self> {
        let thread_pool = if config.parallel {
            let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
            if thread_pool_size == 0 {
                return Err(SpellRankError::invalid_argument(
                    "thread pool size must be at least 1",
                ));
            }

            let pool = ThreadPoolBuilder::new()
                .num_threads(thread_pool_size)
                .thread_name(|i| format!("spellrank-scan-{i}"))
                .build()
                .map_err(|e| {
                    SpellRankError::internal(format!("Failed to create thread pool: {e}"))
                })?;
            Some(pool)
        } else {
            None
        };

        Ok(SuggestionEngine {
            dictionary,
            config,
            thread_pool,
        })
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &SpellingDictionary {
        self.dictionary
    }

    /// Check if a word is spelled correctly (exact, case-sensitive).
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Report a known word as correct, otherwise rank suggestions for it.
    pub fn check(&self, query: &str) -> SpellCheck {
        if self.is_correct(query) {
            debug!("'{query}' found in dictionary");
            return SpellCheck::Correct;
        }
        SpellCheck::Suggestions(self.suggest(query))
    }

    /// Rank the closest dictionary words, even if the query itself is known.
    pub fn suggest(&self, query: &str) -> RankedResult {
        let k = self.config.max_suggestions;
        if k == 0 || self.dictionary.is_empty() {
            return RankedResult::default();
        }

        let start_time = Instant::now();
        let matcher = LevenshteinMatcher::new(query);

        let scored = match &self.thread_pool {
            Some(pool) => pool.install(|| self.score_parallel(&matcher)),
            None => self.score_sequential(&matcher),
        };

        debug!(
            "Scored {} of {} words for '{}' in {:?}",
            scored.len(),
            self.dictionary.len(),
            query,
            start_time.elapsed()
        );

        select_top_k(scored, k)
    }

    fn score(&self, matcher: &LevenshteinMatcher, word: &str) -> Option<usize> {
        match self.config.max_distance {
            Some(max_distance) => matcher.distance_threshold(word, max_distance),
            None => Some(matcher.distance(word)),
        }
    }

    fn score_sequential(&self, matcher: &LevenshteinMatcher) -> Vec<(usize, ScoredWord)> {
        self.dictionary
            .iter()
            .enumerate()
            .filter_map(|(index, word)| {
                self.score(matcher, word)
                    .map(|distance| (index, ScoredWord::new(word, distance)))
            })
            .collect()
    }

    fn score_parallel(&self, matcher: &LevenshteinMatcher) -> Vec<(usize, ScoredWord)> {
        self.dictionary
            .words()
            .par_iter()
            .enumerate()
            .filter_map(|(index, word)| {
                self.score(matcher, word)
                    .map(|distance| (index, ScoredWord::new(word.as_str(), distance)))
            })
            .collect()
    }
}

/// Keep the `k` entries with the smallest `(distance, original index)`.
///
/// The key is unique per entry, so unstable selection and sorting still give
/// the same order as a stable sort by distance.
fn select_top_k(mut scored: Vec<(usize, ScoredWord)>, k: usize) -> RankedResult {
    if k == 0 || scored.is_empty() {
        return RankedResult::default();
    }

    let key = |entry: &(usize, ScoredWord)| (entry.1.distance, entry.0);

    if scored.len() > k {
        scored.select_nth_unstable_by_key(k - 1, key);
        scored.truncate(k);
    }
    scored.sort_unstable_by_key(key);

    RankedResult {
        suggestions: scored.into_iter().map(|(_, scored)| scored).collect(),
    }
}

/// Check `query` against `dictionary` and return at most `k` suggestions.
pub fn rank(query: &str, dictionary: &SpellingDictionary, k: usize) -> SpellCheck {
    let config = SuggestionConfig {
        max_suggestions: k,
        ..Default::default()
    };
    SuggestionEngine {
        dictionary,
        config,
        thread_pool: None,
    }
    .check(query)
}
