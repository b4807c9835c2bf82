//! Levenshtein distance calculation for spelling correction.
//!
//! Distances are measured in Unicode scalar values (`char`), not bytes, so
//! `"café"` and `"cafe"` are one substitution apart.

use std::cmp::min;

/// A fully populated dynamic programming table for two strings.
///
/// Cell `(i, j)` holds the edit distance between the first `i` characters of
/// the source and the first `j` characters of the target. Row 0 counts
/// insertions from the empty prefix and column 0 counts deletions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceTable {
    /// Build the table for transforming `source` into `target`.
    pub fn build(source: &str, target: &str) -> Self {
        let s1_chars: Vec<char> = source.chars().collect();
        let s2_chars: Vec<char> = target.chars().collect();
        let rows = s1_chars.len() + 1;
        let cols = s2_chars.len() + 1;
        let mut cells = vec![0; rows * cols];

        // Initialize first row and column
        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }
        for i in 0..rows {
            cells[i * cols] = i;
        }

        // Fill the table
        for i in 1..rows {
            for j in 1..cols {
                let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                    0
                } else {
                    1
                };

                cells[i * cols + j] = min(
                    min(
                        cells[(i - 1) * cols + j] + 1, // deletion
                        cells[i * cols + j - 1] + 1,   // insertion
                    ),
                    cells[(i - 1) * cols + j - 1] + cost, // substitution
                );
            }
        }

        DistanceTable { rows, cols, cells }
    }

    /// Number of rows, `len(source) + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(target) + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value of cell `(i, j)`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// The edit distance between the full strings (bottom-right cell).
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    distance_chars(&s1_chars, &s2_chars)
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold, which can be more efficient
/// for filtering candidates.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    threshold_chars(&s1_chars, &s2_chars, threshold)
}

/// Two-row distance over pre-split characters.
///
/// The shorter input becomes the row so the buffers are `min(len) + 1` long.
fn distance_chars(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &long_ch) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &short_ch) in short.iter().enumerate() {
            let cost = if long_ch == short_ch { 0 } else { 1 };

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

fn threshold_chars(a: &[char], b: &[char], threshold: usize) -> Option<usize> {
    // Early termination if length difference exceeds threshold
    if a.len().abs_diff(b.len()) > threshold {
        return None;
    }

    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &long_ch) in long.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &short_ch) in short.iter().enumerate() {
            let cost = if long_ch == short_ch { 0 } else { 1 };

            curr_row[j + 1] = min(
                min(prev_row[j + 1] + 1, curr_row[j] + 1),
                prev_row[j] + cost,
            );

            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Every later cell is at least the row minimum
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[short.len()];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}

/// Scores many candidates against one query.
///
/// The query is split into characters once instead of once per candidate,
/// which matters when scanning a whole dictionary.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();

        LevenshteinMatcher { query, query_chars }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_chars(&self.query_chars, &candidate_chars)
    }

    /// Calculate distance with threshold for early termination.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        threshold_chars(&self.query_chars, &candidate_chars, threshold)
    }

    /// Check if a candidate is within the given edit distance threshold.
    pub fn is_match(&self, candidate: &str, max_distance: usize) -> bool {
        self.distance_threshold(candidate, max_distance).is_some()
    }
}
