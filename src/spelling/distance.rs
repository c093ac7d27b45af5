//! Edit distance metrics for spelling correction.

use std::cmp::min;

use ahash::AHashMap;

/// A string distance metric used to score correction candidates.
///
/// Implementations may keep scratch buffers between calls, which is why
/// `distance` takes `&mut self`.
pub trait EditDistance: Send + std::fmt::Debug {
    /// Compute the distance between `source` and `target`.
    fn distance(&mut self, source: &str, target: &str) -> usize;

    /// Get the name of this metric.
    fn name(&self) -> &'static str;
}

const INITIAL_CODES: usize = 32;
const INITIAL_SCORE: usize = 33 * 33;

/// True Damerau-Levenshtein distance (insertions, deletions, substitutions
/// and transpositions of adjacent characters, all at unit cost).
///
/// Unlike the optimal string alignment variant, a transposed pair may be
/// edited again, so `distance("ca", "abc") == 2`.
///
/// The character caches and the score matrix are owned by the calculator and
/// reused across calls. They only ever grow, doubling until the requested
/// size fits.
#[derive(Debug, Clone)]
pub struct DamerauLevenshtein {
    source_codes: Vec<char>,
    target_codes: Vec<char>,
    score: Vec<usize>,
    last_row: AHashMap<char, usize>,
}

impl DamerauLevenshtein {
    /// Create a calculator with small preallocated buffers.
    pub fn new() -> Self {
        DamerauLevenshtein {
            source_codes: vec!['\0'; INITIAL_CODES],
            target_codes: vec!['\0'; INITIAL_CODES],
            score: vec![0; INITIAL_SCORE],
            last_row: AHashMap::new(),
        }
    }

    /// Current size of the score matrix buffer, in cells.
    pub fn score_capacity(&self) -> usize {
        self.score.len()
    }

    fn fill_codes(codes: &mut Vec<char>, text: &str) -> usize {
        let mut len = 0;
        for (i, ch) in text.chars().enumerate() {
            if i >= codes.len() {
                grow(codes, i + 1, '\0');
            }
            codes[i] = ch;
            len = i + 1;
        }
        len
    }
}

/// Grow `buffer` to at least `size` elements by repeated doubling.
fn grow<T: Clone>(buffer: &mut Vec<T>, size: usize, fill: T) {
    if size <= buffer.len() {
        return;
    }

    let mut target = buffer.len().max(1);
    while target < size {
        target *= 2;
    }
    buffer.resize(target, fill);
}

impl Default for DamerauLevenshtein {
    fn default() -> Self {
        Self::new()
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&mut self, source: &str, target: &str) -> usize {
        if source.is_empty() {
            return target.chars().count();
        }
        if target.is_empty() {
            return source.chars().count();
        }

        let source_len = Self::fill_codes(&mut self.source_codes, source);
        let target_len = Self::fill_codes(&mut self.target_codes, target);

        // Rows 0..=source_len+1, columns 0..=target_len+1. Row and column 0
        // hold INF so the transposition lookup never takes a free path.
        let inf = source_len + target_len;
        let width = target_len + 2;
        grow(&mut self.score, (source_len + 2) * width, 0);
        let score = &mut self.score;

        score[0] = inf;
        for i in 0..=source_len {
            score[(i + 1) * width] = inf;
            score[(i + 1) * width + 1] = i;
        }
        for j in 0..=target_len {
            score[j + 1] = inf;
            score[width + j + 1] = j;
        }

        self.last_row.clear();
        for i in 1..=source_len {
            let source_char = self.source_codes[i - 1];
            let mut last_match_col = 0;

            for j in 1..=target_len {
                let target_char = self.target_codes[j - 1];
                let i1 = self.last_row.get(&target_char).copied().unwrap_or(0);
                let j1 = last_match_col;

                let diagonal = score[i * width + j];
                let substitute = if source_char == target_char {
                    last_match_col = j;
                    diagonal
                } else {
                    min(diagonal, min(score[(i + 1) * width + j], score[i * width + j + 1])) + 1
                };
                let transpose = score[i1 * width + j1] + (i - i1) + (j - j1 - 1);

                score[(i + 1) * width + j + 1] = min(substitute, transpose);
            }

            self.last_row.insert(source_char, i);
        }

        score[(source_len + 1) * width + target_len + 1]
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}
