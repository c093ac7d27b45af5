//! Lookup and correction results.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A correction candidate produced by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The term as it was queried.
    pub term: String,
    /// The suggested dictionary term, `None` for a pass-through.
    pub suggestion: Option<String>,
    /// Edit distance between the query and the suggestion.
    pub distance: usize,
    /// Frequency of the suggested term in the dictionary.
    pub frequency: u64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<T, S>(term: T, suggestion: S, distance: usize, frequency: u64) -> Self
    where
        T: Into<String>,
        S: Into<String>,
    {
        Suggestion {
            term: term.into(),
            suggestion: Some(suggestion.into()),
            distance,
            frequency,
        }
    }

    /// Create a pass-through record for a token that was not corrected.
    pub fn pass_through<T: Into<String>>(term: T) -> Self {
        Suggestion {
            term: term.into(),
            suggestion: None,
            distance: 0,
            frequency: 0,
        }
    }

    /// Check if this record carries an actual suggestion.
    pub fn is_suggested(&self) -> bool {
        self.suggestion.is_some()
    }

    /// The suggested text, falling back to the queried term.
    pub fn text(&self) -> &str {
        self.suggestion.as_deref().unwrap_or(&self.term)
    }

    /// Ranking order: smaller distance first, then higher frequency.
    pub fn rank(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.frequency.cmp(&self.frequency))
    }
}

/// Sort suggestions by [`Suggestion::rank`] and keep the first `max`.
pub fn rank_suggestions(mut suggestions: Vec<Suggestion>, max: usize) -> Vec<Suggestion> {
    suggestions.sort_by(|a, b| a.rank(b));
    suggestions.truncate(max);
    suggestions
}

/// The result of correcting a passage of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The text as it was given.
    pub input: String,
    /// The reassembled, corrected text.
    pub output: String,
    /// One record per token, in token order.
    pub suggestions: Vec<Suggestion>,
}

impl Correction {
    /// Create a new correction result.
    pub fn new(input: String, output: String, suggestions: Vec<Suggestion>) -> Self {
        Correction {
            input,
            output,
            suggestions,
        }
    }

    /// Check if any token was replaced by a different term.
    pub fn is_changed(&self) -> bool {
        self.suggestions.iter().any(|s| s.distance > 0)
    }

    /// Iterate over the tokens that received a suggestion.
    pub fn corrections(&self) -> impl Iterator<Item = &Suggestion> {
        self.suggestions.iter().filter(|s| s.is_suggested())
    }
}
