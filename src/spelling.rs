//! Spelling correction built on the SymSpell delete-variant index.
//!
//! Terms are indexed together with every string reachable by deleting up to
//! `max_distance` characters. A lookup generates the delete variants of the
//! query, intersects them with the index and scores the surviving candidates
//! with a true Damerau-Levenshtein distance.

pub mod config;
pub mod dictionary;
pub mod distance;
pub mod suggest;
pub mod symspell;

pub use config::SymSpellConfig;
pub use dictionary::DictionaryEntry;
pub use distance::{DamerauLevenshtein, EditDistance};
pub use suggest::{Correction, Suggestion};
pub use symspell::SymSpell;
