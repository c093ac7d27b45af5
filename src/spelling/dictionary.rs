//! Dictionary entries and training data for the SymSpell index.
//!
//! Every key in a language's entry table is either a real term or a delete
//! variant of one or more terms. The entry under a key records the key's own
//! frequency (zero for pure delete variants) and the indices of the terms
//! whose delete variants collide there.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Frequency plus term-index references stored under one key.
///
/// Serializes to the flat array `[frequency, idx1, idx2, ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<u64>", into = "Vec<u64>")]
pub struct DictionaryEntry {
    /// Frequency of the key as a real term, 0 for a delete-variant placeholder
    pub frequency: u64,

    /// Indices of the terms that reach this key by deletion
    pub terms: Vec<usize>,
}

impl DictionaryEntry {
    /// Create an entry for a real term with no references yet.
    pub fn new(frequency: u64) -> Self {
        DictionaryEntry {
            frequency,
            terms: Vec::new(),
        }
    }

    /// Create a placeholder entry `[0, term_index]` for a delete variant.
    pub fn placeholder(term_index: usize) -> Self {
        DictionaryEntry {
            frequency: 0,
            terms: vec![term_index],
        }
    }

    /// Append a term reference unless it is already present.
    ///
    /// Returns `true` if the reference was added.
    pub fn push_term(&mut self, term_index: usize) -> bool {
        if self.contains(term_index) {
            return false;
        }
        self.terms.push(term_index);
        true
    }

    /// Check if the entry references the given term index.
    pub fn contains(&self, term_index: usize) -> bool {
        self.terms.contains(&term_index)
    }

    /// Check if the key of this entry is itself a real term.
    pub fn is_term(&self) -> bool {
        self.frequency > 0
    }

    /// Flatten into `[frequency, idx...]`.
    pub fn to_vec(&self) -> Vec<u64> {
        let mut values = Vec::with_capacity(self.terms.len() + 1);
        values.push(self.frequency);
        values.extend(self.terms.iter().map(|&index| index as u64));
        values
    }
}

impl From<Vec<u64>> for DictionaryEntry {
    fn from(values: Vec<u64>) -> Self {
        let mut values = values.into_iter();
        let frequency = values.next().unwrap_or(0);
        DictionaryEntry {
            frequency,
            terms: values.map(|index| index as usize).collect(),
        }
    }
}

impl From<DictionaryEntry> for Vec<u64> {
    fn from(entry: DictionaryEntry) -> Self {
        entry.to_vec()
    }
}

/// Lower-case and trim a term the way it is stored in the index.
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Iterate over the strings obtained by removing exactly one character.
pub fn single_deletes(term: &str) -> impl Iterator<Item = String> + '_ {
    term.char_indices().map(move |(start, ch)| {
        let mut deleted = String::with_capacity(term.len() - ch.len_utf8());
        deleted.push_str(&term[..start]);
        deleted.push_str(&term[start + ch.len_utf8()..]);
        deleted
    })
}

/// Collect every distinct string reachable from `term` by deleting between
/// 1 and `max_distance` characters.
///
/// Terms of a single character produce no variants, so the empty string is
/// never a delete key.
pub fn delete_variants(term: &str, max_distance: usize) -> AHashSet<String> {
    let mut deletes = AHashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back((term.to_string(), 0usize));

    while let Some((word, depth)) = queue.pop_front() {
        if depth >= max_distance || word.chars().count() <= 1 {
            continue;
        }

        for deleted in single_deletes(&word) {
            if deletes.insert(deleted.clone()) {
                queue.push_back((deleted, depth + 1));
            }
        }
    }

    deletes
}

/// Parse a `"term,frequency"` training line.
///
/// A missing, unparseable or zero frequency defaults to 1. Lines with no term
/// return `None`.
pub fn parse_training_line(line: &str) -> Option<(String, u64)> {
    let mut parts = line.split(',');
    let term = parts.next()?.trim();
    if term.is_empty() {
        return None;
    }

    let frequency = parts
        .next()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|&frequency| frequency > 0)
        .unwrap_or(1);

    Some((term.to_string(), frequency))
}

/// Read `"term,frequency"` lines from a reader, skipping malformed ones.
pub fn read_training_lines<R: BufRead>(reader: R) -> Result<Vec<(String, u64)>> {
    let mut entries = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_training_line(&line) {
            Some(entry) => entries.push(entry),
            None => warn!("skipping malformed training line {}: {:?}", number + 1, line),
        }
    }

    Ok(entries)
}

/// Load a frequency file with one `"term,frequency"` pair per line.
pub fn load_training_file<P: AsRef<Path>>(path: P) -> Result<Vec<(String, u64)>> {
    let file = File::open(path)?;
    read_training_lines(BufReader::new(file))
}
