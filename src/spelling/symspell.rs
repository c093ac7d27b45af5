//! The SymSpell indexing and correction engine.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use glossa::spelling::SymSpell;
//! use glossa::storage::memory::MemoryStore;
//!
//! # fn main() -> glossa::error::Result<()> {
//! tokio_test::block_on(async {
//!     let engine = SymSpell::new(Arc::new(MemoryStore::new()));
//!     engine.initialize().await?;
//!
//!     engine.add("academically", 1, None, None).await?;
//!     let suggestions = engine.lookup("acaddemicaly", None, None, None).await?;
//!
//!     assert_eq!(suggestions[0].suggestion.as_deref(), Some("academically"));
//!     assert_eq!(suggestions[0].distance, 2);
//!     Ok::<(), glossa::error::GlossaError>(())
//! })
//! # }
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ahash::AHashSet;
use futures::future::try_join_all;
use log::{debug, trace, warn};
use parking_lot::{Mutex, RwLock};

use crate::analysis::tokenizer::{ScriptTokenizer, Tokenizer};
use crate::error::{GlossaError, Result};
use crate::language::alphabet_for;
use crate::spelling::config::SymSpellConfig;
use crate::spelling::dictionary::{
    DictionaryEntry, delete_variants, load_training_file, normalize, parse_training_line,
    read_training_lines, single_deletes,
};
use crate::spelling::distance::{DamerauLevenshtein, EditDistance};
use crate::spelling::suggest::{Correction, Suggestion, rank_suggestions};
use crate::storage::DataStore;

const NOT_INITIALIZED: &str = "SymSpell must be initialized, please call initialize() first";

/// Fuzzy term lookup and text correction over a [`DataStore`].
///
/// The engine owns its configuration, the active language and the injected
/// distance metric and tokenizer. All dictionary data lives in the store.
///
/// `add` and `train` calls on one engine are serialized so that concurrent
/// writers cannot lose updates to shared delete keys. The store has a single
/// active language: calls for the same language run concurrently, and a call
/// for another language waits until they finish before switching. Several
/// engines sharing one store are not coordinated with each other, and the
/// store must not be switched behind the engine's back.
pub struct SymSpell {
    store: Arc<dyn DataStore>,
    edit_distance: Mutex<Box<dyn EditDistance>>,
    tokenizer: Arc<dyn Tokenizer>,
    config: SymSpellConfig,
    language: RwLock<String>,
    initialized: AtomicBool,
    writer: tokio::sync::Mutex<()>,
    active: tokio::sync::RwLock<String>,
}

impl fmt::Debug for SymSpell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymSpell")
            .field("store", &self.store.name())
            .field("edit_distance", &self.edit_distance_name())
            .field("tokenizer", &self.tokenizer.name())
            .field("config", &self.config)
            .field("language", &*self.language.read())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

impl SymSpell {
    /// Create an engine with the default configuration, metric and tokenizer.
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        let config = SymSpellConfig::default();
        SymSpell {
            store,
            edit_distance: Mutex::new(Box::new(DamerauLevenshtein::new())),
            tokenizer: Arc::new(ScriptTokenizer::new()),
            language: RwLock::new(config.language.clone()),
            active: tokio::sync::RwLock::new(config.language.clone()),
            config,
            initialized: AtomicBool::new(false),
            writer: tokio::sync::Mutex::new(()),
        }
    }

    /// Create an engine with explicit collaborators and configuration.
    pub fn with_components(
        store: Arc<dyn DataStore>,
        edit_distance: Box<dyn EditDistance>,
        tokenizer: Arc<dyn Tokenizer>,
        config: SymSpellConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(SymSpell {
            store,
            edit_distance: Mutex::new(edit_distance),
            tokenizer,
            language: RwLock::new(config.language.clone()),
            active: tokio::sync::RwLock::new(config.language.clone()),
            config,
            initialized: AtomicBool::new(false),
            writer: tokio::sync::Mutex::new(()),
        })
    }

    /// Create an engine with the default collaborators and a custom configuration.
    pub fn with_config(store: Arc<dyn DataStore>, config: SymSpellConfig) -> Result<Self> {
        Self::with_components(
            store,
            Box::new(DamerauLevenshtein::new()),
            Arc::new(ScriptTokenizer::new()),
            config,
        )
    }

    /// Initialize the store and activate the configured language.
    pub async fn initialize(&self) -> Result<()> {
        self.store.initialize().await?;
        let language = self.language();
        drop(self.session(&language).await?);
        self.initialized.store(true, Ordering::Release);
        debug!(
            "symspell initialized: store={}, language={}, max_distance={}",
            self.store.name(),
            language,
            self.config.max_distance
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    fn check_ready(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(GlossaError::not_initialized(NOT_INITIALIZED))
        }
    }

    /// Default maximum edit distance.
    pub fn max_distance(&self) -> usize {
        self.config.max_distance
    }

    /// Default maximum number of suggestions per lookup.
    pub fn max_suggestions(&self) -> usize {
        self.config.max_suggestions
    }

    /// The active language.
    pub fn language(&self) -> String {
        self.language.read().clone()
    }

    pub fn config(&self) -> &SymSpellConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn DataStore> {
        &self.store
    }

    /// Name of the injected distance metric.
    pub fn edit_distance_name(&self) -> &'static str {
        self.edit_distance.lock().name()
    }

    /// Switch the active language of the engine and its store.
    pub async fn set_language(&self, language: &str) -> Result<()> {
        self.check_ready()?;
        let _session = self.session(language).await?;
        *self.language.write() = language.to_string();
        debug!("symspell language set to {}", language);
        Ok(())
    }

    /// Make `language` the store's active namespace until the guard drops.
    async fn session(&self, language: &str) -> Result<tokio::sync::RwLockReadGuard<'_, String>> {
        {
            let active = self.active.read().await;
            if *active == language {
                self.store.set_language(language).await?;
                return Ok(active);
            }
        }

        let mut active = self.active.write().await;
        if *active != language {
            trace!("switching store from {} to {}", *active, language);
        }
        self.store.set_language(language).await?;
        *active = language.to_string();
        Ok(active.downgrade())
    }

    fn resolve_language(&self, language: Option<&str>) -> String {
        match language {
            Some(language) if !language.trim().is_empty() => language.to_string(),
            _ => self.language(),
        }
    }

    /// Index a term with the given frequency.
    ///
    /// Terms shorter than two characters after normalization are ignored,
    /// so `"  b "` is rejected rather than indexed as `"b"`. Adding a term
    /// that is already indexed leaves its frequency unchanged. A frequency of
    /// 0 is stored as 1 so the term stays distinguishable from a
    /// delete-variant placeholder, and lookups report it as 1.
    ///
    /// Returns `true` if the term was newly indexed.
    pub async fn add(
        &self,
        term: &str,
        frequency: u64,
        language: Option<&str>,
        max_distance: Option<usize>,
    ) -> Result<bool> {
        self.check_ready()?;

        let term = normalize(term);
        if term.chars().count() <= 1 {
            return Ok(false);
        }
        let language = self.resolve_language(language);
        let max_distance = self.config.resolve_max_distance(max_distance);
        let frequency = frequency.max(1);

        let _writer = self.writer.lock().await;
        let _session = self.session(&language).await?;

        let entry = match self.store.get_entry(&term).await? {
            None => DictionaryEntry::new(frequency),
            Some(mut entry) if !entry.is_term() => {
                entry.frequency = frequency;
                entry
            }
            Some(_) => {
                trace!("{:?} already indexed for {}", term, language);
                return Ok(false);
            }
        };
        self.store.set_entry(&term, entry).await?;

        let index = self.store.push_term(&term).await? - 1;
        let keys: Vec<String> = delete_variants(&term, max_distance).into_iter().collect();
        let existing = self.store.get_entries(&keys).await?;

        for (key, entry) in keys.iter().zip(existing) {
            match entry {
                Some(mut entry) => {
                    if entry.push_term(index) {
                        self.store.set_entry(key, entry).await?;
                    }
                }
                None => {
                    self.store
                        .set_entry(key, DictionaryEntry::placeholder(index))
                        .await?;
                }
            }
        }

        trace!(
            "indexed {:?} as #{} with {} delete variants ({})",
            term,
            index,
            keys.len(),
            language
        );
        Ok(true)
    }

    /// Index `"term,frequency"` lines. Malformed lines are skipped.
    ///
    /// Returns the number of lines that were accepted.
    pub async fn train<S: AsRef<str>>(&self, lines: &[S], language: &str) -> Result<usize> {
        self.check_ready()?;

        let mut entries = Vec::with_capacity(lines.len());
        for (number, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.is_empty() {
                continue;
            }
            match parse_training_line(line) {
                Some(entry) => entries.push(entry),
                None => warn!("skipping malformed training line {}: {:?}", number + 1, line),
            }
        }

        self.train_entries(entries, language).await
    }

    /// Index `"term,frequency"` lines read from `reader`.
    pub async fn train_from_reader<R: BufRead>(&self, reader: R, language: &str) -> Result<usize> {
        self.check_ready()?;
        let entries = read_training_lines(reader)?;
        self.train_entries(entries, language).await
    }

    /// Index a frequency file with one `"term,frequency"` pair per line.
    pub async fn train_from_file<P: AsRef<Path>>(&self, path: P, language: &str) -> Result<usize> {
        self.check_ready()?;
        let entries = load_training_file(path)?;
        self.train_entries(entries, language).await
    }

    async fn train_entries(&self, entries: Vec<(String, u64)>, language: &str) -> Result<usize> {
        let mut indexed = 0;
        for (term, frequency) in &entries {
            if self.add(term, *frequency, Some(language), None).await? {
                indexed += 1;
            }
        }

        debug!(
            "trained {} lines for {} ({} new terms)",
            entries.len(),
            language,
            indexed
        );
        Ok(entries.len())
    }

    /// Find dictionary terms within `max_distance` edits of `term`.
    ///
    /// Only the best distance tier is kept. Results are ordered by distance,
    /// then by descending frequency, and truncated to `max_suggestions`.
    pub async fn lookup(
        &self,
        term: &str,
        language: Option<&str>,
        max_distance: Option<usize>,
        max_suggestions: Option<usize>,
    ) -> Result<Vec<Suggestion>> {
        self.check_ready()?;

        let language = self.resolve_language(language);
        let max_distance = self.config.resolve_max_distance(max_distance);
        let max_suggestions = self.config.resolve_max_suggestions(max_suggestions);
        let input = normalize(term);
        let input_len = input.chars().count();

        let _session = self.session(&language).await?;
        let max_key_length = self.store.max_entry_length().await?;
        if input_len.saturating_sub(max_distance) > max_key_length {
            trace!(
                "{:?} is longer than any key for {} ({})",
                input, language, max_key_length
            );
            return Ok(Vec::new());
        }

        let mut candidates = VecDeque::from([input.clone()]);
        let mut visited: AHashSet<String> = AHashSet::new();
        let mut suggested: AHashSet<String> = AHashSet::new();
        let mut suggestions: Vec<Suggestion> = Vec::new();
        let mut best: Option<usize> = None;

        while let Some(candidate) = candidates.pop_front() {
            let candidate_len = candidate.chars().count();
            let candidate_distance = input_len - candidate_len;
            if best.is_some_and(|best| best < candidate_distance) {
                break;
            }

            if let Some(entry) = self.store.get_entry(&candidate).await? {
                if entry.is_term() && suggested.insert(candidate.clone()) {
                    if admit(&mut suggestions, &mut best, candidate_distance) {
                        suggestions.push(Suggestion::new(
                            term,
                            candidate.clone(),
                            candidate_distance,
                            entry.frequency,
                        ));
                    }
                    if candidate_distance == 0 {
                        break;
                    }
                }

                let terms = self.store.get_terms_at(&entry.terms).await?;
                for (&index, resolved) in entry.terms.iter().zip(terms) {
                    let Some(resolved) = resolved else {
                        warn!("stale term reference #{} under {:?}", index, candidate);
                        continue;
                    };
                    if !suggested.insert(resolved.clone()) {
                        continue;
                    }

                    let distance =
                        self.term_distance(&input, input_len, candidate_len, &resolved);
                    if distance > max_distance || best.is_some_and(|best| distance > best) {
                        continue;
                    }

                    let Some(live) = self.store.get_entry(&resolved).await? else {
                        warn!("term #{} {:?} has no entry", index, resolved);
                        continue;
                    };
                    if admit(&mut suggestions, &mut best, distance) {
                        suggestions.push(Suggestion::new(term, resolved, distance, live.frequency));
                    }
                }
            }

            if candidate_distance < max_distance {
                for deleted in single_deletes(&candidate) {
                    if visited.insert(deleted.clone()) {
                        candidates.push_back(deleted);
                    }
                }
            }
        }

        Ok(rank_suggestions(suggestions, max_suggestions))
    }

    /// Same as [`SymSpell::lookup`] with every parameter given explicitly.
    pub async fn search(
        &self,
        input: &str,
        language: &str,
        max_distance: usize,
        max_suggestions: usize,
    ) -> Result<Vec<Suggestion>> {
        self.lookup(
            input,
            Some(language),
            Some(max_distance),
            Some(max_suggestions),
        )
        .await
    }

    /// Correct every word of a passage and reassemble it with its spacing.
    ///
    /// Tokens that are not words, single-character words and words without a
    /// suggestion are echoed unchanged. Words written in a different alphabet
    /// than the language's are echoed without a lookup. A correction of a
    /// word that started with an uppercase letter is capitalized the same way.
    pub async fn correct(
        &self,
        input: &str,
        language: Option<&str>,
        max_distance: Option<usize>,
    ) -> Result<Correction> {
        self.check_ready()?;

        let script = alphabet_for(&self.resolve_language(language));
        let tokens = self.tokenizer.tokenize(input);
        let lookups = tokens.iter().map(|token| async move {
            let foreign = matches!((script, token.alphabet), (Some(a), Some(b)) if a != b);
            if token.is_word() && token.len() >= 2 && !foreign {
                let found = self
                    .lookup(&token.value, language, max_distance, Some(1))
                    .await?;
                if let Some(best) = found.into_iter().next() {
                    return Ok::<_, GlossaError>(best);
                }
            }
            Ok(Suggestion::pass_through(token.value.clone()))
        });
        let found = try_join_all(lookups).await?;

        let mut output = String::with_capacity(input.len());
        let mut suggestions = Vec::with_capacity(tokens.len());
        for (token, mut suggestion) in tokens.iter().zip(found) {
            if starts_uppercase(&token.value)
                && let Some(text) = suggestion.suggestion.take()
            {
                suggestion.suggestion = Some(capitalize_first(&text));
            }

            output.push_str(suggestion.text());
            output.extend(std::iter::repeat_n(' ', token.distance));
            suggestions.push(suggestion);
        }
        output.retain(|c| c != '\0');

        Ok(Correction::new(input.to_string(), output, suggestions))
    }

    /// Remove every term and entry of the active language.
    pub async fn clear(&self) -> Result<()> {
        self.check_ready()?;

        let _writer = self.writer.lock().await;
        let language = self.language();
        let _session = self.session(&language).await?;
        self.store.clear().await?;
        debug!("symspell cleared {}", language);
        Ok(())
    }

    /// Distance between the query and a term reached through `candidate`.
    fn term_distance(
        &self,
        input: &str,
        input_len: usize,
        candidate_len: usize,
        resolved: &str,
    ) -> usize {
        if resolved == input {
            return 0;
        }

        let resolved_len = resolved.chars().count();
        if resolved_len == candidate_len {
            return input_len - candidate_len;
        }
        if input_len == candidate_len {
            return resolved_len.abs_diff(candidate_len);
        }

        let source: Vec<char> = resolved.chars().collect();
        let target: Vec<char> = input.chars().collect();
        let prefix = source
            .iter()
            .zip(&target)
            .take_while(|(a, b)| a == b)
            .count();
        let suffix = source
            .iter()
            .rev()
            .zip(target.iter().rev())
            .take(source.len().min(target.len()) - prefix)
            .take_while(|(a, b)| a == b)
            .count();

        let source: String = source[prefix..source.len() - suffix].iter().collect();
        let target: String = target[prefix..target.len() - suffix].iter().collect();
        self.edit_distance.lock().distance(&source, &target)
    }
}

/// Apply the best-tier threshold to a new suggestion at `distance`.
///
/// A strictly better distance drops everything accepted so far.
fn admit(suggestions: &mut Vec<Suggestion>, best: &mut Option<usize>, distance: usize) -> bool {
    match *best {
        Some(current) if distance > current => return false,
        Some(current) if distance < current => suggestions.clear(),
        _ => {}
    }
    *best = Some(distance);
    true
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;

    use super::*;
    use crate::language::{ARABIC, ENGLISH};
    use crate::storage::memory::MemoryStore;

    /// Memory store that counts entry reads.
    #[derive(Debug)]
    struct CountingStore {
        inner: MemoryStore,
        reads: AtomicUsize,
    }

    impl CountingStore {
        fn new() -> Self {
            CountingStore {
                inner: MemoryStore::new(),
                reads: AtomicUsize::new(0),
            }
        }

        fn take_reads(&self) -> usize {
            self.reads.swap(0, Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DataStore for CountingStore {
        fn name(&self) -> &'static str {
            "counting_store"
        }

        async fn initialize(&self) -> Result<()> {
            self.inner.initialize().await
        }

        fn is_initialized(&self) -> bool {
            self.inner.is_initialized()
        }

        async fn set_language(&self, language: &str) -> Result<()> {
            self.inner.set_language(language).await
        }

        async fn push_term(&self, term: &str) -> Result<usize> {
            self.inner.push_term(term).await
        }

        async fn get_term_at(&self, index: usize) -> Result<Option<String>> {
            self.inner.get_term_at(index).await
        }

        async fn get_entry(&self, key: &str) -> Result<Option<DictionaryEntry>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get_entry(key).await
        }

        async fn get_entries(&self, keys: &[String]) -> Result<Vec<Option<DictionaryEntry>>> {
            self.reads.fetch_add(keys.len(), Ordering::SeqCst);
            self.inner.get_entries(keys).await
        }

        async fn set_entry(&self, key: &str, entry: DictionaryEntry) -> Result<bool> {
            self.inner.set_entry(key, entry).await
        }

        async fn has_entry(&self, key: &str) -> Result<bool> {
            self.inner.has_entry(key).await
        }

        async fn max_entry_length(&self) -> Result<usize> {
            self.inner.max_entry_length().await
        }

        async fn clear(&self) -> Result<()> {
            self.inner.clear().await
        }
    }

    async fn engine_with(terms: &[(&str, u64)]) -> SymSpell {
        let engine = SymSpell::new(Arc::new(MemoryStore::new()));
        engine.initialize().await.unwrap();
        for (term, frequency) in terms {
            engine.add(term, *frequency, None, None).await.unwrap();
        }
        engine
    }

    #[tokio::test]
    async fn test_requires_initialize() {
        let engine = SymSpell::new(Arc::new(MemoryStore::new()));
        assert!(!engine.is_initialized());

        let err = engine.lookup("hello", None, None, None).await.unwrap_err();
        assert!(err.is_not_initialized());
        assert!(err.to_string().contains("please call initialize() first"));

        assert!(engine.add("hello", 1, None, None).await.is_err());
        assert!(engine.correct("hello", None, None).await.is_err());
        assert!(engine.clear().await.is_err());
        assert!(engine.set_language("ar").await.is_err());
    }

    #[tokio::test]
    async fn test_defaults() {
        let engine = SymSpell::new(Arc::new(MemoryStore::new()));
        assert_eq!(engine.max_distance(), 2);
        assert_eq!(engine.max_suggestions(), 5);
        assert_eq!(engine.language(), "en");
        assert_eq!(engine.edit_distance_name(), "damerau_levenshtein");
        assert_eq!(engine.store().name(), "memory_store");
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let config = SymSpellConfig::default().with_max_suggestions(0);
        assert!(SymSpell::with_config(Arc::new(MemoryStore::new()), config).is_err());
    }

    #[tokio::test]
    async fn test_add_indexes_delete_variants() {
        let engine = engine_with(&[("abc", 3)]).await;
        let store = engine.store();

        assert_eq!(
            store.get_entry("abc").await.unwrap(),
            Some(DictionaryEntry::new(3))
        );
        assert_eq!(
            store.get_entry("ab").await.unwrap(),
            Some(DictionaryEntry::placeholder(0))
        );
        assert_eq!(
            store.get_entry("c").await.unwrap(),
            Some(DictionaryEntry::placeholder(0))
        );
        assert_eq!(store.max_entry_length().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_add_short_terms_ignored() {
        let engine = engine_with(&[]).await;
        assert!(!engine.add("a", 5, None, None).await.unwrap());
        assert!(!engine.add("  b ", 5, None, None).await.unwrap());
        assert_eq!(engine.store().get_term_at(0).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let engine = engine_with(&[]).await;
        assert!(engine.add("Hello", 4, None, None).await.unwrap());
        assert!(!engine.add("hello", 9, None, None).await.unwrap());

        let store = engine.store();
        assert_eq!(store.get_entry("hello").await.unwrap().unwrap().frequency, 4);
        assert_eq!(store.get_term_at(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_placeholder_promoted_to_term() {
        let engine = engine_with(&[("abc", 1)]).await;
        assert!(engine.add("ab", 7, None, None).await.unwrap());

        let entry = engine.store().get_entry("ab").await.unwrap().unwrap();
        assert_eq!(entry.frequency, 7);
        assert_eq!(entry.terms, vec![0]);
        assert_eq!(engine.store().get_term_at(1).await.unwrap().as_deref(), Some("ab"));
    }

    #[tokio::test]
    async fn test_exact_match_first() {
        let engine = engine_with(&[("hello", 10), ("hallo", 50), ("help", 30)]).await;
        let suggestions = engine.lookup("hello", None, None, None).await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggestion.as_deref(), Some("hello"));
        assert_eq!(suggestions[0].distance, 0);
        assert_eq!(suggestions[0].frequency, 10);
    }

    #[tokio::test]
    async fn test_best_tier_only() {
        let engine = engine_with(&[("cart", 5), ("care", 50), ("cat", 1)]).await;

        let suggestions = engine.lookup("carts", None, None, None).await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggestion.as_deref(), Some("cart"));
        assert_eq!(suggestions[0].distance, 1);
    }

    #[tokio::test]
    async fn test_ranking_by_frequency() {
        let engine = engine_with(&[("bat", 5), ("cat", 50), ("hat", 20)]).await;

        let suggestions = engine.lookup("xat", None, Some(1), None).await.unwrap();
        let words: Vec<&str> = suggestions.iter().map(|s| s.text()).collect();
        assert_eq!(words, vec!["cat", "hat", "bat"]);
        assert!(suggestions.iter().all(|s| s.distance == 1));

        let top = engine.lookup("xat", None, Some(1), Some(2)).await.unwrap();
        assert_eq!(top.len(), 2);
    }

    #[tokio::test]
    async fn test_no_match_is_empty() {
        let engine = engine_with(&[("hello", 1)]).await;
        let suggestions = engine.lookup("zzzzz", None, None, None).await.unwrap();
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_early_reject_long_query() {
        let store = Arc::new(CountingStore::new());
        let engine = SymSpell::new(store.clone());
        engine.initialize().await.unwrap();
        engine.add("hello", 1, None, None).await.unwrap();
        store.take_reads();

        let suggestions = engine
            .lookup("hellohellohello", None, None, None)
            .await
            .unwrap();
        assert!(suggestions.is_empty());
        assert_eq!(store.take_reads(), 0);

        engine.lookup("helo", None, None, None).await.unwrap();
        assert!(store.take_reads() > 0);
    }

    #[tokio::test]
    async fn test_stale_term_reference_skipped() {
        let engine = engine_with(&[("hello", 3)]).await;
        let entry = DictionaryEntry {
            frequency: 0,
            terms: vec![0, 99],
        };
        engine.store().set_entry("helo", entry).await.unwrap();

        let suggestions = engine.lookup("helo", None, None, None).await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggestion.as_deref(), Some("hello"));
        assert_eq!(suggestions[0].distance, 1);
        assert_eq!(suggestions[0].frequency, 3);
    }

    #[tokio::test]
    async fn test_zero_frequency_stored_as_one() {
        let engine = engine_with(&[("hello", 0)]).await;
        let suggestions = engine.lookup("hello", None, None, None).await.unwrap();
        assert_eq!(suggestions[0].frequency, 1);
    }

    #[tokio::test]
    async fn test_correct_skips_foreign_alphabet() {
        let store = Arc::new(CountingStore::new());
        let engine = SymSpell::new(store.clone());
        engine.initialize().await.unwrap();
        engine.add("ممتاز", 1, Some(ARABIC), None).await.unwrap();
        store.take_reads();

        let correction = engine.correct("ممتاد", Some(ENGLISH), None).await.unwrap();
        assert_eq!(correction.output, "ممتاد");
        assert!(!correction.suggestions[0].is_suggested());
        assert_eq!(store.take_reads(), 0);

        let correction = engine.correct("ممتاد", Some(ARABIC), None).await.unwrap();
        assert_eq!(correction.output, "ممتاز");
        assert!(store.take_reads() > 0);
    }

    #[tokio::test]
    async fn test_correct_preserves_case_and_spacing() {
        let engine = engine_with(&[("quick", 3), ("brown", 2), ("fox", 1)]).await;

        let correction = engine
            .correct("The Qiuck brwn fox!", None, None)
            .await
            .unwrap();
        assert_eq!(correction.input, "The Qiuck brwn fox!");
        assert_eq!(correction.output, "The Quick brown fox!");
        assert_eq!(correction.suggestions.len(), 5);
        assert!(!correction.suggestions[0].is_suggested());
        assert_eq!(correction.suggestions[1].suggestion.as_deref(), Some("Quick"));
        assert_eq!(correction.suggestions[1].distance, 1);
        assert_eq!(correction.suggestions[4].term, "!");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("academically"), "Academically");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
        assert!(starts_uppercase("Über"));
        assert!(!starts_uppercase("über"));
        assert!(!starts_uppercase("ممتاز"));
    }

    #[test]
    fn test_admit() {
        let mut suggestions = vec![Suggestion::new("x", "far", 2, 1)];
        let mut best = Some(2);

        assert!(!admit(&mut suggestions, &mut best, 3));
        assert!(admit(&mut suggestions, &mut best, 2));
        assert_eq!(suggestions.len(), 1);
        assert!(admit(&mut suggestions, &mut best, 1));
        assert!(suggestions.is_empty());
        assert_eq!(best, Some(1));
    }
}
