//! In-memory storage implementation for testing and single-process use.

use std::sync::atomic::{AtomicBool, Ordering};

use ahash::AHashMap;
use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;

use crate::error::{GlossaError, Result};
use crate::language::DEFAULT_LANGUAGE;
use crate::spelling::dictionary::DictionaryEntry;
use crate::storage::DataStore;

/// Terms and entries of a single language.
#[derive(Debug, Default)]
struct Namespace {
    terms: Vec<String>,
    entries: AHashMap<String, DictionaryEntry>,
    max_entry_length: usize,
}

#[derive(Debug)]
struct MemoryState {
    language: String,
    namespaces: AHashMap<String, Namespace>,
}

impl MemoryState {
    fn active(&self) -> Option<&Namespace> {
        self.namespaces.get(&self.language)
    }

    fn active_mut(&mut self) -> &mut Namespace {
        self.namespaces.entry(self.language.clone()).or_default()
    }
}

/// A hash-table backed [`DataStore`] keeping one namespace per language.
///
/// The whole dataset lives in process memory. Namespaces are created on
/// first use and each tracks its own maximum key length.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
    initialized: AtomicBool,
}

impl MemoryStore {
    /// Create a new store whose active language is the default one.
    pub fn new() -> Self {
        Self::with_language(DEFAULT_LANGUAGE)
    }

    /// Create a new store with the given active language.
    pub fn with_language<S: Into<String>>(language: S) -> Self {
        MemoryStore {
            state: RwLock::new(MemoryState {
                language: language.into(),
                namespaces: AHashMap::new(),
            }),
            initialized: AtomicBool::new(false),
        }
    }

    fn check_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(GlossaError::not_initialized(
                "memory store must be initialized before use",
            ))
        }
    }

    /// Get the active language.
    pub fn language(&self) -> String {
        self.state.read().language.clone()
    }

    /// Get the number of language namespaces created so far.
    pub fn language_count(&self) -> usize {
        self.state.read().namespaces.len()
    }

    /// Get the number of terms in the active language.
    pub fn term_count(&self) -> usize {
        self.state.read().active().map_or(0, |ns| ns.terms.len())
    }

    /// Get the number of keys (terms and delete variants) in the active language.
    pub fn entry_count(&self) -> usize {
        self.state.read().active().map_or(0, |ns| ns.entries.len())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory_store"
    }

    async fn initialize(&self) -> Result<()> {
        let mut state = self.state.write();
        state.active_mut();
        self.initialized.store(true, Ordering::Release);
        debug!("memory store initialized for language {:?}", state.language);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    async fn set_language(&self, language: &str) -> Result<()> {
        self.check_initialized()?;

        let mut state = self.state.write();
        if state.language != language {
            debug!("memory store switching language {:?} -> {:?}", state.language, language);
            state.language = language.to_string();
        }
        state.active_mut();
        Ok(())
    }

    async fn push_term(&self, term: &str) -> Result<usize> {
        self.check_initialized()?;

        let mut state = self.state.write();
        let namespace = state.active_mut();
        namespace.terms.push(term.to_string());
        Ok(namespace.terms.len())
    }

    async fn get_term_at(&self, index: usize) -> Result<Option<String>> {
        self.check_initialized()?;

        let state = self.state.read();
        Ok(state.active().and_then(|ns| ns.terms.get(index).cloned()))
    }

    async fn get_terms_at(&self, indexes: &[usize]) -> Result<Vec<Option<String>>> {
        self.check_initialized()?;

        let state = self.state.read();
        let terms = match state.active() {
            Some(ns) => indexes.iter().map(|&i| ns.terms.get(i).cloned()).collect(),
            None => vec![None; indexes.len()],
        };
        Ok(terms)
    }

    async fn get_entry(&self, key: &str) -> Result<Option<DictionaryEntry>> {
        self.check_initialized()?;
        if key.is_empty() {
            return Ok(None);
        }

        let state = self.state.read();
        Ok(state.active().and_then(|ns| ns.entries.get(key).cloned()))
    }

    async fn get_entries(&self, keys: &[String]) -> Result<Vec<Option<DictionaryEntry>>> {
        self.check_initialized()?;

        let state = self.state.read();
        let entries = match state.active() {
            Some(ns) => keys.iter().map(|key| ns.entries.get(key).cloned()).collect(),
            None => vec![None; keys.len()],
        };
        Ok(entries)
    }

    async fn set_entry(&self, key: &str, entry: DictionaryEntry) -> Result<bool> {
        self.check_initialized()?;

        let mut state = self.state.write();
        let namespace = state.active_mut();
        let length = key.chars().count();
        if length > namespace.max_entry_length {
            namespace.max_entry_length = length;
        }
        namespace.entries.insert(key.to_string(), entry);
        Ok(true)
    }

    async fn has_entry(&self, key: &str) -> Result<bool> {
        self.check_initialized()?;

        let state = self.state.read();
        Ok(state.active().is_some_and(|ns| ns.entries.contains_key(key)))
    }

    async fn max_entry_length(&self) -> Result<usize> {
        self.check_initialized()?;

        let state = self.state.read();
        Ok(state.active().map_or(0, |ns| ns.max_entry_length))
    }

    async fn clear(&self) -> Result<()> {
        self.check_initialized()?;

        let mut state = self.state.write();
        let language = state.language.clone();
        state.namespaces.insert(language.clone(), Namespace::default());
        debug!("memory store cleared language {:?}", language);
        Ok(())
    }
}
