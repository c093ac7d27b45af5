//! Storage abstraction layer for Glossa.
//!
//! The SymSpell engine keeps no dictionary data of its own. Every term and
//! dictionary entry lives behind a [`DataStore`], which exposes two
//! structures per language:
//!
//! - an ordered, append-only term sequence where a term's position is its
//!   permanent identity
//! - a hash table from keys (terms and delete variants) to
//!   [`DictionaryEntry`] values
//!
//! Every operation is `async` so that adapters backed by a network service
//! fit the same contract as the in-process [`memory::MemoryStore`].
//!
//! # Example
//!
//! ```
//! use glossa::spelling::dictionary::DictionaryEntry;
//! use glossa::storage::DataStore;
//! use glossa::storage::memory::MemoryStore;
//!
//! # fn main() -> glossa::error::Result<()> {
//! tokio_test::block_on(async {
//!     let store = MemoryStore::new();
//!     store.initialize().await?;
//!
//!     let count = store.push_term("hello").await?;
//!     store.set_entry("hello", DictionaryEntry::new(3)).await?;
//!
//!     assert_eq!(count, 1);
//!     assert_eq!(store.get_term_at(0).await?.as_deref(), Some("hello"));
//!     assert_eq!(store.max_entry_length().await?, 5);
//!     Ok::<(), glossa::error::GlossaError>(())
//! })
//! # }
//! ```

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::Result;
use crate::spelling::dictionary::DictionaryEntry;

pub mod memory;

/// Ordered-list plus hash-table storage for one or more languages.
///
/// All reads and writes apply to the active language namespace, selected with
/// [`DataStore::set_language`].
#[async_trait]
pub trait DataStore: Send + Sync + Debug {
    /// Get the name of this store implementation.
    fn name(&self) -> &'static str;

    /// Prepare the store for use.
    async fn initialize(&self) -> Result<()>;

    /// Check whether [`DataStore::initialize`] has completed.
    fn is_initialized(&self) -> bool;

    /// Switch the active namespace, creating it if absent.
    ///
    /// Switching to the already-active language is a no-op.
    async fn set_language(&self, language: &str) -> Result<()>;

    /// Append a term to the active term sequence.
    ///
    /// Returns the new length of the sequence, so the term's index is the
    /// returned count minus one.
    async fn push_term(&self, term: &str) -> Result<usize>;

    /// Resolve a term index, `None` if no term lives there.
    async fn get_term_at(&self, index: usize) -> Result<Option<String>>;

    /// Resolve several term indices at once, preserving order.
    async fn get_terms_at(&self, indexes: &[usize]) -> Result<Vec<Option<String>>> {
        let mut terms = Vec::with_capacity(indexes.len());
        for &index in indexes {
            terms.push(self.get_term_at(index).await?);
        }
        Ok(terms)
    }

    /// Fetch the entry stored under `key`.
    async fn get_entry(&self, key: &str) -> Result<Option<DictionaryEntry>>;

    /// Fetch the entries for several keys at once, preserving order.
    async fn get_entries(&self, keys: &[String]) -> Result<Vec<Option<DictionaryEntry>>> {
        let mut entries = Vec::with_capacity(keys.len());
        for key in keys {
            entries.push(self.get_entry(key).await?);
        }
        Ok(entries)
    }

    /// Store `entry` under `key`, updating the maximum key length.
    async fn set_entry(&self, key: &str, entry: DictionaryEntry) -> Result<bool>;

    /// Check if an entry exists under `key`.
    async fn has_entry(&self, key: &str) -> Result<bool>;

    /// Longest key, in characters, ever stored for the active language.
    async fn max_entry_length(&self) -> Result<usize>;

    /// Remove all terms and entries of the active language.
    async fn clear(&self) -> Result<()>;
}
