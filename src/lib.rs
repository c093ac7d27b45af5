//! # Glossa
//!
//! Fuzzy term lookup and text correction for Rust, built on the SymSpell
//! delete-variant algorithm.
//!
//! ## Features
//!
//! - Per-language dictionaries behind a pluggable async storage contract
//! - True Damerau-Levenshtein scoring with reusable scratch buffers
//! - Ranked lookups bounded by edit distance
//! - Whole-passage correction that keeps case and spacing
//! - Latin and Arabic aware tokenization
//!
//! ## Example
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
//!     engine.train(&["academically,1", "moving,3"], "en").await?;
//!
//!     let correction = engine.correct("Acaddemicaly moving", None, None).await?;
//!     assert_eq!(correction.output, "Academically moving");
//!     Ok::<(), glossa::error::GlossaError>(())
//! })
//! # }
//! ```

pub mod analysis;
pub mod error;
pub mod language;
pub mod spelling;
pub mod storage;

pub mod prelude {
    pub use crate::analysis::token::{Token, TokenTag};
    pub use crate::analysis::tokenizer::{ScriptTokenizer, Tokenizer};
    pub use crate::error::{GlossaError, Result};
    pub use crate::language::Alphabet;
    pub use crate::spelling::{
        Correction, DamerauLevenshtein, DictionaryEntry, EditDistance, Suggestion, SymSpell,
        SymSpellConfig,
    };
    pub use crate::storage::DataStore;
    pub use crate::storage::memory::MemoryStore;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
