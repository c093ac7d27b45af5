//! Tokenizer implementations for text analysis.
//!
//! # Available Tokenizers
//!
//! - [`script::ScriptTokenizer`] - Alphabet-aware recursive segmentation of
//!   URLs, numbers, words and punctuation in Latin and Arabic text
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::tokenizer::Tokenizer;
//! use glossa::analysis::tokenizer::script::ScriptTokenizer;
//!
//! let tokenizer = ScriptTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello world");
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::Token;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization is total: any input, including text no pattern recognizes,
/// yields a token sequence rather than an error. The trait requires
/// `Send + Sync` so a tokenizer can be shared by concurrent corrections.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use glossa::analysis::token::{Token, TokenTag};
/// use glossa::analysis::tokenizer::Tokenizer;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Vec<Token> {
///         text.split(',')
///             .map(|s| Token::tagged(s.trim(), TokenTag::Word, None))
///             .collect()
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod script;

pub use script::ScriptTokenizer;
