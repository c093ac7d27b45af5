//! Token types produced by the tokenizer.
//!
//! A [`Token`] carries its text, a [`TokenTag`] classification, the
//! [`Alphabet`] of the pattern that recognized it and the number of single
//! spaces that followed it in the source text. The spacing count is what lets
//! the corrector reassemble a passage with its original layout.
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::token::{Token, TokenTag};
//! use glossa::language::Alphabet;
//!
//! let token = Token::tagged("hello", TokenTag::Word, Some(Alphabet::Latin))
//!     .with_offsets(0, 5)
//!     .with_distance(1);
//!
//! assert_eq!(token.value, "hello");
//! assert_eq!(token.tag, Some(TokenTag::Word));
//! assert_eq!(token.distance, 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::Alphabet;

/// Classification of a token's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenTag {
    /// Web addresses and host names
    Url,
    /// Latin or Arabic-Indic numerals
    Number,
    /// Alphabetic words
    Word,
    /// Punctuation marks
    Punctuation,
    /// Whitespace runs
    Space,
    /// Content no pattern recognized (emoji, stray symbols)
    None,
}

impl TokenTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenTag::Url => "url",
            TokenTag::Number => "number",
            TokenTag::Word => "word",
            TokenTag::Punctuation => "punctuation",
            TokenTag::Space => "space",
            TokenTag::None => "none",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged substring of the tokenizer input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text
    pub value: String,

    /// Classification, `None` while the token still needs re-segmentation
    pub tag: Option<TokenTag>,

    /// Script of the pattern that produced the token
    pub alphabet: Option<Alphabet>,

    /// Number of single spaces that followed this token in the source
    pub distance: usize,

    /// Byte offset where this token starts in the original text
    pub start_offset: usize,

    /// Byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create an untagged token.
    pub fn new<S: Into<String>>(value: S) -> Self {
        Token {
            value: value.into(),
            tag: None,
            alphabet: None,
            distance: 0,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a token with a tag and an optional alphabet.
    pub fn tagged<S: Into<String>>(value: S, tag: TokenTag, alphabet: Option<Alphabet>) -> Self {
        Token {
            tag: Some(tag),
            alphabet,
            ..Token::new(value)
        }
    }

    /// Set the byte offsets of the token in the original text.
    pub fn with_offsets(mut self, start_offset: usize, end_offset: usize) -> Self {
        self.start_offset = start_offset;
        self.end_offset = end_offset;
        self
    }

    /// Set the trailing spacing count.
    pub fn with_distance(mut self, distance: usize) -> Self {
        self.distance = distance;
        self
    }

    /// Get the length of the token text in characters.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check if the token carries the given tag.
    pub fn is(&self, tag: TokenTag) -> bool {
        self.tag == Some(tag)
    }

    /// Check if the token is a word eligible for correction.
    pub fn is_word(&self) -> bool {
        self.is(TokenTag::Word)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
