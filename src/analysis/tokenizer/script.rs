//! Alphabet-aware tokenizer with recursive re-segmentation.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenTag};
use crate::error::{GlossaError, Result};
use crate::language::Alphabet;

const URL_PATTERN: &str =
    r"(?i-u)[()https:/w.a-z0-9@:%_+~#=?]{2,256}\.[a-z]{2,6}\b[-a-z0-9@:%_+.~#?&/=]*";
const LATIN_NUMBER_PATTERN: &str = r"[0-9]+/[0-9]+|[0-9](?:[,\-./]?[0-9])*(?:\.[0-9]+)?";
const ARABIC_NUMBER_PATTERN: &str = r"[\x{0660}-\x{0669}]+";
const LATIN_WORD_PATTERN: &str = r"[A-Za-zÀ-ÖØ-öø-ÿ]+";
const ARABIC_WORD_PATTERN: &str = r"[\x{0620}-\x{06EF}]+";
const LATIN_PUNCTUATION_PATTERN: &str = r#"[.!?;\-()\[\]{}"]"#;
const ARABIC_PUNCTUATION_PATTERN: &str = r"[،؟]";
const SPACE_PATTERN: &str = r"\s+";

/// A single classification rule: tokens matching `regex` receive `tag`.
#[derive(Clone, Debug)]
pub struct TokenPattern {
    regex: Regex,
    tag: TokenTag,
    alphabet: Option<Alphabet>,
}

impl TokenPattern {
    /// Compile a classification rule.
    pub fn new(pattern: &str, tag: TokenTag, alphabet: Option<Alphabet>) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| GlossaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(TokenPattern {
            regex,
            tag,
            alphabet,
        })
    }

    /// Get the regex pattern of this rule.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Get the tag assigned by this rule.
    pub fn tag(&self) -> TokenTag {
        self.tag
    }

    /// Get the alphabet assigned by this rule.
    pub fn alphabet(&self) -> Option<Alphabet> {
        self.alphabet
    }
}

lazy_static! {
    static ref DEFAULT_PATTERNS: Arc<Vec<TokenPattern>> = {
        let specs = [
            (URL_PATTERN, TokenTag::Url, None),
            (LATIN_NUMBER_PATTERN, TokenTag::Number, Some(Alphabet::Latin)),
            (ARABIC_NUMBER_PATTERN, TokenTag::Number, Some(Alphabet::Arabic)),
            (LATIN_WORD_PATTERN, TokenTag::Word, Some(Alphabet::Latin)),
            (ARABIC_WORD_PATTERN, TokenTag::Word, Some(Alphabet::Arabic)),
            (LATIN_PUNCTUATION_PATTERN, TokenTag::Punctuation, Some(Alphabet::Latin)),
            (ARABIC_PUNCTUATION_PATTERN, TokenTag::Punctuation, Some(Alphabet::Arabic)),
            (SPACE_PATTERN, TokenTag::Space, None),
        ];
        let patterns = specs
            .into_iter()
            .map(|(pattern, tag, alphabet)| {
                TokenPattern::new(pattern, tag, alphabet).expect("built-in token pattern must compile")
            })
            .collect();
        Arc::new(patterns)
    };
}

/// Splits text into URL, number, word, punctuation and space tokens for
/// Latin and Arabic scripts.
///
/// Patterns are tried in priority order on a segment. The first pattern with
/// at least one match splits the segment; matches become tagged tokens and
/// the non-blank text between them is segmented again from the top of the
/// pattern list. A segment that ends up as a single unrecognized piece is
/// tagged [`TokenTag::None`].
///
/// Every token records how many spaces followed it (0 or 1), so
/// concatenating token values with that spacing reproduces single-spaced
/// input.
#[derive(Clone, Debug)]
pub struct ScriptTokenizer {
    patterns: Arc<Vec<TokenPattern>>,
}

impl ScriptTokenizer {
    /// Create a tokenizer with the built-in Latin/Arabic patterns.
    pub fn new() -> Self {
        ScriptTokenizer {
            patterns: Arc::clone(&DEFAULT_PATTERNS),
        }
    }

    /// Create a tokenizer from custom rules, highest priority first.
    pub fn with_patterns(patterns: Vec<TokenPattern>) -> Result<Self> {
        if patterns.is_empty() {
            return Err(GlossaError::analysis("at least one token pattern is required"));
        }

        Ok(ScriptTokenizer {
            patterns: Arc::new(patterns),
        })
    }

    /// Get the rules used by this tokenizer, in priority order.
    pub fn patterns(&self) -> &[TokenPattern] {
        &self.patterns
    }

    /// Tokenize a pending piece of text and push the finished tokens to `out`.
    ///
    /// `offset` is the absolute byte offset of `value` in the original input
    /// and `distance` the spacing that followed `value` in its parent.
    fn tokenize_input(&self, value: &str, offset: usize, distance: usize, out: &mut Vec<Token>) {
        let segment = value.trim();
        if segment.is_empty() {
            return;
        }

        let base = offset + (value.len() - value.trim_start().len());
        let pieces = self.tokenize_segment(segment);
        let last = pieces.len().saturating_sub(1);

        for (i, mut token) in pieces.into_iter().enumerate() {
            token.distance = if i == last {
                distance
            } else {
                let content_end = token.start_offset + token.value.trim_end().len();
                usize::from(segment[content_end..].starts_with(' '))
            };
            token.start_offset += base;
            token.end_offset += base;

            if token.tag.is_none() {
                let (start, token_distance) = (token.start_offset, token.distance);
                self.tokenize_input(&token.value, start, token_distance, out);
            } else {
                out.push(token);
            }
        }
    }

    /// Split one trimmed segment with the first pattern that matches it.
    ///
    /// Offsets in the returned tokens are relative to `segment`.
    fn tokenize_segment(&self, segment: &str) -> Vec<Token> {
        for pattern in self.patterns.iter() {
            let mut tokens = Vec::new();
            let mut last_end = 0;
            let mut matched = false;

            for mat in pattern.regex.find_iter(segment) {
                matched = true;
                push_gap(segment, last_end, mat.start(), &mut tokens);

                let raw = mat.as_str();
                let text = raw.trim();
                if !text.is_empty() {
                    let start = mat.start() + (raw.len() - raw.trim_start().len());
                    tokens.push(
                        Token::tagged(text, pattern.tag, pattern.alphabet)
                            .with_offsets(start, start + text.len()),
                    );
                }
                last_end = mat.end();
            }

            if matched {
                push_gap(segment, last_end, segment.len(), &mut tokens);
                return finish_segment(tokens);
            }
        }

        finish_segment(vec![Token::new(segment).with_offsets(0, segment.len())])
    }
}

/// Keep the unmatched text between two matches if it is not blank.
fn push_gap(segment: &str, start: usize, end: usize, tokens: &mut Vec<Token>) {
    if start >= end {
        return;
    }

    let gap = &segment[start..end];
    if !gap.trim().is_empty() {
        tokens.push(Token::new(gap).with_offsets(start, end));
    }
}

/// A lone untagged piece cannot be split further.
fn finish_segment(mut tokens: Vec<Token>) -> Vec<Token> {
    if tokens.len() == 1 && tokens[0].tag.is_none() {
        tokens[0].tag = Some(TokenTag::None);
    }
    tokens
}

impl Default for ScriptTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for ScriptTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.tokenize_input(text, 0, 0, &mut tokens);
        tokens
    }

    fn name(&self) -> &'static str {
        "script"
    }
}
