//! Text analysis module for Glossa.
//!
//! This module provides tokenization for whole-passage correction: the input
//! is split into tagged tokens that remember how much spacing followed them.

pub mod token;
pub mod tokenizer;
