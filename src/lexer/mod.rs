//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into a stream
//! of tokens for the parser. It handles:
//!
//! - Single-character operators and delimiters
//! - Identifiers and keyword classification
//! - Integer literals
//! - Whitespace skipping and `ILLEGAL` tokens for anything unrecognised

pub mod lexer;
pub mod tokens;
