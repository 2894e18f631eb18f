//! Lexical analysis module for the sQeeZ front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into the token stream the parser consumes. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - The two-level token tag (category + discriminant)
//! - Quote-delimited string/char text, hex codes and comments
//! - INIT/EOF sentinels and token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
