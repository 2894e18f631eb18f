//! Error types and error handling for the sQeeZ front end.
//!
//! This module defines the errors raised while lexing and parsing. It includes:
//!
//! - Error structures with source position information
//! - Token-assertion, structural and stream-exhaustion variants
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
