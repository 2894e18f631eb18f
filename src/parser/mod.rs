//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a [`Program`](crate::ast::ast::Program). It is a recursive-descent
//! parser with one function per precedence level and handles:
//!
//! - Statement parsing (declarations, functions, conditionals, loops, logs)
//! - Expression parsing (assignment, ternary, binary ops, calls, members)
//! - Literals, callbacks, pipes and short data notation
//!
//! Statements are dispatched through a lookup table keyed by the leading
//! token; binary operators find their precedence level the same way.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
