//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a recursive descent parser with a
//! precedence-climbing expression chain and handles:
//!
//! - Statement parsing (declarations, control flow, functions, structs)
//! - Expression parsing over eight precedence levels, left-associative
//! - Fail-fast structured diagnostics carrying line, column and snippet
//!
//! There is no error recovery: the first malformed construct aborts the
//! whole parse and no partial AST is returned.

pub mod expr;
pub mod parser;
pub mod stmt;
