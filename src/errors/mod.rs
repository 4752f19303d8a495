//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics raised by the lexer and the parser:
//!
//! - A structured error carrying the offending source position and snippet
//! - Specific error variants for each kind of malformed construct
//! - Helpful error messages and suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;
