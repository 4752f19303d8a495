#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Source location of a token or AST node: 1-based line and column plus the
/// rendered source line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub line: u32,
    pub column: u32,
    pub snippet: Rc<String>,
}

impl Span {
    pub fn null() -> Self {
        Span {
            line: 0,
            column: 0,
            snippet: Rc::new(String::new()),
        }
    }
}

pub fn display_error(error: &Error, file: &str) {
    /*
        Error: Syntactic (expected ';' after expression in let statement)
        -> final.lyre
           |
        20 | let a = 5
           | --------^
    */

    let span = error.get_span();

    let line_string = span.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {} ({})", error.kind(), error);
    } else {
        println!("Error: {} ({}; {})", error.kind(), error, error.get_tip());
    }
    println!("-> {}", file);
    println!("{:>padding$}", "|");

    let (snippet_trimmed, removed_whitespace) = remove_starting_whitespace(&span.snippet);
    println!("{} | {}", line_string, snippet_trimmed.trim_end());

    let arrows = (span.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_remove_starting_whitespace() {
        let (trimmed, removed) = super::remove_starting_whitespace("    let x = 5;");
        assert_eq!(trimmed, "let x = 5;");
        assert_eq!(removed, 4);

        let (trimmed, removed) = super::remove_starting_whitespace("no indent");
        assert_eq!(trimmed, "no indent");
        assert_eq!(removed, 0);
    }
}
