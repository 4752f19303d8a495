//! Parser state and entry point.
//!
//! The [`Parser`] owns the token stream and a single read cursor. All
//! routines advance the cursor only through explicit consume steps; no
//! token is consumed twice, and one-token lookahead is available through
//! [`Parser::peek_kind`].

use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::stmt::parse_stmt;

/// The parsing engine: the token stream plus a read cursor.
///
/// One instance parses one token stream once; construct a fresh parser per
/// parse. The stream must be terminated by an `EOF` sentinel token, which
/// the lexer always appends.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            !tokens.is_empty(),
            "token stream must be terminated by an EOF sentinel"
        );
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token `offset` positions ahead, or `EOF`
    /// when the stream ends first.
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances past the current token and returns it. The cursor never
    /// moves past the `EOF` sentinel.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the given kind and consumes it.
    ///
    /// On mismatch, raises a Syntactic diagnostic carrying `message` and
    /// pointing at the offending token, consuming nothing.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::Expected {
                    message: String::from(message),
                    token: token.value.clone(),
                },
                token.span.clone(),
            ));
        }

        Ok(self.advance().clone())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }
}

/// Parses a stream of tokens into a program.
///
/// This is the main entry point: it consumes the whole token stream and
/// returns the ordered list of top-level statements, or the first
/// diagnostic encountered. No partial program is ever returned.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, Error> {
    if tokens.is_empty() {
        return Ok(vec![]);
    }

    let mut parser = Parser::new(tokens);
    let mut program = vec![];

    while parser.has_tokens() {
        program.push(parse_stmt(&mut parser)?);
    }

    Ok(program)
}
