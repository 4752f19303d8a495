use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order matters: multi-character operators must come before their
    // single-character prefixes, and comments before '/'.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("\\+\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++") },
        RegexPattern { regex: Regex::new("--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--") },
        RegexPattern { regex: Regex::new("\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
        RegexPattern { regex: Regex::new("-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
        RegexPattern { regex: Regex::new("\\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=") },
        RegexPattern { regex: Regex::new("/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=") },
        RegexPattern { regex: Regex::new("%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=") },
        RegexPattern { regex: Regex::new("\\^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CaretEquals, "^=") },
        RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
        RegexPattern { regex: Regex::new("\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    lines: Vec<Rc<String>>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        let lines = source
            .lines()
            .map(|line| Rc::new(String::from(line)))
            .collect();

        Lexer {
            tokens: vec![],
            lines,
            pos: 0,
            line: 1,
            column: 1,
            source,
        }
    }

    /// Advances `n` bytes through the source, updating line and column.
    pub fn advance_n(&mut self, n: usize) {
        for c in self.source[self.pos..self.pos + n].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The span at the current read position.
    pub fn span(&self) -> Span {
        let snippet = self
            .lines
            .get((self.line - 1) as usize)
            .cloned()
            .unwrap_or_default();

        Span {
            line: self.line,
            column: self.column,
            snippet,
        }
    }

    pub fn at(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    // The caller has already checked the pattern matches at the cursor.
    let value = String::from(regex.find(lexer.remainder()).unwrap().as_str());

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, value.clone(), lexer.span()));
    lexer.advance_n(value.len());
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = String::from(regex.find(lexer.remainder()).unwrap().as_str());

    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Int
    };

    lexer.push(MK_TOKEN!(kind, matched.clone(), lexer.span()));
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let end = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(end);
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = String::from(regex.find(lexer.remainder()).unwrap().as_str());

    // Strip the quotes and process escape sequences.
    let raw = &matched[1..matched.len() - 1];

    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('n') => {
                    result.push('\n');
                    chars.next();
                }
                Some('t') => {
                    result.push('\t');
                    chars.next();
                }
                Some('r') => {
                    result.push('\r');
                    chars.next();
                }
                Some('\\') => {
                    result.push('\\');
                    chars.next();
                }
                Some('0') => {
                    result.push('\0');
                    chars.next();
                }
                _ => {
                    result.push(ch); // Keep the lone backslash
                }
            }
        } else {
            result.push(ch);
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::String, result, lexer.span()));
    lexer.advance_n(matched.len());
}

/// Tokenizes a whole source string.
///
/// Produces a stream of classified tokens terminated by an `EOF` sentinel,
/// or a Lexical diagnostic for the first character no pattern matches.
pub fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            let matches_here = pattern
                .regex
                .find(lex.remainder())
                .map(|found| found.start() == 0)
                .unwrap_or(false);

            if matches_here {
                (pattern.handler)(&mut lex, &pattern.regex);
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    token: lex.at().to_string(),
                },
                lex.span(),
            ));
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), lex.span()));
    Ok(lex.tokens)
}
