use std::fmt::Display;

use thiserror::Error as ThisError;

use crate::Span;

/// The layer a diagnostic originates from. The parser only ever raises
/// `Syntactic`; `Lexical` covers characters the tokenizer cannot match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntactic,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "Lexical"),
            ErrorKind::Syntactic => write!(f, "Syntactic"),
        }
    }
}

/// A structured diagnostic: what went wrong plus where it went wrong.
///
/// The first error aborts the whole parse; no partial AST is ever returned
/// alongside one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorKind::Lexical,
            _ => ErrorKind::Syntactic,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::Expected { .. } => "Expected",
            ErrorImpl::ExpectedPrimary { .. } => "ExpectedPrimary",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::DuplicateStructField { .. } => "DuplicateStructField",
            ErrorImpl::UnterminatedBlock { .. } => "UnterminatedBlock",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::Expected { .. } => ErrorTip::None,
            ErrorImpl::ExpectedPrimary { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "invalid number `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnknownType { .. } => ErrorTip::Suggestion(String::from(
                "supported types are int, float, bool and string",
            )),
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "only variables and struct fields can be assigned to",
            )),
            ErrorImpl::DuplicateStructField { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedBlock { .. } => ErrorTip::Suggestion(String::from(
                "did you forget a closing `}`?",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {token:?}")]
    UnrecognisedCharacter { token: String },
    #[error("{message}, found {token:?}")]
    Expected { message: String, token: String },
    #[error("expected primary expression, found {token:?}")]
    ExpectedPrimary { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unknown type: {type_:?}")]
    UnknownType { type_: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("duplicate field {field:?} in struct definition")]
    DuplicateStructField { field: String },
    #[error("expected '}}' after {construct} body")]
    UnterminatedBlock { construct: String },
}
