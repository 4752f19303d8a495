use super::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Span;

#[test]
fn test_error_kind_classification() {
    let lexical = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            token: String::from("@"),
        },
        Span::null(),
    );
    assert_eq!(lexical.kind(), ErrorKind::Lexical);

    let syntactic = Error::new(
        ErrorImpl::Expected {
            message: String::from("expected ';' after expression"),
            token: String::from("let"),
        },
        Span::null(),
    );
    assert_eq!(syntactic.kind(), ErrorKind::Syntactic);
}

#[test]
fn test_error_name() {
    let error = Error::new(ErrorImpl::InvalidAssignmentTarget, Span::null());
    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
}

#[test]
fn test_expected_message_includes_found_token() {
    let error = Error::new(
        ErrorImpl::Expected {
            message: String::from("expected '=' after type in let statement"),
            token: String::from("5"),
        },
        Span::null(),
    );

    assert_eq!(
        error.to_string(),
        "expected '=' after type in let statement, found \"5\""
    );
}

#[test]
fn test_unterminated_block_message_names_construct() {
    let error = Error::new(
        ErrorImpl::UnterminatedBlock {
            construct: String::from("while"),
        },
        Span::null(),
    );

    assert_eq!(error.to_string(), "expected '}' after while body");
}

#[test]
fn test_tips() {
    let error = Error::new(
        ErrorImpl::UnknownType {
            type_: String::from("number"),
        },
        Span::null(),
    );
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));

    let error = Error::new(
        ErrorImpl::ExpectedPrimary {
            token: String::from(";"),
        },
        Span::null(),
    );
    assert!(matches!(error.get_tip(), ErrorTip::None));
}
