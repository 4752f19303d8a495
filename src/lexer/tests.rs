use super::lexer::tokenize;
use super::tokens::TokenKind;

#[test]
fn test_tokenize_keywords() {
    let source = "let del if elif else for while break continue return exit func switch case default import struct";
    let tokens = tokenize(String::from(source)).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Del,
            TokenKind::If,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::While,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Return,
            TokenKind::Exit,
            TokenKind::Func,
            TokenKind::Switch,
            TokenKind::Case,
            TokenKind::Default,
            TokenKind::Import,
            TokenKind::Struct,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize(String::from("foo _bar baz42 letter")).unwrap();

    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    // 'letter' starts with a keyword but must not be split.
    assert_eq!(tokens[3].value, "letter");
}

#[test]
fn test_tokenize_number_classification() {
    let tokens = tokenize(String::from("42 3.14 0 0.5")).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[3].kind, TokenKind::Float);
}

#[test]
fn test_tokenize_bool_literals() {
    let tokens = tokenize(String::from("true false truthy")).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Bool);
    assert_eq!(tokens[0].value, "true");
    assert_eq!(tokens[1].kind, TokenKind::Bool);
    assert_eq!(tokens[1].value, "false");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(String::from("\"hello world\"")).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello world");
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(String::from("\"a\\tb\\nc\"")).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\tb\nc");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize(String::from("== != <= >= < > || && = + - * / % ^")).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Or,
            TokenKind::And,
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Caret,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_compound_assignment_operators() {
    let tokens = tokenize(String::from("+= -= *= /= %= ^= ++ --")).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::CaretEquals,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments_are_skipped() {
    let tokens = tokenize(String::from("let x // the rest is gone\nfoo")).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_tracks_line_and_column() {
    let tokens = tokenize(String::from("let x;\n  foo;")).unwrap();

    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[0].span.column, 1);
    assert_eq!(tokens[1].span.line, 1);
    assert_eq!(tokens[1].span.column, 5);

    // 'foo' sits on line 2 after two spaces of indentation.
    assert_eq!(tokens[3].span.line, 2);
    assert_eq!(tokens[3].span.column, 3);
    assert_eq!(*tokens[3].span.snippet, "  foo;");
}

#[test]
fn test_tokenize_appends_eof_sentinel() {
    let tokens = tokenize(String::new()).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize(String::from("let x = @;"));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_span().line, 1);
    assert_eq!(error.get_span().column, 9);
}
