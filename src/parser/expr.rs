//! Expression parsing: a precedence-climbing chain, lowest level first.
//!
//! Each binary level parses one operand at the next-higher level, then loops
//! while the current token matches an operator at its own level, building
//! left-associative nodes. `1 + 2 + 3` therefore nests as `(1 + 2) + 3`, and
//! exponentiation is deliberately left-associative as well.

use crate::{
    ast::expressions::{BinaryOp, Expr, PostfixOp, UnaryOp},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

const LOGICAL_OR_OPS: &[(TokenKind, BinaryOp)] = &[(TokenKind::Or, BinaryOp::Or)];
const LOGICAL_AND_OPS: &[(TokenKind, BinaryOp)] = &[(TokenKind::And, BinaryOp::And)];
const EQUALITY_OPS: &[(TokenKind, BinaryOp)] = &[
    (TokenKind::Equals, BinaryOp::Equals),
    (TokenKind::NotEquals, BinaryOp::NotEquals),
];
const COMPARISON_OPS: &[(TokenKind, BinaryOp)] = &[
    (TokenKind::Greater, BinaryOp::Greater),
    (TokenKind::GreaterEquals, BinaryOp::GreaterEquals),
    (TokenKind::Less, BinaryOp::Less),
    (TokenKind::LessEquals, BinaryOp::LessEquals),
];
const TERM_OPS: &[(TokenKind, BinaryOp)] = &[
    (TokenKind::Plus, BinaryOp::Add),
    (TokenKind::Dash, BinaryOp::Subtract),
];
const FACTOR_OPS: &[(TokenKind, BinaryOp)] = &[
    (TokenKind::Star, BinaryOp::Multiply),
    (TokenKind::Slash, BinaryOp::Divide),
    (TokenKind::Percent, BinaryOp::Modulo),
];
const EXPONENT_OPS: &[(TokenKind, BinaryOp)] = &[(TokenKind::Caret, BinaryOp::Power)];

/// Parses a full expression (the lowest precedence level).
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_logical_or(parser)
}

/// One left-associative binary level: operand, then operator/operand pairs.
fn parse_binary_level(
    parser: &mut Parser,
    operators: &[(TokenKind, BinaryOp)],
    next_level: fn(&mut Parser) -> Result<Expr, Error>,
) -> Result<Expr, Error> {
    let mut node = next_level(parser)?;

    loop {
        let kind = parser.current_token_kind();
        let operator = match operators.iter().find(|(candidate, _)| *candidate == kind) {
            Some((_, operator)) => *operator,
            None => break,
        };

        parser.advance();
        let right = next_level(parser)?;
        let span = node.get_span().clone();

        node = Expr::Binary {
            operator,
            left: Box::new(node),
            right: Box::new(right),
            span,
        };
    }

    Ok(node)
}

fn parse_logical_or(parser: &mut Parser) -> Result<Expr, Error> {
    // logical_or -> logical_and ( "||" logical_and )*
    parse_binary_level(parser, LOGICAL_OR_OPS, parse_logical_and)
}

fn parse_logical_and(parser: &mut Parser) -> Result<Expr, Error> {
    // logical_and -> equality ( "&&" equality )*
    parse_binary_level(parser, LOGICAL_AND_OPS, parse_equality)
}

fn parse_equality(parser: &mut Parser) -> Result<Expr, Error> {
    // equality -> comparison ( ( "==" | "!=" ) comparison )*
    parse_binary_level(parser, EQUALITY_OPS, parse_comparison)
}

fn parse_comparison(parser: &mut Parser) -> Result<Expr, Error> {
    // comparison -> term ( ( ">" | ">=" | "<" | "<=" ) term )*
    parse_binary_level(parser, COMPARISON_OPS, parse_term)
}

fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    // term -> factor ( ( "+" | "-" ) factor )*
    parse_binary_level(parser, TERM_OPS, parse_factor)
}

fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    // factor -> exponent ( ( "*" | "/" | "%" ) exponent )*
    parse_binary_level(parser, FACTOR_OPS, parse_exponent)
}

fn parse_exponent(parser: &mut Parser) -> Result<Expr, Error> {
    // exponent -> unary ( "^" unary )*
    parse_binary_level(parser, EXPONENT_OPS, parse_unary)
}

fn parse_unary(parser: &mut Parser) -> Result<Expr, Error> {
    // unary -> ( "!" | "-" ) unary | postfix
    match parser.current_token_kind() {
        TokenKind::Not | TokenKind::Dash => {
            let token = parser.advance().clone();
            let operator = if token.kind == TokenKind::Not {
                UnaryOp::Not
            } else {
                UnaryOp::Negate
            };
            let operand = parse_unary(parser)?;

            Ok(Expr::Unary {
                operator,
                operand: Box::new(operand),
                span: token.span,
            })
        }
        _ => parse_postfix(parser),
    }
}

fn parse_postfix(parser: &mut Parser) -> Result<Expr, Error> {
    // postfix -> primary ( "++" | "--" )?
    //
    // The wrap is purely local: only a variable reference can take a
    // postfix operator, and no surrounding statement list is touched.
    let expr = parse_primary_expr(parser)?;

    if let Expr::Variable { name, span } = &expr {
        let operator = match parser.current_token_kind() {
            TokenKind::PlusPlus => Some(PostfixOp::Increment),
            TokenKind::MinusMinus => Some(PostfixOp::Decrement),
            _ => None,
        };

        if let Some(operator) = operator {
            parser.advance();
            return Ok(Expr::Postfix {
                operator,
                target: name.clone(),
                span: span.clone(),
            });
        }
    }

    Ok(expr)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // primary -> INT | FLOAT | STRING | BOOL | "(" expression ")"
    //          | struct_init | struct_access | call | IDENT
    match parser.current_token_kind() {
        TokenKind::Int => {
            let token = parser.advance().clone();
            let value = token.value.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.clone(),
                )
            })?;

            Ok(Expr::Int {
                value,
                span: token.span,
            })
        }
        TokenKind::Float => {
            let token = parser.advance().clone();
            let value = token.value.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.clone(),
                )
            })?;

            Ok(Expr::Float {
                value,
                span: token.span,
            })
        }
        TokenKind::String => {
            let token = parser.advance().clone();
            Ok(Expr::Str {
                value: token.value,
                span: token.span,
            })
        }
        TokenKind::Bool => {
            let token = parser.advance().clone();
            Ok(Expr::Bool {
                value: token.value == "true",
                span: token.span,
            })
        }
        TokenKind::OpenParen => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen, "expected ')' after expression")?;
            Ok(expr)
        }
        // One token of lookahead past an identifier decides the form:
        // '{' is a struct literal, '.' a field access, '(' a call,
        // anything else a plain variable reference.
        TokenKind::Identifier => match parser.peek_kind(1) {
            TokenKind::OpenCurly => parse_struct_init_expr(parser),
            TokenKind::Dot => parse_struct_access_expr(parser),
            TokenKind::OpenParen => parse_call_expr(parser),
            _ => {
                let token = parser.advance().clone();
                Ok(Expr::Variable {
                    name: token.value,
                    span: token.span,
                })
            }
        },
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::ExpectedPrimary {
                    token: token.value.clone(),
                },
                token.span.clone(),
            ))
        }
    }
}

fn parse_struct_init_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // struct_init -> IDENT "{" IDENT ":" expression ( "," IDENT ":" expression )* "}"
    let name_token = parser.advance().clone();
    parser.advance(); // consume '{'

    let mut fields = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        let field_name = parser
            .expect(
                TokenKind::Identifier,
                "expected field name in struct initialization",
            )?
            .value;
        parser.expect(
            TokenKind::Colon,
            "expected ':' after field name in struct initialization",
        )?;
        let value = parse_expr(parser)?;

        fields.push((field_name, value));

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(
        TokenKind::CloseCurly,
        "expected '}' after struct initialization",
    )?;

    Ok(Expr::StructInit {
        name: name_token.value,
        fields,
        span: name_token.span,
    })
}

fn parse_struct_access_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // struct_access -> IDENT "." IDENT
    let target_token = parser.advance().clone();
    parser.advance(); // consume '.'

    let field = parser
        .expect(TokenKind::Identifier, "expected field name after '.'")?
        .value;

    Ok(Expr::StructAccess {
        target: target_token.value,
        field,
        span: target_token.span,
    })
}

fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // call -> IDENT "(" ( expression ( "," expression )* )? ")"
    let callee_token = parser.advance().clone();
    parser.advance(); // consume '('

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(
        TokenKind::CloseParen,
        "expected ')' after function arguments",
    )?;

    Ok(Expr::Call {
        callee: callee_token.value,
        arguments,
        span: callee_token.span,
    })
}
