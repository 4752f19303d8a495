//! Statement parsing: one routine per keyword form.
//!
//! Statement dispatch is identical at top level and inside every block
//! body, so block bodies are simply "repeat dispatch until the closing
//! delimiter".

use crate::{
    ast::{
        expressions::Expr,
        statements::{AssignOp, AssignTarget, Stmt},
        types::{FuncType, VarType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Dispatches on the current token kind: keyword forms go to their
/// dedicated parser, anything else is an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Import => parse_import_stmt(parser),
        TokenKind::Struct => parse_struct_def_stmt(parser),
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Del => parse_del_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::For => parse_for_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        TokenKind::Break => parse_break_stmt(parser),
        TokenKind::Continue => parse_continue_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::Exit => parse_exit_stmt(parser),
        TokenKind::Func => parse_func_stmt(parser),
        TokenKind::Switch => parse_switch_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// Parses statements until the matching `}` and consumes it.
///
/// Reaching end-of-input first is a Syntactic error naming the construct.
fn parse_block_body(parser: &mut Parser, construct: &str) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnterminatedBlock {
                    construct: String::from(construct),
                },
                parser.current_token().span.clone(),
            ));
        }

        body.push(parse_stmt(parser)?);
    }

    parser.advance(); // consume '}'
    Ok(body)
}

fn parse_var_type(parser: &mut Parser) -> Result<VarType, Error> {
    let token = parser.expect(TokenKind::Identifier, "expected type name")?;

    VarType::from_name(&token.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnknownType {
                type_: token.value.clone(),
            },
            token.span.clone(),
        )
    })
}

fn parse_func_type(parser: &mut Parser) -> Result<FuncType, Error> {
    let token = parser.expect(TokenKind::Identifier, "expected return type name")?;

    FuncType::from_name(&token.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnknownType {
                type_: token.value.clone(),
            },
            token.span.clone(),
        )
    })
}

fn parse_import_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // import -> "import" STRING ";"
    let start = parser.advance().clone();

    let path = parser
        .expect(TokenKind::String, "expected file path after 'import'")?
        .value;
    parser.expect(
        TokenKind::Semicolon,
        "expected ';' after path in import statement",
    )?;

    Ok(Stmt::Import {
        path,
        span: start.span,
    })
}

fn parse_struct_def_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // struct_def -> "struct" IDENT "{" ( IDENT ":" TYPE ";" )* "}" ";"
    let start = parser.advance().clone();

    let name = parser
        .expect(TokenKind::Identifier, "expected identifier after 'struct'")?
        .value;
    parser.expect(TokenKind::OpenCurly, "expected '{' after struct name")?;

    let mut fields: Vec<(String, VarType)> = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnterminatedBlock {
                    construct: String::from("struct definition"),
                },
                parser.current_token().span.clone(),
            ));
        }

        let field_token = parser.expect(
            TokenKind::Identifier,
            "expected field name in struct definition",
        )?;
        parser.expect(
            TokenKind::Colon,
            "expected ':' after field name in struct definition",
        )?;
        let field_type = parse_var_type(parser)?;

        // Field names must be unique within one definition.
        if fields.iter().any(|(existing, _)| *existing == field_token.value) {
            return Err(Error::new(
                ErrorImpl::DuplicateStructField {
                    field: field_token.value.clone(),
                },
                field_token.span.clone(),
            ));
        }

        fields.push((field_token.value, field_type));
        parser.expect(
            TokenKind::Semicolon,
            "expected ';' after field in struct definition",
        )?;
    }

    parser.advance(); // consume '}'
    parser.expect(TokenKind::Semicolon, "expected ';' after struct definition")?;

    Ok(Stmt::StructDef {
        name,
        fields,
        span: start.span,
    })
}

fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // let -> "let" IDENT ":" TYPE "=" expression ";"
    let start = parser.advance().clone();

    let identifier = parser
        .expect(TokenKind::Identifier, "expected identifier after 'let'")?
        .value;
    parser.expect(
        TokenKind::Colon,
        "expected ':' after identifier in let statement",
    )?;
    let var_type = parse_var_type(parser)?;
    parser.expect(
        TokenKind::Assignment,
        "expected '=' after type in let statement",
    )?;
    let value = parse_expr(parser)?;
    parser.expect(
        TokenKind::Semicolon,
        "expected ';' after expression in let statement",
    )?;

    Ok(Stmt::Let {
        identifier,
        var_type,
        value,
        span: start.span,
    })
}

fn parse_del_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // del -> "del" IDENT ";"
    let start = parser.advance().clone();

    let identifier = parser
        .expect(TokenKind::Identifier, "expected identifier after 'del'")?
        .value;
    parser.expect(
        TokenKind::Semicolon,
        "expected ';' after identifier in del statement",
    )?;

    Ok(Stmt::Del {
        identifier,
        span: start.span,
    })
}

fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // if -> "if" "(" expression ")" "{" block "}"
    //       ( "elif" "(" expression ")" "{" block "}" )*
    //       ( "else" "{" block "}" )?
    let start = parser.advance().clone();

    parser.expect(TokenKind::OpenParen, "expected '(' after 'if'")?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "expected ')' after if condition")?;
    parser.expect(TokenKind::OpenCurly, "expected '{' after if condition")?;
    let body = parse_block_body(parser, "if")?;

    let mut elif_branches = vec![];
    while parser.current_token_kind() == TokenKind::Elif {
        parser.advance();
        parser.expect(TokenKind::OpenParen, "expected '(' after 'elif'")?;
        let elif_condition = parse_expr(parser)?;
        parser.expect(TokenKind::CloseParen, "expected ')' after elif condition")?;
        parser.expect(TokenKind::OpenCurly, "expected '{' after elif condition")?;
        let elif_body = parse_block_body(parser, "elif")?;

        elif_branches.push((elif_condition, elif_body));
    }

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect(TokenKind::OpenCurly, "expected '{' after 'else'")?;
        Some(parse_block_body(parser, "else")?)
    } else {
        None
    };

    Ok(Stmt::If {
        condition,
        body,
        elif_branches,
        else_body,
        span: start.span,
    })
}

fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // for -> "for" "(" IDENT ";" expression ";" increment ")" "{" block "}"
    let start = parser.advance().clone();

    parser.expect(TokenKind::OpenParen, "expected '(' after 'for'")?;
    let variable = parser
        .expect(TokenKind::Identifier, "expected identifier in for statement")?
        .value;
    parser.expect(
        TokenKind::Semicolon,
        "expected ';' after identifier in for statement",
    )?;
    let condition = parse_expr(parser)?;
    parser.expect(
        TokenKind::Semicolon,
        "expected ';' after condition in for statement",
    )?;
    let increment = parse_expr_or_set(parser)?;
    parser.expect(
        TokenKind::CloseParen,
        "expected ')' after increment in for statement",
    )?;
    parser.expect(TokenKind::OpenCurly, "expected '{' after for statement")?;
    let body = parse_block_body(parser, "for")?;

    Ok(Stmt::For {
        variable,
        condition,
        increment: Box::new(increment),
        body,
        span: start.span,
    })
}

fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // while -> "while" "(" expression ")" "{" block "}"
    let start = parser.advance().clone();

    parser.expect(TokenKind::OpenParen, "expected '(' after 'while'")?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "expected ')' after while condition")?;
    parser.expect(TokenKind::OpenCurly, "expected '{' after while condition")?;
    let body = parse_block_body(parser, "while")?;

    Ok(Stmt::While {
        condition,
        body,
        span: start.span,
    })
}

fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // break -> "break" ";"
    let start = parser.advance().clone();
    parser.expect(TokenKind::Semicolon, "expected ';' after 'break'")?;

    Ok(Stmt::Break { span: start.span })
}

fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // continue -> "continue" ";"
    let start = parser.advance().clone();
    parser.expect(TokenKind::Semicolon, "expected ';' after 'continue'")?;

    Ok(Stmt::Continue { span: start.span })
}

fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // return -> "return" expression ";"
    let start = parser.advance().clone();

    let value = parse_expr(parser)?;
    parser.expect(
        TokenKind::Semicolon,
        "expected ';' after expression in return statement",
    )?;

    Ok(Stmt::Return {
        value,
        span: start.span,
    })
}

fn parse_exit_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // exit -> "exit" expression ";"
    let start = parser.advance().clone();

    let value = parse_expr(parser)?;
    parser.expect(
        TokenKind::Semicolon,
        "expected ';' after expression in exit statement",
    )?;

    Ok(Stmt::Exit {
        value,
        span: start.span,
    })
}

fn parse_func_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // func -> "func" IDENT "(" ( IDENT ":" TYPE ( "," IDENT ":" TYPE )* )? ")"
    //         ":" TYPE "{" block "}"
    let start = parser.advance().clone();

    let identifier = parser
        .expect(TokenKind::Identifier, "expected identifier after 'func'")?
        .value;
    parser.expect(TokenKind::OpenParen, "expected '(' after function identifier")?;

    let mut parameters = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let name = parser
                .expect(
                    TokenKind::Identifier,
                    "expected parameter name in function declaration",
                )?
                .value;
            parser.expect(
                TokenKind::Colon,
                "expected ':' after parameter name in function declaration",
            )?;
            let param_type = parse_var_type(parser)?;

            parameters.push((name, param_type));

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(
        TokenKind::CloseParen,
        "expected ')' after function parameters",
    )?;
    parser.expect(
        TokenKind::Colon,
        "expected ':' after function parameter list",
    )?;
    let return_type = parse_func_type(parser)?;
    parser.expect(TokenKind::OpenCurly, "expected '{' after function declaration")?;
    let body = parse_block_body(parser, "function")?;

    Ok(Stmt::Func {
        identifier,
        parameters,
        return_type,
        body,
        span: start.span,
    })
}

fn parse_switch_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // switch -> "switch" "(" expression ")" "{"
    //           ( "case" "(" expression ")" "{" block "}" )*
    //           ( "default" "{" block "}" )? "}"
    let start = parser.advance().clone();

    parser.expect(TokenKind::OpenParen, "expected '(' after 'switch'")?;
    let scrutinee = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "expected ')' after switch expression")?;
    parser.expect(TokenKind::OpenCurly, "expected '{' after switch expression")?;

    let mut cases = vec![];
    while parser.current_token_kind() == TokenKind::Case {
        parser.advance();
        parser.expect(TokenKind::OpenParen, "expected '(' after 'case'")?;
        let case_expr = parse_expr(parser)?;
        parser.expect(TokenKind::CloseParen, "expected ')' after case expression")?;
        parser.expect(TokenKind::OpenCurly, "expected '{' after case expression")?;
        let case_body = parse_block_body(parser, "case")?;

        cases.push((case_expr, case_body));
    }

    let default_body = if parser.current_token_kind() == TokenKind::Default {
        parser.advance();
        parser.expect(TokenKind::OpenCurly, "expected '{' after 'default'")?;
        Some(parse_block_body(parser, "default")?)
    } else {
        None
    };

    parser.expect(TokenKind::CloseCurly, "expected '}' after switch body")?;

    Ok(Stmt::Switch {
        scrutinee,
        cases,
        default_body,
        span: start.span,
    })
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt = parse_expr_or_set(parser)?;
    parser.expect(TokenKind::Semicolon, "expected ';' after expression")?;

    Ok(stmt)
}

/// Parses an expression, or an assignment when an assignment operator
/// follows, without consuming any trailing semicolon.
///
/// The left side is parsed as a full expression first and must reduce to a
/// valid assignment target; `a + b = 3` is rejected rather than silently
/// assigning to `b`.
fn parse_expr_or_set(parser: &mut Parser) -> Result<Stmt, Error> {
    let expr = parse_expr(parser)?;

    let operator = match assign_op_from(parser.current_token_kind()) {
        Some(operator) => operator,
        None => {
            return Ok(Stmt::Expression {
                span: expr.get_span().clone(),
                expression: expr,
            })
        }
    };

    parser.advance(); // consume the assignment operator
    let span = expr.get_span().clone();
    let target = assignment_target(expr)?;
    let value = parse_expr(parser)?;

    Ok(Stmt::Set {
        operator,
        target,
        value,
        span,
    })
}

fn assign_op_from(kind: TokenKind) -> Option<AssignOp> {
    match kind {
        TokenKind::Assignment => Some(AssignOp::Assign),
        TokenKind::PlusEquals => Some(AssignOp::AddAssign),
        TokenKind::MinusEquals => Some(AssignOp::SubAssign),
        TokenKind::StarEquals => Some(AssignOp::MulAssign),
        TokenKind::SlashEquals => Some(AssignOp::DivAssign),
        TokenKind::PercentEquals => Some(AssignOp::ModAssign),
        TokenKind::CaretEquals => Some(AssignOp::PowAssign),
        _ => None,
    }
}

fn assignment_target(expr: Expr) -> Result<AssignTarget, Error> {
    match expr {
        Expr::Variable { name, .. } => Ok(AssignTarget::Variable(name)),
        Expr::StructAccess { target, field, .. } => Ok(AssignTarget::Field { target, field }),
        other => Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            other.get_span().clone(),
        )),
    }
}
