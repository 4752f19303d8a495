use std::fmt::Display;

use crate::Span;

/// Binary operators, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Equals,
    NotEquals,
    Greater,
    GreaterEquals,
    Less,
    LessEquals,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::Less => "<",
            BinaryOp::LessEquals => "<=",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Power => "^",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Negate,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "!"),
            UnaryOp::Negate => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOp {
    Increment,
    Decrement,
}

impl Display for PostfixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostfixOp::Increment => write!(f, "++"),
            PostfixOp::Decrement => write!(f, "--"),
        }
    }
}

/// Expression variants.
///
/// The grammar is fixed and closed, so expressions are a sum type with
/// exhaustive matching rather than trait objects. Every node exclusively
/// owns its children; there is no sharing between nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int {
        value: i64,
        span: Span,
    },
    Float {
        value: f64,
        span: Span,
    },
    Str {
        value: String,
        span: Span,
    },
    Bool {
        value: bool,
        span: Span,
    },
    Variable {
        name: String,
        span: Span,
    },
    Binary {
        operator: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
    Unary {
        operator: UnaryOp,
        operand: Box<Expr>,
        span: Span,
    },
    /// `ident++` / `ident--`. A purely local wrap around the target
    /// identifier; the operand is restricted to a variable by the grammar.
    Postfix {
        operator: PostfixOp,
        target: String,
        span: Span,
    },
    Call {
        callee: String,
        arguments: Vec<Expr>,
        span: Span,
    },
    /// Struct literal. Field expressions are recorded in source order with
    /// no cross-check against the definition's declared field types; that
    /// validation belongs to a later semantic phase.
    StructInit {
        name: String,
        fields: Vec<(String, Expr)>,
        span: Span,
    },
    StructAccess {
        target: String,
        field: String,
        span: Span,
    },
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Int { span, .. } => span,
            Expr::Float { span, .. } => span,
            Expr::Str { span, .. } => span,
            Expr::Bool { span, .. } => span,
            Expr::Variable { span, .. } => span,
            Expr::Binary { span, .. } => span,
            Expr::Unary { span, .. } => span,
            Expr::Postfix { span, .. } => span,
            Expr::Call { span, .. } => span,
            Expr::StructInit { span, .. } => span,
            Expr::StructAccess { span, .. } => span,
        }
    }
}
