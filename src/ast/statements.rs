use std::fmt::Display;

use crate::Span;

use super::{
    expressions::Expr,
    types::{FuncType, VarType},
};

/// Assignment operators recognised by compound-assignment statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    PowAssign,
}

impl Display for AssignOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
            AssignOp::ModAssign => "%=",
            AssignOp::PowAssign => "^=",
        };
        write!(f, "{}", symbol)
    }
}

/// A validated assignment target: the parsed left-hand side must reduce to
/// a variable reference or a field access before an assignment operator is
/// accepted. Anything else is a syntax error.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    Variable(String),
    Field { target: String, field: String },
}

/// Statement variants.
///
/// Ordered field mappings are `Vec` pairs so source order survives parsing.
/// Block bodies are plain statement lists; dispatch inside them is identical
/// to top-level dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `import "path";` — only the path is recorded; resolution happens in
    /// the surrounding driver.
    Import {
        path: String,
        span: Span,
    },
    StructDef {
        name: String,
        fields: Vec<(String, VarType)>,
        span: Span,
    },
    Let {
        identifier: String,
        var_type: VarType,
        value: Expr,
        span: Span,
    },
    Del {
        identifier: String,
        span: Span,
    },
    Set {
        operator: AssignOp,
        target: AssignTarget,
        value: Expr,
        span: Span,
    },
    If {
        condition: Expr,
        body: Vec<Stmt>,
        elif_branches: Vec<(Expr, Vec<Stmt>)>,
        else_body: Option<Vec<Stmt>>,
        span: Span,
    },
    For {
        variable: String,
        condition: Expr,
        /// Usually a `Set` or a postfix expression; held as a statement
        /// because assignments are statements in this model.
        increment: Box<Stmt>,
        body: Vec<Stmt>,
        span: Span,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
        span: Span,
    },
    Break {
        span: Span,
    },
    Continue {
        span: Span,
    },
    Return {
        value: Expr,
        span: Span,
    },
    Exit {
        value: Expr,
        span: Span,
    },
    Func {
        identifier: String,
        parameters: Vec<(String, VarType)>,
        return_type: FuncType,
        body: Vec<Stmt>,
        span: Span,
    },
    Switch {
        scrutinee: Expr,
        cases: Vec<(Expr, Vec<Stmt>)>,
        default_body: Option<Vec<Stmt>>,
        span: Span,
    },
    Expression {
        expression: Expr,
        span: Span,
    },
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Import { span, .. } => span,
            Stmt::StructDef { span, .. } => span,
            Stmt::Let { span, .. } => span,
            Stmt::Del { span, .. } => span,
            Stmt::Set { span, .. } => span,
            Stmt::If { span, .. } => span,
            Stmt::For { span, .. } => span,
            Stmt::While { span, .. } => span,
            Stmt::Break { span } => span,
            Stmt::Continue { span } => span,
            Stmt::Return { span, .. } => span,
            Stmt::Exit { span, .. } => span,
            Stmt::Func { span, .. } => span,
            Stmt::Switch { span, .. } => span,
            Stmt::Expression { span, .. } => span,
        }
    }
}
