use crate::grammar::{Builtin, Command};
use crate::lexer::TokenKind;
use std::fmt;
use walle_value::ValueType;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(i64),
    Bool(bool),
    /// Only admissible as a color argument.
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl BinaryOp {
    /// Returns the binary operator for a token or `None` if the token is not a binop.
    pub fn from_token(token: &TokenKind) -> Option<Self> {
        Some(match token {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Asterisk => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::Percent => Self::Mod,
            TokenKind::AsteriskAsterisk => Self::Pow,
            TokenKind::AndAnd => Self::And,
            TokenKind::OrOr => Self::Or,
            TokenKind::EqualsEquals => Self::Eq,
            TokenKind::NotEquals => Self::Ne,
            TokenKind::LessThan => Self::Lt,
            TokenKind::GreaterThan => Self::Gt,
            TokenKind::LessThanEquals => Self::Le,
            TokenKind::GreaterThanEquals => Self::Ge,
            _ => return None,
        })
    }

    /// Returns the `(left, right)` binding power.
    /// Binding power `0` is reserved for accepting any expression.
    /// Power (`**`) is the only right associative operator with `(14, 13)`.
    pub fn binding_power(self) -> (u8, u8) {
        match self {
            Self::Or => (1, 2),
            Self::And => (3, 4),
            Self::Eq | Self::Ne => (5, 6),
            Self::Lt | Self::Gt | Self::Le | Self::Ge => (7, 8),
            Self::Add | Self::Sub => (9, 10),
            Self::Mul | Self::Div | Self::Mod => (11, 12),
            Self::Pow => (14, 13),
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Pow
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    pub fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::Ne)
    }

    pub fn is_relational(self) -> bool {
        matches!(self, Self::Lt | Self::Gt | Self::Le | Self::Ge)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::And => "&&",
            Self::Or => "||",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => f.write_str("-"),
            UnaryOp::Not => f.write_str("!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    /// A variable read (e.g. `foo`).
    Variable(String),
    /// A unary expression (e.g. `-x`).
    Unary { op: UnaryOp, arg: Box<Expr> },
    /// A binary expression (e.g. `1+1`).
    Binary {
        lhs: Box<Expr>,
        op: BinaryOp,
        rhs: Box<Expr>,
    },
    /// A parenthesized expression.
    Grouping(Box<Expr>),
    /// A query built-in call (e.g. `GetActualX()`).
    Call { builtin: Builtin, args: Vec<Expr> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// `ident <- initializer`. `ty` is the static shape of the initializer.
    VarDeclaration {
        ident: String,
        initializer: Expr,
        ty: ValueType,
    },
    CommandCall {
        command: Command,
        args: Vec<Expr>,
    },
    /// A jump target. Its index in the program is its value.
    Label(String),
    /// `GoTo [label] (condition)`
    GoTo {
        label: String,
        condition: Expr,
    },
    /// A query built-in evaluated for nothing.
    ExprStmt(Expr),
}

/// A top-level statement with the line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: usize,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: usize) -> Self {
        Self { kind, line }
    }
}
