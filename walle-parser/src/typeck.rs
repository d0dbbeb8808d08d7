//! Static classification of expressions as numeric or boolean.
//!
//! Both predicates walk the same tree shapes but admit different operators and
//! leaves. [`Context`] decides whether query built-ins may appear as leaves.
//! [`Expr::Variable`] leaves are admitted by both predicates in every context
//! because the type of a variable is only known at evaluation time.

use crate::ast::{Expr, Literal, UnaryOp};
use walle_value::ValueType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Assignment initializers and expression statements: built-in calls are
    /// admitted anywhere.
    Permissive,
    /// Command arguments and `GoTo` conditions: built-in calls are rejected.
    Restrictive,
}

/// Returns `true` if `expr` is a valid numeric expression in `ctx`.
pub fn is_numeric(expr: &Expr, ctx: Context) -> bool {
    match expr {
        Expr::Literal(Literal::Number(_)) => true,
        Expr::Literal(_) => false,
        Expr::Variable(_) => true,
        Expr::Unary { op, arg } => match op {
            UnaryOp::Neg => is_numeric(arg, ctx),
            UnaryOp::Not => false,
        },
        Expr::Binary { .. } => {
            // Walk the left operand chain in a loop: `1 + 1 + ... + 1` is left-deep.
            let mut node = expr;
            while let Expr::Binary { lhs, op, rhs } = node {
                if !op.is_arithmetic() || !is_numeric(rhs, ctx) {
                    return false;
                }
                node = &**lhs;
            }
            is_numeric(node, ctx)
        }
        Expr::Grouping(inner) => is_numeric(inner, ctx),
        Expr::Call { builtin, .. } => {
            ctx == Context::Permissive && builtin.return_type() == ValueType::Number
        }
    }
}

/// Returns `true` if `expr` is a valid boolean expression in `ctx`.
pub fn is_boolean(expr: &Expr, ctx: Context) -> bool {
    match expr {
        Expr::Literal(Literal::Bool(_)) => true,
        Expr::Literal(_) => false,
        Expr::Variable(_) => true,
        Expr::Unary { op, arg } => match op {
            UnaryOp::Not => is_boolean(arg, ctx),
            UnaryOp::Neg => false,
        },
        Expr::Binary { op, .. } if op.is_logical() => {
            let mut node = expr;
            while let Expr::Binary { lhs, op, rhs } = node {
                if !op.is_logical() {
                    break;
                }
                if !is_boolean(rhs, ctx) {
                    return false;
                }
                node = &**lhs;
            }
            is_boolean(node, ctx)
        }
        Expr::Binary { lhs, op, rhs } => {
            if op.is_relational() {
                is_numeric(lhs, ctx) && is_numeric(rhs, ctx)
            } else if op.is_equality() {
                (is_numeric(lhs, ctx) && is_numeric(rhs, ctx))
                    || (is_boolean(lhs, ctx) && is_boolean(rhs, ctx))
            } else {
                false
            }
        }
        Expr::Grouping(inner) => is_boolean(inner, ctx),
        Expr::Call { builtin, .. } => {
            ctx == Context::Permissive && builtin.return_type() == ValueType::Bool
        }
    }
}

/// Classifies `expr` as exactly one static type, or `None` if it is neither.
/// An expression admitted by both predicates (only possible through variable
/// leaves) is classified as [`ValueType::Number`].
pub fn classify(expr: &Expr, ctx: Context) -> Option<ValueType> {
    if is_numeric(expr, ctx) {
        Some(ValueType::Number)
    } else if is_boolean(expr, ctx) {
        Some(ValueType::Bool)
    } else {
        None
    }
}
