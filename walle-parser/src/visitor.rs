//! Visitor pattern for AST nodes.

use crate::ast::{Expr, Stmt, StmtKind};

pub trait Visitor<'ast>: Sized {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expr) {
    match expr {
        Expr::Literal(_) => {}
        Expr::Variable(_) => {}
        Expr::Unary { op: _, arg } => visitor.visit_expr(arg),
        Expr::Binary { lhs, op: _, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
        Expr::Grouping(inner) => visitor.visit_expr(inner),
        Expr::Call { builtin: _, args } => {
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
    }
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Stmt) {
    match &stmt.kind {
        StmtKind::VarDeclaration {
            ident: _,
            initializer,
            ty: _,
        } => visitor.visit_expr(initializer),
        StmtKind::CommandCall { command: _, args } => {
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        StmtKind::Label(_) => {}
        StmtKind::GoTo {
            label: _,
            condition,
        } => visitor.visit_expr(condition),
        StmtKind::ExprStmt(expr) => visitor.visit_expr(expr),
    }
}

/// Visits every statement of `program` in order.
pub fn walk_program<'ast>(visitor: &mut impl Visitor<'ast>, program: &'ast [Stmt]) {
    for stmt in program {
        visitor.visit_stmt(stmt);
    }
}
