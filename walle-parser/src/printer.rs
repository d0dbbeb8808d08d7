//! Indented outline of a parsed program, for debugging.

use crate::ast::{Expr, Literal, Stmt, StmtKind};
use crate::visitor::{walk_expr, walk_program, walk_stmt, Visitor};
use std::iter;

/// Renders `program` as one line per node, children indented by two spaces.
pub fn print_program(program: &[Stmt]) -> String {
    let mut printer = Printer::default();
    walk_program(&mut printer, program);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    fn line(&mut self, text: impl AsRef<str>) {
        self.out.extend(iter::repeat(' ').take(self.depth * 2));
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

impl<'ast> Visitor<'ast> for Printer {
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        let text = match &stmt.kind {
            StmtKind::VarDeclaration { ident, ty, .. } => format!("Assign {} ({})", ident, ty),
            StmtKind::CommandCall { command, .. } => format!("Command {}", command),
            StmtKind::Label(label) => format!("Label {}", label),
            StmtKind::GoTo { label, .. } => format!("GoTo [{}]", label),
            StmtKind::ExprStmt(_) => "Expression".to_string(),
        };
        self.line(format!("{}: {}", stmt.line, text));
        self.nested(|printer| walk_stmt(printer, stmt));
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        let text = match expr {
            Expr::Literal(Literal::Number(val)) => format!("Literal {}", val),
            Expr::Literal(Literal::Bool(val)) => format!("Literal {}", val),
            Expr::Literal(Literal::Str(val)) => format!("Literal \"{}\"", val),
            Expr::Variable(ident) => format!("Variable {}", ident),
            Expr::Unary { op, .. } => format!("Unary {}", op),
            Expr::Binary { op, .. } => format!("Binary {}", op),
            Expr::Grouping(_) => "Grouping".to_string(),
            Expr::Call { builtin, .. } => format!("Call {}", builtin),
        };
        self.line(text);
        self.nested(|printer| walk_expr(printer, expr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;
    use crate::parser::parse;
    use insta::assert_snapshot;

    fn print(source: &str) -> String {
        print_program(&parse(scan(source).unwrap()).unwrap())
    }

    #[test]
    fn test_print_program() {
        let source = r#"Spawn(0, 0)
Color("Red")
n <- -(GetActualX() + 1)
loop
DrawLine(1, 0, n * 2)
GoTo [loop] (!done && n < 3)"#;
        assert_snapshot!(print(source), @r###"
        1: Command Spawn
          Literal 0
          Literal 0
        2: Command Color
          Literal "Red"
        3: Assign n (number)
          Unary -
            Grouping
              Binary +
                Call GetActualX
                Literal 1
        4: Label loop
        5: Command DrawLine
          Literal 1
          Literal 0
          Binary *
            Variable n
            Literal 2
        6: GoTo [loop]
          Binary &&
            Unary !
              Variable done
            Binary <
              Variable n
              Literal 3
        "###);
    }

    #[test]
    fn test_print_does_not_consume() {
        let program = parse(scan("x <- true\nGetCanvasSize()").unwrap()).unwrap();
        let before = program.clone();
        assert_eq!(print_program(&program), "1: Assign x (boolean)\n  Literal true\n2: Expression\n  Call GetCanvasSize\n");
        assert_eq!(program, before);
    }
}
