//! Tree-walking evaluator.

use num_traits::checked_pow;
use std::convert::TryFrom;
use walle_parser::ast::{BinaryOp, Expr, Literal, Stmt, StmtKind, UnaryOp};
use walle_parser::grammar::{Builtin, Command};
use walle_passes::LabelTable;
use walle_source::{Error, RuntimeError};
use walle_value::{Color, Value, ValueType};

use crate::canvas::Canvas;
use crate::state::{Machine, Position};

pub type RunResult<T> = Result<T, RuntimeError>;

/// What to execute after a statement.
enum Flow<'a> {
    Next,
    Jump(&'a str),
}

/// Executes a statement sequence against a [`Machine`], forwarding draw calls
/// to a [`Canvas`].
pub struct Interpreter<'a, C: Canvas> {
    canvas: &'a mut C,
    machine: Machine,
}

impl<'a, C: Canvas> Interpreter<'a, C> {
    /// Creates an interpreter with a fresh [`Machine`].
    pub fn new(canvas: &'a mut C) -> Self {
        Self {
            canvas,
            machine: Machine::new(),
        }
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn into_machine(self) -> Machine {
        self.machine
    }

    /// Builds the jump table, then runs `program` from its first statement
    /// until the program counter moves past the last one.
    ///
    /// Label errors are reported before anything executes. A runtime error
    /// stops execution; the machine keeps the state reached so far.
    pub fn execute(&mut self, program: &[Stmt]) -> Result<(), Error> {
        let labels = LabelTable::resolve(program)?;
        self.run(program, &labels)?;
        Ok(())
    }

    fn run(&mut self, program: &[Stmt], labels: &LabelTable) -> RunResult<()> {
        let mut pc = 0;
        while let Some(stmt) = program.get(pc) {
            pc = match self.exec_stmt(stmt)? {
                Flow::Next => pc + 1,
                Flow::Jump(label) => {
                    let target = labels
                        .get(label)
                        .unwrap_or_else(|| unreachable!("jump targets are resolved"));
                    tracing::trace!(label, from = stmt.line, to = target, "jump");
                    target
                }
            };
        }
        tracing::debug!(machine = ?self.machine, "program finished");
        Ok(())
    }

    fn exec_stmt<'s>(&mut self, stmt: &'s Stmt) -> RunResult<Flow<'s>> {
        let line = stmt.line;
        match &stmt.kind {
            StmtKind::VarDeclaration {
                ident, initializer, ..
            } => {
                let value = self.eval_expr(initializer, line)?;
                self.machine.variables.insert(ident.clone(), value);
            }
            StmtKind::CommandCall { command, args } => self.exec_command(*command, args, line)?,
            StmtKind::Label(_) => {}
            StmtKind::GoTo { label, condition } => match self.eval_expr(condition, line)? {
                Value::Bool(true) => return Ok(Flow::Jump(label.as_str())),
                Value::Bool(false) => {}
                other => {
                    let context = format!("GoTo [{}]", label);
                    return Err(mismatch(&context, ValueType::Bool, other, line));
                }
            },
            StmtKind::ExprStmt(expr) => {
                self.eval_expr(expr, line)?;
            }
        }
        Ok(Flow::Next)
    }

    /* Commands */
    fn exec_command(&mut self, command: Command, args: &[Expr], line: usize) -> RunResult<()> {
        let name = command.keyword();
        match (command, args) {
            (Command::Spawn, [x, y]) => {
                let at = Position::new(
                    self.eval_number(x, name, line)?,
                    self.eval_number(y, name, line)?,
                );
                if !self.canvas.contains(at) {
                    return Err(RuntimeError::OutOfCanvas {
                        x: at.x,
                        y: at.y,
                        size: self.canvas.size(),
                        line,
                    });
                }
                self.machine.cursor = at;
            }
            (Command::Color, [color]) => self.machine.brush.color = self.eval_color(color, line)?,
            (Command::Size, [size]) => {
                let size = self.eval_number(size, name, line)?;
                if size <= 0 {
                    return Err(RuntimeError::InvalidBrushSize { size, line });
                }
                self.machine.brush.size = size;
            }
            (Command::DrawLine, [dx, dy, distance]) => {
                let (dx, dy) = self.eval_direction(dx, dy, name, line)?;
                let distance = self.eval_length(distance, name, "distance", line)?;
                let from = self.machine.cursor;
                let to = self.step(dx, dy, distance, line)?;
                self.canvas.draw_line(from, to, &self.machine.brush);
                self.machine.cursor = to;
            }
            (Command::DrawCircle, [dx, dy, radius]) => {
                let (dx, dy) = self.eval_direction(dx, dy, name, line)?;
                let radius = self.eval_length(radius, name, "radius", line)?;
                let center = self.step(dx, dy, radius, line)?;
                self.canvas.draw_circle(center, radius, &self.machine.brush);
                self.machine.cursor = center;
            }
            (Command::DrawRectangle, [dx, dy, distance, width, height]) => {
                let (dx, dy) = self.eval_direction(dx, dy, name, line)?;
                let distance = self.eval_length(distance, name, "distance", line)?;
                let width = self.eval_length(width, name, "width", line)?;
                let height = self.eval_length(height, name, "height", line)?;
                let center = self.step(dx, dy, distance, line)?;
                self.canvas
                    .draw_rectangle(center, width, height, &self.machine.brush);
                self.machine.cursor = center;
            }
            (Command::Fill, []) => self.canvas.fill(self.machine.cursor, &self.machine.brush),
            _ => return Err(arity(name, command.params().len(), args.len(), line)),
        }
        Ok(())
    }

    fn eval_direction(
        &mut self,
        dx: &Expr,
        dy: &Expr,
        command: &str,
        line: usize,
    ) -> RunResult<(i64, i64)> {
        let dx = self.eval_number(dx, command, line)?;
        let dy = self.eval_number(dy, command, line)?;
        let unit = -1..=1;
        if !unit.contains(&dx) || !unit.contains(&dy) {
            return Err(RuntimeError::InvalidDirection {
                command: command.to_string(),
                dx,
                dy,
                line,
            });
        }
        Ok((dx, dy))
    }

    fn eval_length(
        &mut self,
        expr: &Expr,
        command: &str,
        what: &'static str,
        line: usize,
    ) -> RunResult<i64> {
        let value = self.eval_number(expr, command, line)?;
        if value < 0 {
            return Err(RuntimeError::NegativeLength {
                command: command.to_string(),
                what,
                value,
                line,
            });
        }
        Ok(value)
    }

    fn step(&self, dx: i64, dy: i64, distance: i64, line: usize) -> RunResult<Position> {
        self.machine
            .cursor
            .step(dx, dy, distance)
            .ok_or(RuntimeError::Overflow { line })
    }

    /* Expressions */
    /// Evaluates `expr`. String literals are only meaningful as color arguments
    /// and are rejected here.
    pub fn eval_expr(&mut self, expr: &Expr, line: usize) -> RunResult<Value> {
        match expr {
            Expr::Literal(Literal::Number(val)) => Ok(Value::Number(*val)),
            Expr::Literal(Literal::Bool(val)) => Ok(Value::Bool(*val)),
            Expr::Literal(Literal::Str(_)) => Err(RuntimeError::UnexpectedString { line }),
            Expr::Variable(ident) => {
                self.machine
                    .variable(ident)
                    .ok_or_else(|| RuntimeError::UndefinedVariable {
                        name: ident.clone(),
                        line,
                    })
            }
            Expr::Unary { op, arg } => match op {
                UnaryOp::Neg => {
                    let val = self.eval_number(arg, "unary `-`", line)?;
                    val.checked_neg()
                        .map(Value::Number)
                        .ok_or(RuntimeError::Overflow { line })
                }
                UnaryOp::Not => Ok(Value::Bool(!self.eval_bool(arg, "`!`", line)?)),
            },
            Expr::Binary { .. } => self.eval_binary(expr, line),
            Expr::Grouping(inner) => self.eval_expr(inner, line),
            Expr::Call { builtin, args } => self.eval_call(*builtin, args, line),
        }
    }

    /// Evaluates a binary expression. The left operand chain (`a + b + c`) is
    /// folded in a loop, so the recursion depth only follows right operands.
    fn eval_binary(&mut self, expr: &Expr, line: usize) -> RunResult<Value> {
        let mut operands = Vec::new();
        let mut leftmost = expr;
        while let Expr::Binary { lhs, op, rhs } = leftmost {
            operands.push((*op, &**rhs));
            leftmost = &**lhs;
        }

        let mut acc = self.eval_expr(leftmost, line)?;
        for (op, rhs) in operands.into_iter().rev() {
            // The left operand is checked before the right one is evaluated.
            if let Some(expected) = operand_type(op) {
                if acc.ty() != expected {
                    return Err(op_mismatch(op, expected, acc, line));
                }
            }
            let rhs = self.eval_expr(rhs, line)?;
            acc = binary(op, acc, rhs, line)?;
        }
        Ok(acc)
    }

    /* Queries */
    fn eval_call(&mut self, builtin: Builtin, args: &[Expr], line: usize) -> RunResult<Value> {
        let name = builtin.keyword();
        let val = match (builtin, args) {
            (Builtin::GetActualX, []) => Value::Number(self.machine.cursor.x),
            (Builtin::GetActualY, []) => Value::Number(self.machine.cursor.y),
            (Builtin::GetCanvasSize, []) => Value::Number(self.canvas.size()),
            (Builtin::GetColorCount, [color, x1, y1, x2, y2]) => {
                let color = self.eval_color(color, line)?;
                let from = Position::new(
                    self.eval_number(x1, name, line)?,
                    self.eval_number(y1, name, line)?,
                );
                let to = Position::new(
                    self.eval_number(x2, name, line)?,
                    self.eval_number(y2, name, line)?,
                );
                Value::Number(self.canvas.color_count(color, from, to))
            }
            (Builtin::IsBrushColor, [color]) => {
                let color = self.eval_color(color, line)?;
                Value::Bool(self.machine.brush.color == color)
            }
            (Builtin::IsBrushSize, [size]) => {
                let size = self.eval_number(size, name, line)?;
                Value::Bool(self.machine.brush.size == size)
            }
            (Builtin::IsCanvasColor, [color, x, y]) => {
                let color = self.eval_color(color, line)?;
                let at = Position::new(
                    self.eval_number(x, name, line)?,
                    self.eval_number(y, name, line)?,
                );
                Value::Bool(self.canvas.pixel(at) == Some(color))
            }
            _ => return Err(arity(name, builtin.params().len(), args.len(), line)),
        };
        tracing::trace!(builtin = name, value = %val, "query");
        Ok(val)
    }

    /* Typed evaluation */
    fn eval_number(&mut self, expr: &Expr, context: &str, line: usize) -> RunResult<i64> {
        match self.eval_expr(expr, line)? {
            Value::Number(val) => Ok(val),
            other => Err(mismatch(context, ValueType::Number, other, line)),
        }
    }

    fn eval_bool(&mut self, expr: &Expr, context: &str, line: usize) -> RunResult<bool> {
        match self.eval_expr(expr, line)? {
            Value::Bool(val) => Ok(val),
            other => Err(mismatch(context, ValueType::Bool, other, line)),
        }
    }

    fn eval_color(&mut self, expr: &Expr, line: usize) -> RunResult<Color> {
        match expr {
            Expr::Literal(Literal::Str(name)) => {
                Color::from_name(name).ok_or_else(|| RuntimeError::InvalidColor {
                    found: format!("\"{}\"", name),
                    line,
                })
            }
            _ => Err(RuntimeError::InvalidColor {
                found: self.eval_expr(expr, line)?.to_string(),
                line,
            }),
        }
    }
}

/// The type both operands of `op` must have, or `None` for equality, which
/// accepts any pair of like-typed values.
fn operand_type(op: BinaryOp) -> Option<ValueType> {
    if op.is_equality() {
        None
    } else if op.is_logical() {
        Some(ValueType::Bool)
    } else {
        Some(ValueType::Number)
    }
}

/// Applies `op` to two evaluated operands.
fn binary(op: BinaryOp, lhs: Value, rhs: Value, line: usize) -> RunResult<Value> {
    if op.is_equality() {
        if lhs.ty() != rhs.ty() {
            return Err(op_mismatch(op, lhs.ty(), rhs, line));
        }
        let equal = lhs == rhs;
        return Ok(Value::Bool(if op == BinaryOp::Eq { equal } else { !equal }));
    }

    if op.is_logical() {
        let (a, b) = match (lhs, rhs) {
            (Value::Bool(a), Value::Bool(b)) => (a, b),
            (Value::Bool(_), other) | (other, _) => {
                return Err(op_mismatch(op, ValueType::Bool, other, line))
            }
        };
        let val = match op {
            BinaryOp::And => a && b,
            _ => a || b,
        };
        return Ok(Value::Bool(val));
    }

    let (a, b) = match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => (a, b),
        (Value::Number(_), other) | (other, _) => {
            return Err(op_mismatch(op, ValueType::Number, other, line))
        }
    };
    let overflow = RuntimeError::Overflow { line };
    let val = match op {
        BinaryOp::Add => Value::Number(a.checked_add(b).ok_or(overflow)?),
        BinaryOp::Sub => Value::Number(a.checked_sub(b).ok_or(overflow)?),
        BinaryOp::Mul => Value::Number(a.checked_mul(b).ok_or(overflow)?),
        BinaryOp::Div | BinaryOp::Mod if b == 0 => {
            return Err(RuntimeError::DivisionByZero { line })
        }
        BinaryOp::Div => Value::Number(a.checked_div(b).ok_or(overflow)?),
        BinaryOp::Mod => Value::Number(a.checked_rem(b).ok_or(overflow)?),
        BinaryOp::Pow => {
            if b < 0 {
                return Err(RuntimeError::NegativeExponent { line });
            }
            let exp = usize::try_from(b).map_err(|_| RuntimeError::Overflow { line })?;
            Value::Number(checked_pow(a, exp).ok_or(overflow)?)
        }
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::Le => Value::Bool(a <= b),
        BinaryOp::Ge => Value::Bool(a >= b),
        BinaryOp::And | BinaryOp::Or | BinaryOp::Eq | BinaryOp::Ne => {
            unreachable!("handled above")
        }
    };
    Ok(val)
}

fn mismatch(context: &str, expected: ValueType, found: Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch {
        context: context.to_string(),
        expected,
        found: found.ty(),
        line,
    }
}

fn op_mismatch(op: BinaryOp, expected: ValueType, found: Value, line: usize) -> RuntimeError {
    mismatch(&format!("`{}`", op), expected, found, line)
}

fn arity(name: &str, expected: usize, found: usize, line: usize) -> RuntimeError {
    RuntimeError::ArgumentCount {
        name: name.to_string(),
        expected,
        found,
        line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{RecordingCanvas, Stroke};
    use crate::state::Brush;
    use tracing_test::traced_test;
    use walle_parser::{parse, scan};
    use walle_source::StaticTypeError;

    fn run_on(canvas: &mut RecordingCanvas, source: &str) -> (Machine, Result<(), Error>) {
        let program = parse(scan(source).unwrap()).unwrap();
        let mut interpreter = Interpreter::new(canvas);
        let result = interpreter.execute(&program);
        (interpreter.into_machine(), result)
    }

    fn run(source: &str) -> (Machine, Result<(), Error>) {
        run_on(&mut RecordingCanvas::new(32), source)
    }

    fn var(machine: &Machine, ident: &str) -> Value {
        machine.variable(ident).unwrap()
    }

    #[test]
    fn test_arithmetic() {
        let (machine, result) = run(
            "a <- 7 / 2\nb <- -7 / 2\nc <- 7 % 3\nd <- 2 ** 3 ** 2\ne <- 1 + 2 * 3 - 4\nf <- (1 + 2) * 3",
        );
        assert_eq!(result, Ok(()));
        assert_eq!(var(&machine, "a"), Value::Number(3));
        assert_eq!(var(&machine, "b"), Value::Number(-3));
        assert_eq!(var(&machine, "c"), Value::Number(1));
        assert_eq!(var(&machine, "d"), Value::Number(512));
        assert_eq!(var(&machine, "e"), Value::Number(3));
        assert_eq!(var(&machine, "f"), Value::Number(9));
    }

    #[test]
    fn test_booleans() {
        let (machine, result) = run(
            "a <- 1 < 2 && !(3 == 4)\nb <- false || 2 >= 3\nc <- a == true\nd <- 5 != 5",
        );
        assert_eq!(result, Ok(()));
        assert_eq!(var(&machine, "a"), Value::Bool(true));
        assert_eq!(var(&machine, "b"), Value::Bool(false));
        assert_eq!(var(&machine, "c"), Value::Bool(true));
        assert_eq!(var(&machine, "d"), Value::Bool(false));
    }

    #[test]
    fn test_redeclare_overwrites() {
        let (machine, result) = run("x <- 1\nx <- true");
        assert_eq!(result, Ok(()));
        assert_eq!(var(&machine, "x"), Value::Bool(true));
    }

    #[test]
    fn test_arithmetic_errors() {
        assert_eq!(
            run("x <- 1\ny <- x % 0").1,
            Err(Error::from(RuntimeError::DivisionByZero { line: 2 }))
        );
        assert_eq!(
            run("x <- 2 ** (0 - 1)").1,
            Err(Error::from(RuntimeError::NegativeExponent { line: 1 }))
        );
        assert_eq!(
            run("x <- 9223372036854775807 + 1").1,
            Err(Error::from(RuntimeError::Overflow { line: 1 }))
        );
        assert_eq!(
            run("x <- 10 ** 100").1,
            Err(Error::from(RuntimeError::Overflow { line: 1 }))
        );
    }

    #[test]
    fn test_type_errors() {
        assert_eq!(
            run("b <- true\nx <- b + 1").1,
            Err(Error::from(RuntimeError::TypeMismatch {
                context: "`+`".to_string(),
                expected: ValueType::Number,
                found: ValueType::Bool,
                line: 2,
            }
            ))
        );
        assert_eq!(
            run("n <- 1\nb <- true\nx <- n == b").1,
            Err(Error::from(RuntimeError::TypeMismatch {
                context: "`==`".to_string(),
                expected: ValueType::Number,
                found: ValueType::Bool,
                line: 3,
            }
            ))
        );
        assert_eq!(
            run("n <- 1\nx <- !n").1,
            Err(Error::from(RuntimeError::TypeMismatch {
                context: "`!`".to_string(),
                expected: ValueType::Bool,
                found: ValueType::Number,
                line: 2,
            }
            ))
        );
        assert_eq!(
            run("x <- y").1,
            Err(Error::from(RuntimeError::UndefinedVariable {
                name: "y".to_string(),
                line: 1,
            }
            ))
        );
    }

    #[test]
    fn test_goto_condition_type() {
        assert_eq!(
            run("n <- 1\nl\nGoTo [l] (n)").1,
            Err(Error::from(RuntimeError::TypeMismatch {
                context: "GoTo [l]".to_string(),
                expected: ValueType::Bool,
                found: ValueType::Number,
                line: 3,
            }
            ))
        );
    }

    #[test]
    fn test_backward_jump_loop() {
        let (machine, result) = run("i <- 0\nloop\ni <- i + 1\nGoTo [loop] (i < 5)");
        assert_eq!(result, Ok(()));
        assert_eq!(var(&machine, "i"), Value::Number(5));
    }

    #[test]
    fn test_forward_jump_skips() {
        let (machine, result) = run("x <- 1\nGoTo [end] (true)\nx <- 2\nend");
        assert_eq!(result, Ok(()));
        assert_eq!(var(&machine, "x"), Value::Number(1));
    }

    #[test]
    fn test_label_errors_before_execution() {
        let mut canvas = RecordingCanvas::new(8);
        let (machine, result) = run_on(&mut canvas, "x <- 1\nFill()\nGoTo [nowhere] (true)");
        assert_eq!(
            result,
            Err(Error::from(StaticTypeError::UndefinedLabel {
                label: "nowhere".to_string(),
                line: 3,
            }
            ))
        );
        assert!(machine.variables.is_empty());
        assert!(canvas.strokes().is_empty());
    }

    #[test]
    fn test_runtime_error_keeps_state() {
        let (machine, result) = run("x <- 1\nSize(3)\ny <- x / 0\nz <- 2");
        assert_eq!(result, Err(Error::from(RuntimeError::DivisionByZero { line: 3 })));
        assert_eq!(var(&machine, "x"), Value::Number(1));
        assert_eq!(machine.brush.size, 3);
        assert_eq!(machine.variable("z"), None);
    }

    #[test]
    fn test_commands_move_cursor() {
        let mut canvas = RecordingCanvas::new(32);
        let source = r#"Spawn(2, 3)
Color("Blue")
Size(2)
DrawLine(1, 1, 4)
DrawCircle(0, -1, 2)
DrawRectangle(-1, 0, 1, 4, 2)
Fill()"#;
        let (machine, result) = run_on(&mut canvas, source);
        assert_eq!(result, Ok(()));

        let brush = Brush {
            color: Color::Blue,
            size: 2,
        };
        assert_eq!(
            canvas.strokes(),
            &[
                Stroke::Line {
                    from: Position::new(2, 3),
                    to: Position::new(6, 7),
                    brush,
                },
                Stroke::Circle {
                    center: Position::new(6, 5),
                    radius: 2,
                    brush,
                },
                Stroke::Rectangle {
                    center: Position::new(5, 5),
                    width: 4,
                    height: 2,
                    brush,
                },
                Stroke::Fill {
                    at: Position::new(5, 5),
                    brush,
                },
            ]
        );
        assert_eq!(machine.cursor, Position::new(5, 5));
        assert_eq!(machine.brush, brush);
    }

    #[test]
    fn test_command_errors() {
        assert_eq!(
            run("Spawn(32, 0)").1,
            Err(Error::from(RuntimeError::OutOfCanvas {
                x: 32,
                y: 0,
                size: 32,
                line: 1,
            }
            ))
        );
        assert_eq!(
            run("Size(0)").1,
            Err(Error::from(RuntimeError::InvalidBrushSize { size: 0, line: 1 }))
        );
        assert_eq!(
            run("DrawLine(2, 0, 1)").1,
            Err(Error::from(RuntimeError::InvalidDirection {
                command: "DrawLine".to_string(),
                dx: 2,
                dy: 0,
                line: 1,
            }
            ))
        );
        assert_eq!(
            run("DrawCircle(1, 0, -3)").1,
            Err(Error::from(RuntimeError::NegativeLength {
                command: "DrawCircle".to_string(),
                what: "radius",
                value: -3,
                line: 1,
            }
            ))
        );
    }

    #[test]
    fn test_boolean_variable_as_argument() {
        assert_eq!(
            run("x <- true\nDrawLine(x, 0, 10)").1,
            Err(Error::from(RuntimeError::TypeMismatch {
                context: "DrawLine".to_string(),
                expected: ValueType::Number,
                found: ValueType::Bool,
                line: 2,
            }
            ))
        );
    }

    #[test]
    fn test_queries() {
        let source = r#"Spawn(4, 5)
Color("Red")
Size(3)
x <- GetActualX()
y <- GetActualY()
s <- GetCanvasSize()
white <- GetColorCount("White", 0, 0, 1, 2)
red <- IsBrushColor("Red")
blue <- IsBrushColor("Blue")
three <- IsBrushSize(3)
canvas <- IsCanvasColor("White", 0, 0)
outside <- IsCanvasColor("White", 100, 0)"#;
        let (machine, result) = run(source);
        assert_eq!(result, Ok(()));
        assert_eq!(var(&machine, "x"), Value::Number(4));
        assert_eq!(var(&machine, "y"), Value::Number(5));
        assert_eq!(var(&machine, "s"), Value::Number(32));
        assert_eq!(var(&machine, "white"), Value::Number(6));
        assert_eq!(var(&machine, "red"), Value::Bool(true));
        assert_eq!(var(&machine, "blue"), Value::Bool(false));
        assert_eq!(var(&machine, "three"), Value::Bool(true));
        assert_eq!(var(&machine, "canvas"), Value::Bool(true));
        assert_eq!(var(&machine, "outside"), Value::Bool(false));
    }

    #[test]
    fn test_brush_queries_after_changes() {
        let (machine, result) = run(
            "Color(\"Green\")\ngreen <- IsBrushColor(\"Green\")\nSize(5)\nfive <- IsBrushSize(2 + 3)",
        );
        assert_eq!(result, Ok(()));
        assert_eq!(var(&machine, "green"), Value::Bool(true));
        assert_eq!(var(&machine, "five"), Value::Bool(true));
    }

    #[test]
    fn test_long_left_chains() {
        let sum = vec!["1"; 5000].join(" + ");
        let all = vec!["true"; 5000].join(" && ");
        let (machine, result) = run(&format!("n <- {}\nb <- {}", sum, all));
        assert_eq!(result, Ok(()));
        assert_eq!(var(&machine, "n"), Value::Number(5000));
        assert_eq!(var(&machine, "b"), Value::Bool(true));
    }

    #[test]
    fn test_chain_stops_at_first_type_error() {
        assert_eq!(
            run("b <- true\nx <- 1 + 2 + b + 1 / 0").1,
            Err(Error::from(RuntimeError::TypeMismatch {
                context: "`+`".to_string(),
                expected: ValueType::Number,
                found: ValueType::Bool,
                line: 2,
            }))
        );
    }

    #[test]
    fn test_color_count_on_huge_canvas() {
        let mut canvas = RecordingCanvas::new(4_000_000_000);
        let (machine, result) = run_on(
            &mut canvas,
            "x <- GetColorCount(\"White\", 0, 0, 3999999999, 3999999999)",
        );
        assert_eq!(result, Ok(()));
        assert_eq!(var(&machine, "x"), Value::Number(i64::MAX));
    }

    #[test]
    fn test_hand_built_argument_count() {
        let mut canvas = RecordingCanvas::new(8);
        let mut interpreter = Interpreter::new(&mut canvas);
        let spawn = Stmt::new(
            StmtKind::CommandCall {
                command: Command::Spawn,
                args: vec![Expr::Literal(Literal::Number(1))],
            },
            4,
        );
        assert_eq!(
            interpreter.execute(&[spawn]),
            Err(Error::from(RuntimeError::ArgumentCount {
                name: "Spawn".to_string(),
                expected: 2,
                found: 1,
                line: 4,
            }))
        );

        let query = Stmt::new(
            StmtKind::ExprStmt(Expr::Call {
                builtin: Builtin::IsBrushColor,
                args: vec![],
            }),
            7,
        );
        assert_eq!(
            interpreter.execute(&[query]),
            Err(Error::from(RuntimeError::ArgumentCount {
                name: "IsBrushColor".to_string(),
                expected: 1,
                found: 0,
                line: 7,
            }))
        );
    }

    #[test]
    fn test_initial_machine() {
        let (machine, result) = run("");
        assert_eq!(result, Ok(()));
        assert_eq!(machine.brush.color, Color::Transparent);
        assert_eq!(machine.brush.size, 1);
        assert_eq!(machine.cursor, Position::new(0, 0));
    }

    #[test]
    #[traced_test]
    fn test_logs_jumps() {
        let (_, result) = run("i <- 0\nagain\ni <- i + 1\nGoTo [again] (i < 2)");
        assert_eq!(result, Ok(()));
        assert!(logs_contain("jump"));
        assert!(logs_contain("program finished"));
    }
}
