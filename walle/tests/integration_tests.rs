use walle::interp::{Brush, Machine, Position, RecordingCanvas, Stroke};
use walle::parser::ast::StmtKind;
use walle::parser::grammar::Command;
use walle::source::{Error, RuntimeError, StaticTypeError, SyntaxError};
use walle::value::{Color, Value};

fn interpret(source: &str) -> (Result<Machine, Error>, RecordingCanvas) {
    let mut canvas = RecordingCanvas::new(64);
    let result = walle::run(source, &mut canvas);
    (result, canvas)
}

#[test]
fn end_to_end_commands() {
    let source = "Spawn(0,0)\nColor(\"Red\")\nSize(1)\nDrawLine(1,0,5)\nFill()";

    let program = walle::compile(source).unwrap();
    let commands: Vec<Command> = program
        .iter()
        .map(|stmt| match &stmt.kind {
            StmtKind::CommandCall { command, .. } => *command,
            other => panic!("unexpected statement {:?}", other),
        })
        .collect();
    assert_eq!(
        commands,
        [
            Command::Spawn,
            Command::Color,
            Command::Size,
            Command::DrawLine,
            Command::Fill,
        ]
    );

    let (machine, canvas) = interpret(source);
    let machine = machine.unwrap();
    let brush = Brush {
        color: Color::Red,
        size: 1,
    };
    assert_eq!(
        canvas.strokes(),
        &[
            Stroke::Line {
                from: Position::new(0, 0),
                to: Position::new(5, 0),
                brush,
            },
            Stroke::Fill {
                at: Position::new(5, 0),
                brush,
            },
        ]
    );
    assert_eq!(machine.cursor, Position::new(5, 0));
}

#[test]
fn jump_loop() {
    let (machine, _) = interpret(
        r#"
        n <- 0
        visits <- 0
        start
        visits <- visits + 1
        GoTo [done] (n >= 3)
        n <- n + 1
        GoTo [start] (true)
        done"#,
    );
    let machine = machine.unwrap();
    assert_eq!(machine.variable("visits"), Some(Value::Number(4)));
    assert_eq!(machine.variable("n"), Some(Value::Number(3)));
}

#[test]
fn draw_square_with_loop() {
    let (machine, canvas) = interpret(
        r#"
        Spawn(10, 10)
        Color("Black")
        side <- 0
        edge
        DrawLine(1, 0, 5)
        side <- side + 1
        GoTo [done] (side == 1)
        GoTo [edge] (side < 2)
        done
        DrawLine(0, 1, 5)"#,
    );
    let machine = machine.unwrap();
    assert_eq!(canvas.strokes().len(), 2);
    assert_eq!(machine.cursor, Position::new(15, 15));
    assert_eq!(machine.brush.color, Color::Black);
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    let (result, _) = interpret("x <- 5 / 0");
    assert_eq!(
        result,
        Err(Error::from(RuntimeError::DivisionByZero { line: 1 }))
    );
}

#[test]
fn division_by_zero_in_command_argument() {
    let (result, canvas) = interpret("Spawn(0, 0)\nDrawLine(1, 0, 5 / 0)");
    assert_eq!(
        result,
        Err(Error::from(RuntimeError::DivisionByZero { line: 2 }))
    );
    assert!(canvas.strokes().is_empty());
}

#[test]
fn division_by_zero_in_goto_condition() {
    let (result, _) = interpret("l\nGoTo [l] (1 / 0 == 1)");
    assert_eq!(
        result,
        Err(Error::from(RuntimeError::DivisionByZero { line: 2 }))
    );
}

#[test]
fn long_sum() {
    let source = format!("x <- {}", vec!["1"; 5000].join(" + "));
    let (machine, _) = interpret(&source);
    assert_eq!(machine.unwrap().variable("x"), Some(Value::Number(5000)));
}

#[test]
fn undefined_label_rejected_before_execution() {
    let source = "Spawn(1, 1)\nFill()\nGoTo [missing] (true)";
    assert_eq!(
        walle::compile(source),
        Err(Error::from(StaticTypeError::UndefinedLabel {
            label: "missing".to_string(),
            line: 3,
        }))
    );

    let (result, canvas) = interpret(source);
    assert!(matches!(
        result,
        Err(Error::StaticType(StaticTypeError::UndefinedLabel { .. }))
    ));
    assert!(canvas.strokes().is_empty());
}

#[test]
fn assignment_accepts_both_types() {
    let (machine, _) = interpret("x <- true\ny <- 3 + 4");
    let machine = machine.unwrap();
    assert_eq!(machine.variable("x"), Some(Value::Bool(true)));
    assert_eq!(machine.variable("y"), Some(Value::Number(7)));
}

#[test]
fn boolean_variable_fails_only_at_runtime() {
    let source = "x <- true\nDrawLine(x, 0, 10)";
    assert!(walle::compile(source).is_ok());

    let (result, canvas) = interpret(source);
    assert!(matches!(
        result,
        Err(Error::Runtime(RuntimeError::TypeMismatch { line: 2, .. }))
    ));
    assert!(canvas.strokes().is_empty());
}

#[test]
fn arity_checked_before_argument_shape() {
    assert_eq!(
        walle::compile("DrawLine(true, 0)"),
        Err(Error::from(SyntaxError::ArgumentCount {
            name: "DrawLine".to_string(),
            expected: 3,
            found: 2,
            line: 1,
        }))
    );
}

#[test]
fn query_rejected_in_goto_condition() {
    assert_eq!(
        walle::compile("l\nGoTo [l] (IsBrushSize(3))"),
        Err(Error::from(StaticTypeError::NonBooleanCondition {
            label: "l".to_string(),
            line: 2,
        }))
    );
}

#[test]
fn lex_errors_stop_everything() {
    let (result, canvas) = interpret("Fill()\nColor(\"Red)");
    assert!(matches!(result, Err(Error::Lex(_))));
    assert!(canvas.strokes().is_empty());
}

#[test]
fn queries_drive_branches() {
    let (machine, canvas) = interpret(
        r#"
        Spawn(0, 0)
        Size(3)
        big_brush <- IsBrushSize(3)
        GoTo [big] (big_brush)
        DrawLine(1, 0, 1)
        big
        x <- GetActualX() + GetCanvasSize()"#,
    );
    let machine = machine.unwrap();
    assert!(canvas.strokes().is_empty());
    assert_eq!(machine.variable("x"), Some(Value::Number(64)));
}
