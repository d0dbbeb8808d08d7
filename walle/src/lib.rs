//! Wall-E drawing language: scan, parse and run a program against a canvas.

use walle_interp::{Canvas, Interpreter, Machine};
use walle_parser::ast::Stmt;
use walle_source::Error;

pub use walle_interp as interp;
pub use walle_parser as parser;
pub use walle_source as source;
pub use walle_value as value;

/// Scans and parses `source`, then checks its labels.
/// Nothing is executed.
pub fn compile(source: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = walle_parser::scan(source)?;
    let program = walle_parser::parse(tokens)?;
    walle_passes::LabelTable::resolve(&program)?;
    Ok(program)
}

/// Compiles and runs `source` on `canvas`, returning the final machine state.
pub fn run<C: Canvas>(source: &str, canvas: &mut C) -> Result<Machine, Error> {
    let program = compile(source)?;
    let mut interpreter = Interpreter::new(canvas);
    interpreter.execute(&program)?;
    Ok(interpreter.into_machine())
}
