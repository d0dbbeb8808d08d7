//! Front-end of the Wall-E drawing language: scanner, grammar tables, syntax
//! tree and parser.

pub mod ast;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod typeck;
pub mod visitor;

pub use lexer::scan;
pub use parser::parse;
