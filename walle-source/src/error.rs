//! Error taxonomy. Every error is fatal for the phase that raises it.

use thiserror::Error;
use walle_value::ValueType;

/// Raised by the scanner. Lexing is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unterminated string starting on line {line}")]
    UnterminatedString { line: usize },
    #[error("unrecognized character '{character}' on line {line}")]
    UnrecognizedCharacter { character: char, line: usize },
    #[error("number `{lexeme}` on line {line} does not fit in a 64-bit integer")]
    NumberOutOfRange { lexeme: String, line: usize },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line }
            | Self::UnrecognizedCharacter { line, .. }
            | Self::NumberOutOfRange { line, .. } => *line,
        }
    }
}

/// Raised by the parser when the token stream does not follow the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected {expected} but found `{found}` on line {line}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
    },
    #[error("`{found}` does not start a statement (line {line})")]
    UnknownStatement { found: String, line: usize },
    #[error("{name} takes {expected} argument(s) but {found} were given on line {line}")]
    ArgumentCount {
        name: String,
        expected: usize,
        found: usize,
        line: usize,
    },
    #[error("trailing comma in the arguments of {name} on line {line}")]
    TrailingComma { name: String, line: usize },
    #[error("missing `)` after the arguments of {name} on line {line}, found `{found}`")]
    MissingCloseParen {
        name: String,
        found: String,
        line: usize,
    },
}

impl SyntaxError {
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnknownStatement { line, .. }
            | Self::ArgumentCount { line, .. }
            | Self::TrailingComma { line, .. }
            | Self::MissingCloseParen { line, .. } => *line,
        }
    }
}

/// Raised before execution when an expression shape is not admissible in its
/// context, or when the jump table cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaticTypeError {
    #[error("argument {position} of {name} must be a {expected} (line {line})")]
    InvalidArgument {
        name: String,
        position: usize,
        expected: &'static str,
        line: usize,
    },
    #[error("\"{color}\" is not a known color in {name} (line {line})")]
    InvalidColor {
        name: String,
        color: String,
        line: usize,
    },
    #[error("the condition of GoTo [{label}] must be a boolean expression (line {line})")]
    NonBooleanCondition { label: String, line: usize },
    #[error("expression on line {line} is neither numeric nor boolean")]
    UntypedExpression { line: usize },
    #[error("label `{label}` on line {line} is already declared on line {first_line}")]
    DuplicateLabel {
        label: String,
        line: usize,
        first_line: usize,
    },
    #[error("GoTo on line {line} jumps to undeclared label `{label}`")]
    UndefinedLabel { label: String, line: usize },
}

impl StaticTypeError {
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidArgument { line, .. }
            | Self::InvalidColor { line, .. }
            | Self::NonBooleanCondition { line, .. }
            | Self::UntypedExpression { line }
            | Self::DuplicateLabel { line, .. }
            | Self::UndefinedLabel { line, .. } => *line,
        }
    }
}

/// Raised while executing a statement. State mutated by earlier statements is
/// kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("undefined variable `{name}` on line {line}")]
    UndefinedVariable { name: String, line: usize },
    #[error("{context} expects a {expected} but got a {found} on line {line}")]
    TypeMismatch {
        context: String,
        expected: ValueType,
        found: ValueType,
        line: usize,
    },
    #[error("{name} takes {expected} argument(s) but {found} were given on line {line}")]
    ArgumentCount {
        name: String,
        expected: usize,
        found: usize,
        line: usize,
    },
    #[error("a string can only be used as a color argument (line {line})")]
    UnexpectedString { line: usize },
    #[error("{found} is not a color (line {line})")]
    InvalidColor { found: String, line: usize },
    #[error("division by zero on line {line}")]
    DivisionByZero { line: usize },
    #[error("negative exponent on line {line}")]
    NegativeExponent { line: usize },
    #[error("arithmetic overflow on line {line}")]
    Overflow { line: usize },
    #[error("{command} direction ({dx}, {dy}) must use -1, 0 or 1 (line {line})")]
    InvalidDirection {
        command: String,
        dx: i64,
        dy: i64,
        line: usize,
    },
    #[error("{command} expects a non-negative {what}, got {value} (line {line})")]
    NegativeLength {
        command: String,
        what: &'static str,
        value: i64,
        line: usize,
    },
    #[error("brush size must be positive, got {size} (line {line})")]
    InvalidBrushSize { size: i64, line: usize },
    #[error("({x}, {y}) is outside the {size}x{size} canvas (line {line})")]
    OutOfCanvas {
        x: i64,
        y: i64,
        size: i64,
        line: usize,
    },
}

impl RuntimeError {
    pub fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::ArgumentCount { line, .. }
            | Self::UnexpectedString { line }
            | Self::InvalidColor { line, .. }
            | Self::DivisionByZero { line }
            | Self::NegativeExponent { line }
            | Self::Overflow { line }
            | Self::InvalidDirection { line, .. }
            | Self::NegativeLength { line, .. }
            | Self::InvalidBrushSize { line, .. }
            | Self::OutOfCanvas { line, .. } => *line,
        }
    }
}

/// Any error the pipeline can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    StaticType(#[from] StaticTypeError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The source line the error originates from.
    pub fn line(&self) -> usize {
        match self {
            Self::Lex(err) => err.line(),
            Self::Syntax(err) => err.line(),
            Self::StaticType(err) => err.line(),
            Self::Runtime(err) => err.line(),
        }
    }
}
