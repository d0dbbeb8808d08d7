//! Static grammar tables: keyword lexemes of commands and query built-ins, the
//! argument classes each one accepts, and the color names.

use std::fmt;
use walle_value::{Color, ValueType};

/// The syntactic class an argument must belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// A string literal naming a known [`Color`].
    Color,
    /// A strictly numeric expression (no boolean operators, no query built-ins).
    Numeric,
}

impl Param {
    pub fn describe(self) -> &'static str {
        match self {
            Param::Color => "color literal",
            Param::Numeric => "numeric expression",
        }
    }
}

/// A side-effecting command statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Spawn,
    Color,
    Size,
    DrawLine,
    DrawCircle,
    DrawRectangle,
    Fill,
}

/// A side-effect free query usable inside expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    GetActualX,
    GetActualY,
    GetCanvasSize,
    GetColorCount,
    IsBrushColor,
    IsBrushSize,
    IsCanvasColor,
}

use Param::{Color as C, Numeric as N};

const COMMANDS: &[(&str, Command, &[Param])] = &[
    ("Spawn", Command::Spawn, &[N, N]),
    ("Color", Command::Color, &[C]),
    ("Size", Command::Size, &[N]),
    ("DrawLine", Command::DrawLine, &[N, N, N]),
    ("DrawCircle", Command::DrawCircle, &[N, N, N]),
    ("DrawRectangle", Command::DrawRectangle, &[N, N, N, N, N]),
    ("Fill", Command::Fill, &[]),
];

const BUILTINS: &[(&str, Builtin, &[Param], ValueType)] = &[
    ("GetActualX", Builtin::GetActualX, &[], ValueType::Number),
    ("GetActualY", Builtin::GetActualY, &[], ValueType::Number),
    ("GetCanvasSize", Builtin::GetCanvasSize, &[], ValueType::Number),
    (
        "GetColorCount",
        Builtin::GetColorCount,
        &[C, N, N, N, N],
        ValueType::Number,
    ),
    ("IsBrushColor", Builtin::IsBrushColor, &[C], ValueType::Bool),
    ("IsBrushSize", Builtin::IsBrushSize, &[N], ValueType::Bool),
    ("IsCanvasColor", Builtin::IsCanvasColor, &[C, N, N], ValueType::Bool),
];

impl Command {
    pub fn from_keyword(lexeme: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|(keyword, ..)| *keyword == lexeme)
            .map(|(_, command, _)| *command)
    }

    fn entry(self) -> &'static (&'static str, Command, &'static [Param]) {
        COMMANDS
            .iter()
            .find(|(_, command, _)| *command == self)
            .unwrap_or_else(|| unreachable!("every command has a table entry"))
    }

    pub fn keyword(self) -> &'static str {
        self.entry().0
    }

    /// Argument classes, in order. The arity is `params().len()`.
    pub fn params(self) -> &'static [Param] {
        self.entry().2
    }
}

impl Builtin {
    pub fn from_keyword(lexeme: &str) -> Option<Self> {
        BUILTINS
            .iter()
            .find(|(keyword, ..)| *keyword == lexeme)
            .map(|(_, builtin, ..)| *builtin)
    }

    fn entry(self) -> &'static (&'static str, Builtin, &'static [Param], ValueType) {
        BUILTINS
            .iter()
            .find(|(_, builtin, ..)| *builtin == self)
            .unwrap_or_else(|| unreachable!("every builtin has a table entry"))
    }

    pub fn keyword(self) -> &'static str {
        self.entry().0
    }

    /// Argument classes, in order. The arity is `params().len()`.
    pub fn params(self) -> &'static [Param] {
        self.entry().2
    }

    pub fn return_type(self) -> ValueType {
        self.entry().3
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Returns `true` if `name` is one of the fixed color names.
pub fn is_color(name: &str) -> bool {
    Color::from_name(name).is_some()
}
