//! Runtime values shared by the parser, the passes and the interpreter.

use std::fmt;

/// A value produced by evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Bool(bool),
}

impl Value {
    /// Returns the [`ValueType`] of the value.
    pub fn ty(&self) -> ValueType {
        match self {
            Self::Number(_) => ValueType::Number,
            Self::Bool(_) => ValueType::Bool,
        }
    }

    /// Attempts to cast the `Value` into an `i64` or `None` if wrong type.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(val) => Some(*val),
            _ => None,
        }
    }

    /// Attempts to cast the `Value` into a `bool` or `None` if wrong type.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(val) => Some(*val),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(val) => write!(f, "{}", val),
            Value::Bool(val) => write!(f, "{}", val),
        }
    }
}

/// The static shape of an expression (and the dynamic type of a [`Value`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Number,
    Bool,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Number => f.write_str("number"),
            ValueType::Bool => f.write_str("boolean"),
        }
    }
}

/// Brush and canvas colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Black,
    White,
    Grey,
    Transparent,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; 9] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Black,
        Color::White,
        Color::Grey,
        Color::Transparent,
    ];

    /// The name used for the color in source code (e.g. `"Red"`).
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Purple => "Purple",
            Color::Black => "Black",
            Color::White => "White",
            Color::Grey => "Grey",
            Color::Transparent => "Transparent",
        }
    }

    /// Looks up a color by its source name. Names are case sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|color| color.name() == name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
