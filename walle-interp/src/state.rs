//! Machine state owned and mutated by the interpreter.

use std::collections::HashMap;
use walle_value::{Color, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Moves `distance` steps in direction `(dx, dy)`. `None` on overflow.
    pub fn step(self, dx: i64, dy: i64, distance: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx.checked_mul(distance)?)?,
            y: self.y.checked_add(dy.checked_mul(distance)?)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    pub color: Color,
    pub size: i64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Color::Transparent,
            size: 1,
        }
    }
}

/// Variables, brush and cursor of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Machine {
    pub variables: HashMap<String, Value>,
    pub brush: Brush,
    pub cursor: Position,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&self, ident: &str) -> Option<Value> {
        self.variables.get(ident).copied()
    }
}
