//! Drawing backend seen by the interpreter.

use crate::state::{Brush, Position};
use walle_value::Color;

/// A raster canvas. The interpreter only forwards already evaluated geometry;
/// rasterization is entirely up to the implementation.
pub trait Canvas {
    /// Side length of the (square) canvas.
    fn size(&self) -> i64;

    fn draw_line(&mut self, from: Position, to: Position, brush: &Brush);
    fn draw_circle(&mut self, center: Position, radius: i64, brush: &Brush);
    fn draw_rectangle(&mut self, center: Position, width: i64, height: i64, brush: &Brush);
    /// Flood fills the region containing `at`.
    fn fill(&mut self, at: Position, brush: &Brush);

    /// Color of a pixel, or `None` outside the canvas.
    fn pixel(&self, at: Position) -> Option<Color>;
    /// Number of pixels of `color` in the rectangle spanned by two corners.
    fn color_count(&self, color: Color, from: Position, to: Position) -> i64;

    /// Returns `true` if `at` lies on the canvas.
    fn contains(&self, at: Position) -> bool {
        let size = self.size();
        (0..size).contains(&at.x) && (0..size).contains(&at.y)
    }
}

/// A draw call received by a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum Stroke {
    Line {
        from: Position,
        to: Position,
        brush: Brush,
    },
    Circle {
        center: Position,
        radius: i64,
        brush: Brush,
    },
    Rectangle {
        center: Position,
        width: i64,
        height: i64,
        brush: Brush,
    },
    Fill {
        at: Position,
        brush: Brush,
    },
}

/// A canvas that records every draw call in order and never rasterizes.
/// Queries answer as for a blank white canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingCanvas {
    size: i64,
    strokes: Vec<Stroke>,
}

impl RecordingCanvas {
    pub fn new(size: i64) -> Self {
        Self {
            size,
            strokes: Vec::new(),
        }
    }

    /// Draw calls received so far.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    fn record(&mut self, stroke: Stroke) {
        tracing::debug!(?stroke, "canvas call");
        self.strokes.push(stroke);
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> i64 {
        self.size
    }

    fn draw_line(&mut self, from: Position, to: Position, brush: &Brush) {
        self.record(Stroke::Line {
            from,
            to,
            brush: *brush,
        });
    }

    fn draw_circle(&mut self, center: Position, radius: i64, brush: &Brush) {
        self.record(Stroke::Circle {
            center,
            radius,
            brush: *brush,
        });
    }

    fn draw_rectangle(&mut self, center: Position, width: i64, height: i64, brush: &Brush) {
        self.record(Stroke::Rectangle {
            center,
            width,
            height,
            brush: *brush,
        });
    }

    fn fill(&mut self, at: Position, brush: &Brush) {
        self.record(Stroke::Fill { at, brush: *brush });
    }

    fn pixel(&self, at: Position) -> Option<Color> {
        if self.contains(at) {
            Some(Color::White)
        } else {
            None
        }
    }

    fn color_count(&self, color: Color, from: Position, to: Position) -> i64 {
        if color != Color::White || !self.contains(from) || !self.contains(to) {
            return 0;
        }
        // Both corners are on the canvas, so only the product can overflow.
        let width = (from.x - to.x).abs() + 1;
        let height = (from.y - to.y).abs() + 1;
        width.saturating_mul(height)
    }
}
