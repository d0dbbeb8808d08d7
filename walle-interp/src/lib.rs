pub mod canvas;
pub mod interpreter;
pub mod state;

pub use canvas::{Canvas, RecordingCanvas, Stroke};
pub use interpreter::Interpreter;
pub use state::{Brush, Machine, Position};
