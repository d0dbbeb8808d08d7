//! Static passes run over a parsed program before execution.

pub mod labels;

pub use labels::LabelTable;
