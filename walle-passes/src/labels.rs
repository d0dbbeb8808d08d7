//! Label resolution pass. Builds the jump table.

use std::collections::HashMap;

use walle_parser::ast::{Stmt, StmtKind};
use walle_parser::visitor::{walk_program, Visitor};
use walle_source::StaticTypeError;

/// Maps every label name to the index of its declaration in the program.
/// Built once before execution and never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelTable {
    labels: HashMap<String, usize>,
}

impl LabelTable {
    /// Indexes the labels of `program`.
    ///
    /// # Errors
    /// * [`StaticTypeError::DuplicateLabel`] if a label is declared twice.
    /// * [`StaticTypeError::UndefinedLabel`] if a `GoTo` targets a label that is never declared.
    pub fn resolve(program: &[Stmt]) -> Result<Self, StaticTypeError> {
        let mut resolver = Resolver::default();
        walk_program(&mut resolver, program);
        if let Some(err) = resolver.error {
            return Err(err);
        }

        for (label, line) in &resolver.jumps {
            if !resolver.labels.contains_key(*label) {
                return Err(StaticTypeError::UndefinedLabel {
                    label: label.to_string(),
                    line: *line,
                });
            }
        }

        let labels: HashMap<String, usize> = resolver
            .labels
            .into_iter()
            .map(|(label, (index, _line))| (label.to_string(), index))
            .collect();
        tracing::debug!(?labels, "resolved jump table");
        Ok(Self { labels })
    }

    /// Returns the statement index of `label`.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.labels.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Default)]
struct Resolver<'a> {
    /// Index of the statement being visited.
    position: usize,
    /// Label name to `(index, line)` of its declaration.
    labels: HashMap<&'a str, (usize, usize)>,
    /// `GoTo` targets with their line, in program order.
    jumps: Vec<(&'a str, usize)>,
    /// First duplicate declaration found.
    error: Option<StaticTypeError>,
}

impl<'a> Visitor<'a> for Resolver<'a> {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        // Do not use default walking logic: expressions hold no labels.

        match &stmt.kind {
            StmtKind::Label(label) => {
                if let Some((_, first_line)) = self.labels.get(label.as_str()) {
                    if self.error.is_none() {
                        self.error = Some(StaticTypeError::DuplicateLabel {
                            label: label.clone(),
                            line: stmt.line,
                            first_line: *first_line,
                        });
                    }
                } else {
                    self.labels.insert(label.as_str(), (self.position, stmt.line));
                }
            }
            StmtKind::GoTo { label, .. } => self.jumps.push((label.as_str(), stmt.line)),
            _ => {}
        }

        self.position += 1;
    }
}
