//! Append-only accumulation of validation errors.

use crate::types::ValidationError;

/// Collects violations in traversal order across every document of a run.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    errors: Vec<ValidationError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation after all previously recorded ones.
    pub fn push(&mut self, error: ValidationError) {
        log::trace!("{:?} line {:?}: {}", error.kind, error.line, error.message);
        self.errors.push(error);
    }

    /// `true` when nothing has been recorded, i.e. the input passes.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Recorded violations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a ErrorCollector {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
