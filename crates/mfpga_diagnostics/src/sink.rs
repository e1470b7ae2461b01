//! Accumulator for diagnostics emitted while loading.

use crate::diagnostic::Diagnostic;
use std::cell::RefCell;

/// Collects diagnostics emitted by the loaders.
///
/// Loading is strictly sequential, so the sink uses interior mutability
/// without locking and is shared by plain `&` reference.
#[derive(Default)]
pub struct DiagnosticSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn emit(&self, diag: Diagnostic) {
        self.diagnostics.borrow_mut().push(diag);
    }

    /// Number of warnings collected and not yet taken.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Removes and returns everything collected so far.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Returns a copy of everything collected so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
