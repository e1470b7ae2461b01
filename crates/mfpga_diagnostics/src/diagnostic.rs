//! The diagnostic message type.

use crate::code::DiagnosticCode;
use mfpga_source::Span;
use serde::{Deserialize, Serialize};

/// A warning about a location in an input file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable code identifying the kind of message.
    pub code: DiagnosticCode,
    /// One-line description.
    pub message: String,
    /// Where the condition was detected.
    pub span: Span,
    /// Follow-up `note:` lines.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a warning diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    /// Appends a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}
