//! Rendering diagnostics for the terminal.

use crate::diagnostic::Diagnostic;
use mfpga_source::SourceDb;

const WARNING_ANSI: &str = "\x1b[1;33m";

/// Formats a diagnostic as text.
pub trait DiagnosticRenderer {
    /// Renders one diagnostic, resolving its span through `source_db`.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// rustc-style output:
///
/// ```text
/// warning[W101]: FPGA id 9 is outside 1..=4
///   --> case03/design.fpga.out:3:1
///   |
/// 3 | F9: g4 g5
///   | ^^
///   = note: the nodes on this line were not mapped
/// ```
pub struct TerminalRenderer {
    /// Emit ANSI colors.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = String::new();
        if self.color {
            out.push_str(&format!(
                "{WARNING_ANSI}warning[{}]\x1b[0m\x1b[1m: {}\x1b[0m\n",
                diag.code,
                diag.message
            ));
        } else {
            out.push_str(&format!("warning[{}]: {}\n", diag.code, diag.message));
        }

        if !diag.span.is_dummy() {
            let file = source_db.get_file(diag.span.file);
            let (line, col) = file.line_col(diag.span.start);
            let gutter = line.to_string();
            let pad = " ".repeat(gutter.len());
            out.push_str(&format!("{pad} --> {}\n", source_db.resolve_span(diag.span)));
            out.push_str(&format!("{pad} |\n"));
            out.push_str(&format!("{gutter} | {}\n", file.line_text(diag.span.start)));
            out.push_str(&format!(
                "{pad} | {}{}\n",
                " ".repeat(col as usize - 1),
                "^".repeat(diag.span.len().max(1) as usize)
            ));
        }

        for note in &diag.notes {
            out.push_str(&format!("  = note: {note}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::DiagnosticCode;
    use mfpga_source::Span;

    #[test]
    fn renders_location_and_caret() {
        let mut db = SourceDb::new();
        let file = db.add_source("design.fpga.out", "F1: g1\nF9: g4 g5\n");
        let diag = Diagnostic::warning(
            DiagnosticCode::new(101),
            "FPGA F9 is out of range",
            Span::new(file, 7, 9),
        )
        .with_note("the line was skipped");

        let out = TerminalRenderer::new(false).render(&diag, &db);
        assert!(out.starts_with("warning[W101]: FPGA F9 is out of range\n"));
        assert!(out.contains("--> design.fpga.out:2:1"));
        assert!(out.contains("2 | F9: g4 g5"));
        assert!(out.contains("  | ^^\n"));
        assert!(out.contains("= note: the line was skipped"));
    }

    #[test]
    fn dummy_span_has_no_location() {
        let db = SourceDb::new();
        let diag = Diagnostic::warning(DiagnosticCode::new(103), "row F9", Span::DUMMY);
        let out = TerminalRenderer::new(false).render(&diag, &db);
        assert_eq!(out, "warning[W103]: row F9\n");
    }

    #[test]
    fn color_wraps_header() {
        let db = SourceDb::new();
        let diag = Diagnostic::warning(DiagnosticCode::new(104), "dup", Span::DUMMY);
        let out = TerminalRenderer::new(true).render(&diag, &db);
        assert!(out.starts_with("\x1b[1;33mwarning[W104]"));
    }
}
