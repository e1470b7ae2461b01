//! Structured warnings about benchmark input files.
//!
//! Loaders report conditions they tolerate (an out-of-range FPGA id on a
//! mapping line, a duplicated topology row) as [`Diagnostic`]s pushed into a
//! [`DiagnosticSink`]. The CLI renders them with the [`TerminalRenderer`] or
//! serializes them to JSON.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod sink;

pub use code::DiagnosticCode;
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use sink::DiagnosticSink;
