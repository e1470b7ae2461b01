//! Input-file storage and source locations for the mfpga loaders.
//!
//! Each benchmark file is read once, in full, into the [`SourceDb`]. Loaders
//! scan the buffered bytes and refer back to positions through [`Span`]s,
//! which the diagnostics renderer turns into `file:line:col` locations.

#![warn(missing_docs)]

pub mod source_db;
pub mod source_file;
pub mod span;

pub use source_db::SourceDb;
pub use source_file::SourceFile;
pub use span::{FileId, ResolvedSpan, Span};
