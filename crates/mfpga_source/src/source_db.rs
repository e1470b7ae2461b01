//! Owner of every input file read during a run.

use crate::source_file::SourceFile;
use crate::span::{FileId, ResolvedSpan, Span};
use std::io;
use std::path::{Path, PathBuf};

/// Owns the buffered contents of all input files and resolves [`Span`]s.
#[derive(Default)]
pub struct SourceDb {
    files: Vec<SourceFile>,
}

impl SourceDb {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a whole file from disk in one bulk read.
    ///
    /// Fails if the file is missing or unreadable, if fewer bytes arrive than
    /// the file's reported length, or if the contents are not UTF-8.
    pub fn load_file(&mut self, path: &Path) -> io::Result<FileId> {
        let expected = std::fs::metadata(path)?.len();
        let bytes = std::fs::read(path)?;
        if (bytes.len() as u64) < expected {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("short read: got {} of {expected} bytes", bytes.len()),
            ));
        }
        let content =
            String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(self.push(path.to_path_buf(), content))
    }

    /// Adds in-memory text under a synthetic file name.
    pub fn add_source(&mut self, name: impl Into<PathBuf>, content: impl Into<String>) -> FileId {
        self.push(name.into(), content.into())
    }

    fn push(&mut self, path: PathBuf, content: String) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(SourceFile::new(id, path, content));
        id
    }

    /// Returns the file for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this database.
    pub fn get_file(&self, id: FileId) -> &SourceFile {
        &self.files[id.as_raw() as usize]
    }

    /// Iterates over all loaded files in load order.
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Resolves the start of `span` to a displayable location.
    pub fn resolve_span(&self, span: Span) -> ResolvedSpan {
        let file = self.get_file(span.file);
        let (line, col) = file.line_col(span.start);
        ResolvedSpan {
            file_path: file.path.clone(),
            line,
            col,
        }
    }
}
