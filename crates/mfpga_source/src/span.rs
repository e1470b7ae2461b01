//! File ids, byte spans and their line/column resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Index of a file inside the [`SourceDb`](crate::SourceDb).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FileId(u32);

impl FileId {
    /// Placeholder for locations that do not come from an input file.
    pub const DUMMY: FileId = FileId(u32::MAX);

    /// Creates a file id from its position in the database.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the position of the file in the database.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

/// A half-open byte range `start..end` within one input file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Span {
    /// The file the range belongs to.
    pub file: FileId,
    /// First byte of the range.
    pub start: u32,
    /// One past the last byte of the range.
    pub end: u32,
}

impl Span {
    /// A span that points nowhere; rendered without a location line.
    pub const DUMMY: Span = Span {
        file: FileId::DUMMY,
        start: 0,
        end: 0,
    };

    /// Creates a span over `start..end` in `file`.
    pub fn new(file: FileId, start: u32, end: u32) -> Self {
        Self { file, start, end }
    }

    /// Extends this span to also cover `other`. Both must be in the same file.
    pub fn to(self, other: Span) -> Span {
        debug_assert_eq!(self.file, other.file);
        Span {
            file: self.file,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` for a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` for [`Span::DUMMY`].
    pub fn is_dummy(&self) -> bool {
        self.file == FileId::DUMMY
    }
}

/// A span resolved to 1-based line and column numbers for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// Path of the input file.
    pub file_path: PathBuf,
    /// Line of the first byte.
    pub line: u32,
    /// Column of the first byte.
    pub col: u32,
}

impl fmt::Display for ResolvedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path.display(), self.line, self.col)
    }
}
