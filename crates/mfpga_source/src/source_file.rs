//! A fully buffered input file with a line index.

use crate::span::FileId;
use mfpga_common::ContentHash;
use std::path::PathBuf;

/// One input file, read in a single bulk read and kept immutable afterwards.
pub struct SourceFile {
    /// Id of this file in its [`SourceDb`](crate::SourceDb).
    pub id: FileId,
    /// Path the file was read from (or a synthetic name for in-memory text).
    pub path: PathBuf,
    /// The file contents.
    pub content: String,
    /// XXH3 fingerprint of `content`.
    pub content_hash: ContentHash,
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Wraps `content`, indexing line starts for location lookups.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| (i + 1) as u32),
            )
            .collect();
        let content_hash = ContentHash::from_bytes(content.as_bytes());
        Self {
            id,
            path,
            content,
            content_hash,
            line_starts,
        }
    }

    /// The raw bytes the loaders scan.
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Number of lines, counting a trailing partial line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to 1-based `(line, column)`.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        (line_idx as u32 + 1, offset - self.line_starts[line_idx] + 1)
    }

    /// Returns the text of the line containing `offset`, without its newline.
    pub fn line_text(&self, offset: u32) -> &str {
        let (line, _) = self.line_col(offset);
        let start = self.line_starts[line as usize - 1] as usize;
        let end = self
            .line_starts
            .get(line as usize)
            .map_or(self.content.len(), |&next| next as usize);
        self.content[start..end].trim_end_matches(['\n', '\r'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(text: &str) -> SourceFile {
        SourceFile::new(FileId::from_raw(0), PathBuf::from("design.net"), text.into())
    }

    #[test]
    fn line_col_across_lines() {
        let f = file("g1 1 g2\ng2 1 g3\n");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_col(5), (1, 6));
        assert_eq!(f.line_col(8), (2, 1));
        assert_eq!(f.line_col(10), (2, 3));
    }

    #[test]
    fn line_text_strips_newline() {
        let f = file("F1: g1 g2\r\nF2: g3\n");
        assert_eq!(f.line_text(3), "F1: g1 g2");
        assert_eq!(f.line_text(12), "F2: g3");
    }

    #[test]
    fn empty_file_has_one_line() {
        let f = file("");
        assert_eq!(f.line_count(), 1);
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_text(0), "");
    }

    #[test]
    fn bytes_view_matches_content() {
        let f = file("F12 400");
        assert_eq!(&f.bytes()[..3], b"F12");
        assert_eq!(f.bytes()[4], b'4');
    }

    #[test]
    fn hash_tracks_content() {
        let f = file("F1 2");
        assert_eq!(f.content_hash, ContentHash::from_bytes(b"F1 2"));
    }
}
