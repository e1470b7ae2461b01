//! Byte-level scanner shared by the four loaders.
//!
//! The grammars are whitespace-delimited and deliberately forgiving: a
//! missing prefix or delimiter is stepped over silently and a number with no
//! digits reads as 0. None of the cursor operations fail; loaders detect a
//! stalled scan themselves (see [`crate::loader`]).

use mfpga_source::{ResolvedSpan, SourceFile, Span};

/// A read position over one fully buffered input file.
pub struct Cursor<'a> {
    file: &'a SourceFile,
    bytes: &'a [u8],
    pos: usize,
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

impl<'a> Cursor<'a> {
    /// Starts scanning at the first byte of `file`.
    pub fn new(file: &'a SourceFile) -> Self {
        Self {
            file,
            bytes: file.bytes(),
            pos: 0,
        }
    }

    /// Returns `true` once every byte has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The byte under the cursor, if any.
    pub fn current(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// The character under the cursor, for error messages.
    pub fn current_char(&self) -> Option<char> {
        // The cursor only ever steps over ASCII, so `pos` is a char boundary.
        self.file.content.get(self.pos..)?.chars().next()
    }

    /// Advances past spaces, tabs and line breaks.
    pub fn skip_whitespace(&mut self) {
        while self.current().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    /// Skips whitespace and returns the offset where the next token starts.
    pub fn token_start(&mut self) -> usize {
        self.skip_whitespace();
        self.pos
    }

    /// Returns the next non-whitespace byte without consuming anything.
    ///
    /// `None` means only whitespace remains.
    pub fn peek_significant(&self) -> Option<u8> {
        self.bytes[self.pos.min(self.bytes.len())..]
            .iter()
            .copied()
            .find(|&b| !is_space(b))
    }

    /// Like [`peek_significant`](Self::peek_significant), but stops at the
    /// end of the current line: `None` if a line break comes first.
    pub fn peek_inline(&self) -> Option<u8> {
        self.bytes[self.pos.min(self.bytes.len())..]
            .iter()
            .copied()
            .find(|&b| !matches!(b, b' ' | b'\t' | b'\r'))
            .filter(|&b| b != b'\n')
    }

    /// Reads a run of decimal digits after optional whitespace.
    ///
    /// Returns 0 when no digit follows; nothing but whitespace is consumed
    /// in that case. There is no sign and no overflow check: the value wraps.
    pub fn read_unsigned(&mut self) -> u32 {
        self.skip_whitespace();
        let mut value: u32 = 0;
        while let Some(b @ b'0'..=b'9') = self.current() {
            value = value.wrapping_mul(10).wrapping_add(u32::from(b - b'0'));
            self.pos += 1;
        }
        value
    }

    /// Reads `<prefix><digits>`, e.g. `F12` or `g7`.
    ///
    /// The prefix is consumed if present and silently tolerated if absent.
    pub fn read_prefixed_id(&mut self, prefix: u8) -> u32 {
        self.skip_whitespace();
        if self.current() == Some(prefix) {
            self.pos += 1;
        }
        self.read_unsigned()
    }

    /// Consumes one `ch` if it is the next significant byte, along with the
    /// whitespace on both sides. Never fails.
    pub fn skip_optional(&mut self, ch: u8) {
        self.skip_whitespace();
        if self.current() == Some(ch) {
            self.pos += 1;
        }
        self.skip_whitespace();
    }

    /// Span from `start` up to the current offset.
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(self.file.id, start as u32, self.pos as u32)
    }

    /// Line/column location of a byte offset in this file.
    pub fn location(&self, offset: usize) -> ResolvedSpan {
        let (line, col) = self.file.line_col(offset as u32);
        ResolvedSpan {
            file_path: self.file.path.clone(),
            line,
            col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfpga_source::FileId;
    use std::path::PathBuf;

    fn file(text: &str) -> SourceFile {
        SourceFile::new(FileId::from_raw(0), PathBuf::from("t"), text.to_string())
    }

    #[test]
    fn reads_prefixed_ids_and_numbers() {
        let f = file("  F12   400\n");
        let mut c = Cursor::new(&f);
        assert_eq!(c.read_prefixed_id(b'F'), 12);
        assert_eq!(c.read_unsigned(), 400);
        assert!(!c.at_end());
        c.skip_whitespace();
        assert!(c.at_end());
    }

    #[test]
    fn missing_prefix_is_tolerated() {
        let f = file("17");
        let mut c = Cursor::new(&f);
        assert_eq!(c.read_prefixed_id(b'g'), 17);
        assert!(c.at_end());
    }

    #[test]
    fn no_digits_reads_zero_without_consuming() {
        let f = file("  x9");
        let mut c = Cursor::new(&f);
        assert_eq!(c.read_unsigned(), 0);
        assert_eq!(c.offset(), 2);
        assert_eq!(c.current(), Some(b'x'));
    }

    #[test]
    fn overflow_wraps_instead_of_panicking() {
        let f = file("4294967296");
        let mut c = Cursor::new(&f);
        assert_eq!(c.read_unsigned(), 0);
        assert!(c.at_end());
    }

    #[test]
    fn peek_does_not_consume() {
        let f = file(" \n\t g5");
        let c = Cursor::new(&f);
        assert_eq!(c.peek_significant(), Some(b'g'));
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn peek_at_end_is_none() {
        let f = file("g1   \n  ");
        let mut c = Cursor::new(&f);
        c.read_prefixed_id(b'g');
        assert_eq!(c.peek_significant(), None);
        assert_eq!(c.peek_inline(), None);
    }

    #[test]
    fn peek_inline_stops_at_line_break() {
        let f = file("g1 1 \r\ng2");
        let mut c = Cursor::new(&f);
        c.read_prefixed_id(b'g');
        assert_eq!(c.peek_inline(), Some(b'1'));
        c.read_unsigned();
        assert_eq!(c.peek_inline(), None);
        assert_eq!(c.peek_significant(), Some(b'g'));
    }

    #[test]
    fn skip_optional_consumes_delimiter_and_spaces() {
        let f = file("F1 :  0 , 4");
        let mut c = Cursor::new(&f);
        c.read_prefixed_id(b'F');
        c.skip_optional(b':');
        assert_eq!(c.read_unsigned(), 0);
        c.skip_optional(b',');
        assert_eq!(c.current(), Some(b'4'));
    }

    #[test]
    fn skip_optional_without_delimiter_only_skips_space() {
        let f = file("  7");
        let mut c = Cursor::new(&f);
        c.skip_optional(b',');
        assert_eq!(c.offset(), 2);
        assert_eq!(c.read_unsigned(), 7);
    }

    #[test]
    fn span_and_location() {
        let f = file("F1 2\nF22 3\n");
        let mut c = Cursor::new(&f);
        c.read_prefixed_id(b'F');
        c.read_unsigned();
        let start = c.token_start();
        c.read_prefixed_id(b'F');
        assert_eq!(c.span_from(start), Span::new(FileId::from_raw(0), 5, 8));
        let loc = c.location(start);
        assert_eq!((loc.line, loc.col), (2, 1));
    }
}
