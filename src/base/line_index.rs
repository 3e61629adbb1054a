//! Byte-offset → line/column conversion, shared by the lexer and parser so
//! every stage reports positions in the same coordinate system.

use super::Position;

/// Precomputed table of line-start byte offsets for O(log n) offset lookup.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first byte of each line; `line_starts[0] == 0`.
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset into a 0-indexed (line, column) position.
    /// Column is a byte offset within the line, not a character count.
    pub fn line_col(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_at) => insert_at - 1,
        };
        let column = offset - self.line_starts[line];
        Position::new(line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_first_column() {
        let idx = LineIndex::new("abc\ndef");
        assert_eq!(idx.line_col(0), Position::new(0, 0));
    }

    #[test]
    fn second_line_offset() {
        let idx = LineIndex::new("abc\ndef");
        assert_eq!(idx.line_col(4), Position::new(1, 0));
        assert_eq!(idx.line_col(6), Position::new(1, 2));
    }

    #[test]
    fn offset_exactly_on_newline_belongs_to_preceding_line() {
        let idx = LineIndex::new("ab\ncd");
        assert_eq!(idx.line_col(2), Position::new(0, 2));
    }
}
