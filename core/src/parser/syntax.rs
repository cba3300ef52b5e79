// Source locations shared by the AST, parse errors and runtime errors.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// A location in a named source text.
///
/// Positions are only meant to be displayed; they take no part in the
/// structural equality of expressions.
#[derive(Debug, Clone)]
pub struct Position {
    source_name: Arc<str>,
    line: usize,
    column: usize,
    offset: usize,
}

impl Position {
    pub fn new(source_name: impl Into<Arc<str>>, line: usize, column: usize, offset: usize) -> Self {
        Self {
            source_name: source_name.into(),
            line,
            column,
            offset,
        }
    }

    /// The first character of `source_name`.
    pub fn start_of(source_name: impl Into<Arc<str>>) -> Self {
        Self::new(source_name, 1, 1, 0)
    }

    pub(crate) fn from_pest(source_name: &Arc<str>, pos: pest::Position<'_>) -> Self {
        let (line, column) = pos.line_col();
        Self {
            source_name: Arc::clone(source_name),
            line,
            column,
            offset: pos.pos(),
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column number, counted in characters.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte offset into the source text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// A one-character byte range starting at this position, clamped to `source`.
    ///
    /// An offset inside a character of `source` (a position from another
    /// text) is moved back to the start of that character.
    pub fn span_in(&self, source: &str) -> Range<usize> {
        let mut start = self.offset.min(source.len());
        while !source.is_char_boundary(start) {
            start -= 1;
        }
        let end = source[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());
        start..end
    }
}

/// Line starts of one source text, for turning byte offsets into positions
/// without rescanning the text for each node.
pub(crate) struct LineIndex<'s> {
    source_name: Arc<str>,
    source: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    pub(crate) fn new(source_name: Arc<str>, source: &'s str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source_name,
            source,
            line_starts,
        }
    }

    /// The position of byte `offset`, which must lie on a character boundary.
    pub(crate) fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let prefix = &self.source.as_bytes()[line_start..offset];
        let column = if prefix.is_ascii() {
            prefix.len()
        } else {
            self.source
                .get(line_start..offset)
                .map_or(prefix.len(), |text| text.chars().count())
        };
        Position::new(Arc::clone(&self.source_name), line, column + 1, offset)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start_of("<unknown>")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source_name, self.line, self.column)
    }
}
