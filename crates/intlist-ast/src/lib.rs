//! Op-script AST definitions for intlist
//!
//! Every statement preserves location information for error reporting.

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Smallest span covering both `self` and `other`
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Line and column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Convert byte span to line/column positions
#[derive(Debug)]
pub struct SourceMap {
    line_starts: Vec<usize>,
}

impl SourceMap {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(pos + 1);
            }
        }
        Self { line_starts }
    }

    #[must_use]
    pub fn position(&self, byte_offset: usize) -> Position {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => Position::new(line + 1, 1),
            Err(line) => {
                let line_start = self.line_starts[line - 1];
                Position::new(line, byte_offset - line_start + 1)
            }
        }
    }

    #[must_use]
    pub fn span_to_positions(&self, span: Span) -> (Position, Position) {
        (self.position(span.start), self.position(span.end))
    }
}

/// AST node with location information
#[derive(Debug, Clone)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    #[must_use]
    pub const fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Top-level op script: a flat statement list executed against one list
#[derive(Debug, Clone)]
pub struct Program {
    pub ops: Vec<Spanned<Op>>,
}

/// One list operation
///
/// Indexes are carried as `i64` so a negative literal survives parsing and
/// fails at execution time with an index error, not a syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// push v - new node becomes the head
    PushHead(i64),
    /// append v - new node becomes the tail
    PushTail(i64),
    /// insert v i - new node becomes the node at position i
    InsertAt { value: i64, index: i64 },
    /// delete v - remove first node holding v
    DeleteValue(i64),
    /// remove i - remove node at position i
    DeleteAt(i64),
    /// reverse the chain in place
    Reverse,
    /// release every node
    Clear,
    /// render values head-to-tail
    Print,
    /// print the node count
    Size,
    /// print the arithmetic mean
    Average,
}

/// Error types with location information
#[derive(thiserror::Error, Debug)]
pub enum IntlistError {
    #[error("intlist:{filename}:{line}:{column}: ERR_SYNTAX: {message}")]
    Syntax {
        message: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error("intlist:{filename}:{line}:{column}: ERR_INDEX: index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        index: i64,
        len: usize,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error("intlist:{filename}:{line}:{column}: ERR_EMPTY: {operation} on empty list")]
    EmptyList {
        operation: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error("intlist:{filename}:{line}:{column}: ERR_NOT_FOUND: value {value} not in list")]
    NotFound {
        value: i64,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },
}

impl IntlistError {
    #[must_use]
    pub fn syntax(message: String, span: Span, source_map: &SourceMap, filename: &str) -> Self {
        let pos = source_map.position(span.start);
        Self::Syntax {
            message,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn index_out_of_range(
        index: i64,
        len: usize,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Self {
        let pos = source_map.position(span.start);
        Self::IndexOutOfRange {
            index,
            len,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn empty_list(operation: &str, span: Span, source_map: &SourceMap, filename: &str) -> Self {
        let pos = source_map.position(span.start);
        Self::EmptyList {
            operation: operation.to_string(),
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn not_found(value: i64, span: Span, source_map: &SourceMap, filename: &str) -> Self {
        let pos = source_map.position(span.start);
        Self::NotFound {
            value,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Syntax { span, .. }
            | Self::IndexOutOfRange { span, .. }
            | Self::EmptyList { span, .. }
            | Self::NotFound { span, .. } => *span,
        }
    }
}
