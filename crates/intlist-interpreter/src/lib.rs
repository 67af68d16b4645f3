//! Op-script interpreter for intlist
//!
//! Executes a parsed program against a single `IntegerList`, buffering the
//! script's output. List errors are lifted into positioned errors using the
//! span of the failing statement.

use intlist_ast::{IntlistError, Op, Program, SourceMap, Span, Spanned};
use intlist_list::{IntegerList, ListError};

pub struct Interpreter {
    list: IntegerList,
}

/// Result of a completed script run
#[derive(Debug)]
pub struct ExitStatus {
    pub code: i32,
    pub stdout: String,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: IntegerList::new(),
        }
    }

    /// Execute an op-script program
    ///
    /// The interpreter keeps its list across calls, so several programs can
    /// be run against the same list.
    ///
    /// # Errors
    ///
    /// Returns `IntlistError` on the first failing operation. The list is
    /// left as the preceding operations made it; the failing operation
    /// itself never mutates.
    pub fn execute(
        &mut self,
        program: &Program,
        source_map: &SourceMap,
        filename: &str,
    ) -> Result<ExitStatus, IntlistError> {
        let mut stdout = String::new();

        for op in &program.ops {
            self.apply(op, &mut stdout, source_map, filename)?;
        }

        Ok(ExitStatus { code: 0, stdout })
    }

    /// The list the interpreter operates on
    #[must_use]
    pub const fn list(&self) -> &IntegerList {
        &self.list
    }

    fn apply(
        &mut self,
        op: &Spanned<Op>,
        stdout: &mut String,
        source_map: &SourceMap,
        filename: &str,
    ) -> Result<(), IntlistError> {
        let span = op.span;
        match op.node {
            Op::PushHead(value) => self.list.push_head(value),
            Op::PushTail(value) => self.list.push_tail(value),
            Op::InsertAt { value, index } => {
                let index = self.checked_index(index, span, source_map, filename)?;
                self.list
                    .insert(index, value)
                    .map_err(|e| lift(e, "insert", span, source_map, filename))?;
            }
            Op::DeleteValue(value) => {
                self.list
                    .delete_value(value)
                    .map_err(|e| lift(e, "delete", span, source_map, filename))?;
            }
            Op::DeleteAt(index) => {
                let index = self.checked_index(index, span, source_map, filename)?;
                self.list
                    .delete_at(index)
                    .map_err(|e| lift(e, "remove", span, source_map, filename))?;
            }
            Op::Reverse => self.list.reverse(),
            Op::Clear => self.list.clear(),
            Op::Print => {
                stdout.push_str(&self.list.to_string());
                stdout.push('\n');
            }
            Op::Size => {
                stdout.push_str(&format!("{}\n", self.list.len()));
            }
            Op::Average => {
                let avg = self
                    .list
                    .average()
                    .map_err(|e| lift(e, "avg", span, source_map, filename))?;
                stdout.push_str(&format!("{avg}\n"));
            }
        }
        Ok(())
    }

    /// A negative index is an index error against the current length, never
    /// a wraparound
    fn checked_index(
        &self,
        index: i64,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Result<usize, IntlistError> {
        usize::try_from(index).map_err(|_| {
            IntlistError::index_out_of_range(index, self.list.len(), span, source_map, filename)
        })
    }
}

fn lift(
    err: ListError,
    operation: &str,
    span: Span,
    source_map: &SourceMap,
    filename: &str,
) -> IntlistError {
    match err {
        ListError::IndexOutOfRange { index, len } => IntlistError::index_out_of_range(
            i64::try_from(index).unwrap_or(i64::MAX),
            len,
            span,
            source_map,
            filename,
        ),
        ListError::Empty => IntlistError::empty_list(operation, span, source_map, filename),
        ListError::NotFound { value } => {
            IntlistError::not_found(value, span, source_map, filename)
        }
    }
}
