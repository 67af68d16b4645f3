//! Facade crate re-exporting the intlist components
//!
//! Most users only need the list itself; the script pipeline is exported
//! for callers embedding the op-script runner.

pub use intlist_ast as ast;
pub use intlist_interpreter as interpreter;
pub use intlist_lexer as lexer;
pub use intlist_list::{IntegerList, ListError};
pub use intlist_parser as parser;
