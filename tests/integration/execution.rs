//! Integration tests for parser + interpreter pipeline
//! Tests op execution against the list and error lifting

use intlist_ast::IntlistError;
use intlist_interpreter::Interpreter;
use intlist_parser::Parser;

fn run(source: &str) -> Result<String, IntlistError> {
    let parser = Parser::new(source)?;
    let program = parser.parse()?;
    let mut interpreter = Interpreter::new();
    let status = interpreter.execute(&program, parser.source_map(), parser.filename())?;
    Ok(status.stdout)
}

#[test]
fn test_parser_interpreter_push_order() {
    let stdout = run("push 1\npush 2\npush 3\nprint").unwrap();
    assert_eq!(stdout, "3 2 1\n");
}

#[test]
fn test_parser_interpreter_size_after_mixed_inserts() {
    let stdout = run("push 1; append 2; insert 3 1; insert 4 0; size").unwrap();
    assert_eq!(stdout, "4\n");
}

#[test]
fn test_parser_interpreter_reverse_twice_restores() {
    let stdout = run("append 1; append 2; append 3; reverse; reverse; print").unwrap();
    assert_eq!(stdout, "1 2 3\n");
}

#[test]
fn test_parser_interpreter_average() {
    let stdout = run("append 2; append 4; append 6; avg").unwrap();
    assert_eq!(stdout, "4\n");
}

#[test]
fn test_parser_interpreter_delete_then_print() {
    let stdout = run("append 1; append 2; append 3; remove 1; print").unwrap();
    assert_eq!(stdout, "1 3\n");
}

#[test]
fn test_parser_interpreter_clear_reuse() {
    let stdout = run("push 1; clear; size; push 5; print").unwrap();
    assert_eq!(stdout, "0\n5\n");
}

#[test]
fn test_error_propagation_empty_average() {
    let result = run("avg");

    assert!(result.is_err());
    match result.unwrap_err() {
        IntlistError::EmptyList { operation, .. } => {
            assert_eq!(operation, "avg");
        }
        _ => panic!("Expected EmptyList error"),
    }
}

#[test]
fn test_error_propagation_index_out_of_range() {
    let result = run("append 1\nremove 3");

    assert!(result.is_err());
    match result.unwrap_err() {
        IntlistError::IndexOutOfRange { index, len, line, .. } => {
            assert_eq!(index, 3);
            assert_eq!(len, 1);
            assert_eq!(line, 2);
        }
        _ => panic!("Expected IndexOutOfRange error"),
    }
}

#[test]
fn test_error_propagation_value_not_found() {
    let result = run("append 1\ndelete 2");

    assert!(result.is_err());
    match result.unwrap_err() {
        IntlistError::NotFound { value, .. } => {
            assert_eq!(value, 2);
        }
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_output_before_failure_is_preserved_in_list_state() {
    let parser = Parser::new("append 1\nappend 2\nremove 9").unwrap();
    let program = parser.parse().unwrap();
    let mut interpreter = Interpreter::new();

    let result = interpreter.execute(&program, parser.source_map(), parser.filename());
    assert!(result.is_err());

    // The two appends before the failing remove are visible
    let values: Vec<i64> = interpreter.list().iter().copied().collect();
    assert_eq!(values, vec![1, 2]);
}
