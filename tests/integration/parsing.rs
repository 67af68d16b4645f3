//! Integration tests for lexer + parser pipeline
//! Tests component interactions at the parsing boundary

use intlist_ast::Op;
use intlist_parser::Parser;

#[test]
fn test_lexer_parser_simple_statement() {
    let parser = Parser::new("push 9").unwrap();
    let program = parser.parse().unwrap();

    assert_eq!(program.ops.len(), 1);
    assert_eq!(program.ops[0].node, Op::PushHead(9));
}

#[test]
fn test_lexer_parser_full_op_set() {
    let source = "push 1\nappend 2\ninsert 3 1\ndelete 2\nremove 0\nreverse\nclear\nprint\nsize\navg\n";
    let parser = Parser::new(source).unwrap();
    let program = parser.parse().unwrap();

    assert_eq!(program.ops.len(), 10);
    assert_eq!(program.ops[2].node, Op::InsertAt { value: 3, index: 1 });
    assert_eq!(program.ops[5].node, Op::Reverse);
    assert_eq!(program.ops[9].node, Op::Average);
}

#[test]
fn test_lexer_parser_mixed_separators() {
    let parser = Parser::new("push 1; push 2\npush 3").unwrap();
    let program = parser.parse().unwrap();

    assert_eq!(program.ops.len(), 3);
}

#[test]
fn test_lexer_parser_negative_literals() {
    let parser = Parser::new("push -7\ninsert -1 -2").unwrap();
    let program = parser.parse().unwrap();

    assert_eq!(program.ops[0].node, Op::PushHead(-7));
    assert_eq!(
        program.ops[1].node,
        Op::InsertAt {
            value: -1,
            index: -2
        }
    );
}

#[test]
fn test_lexer_error_propagation() {
    // Unknown words are rejected while tokenizing, before parsing starts
    let result = Parser::new("push nine");
    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("ERR_SYNTAX"));
}

#[test]
fn test_parser_error_position_spans_second_line() {
    let parser = Parser::new_with_filename("push 1\ninsert 5\n", "ops.il").unwrap();
    let err = parser.parse().unwrap_err();

    let msg = format!("{err}");
    assert!(msg.contains("intlist:ops.il:2:"));
    assert!(msg.contains("expected an integer"));
}

#[test]
fn test_parser_comments_and_blank_lines() {
    let source = "# exercise script\n\npush 1 # head\n; ;\nprint\n";
    let parser = Parser::new(source).unwrap();
    let program = parser.parse().unwrap();

    assert_eq!(program.ops.len(), 2);
}
