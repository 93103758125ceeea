use crate::common::test_helpers::sq;
use chessmatch::chess::ChessError;
use chessmatch::cli::input::{
    is_promotion_code, parse_source_input, read_chess_position, read_line,
};
use chessmatch::cli::{InputError, SourceInput};
use std::io::Cursor;

#[test]
fn test_read_line_trims() {
    let mut input = Cursor::new("  e2 \r\nsecond\n");
    assert_eq!(read_line(&mut input).unwrap(), "e2");
    assert_eq!(read_line(&mut input).unwrap(), "second");
    assert!(matches!(read_line(&mut input), Err(InputError::EndOfInput)));
}

#[test]
fn test_read_chess_position() {
    let mut input = Cursor::new("e4\nx9\n");
    assert_eq!(read_chess_position(&mut input).unwrap(), sq("e4"));

    match read_chess_position(&mut input) {
        Err(InputError::Chess(ChessError::InvalidPosition(_))) => {}
        other => panic!("Expected InvalidPosition, got {:?}", other),
    }
}

#[test]
fn test_parse_source_input() {
    assert_eq!(parse_source_input("e2").unwrap(), SourceInput::Square(sq("e2")));
    assert_eq!(parse_source_input("QUIT").unwrap(), SourceInput::Quit);
    assert_eq!(parse_source_input("q").unwrap(), SourceInput::Quit);

    match parse_source_input("e2e4").unwrap() {
        SourceInput::Move(mv) => {
            assert_eq!(mv.from, sq("e2"));
            assert_eq!(mv.to, sq("e4"));
        }
        other => panic!("Expected a move, got {:?}", other),
    }
    assert!(matches!(
        parse_source_input("g1 f3").unwrap(),
        SourceInput::Move(_)
    ));
}

#[test]
fn test_parse_source_input_rejects_garbage() {
    for line in ["", "z", "e9", "hello world"] {
        assert!(
            matches!(parse_source_input(line), Err(ChessError::InvalidPosition(_))),
            "'{}' should be rejected",
            line
        );
    }
}

#[test]
fn test_promotion_codes() {
    for code in ["B", "N", "R", "Q", "q", " n "] {
        assert!(is_promotion_code(code), "'{}' should be accepted", code);
    }
    for code in ["K", "P", "", "QQ", "x"] {
        assert!(!is_promotion_code(code), "'{}' should be rejected", code);
    }
}
