use chessmatch::chess::{ChessError, ChessPosition, Move, Position};

/// Test algebraic names map to grid coordinates (row = 8 - rank, column = file - 'a')
#[test]
fn test_chess_position_to_position() {
    let cases = [
        ("a8", 0, 0),
        ("h8", 0, 7),
        ("a1", 7, 0),
        ("h1", 7, 7),
        ("e2", 6, 4),
        ("e4", 4, 4),
        ("d5", 3, 3),
    ];

    for (name, row, column) in cases {
        let position = name.parse::<ChessPosition>().unwrap().to_position();
        assert_eq!(position, Position::new(row, column), "square {}", name);
    }
}

#[test]
fn test_position_to_chess_position() {
    for row in 0..8 {
        for column in 0..8 {
            let position = Position::new(row, column);
            let name = ChessPosition::from_position(position).unwrap();
            assert_eq!(name.to_position(), position);
        }
    }

    let e2 = ChessPosition::from_position(Position::new(6, 4)).unwrap();
    assert_eq!(e2.column(), 'e');
    assert_eq!(e2.row(), 2);
    assert_eq!(e2.to_string(), "e2");
}

#[test]
fn test_parse_accepts_uppercase_and_whitespace() {
    let upper: ChessPosition = "E2".parse().unwrap();
    let padded: ChessPosition = "  e2\n".parse().unwrap();
    assert_eq!(upper, padded);
    assert_eq!(upper.to_string(), "e2");
}

/// Test malformed coordinates are rejected with a distinguishable parse failure
#[test]
fn test_parse_rejects_malformed_input() {
    let invalid = ["", "e", "e22", "i1", "a0", "a9", "22", "ee", "e-", "é2"];

    for input in invalid {
        match input.parse::<ChessPosition>() {
            Ok(position) => panic!("'{}' parsed as {}", input, position),
            Err(ChessError::InvalidPosition(msg)) => {
                assert!(
                    msg.contains("a1 to h8"),
                    "message for '{}' should name the valid range: {}",
                    input,
                    msg
                );
            }
            Err(other) => panic!("Expected InvalidPosition for '{}', got {:?}", input, other),
        }
    }
}

#[test]
fn test_off_board_positions_have_no_name() {
    for position in [
        Position::new(-1, 0),
        Position::new(0, 8),
        Position::new(8, 8),
    ] {
        assert!(matches!(
            ChessPosition::from_position(position),
            Err(ChessError::InvalidPosition(_))
        ));
    }
}

#[test]
fn test_position_offset() {
    let e4 = Position::new(4, 4);
    assert_eq!(e4.offset(-1, 0), Position::new(3, 4));
    assert_eq!(e4.offset(2, -3), Position::new(6, 1));
}

#[test]
fn test_move_parsing() {
    let mv: Move = "e2e4".parse().unwrap();
    assert_eq!(mv.from.to_string(), "e2");
    assert_eq!(mv.to.to_string(), "e4");
    assert_eq!(mv.to_string(), "e2e4");

    let spaced: Move = "e2 e4".parse().unwrap();
    assert_eq!(mv, spaced);

    assert!("e2e2".parse::<Move>().is_err());
    assert!("e2e".parse::<Move>().is_err());
    assert!("e2e9".parse::<Move>().is_err());
}
