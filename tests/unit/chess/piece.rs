use chessmatch::chess::{ChessError, Color, Piece, PieceType};

#[test]
fn test_color_opposite() {
    assert_eq!(Color::White.opposite(), Color::Black);
    assert_eq!(Color::Black.opposite(), Color::White);
}

#[test]
fn test_pawns_advance_toward_the_opponent() {
    // row 0 is rank 8
    assert_eq!(Color::White.forward(), -1);
    assert_eq!(Color::Black.forward(), 1);
}

#[test]
fn test_color_parsing() {
    assert_eq!("white".parse::<Color>().unwrap(), Color::White);
    assert_eq!("B".parse::<Color>().unwrap(), Color::Black);

    match "red".parse::<Color>() {
        Err(ChessError::InvalidColor(msg)) => assert!(msg.contains("red")),
        other => panic!("Expected InvalidColor, got {:?}", other),
    }
}

#[test]
fn test_piece_type_parsing() {
    assert_eq!("n".parse::<PieceType>().unwrap(), PieceType::Knight);
    assert_eq!("Queen".parse::<PieceType>().unwrap(), PieceType::Queen);
    assert!(matches!(
        "X".parse::<PieceType>(),
        Err(ChessError::InvalidPieceType(_))
    ));
}

#[test]
fn test_promotion_targets() {
    assert!(PieceType::Queen.is_promotion_target());
    assert!(PieceType::Rook.is_promotion_target());
    assert!(PieceType::Bishop.is_promotion_target());
    assert!(PieceType::Knight.is_promotion_target());
    assert!(!PieceType::King.is_promotion_target());
    assert!(!PieceType::Pawn.is_promotion_target());
}

#[test]
fn test_new_piece_has_not_moved() {
    let rook = Piece::new(PieceType::Rook, Color::White);
    assert_eq!(rook.move_count(), 0);
    assert_eq!(rook.piece_type, PieceType::Rook);
    assert_eq!(rook.color, Color::White);
}

#[test]
fn test_piece_representations() {
    let white_knight = Piece::new(PieceType::Knight, Color::White);
    let black_knight = Piece::new(PieceType::Knight, Color::Black);

    assert_eq!(white_knight.ascii_char(), 'N');
    assert_eq!(black_knight.ascii_char(), 'n');
    assert_eq!(white_knight.symbol(), '♘');
    assert_eq!(black_knight.to_string(), "♞");
    assert!(white_knight.is_opponent_of(&black_knight));
    assert!(!white_knight.is_opponent_of(&white_knight));
}
