use crate::common::test_helpers::{board_with, pos, targets};
use chessmatch::chess::movegen::{attacked_squares, possible_moves};
use chessmatch::chess::{Color, PieceType};

#[test]
fn test_queen_on_empty_board() {
    let board = board_with(&[("d4", PieceType::Queen, Color::White)]);
    assert_eq!(possible_moves(&board, pos("d4"), None).count(), 27);
}

#[test]
fn test_king_in_the_open() {
    let board = board_with(&[("e4", PieceType::King, Color::Black)]);
    assert_eq!(
        targets(&possible_moves(&board, pos("e4"), None)),
        ["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"]
    );
}

#[test]
fn test_knight_in_the_corner() {
    let board = board_with(&[("a1", PieceType::Knight, Color::White)]);
    assert_eq!(targets(&possible_moves(&board, pos("a1"), None)), ["b3", "c2"]);
}

/// Test sliders stop before their own pieces and on the first opponent
#[test]
fn test_rook_rays_stop_at_pieces() {
    let board = board_with(&[
        ("a1", PieceType::Rook, Color::White),
        ("a3", PieceType::Pawn, Color::White),
        ("c1", PieceType::Knight, Color::Black),
        ("d1", PieceType::Knight, Color::Black),
    ]);

    assert_eq!(
        targets(&possible_moves(&board, pos("a1"), None)),
        ["a2", "b1", "c1"]
    );
}

#[test]
fn test_bishop_diagonals() {
    let board = board_with(&[
        ("c1", PieceType::Bishop, Color::White),
        ("b2", PieceType::Pawn, Color::White),
        ("e3", PieceType::Pawn, Color::Black),
    ]);

    assert_eq!(targets(&possible_moves(&board, pos("c1"), None)), ["d2", "e3"]);
}

#[test]
fn test_pawn_pushes_and_captures() {
    let board = board_with(&[
        ("e2", PieceType::Pawn, Color::White),
        ("d3", PieceType::Bishop, Color::Black),
        ("f3", PieceType::Bishop, Color::White),
    ]);

    assert_eq!(
        targets(&possible_moves(&board, pos("e2"), None)),
        ["d3", "e3", "e4"]
    );
}

#[test]
fn test_black_pawn_moves_down_the_board() {
    let board = board_with(&[("c7", PieceType::Pawn, Color::Black)]);
    assert_eq!(targets(&possible_moves(&board, pos("c7"), None)), ["c5", "c6"]);
}

#[test]
fn test_blocked_pawn_has_no_pushes() {
    let board = board_with(&[
        ("e2", PieceType::Pawn, Color::White),
        ("e3", PieceType::Knight, Color::Black),
    ]);
    assert!(!possible_moves(&board, pos("e2"), None).any());

    let board = board_with(&[
        ("e2", PieceType::Pawn, Color::White),
        ("e4", PieceType::Knight, Color::Black),
    ]);
    assert_eq!(targets(&possible_moves(&board, pos("e2"), None)), ["e3"]);
}

/// Test a pawn away from its starting row only steps once, even if it never moved
#[test]
fn test_double_step_only_from_starting_row() {
    let board = board_with(&[("e3", PieceType::Pawn, Color::White)]);
    assert_eq!(targets(&possible_moves(&board, pos("e3"), None)), ["e4"]);
}

#[test]
fn test_en_passant_requires_vulnerable_pawn() {
    let board = board_with(&[
        ("e5", PieceType::Pawn, Color::White),
        ("d5", PieceType::Pawn, Color::Black),
    ]);

    assert_eq!(targets(&possible_moves(&board, pos("e5"), None)), ["e6"]);
    assert_eq!(
        targets(&possible_moves(&board, pos("e5"), Some(pos("d5")))),
        ["d6", "e6"]
    );
    // vulnerable pawn not beside this one
    assert_eq!(
        targets(&possible_moves(&board, pos("e5"), Some(pos("b4")))),
        ["e6"]
    );
}

#[test]
fn test_en_passant_ignores_own_pawn() {
    let board = board_with(&[
        ("e5", PieceType::Pawn, Color::White),
        ("d5", PieceType::Pawn, Color::White),
    ]);
    assert_eq!(
        targets(&possible_moves(&board, pos("e5"), Some(pos("d5")))),
        ["e6"]
    );
}

#[test]
fn test_castling_candidates() {
    let board = board_with(&[
        ("e1", PieceType::King, Color::White),
        ("a1", PieceType::Rook, Color::White),
        ("h1", PieceType::Rook, Color::White),
    ]);

    let moves = possible_moves(&board, pos("e1"), None);
    assert!(moves.get(pos("g1")));
    assert!(moves.get(pos("c1")));
    assert_eq!(moves.count(), 7);
}

#[test]
fn test_castling_blocked_by_piece_in_between() {
    let board = board_with(&[
        ("e8", PieceType::King, Color::Black),
        ("a8", PieceType::Rook, Color::Black),
        ("h8", PieceType::Rook, Color::Black),
        ("b8", PieceType::Knight, Color::Black),
        ("g8", PieceType::Knight, Color::White),
    ]);

    let moves = possible_moves(&board, pos("e8"), None);
    assert!(!moves.get(pos("c8")));
    // g8 holds an opponent knight, but a king never captures two files away
    assert!(!moves.get(pos("g8")));
}

#[test]
fn test_castling_needs_a_rook_of_the_same_color() {
    let board = board_with(&[
        ("e1", PieceType::King, Color::White),
        ("h1", PieceType::Rook, Color::Black),
        ("a1", PieceType::Bishop, Color::White),
    ]);

    let moves = possible_moves(&board, pos("e1"), None);
    assert!(!moves.get(pos("g1")));
    assert!(!moves.get(pos("c1")));
}

#[test]
fn test_attacked_squares_for_pawns() {
    let board = board_with(&[("d7", PieceType::Pawn, Color::Black)]);
    assert_eq!(targets(&attacked_squares(&board, pos("d7"))), ["c6", "e6"]);

    let edge = board_with(&[("a2", PieceType::Pawn, Color::White)]);
    assert_eq!(targets(&attacked_squares(&edge, pos("a2"))), ["b3"]);
}

#[test]
fn test_empty_square_yields_empty_matrix() {
    let board = board_with(&[]);
    assert!(!possible_moves(&board, pos("e4"), None).any());
    assert!(!attacked_squares(&board, pos("e4")).any());
}
