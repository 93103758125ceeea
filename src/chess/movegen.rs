//! Per-piece candidate move generation.
//!
//! Candidates follow piece geometry and occupancy only. Whether a move would
//! leave the mover's own king attacked is decided by `ChessMatch`, which
//! applies the move speculatively and rolls it back.

use super::board::Board;
use super::moves::MoveMatrix;
use super::piece::{Color, Piece, PieceType};
use super::position::Position;

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Candidate matrix for the piece standing on `from`.
///
/// `en_passant` is the pawn that just advanced two squares, if any; pawns
/// beside it get the diagonal square behind it as a candidate. An empty
/// square yields an empty matrix.
pub fn possible_moves(board: &Board, from: Position, en_passant: Option<Position>) -> MoveMatrix {
    let mut moves = MoveMatrix::new(board.rows(), board.columns());
    let Some(piece) = board.piece(from).copied() else {
        return moves;
    };

    match piece.piece_type {
        PieceType::Pawn => pawn_moves(board, from, &piece, en_passant, &mut moves),
        PieceType::Rook => slide(board, from, &piece, &ROOK_DIRECTIONS, &mut moves),
        PieceType::Bishop => slide(board, from, &piece, &BISHOP_DIRECTIONS, &mut moves),
        PieceType::Queen => slide(board, from, &piece, &QUEEN_DIRECTIONS, &mut moves),
        PieceType::Knight => step(board, from, &piece, &KNIGHT_OFFSETS, &mut moves),
        PieceType::King => {
            step(board, from, &piece, &QUEEN_DIRECTIONS, &mut moves);
            castling_moves(board, from, &piece, &mut moves);
        }
    }

    moves
}

/// Squares the piece on `from` attacks.
///
/// Differs from [`possible_moves`] for pawns (diagonals only, occupied or
/// not, no pushes) and kings (no castling).
pub fn attacked_squares(board: &Board, from: Position) -> MoveMatrix {
    let mut attacks = MoveMatrix::new(board.rows(), board.columns());
    let Some(piece) = board.piece(from).copied() else {
        return attacks;
    };

    match piece.piece_type {
        PieceType::Pawn => {
            for side in [-1, 1] {
                attacks.mark(from.offset(piece.color.forward(), side));
            }
        }
        PieceType::King => step(board, from, &piece, &QUEEN_DIRECTIONS, &mut attacks),
        _ => return possible_moves(board, from, None),
    }

    attacks
}

/// Row pawns of this color start from
fn pawn_start_row(board: &Board, piece: &Piece) -> i32 {
    match piece.color {
        Color::White => board.rows() as i32 - 2,
        Color::Black => 1,
    }
}

fn is_empty(board: &Board, position: Position) -> bool {
    board.position_exists(position) && board.piece(position).is_none()
}

fn is_opponent(board: &Board, position: Position, piece: &Piece) -> bool {
    board
        .piece(position)
        .is_some_and(|other| other.is_opponent_of(piece))
}

fn can_land(board: &Board, position: Position, piece: &Piece) -> bool {
    is_empty(board, position) || is_opponent(board, position, piece)
}

fn pawn_moves(
    board: &Board,
    from: Position,
    piece: &Piece,
    en_passant: Option<Position>,
    moves: &mut MoveMatrix,
) {
    let forward = piece.color.forward();

    let one = from.offset(forward, 0);
    if is_empty(board, one) {
        moves.mark(one);

        let two = from.offset(2 * forward, 0);
        if from.row == pawn_start_row(board, piece) && is_empty(board, two) {
            moves.mark(two);
        }
    }

    for side in [-1, 1] {
        let diagonal = from.offset(forward, side);
        if is_opponent(board, diagonal, piece) {
            moves.mark(diagonal);
        }
    }

    // en passant
    if let Some(vulnerable) = en_passant {
        let beside = vulnerable.row == from.row && (vulnerable.column - from.column).abs() == 1;
        let capturable = board
            .piece(vulnerable)
            .is_some_and(|other| other.piece_type == PieceType::Pawn && other.is_opponent_of(piece));
        let behind = vulnerable.offset(forward, 0);
        if beside && capturable && is_empty(board, behind) {
            moves.mark(behind);
        }
    }
}

fn slide(
    board: &Board,
    from: Position,
    piece: &Piece,
    directions: &[(i32, i32)],
    moves: &mut MoveMatrix,
) {
    for &(rows, columns) in directions {
        let mut target = from.offset(rows, columns);
        while is_empty(board, target) {
            moves.mark(target);
            target = target.offset(rows, columns);
        }
        if is_opponent(board, target, piece) {
            moves.mark(target);
        }
    }
}

fn step(
    board: &Board,
    from: Position,
    piece: &Piece,
    offsets: &[(i32, i32)],
    moves: &mut MoveMatrix,
) {
    for &(rows, columns) in offsets {
        let target = from.offset(rows, columns);
        if can_land(board, target, piece) {
            moves.mark(target);
        }
    }
}

fn is_castling_rook(board: &Board, position: Position, king: &Piece) -> bool {
    board.piece(position).is_some_and(|rook| {
        rook.piece_type == PieceType::Rook && rook.color == king.color && rook.move_count() == 0
    })
}

// Attacks on the squares the king crosses are checked by ChessMatch.
fn castling_moves(board: &Board, from: Position, king: &Piece, moves: &mut MoveMatrix) {
    if king.move_count() != 0 {
        return;
    }

    // kingside
    if is_castling_rook(board, from.offset(0, 3), king)
        && (1..=2).all(|columns| is_empty(board, from.offset(0, columns)))
    {
        moves.mark(from.offset(0, 2));
    }

    // queenside
    if is_castling_rook(board, from.offset(0, -4), king)
        && (1..=3).all(|columns| is_empty(board, from.offset(0, -columns)))
    {
        moves.mark(from.offset(0, -2));
    }
}
