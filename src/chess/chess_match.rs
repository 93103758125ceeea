use super::board::Board;
use super::error::ChessError;
use super::movegen;
use super::moves::MoveMatrix;
use super::piece::{Color, Piece, PieceType};
use super::position::{ChessPosition, Position};
use tracing::{debug, info, trace, warn};

/// Observable phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    InProgress,
    Check,
    Checkmate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Capture {
    piece: Piece,
    position: Position,
}

/// Everything needed to reverse one applied move, special moves included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an applied move must be undone or committed"]
pub(crate) struct UndoToken {
    source: Position,
    target: Position,
    /// The moving piece exactly as it stood on `source` (type and move count)
    moved: Piece,
    captured: Option<Capture>,
    rook_shift: Option<(Position, Position)>,
    en_passant_vulnerable: Option<Position>,
}

/// A game of chess between two players at one board.
///
/// The board is the only record of which pieces are in play; captured pieces
/// are kept in their own roster in capture order.
#[derive(Debug, Clone)]
pub struct ChessMatch {
    board: Board,
    turn: u32,
    current_player: Color,
    check: bool,
    checkmate: bool,
    en_passant_vulnerable: Option<Position>,
    promoted: Option<Position>,
    captured_pieces: Vec<Piece>,
}

impl ChessMatch {
    /// New match in the standard starting position, White to move
    pub fn new() -> Self {
        Self::with_board(Board::starting_position())
    }

    /// Match on an empty board, for custom setups via [`Self::place_new_piece`]
    pub fn empty() -> Self {
        Self::with_board(Board::standard())
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            turn: 1,
            current_player: Color::White,
            check: false,
            checkmate: false,
            en_passant_vulnerable: None,
            promoted: None,
            captured_pieces: Vec::new(),
        }
    }

    /// Choose which side moves first
    pub fn with_current_player(mut self, color: Color) -> Self {
        self.current_player = color;
        self
    }

    pub fn place_new_piece(
        &mut self,
        position: ChessPosition,
        piece: Piece,
    ) -> Result<(), ChessError> {
        self.board.place_piece(piece, position.to_position())?;
        Ok(())
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn check(&self) -> bool {
        self.check
    }

    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    pub fn state(&self) -> MatchState {
        if self.checkmate {
            MatchState::Checkmate
        } else if self.check {
            MatchState::Check
        } else {
            MatchState::InProgress
        }
    }

    /// Square of the pawn that may be captured en passant on this ply
    pub fn en_passant_vulnerable(&self) -> Option<ChessPosition> {
        self.en_passant_vulnerable
            .and_then(|position| ChessPosition::from_position(position).ok())
    }

    /// Piece produced by the last move's promotion, if it is still pending
    pub fn promoted(&self) -> Option<Piece> {
        self.promoted
            .and_then(|position| self.board.piece(position).copied())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Full piece grid, row 0 being rank 8
    pub fn pieces(&self) -> Vec<Vec<Option<Piece>>> {
        self.board.to_grid()
    }

    pub fn pieces_on_the_board(&self) -> Vec<(ChessPosition, Piece)> {
        self.board
            .pieces()
            .filter_map(|(position, piece)| {
                ChessPosition::from_position(position)
                    .ok()
                    .map(|name| (name, *piece))
            })
            .collect()
    }

    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured_pieces
    }

    /// Candidate moves for the piece on `source`, not filtered for self-check
    pub fn possible_moves(&self, source: ChessPosition) -> Result<MoveMatrix, ChessError> {
        let position = source.to_position();
        if !self.board.position_exists(position) {
            return Err(ChessError::InvalidPosition(format!(
                "Source position {} not found on the board",
                source
            )));
        }
        if self.board.piece(position).is_none() {
            return Err(ChessError::NoPiece(source));
        }

        Ok(self.candidate_moves(position))
    }

    /// Candidate moves that survive the self-check probe and castling rules
    pub fn legal_moves(&mut self, source: ChessPosition) -> Result<MoveMatrix, ChessError> {
        let mut moves = self.possible_moves(source)?;
        let from = source.to_position();
        let Some(color) = self.board.piece(from).map(|piece| piece.color) else {
            return Err(ChessError::NoPiece(source));
        };

        let candidates: Vec<Position> = moves.targets().collect();
        for target in candidates {
            if self.validate_castling(from, target).is_err()
                || self.probe(from, target, |chess_match| chess_match.test_check(color))?
            {
                moves.clear(target);
            }
        }

        Ok(moves)
    }

    /// Validate and play a move for the current player.
    ///
    /// On success returns the captured piece, if any. A rejected move leaves
    /// the match exactly as it was.
    pub fn perform_chess_move(
        &mut self,
        source: ChessPosition,
        target: ChessPosition,
    ) -> Result<Option<Piece>, ChessError> {
        self.promoted = None;
        if self.checkmate {
            return Err(ChessError::MatchOver);
        }

        let from = source.to_position();
        let to = target.to_position();
        self.validate_source_position(source)?;
        self.validate_target_position(source, target)?;
        self.validate_castling(from, to)?;

        let mover = self.current_player;
        let token = self.make_move(from, to)?;
        self.promote_on_last_rank(to)?;

        let exposed = match self.test_check(mover) {
            Ok(exposed) => exposed,
            Err(e) => {
                self.promoted = None;
                self.undo_move(token)?;
                return Err(e);
            }
        };
        if exposed {
            self.promoted = None;
            self.undo_move(token)?;
            debug!("Rejected {}{}: it would leave the {} king in check", source, target, mover);
            return Err(ChessError::SelfCheck);
        }

        // before the checkmate test: capturing en passant can escape check
        let double_step =
            token.moved.piece_type == PieceType::Pawn && (to.row - from.row).abs() == 2;
        self.en_passant_vulnerable = double_step.then_some(to);

        let opponent = mover.opposite();
        self.check = self.test_check(opponent)?;
        if self.test_checkmate(opponent)? {
            self.checkmate = true;
            info!("Checkmate on turn {}, {} wins", self.turn, mover);
        } else {
            self.next_turn();
        }

        let captured = token.captured.map(|capture| capture.piece);
        debug!(
            "{} played {}{} (captured: {:?}, check: {})",
            mover, source, target, captured, self.check
        );
        Ok(captured)
    }

    /// Swap the pending promotion for a bishop, knight, rook or queen, given
    /// as `B`, `N`, `R` or `Q`.
    ///
    /// Any other code leaves the pending piece as it is and returns it.
    /// Check and checkmate are re-evaluated for the new piece.
    pub fn replace_promoted_piece(&mut self, code: &str) -> Result<Piece, ChessError> {
        let position = self.promoted.ok_or(ChessError::NoPendingPromotion)?;
        let pending = self
            .board
            .piece(position)
            .copied()
            .ok_or(ChessError::NoPendingPromotion)?;

        let piece_type = match code.trim() {
            "B" => PieceType::Bishop,
            "N" => PieceType::Knight,
            "R" => PieceType::Rook,
            "Q" => PieceType::Queen,
            _ => {
                warn!("Ignoring promotion code '{}', keeping {:?}", code, pending.piece_type);
                return Ok(pending);
            }
        };

        let replacement = self.swap_promoted(position, piece_type)?;

        let mover = replacement.color;
        let opponent = mover.opposite();
        self.check = self.test_check(opponent)?;
        let checkmate = self.test_checkmate(opponent)?;
        match (self.checkmate, checkmate) {
            (true, false) => {
                self.checkmate = false;
                self.next_turn();
            }
            (false, true) => {
                self.checkmate = true;
                self.previous_turn();
            }
            _ => {}
        }

        Ok(replacement)
    }

    /// Whether any piece of the other color could capture `color`'s king
    pub fn test_check(&self, color: Color) -> Result<bool, ChessError> {
        let king = self.king_position(color)?;
        let opponent = color.opposite();

        Ok(self
            .board
            .pieces()
            .filter(|(_, piece)| piece.color == opponent)
            .any(|(position, _)| self.candidate_moves(position).get(king)))
    }

    /// Whether `color` is in check with no move that escapes it.
    ///
    /// Every candidate move is applied and rolled back in turn; the match is
    /// unchanged when this returns.
    pub fn test_checkmate(&mut self, color: Color) -> Result<bool, ChessError> {
        if !self.test_check(color)? {
            return Ok(false);
        }

        let defenders: Vec<Position> = self
            .board
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(position, _)| position)
            .collect();

        for source in defenders {
            let candidates = self.candidate_moves(source);
            for target in candidates.targets() {
                // castling never escapes check
                if self.is_castling(source, target) {
                    continue;
                }
                let still_in_check =
                    self.probe(source, target, |chess_match| chess_match.test_check(color))?;
                if !still_in_check {
                    trace!("{} escapes check with {} -> {}", color, source, target);
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    fn candidate_moves(&self, position: Position) -> MoveMatrix {
        movegen::possible_moves(&self.board, position, self.en_passant_vulnerable)
    }

    fn king_position(&self, color: Color) -> Result<Position, ChessError> {
        self.board
            .pieces()
            .find(|(_, piece)| piece.piece_type == PieceType::King && piece.color == color)
            .map(|(position, _)| position)
            .ok_or(ChessError::MissingKing(color))
    }

    fn is_square_attacked(&self, square: Position, by: Color) -> bool {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == by)
            .any(|(position, _)| movegen::attacked_squares(&self.board, position).get(square))
    }

    fn is_castling(&self, source: Position, target: Position) -> bool {
        source.row == target.row
            && (target.column - source.column).abs() == 2
            && self
                .board
                .piece(source)
                .is_some_and(|piece| piece.piece_type == PieceType::King)
    }

    fn validate_source_position(&self, source: ChessPosition) -> Result<(), ChessError> {
        let position = source.to_position();
        let piece = self
            .board
            .piece(position)
            .ok_or(ChessError::NoPiece(source))?;

        if piece.color != self.current_player {
            return Err(ChessError::NotYourPiece {
                position: source,
                owner: piece.color,
            });
        }

        if !self.candidate_moves(position).any() {
            return Err(ChessError::NoPossibleMoves(source));
        }

        Ok(())
    }

    fn validate_target_position(
        &self,
        source: ChessPosition,
        target: ChessPosition,
    ) -> Result<(), ChessError> {
        if !self
            .candidate_moves(source.to_position())
            .get(target.to_position())
        {
            return Err(ChessError::IllegalTarget {
                from: source,
                to: target,
            });
        }
        Ok(())
    }

    /// The king may not castle out of check or across an attacked square.
    /// Landing in check is caught by the self-check probe.
    fn validate_castling(&self, source: Position, target: Position) -> Result<(), ChessError> {
        if !self.is_castling(source, target) {
            return Ok(());
        }
        let Some(king) = self.board.piece(source) else {
            return Ok(());
        };
        let opponent = king.color.opposite();

        if self.is_square_attacked(source, opponent) {
            return Err(ChessError::IllegalCastling(
                "the king can't castle out of check".to_string(),
            ));
        }

        let crossed = source.offset(0, (target.column - source.column).signum());
        if self.is_square_attacked(crossed, opponent) {
            let name = ChessPosition::from_position(crossed)
                .map(|name| name.to_string())
                .unwrap_or_else(|_| crossed.to_string());
            return Err(ChessError::IllegalCastling(format!(
                "the king can't pass through attacked square {}",
                name
            )));
        }

        Ok(())
    }

    /// Apply a move, run `test` against the resulting position, then undo it.
    ///
    /// The undo runs whatever `test` returns.
    fn probe<T>(
        &mut self,
        source: Position,
        target: Position,
        test: impl FnOnce(&Self) -> Result<T, ChessError>,
    ) -> Result<T, ChessError> {
        trace!("Probing {} -> {}", source, target);
        let token = self.make_move(source, target)?;
        let outcome = test(self);
        self.undo_move(token)?;
        outcome
    }

    fn make_move(&mut self, source: Position, target: Position) -> Result<UndoToken, ChessError> {
        let moved = self.board.remove_piece(source)?.ok_or_else(|| {
            ChessError::InconsistentState(format!("no piece on {} to move", source))
        })?;
        let mut piece = moved;
        piece.increase_move_count();

        let mut captured = self
            .board
            .remove_piece(target)?
            .map(|piece| Capture { piece, position: target });

        // castling: the rook jumps to the square the king crossed
        let mut rook_shift = None;
        if piece.piece_type == PieceType::King && (target.column - source.column).abs() == 2 {
            let (rook_from, rook_to) = if target.column > source.column {
                (source.offset(0, 3), source.offset(0, 1))
            } else {
                (source.offset(0, -4), source.offset(0, -1))
            };
            let mut rook = self.board.remove_piece(rook_from)?.ok_or_else(|| {
                ChessError::InconsistentState(format!("no rook on {} to castle with", rook_from))
            })?;
            rook.increase_move_count();
            self.board.place_piece(rook, rook_to)?;
            rook_shift = Some((rook_from, rook_to));
        }

        // en passant: a diagonal pawn move onto an empty square takes the pawn beside it
        if piece.piece_type == PieceType::Pawn
            && source.column != target.column
            && captured.is_none()
        {
            let pawn_position = Position::new(source.row, target.column);
            captured = self
                .board
                .remove_piece(pawn_position)?
                .map(|piece| Capture {
                    piece,
                    position: pawn_position,
                });
        }

        self.board.place_piece(piece, target)?;
        if let Some(capture) = captured {
            self.captured_pieces.push(capture.piece);
        }

        Ok(UndoToken {
            source,
            target,
            moved,
            captured,
            rook_shift,
            en_passant_vulnerable: self.en_passant_vulnerable,
        })
    }

    fn undo_move(&mut self, token: UndoToken) -> Result<(), ChessError> {
        let piece = self.board.remove_piece(token.target)?.ok_or_else(|| {
            ChessError::InconsistentState(format!("no piece on {} to take back", token.target))
        })?;
        if piece.color != token.moved.color {
            return Err(ChessError::InconsistentState(format!(
                "expected a {} piece on {}, found {}",
                token.moved.color, token.target, piece.color
            )));
        }
        // restoring the snapshot also reverts promotion and the move count
        self.board.place_piece(token.moved, token.source)?;

        if let Some((rook_from, rook_to)) = token.rook_shift {
            let mut rook = self.board.remove_piece(rook_to)?.ok_or_else(|| {
                ChessError::InconsistentState(format!("no castled rook on {}", rook_to))
            })?;
            rook.decrease_move_count();
            self.board.place_piece(rook, rook_from)?;
        }

        if let Some(capture) = token.captured {
            match self.captured_pieces.pop() {
                Some(piece) if piece == capture.piece => {}
                other => {
                    return Err(ChessError::InconsistentState(format!(
                        "captured roster ends with {:?}, expected {:?}",
                        other, capture.piece
                    )))
                }
            }
            self.board.place_piece(capture.piece, capture.position)?;
        }

        self.en_passant_vulnerable = token.en_passant_vulnerable;
        Ok(())
    }

    fn promote_on_last_rank(&mut self, target: Position) -> Result<(), ChessError> {
        let last_row = self.board.rows() as i32 - 1;
        let is_pawn = self
            .board
            .piece(target)
            .is_some_and(|piece| piece.piece_type == PieceType::Pawn);

        if is_pawn && (target.row == 0 || target.row == last_row) {
            self.promoted = Some(target);
            self.swap_promoted(target, PieceType::Queen)?;
        }
        Ok(())
    }

    fn swap_promoted(
        &mut self,
        position: Position,
        piece_type: PieceType,
    ) -> Result<Piece, ChessError> {
        let pending = self
            .board
            .remove_piece(position)?
            .ok_or(ChessError::NoPendingPromotion)?;
        let replacement = pending.with_type(piece_type);
        self.board.place_piece(replacement, position)?;
        debug!("Promoted {} pawn on {} to {:?}", pending.color, position, piece_type);
        Ok(replacement)
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = self.current_player.opposite();
    }

    fn previous_turn(&mut self) {
        self.turn = self.turn.saturating_sub(1).max(1);
        self.current_player = self.current_player.opposite();
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}
