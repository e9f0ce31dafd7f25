//! The rules oracle boundary.
//!
//! This module provides the [`RulesOracle`] trait. The session never decides
//! anything about chess itself: which pieces may move where, whether a move is
//! legal, and whether the game has ended are all questions it delegates to the
//! active oracle. Swapping in a different rules library (or a hand-written
//! move generator) only means implementing this trait.

mod standard;

pub use standard::{ShakmatyPosition, ShakmatyRules};

use chessboard_core::{Color, Piece, PieceKind, Square, SquareSet};
use thiserror::Error;

/// Errors reported by a rules oracle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The move is not legal in the current position.
    #[error("illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    NoPiece(Square),
    /// A FEN string could not be turned into a playable position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

/// A move as the UI asks for it: two squares and an optional promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    pub const fn new(from: Square, to: Square) -> Self {
        MoveRequest {
            from,
            to,
            promotion: None,
        }
    }

    pub const fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }
}

/// The outcome of a move the oracle accepted.
#[derive(Debug, Clone)]
pub struct AppliedMove<P> {
    /// The position after the move. The position it was played from is untouched.
    pub position: P,
    /// The piece removed from the board, if the move was a capture.
    pub captured: Option<Piece>,
    /// The move in Standard Algebraic Notation, with a `+` or `#` suffix.
    pub san: String,
}

/// An 8x8 grid of optional pieces, row 0 = rank 8, column 0 = file a.
pub type Board = [[Option<Piece>; 8]; 8];

/// Capability boundary to a chess rules implementation.
///
/// Positions are values: [`RulesOracle::try_move`] returns a new position
/// rather than mutating the one it was given, so earlier snapshots stay valid.
pub trait RulesOracle {
    /// A complete game state, sufficient to judge future legality and
    /// terminal status.
    type Position: Clone;

    /// Returns the standard starting position.
    fn initial_position(&self) -> Self::Position;

    /// Builds a position from a FEN string.
    fn position_from_fen(&self, fen: &str) -> Result<Self::Position, RulesError>;

    /// Returns the side to move.
    fn side_to_move(&self, position: &Self::Position) -> Color;

    /// Returns the piece on a square, if any.
    fn piece_at(&self, position: &Self::Position, square: Square) -> Option<Piece>;

    /// Returns every square the piece on `from` may legally move to.
    ///
    /// Empty for an empty square, an opponent piece, or an immobilised piece.
    fn legal_targets(&self, position: &Self::Position, from: Square) -> SquareSet;

    /// Plays a move, returning the resulting position.
    fn try_move(
        &self,
        position: &Self::Position,
        request: MoveRequest,
    ) -> Result<AppliedMove<Self::Position>, RulesError>;

    /// Returns true if the side to move is checkmated.
    fn is_checkmate(&self, position: &Self::Position) -> bool;

    /// Returns true if the side to move has no legal move and is not in check.
    fn is_stalemate(&self, position: &Self::Position) -> bool;

    /// Returns true for any drawn position: stalemate, insufficient material,
    /// the 50-move rule or threefold repetition.
    fn is_draw(&self, position: &Self::Position) -> bool;

    /// Returns true if the side to move is in check.
    fn is_check(&self, position: &Self::Position) -> bool;

    /// Returns the number of the move about to be played, starting at 1 and
    /// incremented after each Black move.
    fn fullmove_number(&self, _position: &Self::Position) -> u32 {
        1
    }

    /// Returns true if the game is over.
    fn is_game_over(&self, position: &Self::Position) -> bool {
        self.is_checkmate(position) || self.is_draw(position)
    }

    /// Returns the display grid for a position.
    fn board(&self, position: &Self::Position) -> Board {
        let mut board: Board = [[None; 8]; 8];
        for square in Square::display_order() {
            let (row, col) = square.coords();
            board[row][col] = self.piece_at(position, square);
        }
        board
    }
}
