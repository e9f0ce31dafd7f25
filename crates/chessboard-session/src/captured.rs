//! Captured-piece tallies.

use chessboard_core::{Color, Piece};
use serde::Serialize;

/// Pieces taken by each side, in the order they were taken.
///
/// Append-only during a game; only a reset or a new game clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapturedTally {
    by_white: Vec<Piece>,
    by_black: Vec<Piece>,
}

impl CapturedTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `capturer` took `piece`.
    pub fn record(&mut self, capturer: Color, piece: Piece) {
        match capturer {
            Color::White => self.by_white.push(piece),
            Color::Black => self.by_black.push(piece),
        }
    }

    /// Pieces captured by `capturer`, oldest first.
    pub fn captured_by(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::White => &self.by_white,
            Color::Black => &self.by_black,
        }
    }

    /// Total number of captures on both sides.
    pub fn len(&self) -> usize {
        self.by_white.len() + self.by_black.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.by_white.clear();
        self.by_black.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessboard_core::PieceKind;

    #[test]
    fn records_per_capturer_in_order() {
        let mut tally = CapturedTally::new();
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let black_knight = Piece::new(PieceKind::Knight, Color::Black);
        let white_bishop = Piece::new(PieceKind::Bishop, Color::White);

        tally.record(Color::White, black_pawn);
        tally.record(Color::Black, white_bishop);
        tally.record(Color::White, black_knight);

        assert_eq!(tally.captured_by(Color::White), &[black_pawn, black_knight]);
        assert_eq!(tally.captured_by(Color::Black), &[white_bishop]);
        assert_eq!(tally.len(), 3);
    }

    #[test]
    fn clear_empties_both_sides() {
        let mut tally = CapturedTally::new();
        tally.record(Color::White, Piece::new(PieceKind::Queen, Color::Black));
        tally.clear();
        assert!(tally.is_empty());
        assert!(tally.captured_by(Color::White).is_empty());
    }
}
