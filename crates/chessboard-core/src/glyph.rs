//! Unicode glyphs for pieces.

use crate::{Color, Piece, PieceKind};

/// Returns the Unicode chess symbol for a piece, or `""` for an empty square.
///
/// The black pawn carries a U+FE0E variation selector so browsers render it
/// as text rather than as an emoji.
pub const fn glyph_for(piece: Option<Piece>) -> &'static str {
    let Some(piece) = piece else {
        return "";
    };
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => "\u{2654}",
        (Color::White, PieceKind::Queen) => "\u{2655}",
        (Color::White, PieceKind::Rook) => "\u{2656}",
        (Color::White, PieceKind::Bishop) => "\u{2657}",
        (Color::White, PieceKind::Knight) => "\u{2658}",
        (Color::White, PieceKind::Pawn) => "\u{2659}",
        (Color::Black, PieceKind::King) => "\u{265A}",
        (Color::Black, PieceKind::Queen) => "\u{265B}",
        (Color::Black, PieceKind::Rook) => "\u{265C}",
        (Color::Black, PieceKind::Bishop) => "\u{265D}",
        (Color::Black, PieceKind::Knight) => "\u{265E}",
        (Color::Black, PieceKind::Pawn) => "\u{265F}\u{FE0E}",
    }
}

/// Glyph lookup by FEN piece letter (`K`, `q`, ...).
///
/// Unknown letters map to `""`; a blank square is preferable to a broken board.
pub const fn glyph_for_fen_char(c: char) -> &'static str {
    glyph_for(Piece::from_fen_char(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_square_has_no_glyph() {
        assert_eq!(glyph_for(None), "");
    }

    #[test]
    fn white_and_black_pieces() {
        assert_eq!(
            glyph_for(Some(Piece::new(PieceKind::King, Color::White))),
            "\u{2654}"
        );
        assert_eq!(
            glyph_for(Some(Piece::new(PieceKind::Knight, Color::Black))),
            "\u{265E}"
        );
        assert_eq!(
            glyph_for(Some(Piece::new(PieceKind::Pawn, Color::Black))),
            "\u{265F}\u{FE0E}"
        );
    }

    #[test]
    fn all_twelve_glyphs_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                let glyph = glyph_for(Some(Piece::new(kind, color)));
                assert!(!glyph.is_empty());
                assert!(seen.insert(glyph), "duplicate glyph for {color} {kind}");
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn fen_letters() {
        assert_eq!(glyph_for_fen_char('Q'), "\u{2655}");
        assert_eq!(glyph_for_fen_char('r'), "\u{265C}");
        assert_eq!(glyph_for_fen_char('x'), "");
        assert_eq!(glyph_for_fen_char('8'), "");
    }

    proptest! {
        #[test]
        fn any_char_is_total(c in any::<char>()) {
            let glyph = glyph_for_fen_char(c);
            prop_assert_eq!(glyph.is_empty(), Piece::from_fen_char(c).is_none());
        }
    }
}
