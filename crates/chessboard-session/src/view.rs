//! Pure projection from a session to what the board shows.
//!
//! [`render`] is called after every input. It reads the session and produces a
//! fresh [`BoardView`]; it never changes state, so the view is always one
//! consistent snapshot.

use crate::rules::RulesOracle;
use crate::session::{PlayedMove, Session, SessionPhase};
use crate::status::GameStatus;
use chessboard_core::{glyph_for, Color, Piece, Square};
use serde::Serialize;

/// One cell of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SquareView {
    pub square: Square,
    pub row: usize,
    pub col: usize,
    pub piece: Option<Piece>,
    /// Unicode symbol of the piece, empty for an empty square.
    pub glyph: &'static str,
    pub dark: bool,
    /// The current move source.
    pub selected: bool,
    /// A legal destination of the selected piece.
    pub legal_target: bool,
    /// A legal destination that is occupied, i.e. a capture is available.
    pub capture_target: bool,
    /// Either end of the most recent move.
    pub last_move: bool,
}

/// Pieces captured by one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrayView {
    pub capturer: Color,
    pub label: String,
    /// Glyphs in capture order.
    pub glyphs: Vec<&'static str>,
    /// Shown instead of the glyphs while the tray is empty.
    pub placeholder: Option<String>,
}

/// A numbered row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    pub number: usize,
    pub white: Option<String>,
    pub black: Option<String>,
}

/// Everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub title: String,
    pub phase: SessionPhase,
    pub status: String,
    pub status_kind: GameStatus,
    pub side_to_move: Color,
    pub game_over: bool,
    /// 64 cells in display order, a8 first.
    pub squares: Vec<SquareView>,
    /// White's tray then Black's; empty when captures are hidden.
    pub trays: Vec<TrayView>,
    pub moves: Vec<MoveRow>,
}

impl BoardView {
    /// The cell at display coordinate `(row, col)`.
    pub fn square_at(&self, row: usize, col: usize) -> Option<&SquareView> {
        if row < 8 && col < 8 {
            self.squares.get(row * 8 + col)
        } else {
            None
        }
    }
}

/// Projects the session into a view.
pub fn render<R: RulesOracle>(session: &Session<R>) -> BoardView {
    let rules = session.rules();
    let position = session.position();
    let config = session.config();
    let selection = session.selection();
    let targets = selection.targets();
    let last_move = session.last_move().filter(|_| config.highlight_last_move);

    let squares = Square::display_order()
        .map(|square| {
            let (row, col) = square.coords();
            let piece = rules.piece_at(position, square);
            let legal_target = targets.contains(square);
            SquareView {
                square,
                row,
                col,
                piece,
                glyph: glyph_for(piece),
                dark: square.is_dark(),
                selected: selection.square() == Some(square),
                legal_target,
                capture_target: legal_target && piece.is_some(),
                last_move: last_move.is_some_and(|m| m.touches(square)),
            }
        })
        .collect();

    let trays = if config.show_captures {
        Color::BOTH
            .into_iter()
            .map(|capturer| tray(session, capturer))
            .collect()
    } else {
        Vec::new()
    };

    let status = session.status();
    BoardView {
        title: config.title.clone(),
        phase: session.phase(),
        status: status.text(session.players()),
        status_kind: status,
        side_to_move: session.side_to_move(),
        game_over: status.is_game_over(),
        squares,
        trays,
        moves: move_rows(session.first_move_number(), session.moves()),
    }
}

fn tray<R: RulesOracle>(session: &Session<R>, capturer: Color) -> TrayView {
    let glyphs: Vec<&'static str> = session
        .captured()
        .captured_by(capturer)
        .iter()
        .map(|piece| glyph_for(Some(*piece)))
        .collect();
    let label = match session.players() {
        Some(players) => players.label(capturer),
        None => capturer.to_string(),
    };
    let placeholder = glyphs
        .is_empty()
        .then(|| session.config().empty_tray_placeholder.clone());
    TrayView {
        capturer,
        label,
        glyphs,
        placeholder,
    }
}

/// Pairs moves into numbered rows, the first numbered `first`.
fn move_rows(first: u32, moves: &[PlayedMove]) -> Vec<MoveRow> {
    let first = first as usize;
    let mut rows: Vec<MoveRow> = Vec::new();
    for played in moves {
        let san = Some(played.san.clone());
        match played.mover {
            Color::White => rows.push(MoveRow {
                number: first + rows.len(),
                white: san,
                black: None,
            }),
            Color::Black => match rows.last_mut() {
                Some(row) if row.black.is_none() => row.black = san,
                _ => rows.push(MoveRow {
                    number: first + rows.len(),
                    white: None,
                    black: san,
                }),
            },
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::rules::ShakmatyRules;
    use chessboard_core::PieceKind;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn cell<'a>(view: &'a BoardView, s: &str) -> &'a SquareView {
        let (row, col) = sq(s).coords();
        view.square_at(row, col).unwrap()
    }

    #[test]
    fn opening_view() {
        let view = render(&Session::new());
        assert_eq!(view.squares.len(), 64);
        assert_eq!(view.squares[0].square, Square::A8);
        assert_eq!(view.status, "White to move.");
        assert!(!view.game_over);
        assert_eq!(cell(&view, "e1").glyph, "\u{2654}");
        assert_eq!(cell(&view, "e4").glyph, "");
        let marked = |s: &SquareView| s.selected || s.legal_target || s.last_move;
        assert!(!view.squares.iter().any(marked));
        assert_eq!(view.trays.len(), 2);
        assert_eq!(
            view.trays[0].placeholder.as_deref(),
            Some("No captures yet")
        );
        assert!(view.moves.is_empty());
    }

    #[test]
    fn highlights_selection_and_targets() {
        let mut session = Session::new();
        session.click_square(sq("e2"));
        let view = render(&session);
        assert!(cell(&view, "e2").selected);
        assert!(cell(&view, "e3").legal_target);
        assert!(cell(&view, "e4").legal_target);
        assert!(!cell(&view, "e4").capture_target);
        assert!(!cell(&view, "e5").legal_target);
    }

    #[test]
    fn occupied_target_is_a_capture_target() {
        let mut session = Session::new();
        for s in ["e2", "e4", "d7", "d5", "e4"] {
            session.click_square(sq(s));
        }
        let view = render(&session);
        assert!(cell(&view, "d5").legal_target);
        assert!(cell(&view, "d5").capture_target);
        assert!(!cell(&view, "e5").capture_target);
    }

    #[test]
    fn last_move_and_trays() {
        let mut session = Session::new();
        for s in ["e2", "e4", "d7", "d5", "e4", "d5"] {
            session.click_square(sq(s));
        }
        let view = render(&session);
        assert!(cell(&view, "e4").last_move);
        assert!(cell(&view, "d5").last_move);
        assert!(!cell(&view, "e2").last_move);
        assert_eq!(view.trays[0].capturer, Color::White);
        assert_eq!(view.trays[0].glyphs, vec!["\u{265F}\u{FE0E}"]);
        assert_eq!(view.trays[0].placeholder, None);
        assert!(view.trays[1].glyphs.is_empty());
        assert_eq!(
            view.moves,
            vec![
                MoveRow {
                    number: 1,
                    white: Some("e4".into()),
                    black: Some("d5".into())
                },
                MoveRow {
                    number: 2,
                    white: Some("exd5".into()),
                    black: None
                },
            ]
        );
    }

    #[test]
    fn config_toggles() {
        let config = BoardConfig {
            title: "Cindy's Chess".into(),
            show_captures: false,
            highlight_last_move: false,
            ..BoardConfig::default()
        };
        let mut session = Session::with_config(config);
        session.click_square(sq("e2"));
        session.click_square(sq("e4"));
        let view = render(&session);
        assert_eq!(view.title, "Cindy's Chess");
        assert!(view.trays.is_empty());
        assert!(view.squares.iter().all(|s| !s.last_move));
    }

    #[test]
    fn black_to_move_first_starts_an_open_row() {
        let mut session = Session::from_fen(
            ShakmatyRules,
            BoardConfig::default(),
            "4k3/4p3/8/8/8/8/8/4K3 b - - 0 1",
        )
        .unwrap();
        session.click_square(sq("e7"));
        session.click_square(sq("e5"));
        let view = render(&session);
        assert_eq!(
            view.moves,
            vec![MoveRow {
                number: 1,
                white: None,
                black: Some("e5".into())
            }]
        );
        assert_eq!(
            cell(&view, "e5").piece,
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
    }

    #[test]
    fn move_numbers_follow_the_starting_position() {
        let mut session = Session::from_fen(
            ShakmatyRules,
            BoardConfig::default(),
            "4k3/4p3/8/8/8/8/4P3/4K3 b - - 0 23",
        )
        .unwrap();
        for s in ["e7", "e5", "e2", "e4"] {
            session.click_square(sq(s));
        }
        let view = render(&session);
        assert_eq!(
            view.moves,
            vec![
                MoveRow {
                    number: 23,
                    white: None,
                    black: Some("e5".into())
                },
                MoveRow {
                    number: 24,
                    white: Some("e4".into()),
                    black: None
                },
            ]
        );
    }

    #[test]
    fn named_trays() {
        let mut session = Session::with_config(BoardConfig {
            require_player_names: true,
            ..BoardConfig::default()
        });
        session.start("cindy", "gavin").unwrap();
        let view = render(&session);
        assert_eq!(view.trays[0].label, "Cindy (White)");
        assert_eq!(view.trays[1].label, "Gavin (Black)");
        assert_eq!(view.phase, SessionPhase::Playing);
    }

    #[test]
    fn serializes_for_the_browser() {
        let view = render(&Session::new());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["squares"][0]["square"], "a8");
        assert_eq!(json["squares"][0]["piece"]["kind"], "rook");
        assert_eq!(json["squares"][0]["piece"]["color"], "black");
        assert_eq!(json["status_kind"]["kind"], "to_move");
        assert_eq!(json["side_to_move"], "white");
        assert_eq!(json["phase"], "playing");
    }
}
