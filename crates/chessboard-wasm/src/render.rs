//! HTML rendering of a board view.
//!
//! The page swaps the rendered markup in after every input. Each square is a
//! `<button>` carrying `data-row` / `data-col`, which the page hands back to
//! [`ChessboardApp::click_square`](crate::ChessboardApp::click_square).

use askama::Template;
use chessboard_core::Color;
use chessboard_session::{BoardView, SessionPhase, SquareView};
use thiserror::Error;

/// Errors from HTML rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// One board square, reduced to what the template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Row index (0-7, where 0 is the 8th rank).
    pub row: usize,
    /// Column index (0-7, where 0 is the a-file).
    pub col: usize,
    pub square: String,
    pub glyph: &'static str,
    /// Space-separated CSS classes.
    pub class: String,
    /// Empty legal target: draw a dot.
    pub dot: bool,
    /// Occupied legal target: draw a capture overlay.
    pub overlay: bool,
}

impl CellView {
    fn from_square(square: &SquareView) -> Self {
        let mut classes = vec!["square", if square.dark { "dark" } else { "light" }];
        match square.piece.map(|p| p.color) {
            Some(Color::White) => classes.push("white-piece"),
            Some(Color::Black) => classes.push("black-piece"),
            None => {}
        }
        if square.selected {
            classes.push("selected");
        }
        if square.last_move {
            classes.push("last-move");
        }
        if square.legal_target {
            classes.push("legal-target");
        }
        CellView {
            row: square.row,
            col: square.col,
            square: square.square.to_string(),
            glyph: square.glyph,
            class: classes.join(" "),
            dot: square.legal_target && !square.capture_target,
            overlay: square.capture_target,
        }
    }
}

/// A capture tray line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayLine {
    pub label: String,
    /// Glyphs in capture order, or the placeholder text.
    pub content: String,
    pub empty: bool,
}

/// A numbered move-list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLine {
    pub number: usize,
    pub white: String,
    pub black: String,
}

/// The full board markup.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub title: String,
    pub status: String,
    pub awaiting_players: bool,
    pub cells: Vec<CellView>,
    pub trays: Vec<TrayLine>,
    pub moves: Vec<MoveLine>,
}

impl BoardTemplate {
    /// Builds the template from a view snapshot.
    #[must_use]
    pub fn from_view(view: &BoardView) -> Self {
        let trays = view
            .trays
            .iter()
            .map(|tray| {
                let empty = tray.glyphs.is_empty();
                let content = if empty {
                    tray.placeholder.clone().unwrap_or_default()
                } else {
                    tray.glyphs.concat()
                };
                TrayLine {
                    label: tray.label.clone(),
                    content,
                    empty,
                }
            })
            .collect();

        let moves = view
            .moves
            .iter()
            .map(|row| MoveLine {
                number: row.number,
                white: row.white.clone().unwrap_or_else(|| "...".to_string()),
                black: row.black.clone().unwrap_or_default(),
            })
            .collect();

        BoardTemplate {
            title: view.title.clone(),
            status: view.status.clone(),
            awaiting_players: view.phase == SessionPhase::AwaitingPlayers,
            cells: view.squares.iter().map(CellView::from_square).collect(),
            trays,
            moves,
        }
    }
}

/// Renders a view to HTML.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the template fails to render.
pub fn render_html(view: &BoardView) -> Result<String, RenderError> {
    Ok(BoardTemplate::from_view(view).render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessboard_core::Square;
    use chessboard_session::{render, BoardConfig, Session};

    fn click(session: &mut Session, s: &str) {
        session.click_square(Square::from_algebraic(s).unwrap());
    }

    #[test]
    fn test_opening_cells() {
        let template = BoardTemplate::from_view(&render(&Session::new()));
        assert_eq!(template.cells.len(), 64);
        assert_eq!(template.cells[0].square, "a8");
        assert_eq!(template.cells[0].glyph, "\u{265C}");
        assert_eq!(template.cells[0].class, "square light black-piece");
        assert_eq!(template.cells[63].square, "h1");
        assert!(template.trays.iter().all(|t| t.empty));
        assert!(template.moves.is_empty());
    }

    #[test]
    fn test_markers_for_targets() {
        let mut session = Session::new();
        for s in ["e2", "e4", "d7", "d5", "e4"] {
            click(&mut session, s);
        }
        let template = BoardTemplate::from_view(&render(&session));
        let cell = |name: &str| template.cells.iter().find(|c| c.square == name).unwrap();

        assert!(cell("e4").class.contains("selected"));
        assert!(cell("d5").overlay);
        assert!(!cell("d5").dot);
        assert!(cell("e5").dot);
        assert!(cell("d5").class.contains("legal-target"));
        assert!(cell("d7").class.contains("last-move"));
    }

    #[test]
    fn test_renders_board_markup() {
        let html = render_html(&render(&Session::new())).unwrap();
        assert!(html.contains("class=\"chessboard-grid\""));
        assert!(html.contains("data-row=\"6\" data-col=\"4\" data-square=\"e2\""));
        assert!(html.contains("White to move."));
        assert!(html.contains("No captures yet"));
        assert!(html.contains("data-action=\"reset\""));
        assert!(!html.contains("data-action=\"start\""));
        assert_eq!(html.matches("class=\"square ").count(), 64);
    }

    #[test]
    fn test_renders_player_form_while_waiting() {
        let session = Session::with_config(BoardConfig {
            require_player_names: true,
            ..BoardConfig::default()
        });
        let html = render_html(&render(&session)).unwrap();
        assert!(html.contains("data-action=\"start\""));
    }

    #[test]
    fn test_renders_trays_and_moves() {
        let mut session = Session::new();
        for s in ["e2", "e4", "d7", "d5", "e4", "d5"] {
            click(&mut session, s);
        }
        let template = BoardTemplate::from_view(&render(&session));
        assert_eq!(template.trays[0].content, "\u{265F}\u{FE0E}");
        assert!(!template.trays[0].empty);
        assert_eq!(
            template.moves[1],
            MoveLine {
                number: 2,
                white: "exd5".into(),
                black: String::new()
            }
        );

        let html = template.render().unwrap();
        assert!(html.contains("<ol class=\"chessboard-moves\">"));
        assert!(html.contains("exd5"));
    }
}
