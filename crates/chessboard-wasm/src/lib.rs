//! WebAssembly bindings for the interactive chessboard.
//!
//! The host page owns the DOM and nothing else: it forwards square clicks,
//! the name form and the reset button to a [`ChessboardApp`], then redraws
//! from [`ChessboardApp::view`] or [`ChessboardApp::render_html`].
//!
//! # Usage
//!
//! ```javascript
//! import init, { ChessboardApp } from 'chessboard-wasm';
//!
//! await init();
//!
//! const app = ChessboardApp.withConfig('require_player_names = true');
//! board.innerHTML = app.renderHtml();
//!
//! board.addEventListener('click', (event) => {
//!   const cell = event.target.closest('[data-row]');
//!   if (cell && app.clickSquare(+cell.dataset.row, +cell.dataset.col)) {
//!     board.innerHTML = app.renderHtml();
//!   }
//! });
//! ```

pub mod render;

pub use render::{render_html, BoardTemplate, CellView, MoveLine, RenderError, TrayLine};

use chessboard_session::{render as project, BoardConfig, Session, SessionPhase, ShakmatyRules};
use wasm_bindgen::prelude::*;

/// A chessboard session that can be driven from JavaScript.
#[wasm_bindgen]
pub struct ChessboardApp {
    session: Session,
}

#[wasm_bindgen]
impl ChessboardApp {
    /// Creates a board with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        ChessboardApp {
            session: Session::new(),
        }
    }

    /// Creates a board from a TOML configuration string.
    ///
    /// Returns an error if the configuration does not parse.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(toml: &str) -> Result<ChessboardApp, JsError> {
        let config = BoardConfig::from_toml_str(toml)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ChessboardApp {
            session: Session::with_config(config),
        })
    }

    /// Creates a board set up from a FEN string.
    ///
    /// Returns an error if the FEN is invalid.
    #[wasm_bindgen(js_name = fromFen)]
    pub fn from_fen(fen: &str) -> Result<ChessboardApp, JsError> {
        let session = Session::from_fen(ShakmatyRules, BoardConfig::default(), fen)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ChessboardApp { session })
    }

    /// Handles a click on display cell `(row, col)`, row 0 being rank 8.
    ///
    /// Returns true if the board needs redrawing.
    #[wasm_bindgen(js_name = clickSquare)]
    pub fn click_square(&mut self, row: usize, col: usize) -> bool {
        self.session.click(row, col).changed()
    }

    /// Submits the pre-game name form.
    ///
    /// Returns false, leaving the form open, if either name is blank or a
    /// game is already underway.
    #[wasm_bindgen(js_name = startGame)]
    pub fn start_game(&mut self, white: &str, black: &str) -> bool {
        self.session.start(white, black).is_ok()
    }

    /// Resets the game to the starting position.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    #[wasm_bindgen(js_name = statusText)]
    pub fn status_text(&self) -> String {
        self.session.status_text()
    }

    /// Returns the side to move ("white" or "black").
    #[wasm_bindgen(js_name = sideToMove)]
    pub fn side_to_move(&self) -> String {
        self.session.side_to_move().as_str().to_string()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Returns true while the board waits for player names.
    #[wasm_bindgen(js_name = awaitingPlayers)]
    pub fn awaiting_players(&self) -> bool {
        self.session.phase() == SessionPhase::AwaitingPlayers
    }

    /// Returns the full board view as a plain JavaScript object.
    pub fn view(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&project(&self.session))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the board as HTML markup.
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self) -> Result<String, JsError> {
        render_html(&project(&self.session))
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Default for ChessboardApp {
    fn default() -> Self {
        Self::new()
    }
}
