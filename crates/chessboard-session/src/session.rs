//! Game session controller.
//!
//! The [`Session`] owns everything a board view is drawn from:
//! - the authoritative position (replaced, never edited, on every move)
//! - the current selection and its legal targets
//! - the last move, the move list and the captured-piece tallies
//! - the players' names when the board collects them
//!
//! Every input is a synchronous call that runs to completion; there is no
//! background work and nothing to cancel.

use crate::captured::CapturedTally;
use crate::config::BoardConfig;
use crate::interaction::{Intent, Selection};
use crate::players::{PlayerError, Players};
use crate::rules::{Board, MoveRequest, RulesError, RulesOracle, ShakmatyRules};
use crate::status::GameStatus;
use chessboard_core::{Color, Piece, PieceKind, Square};
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Waiting for the pre-game name form; the board ignores clicks.
    AwaitingPlayers,
    Playing,
}

/// The two squares of the most recent move, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
}

impl LastMove {
    /// Returns true if `square` is either end of the move.
    pub fn touches(&self, square: Square) -> bool {
        self.from == square || self.to == square
    }
}

/// A move recorded in the session's move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    pub mover: Color,
    pub from: Square,
    pub to: Square,
    pub san: String,
    pub captured: Option<Piece>,
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// A piece was selected, or the selection switched to another piece.
    Selected(Square),
    /// The selection was dropped.
    Deselected,
    /// The selected piece moved.
    Moved(PlayedMove),
    /// The oracle refused the move; nothing changed.
    Rejected,
}

impl ClickOutcome {
    /// Returns true if the click changed what should be on screen.
    pub fn changed(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored | ClickOutcome::Rejected)
    }
}

/// An interactive game against a rules oracle.
#[derive(Debug, Clone)]
pub struct Session<R: RulesOracle = ShakmatyRules> {
    rules: R,
    config: BoardConfig,
    phase: SessionPhase,
    players: Option<Players>,
    start: R::Position,
    position: R::Position,
    selection: Selection,
    last_move: Option<LastMove>,
    captured: CapturedTally,
    moves: Vec<PlayedMove>,
}

impl Default for Session<ShakmatyRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl Session<ShakmatyRules> {
    /// Creates a standard game with the default configuration.
    pub fn new() -> Self {
        Self::with_rules(ShakmatyRules, BoardConfig::default())
    }

    /// Creates a standard game with the given configuration.
    pub fn with_config(config: BoardConfig) -> Self {
        Self::with_rules(ShakmatyRules, config)
    }
}

impl<R: RulesOracle> Session<R> {
    /// Creates a session from the oracle's starting position.
    pub fn with_rules(rules: R, config: BoardConfig) -> Self {
        let position = rules.initial_position();
        Self::from_position(rules, config, position)
    }

    /// Creates a session from a FEN position.
    pub fn from_fen(rules: R, config: BoardConfig, fen: &str) -> Result<Self, RulesError> {
        let position = rules.position_from_fen(fen)?;
        Ok(Self::from_position(rules, config, position))
    }

    fn from_position(rules: R, config: BoardConfig, position: R::Position) -> Self {
        let phase = if config.require_player_names {
            SessionPhase::AwaitingPlayers
        } else {
            SessionPhase::Playing
        };
        Session {
            rules,
            config,
            phase,
            players: None,
            start: position.clone(),
            position,
            selection: Selection::Idle,
            last_move: None,
            captured: CapturedTally::new(),
            moves: Vec::new(),
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn players(&self) -> Option<&Players> {
        self.players.as_ref()
    }

    /// The current authoritative position.
    pub fn position(&self) -> &R::Position {
        &self.position
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn captured(&self) -> &CapturedTally {
        &self.captured
    }

    /// Moves played since the session started or was last reset.
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// Number of the first move in [`Session::moves`], taken from the
    /// starting position's move counter.
    pub fn first_move_number(&self) -> u32 {
        self.rules.fullmove_number(&self.start)
    }

    pub fn side_to_move(&self) -> Color {
        self.rules.side_to_move(&self.position)
    }

    pub fn board(&self) -> Board {
        self.rules.board(&self.position)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.rules, &self.position)
    }

    pub fn status_text(&self) -> String {
        self.status().text(self.players.as_ref())
    }

    pub fn is_game_over(&self) -> bool {
        self.rules.is_game_over(&self.position)
    }

    /// Handles a click on the display cell `(row, col)`.
    ///
    /// Cells outside the 8x8 grid are ignored.
    pub fn click(&mut self, row: usize, col: usize) -> ClickOutcome {
        match Square::try_from_coords(row, col) {
            Some(square) => self.click_square(square),
            None => {
                trace!(row, col, "click outside the board");
                ClickOutcome::Ignored
            }
        }
    }

    /// Handles a click on `square`.
    pub fn click_square(&mut self, square: Square) -> ClickOutcome {
        if self.phase != SessionPhase::Playing {
            trace!(%square, "click before players are set");
            return ClickOutcome::Ignored;
        }
        if self.is_game_over() {
            trace!(%square, "click after game over");
            return ClickOutcome::Ignored;
        }

        match self.selection.intent(&self.rules, &self.position, square) {
            Intent::Ignore => {
                trace!(%square, "click ignored");
                ClickOutcome::Ignored
            }
            Intent::Select(square) => {
                self.selection = Selection::select(&self.rules, &self.position, square);
                debug!(%square, targets = self.selection.targets().len(), "selected");
                ClickOutcome::Selected(square)
            }
            Intent::Deselect => {
                self.selection = Selection::Idle;
                debug!(%square, "deselected");
                ClickOutcome::Deselected
            }
            Intent::Move { from, to } => match self.apply_move(from, to) {
                Ok(played) => ClickOutcome::Moved(played),
                Err(err) => {
                    // Targets come from the same position the move is played
                    // on, so this only fires if the oracle disagrees with itself.
                    warn!(%from, %to, error = %err, "oracle rejected a highlighted move");
                    ClickOutcome::Rejected
                }
            },
        }
    }

    /// Plays `from` -> `to`, promoting pawns that reach the last rank to queens.
    ///
    /// On success the position is replaced, the move becomes the last move,
    /// any capture is credited to the mover and the selection is cleared.
    /// On error nothing changes.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<PlayedMove, RulesError> {
        let mover = self
            .rules
            .piece_at(&self.position, from)
            .ok_or(RulesError::NoPiece(from))?;

        let mut request = MoveRequest::new(from, to);
        if mover.kind == PieceKind::Pawn && to.rank().index() == mover.color.promotion_rank() {
            request = request.with_promotion(PieceKind::Queen);
        }

        let applied = self.rules.try_move(&self.position, request)?;

        self.position = applied.position;
        self.selection = Selection::Idle;
        self.last_move = Some(LastMove { from, to });
        if let Some(piece) = applied.captured {
            self.captured.record(mover.color, piece);
        }
        let played = PlayedMove {
            mover: mover.color,
            from,
            to,
            san: applied.san,
            captured: applied.captured,
        };
        self.moves.push(played.clone());
        debug!(%from, %to, san = %played.san, "move played");
        Ok(played)
    }

    /// Starts the game over from the session's starting position.
    ///
    /// That is the standard opening unless the session was set up from FEN.
    /// Clears the selection, last move, move list and both capture trays.
    /// Player names stay: they are fixed for the whole session.
    pub fn reset(&mut self) {
        self.position = self.start.clone();
        self.selection = Selection::Idle;
        self.last_move = None;
        self.captured.clear();
        self.moves.clear();
        debug!("session reset");
    }

    /// Submits the pre-game name form and starts play.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::Empty`] for a blank name and
    /// [`PlayerError::AlreadyPlaying`] once a game is underway. In both cases
    /// the session is left as it was.
    pub fn start(&mut self, white: &str, black: &str) -> Result<(), PlayerError> {
        if self.phase == SessionPhase::Playing {
            return Err(PlayerError::AlreadyPlaying);
        }
        let players = Players::new(white, black)?;
        debug!(
            white = %players.name(Color::White),
            black = %players.name(Color::Black),
            "players set"
        );
        self.players = Some(players);
        self.phase = SessionPhase::Playing;
        self.reset();
        Ok(())
    }
}
