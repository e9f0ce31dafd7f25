//! Interaction layer of the interactive chessboard.
//!
//! This crate provides:
//! - [`RulesOracle`] - the boundary to a chess rules implementation, with
//!   [`ShakmatyRules`] backed by the `shakmaty` crate
//! - [`Selection`] - the click-to-select, click-to-move state machine
//! - [`Session`] - the game session controller: position, last move, move list,
//!   captured pieces and player names
//! - [`render`] - the pure projection from a session to a [`BoardView`]
//! - [`BoardConfig`] - presentation and flow options
//!
//! # Example
//!
//! ```
//! use chessboard_session::{render, Session};
//!
//! let mut session = Session::new();
//! session.click(6, 4); // e2
//! session.click(4, 4); // e4
//!
//! let view = render(&session);
//! assert_eq!(view.status, "Black to move.");
//! assert!(view.square_at(4, 4).unwrap().last_move);
//! ```

mod captured;
mod config;
mod interaction;
mod players;
pub mod rules;
mod session;
mod status;
pub mod view;

pub use captured::CapturedTally;
pub use config::{BoardConfig, ConfigError};
pub use interaction::{Intent, Selection};
pub use players::{PlayerError, PlayerName, Players};
pub use rules::{AppliedMove, Board, MoveRequest, RulesError, RulesOracle, ShakmatyRules};
pub use session::{ClickOutcome, LastMove, PlayedMove, Session, SessionPhase};
pub use status::GameStatus;
pub use view::{render, BoardView, MoveRow, SquareView, TrayView};
