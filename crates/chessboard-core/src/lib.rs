//! Board value types for the interactive chessboard.
//!
//! This crate holds everything that is independent of chess rules:
//! - [`Color`], [`PieceKind`] and [`Piece`] for what stands on a square
//! - [`Square`], [`File`] and [`Rank`] for board geometry, including the
//!   mapping between display coordinates (row, column) and algebraic names
//! - [`SquareSet`] for sets of squares such as legal move targets
//! - [`glyph_for`] for turning a piece into its Unicode symbol
//!
//! Rules (legal moves, check, mate) live behind the oracle in
//! `chessboard-session`.

mod color;
mod glyph;
mod piece;
mod square;
mod square_set;

pub use color::Color;
pub use glyph::{glyph_for, glyph_for_fen_char};
pub use piece::{Piece, PieceKind};
pub use square::{File, Rank, Square};
pub use square_set::SquareSet;
