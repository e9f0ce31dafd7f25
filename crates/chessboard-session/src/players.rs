//! Player display names collected before a game starts.

use chessboard_core::Color;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors from the pre-game name form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    /// The name for this side was blank after trimming.
    #[error("{0} player name is empty")]
    Empty(Color),
    /// Names are fixed once a game is underway.
    #[error("players are already set for this session")]
    AlreadyPlaying,
}

/// A normalized display name: trimmed, single-spaced, title-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Normalizes raw form input for `side`.
    ///
    /// `"  cindy  "` becomes `"Cindy"`, `"GAVIN"` becomes `"Gavin"` and
    /// `"mary   ann"` becomes `"Mary Ann"`.
    pub fn parse(raw: &str, side: Color) -> Result<Self, PlayerError> {
        let words: Vec<String> = raw.split_whitespace().map(title_case).collect();
        if words.is_empty() {
            return Err(PlayerError::Empty(side));
        }
        Ok(PlayerName(words.join(" ")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Both players' names, fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Players {
    white: PlayerName,
    black: PlayerName,
}

impl Players {
    /// Validates the pre-game form. Both names must be non-blank.
    pub fn new(white: &str, black: &str) -> Result<Self, PlayerError> {
        Ok(Players {
            white: PlayerName::parse(white, Color::White)?,
            black: PlayerName::parse(black, Color::Black)?,
        })
    }

    pub fn name(&self, side: Color) -> &PlayerName {
        match side {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// "Cindy (White)".
    pub fn label(&self, side: Color) -> String {
        format!("{} ({})", self.name(side), side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_title_cases() {
        let players = Players::new("  cindy  ", "GAVIN").unwrap();
        assert_eq!(players.name(Color::White).as_str(), "Cindy");
        assert_eq!(players.name(Color::Black).as_str(), "Gavin");
    }

    #[test]
    fn collapses_inner_whitespace() {
        let name = PlayerName::parse("  mary \t  ANN ", Color::White).unwrap();
        assert_eq!(name.as_str(), "Mary Ann");
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(
            Players::new("   ", "Gavin"),
            Err(PlayerError::Empty(Color::White))
        );
        assert_eq!(
            Players::new("Cindy", ""),
            Err(PlayerError::Empty(Color::Black))
        );
    }

    #[test]
    fn non_ascii_names() {
        let name = PlayerName::parse("élodie", Color::Black).unwrap();
        assert_eq!(name.as_str(), "Élodie");
    }

    #[test]
    fn label_names_the_color() {
        let players = Players::new("cindy", "gavin").unwrap();
        assert_eq!(players.label(Color::White), "Cindy (White)");
        assert_eq!(players.label(Color::Black), "Gavin (Black)");
    }

    #[test]
    fn error_message() {
        assert_eq!(
            PlayerError::Empty(Color::Black).to_string(),
            "Black player name is empty"
        );
    }
}
