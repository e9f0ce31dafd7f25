//! Turn, check and result status.

use crate::players::Players;
use crate::rules::RulesOracle;
use chessboard_core::Color;
use serde::Serialize;

/// The state of play, as shown on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStatus {
    Checkmate { winner: Color },
    Stalemate,
    /// Insufficient material, 50-move rule or repetition.
    Draw,
    Check { side: Color },
    ToMove { side: Color },
}

impl GameStatus {
    /// Classifies a position.
    ///
    /// Terminal results are checked before check: a mated side is also in
    /// check, and only the mate may be reported.
    pub fn of<R: RulesOracle>(rules: &R, position: &R::Position) -> Self {
        let side = rules.side_to_move(position);
        if rules.is_checkmate(position) {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else if rules.is_stalemate(position) {
            GameStatus::Stalemate
        } else if rules.is_draw(position) {
            GameStatus::Draw
        } else if rules.is_check(position) {
            GameStatus::Check { side }
        } else {
            GameStatus::ToMove { side }
        }
    }

    pub fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::Draw
        )
    }

    /// Renders the status line. Named players replace bare colors.
    pub fn text(self, players: Option<&Players>) -> String {
        let who = |side: Color| match players {
            Some(players) => players.label(side),
            None => side.to_string(),
        };
        match self {
            GameStatus::Checkmate { winner } => format!("Checkmate! {} wins.", who(winner)),
            GameStatus::Stalemate => "Draw by stalemate.".to_string(),
            GameStatus::Draw => {
                "Draw (50-move rule / repetition / insufficient material).".to_string()
            }
            GameStatus::Check { side } => format!("{} to move - in check!", who(side)),
            GameStatus::ToMove { side } => format!("{} to move.", who(side)),
        }
    }
}
