//! Square-selection state machine.
//!
//! A click either picks a move source, drops or switches that choice, or
//! completes a move onto one of the highlighted targets. [`Selection::intent`]
//! only classifies the click; the [`Session`](crate::Session) carries it out.

use crate::rules::RulesOracle;
use chessboard_core::{Square, SquareSet};

/// The user's current move source and the targets reachable from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// A friendly piece is selected; `targets` is exactly the oracle's answer
    /// for it in the position it was selected in.
    Selected { square: Square, targets: SquareSet },
}

/// What a click on a square asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Nothing happens.
    Ignore,
    /// Select (or switch the selection to) this square.
    Select(Square),
    /// Drop the current selection.
    Deselect,
    /// Move the selected piece.
    Move { from: Square, to: Square },
}

impl Selection {
    /// Builds the selected state for `square`, asking the oracle for targets.
    pub fn select<R: RulesOracle>(rules: &R, position: &R::Position, square: Square) -> Self {
        Selection::Selected {
            square,
            targets: rules.legal_targets(position, square),
        }
    }

    /// The selected square, if any.
    pub fn square(&self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected { square, .. } => Some(*square),
        }
    }

    /// Legal targets of the selection (empty when idle).
    pub fn targets(&self) -> SquareSet {
        match self {
            Selection::Idle => SquareSet::EMPTY,
            Selection::Selected { targets, .. } => *targets,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// Classifies a click on `clicked`.
    ///
    /// Checks run in a fixed order: deselect, reselect, move, ignore. The
    /// reselect check has to come before the move check's fallback, or a
    /// click on another friendly piece would be swallowed.
    pub fn intent<R: RulesOracle>(
        &self,
        rules: &R,
        position: &R::Position,
        clicked: Square,
    ) -> Intent {
        let side = rules.side_to_move(position);
        let friendly = rules
            .piece_at(position, clicked)
            .is_some_and(|piece| piece.color == side);

        match *self {
            Selection::Idle if friendly => Intent::Select(clicked),
            Selection::Idle => Intent::Ignore,
            Selection::Selected { square, .. } if square == clicked => Intent::Deselect,
            Selection::Selected { targets, .. } if friendly && !targets.contains(clicked) => {
                Intent::Select(clicked)
            }
            Selection::Selected { square, targets } if targets.contains(clicked) => Intent::Move {
                from: square,
                to: clicked,
            },
            Selection::Selected { .. } => Intent::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ShakmatyRules;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn idle_click_on_empty_square_is_ignored() {
        let pos = ShakmatyRules.initial_position();
        assert_eq!(
            Selection::Idle.intent(&ShakmatyRules, &pos, sq("e4")),
            Intent::Ignore
        );
    }

    #[test]
    fn idle_click_on_opponent_piece_is_ignored() {
        let pos = ShakmatyRules.initial_position();
        assert_eq!(
            Selection::Idle.intent(&ShakmatyRules, &pos, sq("e7")),
            Intent::Ignore
        );
    }

    #[test]
    fn idle_click_on_friendly_piece_selects() {
        let pos = ShakmatyRules.initial_position();
        assert_eq!(
            Selection::Idle.intent(&ShakmatyRules, &pos, sq("e2")),
            Intent::Select(sq("e2"))
        );
    }

    #[test]
    fn select_asks_the_oracle() {
        let pos = ShakmatyRules.initial_position();
        let selection = Selection::select(&ShakmatyRules, &pos, sq("e2"));
        assert_eq!(selection.square(), Some(sq("e2")));
        assert_eq!(
            selection.targets(),
            ShakmatyRules.legal_targets(&pos, sq("e2"))
        );
        assert!(selection.targets().contains(sq("e4")));
    }

    #[test]
    fn immobilised_piece_selects_with_no_targets() {
        let pos = ShakmatyRules.initial_position();
        let selection = Selection::select(&ShakmatyRules, &pos, sq("a1"));
        assert_eq!(selection.square(), Some(sq("a1")));
        assert!(selection.targets().is_empty());
    }

    #[test]
    fn clicking_the_selection_again_deselects() {
        let pos = ShakmatyRules.initial_position();
        let selection = Selection::select(&ShakmatyRules, &pos, sq("e2"));
        assert_eq!(
            selection.intent(&ShakmatyRules, &pos, sq("e2")),
            Intent::Deselect
        );
    }

    #[test]
    fn clicking_another_friendly_piece_reselects() {
        let pos = ShakmatyRules.initial_position();
        let selection = Selection::select(&ShakmatyRules, &pos, sq("e2"));
        assert_eq!(
            selection.intent(&ShakmatyRules, &pos, sq("g1")),
            Intent::Select(sq("g1"))
        );
    }

    #[test]
    fn clicking_a_target_moves() {
        let pos = ShakmatyRules.initial_position();
        let selection = Selection::select(&ShakmatyRules, &pos, sq("e2"));
        assert_eq!(
            selection.intent(&ShakmatyRules, &pos, sq("e4")),
            Intent::Move {
                from: sq("e2"),
                to: sq("e4")
            }
        );
    }

    #[test]
    fn clicking_elsewhere_keeps_the_selection() {
        let pos = ShakmatyRules.initial_position();
        let selection = Selection::select(&ShakmatyRules, &pos, sq("e2"));
        assert_eq!(
            selection.intent(&ShakmatyRules, &pos, sq("e5")),
            Intent::Ignore
        );
        assert_eq!(
            selection.intent(&ShakmatyRules, &pos, sq("d7")),
            Intent::Ignore
        );
    }

    #[test]
    fn idle_has_no_targets() {
        assert!(Selection::Idle.targets().is_empty());
        assert_eq!(Selection::Idle.square(), None);
        assert!(Selection::default().is_idle());
    }
}
