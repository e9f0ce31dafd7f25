//! Standard chess rules, delegated to the `shakmaty` crate.

use super::{AppliedMove, MoveRequest, RulesError, RulesOracle};
use chessboard_core::{Color, File, Piece, PieceKind, Rank, Square, SquareSet};
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Move, Position, Role};

/// Standard chess (FIDE) backed by `shakmaty`.
///
/// `shakmaty` answers legality, check, mate, stalemate and material questions.
/// Threefold repetition needs game history, which a `shakmaty` position does
/// not keep, so [`ShakmatyPosition`] carries it alongside.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatyRules;

/// A `shakmaty` position plus the repetition history since the last
/// irreversible move.
#[derive(Debug, Clone)]
pub struct ShakmatyPosition {
    chess: Chess,
    history: Vec<RepetitionKey>,
}

impl ShakmatyPosition {
    fn new(chess: Chess) -> Self {
        let key = RepetitionKey::of(&chess);
        ShakmatyPosition {
            chess,
            history: vec![key],
        }
    }

    /// How many times the current position has occurred.
    pub fn repetitions(&self) -> usize {
        match self.history.last() {
            Some(current) => self.history.iter().filter(|k| *k == current).count(),
            None => 0,
        }
    }

    fn after(&self, chess: Chess) -> Self {
        let key = RepetitionKey::of(&chess);
        // Captures and pawn moves reset the halfmove clock; no earlier
        // position can recur after one.
        let history = if chess.halfmoves() == 0 {
            vec![key]
        } else {
            let mut history = self.history.clone();
            history.push(key);
            history
        };
        ShakmatyPosition { chess, history }
    }
}

/// The parts of a position that decide whether it "repeats".
#[derive(Debug, Clone, PartialEq, Eq)]
struct RepetitionKey {
    pieces: [Option<Piece>; 64],
    turn: Color,
    castling: shakmaty::Bitboard,
    ep: Option<shakmaty::Square>,
}

impl RepetitionKey {
    fn of(chess: &Chess) -> Self {
        let mut pieces = [None; 64];
        for square in Square::display_order() {
            pieces[square.index() as usize] = piece_on(chess, square);
        }
        RepetitionKey {
            pieces,
            turn: color_from(chess.turn()),
            castling: chess.castles().castling_rights(),
            ep: chess.ep_square(EnPassantMode::Legal),
        }
    }
}

impl RulesOracle for ShakmatyRules {
    type Position = ShakmatyPosition;

    fn initial_position(&self) -> ShakmatyPosition {
        ShakmatyPosition::new(Chess::default())
    }

    fn position_from_fen(&self, fen: &str) -> Result<ShakmatyPosition, RulesError> {
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|e: shakmaty::fen::ParseFenError| RulesError::InvalidFen(e.to_string()))?;
        let chess: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| RulesError::InvalidFen(e.to_string()))?;
        Ok(ShakmatyPosition::new(chess))
    }

    fn side_to_move(&self, position: &ShakmatyPosition) -> Color {
        color_from(position.chess.turn())
    }

    fn piece_at(&self, position: &ShakmatyPosition, square: Square) -> Option<Piece> {
        piece_on(&position.chess, square)
    }

    fn legal_targets(&self, position: &ShakmatyPosition, from: Square) -> SquareSet {
        let from = to_shakmaty(from);
        position
            .chess
            .legal_moves()
            .iter()
            .filter_map(click_squares)
            .filter(|(source, _)| *source == from)
            .map(|(_, target)| from_shakmaty(target))
            .collect()
    }

    fn try_move(
        &self,
        position: &ShakmatyPosition,
        request: MoveRequest,
    ) -> Result<AppliedMove<ShakmatyPosition>, RulesError> {
        let mover = self
            .piece_at(position, request.from)
            .ok_or(RulesError::NoPiece(request.from))?;
        let illegal = RulesError::IllegalMove {
            from: request.from,
            to: request.to,
        };

        let wanted = (to_shakmaty(request.from), to_shakmaty(request.to));
        let promotion = request.promotion.map(role_from_kind);
        // A promotion move only matches when the requested piece agrees;
        // for every other move the promotion field is ignored.
        let mv = position
            .chess
            .legal_moves()
            .into_iter()
            .find(|m| {
                click_squares(m) == Some(wanted)
                    && (!m.is_promotion() || m.promotion() == promotion)
            })
            .ok_or_else(|| illegal.clone())?;

        let captured = mv
            .capture()
            .map(|role| Piece::new(kind_from_role(role), mover.color.opposite()));
        let mut san = San::from_move(&position.chess, &mv).to_string();
        let chess = position.chess.clone().play(&mv).map_err(|_| illegal)?;
        if chess.is_checkmate() {
            san.push('#');
        } else if chess.is_check() {
            san.push('+');
        }

        Ok(AppliedMove {
            position: position.after(chess),
            captured,
            san,
        })
    }

    fn is_checkmate(&self, position: &ShakmatyPosition) -> bool {
        position.chess.is_checkmate()
    }

    fn is_stalemate(&self, position: &ShakmatyPosition) -> bool {
        position.chess.is_stalemate()
    }

    fn is_draw(&self, position: &ShakmatyPosition) -> bool {
        let chess = &position.chess;
        chess.is_stalemate()
            || chess.is_insufficient_material()
            || chess.halfmoves() >= 100
            || position.repetitions() >= 3
    }

    fn is_check(&self, position: &ShakmatyPosition) -> bool {
        position.chess.is_check()
    }

    fn fullmove_number(&self, position: &ShakmatyPosition) -> u32 {
        position.chess.fullmoves().get()
    }
}

/// The (source, destination) pair a user clicks to make `m`.
///
/// `shakmaty` encodes castling as king-takes-rook; on screen the king lands
/// on the g- or c-file instead.
fn click_squares(m: &Move) -> Option<(shakmaty::Square, shakmaty::Square)> {
    match m {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                shakmaty::File::G
            } else {
                shakmaty::File::C
            };
            Some((*king, shakmaty::Square::from_coords(file, king.rank())))
        }
        Move::Put { .. } => None,
        other => other.from().map(|from| (from, other.to())),
    }
}

fn piece_on(chess: &Chess, square: Square) -> Option<Piece> {
    chess
        .board()
        .piece_at(to_shakmaty(square))
        .map(|p| Piece::new(kind_from_role(p.role), color_from(p.color)))
}

fn to_shakmaty(square: Square) -> shakmaty::Square {
    shakmaty::Square::from_coords(
        shakmaty::File::new(u32::from(square.file().index())),
        shakmaty::Rank::new(u32::from(square.rank().index())),
    )
}

fn from_shakmaty(square: shakmaty::Square) -> Square {
    Square::new(
        File::ALL[square.file() as usize],
        Rank::ALL[square.rank() as usize],
    )
}

fn color_from(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn role_from_kind(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}
