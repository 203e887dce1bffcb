use thiserror::Error;

use super::board::ChessBoard;
use super::check;
use super::coord::{Coord, CoordError};
use super::history::{HistoricalMove, History};
use super::piece_move::{self, IllegalMoveReason, PawnShape};
use super::player::{Player, PlayerId, Players};
use super::snapshot::{BoardSnapshot, DisplayMode};
use super::square::{Color, Piece, Switch, TypePiece};

pub type MatchId = u64;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("that piece is not yours")]
    WrongPlayer,
    #[error("it is not your turn or there is no piece on that square")]
    WrongTeam,
    #[error("you cannot capture your own piece")]
    OwnPiece,
    #[error("illegal move: {0}")]
    IllegalShape(IllegalMoveReason),
    #[error("the match is over")]
    MatchOver,
}

pub type MoveOutcome = Result<AppliedMove, MoveRejection>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EndGame {
    #[default]
    None,
    KingCaptured(Color),
    Resigned(Color),
}

impl EndGame {
    pub fn winner(&self) -> Option<Color> {
        match self {
            EndGame::None => None,
            EndGame::KingCaptured(winner) | EndGame::Resigned(winner) => Some(*winner),
        }
    }
}

/// Report of a move that went through every gate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    piece: Piece,
    from: Coord,
    captured: Option<Piece>,
    en_passant: bool,
    opponent_in_check: bool,
    end_game: EndGame,
}

impl AppliedMove {
    /// The moved piece, on its new square.
    pub fn piece(&self) -> &Piece {
        &self.piece
    }
    pub fn from(&self) -> Coord {
        self.from
    }
    pub fn to(&self) -> Coord {
        self.piece.location()
    }
    pub fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }
    pub fn is_en_passant(&self) -> bool {
        self.en_passant
    }
    pub fn opponent_in_check(&self) -> bool {
        self.opponent_in_check
    }
    pub fn end_game(&self) -> EndGame {
        self.end_game
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Resolution {
    Quiet,
    Capture,
    EnPassant(Coord),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMatch {
    id: MatchId,
    board: ChessBoard,
    players: Players,
    current_turn: Color,
    history: History,
    end_game: EndGame,
}

impl ChessMatch {
    pub fn new(id: MatchId, white_id: PlayerId, black_id: PlayerId) -> Self {
        Self::from_board(
            id,
            white_id,
            black_id,
            ChessBoard::initial_position(),
            Color::White,
        )
    }

    /// Start a match from an arbitrary position.
    pub fn from_board(
        id: MatchId,
        white_id: PlayerId,
        black_id: PlayerId,
        board: ChessBoard,
        current_turn: Color,
    ) -> Self {
        assert!(board.is_consistent(), "Internal error: inconsistent board");
        ChessMatch {
            id,
            board,
            players: Players::new(white_id, black_id),
            current_turn,
            history: History::default(),
            end_game: EndGame::None,
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }
    pub fn board(&self) -> &ChessBoard {
        &self.board
    }
    pub fn players(&self) -> &Players {
        &self.players
    }
    pub fn player(&self, color: Color) -> &Player {
        self.players.get_player(color)
    }
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }
    pub fn current_player(&self) -> &Player {
        self.players.get_player(self.current_turn)
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn end_game(&self) -> EndGame {
        self.end_game
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        check::is_in_check(&self.board, color)
    }

    pub fn board_snapshot(&self, mode: DisplayMode) -> BoardSnapshot {
        BoardSnapshot::build(&self.board, mode)
    }

    /// Same as `attempt_move` but with squares in conventional notation.
    pub fn attempt_move_conventional(
        &mut self,
        requester: &PlayerId,
        from: &str,
        to: &str,
    ) -> Result<MoveOutcome, CoordError> {
        let from = Coord::from_conventional(from)?;
        let to = Coord::from_conventional(to)?;
        Ok(self.attempt_move(requester, from, to))
    }

    /// Run a move request through every gate and apply it when all of them pass.
    ///
    /// A rejected request leaves the match untouched.
    pub fn attempt_move(&mut self, requester: &PlayerId, from: Coord, to: Coord) -> MoveOutcome {
        let piece = self.authorize(requester, from)?;
        let resolution = self.resolve(&piece, to)?;
        Ok(self.apply(piece, to, resolution))
    }

    /// The requester resigns. Returns the winner.
    pub fn resign(&mut self, requester: &PlayerId) -> Result<Color, MoveRejection> {
        if self.end_game != EndGame::None {
            return Err(MoveRejection::MatchOver);
        }
        let color = self
            .players
            .color_of(requester)
            .ok_or(MoveRejection::WrongPlayer)?;
        self.end_game = EndGame::Resigned(color.switch());
        Ok(color.switch())
    }

    fn authorize(&self, requester: &PlayerId, from: Coord) -> Result<Piece, MoveRejection> {
        if self.end_game != EndGame::None {
            return Err(MoveRejection::MatchOver);
        }
        let color = self
            .players
            .color_of(requester)
            .ok_or(MoveRejection::WrongPlayer)?;
        let piece = *self.board.piece_at(from).ok_or(MoveRejection::WrongTeam)?;
        if piece.color() != color {
            return Err(MoveRejection::WrongPlayer);
        }
        if color != self.current_turn {
            return Err(MoveRejection::WrongTeam);
        }
        Ok(piece)
    }

    fn resolve(&self, piece: &Piece, to: Coord) -> Result<Resolution, MoveRejection> {
        let from = piece.location();
        let pawn_shape = piece_move::shape_gate(piece, to)
            .map_err(MoveRejection::IllegalShape)?;
        if piece_move::is_blockable(piece.type_piece()) && !self.board.path_clear(from, to) {
            return Err(MoveRejection::IllegalShape(IllegalMoveReason::Blocked));
        }
        match self.board.piece_at(to) {
            Some(target) if target.color() == piece.color() => Err(MoveRejection::OwnPiece),
            Some(_) => match pawn_shape {
                Some(PawnShape::Advance) | Some(PawnShape::DoubleAdvance) => Err(
                    MoveRejection::IllegalShape(IllegalMoveReason::PawnForwardCapture),
                ),
                _ => Ok(Resolution::Capture),
            },
            None => match pawn_shape {
                Some(PawnShape::Diagonal) => self
                    .en_passant_victim(piece, to)
                    .map(Resolution::EnPassant)
                    .ok_or(MoveRejection::IllegalShape(
                        IllegalMoveReason::PawnDiagonalWithoutCapture,
                    )),
                _ => Ok(Resolution::Quiet),
            },
        }
    }

    /// Square of the opponent pawn captured en passant by `pawn` moving to `to`.
    fn en_passant_victim(&self, pawn: &Piece, to: Coord) -> Option<Coord> {
        let last = self.history.last()?;
        if last.color() == pawn.color() || !last.is_pawn_double_step() {
            return None;
        }
        let victim = self.board.piece_at(last.to())?;
        if victim.type_piece() != TypePiece::Pawn || victim.color() == pawn.color() {
            return None;
        }
        let from = pawn.location();
        let (dx, dy) = from.delta(&victim.location());
        let ahead = from.offset(0, pawn.color().forward())?;
        if dy == 0 && dx.abs() == 1 && to.x() == victim.location().x() && to.y() == ahead.y() {
            Some(victim.location())
        } else {
            None
        }
    }

    fn apply(&mut self, piece: Piece, to: Coord, resolution: Resolution) -> AppliedMove {
        let from = piece.location();
        let color = piece.color();
        let captured = match resolution {
            Resolution::Quiet => {
                let captured = self.board.move_piece(from, to);
                assert!(captured.is_none(), "Internal error: quiet move captured a piece");
                None
            }
            Resolution::Capture => self.board.move_piece(from, to),
            Resolution::EnPassant(victim) => {
                let captured = self.board.remove(victim);
                self.board.move_piece(from, to);
                captured
            }
        };
        if let Some(captured) = captured {
            self.players.get_player_mut(color).add_capture(captured);
            if captured.type_piece() == TypePiece::King {
                self.end_game = EndGame::KingCaptured(color);
            }
        }
        let en_passant = matches!(resolution, Resolution::EnPassant(_));
        self.history.add_move(HistoricalMove::new(
            piece.type_piece(),
            color,
            from,
            to,
            captured,
            en_passant,
        ));
        self.current_turn = color.switch();
        debug_assert!(self.board.is_consistent());
        let moved = *self
            .board
            .piece_at(to)
            .expect("Internal error: moved piece missing from its destination");
        AppliedMove {
            piece: moved,
            from,
            captured,
            en_passant,
            opponent_in_check: self.is_in_check(color.switch()),
            end_game: self.end_game,
        }
    }
}
