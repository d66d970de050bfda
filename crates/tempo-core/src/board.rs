//! The chess board: piece placement, side to move, castling, en passant, and move counters.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::make_move::Undo;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout shared by both sides in the starting position.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete chess position state, mutated in place by make/unmake.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Piece on each square, indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    /// En passant target square, if any.
    en_passant: Option<Square>,
    /// Halfmove clock for the fifty-move rule.
    halfmove_clock: u16,
    /// Fullmove number (starts at 1, incremented after Black moves).
    fullmove_number: u16,
    /// King square for each side, indexed by [`Color::index()`].
    kings: [Square; Color::COUNT],
    /// Undo records of the moves made so far, most recent last.
    pub(crate) history: Vec<Undo>,
}

impl Board {
    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut squares = [None; Square::COUNT];
        for color in Color::ALL {
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                squares[Square::new(file, color.back_rank()).index()] = Some(Piece::new(kind, color));
                squares[Square::new(file, color.pawn_rank()).index()] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        Board {
            squares,
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            kings: [Square::E1, Square::E8],
            history: Vec::new(),
        }
    }

    /// Assemble a board from parsed FEN fields and validate it.
    pub(crate) fn from_parts(
        squares: [Option<Piece>; Square::COUNT],
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Result<Board, BoardError> {
        let find_king = |color: Color| {
            let king = Some(Piece::new(PieceKind::King, color));
            Square::all().find(|sq| squares[sq.index()] == king)
        };
        // A missing king is reported by `validate`.
        let kings = [
            find_king(Color::White).unwrap_or(Square::E1),
            find_king(Color::Black).unwrap_or(Square::E8),
        ];

        let board = Board {
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            kings,
            history: Vec::new(),
        };
        board.validate()?;
        Ok(board)
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Iterate over every occupied square and its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Return the square of the king for the given side.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Put `piece` on `sq`, keeping the king cache in sync.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = sq;
        }
        self.squares[sq.index()] = Some(piece);
    }

    /// Empty `sq`, returning what stood there.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Validate that the position could arise in a game.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = self.pieces().filter(|&(_, p)| p == king).count() as u32;
            if count != 1 {
                let color = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_rank = self
            .pieces()
            .any(|(sq, p)| p.kind() == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7));
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        if self.is_in_check(self.side_to_move.flip()) {
            return Err(BoardError::OpponentInCheck);
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}
