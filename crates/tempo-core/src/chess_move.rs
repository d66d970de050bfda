//! Chess moves carrying everything make/unmake and move ordering need.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The category of a chess move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Promotion,
    EnPassant,
    Castling,
}

/// A fully described chess move.
///
/// Besides the squares, a move remembers the piece that moved, the piece it
/// captured and whether it gives check. Only source, destination and
/// promotion take part in equality and hashing, so a move parsed from UCI
/// text compares equal to the generated move it names.
#[derive(Clone, Copy)]
pub struct Move {
    source: Square,
    dest: Square,
    piece: Piece,
    captured: Option<Piece>,
    promotion: Option<PieceKind>,
    kind: MoveKind,
    gives_check: bool,
}

impl Move {
    /// Create a normal (quiet or capture) move.
    pub const fn new(source: Square, dest: Square, piece: Piece, captured: Option<Piece>) -> Move {
        Move {
            source,
            dest,
            piece,
            captured,
            promotion: None,
            kind: MoveKind::Normal,
            gives_check: false,
        }
    }

    /// Create a promotion, optionally capturing on the last rank.
    pub const fn new_promotion(
        source: Square,
        dest: Square,
        pawn: Piece,
        captured: Option<Piece>,
        promotion: PieceKind,
    ) -> Move {
        Move {
            source,
            dest,
            piece: pawn,
            captured,
            promotion: Some(promotion),
            kind: MoveKind::Promotion,
            gives_check: false,
        }
    }

    /// Create an en passant capture. `captured` is the pawn taken beside the source.
    pub const fn new_en_passant(source: Square, dest: Square, pawn: Piece, captured: Piece) -> Move {
        Move {
            source,
            dest,
            piece: pawn,
            captured: Some(captured),
            promotion: None,
            kind: MoveKind::EnPassant,
            gives_check: false,
        }
    }

    /// Create a castling move from the king's source and destination squares.
    pub const fn new_castle(king_src: Square, king_dst: Square, king: Piece) -> Move {
        Move {
            source: king_src,
            dest: king_dst,
            piece: king,
            captured: None,
            promotion: None,
            kind: MoveKind::Castling,
            gives_check: false,
        }
    }

    /// Return a copy with the check flag set as given.
    #[inline]
    pub const fn with_check(self, gives_check: bool) -> Move {
        Move { gives_check, ..self }
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// The piece that moves (the pawn, for promotions).
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Return `true` if the move leaves the opponent in check.
    #[inline]
    pub const fn is_check(self) -> bool {
        self.gives_check
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castling)
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Return `true` for moves that neither capture, promote nor give check.
    #[inline]
    pub const fn is_quiet(self) -> bool {
        !self.is_capture() && !self.is_promotion() && !self.gives_check
    }

    /// Return the coordinate notation used by UCI (e.g. "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.source == other.source && self.dest == other.dest && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.dest.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.promotion_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} kind={:?})", self.kind)
    }
}
