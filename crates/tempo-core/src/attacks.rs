//! Attack patterns on the mailbox board.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Knight jumps as (file, rank) deltas.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// King steps as (file, rank) deltas.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Orthogonal ray directions.
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Diagonal ray directions.
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Walk from `from` along `(df, dr)` and return the first occupied square, if any.
fn first_blocker(board: &Board, from: Square, (df, dr): (i8, i8)) -> Option<Square> {
    let mut sq = from;
    while let Some(next) = sq.offset(df, dr) {
        if board.piece_at(next).is_some() {
            return Some(next);
        }
        sq = next;
    }
    None
}

impl Board {
    /// Return `true` if `sq` is attacked by any piece of `by`.
    ///
    /// Patterns are cast outward from the target square and matched against
    /// the attacker found at the end of each pattern.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let holds = |target: Option<Square>, kinds: &[PieceKind]| {
            target
                .and_then(|t| self.piece_at(t))
                .is_some_and(|p| p.color() == by && kinds.contains(&p.kind()))
        };

        // A pawn of `by` attacks diagonally forward, so look one rank behind.
        let behind = -by.forward();
        if holds(sq.offset(-1, behind), &[PieceKind::Pawn])
            || holds(sq.offset(1, behind), &[PieceKind::Pawn])
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(sq.offset(df, dr), &[PieceKind::Knight]))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(sq.offset(df, dr), &[PieceKind::King]))
        {
            return true;
        }

        let straight = [PieceKind::Rook, PieceKind::Queen];
        if ROOK_DIRECTIONS
            .iter()
            .any(|&dir| holds(first_blocker(self, sq, dir), &straight))
        {
            return true;
        }

        let diagonal = [PieceKind::Bishop, PieceKind::Queen];
        BISHOP_DIRECTIONS
            .iter()
            .any(|&dir| holds(first_blocker(self, sq, dir), &diagonal))
    }

    /// Return `true` if the king of `color` is attacked.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.flip())
    }

    /// Return `true` if the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move())
    }
}
