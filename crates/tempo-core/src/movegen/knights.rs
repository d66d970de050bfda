//! Knight move generation.

use crate::attacks::KNIGHT_OFFSETS;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, landing};

/// Generate pseudo-legal knight moves from `src`.
pub(super) fn gen_knights(board: &Board, src: Square, knight: Piece, list: &mut MoveList) {
    if knight.kind() != PieceKind::Knight {
        return;
    }
    for (df, dr) in KNIGHT_OFFSETS {
        let Some(dst) = src.offset(df, dr) else {
            continue;
        };
        if let Some(captured) = landing(board, knight, dst) {
            list.push(Move::new(src, dst, knight, captured));
        }
    }
}
