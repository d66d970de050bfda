//! Bishop, rook, and queen move generation.

use crate::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, landing};

const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

/// Generate pseudo-legal slider moves from `src`.
pub(super) fn gen_sliders(board: &Board, src: Square, slider: Piece, list: &mut MoveList) {
    let directions: &[(i8, i8)] = match slider.kind() {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => return,
    };

    for &(df, dr) in directions {
        let mut sq = src;
        while let Some(dst) = sq.offset(df, dr) {
            match landing(board, slider, dst) {
                Some(captured) => {
                    list.push(Move::new(src, dst, slider, captured));
                    if captured.is_some() {
                        break;
                    }
                }
                None => break,
            }
            sq = dst;
        }
    }
}
