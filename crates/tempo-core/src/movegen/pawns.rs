//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

/// Push one move per promotion kind, or the plain move off the last rank.
fn push_pawn_move(list: &mut MoveList, src: Square, dst: Square, pawn: Piece, captured: Option<Piece>) {
    if dst.rank() == pawn.color().promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            list.push(Move::new_promotion(src, dst, pawn, captured, kind));
        }
    } else {
        list.push(Move::new(src, dst, pawn, captured));
    }
}

/// Generate pseudo-legal pawn moves from `src`.
pub(super) fn gen_pawns(board: &Board, src: Square, pawn: Piece, list: &mut MoveList) {
    if pawn.kind() != PieceKind::Pawn {
        return;
    }
    let us = pawn.color();
    let forward = us.forward();

    if let Some(one) = src.offset(0, forward).filter(|&sq| board.piece_at(sq).is_none()) {
        push_pawn_move(list, src, one, pawn, None);

        if src.rank() == us.pawn_rank() {
            if let Some(two) = one.offset(0, forward).filter(|&sq| board.piece_at(sq).is_none()) {
                list.push(Move::new(src, two, pawn, None));
            }
        }
    }

    for df in [-1, 1] {
        let Some(dst) = src.offset(df, forward) else {
            continue;
        };
        match board.piece_at(dst) {
            Some(victim) if victim.color() != us => {
                push_pawn_move(list, src, dst, pawn, Some(victim));
            }
            None if board.en_passant() == Some(dst) => {
                let victim_sq = Square::new(dst.file(), src.rank());
                let victim = board.piece_at(victim_sq);
                if victim == Some(Piece::new(PieceKind::Pawn, us.flip())) {
                    list.push(Move::new_en_passant(src, dst, pawn, Piece::new(PieceKind::Pawn, us.flip())));
                }
            }
            _ => {}
        }
    }
}
