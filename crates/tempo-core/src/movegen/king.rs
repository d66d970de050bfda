//! King move and castling generation.

use crate::attacks::KING_OFFSETS;
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, landing};

/// Generate pseudo-legal king steps and fully checked castling moves from `src`.
pub(super) fn gen_king(board: &Board, src: Square, king: Piece, list: &mut MoveList) {
    if king.kind() != PieceKind::King {
        return;
    }
    for (df, dr) in KING_OFFSETS {
        let Some(dst) = src.offset(df, dr) else {
            continue;
        };
        if let Some(captured) = landing(board, king, dst) {
            list.push(Move::new(src, dst, king, captured));
        }
    }
    gen_castling(board, src, king, list);
}

/// Castling needs the right, the king and rook on their home squares, empty
/// squares between them and a king path free of attacks, starting square included.
fn gen_castling(board: &Board, src: Square, king: Piece, list: &mut MoveList) {
    let us = king.color();
    let rank = us.back_rank();
    if src != Square::new(4, rank) {
        return;
    }
    let them = us.flip();
    if board.is_square_attacked(src, them) {
        return;
    }

    for side in CastleSide::ALL {
        if !board.castling().has(us, side) {
            continue;
        }
        let (rook_sq, _) = side.rook_squares(us);
        if board.piece_at(rook_sq) != Some(Piece::new(PieceKind::Rook, us)) {
            continue;
        }
        let path_empty = side
            .empty_files()
            .iter()
            .all(|&file| board.piece_at(Square::new(file, rank)).is_none());
        if !path_empty {
            continue;
        }
        let path_safe = side
            .king_path_files()
            .iter()
            .all(|&file| !board.is_square_attacked(Square::new(file, rank), them));
        if path_safe {
            list.push(Move::new_castle(src, Square::new(side.king_dest_file(), rank), king));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::generate_legal_moves;

    fn castles(fen: &str) -> Vec<String> {
        let mut board: Board = fen.parse().unwrap();
        let mut moves: Vec<String> = generate_legal_moves(&mut board)
            .into_iter()
            .filter(|mv| mv.is_castle())
            .map(|mv| mv.to_uci())
            .collect();
        moves.sort();
        moves
    }

    #[test]
    fn both_sides_available() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec!["e1c1", "e1g1"]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec!["e8c8", "e8g8"]);
    }

    #[test]
    fn no_castling_out_of_check() {
        assert!(castles("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1").is_empty());
    }

    #[test]
    fn no_castling_through_attack() {
        // The f-file rook covers f1; b1 being attacked does not matter.
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["e1c1", "e1g1"]);
        assert_eq!(castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["e1c1"]);
    }

    #[test]
    fn blocked_or_missing_rights() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1"), vec!["e1g1"]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1"), vec!["e1g1"]);
    }
}
