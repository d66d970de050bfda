//! In-place move execution with an undo stack.

use std::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// State a move destroys and unmake must restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Undo {
    mv: Move,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

/// Square of the pawn removed by an en passant capture.
#[inline]
fn en_passant_victim(mv: Move) -> Square {
    Square::new(mv.dest().file(), mv.source().rank())
}

impl Board {
    /// Apply `mv` to the board in place.
    ///
    /// The move must be legal in the current position (as produced by
    /// [`generate_legal_moves`](crate::generate_legal_moves)). Every call must
    /// be paired with [`unmake_move`](Board::unmake_move); prefer
    /// [`play`](Board::play), which pairs them automatically.
    pub fn make_move(&mut self, mv: Move) {
        let us = self.side_to_move();
        let src = mv.source();
        let dst = mv.dest();

        self.history.push(Undo {
            mv,
            castling: self.castling(),
            en_passant: self.en_passant(),
            halfmove_clock: self.halfmove_clock(),
            fullmove_number: self.fullmove_number(),
        });
        self.set_en_passant(None);

        let moving = self.take(src).unwrap_or(mv.piece());
        match mv.kind() {
            MoveKind::Normal => {
                self.take(dst);
                self.put(dst, moving);
                let double_push = moving.kind() == PieceKind::Pawn && src.rank().abs_diff(dst.rank()) == 2;
                if double_push {
                    self.set_en_passant(src.offset(0, us.forward()));
                }
            }
            MoveKind::Promotion => {
                self.take(dst);
                let kind = mv.promotion().unwrap_or(PieceKind::Queen);
                self.put(dst, Piece::new(kind, us));
            }
            MoveKind::EnPassant => {
                self.take(en_passant_victim(mv));
                self.put(dst, moving);
            }
            MoveKind::Castling => {
                self.put(dst, moving);
                let (rook_src, rook_dst) = CastleSide::from_king_dest(dst).rook_squares(us);
                if let Some(rook) = self.take(rook_src) {
                    self.put(rook_dst, rook);
                }
            }
        }

        let castling = self
            .castling()
            .remove(CastleRights::revoked_by(src))
            .remove(CastleRights::revoked_by(dst));
        self.set_castling(castling);

        if moving.kind() == PieceKind::Pawn || mv.is_capture() {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        }

        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        self.set_side_to_move(us.flip());
    }

    /// Take back the most recent move. Does nothing if no move has been made.
    pub fn unmake_move(&mut self) {
        let Some(undo) = self.history.pop() else {
            return;
        };
        let mv = undo.mv;
        let us = self.side_to_move().flip();
        let src = mv.source();
        let dst = mv.dest();

        match mv.kind() {
            MoveKind::Normal | MoveKind::Promotion => {
                self.take(dst);
                if let Some(captured) = mv.captured() {
                    self.put(dst, captured);
                }
            }
            MoveKind::EnPassant => {
                self.take(dst);
                if let Some(captured) = mv.captured() {
                    self.put(en_passant_victim(mv), captured);
                }
            }
            MoveKind::Castling => {
                self.take(dst);
                let (rook_src, rook_dst) = CastleSide::from_king_dest(dst).rook_squares(us);
                if let Some(rook) = self.take(rook_dst) {
                    self.put(rook_src, rook);
                }
            }
        }
        self.put(src, mv.piece());

        self.set_side_to_move(us);
        self.set_castling(undo.castling);
        self.set_en_passant(undo.en_passant);
        self.set_halfmove_clock(undo.halfmove_clock);
        self.set_fullmove_number(undo.fullmove_number);
    }

    /// Make `mv` and return a guard that unmakes it when dropped.
    ///
    /// The guard dereferences to the board, so the position after the move
    /// can be searched through it.
    #[must_use = "dropping the guard immediately takes the move back"]
    pub fn play(&mut self, mv: Move) -> MoveGuard<'_> {
        self.make_move(mv);
        MoveGuard { board: self }
    }
}

/// A move applied to a board for the lifetime of the guard.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.unmake_move();
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::castle_rights::CastleRights;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::movegen::generate_legal_moves;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn find(board: &mut Board, uci: &str) -> Move {
        generate_legal_moves(board)
            .into_iter()
            .find(|mv| mv.to_uci() == uci)
            .unwrap_or_else(|| panic!("{uci} is not legal in {board}"))
    }

    fn play_line(board: &mut Board, line: &[&str]) {
        for uci in line {
            let mv = find(board, uci);
            board.make_move(mv);
        }
    }

    #[test]
    fn pawn_push_sets_en_passant() {
        let mut board = Board::starting_position();
        play_line(&mut board, &["e2e4"]);
        assert_eq!(board.piece_at(sq("e4")), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.piece_at(sq("e2")), None);
        assert_eq!(board.en_passant(), Some(sq("e3")));
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.halfmove_clock(), 0);
    }

    #[test]
    fn en_passant_capture_removes_pawn() {
        let mut board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        play_line(&mut board, &["e5d6"]);
        assert_eq!(board.piece_at(sq("d5")), None);
        assert_eq!(board.piece_at(sq("d6")), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.unmake_move();
        assert_eq!(board.to_string(), "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    }

    #[test]
    fn capture_promotion() {
        let mut board: Board = "1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        play_line(&mut board, &["a7b8n"]);
        assert_eq!(board.piece_at(sq("b8")), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert_eq!(board.piece_at(sq("a7")), None);
    }

    #[test]
    fn castling_moves_rook_and_revokes_rights() {
        let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        play_line(&mut board, &["e1g1"]);
        assert_eq!(board.piece_at(Square::F1), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(board.piece_at(Square::H1), None);
        assert_eq!(board.king_square(Color::White), Square::G1);
        assert_eq!(board.castling(), CastleRights::BLACK_BOTH);

        play_line(&mut board, &["e8c8"]);
        assert_eq!(board.piece_at(Square::D8), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(board.castling(), CastleRights::NONE);
    }

    #[test]
    fn capturing_a_rook_revokes_its_right() {
        let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        play_line(&mut board, &["a1a8"]);
        assert_eq!(board.castling().to_string(), "Kk");
    }

    #[test]
    fn clocks() {
        let mut board = Board::starting_position();
        play_line(&mut board, &["g1f3", "g8f6"]);
        assert_eq!(board.halfmove_clock(), 2);
        assert_eq!(board.fullmove_number(), 2);
        board.unmake_move();
        assert_eq!(board.fullmove_number(), 1);
        assert_eq!(board.halfmove_clock(), 1);
    }

    #[test]
    fn fullmove_number_saturates_and_restores() {
        let mut board: Board = "4k3/8/8/8/8/8/8/4K2R b K - 0 65535".parse().unwrap();
        let original = board.clone();
        let moves = generate_legal_moves(&mut board);
        assert!(!moves.is_empty());
        let mv = find(&mut board, "e8d8");
        board.make_move(mv);
        assert_eq!(board.fullmove_number(), u16::MAX);
        board.unmake_move();
        assert_eq!(board, original);
    }

    #[test]
    fn unmake_restores_equal_board() {
        let mut board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
            .parse()
            .unwrap();
        let original = board.clone();
        play_line(&mut board, &["e1c1", "b4c3", "d2c3", "e8g8", "d5e6", "a6e2"]);
        assert_eq!(board.history.len(), 6);
        for _ in 0..6 {
            board.unmake_move();
        }
        assert_eq!(board, original);
    }

    #[test]
    fn guard_unmakes_on_drop() {
        let mut board = Board::starting_position();
        let original = board.clone();
        let mv = find(&mut board, "d2d4");
        {
            let after = board.play(mv);
            assert_eq!(after.side_to_move(), Color::Black);
            assert_eq!(after.history.len(), 1);
        }
        assert_eq!(board, original);
    }
}
