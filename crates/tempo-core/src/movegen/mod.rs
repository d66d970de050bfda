//! Legal move generation.
//!
//! Pieces generate pseudo-legal moves into a [`MoveList`]; each candidate is
//! then made on the board, kept only if it does not leave the mover's king
//! attacked, and annotated with whether it checks the opponent.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knights;
use self::pawns::gen_pawns;
use self::sliders::gen_sliders;

/// Growable buffer of generated moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Mutable view, used to reorder moves in place.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Target of a move for `mover` landing on `dst`: `Some(captured)` when legal
/// to land there, `None` when blocked by a friendly piece.
#[inline]
pub(super) fn landing(board: &Board, mover: Piece, dst: Square) -> Option<Option<Piece>> {
    match board.piece_at(dst) {
        Some(other) if other.color() == mover.color() => None,
        other => Some(other),
    }
}

/// Generate all pseudo-legal moves for the side to move.
fn generate_pseudo_legal(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    let us = board.side_to_move();
    for (sq, piece) in board.pieces().filter(|(_, p)| p.color() == us) {
        gen_pawns(board, sq, piece, &mut list);
        gen_knights(board, sq, piece, &mut list);
        gen_sliders(board, sq, piece, &mut list);
        gen_king(board, sq, piece, &mut list);
    }
    list
}

/// Generate all legal moves for the current position.
///
/// Each returned move has its check flag set. The board is restored to its
/// original state before returning.
pub fn generate_legal_moves(board: &mut Board) -> MoveList {
    let us = board.side_to_move();
    let mut legal = MoveList::new();
    for mv in generate_pseudo_legal(board) {
        let after = board.play(mv);
        if after.is_in_check(us) {
            continue;
        }
        let gives_check = after.in_check();
        legal.push(mv.with_check(gives_check));
    }
    legal
}

/// Find the legal move written as `text` in UCI long algebraic notation.
///
/// Matching is exact: a promotion must carry its lowercase piece letter.
pub fn find_legal_move(board: &mut Board, text: &str) -> Option<Move> {
    generate_legal_moves(board).into_iter().find(|mv| mv.to_uci() == text)
}
