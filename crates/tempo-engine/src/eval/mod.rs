//! Static evaluation: material, a check bonus, and phase-aware centralization.

pub mod centralization;
pub mod material;
pub mod phase;

use tempo_core::{Board, Color};

use self::centralization::centralization;
use self::material::material;
use self::phase::{Stage, game_phase};

/// White-relative bonus applied when the side not to move is in check.
pub const CHECK_BONUS: i32 = 50;

/// Evaluate the position from the side to move's perspective.
///
/// Pure function of the board: evaluating the same position twice gives the
/// same score.
pub fn evaluate(board: &Board) -> i32 {
    let us = board.side_to_move();
    let stage = Stage::from_phase(game_phase(board));
    let mut score = material(board) + centralization(board, stage);

    // Added before the perspective flip, as a White-relative term.
    if board.is_in_check(us.flip()) {
        score += CHECK_BONUS;
    }

    match us {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
mod tests {
    use tempo_core::{Board, Color, Move, Piece, PieceKind, Square};

    use super::centralization::centralization;
    use super::material::material;
    use super::phase::{Stage, game_phase};
    use super::{CHECK_BONUS, evaluate};

    #[test]
    fn starting_position_is_even() {
        assert_eq!(evaluate(&Board::starting_position()), 0);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let board: Board = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4"
            .parse()
            .unwrap();
        assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn perspective_flips_with_side_to_move() {
        let white: Board = "4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1".parse().unwrap();
        let black: Board = "4k3/8/8/8/3Q4/8/8/4K3 b - - 0 1".parse().unwrap();
        assert!(evaluate(&white) > 900);
        assert_eq!(evaluate(&white), -evaluate(&black));
    }

    #[test]
    fn mirrored_positions_agree() {
        let white: Board = "4k3/8/8/8/3N4/8/8/4K3 w - - 0 1".parse().unwrap();
        let black: Board = "4k3/8/8/3n4/8/8/8/4K3 b - - 0 1".parse().unwrap();
        assert_eq!(evaluate(&white), evaluate(&black));
    }

    #[test]
    fn check_bonus_is_white_relative() {
        // Walk the white king into the rook's file so that White, the side
        // not to move, stands in check.
        let mut board: Board = "k3r3/8/8/8/8/8/8/3K4 w - - 0 1".parse().unwrap();
        let king = Piece::new(PieceKind::King, Color::White);
        board.make_move(Move::new(Square::D1, Square::E1, king, None));
        assert!(board.is_in_check(Color::White));

        let white = material(&board) + centralization(&board, Stage::from_phase(game_phase(&board)));
        assert_eq!(evaluate(&board), -(white + CHECK_BONUS));
    }
}
