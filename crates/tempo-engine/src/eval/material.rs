//! Material balance evaluation.
//!
//! All scores are returned from White's perspective (positive = White ahead).

use tempo_core::{Board, Color, PieceKind};

/// Centipawn value of each piece kind, indexed by [`PieceKind::index()`].
///
/// Kings carry no material value here; move ordering uses its own table.
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [100, 320, 330, 500, 900, 0];

/// Sum of piece values, White minus Black.
pub fn material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = MATERIAL_VALUE[piece.kind().index()];
            match piece.color() {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use tempo_core::Board;

    use super::material;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(material(&Board::starting_position()), 0);
    }

    #[test]
    fn missing_black_queen() {
        let board: Board = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(material(&board), 900);
    }

    #[test]
    fn minor_pieces_differ() {
        // White knight against black bishop.
        let board: Board = "4kb2/8/8/8/8/8/8/4KN2 w - - 0 1".parse().unwrap();
        assert_eq!(material(&board), -10);
    }
}
