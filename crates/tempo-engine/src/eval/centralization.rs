//! Phase-dependent bonus for pieces standing near the centre.

use tempo_core::{Board, Color, PieceKind, Square};

use crate::eval::phase::Stage;

/// Scale applied to every centralization weight.
pub const POSITIONAL_SCALE: f32 = 0.75;

/// Distance from the centre to a corner, in Chebyshev metric.
const MAX_DISTANCE: f32 = 3.5;

/// Centralization weights indexed by `[stage][PieceKind::index()]`.
///
/// Rook weights are negative: a centralized rook is penalized. Pawns carry
/// no weight in the endgame.
const WEIGHTS: [[f32; PieceKind::COUNT]; 3] = [
    // Pawn, Knight, Bishop, Rook, Queen, King
    [120.0, 200.0, 120.0, -80.0, 100.0, -500.0], // opening
    [100.0, 165.0, 140.0, -100.0, 150.0, -250.0], // middlegame
    [0.0, 150.0, 125.0, -75.0, 100.0, 400.0],   // endgame
];

/// How central `sq` is: highest on the four centre squares, 0 on the board edge.
pub fn square_centralization(sq: Square) -> f32 {
    let df = (sq.file() as f32 - 3.5).abs();
    let dr = (sq.rank() as f32 - 3.5).abs();
    (1.0 - df.max(dr) / MAX_DISTANCE).clamp(0.0, 1.0)
}

/// Weight applied to `kind` in `stage`, scale included.
pub fn weight(stage: Stage, kind: PieceKind) -> f32 {
    let row = match stage {
        Stage::Opening => 0,
        Stage::Middlegame => 1,
        Stage::Endgame => 2,
    };
    WEIGHTS[row][kind.index()] * POSITIONAL_SCALE
}

/// Centralization score from White's perspective.
///
/// Each piece kind contributes its signed centralization sum times its
/// weight, truncated toward zero per kind.
pub fn centralization(board: &Board, stage: Stage) -> i32 {
    let mut sums = [0.0f32; PieceKind::COUNT];
    for (sq, piece) in board.pieces() {
        let value = square_centralization(sq);
        sums[piece.kind().index()] += match piece.color() {
            Color::White => value,
            Color::Black => -value,
        };
    }

    PieceKind::ALL
        .into_iter()
        .map(|kind| (sums[kind.index()] * weight(stage, kind)) as i32)
        .sum()
}
