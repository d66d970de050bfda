//! Game phase calculation based on remaining material.

use tempo_core::{Board, PieceKind};

/// Phase weight of each piece kind, indexed by [`PieceKind::index()`].
///
/// | Piece  | Weight |
/// |--------|--------|
/// | Pawn   | 1      |
/// | Knight | 3      |
/// | Bishop | 3      |
/// | Rook   | 5      |
/// | Queen  | 9      |
const PHASE_WEIGHT: [u32; PieceKind::COUNT] = [1, 3, 3, 5, 9, 0];

/// Total phase weight of both sides in the starting position.
pub const MAX_MATERIAL: u32 = 78;

/// Phase above which the position counts as an endgame.
pub const ENDGAME_THRESHOLD: f32 = 0.75;

/// Phase below which the position counts as an opening.
pub const OPENING_THRESHOLD: f32 = 0.4;

/// Coarse stage of the game used to pick positional weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Opening,
    Middlegame,
    Endgame,
}

impl Stage {
    /// Classify a phase value from [`game_phase`].
    pub fn from_phase(phase: f32) -> Stage {
        if phase > ENDGAME_THRESHOLD {
            Stage::Endgame
        } else if phase < OPENING_THRESHOLD {
            Stage::Opening
        } else {
            Stage::Middlegame
        }
    }
}

/// Return the game phase in `[0, 1]`: 0 with all material on the board, 1 with bare kings.
///
/// Extra material from promotions cannot push the phase below 0.
pub fn game_phase(board: &Board) -> f32 {
    let material: u32 = board
        .pieces()
        .map(|(_, piece)| PHASE_WEIGHT[piece.kind().index()])
        .sum();
    (1.0 - material as f32 / MAX_MATERIAL as f32).clamp(0.0, 1.0)
}
