//! Move ordering by tiers: PV move, castling, MVV-LVA captures, promotions, checks.

use tempo_core::{Move, PieceKind};

/// Only this many moves are put in exact order; the tail stays as generated.
pub const ORDER_TOP: usize = 30;

/// Score of the move matching the PV hint.
pub const PV_SCORE: i32 = 10_000_000;
/// Score of any castling move.
pub const CASTLE_SCORE: i32 = 5_000_000;
/// Base score of captures, before MVV-LVA.
pub const CAPTURE_SCORE: i32 = 1_000_000;
/// Extra score for a capture that also promotes.
pub const CAPTURE_PROMOTION_BONUS: i32 = 500_000;
/// Base score of non-capturing promotions.
pub const PROMOTION_SCORE: i32 = 750_000;
/// Score of quiet checking moves.
pub const CHECK_SCORE: i32 = 500_000;

/// Ordering value of each piece kind, indexed by [`PieceKind::index()`].
const ORDER_VALUE: [i32; PieceKind::COUNT] = [100, 320, 330, 500, 900, 20_000];

#[inline]
fn order_value(kind: PieceKind) -> i32 {
    ORDER_VALUE[kind.index()]
}

/// Score a move for ordering purposes. Higher scores are searched first.
pub fn score_move(mv: Move, pv_move: Option<Move>) -> i32 {
    if pv_move == Some(mv) {
        return PV_SCORE;
    }
    if mv.is_castle() {
        return CASTLE_SCORE;
    }
    match (mv.captured(), mv.promotion()) {
        (Some(victim), promotion) => {
            let score = CAPTURE_SCORE + order_value(victim.kind()) * 10 - order_value(mv.piece().kind());
            if promotion.is_some() {
                score + CAPTURE_PROMOTION_BONUS
            } else {
                score
            }
        }
        (None, Some(promoted)) => PROMOTION_SCORE + order_value(promoted) * 10,
        (None, None) if mv.is_check() => CHECK_SCORE,
        (None, None) => 0,
    }
}

/// Sort `moves` in place, best first.
///
/// Partial selection sort: the first [`ORDER_TOP`] slots receive the highest
/// scoring moves in descending order; ties keep the earliest candidate.
pub fn order_moves(moves: &mut [Move], pv_move: Option<Move>) {
    let mut scores: Vec<i32> = moves.iter().map(|&mv| score_move(mv, pv_move)).collect();
    let top = moves.len().min(ORDER_TOP);

    for i in 0..top {
        let mut best = i;
        for j in (i + 1)..moves.len() {
            if scores[j] > scores[best] {
                best = j;
            }
        }
        if best != i {
            moves.swap(i, best);
            scores.swap(i, best);
        }
    }
}
