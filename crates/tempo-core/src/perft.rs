//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Count the leaf nodes of the legal move tree at the given depth.
///
/// Depth 0 returns 1 (the current position). The board is walked with
/// make/unmake and is left unchanged.
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&mut board.play(mv), depth - 1))
        .sum()
}

/// Perft with a per-root-move breakdown, sorted by UCI string.
pub fn divide(board: &mut Board, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_legal_moves(board);
    let mut results: Vec<(String, u64)> = moves
        .into_iter()
        .map(|mv| {
            let count = perft(&mut board.play(mv), depth.saturating_sub(1));
            (mv.to_uci(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
