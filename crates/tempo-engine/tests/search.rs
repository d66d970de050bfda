//! Integration tests for the search driver.
//!
//! Checks the principal variation search against a plain negamax, and the
//! driver's behavior on mates, stalemates and tight time budgets.

use std::time::{Duration, Instant};

use tempo_core::{Board, PieceKind, STARTING_FEN, generate_legal_moves};
use tempo_engine::search::pvs::{MATE_SCORE, terminal_score};
use tempo_engine::{SearchConfig, SearchLimits, SearchResult, Searcher, evaluate};

const SCHOLARS_MATE_FEN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

const SICILIAN_FEN: &str = "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2";

const ENDGAME_FEN: &str = "8/8/8/3k4/8/3K4/4P3/8 w - - 0 1";

// White's queen can trade on d5 (defended by c6) or grab the a5 rook (defended by b6).
const QUEEN_TRADE_FEN: &str = "6k1/5ppp/1pp5/r2q4/8/8/3Q1PPP/6K1 w - - 0 1";

const CHECKMATED_FEN: &str = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1";

/// Full-width negamax without pruning or reductions.
fn negamax(board: &mut Board, depth: u32) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }
    let moves = generate_legal_moves(board);
    if moves.is_empty() {
        return terminal_score(board, depth);
    }
    moves
        .iter()
        .map(|&mv| -negamax(&mut board.play(mv), depth - 1))
        .max()
        .unwrap_or(i32::MIN + 1)
}

fn search(fen: &str, limits: SearchLimits, late_move_reduction: bool) -> SearchResult {
    let mut board: Board = fen.parse().unwrap();
    let config = SearchConfig {
        late_move_reduction,
        ..SearchConfig::default()
    };
    let mut searcher = Searcher::new(config);
    searcher.search(&mut board, limits, |_| {})
}

// ── Alpha-beta equivalence ────────────────────────────────────────────────────

#[test]
fn pvs_matches_negamax_without_reductions() {
    let cases = [
        (STARTING_FEN, 3),
        (SCHOLARS_MATE_FEN, 3),
        (KIWIPETE_FEN, 2),
        (SICILIAN_FEN, 3),
        (ENDGAME_FEN, 4),
        (QUEEN_TRADE_FEN, 3),
    ];
    for (fen, depth) in cases {
        let mut board: Board = fen.parse().unwrap();
        let expected = negamax(&mut board, depth);
        let result = search(fen, SearchLimits::Depth(depth), false);
        assert_eq!(result.score, expected, "score mismatch on {fen} at depth {depth}");
    }
}

#[test]
fn best_move_achieves_the_negamax_score() {
    let mut board: Board = SICILIAN_FEN.parse().unwrap();
    let result = search(SICILIAN_FEN, SearchLimits::Depth(3), false);
    let best = result.best_move.unwrap();
    let score = -negamax(&mut board.play(best), 2);
    assert_eq!(score, result.score);
}

// ── Mates and stalemates ──────────────────────────────────────────────────────

#[test]
fn nearer_mates_score_higher() {
    let shallow = search(SCHOLARS_MATE_FEN, SearchLimits::Depth(2), true);
    let deep = search(SCHOLARS_MATE_FEN, SearchLimits::Depth(4), true);
    assert_eq!(shallow.score, MATE_SCORE + 100);
    assert_eq!(deep.score, MATE_SCORE + 300);
    assert_eq!(deep.best_move.unwrap().to_uci(), "h5f7");
}

#[test]
fn checkmated_root_reports_no_move() {
    for limits in [SearchLimits::Depth(3), SearchLimits::MoveTime(Duration::from_millis(20))] {
        let result = search(CHECKMATED_FEN, limits, true);
        assert!(result.best_move.is_none());
        assert!(result.score <= -MATE_SCORE, "score {} should be mated", result.score);
    }
}

#[test]
fn lmr_keeps_mate_in_one() {
    let result = search(SCHOLARS_MATE_FEN, SearchLimits::Depth(5), true);
    assert_eq!(result.best_move.unwrap().to_uci(), "h5f7");
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn startpos_depth_one_develops() {
    let result = search(STARTING_FEN, SearchLimits::Depth(1), true);
    let best = result.best_move.unwrap();
    assert!(matches!(best.piece().kind(), PieceKind::Pawn | PieceKind::Knight));
    assert!(result.score > 0 && result.score < 100, "score {} should be positional only", result.score);
}

#[test]
fn queen_trade_beats_losing_capture() {
    for depth in [2, 3] {
        let result = search(QUEEN_TRADE_FEN, SearchLimits::Depth(depth), true);
        assert_ne!(result.best_move.unwrap().to_uci(), "d2a5", "depth {depth}");
    }
}

#[test]
fn movetime_terminates_with_a_legal_move() {
    let mut board: Board = KIWIPETE_FEN.parse().unwrap();
    let mut searcher = Searcher::default();
    let start = Instant::now();
    let result = searcher.search(&mut board, SearchLimits::MoveTime(Duration::from_millis(50)), |_| {});
    let elapsed = start.elapsed();

    assert!(elapsed < Duration::from_millis(500), "search overran: {elapsed:?}");
    let best = result.best_move.unwrap();
    let legal = generate_legal_moves(&mut board);
    assert!(legal.iter().any(|&mv| mv == best));
}

#[test]
fn pv_cache_carries_over_between_searches() {
    let mut board: Board = SICILIAN_FEN.parse().unwrap();
    let mut searcher = Searcher::default();
    let first = searcher.search(&mut board, SearchLimits::Depth(4), |_| {});
    assert_eq!(searcher.pv_cache().first().copied(), first.best_move);

    let second = searcher.search(&mut board, SearchLimits::Depth(4), |_| {});
    assert!(second.best_move.is_some());
    assert_eq!(searcher.pv_cache().first().copied(), second.best_move);
}
