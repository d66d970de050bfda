//! Search algorithms and move ordering.

pub mod control;
pub mod ordering;
pub mod pvs;

use std::time::Duration;

use tempo_core::{Board, Move, generate_legal_moves};
use tracing::debug;

use crate::config::SearchConfig;
use crate::evaluate;
use crate::time::SearchLimits;
use control::SearchControl;
use ordering::order_moves;
use pvs::{INF, SearchContext, search_move, terminal_score};

/// Deepest iteration any search may reach. Fixed-depth requests are clamped to it.
pub const MAX_ITERATIONS: u32 = 256;

/// Number of moves kept in the PV cache: the best move plus five replies.
pub const PV_CACHE_LEN: usize = 6;

/// Result of a search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, or `None` when the root has no legal move.
    pub best_move: Option<Move>,
    /// Score in centipawns from the side to move's perspective.
    pub score: i32,
    /// Principal variation, starting with `best_move`.
    pub pv: Vec<Move>,
    /// Total nodes visited.
    pub nodes: u64,
    /// Depth of the iteration that produced `best_move`.
    pub depth: u32,
}

/// Progress report for one fully completed iteration.
#[derive(Debug, Clone)]
pub struct SearchInfo<'a> {
    pub depth: u32,
    pub nodes: u64,
    pub score: i32,
    pub pv: &'a [Move],
    pub elapsed: Duration,
}

impl SearchInfo<'_> {
    /// Nodes per second over the whole search so far.
    pub fn nps(&self) -> u64 {
        let millis = self.elapsed.as_millis().max(1) as u64;
        self.nodes.saturating_mul(1000) / millis
    }
}

/// Outcome of one pass over the root moves.
struct RootPass {
    /// Best score and line among the root moves that finished in time.
    best: Option<(i32, Vec<Move>)>,
    /// Whether every root move was searched before the deadline.
    complete: bool,
}

/// Iterative-deepening searcher.
///
/// Owns the configuration and the PV of the previous search, which seeds
/// move ordering for the next one.
#[derive(Debug, Default)]
pub struct Searcher {
    config: SearchConfig,
    pv_cache: Vec<Move>,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            pv_cache: Vec::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Forget the cached PV (new game).
    pub fn clear_pv_cache(&mut self) {
        self.pv_cache.clear();
    }

    /// PV of the most recent search, truncated to [`PV_CACHE_LEN`] moves.
    pub fn pv_cache(&self) -> &[Move] {
        &self.pv_cache
    }

    /// Search `board` within `limits`.
    ///
    /// `on_iter` is called after every fully completed iteration. A timed
    /// search keeps deepening until the deadline; a depth-limited search runs
    /// a single pass at the requested depth. The board is restored before
    /// returning.
    pub fn search<F>(&mut self, board: &mut Board, limits: SearchLimits, mut on_iter: F) -> SearchResult
    where
        F: FnMut(&SearchInfo<'_>),
    {
        let (control, depths) = match limits {
            SearchLimits::Depth(depth) => {
                let depth = depth.clamp(1, MAX_ITERATIONS);
                (SearchControl::new_infinite(), depth..=depth)
            }
            SearchLimits::MoveTime(budget) => (SearchControl::new_timed(budget), 1..=MAX_ITERATIONS),
        };

        let mut root_moves = generate_legal_moves(board);
        if root_moves.is_empty() {
            let score = terminal_score(board, *depths.start());
            debug!(score, "no legal move at the root");
            return SearchResult {
                best_move: None,
                score,
                pv: Vec::new(),
                nodes: 1,
                depth: *depths.start(),
            };
        }

        let mut nodes = 0u64;
        let mut reported: Option<(i32, Vec<Move>, u32)> = None;

        for depth in depths {
            if control.expired() {
                break;
            }

            let mut ctx = SearchContext::new(&control, &self.pv_cache, self.config.late_move_reduction);
            let pass = search_root(board, &mut ctx, root_moves.as_mut_slice(), depth);
            nodes += ctx.nodes;

            let Some((score, pv)) = pass.best else {
                break;
            };

            if !pass.complete {
                debug!(depth, score, "keeping partial iteration");
                reported = Some((score, pv, depth));
                break;
            }

            let info = SearchInfo {
                depth,
                nodes,
                score,
                pv: &pv,
                elapsed: control.elapsed(),
            };
            debug!(depth, score, nodes, nps = info.nps(), "iteration complete");
            on_iter(&info);

            self.pv_cache = pv.iter().take(PV_CACHE_LEN).copied().collect();
            reported = Some((score, pv, depth));
        }

        let (score, pv, depth) = match reported {
            Some(line) => line,
            None => {
                // Deadline hit before any root move finished.
                let fallback = root_moves[0];
                debug!(mv = %fallback, "no iteration finished, falling back to first move");
                (evaluate(board), vec![fallback], 0)
            }
        };

        self.pv_cache = pv.iter().take(PV_CACHE_LEN).copied().collect();

        SearchResult {
            best_move: pv.first().copied(),
            score,
            pv,
            nodes,
            depth,
        }
    }
}

/// Search every root move at `depth`, stopping early at the deadline.
fn search_root(board: &mut Board, ctx: &mut SearchContext<'_>, moves: &mut [Move], depth: u32) -> RootPass {
    order_moves(moves, ctx.hint(0, true));

    let mut alpha = -INF;
    let mut best: Option<(i32, Vec<Move>)> = None;

    for (index, &mv) in moves.iter().enumerate() {
        if ctx.control.expired() {
            return RootPass { best, complete: false };
        }

        let on_pv = ctx.pv_hint.first() == Some(&mv);
        let (score, child_pv) = search_move(&mut board.play(mv), ctx, mv, index, depth, 0, alpha, INF, on_pv);

        // The subtree may have been cut short.
        if ctx.control.expired() {
            return RootPass { best, complete: false };
        }

        if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
            let mut pv = Vec::with_capacity(child_pv.len() + 1);
            pv.push(mv);
            pv.extend(child_pv);
            best = Some((score, pv));
        }
        alpha = alpha.max(score);
    }

    RootPass { best, complete: true }
}
