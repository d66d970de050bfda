//! Principal variation search with late move reductions.

use tempo_core::{Board, Move, generate_legal_moves};

use crate::evaluate;
use crate::search::control::SearchControl;
use crate::search::ordering::order_moves;

/// Score bound used for the root window: `(-INF, INF)`.
pub const INF: i32 = i32::MAX;

/// Base magnitude of a checkmate score.
pub const MATE_SCORE: i32 = 1_000_000;

/// Added to the mate score per ply of remaining depth, so nearer mates score higher.
pub const MATE_DEPTH_BONUS: i32 = 100;

/// Scores at or beyond this magnitude announce a forced mate.
pub const MATE_THRESHOLD: i32 = MATE_SCORE;

/// Smallest depth at which late moves may be reduced.
const LMR_MIN_DEPTH: u32 = 3;
/// Index of the first move eligible for reduction.
const LMR_FIRST_INDEX: usize = 4;
/// Index from which the reduction grows to two plies.
const LMR_DEEP_INDEX: usize = 8;

/// Per-`go` search state threaded through the recursion.
pub struct SearchContext<'a> {
    /// Nodes visited so far.
    pub nodes: u64,
    pub control: &'a SearchControl,
    /// Principal variation of the previous search, used as an ordering hint.
    pub pv_hint: &'a [Move],
    pub late_move_reduction: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(control: &'a SearchControl, pv_hint: &'a [Move], late_move_reduction: bool) -> Self {
        Self {
            nodes: 0,
            control,
            pv_hint,
            late_move_reduction,
        }
    }

    /// PV hint for the node at `ply`, if the path to it followed the cached line.
    #[inline]
    pub fn hint(&self, ply: usize, on_pv: bool) -> Option<Move> {
        if on_pv { self.pv_hint.get(ply).copied() } else { None }
    }
}

/// Score of a node without legal moves: mate if in check, otherwise stalemate.
pub fn terminal_score(board: &Board, depth: u32) -> i32 {
    if board.in_check() {
        let distance = i32::try_from(depth).unwrap_or(i32::MAX).saturating_mul(MATE_DEPTH_BONUS);
        -(MATE_SCORE.saturating_add(distance))
    } else {
        0
    }
}

/// Plies by which the move at `index` is reduced.
fn reduction(ctx: &SearchContext<'_>, mv: Move, index: usize, depth: u32) -> u32 {
    if !ctx.late_move_reduction || depth < LMR_MIN_DEPTH || index < LMR_FIRST_INDEX || !mv.is_quiet() {
        return 0;
    }
    if index < LMR_DEEP_INDEX { 1 } else { 2 }
}

/// Search a child and flip its result to the parent's perspective.
#[inline]
fn child(
    board: &mut Board,
    ctx: &mut SearchContext<'_>,
    depth: u32,
    ply: usize,
    alpha: i32,
    beta: i32,
    on_pv: bool,
) -> (i32, Vec<Move>) {
    let (score, pv) = pvs(board, ctx, depth, ply, alpha, beta, on_pv);
    (-score, pv)
}

/// Search the position after `mv`, which `board` already reflects.
///
/// The first move gets the full window. Later moves are tried with a null
/// window, at reduced depth when eligible. A reduced search that beats alpha
/// is repeated at full depth, and a score landing strictly inside the window
/// is re-searched with the full window.
#[allow(clippy::too_many_arguments)]
pub(crate) fn search_move(
    board: &mut Board,
    ctx: &mut SearchContext<'_>,
    mv: Move,
    index: usize,
    depth: u32,
    ply: usize,
    alpha: i32,
    beta: i32,
    on_pv: bool,
) -> (i32, Vec<Move>) {
    let full = depth - 1;
    if index == 0 {
        return child(board, ctx, full, ply + 1, -beta, -alpha, on_pv);
    }

    let reduced = full.saturating_sub(reduction(ctx, mv, index, depth));
    let (mut score, mut pv) = child(board, ctx, reduced, ply + 1, -alpha - 1, -alpha, on_pv);
    let mut full_depth = reduced == full;

    if !full_depth && score > alpha {
        (score, pv) = child(board, ctx, full, ply + 1, -alpha - 1, -alpha, on_pv);
        full_depth = true;
    }

    if score > alpha && score < beta {
        // A full-depth fail-high is a lower bound and can narrow the window.
        let floor = if full_depth { score } else { alpha };
        (score, pv) = child(board, ctx, full, ply + 1, -beta, -floor, on_pv);
    }

    (score, pv)
}

/// Fail-soft principal variation search.
///
/// Returns the score from the side to move's perspective and the principal
/// variation below this node. When the time budget runs out the static
/// evaluation is returned and the remaining moves are skipped.
pub fn pvs(
    board: &mut Board,
    ctx: &mut SearchContext<'_>,
    depth: u32,
    ply: usize,
    mut alpha: i32,
    beta: i32,
    on_pv: bool,
) -> (i32, Vec<Move>) {
    ctx.nodes += 1;

    if depth == 0 || ctx.control.expired() {
        return (evaluate(board), Vec::new());
    }

    let mut moves = generate_legal_moves(board);
    if moves.is_empty() {
        return (terminal_score(board, depth), Vec::new());
    }

    let hint = ctx.hint(ply, on_pv);
    order_moves(moves.as_mut_slice(), hint);

    let mut best = i32::MIN;
    let mut best_pv = Vec::new();

    for (index, mv) in moves.into_iter().enumerate() {
        if index > 0 && ctx.control.expired() {
            break;
        }

        let follows_pv = hint == Some(mv);
        let (score, child_pv) = search_move(&mut board.play(mv), ctx, mv, index, depth, ply, alpha, beta, follows_pv);

        if score > best {
            best = score;
            best_pv.clear();
            best_pv.push(mv);
            best_pv.extend(child_pv);
        }
        alpha = alpha.max(best);
        if alpha >= beta {
            break;
        }
    }

    (best, best_pv)
}

#[cfg(test)]
mod tests {
    use tempo_core::Board;

    use super::{INF, MATE_SCORE, SearchContext, pvs, terminal_score};
    use crate::search::control::SearchControl;

    fn search(fen: &str, depth: u32) -> (i32, Vec<String>) {
        let mut board: Board = fen.parse().unwrap();
        let control = SearchControl::new_infinite();
        let mut ctx = SearchContext::new(&control, &[], true);
        let (score, pv) = pvs(&mut board, &mut ctx, depth, 0, -INF, INF, false);
        (score, pv.iter().map(|mv| mv.to_uci()).collect())
    }

    #[test]
    fn mate_in_one_is_found() {
        let (score, pv) = search("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4", 2);
        assert_eq!(pv.first().map(String::as_str), Some("h5f7"));
        assert_eq!(score, MATE_SCORE + 100);
    }

    #[test]
    fn terminal_scores() {
        let mated: Board = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(terminal_score(&mated, 3), -(MATE_SCORE + 300));
        let stalemate: Board = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(terminal_score(&stalemate, 3), 0);
    }

    #[test]
    fn terminal_score_saturates_on_huge_depth() {
        let mated: Board = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(terminal_score(&mated, u32::MAX), -i32::MAX);
        assert!(terminal_score(&mated, 30_000_000) < terminal_score(&mated, 3));
    }

    #[test]
    fn depth_zero_is_static_eval() {
        let (score, pv) = search(tempo_core::STARTING_FEN, 0);
        assert_eq!(score, 0);
        assert!(pv.is_empty());
    }

    #[test]
    fn expired_budget_returns_immediately() {
        let mut board = Board::starting_position();
        let control = SearchControl::new_timed(std::time::Duration::ZERO);
        let mut ctx = SearchContext::new(&control, &[], true);
        let (_, pv) = pvs(&mut board, &mut ctx, 8, 0, -INF, INF, false);
        assert!(pv.is_empty());
        assert_eq!(ctx.nodes, 1);
        assert_eq!(board, Board::starting_position());
    }
}
