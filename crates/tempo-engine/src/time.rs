//! Search limits: turn UCI `go` parameters into a depth or a time budget.

use std::time::Duration;

use tempo_core::Board;

use crate::config::SearchConfig;
use crate::eval::phase::game_phase;
use crate::search::MAX_ITERATIONS;

/// How long a search may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLimits {
    /// One pass at a fixed depth, without a deadline.
    Depth(u32),
    /// Deepen until the wall-clock budget is spent.
    MoveTime(Duration),
}

/// Resolve `go` parameters into [`SearchLimits`].
///
/// Priority order:
/// 1. `movetime` greater than zero -> `MoveTime`
/// 2. `depth` -> `Depth`
/// 3. otherwise the configured default depth, extended by
///    `endgame_extension` once the game phase reaches `extension_phase`
///
/// Depths are clamped to `1..=MAX_ITERATIONS`.
pub fn limits_from_go(
    depth: Option<u32>,
    movetime: Option<Duration>,
    board: &Board,
    config: &SearchConfig,
) -> SearchLimits {
    if let Some(budget) = movetime.filter(|budget| !budget.is_zero()) {
        return SearchLimits::MoveTime(budget);
    }

    if let Some(depth) = depth {
        return SearchLimits::Depth(depth.clamp(1, MAX_ITERATIONS));
    }

    let mut depth = config.default_depth;
    if game_phase(board) >= config.extension_phase {
        depth = depth.saturating_add(config.endgame_extension);
    }
    SearchLimits::Depth(depth.clamp(1, MAX_ITERATIONS))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempo_core::Board;

    use super::{SearchLimits, limits_from_go};
    use crate::config::SearchConfig;

    const BARE_KINGS_AND_ROOK: &str = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1";

    #[test]
    fn movetime_wins_over_depth() {
        let board = Board::starting_position();
        let limits = limits_from_go(Some(4), Some(Duration::from_millis(50)), &board, &SearchConfig::default());
        assert_eq!(limits, SearchLimits::MoveTime(Duration::from_millis(50)));
    }

    #[test]
    fn zero_movetime_is_ignored() {
        let board = Board::starting_position();
        let limits = limits_from_go(Some(3), Some(Duration::ZERO), &board, &SearchConfig::default());
        assert_eq!(limits, SearchLimits::Depth(3));
    }

    #[test]
    fn explicit_depth_is_at_least_one() {
        let board = Board::starting_position();
        assert_eq!(limits_from_go(Some(0), None, &board, &SearchConfig::default()), SearchLimits::Depth(1));
    }

    #[test]
    fn depths_are_capped() {
        let board: Board = BARE_KINGS_AND_ROOK.parse().unwrap();
        assert_eq!(
            limits_from_go(Some(100_000), None, &board, &SearchConfig::default()),
            SearchLimits::Depth(256)
        );

        let config = SearchConfig {
            default_depth: u32::MAX,
            ..SearchConfig::default()
        };
        assert_eq!(limits_from_go(None, None, &board, &config), SearchLimits::Depth(256));
    }

    #[test]
    fn default_depth_in_the_opening() {
        let board = Board::starting_position();
        assert_eq!(limits_from_go(None, None, &board, &SearchConfig::default()), SearchLimits::Depth(6));
    }

    #[test]
    fn endgame_extends_default_depth() {
        let board: Board = BARE_KINGS_AND_ROOK.parse().unwrap();
        assert_eq!(limits_from_go(None, None, &board, &SearchConfig::default()), SearchLimits::Depth(7));

        let config = SearchConfig {
            endgame_extension: 0,
            ..SearchConfig::default()
        };
        assert_eq!(limits_from_go(None, None, &board, &config), SearchLimits::Depth(6));
    }
}
