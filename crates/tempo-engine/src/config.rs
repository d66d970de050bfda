//! Search configuration shared by the driver and the protocol layer.

/// Smallest depth accepted for the default search depth.
pub const MIN_DEPTH: u32 = 1;
/// Largest depth accepted for the default search depth.
pub const MAX_DEPTH: u32 = 64;

/// Errors raised when a configuration value is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("depth {depth} is outside {MIN_DEPTH}..={MAX_DEPTH}")]
    DepthOutOfRange { depth: u32 },
}

/// Tunable knobs of the search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Depth used by `go` without `depth` or `movetime`.
    pub default_depth: u32,
    /// Extra plies added to the default depth in late endgames.
    pub endgame_extension: u32,
    /// Game phase at or above which the extension applies.
    pub extension_phase: f32,
    /// Whether late quiet moves are searched at reduced depth first.
    pub late_move_reduction: bool,
}

impl SearchConfig {
    /// Set the default depth, rejecting values outside [`MIN_DEPTH`]..=[`MAX_DEPTH`].
    pub fn set_default_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            return Err(ConfigError::DepthOutOfRange { depth });
        }
        self.default_depth = depth;
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_depth: 6,
            endgame_extension: 1,
            extension_phase: 0.8,
            late_move_reduction: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SearchConfig};

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.default_depth, 6);
        assert_eq!(config.endgame_extension, 1);
        assert!(config.late_move_reduction);
    }

    #[test]
    fn depth_range_is_enforced() {
        let mut config = SearchConfig::default();
        config.set_default_depth(10).unwrap();
        assert_eq!(config.default_depth, 10);
        assert_eq!(
            config.set_default_depth(0),
            Err(ConfigError::DepthOutOfRange { depth: 0 })
        );
        assert!(config.set_default_depth(65).is_err());
        assert_eq!(config.default_depth, 10);
    }
}
