//! Search and evaluation for tempo.

pub mod config;
pub mod eval;
pub mod search;
pub mod time;

pub use config::{ConfigError, SearchConfig};
pub use eval::evaluate;
pub use search::control::SearchControl;
pub use search::{SearchInfo, SearchResult, Searcher};
pub use time::{SearchLimits, limits_from_go};
