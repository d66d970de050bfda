//! UCI protocol errors.

use tempo_core::FenError;
use tempo_engine::ConfigError;

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN `{fen}`: {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        source: FenError,
    },

    /// A `go` parameter was given without a value.
    #[error("missing value for go parameter `{param}`")]
    MissingGoValue { param: String },

    /// A `go` parameter value is not a number.
    #[error("invalid value `{value}` for go parameter `{param}`")]
    InvalidGoValue { param: String, value: String },

    /// `setoption` without a `name` token.
    #[error("malformed setoption command: missing name")]
    MalformedOption,

    /// An option value could not be parsed or is out of range.
    #[error("invalid value `{value}` for option `{name}`")]
    InvalidOptionValue { name: String, value: String },

    /// The configuration rejected an option value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
