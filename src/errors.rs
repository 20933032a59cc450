//! Error types for sort key configuration.
//!
//! Keying itself never fails; these only come from parsing designators,
//! matcher names and configuration files.

use thiserror::Error;

/// Errors that can occur while configuring sort key generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortKeyError {
    /// A separator designator other than `.`, `-` or blank.
    #[error("unknown separator designator {designator:?}, expected \".\", \"-\" or blank")]
    UnknownSeparator { designator: String },

    /// A matcher name that does not name one of the six matchers.
    #[error("unknown matcher {name:?}")]
    UnknownMatcher { name: String },

    /// Key width must be positive.
    #[error("sort key width must be at least 1")]
    ZeroWidth,

    /// Configuration text could not be parsed.
    #[error("invalid sort key config: {message}")]
    Config { message: String },
}

impl From<toml::de::Error> for SortKeyError {
    fn from(err: toml::de::Error) -> Self {
        SortKeyError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for sort key configuration.
pub type SortKeyResult<T> = Result<T, SortKeyError>;
