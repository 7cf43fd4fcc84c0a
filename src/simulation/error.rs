//! Error types for map generation and the invasion simulation.

/// Errors raised while generating, reading or writing city maps.
///
/// Moving an alien into a missing road and destroying a city are normal
/// simulation outcomes and never produce an error.
#[derive(Debug, thiserror::Error)]
pub enum InvasionError {
    /// Zero map dimensions or a malformed map file token.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// More names (or grid cells) were requested than the pool holds.
    #[error("requested size is too large: asked for {requested}, only {available} available")]
    RequestTooLarge {
        /// Number of names or cells requested.
        requested: usize,
        /// Size of the backing name pool.
        available: usize,
    },

    /// Reading or writing a map stream failed.
    #[error("map i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the simulation module.
pub type Result<T> = std::result::Result<T, InvasionError>;
