//! Common error types for PeerView

use thiserror::Error;

/// Common result type for PeerView operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the PeerView crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Legacy timestamp that fits none of the accepted layouts
    #[error("Invalid timestamp: {0}")]
    Timestamp(String),
}
