//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the MineCode client.
#[derive(Error, Debug)]
pub enum Error {
    /// The server process could not be launched.
    #[error("spawn error: {0}")]
    Spawn(String),

    /// Transport-level failure on the channel (closed pipes, missing handles).
    #[error("channel error: {0}")]
    Channel(String),

    /// The server sent something that violates the JSON-RPC message shape.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A JSON-RPC `error` member reported by the server.
    #[error("server error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn spawn(msg: impl Into<String>) -> Self {
        Self::Spawn(msg.into())
    }

    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }
}
