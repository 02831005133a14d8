//! Bridge error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Unknown bridge operation: {0}")]
    UnknownOperation(String),

    #[error("Operation {operation} is not exposed to the {surface} surface")]
    NotExposed {
        operation: &'static str,
        surface: String,
    },

    #[error("Invalid bridge namespace: {0}")]
    InvalidNamespace(String),

    #[error("Notification dispatch failed: {0}")]
    Dispatch(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
