//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Compositor error: {0}")]
    Compositor(#[from] messengy_compositor::CompositorError),

    #[error("Bridge error: {0}")]
    Bridge(#[from] messengy_bridge::BridgeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shell not initialized")]
    NotInitialized,
}
