//! Compositor error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompositorError {
    #[error("Invalid zoom factor: {0}")]
    InvalidZoom(f64),

    #[error("Surface host error: {0}")]
    Host(String),

    #[error("Surface not attached: {0}")]
    NotAttached(&'static str),
}
