//! Messengy View Compositor
//!
//! One native window owns two independently rendered surfaces:
//! - Chrome surface: fixed-height title band loaded from a local document
//! - Content surface: the remote site, filling the rest of the window
//!
//! The compositor never talks to a browser engine directly. Hosts implement
//! [`SurfaceHost`] and the compositor keeps both surfaces tiled.

mod compositor;
mod engine;
mod error;
mod layout;
mod navigation;
mod platform;
mod surface;
mod user_agent;
mod zoom;

pub use compositor::Compositor;
pub use engine::EngineFlags;
pub use error::CompositorError;
pub use layout::{Bounds, Layout, Size};
pub use navigation::{LinkPolicy, LinkTarget};
pub use platform::Platform;
pub use surface::{InitScript, Surface, SurfaceHost, SurfaceKind, SurfaceSource, SurfaceSpec};
pub use user_agent::user_agent_for;
pub use zoom::ZoomLevel;

pub type Result<T> = std::result::Result<T, CompositorError>;
