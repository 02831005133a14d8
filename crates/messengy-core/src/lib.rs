//! Messengy Core
//!
//! Configuration and coordination for the Messengy shell. The Tauri layer
//! only wires engine objects to what this crate and its siblings decide.

mod config;
mod error;
mod lifecycle;
mod menu;
mod surfaces;
mod theme;
mod tray;

pub use config::{ShellConfig, UpdateConfig, WindowConfig};
pub use error::CoreError;
pub use lifecycle::{ClosedAction, LifecyclePolicy, ReactivateAction};
pub use menu::MenuAction;
pub use surfaces::SurfacePlan;
pub use theme::ThemePreference;
pub use tray::locate_tray_icon;

// Re-export shell components
pub use messengy_bridge::{
    notification_relay_script, BridgeError, BridgeManifest, BridgeOperation, NotificationRelay,
    NotificationRequest, NotificationSink,
};
pub use messengy_compositor::{
    user_agent_for, Bounds, Compositor, CompositorError, EngineFlags, InitScript, Layout,
    LinkPolicy, LinkTarget, Platform, Size, Surface, SurfaceHost, SurfaceKind, SurfaceSource,
    SurfaceSpec, ZoomLevel,
};
pub use messengy_privacy::{Capability, PermissionDecision, PermissionPolicy};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
