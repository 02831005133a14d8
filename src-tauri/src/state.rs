//! Application state management
use messengy_core::{
    Compositor, CoreError, EngineFlags, LifecyclePolicy, NotificationRelay, PermissionPolicy,
    Platform, Result, ShellConfig, ThemePreference,
};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tauri::AppHandle;

use crate::host::TauriSurfaceHost;
use crate::notifications::TauriNotificationSink;

pub type ShellCompositor = Compositor<TauriSurfaceHost>;

/// Thread-safe shell state shared by setup, commands and event handlers
pub struct ShellState {
    config: ShellConfig,
    platform: Platform,
    flags: EngineFlags,
    policy: PermissionPolicy,
    lifecycle: LifecyclePolicy,
    compositor: RwLock<Option<Arc<ShellCompositor>>>,
    theme: RwLock<ThemePreference>,
    relay: NotificationRelay<TauriNotificationSink>,
}

impl ShellState {
    pub fn new(app: &AppHandle, config: ShellConfig, flags: EngineFlags) -> Self {
        let platform = Platform::current();

        Self {
            config,
            platform,
            flags,
            policy: PermissionPolicy::content_surface(),
            lifecycle: LifecyclePolicy::for_platform(platform),
            compositor: RwLock::new(None),
            theme: RwLock::new(ThemePreference::default()),
            relay: NotificationRelay::new(TauriNotificationSink::new(app.clone())),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn engine_flags(&self) -> &EngineFlags {
        &self.flags
    }

    pub fn permission_policy(&self) -> &PermissionPolicy {
        &self.policy
    }

    pub fn lifecycle(&self) -> LifecyclePolicy {
        self.lifecycle
    }

    pub fn relay(&self) -> &NotificationRelay<TauriNotificationSink> {
        &self.relay
    }

    /// Runs `f` against the live compositor. The lock is released before `f`
    /// runs so engine callbacks can re-enter the state.
    pub fn with_compositor<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ShellCompositor) -> Result<T>,
    {
        let compositor = self.compositor.read().clone();
        match compositor {
            Some(compositor) => f(&compositor),
            None => Err(CoreError::NotInitialized),
        }
    }

    pub fn set_compositor(&self, compositor: Arc<ShellCompositor>) {
        *self.compositor.write() = Some(compositor);
    }

    /// Drops the compositor if it is still the one `stale` points at
    pub fn release_compositor(&self, stale: &Weak<ShellCompositor>) {
        let mut guard = self.compositor.write();
        let is_current = guard
            .as_ref()
            .is_some_and(|current| std::ptr::eq(Arc::as_ptr(current), stale.as_ptr()));
        if is_current {
            *guard = None;
        }
    }

    pub fn theme(&self) -> ThemePreference {
        *self.theme.read()
    }

    pub fn set_theme(&self, theme: ThemePreference) {
        *self.theme.write() = theme;
    }
}
