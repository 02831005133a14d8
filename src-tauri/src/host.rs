//! Tauri binding for the compositor
//!
//! Each surface is a child webview of the main window. The compositor decides
//! where they go; this module only talks to the engine.

use messengy_core::{
    Bounds, CompositorError, LinkPolicy, LinkTarget, Size, Surface, SurfaceHost, SurfaceKind,
    SurfaceSource, SurfaceSpec,
};
use std::path::PathBuf;
use tauri::webview::{NewWindowResponse, WebviewBuilder};
use tauri::{AppHandle, LogicalPosition, LogicalSize, Manager, Webview, WebviewUrl, Window};
use tauri_plugin_opener::OpenerExt;
use url::Url;

pub struct TauriSurfaceHost {
    app: AppHandle,
    window: Window,
}

impl TauriSurfaceHost {
    pub fn new(app: AppHandle, window: Window) -> Self {
        Self { app, window }
    }

    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor().unwrap_or(1.0)
    }
}

pub struct TauriSurface(Webview);

impl Surface for TauriSurface {
    fn set_bounds(&self, bounds: Bounds) -> Result<(), CompositorError> {
        self.0
            .set_position(LogicalPosition::new(bounds.x, bounds.y))
            .map_err(host_error)?;
        self.0
            .set_size(LogicalSize::new(bounds.width, bounds.height))
            .map_err(host_error)
    }

    fn set_zoom(&self, factor: f64) -> Result<(), CompositorError> {
        self.0.set_zoom(factor).map_err(host_error)
    }
}

impl SurfaceHost for TauriSurfaceHost {
    type Surface = TauriSurface;

    fn content_size(&self) -> Result<Size, CompositorError> {
        let size = self
            .window
            .inner_size()
            .map_err(host_error)?
            .to_logical::<f64>(self.scale_factor());
        Ok(Size::new(size.width, size.height))
    }

    fn attach(&self, spec: &SurfaceSpec, bounds: Bounds) -> Result<TauriSurface, CompositorError> {
        let url = match &spec.source {
            SurfaceSource::LocalDocument(path) => WebviewUrl::App(path.into()),
            SurfaceSource::Remote(url) => WebviewUrl::External(url.clone()),
        };

        let mut builder = WebviewBuilder::new(spec.kind.label(), url)
            .transparent(spec.transparent)
            .zoom_hotkeys_enabled(false);

        if let Some(user_agent) = &spec.user_agent {
            builder = builder.user_agent(user_agent);
        }

        for script in &spec.init_scripts {
            builder = if script.all_frames {
                builder.initialization_script_for_all_frames(script.source.as_str())
            } else {
                builder.initialization_script(script.source.as_str())
            };
        }

        #[cfg(windows)]
        {
            if let Some(args) = &spec.browser_args {
                builder = builder.additional_browser_args(args);
            }
        }

        if let SurfaceSource::Remote(url) = &spec.source {
            if let Some(data_directory) = webview_data_directory(&self.app, url) {
                builder = builder.data_directory(data_directory);
            }
        }

        if let Some(policy) = &spec.link_policy {
            builder = with_link_policy(builder, &self.app, policy);
        }

        let webview = self
            .window
            .add_child(
                builder,
                LogicalPosition::new(bounds.x, bounds.y),
                LogicalSize::new(bounds.width, bounds.height),
            )
            .map_err(host_error)?;

        tracing::info!(
            surface = %spec.kind,
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            "Surface attached"
        );

        Ok(TauriSurface(webview))
    }
}

fn with_link_policy(
    builder: WebviewBuilder<tauri::Wry>,
    app: &AppHandle,
    policy: &LinkPolicy,
) -> WebviewBuilder<tauri::Wry> {
    let navigation_policy = policy.clone();
    let navigation_app = app.clone();
    let new_window_policy = policy.clone();
    let new_window_app = app.clone();

    builder
        .on_navigation(move |url| match navigation_policy.classify(url) {
            LinkTarget::Surface => true,
            LinkTarget::External => {
                open_external(&navigation_app, url);
                false
            }
            LinkTarget::Blocked => {
                tracing::warn!(url = %url, "Blocked navigation");
                false
            }
        })
        .on_new_window(move |url, _features| match new_window_policy.classify(&url) {
            LinkTarget::Surface => NewWindowResponse::Allow,
            LinkTarget::External => {
                open_external(&new_window_app, &url);
                NewWindowResponse::Deny
            }
            LinkTarget::Blocked => {
                tracing::warn!(url = %url, "Blocked popup");
                NewWindowResponse::Deny
            }
        })
}

fn open_external(app: &AppHandle, url: &Url) {
    tracing::debug!(url = %url, "Opening in system browser");
    if let Err(e) = app.opener().open_url(url.as_str(), None::<&str>) {
        tracing::warn!(url = %url, error = %e, "Failed to open external link");
    }
}

/// Storage partition for a remote surface, keyed by host
fn webview_data_directory(app: &AppHandle, url: &Url) -> Option<PathBuf> {
    let base = app.path().app_data_dir().ok()?;
    let host = url
        .host_str()
        .map(|h| h.to_lowercase())
        .unwrap_or_else(|| "blank".to_string());

    let safe: String = host
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect();

    Some(base.join("webview-partitions").join(safe))
}

fn host_error(e: tauri::Error) -> CompositorError {
    CompositorError::Host(e.to_string())
}

pub fn surface_kind(webview: &Webview) -> Option<SurfaceKind> {
    SurfaceKind::from_label(webview.label())
}
