//! Main window construction
//!
//! Builds the frameless translucent window, then hands it to the compositor
//! which lays the chrome and content surfaces over it.

use messengy_core::{Compositor, ShellConfig, SurfacePlan};
use std::sync::{Arc, Weak};
use tauri::utils::config::WindowEffectsConfig;
use tauri::window::{Effect, EffectState, WindowBuilder};
use tauri::{AppHandle, Manager, Window, WindowEvent};

use crate::host::TauriSurfaceHost;
use crate::state::{ShellCompositor, ShellState};

pub const MAIN_WINDOW_LABEL: &str = "main";

/// Create the main window with both surfaces attached
pub fn open_main_window(app: &AppHandle) -> Result<(), String> {
    let state = app.state::<ShellState>();
    let config = state.config();

    let plan = SurfacePlan::build(
        config,
        state.platform(),
        state.engine_flags(),
        state.permission_policy(),
    )
    .map_err(|e| e.to_string())?;

    let window = build_window(app, config)?;
    let host = TauriSurfaceHost::new(app.clone(), window.clone());
    let compositor = Compositor::initialize(host, config.chrome_height, &plan.chrome, &plan.content)
        .map_err(|e| format!("failed to compose main window: {e}"))?;
    let compositor = Arc::new(compositor);

    state.set_compositor(Arc::clone(&compositor));
    watch_window(app, &window, Arc::downgrade(&compositor));

    window.show().map_err(|e| e.to_string())?;
    let _ = window.set_focus();

    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        "Main window opened"
    );

    Ok(())
}

/// Bring the main window forward, creating it if it was destroyed
pub fn show_main_window(app: &AppHandle) {
    let Some(window) = app.get_window(MAIN_WINDOW_LABEL) else {
        if let Err(e) = open_main_window(app) {
            tracing::error!(error = %e, "Failed to recreate main window");
        }
        return;
    };

    let _ = window.show();
    let _ = window.unminimize();
    let _ = window.set_focus();
}

pub fn toggle_main_window(app: &AppHandle) {
    let Some(window) = app.get_window(MAIN_WINDOW_LABEL) else {
        show_main_window(app);
        return;
    };

    let is_visible = window.is_visible().unwrap_or(false);
    let is_minimized = window.is_minimized().unwrap_or(false);

    if !is_visible || is_minimized {
        show_main_window(app);
        return;
    }

    let _ = window.hide();
}

fn build_window(app: &AppHandle, config: &ShellConfig) -> Result<Window, String> {
    let size = &config.window;

    let builder = WindowBuilder::new(app, MAIN_WINDOW_LABEL)
        .title(&config.app_name)
        .inner_size(size.width, size.height)
        .min_inner_size(size.min_width, size.min_height)
        .center()
        .transparent(true)
        .shadow(true)
        .effects(WindowEffectsConfig {
            effects: vec![Effect::UnderWindowBackground, Effect::Mica],
            state: Some(EffectState::Active),
            radius: Some(size.corner_radius),
            color: None,
        })
        .visible(false);

    // Native traffic lights stay, drawn over the chrome surface
    #[cfg(target_os = "macos")]
    let builder = builder
        .title_bar_style(tauri::TitleBarStyle::Overlay)
        .hidden_title(true);

    #[cfg(not(target_os = "macos"))]
    let builder = builder.decorations(false);

    builder.build().map_err(|e| format!("failed to build main window: {e}"))
}

fn watch_window(app: &AppHandle, window: &Window, compositor: Weak<ShellCompositor>) {
    let app = app.clone();

    window.on_window_event(move |event| match event {
        WindowEvent::Resized(size) => {
            let Some(compositor) = compositor.upgrade() else {
                return;
            };
            let logical = size.to_logical::<f64>(compositor.host().scale_factor());
            if let Err(e) = compositor.on_resize(logical.width, logical.height) {
                tracing::warn!(error = %e, "Failed to relayout surfaces");
            }
        }
        WindowEvent::ScaleFactorChanged { .. } => {
            if let Some(compositor) = compositor.upgrade() {
                if let Err(e) = compositor.refresh() {
                    tracing::warn!(error = %e, "Failed to relayout surfaces");
                }
            }
        }
        WindowEvent::Destroyed => {
            app.state::<ShellState>().release_compositor(&compositor);
            tracing::info!("Main window destroyed");
        }
        _ => {}
    });
}
