//! Messengy - Tauri Application
//!
//! One frameless window holding two surfaces: a bundled title bar and the
//! remote messenger site. Layout, bridge exposure and permissions are decided
//! by `messengy-core`; this crate binds those decisions to the engine.

mod commands;
mod host;
mod lifecycle;
mod menu;
mod notifications;
mod state;
mod tray;
#[cfg(desktop)]
mod updater;
mod window;

use messengy_core::{EngineFlags, Platform, ShellConfig};
use state::ShellState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    messengy_core::init_logging();

    // Engine switches must be settled before the first surface exists
    let config = ShellConfig::default();
    let flags = EngineFlags::platform_authentication();
    let platform = Platform::current();
    if platform.accepts_browser_args() {
        tracing::info!(args = %flags.to_browser_args(), "Browser engine switches");
    } else {
        tracing::info!(platform = %platform, "Engine switches not supported, using engine defaults");
    }

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_notification::init())
        .setup(move |app| {
            config.validate()?;

            // Store state in Tauri
            app.manage(ShellState::new(app.handle(), config, flags));

            notifications::request_permission(app.handle());

            window::open_main_window(app.handle())?;

            if let Err(e) = menu::install(app.handle()) {
                tracing::error!(error = %e, "Failed to install application menu");
            }

            let state = app.state::<ShellState>();
            tracing::info!(
                granted = ?state.permission_policy().granted(),
                "Permission policy installed on content surface"
            );

            #[cfg(desktop)]
            updater::install(app.handle());

            if let Err(e) = tray::install(app.handle()) {
                tracing::warn!(error = %e, "Tray unavailable");
            }

            tracing::info!("Messengy started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::bridge::bridge_notify,
            commands::bridge::bridge_window_control,
        ])
        .build(tauri::generate_context!())
        .expect("error while building Messengy");

    app.run(lifecycle::on_run_event);
}
