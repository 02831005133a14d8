//! Tray icon toggling main window visibility

use messengy_core::locate_tray_icon;
use tauri::image::Image;
use tauri::menu::{Menu, MenuItem, PredefinedMenuItem};
use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};
use tauri::{AppHandle, Manager};

use crate::state::ShellState;
use crate::window;

const TRAY_ID: &str = "main-tray";
const TRAY_MENU_TOGGLE_ID: &str = "tray.toggle";
const TRAY_MENU_QUIT_ID: &str = "tray.quit";

/// Install the tray icon. Returns `Ok(false)` when no icon file ships with the app.
pub fn install(app: &AppHandle) -> Result<bool, String> {
    let state = app.state::<ShellState>();
    let config = state.config();

    let mut roots = Vec::new();
    if let Ok(dir) = app.path().resource_dir() {
        roots.push(dir);
    }
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
    {
        roots.push(dir);
    }

    let Some(icon_path) = locate_tray_icon(&roots, &config.tray_icon) else {
        tracing::info!(icon = %config.tray_icon.display(), "Tray icon not bundled, skipping tray");
        return Ok(false);
    };

    let icon = Image::from_path(&icon_path).map_err(|e| format!("failed to load tray icon: {e}"))?;

    // Linux trays only deliver menu events, so toggling is also on the menu
    let toggle_item = MenuItem::with_id(app, TRAY_MENU_TOGGLE_ID, "Show/Hide", true, None::<&str>)
        .map_err(|e| format!("failed to create tray toggle menu item: {e}"))?;
    let quit_item = MenuItem::with_id(app, TRAY_MENU_QUIT_ID, "Quit", true, None::<&str>)
        .map_err(|e| format!("failed to create tray quit menu item: {e}"))?;
    let separator = PredefinedMenuItem::separator(app)
        .map_err(|e| format!("failed to create tray menu separator: {e}"))?;
    let menu = Menu::with_items(app, &[&toggle_item, &separator, &quit_item])
        .map_err(|e| format!("failed to create tray menu: {e}"))?;

    TrayIconBuilder::with_id(TRAY_ID)
        .icon(icon)
        .tooltip(&config.app_name)
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| match event.id().as_ref() {
            TRAY_MENU_TOGGLE_ID => window::toggle_main_window(app),
            TRAY_MENU_QUIT_ID => app.exit(0),
            _ => {}
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                window::toggle_main_window(tray.app_handle());
            }
        })
        .build(app)
        .map_err(|e| format!("failed to build tray icon: {e}"))?;

    tracing::info!(icon = %icon_path.display(), "Tray icon installed");

    Ok(true)
}
