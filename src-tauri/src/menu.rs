//! Application menu

use messengy_core::{MenuAction, SurfaceKind, ThemePreference};
use tauri::menu::{AboutMetadata, Menu, MenuItemBuilder, SubmenuBuilder};
use tauri::{AppHandle, Manager, Theme, Wry};

use crate::state::ShellState;

pub fn install(app: &AppHandle) -> tauri::Result<()> {
    let menu = build(app)?;
    app.set_menu(menu)?;
    app.on_menu_event(|app, event| handle(app, event.id().as_ref()));
    Ok(())
}

fn build(app: &AppHandle) -> tauri::Result<Menu<Wry>> {
    let app_name = app.state::<ShellState>().config().app_name.clone();

    let about = AboutMetadata {
        name: Some(app_name.clone()),
        version: Some(app.package_info().version.to_string()),
        ..Default::default()
    };

    let theme = SubmenuBuilder::new(app, "Theme")
        .item(&action_item(app, MenuAction::SetTheme(ThemePreference::Light))?)
        .item(&action_item(app, MenuAction::SetTheme(ThemePreference::Dark))?)
        .item(&action_item(app, MenuAction::SetTheme(ThemePreference::System))?)
        .build()?;

    let app_menu = SubmenuBuilder::new(app, &app_name)
        .about(Some(about))
        .separator()
        .item(&theme)
        .separator()
        .item(&action_item(app, MenuAction::Quit)?)
        .build()?;

    #[cfg(target_os = "macos")]
    let edit = SubmenuBuilder::new(app, "Edit").undo().redo();

    // Predefined undo/redo only exist on macOS
    #[cfg(not(target_os = "macos"))]
    let edit = SubmenuBuilder::new(app, "Edit")
        .item(&action_item(app, MenuAction::Undo)?)
        .item(&action_item(app, MenuAction::Redo)?);

    let edit = edit
        .separator()
        .cut()
        .copy()
        .paste()
        .select_all()
        .build()?;

    let view = SubmenuBuilder::new(app, "View")
        .item(&action_item(app, MenuAction::ZoomIn)?)
        .item(&action_item(app, MenuAction::ZoomOut)?)
        .item(&action_item(app, MenuAction::ZoomReset)?)
        .build()?;

    Menu::with_items(app, &[&app_menu, &edit, &view])
}

fn action_item(app: &AppHandle, action: MenuAction) -> tauri::Result<tauri::menu::MenuItem<Wry>> {
    let mut builder = MenuItemBuilder::with_id(action.id(), action.label());
    if let Some(accelerator) = action.accelerator() {
        builder = builder.accelerator(accelerator);
    }
    builder.build(app)
}

fn handle(app: &AppHandle, id: &str) {
    let Some(action) = MenuAction::from_id(id) else {
        return;
    };

    let state = app.state::<ShellState>();
    let zoom = match action {
        MenuAction::SetTheme(preference) => {
            apply_theme(app, &state, preference);
            return;
        }
        MenuAction::Quit => {
            tracing::info!("Quit requested from menu");
            app.exit(0);
            return;
        }
        MenuAction::Undo | MenuAction::Redo => {
            run_edit_command(app, action);
            return;
        }
        MenuAction::ZoomIn => state.with_compositor(|c| Ok(c.zoom_in()?)),
        MenuAction::ZoomOut => state.with_compositor(|c| Ok(c.zoom_out()?)),
        MenuAction::ZoomReset => state.with_compositor(|c| Ok(c.reset_zoom()?)),
    };

    match zoom {
        Ok(factor) => tracing::debug!(factor, "Content zoom changed"),
        Err(e) => tracing::warn!(error = %e, "Zoom change failed"),
    }
}

fn run_edit_command(app: &AppHandle, action: MenuAction) {
    let Some(command) = action.edit_command() else {
        return;
    };
    let Some(webview) = app.get_webview(SurfaceKind::Content.label()) else {
        return;
    };

    let script = format!("document.execCommand('{command}')");
    if let Err(e) = webview.eval(script.as_str()) {
        tracing::warn!(command, error = %e, "Edit command failed");
    }
}

fn apply_theme(app: &AppHandle, state: &ShellState, preference: ThemePreference) {
    if state.theme() == preference {
        return;
    }
    state.set_theme(preference);
    app.set_theme(platform_theme_for(preference));
    tracing::info!(theme = %preference, "Theme changed");
}

fn platform_theme_for(preference: ThemePreference) -> Option<Theme> {
    match preference {
        ThemePreference::Light => Some(Theme::Light),
        ThemePreference::Dark => Some(Theme::Dark),
        ThemePreference::System => None,
    }
}
