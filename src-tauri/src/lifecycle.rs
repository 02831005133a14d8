//! Run loop events: last window closed and dock reactivation

use messengy_core::ClosedAction;
use tauri::{AppHandle, Manager, RunEvent};

use crate::state::ShellState;

pub fn on_run_event(app: &AppHandle, event: RunEvent) {
    match event {
        // No exit code means the last window went away rather than app.exit()
        RunEvent::ExitRequested {
            code: None, api, ..
        } => {
            let state = app.state::<ShellState>();
            if state.lifecycle().on_all_windows_closed() == ClosedAction::StayResident {
                api.prevent_exit();
                tracing::info!("All windows closed, staying resident");
            }
        }
        RunEvent::Exit => {
            let state = app.state::<ShellState>();
            tracing::info!(
                delivered = state.relay().delivered(),
                failed = state.relay().failed(),
                "Messengy exiting"
            );
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen {
            has_visible_windows,
            ..
        } => on_reopen(app, has_visible_windows),
        _ => {}
    }
}

#[cfg(target_os = "macos")]
fn on_reopen(app: &AppHandle, has_visible_windows: bool) {
    use messengy_core::ReactivateAction;

    let state = app.state::<ShellState>();
    let open_windows = app.windows().len();

    match state.lifecycle().on_reactivate(open_windows, has_visible_windows) {
        ReactivateAction::Recreate => {
            if let Err(e) = crate::window::open_main_window(app) {
                tracing::error!(error = %e, "Failed to recreate main window");
            }
        }
        ReactivateAction::Show => crate::window::show_main_window(app),
        ReactivateAction::Nothing => {}
    }
}
