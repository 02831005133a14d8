//! Bridge commands

use messengy_core::{BridgeError, BridgeManifest, BridgeOperation, NotificationRequest};
use tauri::{AppHandle, Manager, Webview, Window};

use super::CommandResult;
use crate::host::surface_kind;
use crate::state::ShellState;

/// Fire-and-forget: failures are logged and never reach the page
#[tauri::command]
pub fn bridge_notify(app: AppHandle, webview: Webview, title: String, body: String) {
    if let Err(e) = authorize(&webview, BridgeOperation::Notify) {
        tracing::warn!(surface = %webview.label(), error = %e, "Rejected notification request");
        return;
    }

    let Some(state) = app.try_state::<ShellState>() else {
        tracing::warn!("Notification requested before shell state was ready");
        return;
    };

    state.relay().relay(NotificationRequest::new(title, body));
}

#[tauri::command]
pub fn bridge_window_control(
    window: Window,
    webview: Webview,
    operation: String,
) -> CommandResult<()> {
    let operation = match BridgeOperation::from_name(&operation) {
        Ok(op) => op,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    if let Err(e) = authorize(&webview, operation) {
        tracing::warn!(surface = %webview.label(), error = %e, "Rejected window control");
        return CommandResult::err(e.to_string());
    }

    let result = match operation {
        BridgeOperation::Minimize => window.minimize(),
        BridgeOperation::ToggleMaximize => match window.is_maximized() {
            Ok(true) => window.unmaximize(),
            Ok(false) => window.maximize(),
            Err(e) => Err(e),
        },
        BridgeOperation::Close => window.close(),
        BridgeOperation::Notify => {
            return CommandResult::err(format!("{} is not a window control", operation.name()))
        }
    };

    match result {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

fn authorize(webview: &Webview, operation: BridgeOperation) -> Result<(), BridgeError> {
    let surface = surface_kind(webview).ok_or_else(|| BridgeError::NotExposed {
        operation: operation.name(),
        surface: webview.label().to_string(),
    })?;
    BridgeManifest::for_surface(surface).authorize(operation)
}
