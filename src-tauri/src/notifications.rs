//! OS notification delivery

use messengy_core::{BridgeError, NotificationRequest, NotificationSink};
use tauri::plugin::PermissionState;
use tauri::AppHandle;
use tauri_plugin_notification::NotificationExt;

pub struct TauriNotificationSink {
    app: AppHandle,
}

impl TauriNotificationSink {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl NotificationSink for TauriNotificationSink {
    fn deliver(&self, request: NotificationRequest) -> Result<(), BridgeError> {
        self.app
            .notification()
            .builder()
            .title(request.title)
            .body(request.body)
            .show()
            .map_err(|e| BridgeError::Dispatch(e.to_string()))
    }
}

/// Ask the OS for notification permission once at startup
pub fn request_permission(app: &AppHandle) {
    let app = app.clone();

    tauri::async_runtime::spawn(async move {
        let notification = app.notification();
        match notification.permission_state() {
            Ok(PermissionState::Granted) => {
                tracing::debug!("Notification permission already granted");
            }
            Ok(_) => match notification.request_permission() {
                Ok(state) => tracing::info!(state = ?state, "Notification permission requested"),
                Err(e) => tracing::warn!(error = %e, "Notification permission request failed"),
            },
            Err(e) => tracing::warn!(error = %e, "Failed to read notification permission"),
        }
    });
}
