//! Background update check

use messengy_core::NotificationRequest;
use tauri::{AppHandle, Manager};
use tauri_plugin_updater::UpdaterExt;
use url::Url;

use crate::state::ShellState;

/// Register the updater plugin and start one check in the background
pub fn install(app: &AppHandle) {
    if let Err(err) = app.plugin(tauri_plugin_updater::Builder::new().build()) {
        tracing::error!(error = %err, "Failed to register updater plugin");
        return;
    }

    let update = app.state::<ShellState>().config().update.clone();
    let Some(endpoint) = update.endpoint else {
        tracing::info!("No update endpoint configured, skipping update check");
        return;
    };

    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        if let Err(e) = check_and_install(&app, endpoint, update.pubkey).await {
            tracing::warn!(error = %e, "Update check failed");
        }
    });
}

async fn check_and_install(
    app: &AppHandle,
    endpoint: Url,
    pubkey: Option<String>,
) -> Result<(), tauri_plugin_updater::Error> {
    let mut builder = app.updater_builder().endpoints(vec![endpoint])?;
    if let Some(pubkey) = pubkey {
        builder = builder.pubkey(pubkey);
    }

    let Some(update) = builder.build()?.check().await? else {
        tracing::info!("Messengy is up to date");
        return Ok(());
    };

    tracing::info!(
        current = %update.current_version,
        version = %update.version,
        "Update available, downloading"
    );
    update.download_and_install(|_, _| {}, || {}).await?;
    tracing::info!(version = %update.version, "Update installed");

    let state = app.state::<ShellState>();
    state.relay().relay(NotificationRequest::new(
        format!("{} {} is ready", state.config().app_name, update.version),
        "The update will be used the next time Messengy starts.",
    ));

    Ok(())
}
