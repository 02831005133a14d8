//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::error::CoreError;
use crate::Result;

const CONTENT_URL: &str = "https://www.messenger.com/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Corner radius of the translucent backdrop
    pub corner_radius: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 820.0,
            min_width: 900.0,
            min_height: 600.0,
            corner_radius: 12.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// Update manifest endpoint; no endpoint disables the update check
    pub endpoint: Option<Url>,
    /// Minisign public key the update signature is verified against
    pub pubkey: Option<String>,
}

impl UpdateConfig {
    /// Values baked in at build time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("MESSENGY_UPDATE_ENDPOINT"),
            option_env!("MESSENGY_UPDATE_PUBKEY"),
        )
    }

    fn from_values(endpoint: Option<&str>, pubkey: Option<&str>) -> Self {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| match Url::parse(s) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!(endpoint = %s, error = %e, "Ignoring invalid update endpoint");
                    None
                }
            });
        let pubkey = pubkey
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self { endpoint, pubkey }
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Product name used for the tray tooltip and notifications
    pub app_name: String,
    /// Site shown in the content surface
    pub content_url: String,
    /// Bundled document shown in the chrome surface
    pub chrome_document: String,
    /// Height of the chrome band
    pub chrome_height: f64,
    pub window: WindowConfig,
    /// Tray icon, relative to the resource directory
    pub tray_icon: PathBuf,
    /// Global name of the bridge object in each surface
    pub bridge_namespace: String,
    /// Hosts the content surface may navigate to
    pub trusted_hosts: Vec<String>,
    pub update: UpdateConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "Messengy".to_string(),
            content_url: CONTENT_URL.to_string(),
            chrome_document: "title.html".to_string(),
            chrome_height: 52.0,
            window: WindowConfig::default(),
            tray_icon: PathBuf::from("assets").join("tray.png"),
            bridge_namespace: "messengy".to_string(),
            trusted_hosts: vec![
                "messenger.com".to_string(),
                "facebook.com".to_string(),
                "fbcdn.net".to_string(),
            ],
            update: UpdateConfig::from_build_env(),
        }
    }
}

impl ShellConfig {
    /// Parsed content surface target
    pub fn target_url(&self) -> Result<Url> {
        let url = Url::parse(&self.content_url)
            .map_err(|e| CoreError::Config(format!("invalid content URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "content URL must be http(s): {url}"
            )));
        }
        Ok(url)
    }

    pub fn validate(&self) -> Result<()> {
        self.target_url()?;

        let window = &self.window;
        let geometry = [
            window.width,
            window.height,
            window.min_width,
            window.min_height,
        ];
        if geometry.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(CoreError::Config(
                "window geometry must be positive".to_string(),
            ));
        }
        if window.width < window.min_width || window.height < window.min_height {
            return Err(CoreError::Config(
                "window size is below its minimum size".to_string(),
            ));
        }

        if !self.chrome_height.is_finite()
            || self.chrome_height <= 0.0
            || self.chrome_height >= window.min_height
        {
            return Err(CoreError::Config(format!(
                "chrome height {} must be positive and below the minimum window height",
                self.chrome_height
            )));
        }

        // Renders the namespace through the same check the bridge uses
        messengy_bridge::notification_relay_script(&self.bridge_namespace)?;

        if self.trusted_hosts.is_empty() {
            return Err(CoreError::Config("no trusted hosts".to_string()));
        }

        Ok(())
    }
}
