//! Browser engine switches
//!
//! Platform authentication (passkeys, password manager autofill) is
//! detected by the page on first load, so these switches must be part of
//! every surface's configuration before anything is loaded. All surfaces in
//! one engine environment have to share the same argument string.

/// Features WebView2 disables by default. Overriding the browser arguments
/// replaces the defaults, so they are carried over explicitly.
const ENGINE_DEFAULT_DISABLED: &[&str] = &["msWebOOUI", "msPdfOOUI", "msSmartScreenProtection"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineFlags {
    switches: Vec<String>,
    enabled_features: Vec<String>,
    disabled_features: Vec<String>,
}

impl EngineFlags {
    pub fn new() -> Self {
        Self {
            switches: Vec::new(),
            enabled_features: Vec::new(),
            disabled_features: ENGINE_DEFAULT_DISABLED
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }

    /// Switch set enabling WebAuthn and the password manager
    pub fn platform_authentication() -> Self {
        Self::new()
            .switch("enable-experimental-web-platform-features")
            .switch("enable-webauthn")
            .switch("webauthn-extension-enable")
            .enable_feature("WebAuthn")
            .enable_feature("PasswordManager")
            .enable_feature("WebAuthnPlatformAuthenticator")
            // Media prompts block the login page otherwise
            .switch("use-fake-ui-for-media-stream")
    }

    pub fn switch(mut self, name: &str) -> Self {
        let name = name.trim_start_matches('-');
        if !self.switches.iter().any(|s| s == name) {
            self.switches.push(name.to_string());
        }
        self
    }

    pub fn enable_feature(mut self, feature: &str) -> Self {
        if !self.enabled_features.iter().any(|f| f == feature) {
            self.enabled_features.push(feature.to_string());
        }
        self.disabled_features.retain(|f| f != feature);
        self
    }

    pub fn switches(&self) -> &[String] {
        &self.switches
    }

    pub fn enabled_features(&self) -> &[String] {
        &self.enabled_features
    }

    /// Render as a single command-line argument string
    pub fn to_browser_args(&self) -> String {
        let mut args: Vec<String> = self.switches.iter().map(|s| format!("--{s}")).collect();

        if !self.enabled_features.is_empty() {
            args.push(format!(
                "--enable-features={}",
                self.enabled_features.join(",")
            ));
        }
        if !self.disabled_features.is_empty() {
            args.push(format!(
                "--disable-features={}",
                self.disabled_features.join(",")
            ));
        }

        args.join(" ")
    }
}

impl Default for EngineFlags {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_authentication_switches() {
        let flags = EngineFlags::platform_authentication();

        for switch in [
            "enable-experimental-web-platform-features",
            "enable-webauthn",
            "webauthn-extension-enable",
            "use-fake-ui-for-media-stream",
        ] {
            assert!(flags.switches().iter().any(|s| s == switch), "{switch}");
        }
        assert_eq!(
            flags.enabled_features(),
            ["WebAuthn", "PasswordManager", "WebAuthnPlatformAuthenticator"]
        );
    }

    #[test]
    fn test_browser_args_keep_engine_defaults() {
        let args = EngineFlags::platform_authentication().to_browser_args();

        assert!(args.starts_with("--enable-experimental-web-platform-features"));
        assert!(args.contains("--enable-features=WebAuthn,PasswordManager,WebAuthnPlatformAuthenticator"));
        assert!(args.contains("--disable-features=msWebOOUI,msPdfOOUI,msSmartScreenProtection"));
    }

    #[test]
    fn test_switches_are_deduplicated() {
        let flags = EngineFlags::new()
            .switch("enable-webauthn")
            .switch("--enable-webauthn");
        assert_eq!(flags.switches().len(), 1);
    }

    #[test]
    fn test_enabling_removes_from_disabled() {
        let args = EngineFlags::new().enable_feature("msPdfOOUI").to_browser_args();
        assert!(args.contains("--enable-features=msPdfOOUI"));
        assert!(args.contains("--disable-features=msWebOOUI,msSmartScreenProtection"));
    }
}
