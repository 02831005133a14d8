//! Capability permission policy

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    PasswordManager,
    #[serde(rename = "webauthn")]
    WebAuthn,
    Notifications,
    MediaStream,
    Geolocation,
    Clipboard,
    Midi,
    PointerLock,
    Fullscreen,
    OpenExternal,
}

impl Capability {
    pub const ALL: [Capability; 10] = [
        Capability::PasswordManager,
        Capability::WebAuthn,
        Capability::Notifications,
        Capability::MediaStream,
        Capability::Geolocation,
        Capability::Clipboard,
        Capability::Midi,
        Capability::PointerLock,
        Capability::Fullscreen,
        Capability::OpenExternal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::PasswordManager => "password-manager",
            Capability::WebAuthn => "webauthn",
            Capability::Notifications => "notifications",
            Capability::MediaStream => "media-stream",
            Capability::Geolocation => "geolocation",
            Capability::Clipboard => "clipboard",
            Capability::Midi => "midi",
            Capability::PointerLock => "pointer-lock",
            Capability::Fullscreen => "fullscreen",
            Capability::OpenExternal => "open-external",
        }
    }

    /// Exact, case-sensitive lookup of a canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Map a web Permissions API name onto a capability
    pub fn from_web_permission(name: &str) -> Option<Self> {
        match name {
            "notifications" | "push" => Some(Capability::Notifications),
            "camera" | "microphone" | "speaker-selection" => Some(Capability::MediaStream),
            "geolocation" => Some(Capability::Geolocation),
            "clipboard-read" | "clipboard-write" => Some(Capability::Clipboard),
            "midi" => Some(Capability::Midi),
            "pointer-lock" => Some(Capability::PointerLock),
            "fullscreen" => Some(Capability::Fullscreen),
            "publickey-credentials-get" | "publickey-credentials-create" => {
                Some(Capability::WebAuthn)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
    Deny,
}

impl PermissionDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, PermissionDecision::Allow)
    }

    /// State reported to the Permissions API
    pub fn web_state(&self) -> &'static str {
        match self {
            PermissionDecision::Allow => "granted",
            PermissionDecision::Deny => "denied",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionPolicy {
    granted: HashSet<Capability>,
}

impl PermissionPolicy {
    /// Policy granting only `granted`
    pub fn allowing<I: IntoIterator<Item = Capability>>(granted: I) -> Self {
        Self {
            granted: granted.into_iter().collect(),
        }
    }

    /// Grants exactly password-manager, webauthn and notifications
    pub fn content_surface() -> Self {
        Self::allowing([
            Capability::PasswordManager,
            Capability::WebAuthn,
            Capability::Notifications,
        ])
    }

    pub fn decide_capability(&self, capability: Capability) -> PermissionDecision {
        if self.granted.contains(&capability) {
            PermissionDecision::Allow
        } else {
            PermissionDecision::Deny
        }
    }

    /// Decide a request by capability name. Unknown names are denied.
    pub fn decide(&self, name: &str) -> PermissionDecision {
        let decision = match Capability::from_name(name) {
            Some(capability) => self.decide_capability(capability),
            None => PermissionDecision::Deny,
        };

        tracing::debug!(permission = %name, decision = ?decision, "Permission request");
        decision
    }

    /// Callback-style decision: `callback` runs exactly once, before return
    pub fn respond<F: FnOnce(bool)>(&self, name: &str, callback: F) {
        callback(self.decide(name).is_allowed());
    }

    pub fn granted(&self) -> Vec<Capability> {
        let mut granted: Vec<Capability> = self.granted.iter().copied().collect();
        granted.sort_by_key(|c| c.as_str());
        granted
    }

    /// Init script enforcing this policy inside the content surface
    pub fn guard_script(&self) -> String {
        crate::guard::guard_script(self)
    }
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self::content_surface()
    }
}
