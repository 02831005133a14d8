//! Per-surface operation allow-lists

use messengy_compositor::SurfaceKind;
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::scripts;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BridgeOperation {
    Notify,
    Minimize,
    ToggleMaximize,
    Close,
}

impl BridgeOperation {
    pub const ALL: [BridgeOperation; 4] = [
        BridgeOperation::Notify,
        BridgeOperation::Minimize,
        BridgeOperation::ToggleMaximize,
        BridgeOperation::Close,
    ];

    /// Function name inside the namespace object
    pub fn name(&self) -> &'static str {
        match self {
            BridgeOperation::Notify => "notify",
            BridgeOperation::Minimize => "minimize",
            BridgeOperation::ToggleMaximize => "toggleMaximize",
            BridgeOperation::Close => "close",
        }
    }

    /// IPC command the operation is sent through
    pub fn command(&self) -> &'static str {
        match self {
            BridgeOperation::Notify => "bridge_notify",
            BridgeOperation::Minimize
            | BridgeOperation::ToggleMaximize
            | BridgeOperation::Close => "bridge_window_control",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| BridgeError::UnknownOperation(name.to_string()))
    }
}

impl std::fmt::Display for BridgeOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeManifest {
    surface: SurfaceKind,
    operations: &'static [BridgeOperation],
}

const CONTENT_OPERATIONS: &[BridgeOperation] = &[BridgeOperation::Notify];

const CHROME_OPERATIONS: &[BridgeOperation] = &[
    BridgeOperation::Minimize,
    BridgeOperation::ToggleMaximize,
    BridgeOperation::Close,
];

impl BridgeManifest {
    pub fn for_surface(surface: SurfaceKind) -> Self {
        let operations = match surface {
            SurfaceKind::Content => CONTENT_OPERATIONS,
            SurfaceKind::Chrome => CHROME_OPERATIONS,
        };
        Self {
            surface,
            operations,
        }
    }

    pub fn surface(&self) -> SurfaceKind {
        self.surface
    }

    pub fn operations(&self) -> &'static [BridgeOperation] {
        self.operations
    }

    pub fn allows(&self, operation: BridgeOperation) -> bool {
        self.operations.contains(&operation)
    }

    /// Check an incoming call against the allow-list
    pub fn authorize(&self, operation: BridgeOperation) -> Result<()> {
        if self.allows(operation) {
            Ok(())
        } else {
            Err(BridgeError::NotExposed {
                operation: operation.name(),
                surface: self.surface.to_string(),
            })
        }
    }

    /// Init script defining `window[namespace]` with exactly this manifest's
    /// operations
    pub fn script(&self, namespace: &str) -> Result<String> {
        scripts::bridge_script(namespace, self.operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_surface_only_exposes_notify() {
        let manifest = BridgeManifest::for_surface(SurfaceKind::Content);

        assert_eq!(manifest.operations(), [BridgeOperation::Notify]);
        assert!(manifest.authorize(BridgeOperation::Notify).is_ok());
        for op in [
            BridgeOperation::Minimize,
            BridgeOperation::ToggleMaximize,
            BridgeOperation::Close,
        ] {
            assert!(matches!(
                manifest.authorize(op),
                Err(BridgeError::NotExposed { .. })
            ));
        }
    }

    #[test]
    fn test_chrome_surface_cannot_notify() {
        let manifest = BridgeManifest::for_surface(SurfaceKind::Chrome);
        assert!(!manifest.allows(BridgeOperation::Notify));
        assert!(manifest.allows(BridgeOperation::Close));
    }

    #[test]
    fn test_operation_names() {
        for op in BridgeOperation::ALL {
            assert_eq!(BridgeOperation::from_name(op.name()).unwrap(), op);
        }
        assert!(matches!(
            BridgeOperation::from_name("readFile"),
            Err(BridgeError::UnknownOperation(_))
        ));
        assert!(BridgeOperation::from_name("Notify").is_err());
    }
}
