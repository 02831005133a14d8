//! Init scripts injected into surfaces

use crate::error::BridgeError;
use crate::manifest::BridgeOperation;
use crate::Result;

const NAMESPACE_PLACEHOLDER: &str = "__MESSENGY_NAMESPACE__";
const FUNCTIONS_PLACEHOLDER: &str = "__MESSENGY_FUNCTIONS__";

/// Globals a namespace must never shadow
const RESERVED_GLOBALS: &[&str] = &[
    "window",
    "self",
    "document",
    "navigator",
    "location",
    "Notification",
    "__TAURI_INTERNALS__",
];

const BRIDGE_SCRIPT: &str = r#"
(() => {
  const ns = __MESSENGY_NAMESPACE__;
  if (Object.prototype.hasOwnProperty.call(window, ns)) return;

  let internals = null;
  const send = (command, args) => {
    try {
      internals = internals || window.__TAURI_INTERNALS__;
      if (!internals || typeof internals.invoke !== 'function') return;
      Promise.resolve(internals.invoke(command, args)).catch(() => {});
    } catch {}
  };

  const api = Object.create(null);
__MESSENGY_FUNCTIONS__
  Object.defineProperty(window, ns, {
    value: Object.freeze(api),
    writable: false,
    configurable: false,
    enumerable: false,
  });
})();
"#;

const NOTIFICATION_RELAY_SCRIPT: &str = r#"
(() => {
  const bridge = window[__MESSENGY_NAMESPACE__];
  if (!bridge || typeof bridge.notify !== 'function') return;

  const Native = typeof window.Notification === 'function' ? window.Notification : null;

  class ShimNotification extends EventTarget {
    constructor(title, options) {
      super();
      const opts = options || {};
      this.title = String(title);
      this.body = opts.body != null ? String(opts.body) : '';
      this.tag = opts.tag != null ? String(opts.tag) : '';
      this.icon = opts.icon != null ? String(opts.icon) : '';
      this.data = opts.data !== undefined ? opts.data : null;
      this.onclick = null;
      this.onshow = null;
      this.onerror = null;
      this.onclose = null;
    }
    close() {}
  }

  const Impl = Native || ShimNotification;

  function Notification(title, options) {
    if (!new.target) {
      throw new TypeError("Failed to construct 'Notification': Please use the 'new' operator.");
    }
    const body = options && options.body != null ? String(options.body) : '';
    try { bridge.notify(String(title), body); } catch {}
    try {
      return new Impl(title, options);
    } catch {
      return new ShimNotification(title, options);
    }
  }

  Notification.prototype = Impl.prototype;
  Object.defineProperty(Notification, 'permission', {
    get: () => 'granted',
    configurable: true,
  });
  Notification.requestPermission = (callback) => {
    if (typeof callback === 'function') {
      try { callback('granted'); } catch {}
    }
    return Promise.resolve('granted');
  };
  if (Native && 'maxActions' in Native) {
    Object.defineProperty(Notification, 'maxActions', { get: () => Native.maxActions });
  }

  window.Notification = Notification;
})();
"#;

/// Validate a namespace and render it as a JS string literal
fn namespace_literal(namespace: &str) -> Result<String> {
    let mut chars = namespace.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if !valid_start || !valid_rest || RESERVED_GLOBALS.contains(&namespace) {
        return Err(BridgeError::InvalidNamespace(namespace.to_string()));
    }

    Ok(serde_json::to_string(namespace)?)
}

fn operation_binding(operation: BridgeOperation) -> Result<String> {
    let name = serde_json::to_string(operation.name())?;
    let command = serde_json::to_string(operation.command())?;

    let binding = match operation {
        BridgeOperation::Notify => format!(
            "  api[{name}] = (title, body) => {{ send({command}, {{ title: String(title ?? ''), body: String(body ?? '') }}); }};"
        ),
        BridgeOperation::Minimize | BridgeOperation::ToggleMaximize | BridgeOperation::Close => {
            format!("  api[{name}] = () => {{ send({command}, {{ operation: {name} }}); }};")
        }
    };
    Ok(binding)
}

pub(crate) fn bridge_script(namespace: &str, operations: &[BridgeOperation]) -> Result<String> {
    let namespace = namespace_literal(namespace)?;
    let functions = operations
        .iter()
        .map(|op| operation_binding(*op))
        .collect::<Result<Vec<_>>>()?
        .join("\n");

    Ok(BRIDGE_SCRIPT
        .replace(NAMESPACE_PLACEHOLDER, &namespace)
        .replace(FUNCTIONS_PLACEHOLDER, &functions))
}

/// Script replacing `window.Notification` so page notifications are
/// forwarded through `window[namespace].notify`. Must run after the bridge
/// script.
pub fn notification_relay_script(namespace: &str) -> Result<String> {
    let namespace = namespace_literal(namespace)?;
    Ok(NOTIFICATION_RELAY_SCRIPT.replace(NAMESPACE_PLACEHOLDER, &namespace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::BridgeManifest;
    use messengy_compositor::SurfaceKind;

    #[test]
    fn test_content_bridge_script() {
        let script = BridgeManifest::for_surface(SurfaceKind::Content)
            .script("messengy")
            .unwrap();

        assert!(script.contains(r#"const ns = "messengy";"#));
        assert!(script.contains(r#"api["notify"]"#));
        assert!(script.contains(r#"send("bridge_notify""#));
        assert!(!script.contains("bridge_window_control"));
        assert!(script.contains("Object.freeze(api)"));
        assert!(!script.contains(NAMESPACE_PLACEHOLDER));
        assert!(!script.contains(FUNCTIONS_PLACEHOLDER));
    }

    #[test]
    fn test_chrome_bridge_script() {
        let script = BridgeManifest::for_surface(SurfaceKind::Chrome)
            .script("messengy")
            .unwrap();

        assert!(script.contains(r#"api["toggleMaximize"]"#));
        assert!(script.contains(r#"{ operation: "close" }"#));
        assert!(!script.contains("bridge_notify"));
    }

    #[test]
    fn test_relay_script() {
        let script = notification_relay_script("messengy").unwrap();

        assert!(script.contains(r#"window["messengy"]"#));
        assert!(script.contains("get: () => 'granted'"));
        assert!(script.contains("return Promise.resolve('granted');"));
        assert!(script.contains("window.Notification = Notification;"));
    }

    #[test]
    fn test_invalid_namespaces() {
        for namespace in ["", "1abc", "a-b", "x\";alert(1)//", "Notification", "window"] {
            assert!(
                matches!(
                    notification_relay_script(namespace),
                    Err(BridgeError::InvalidNamespace(_))
                ),
                "{namespace} should be rejected"
            );
        }
        assert!(namespace_literal("$bridge_2").is_ok());
    }
}
