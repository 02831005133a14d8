//! In-page enforcement of the permission policy
//!
//! The engines expose no common permission hook, so the content surface gets
//! an init script carrying the policy's decisions. Names the policy does not
//! know are reported as denied.

use serde_json::{Map, Value};

use crate::permissions::{Capability, PermissionPolicy};

const WEB_PERMISSION_NAMES: &[&str] = &[
    "notifications",
    "push",
    "camera",
    "microphone",
    "speaker-selection",
    "geolocation",
    "clipboard-read",
    "clipboard-write",
    "midi",
    "pointer-lock",
    "fullscreen",
    "publickey-credentials-get",
    "publickey-credentials-create",
];

const GUARD_SCRIPT: &str = r#"
(() => {
  const states = __MESSENGY_PERMISSION_STATES__;
  const mediaAllowed = __MESSENGY_MEDIA_ALLOWED__;
  const geolocationAllowed = __MESSENGY_GEOLOCATION_ALLOWED__;
  const denied = () => new DOMException('Permission denied', 'NotAllowedError');

  const permissions = navigator.permissions;
  if (permissions && typeof permissions.query === 'function') {
    permissions.query = (descriptor) => {
      const name = descriptor && descriptor.name != null ? String(descriptor.name) : '';
      const state = Object.prototype.hasOwnProperty.call(states, name) ? states[name] : 'denied';
      const status = new EventTarget();
      Object.defineProperties(status, {
        name: { value: name, enumerable: true },
        state: { value: state, enumerable: true },
        onchange: { value: null, writable: true },
      });
      return Promise.resolve(status);
    };
  }

  const media = navigator.mediaDevices;
  if (!mediaAllowed && media) {
    if (typeof media.getUserMedia === 'function') {
      media.getUserMedia = () => Promise.reject(denied());
    }
    if (typeof media.getDisplayMedia === 'function') {
      media.getDisplayMedia = () => Promise.reject(denied());
    }
  }

  const geolocation = navigator.geolocation;
  if (!geolocationAllowed && geolocation) {
    const fail = (onError) => {
      if (typeof onError !== 'function') return;
      try {
        onError({ code: 1, message: 'User denied Geolocation', PERMISSION_DENIED: 1, POSITION_UNAVAILABLE: 2, TIMEOUT: 3 });
      } catch {}
    };
    geolocation.getCurrentPosition = (_onSuccess, onError) => fail(onError);
    geolocation.watchPosition = (_onSuccess, onError) => {
      fail(onError);
      return 0;
    };
  }
})();
"#;

/// Permissions API name -> reported state
fn web_states(policy: &PermissionPolicy) -> Map<String, Value> {
    WEB_PERMISSION_NAMES
        .iter()
        .map(|name| {
            let state = match Capability::from_web_permission(name) {
                Some(capability) => policy.decide_capability(capability).web_state(),
                None => "denied",
            };
            (name.to_string(), Value::from(state))
        })
        .collect()
}

pub(crate) fn guard_script(policy: &PermissionPolicy) -> String {
    let states = Value::Object(web_states(policy)).to_string();
    let media = policy
        .decide_capability(Capability::MediaStream)
        .is_allowed();
    let geolocation = policy
        .decide_capability(Capability::Geolocation)
        .is_allowed();

    GUARD_SCRIPT
        .replace("__MESSENGY_PERMISSION_STATES__", &states)
        .replace("__MESSENGY_MEDIA_ALLOWED__", &media.to_string())
        .replace("__MESSENGY_GEOLOCATION_ALLOWED__", &geolocation.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_follow_policy() {
        let states = web_states(&PermissionPolicy::content_surface());

        assert_eq!(states["notifications"], "granted");
        assert_eq!(states["publickey-credentials-get"], "granted");
        assert_eq!(states["camera"], "denied");
        assert_eq!(states["microphone"], "denied");
        assert_eq!(states["geolocation"], "denied");
        assert_eq!(states.len(), WEB_PERMISSION_NAMES.len());
    }

    #[test]
    fn test_guard_script_rendering() {
        let script = PermissionPolicy::content_surface().guard_script();

        assert!(script.contains(r#""notifications":"granted""#));
        assert!(script.contains("const mediaAllowed = false;"));
        assert!(script.contains("const geolocationAllowed = false;"));
        assert!(!script.contains("__MESSENGY_"));
    }

    #[test]
    fn test_guard_script_with_media_allowed() {
        let policy = PermissionPolicy::allowing([Capability::MediaStream]);
        let script = policy.guard_script();

        assert!(script.contains("const mediaAllowed = true;"));
        assert!(script.contains(r#""camera":"granted""#));
        assert!(script.contains(r#""notifications":"denied""#));
    }
}
