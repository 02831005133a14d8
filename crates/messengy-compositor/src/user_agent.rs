//! Content surface user agents
//!
//! The remote site only offers its passkey and autofill UI to browsers it
//! recognizes, so the content surface presents a mainstream desktop browser
//! for the host platform.

use crate::platform::Platform;

const SAFARI_MACOS: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";
const CHROME_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";

pub fn user_agent_for(platform: Platform) -> &'static str {
    match platform {
        Platform::MacOs => SAFARI_MACOS,
        Platform::Windows => CHROME_WINDOWS,
        Platform::Linux => CHROME_LINUX,
        Platform::Other => CHROME_WINDOWS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_variants_differ() {
        let mac = user_agent_for(Platform::MacOs);
        let windows = user_agent_for(Platform::Windows);

        assert!(mac.contains("Macintosh"));
        assert!(mac.contains("Safari/605"));
        assert!(windows.contains("Windows NT 10.0"));
        assert!(windows.contains("Chrome/"));
        assert_ne!(mac, windows);
        assert!(user_agent_for(Platform::Linux).contains("Linux"));
    }

    #[test]
    fn test_unknown_platform_falls_back() {
        assert_eq!(
            user_agent_for(Platform::Other),
            user_agent_for(Platform::Windows)
        );
    }
}
