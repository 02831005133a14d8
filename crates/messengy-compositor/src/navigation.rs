//! Link handling for the content surface
//!
//! The content surface only ever shows the target site. Anything else the
//! page tries to open goes to the system browser or nowhere.

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Load inside the content surface
    Surface,
    /// Hand off to the system browser or mail/phone handler
    External,
    /// Drop the request
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPolicy {
    trusted_hosts: Vec<String>,
}

impl LinkPolicy {
    pub fn new<I, S>(trusted_hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            trusted_hosts: trusted_hosts
                .into_iter()
                .map(|h| h.into().trim().trim_start_matches('.').to_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    pub fn trusted_hosts(&self) -> &[String] {
        &self.trusted_hosts
    }

    /// A host is trusted when it equals a trusted host or is a subdomain of one
    pub fn is_trusted_host(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.trusted_hosts.iter().any(|trusted| {
            host == *trusted
                || host
                    .strip_suffix(trusted.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    pub fn classify(&self, url: &Url) -> LinkTarget {
        match url.scheme() {
            "http" | "https" => match url.host_str() {
                Some(host) if self.is_trusted_host(host) => LinkTarget::Surface,
                Some(_) => LinkTarget::External,
                None => LinkTarget::Blocked,
            },
            "about" | "blob" | "data" => LinkTarget::Surface,
            "mailto" | "tel" => LinkTarget::External,
            _ => LinkTarget::Blocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> LinkPolicy {
        LinkPolicy::new(["messenger.com", "facebook.com", ".fbcdn.net"])
    }

    fn classify(url: &str) -> LinkTarget {
        policy().classify(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_trusted_hosts_stay_in_surface() {
        assert_eq!(classify("https://www.messenger.com/t/123"), LinkTarget::Surface);
        assert_eq!(classify("https://messenger.com/"), LinkTarget::Surface);
        assert_eq!(classify("https://static.xx.fbcdn.net/x.png"), LinkTarget::Surface);
        assert_eq!(classify("about:blank"), LinkTarget::Surface);
    }

    #[test]
    fn test_lookalike_hosts_are_external() {
        assert_eq!(classify("https://evilmessenger.com/"), LinkTarget::External);
        assert_eq!(
            classify("https://messenger.com.example.org/"),
            LinkTarget::External
        );
        assert_eq!(classify("https://example.org/article"), LinkTarget::External);
        assert_eq!(classify("mailto:someone@example.org"), LinkTarget::External);
    }

    #[test]
    fn test_other_schemes_are_blocked() {
        assert_eq!(classify("file:///etc/passwd"), LinkTarget::Blocked);
        assert_eq!(classify("javascript:alert(1)"), LinkTarget::Blocked);
        assert_eq!(classify("ms-settings:privacy"), LinkTarget::Blocked);
    }
}
