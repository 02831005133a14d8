//! Surface construction plan
//!
//! Turns the shell configuration into the two surface specs the compositor
//! attaches. The content surface init scripts run in this order:
//! bridge namespace, notification relay, permission guard. All three run in
//! every frame of the content surface; the relay needs the bridge in the
//! same frame, and embedded frames must not bypass the guard.

use messengy_bridge::{notification_relay_script, BridgeManifest};
use messengy_compositor::{
    user_agent_for, EngineFlags, InitScript, LinkPolicy, Platform, SurfaceKind, SurfaceSpec,
};
use messengy_privacy::PermissionPolicy;

use crate::config::ShellConfig;
use crate::Result;

#[derive(Debug, Clone)]
pub struct SurfacePlan {
    pub chrome: SurfaceSpec,
    pub content: SurfaceSpec,
}

impl SurfacePlan {
    pub fn build(
        config: &ShellConfig,
        platform: Platform,
        flags: &EngineFlags,
        policy: &PermissionPolicy,
    ) -> Result<Self> {
        let namespace = config.bridge_namespace.as_str();
        let browser_args = flags.to_browser_args();

        let chrome = SurfaceSpec::chrome(config.chrome_document.clone())
            .with_init_script(InitScript::top_frame(
                BridgeManifest::for_surface(SurfaceKind::Chrome).script(namespace)?,
            ))
            .with_browser_args(browser_args.clone());

        let content = SurfaceSpec::content(config.target_url()?)
            .with_user_agent(user_agent_for(platform))
            .with_init_script(InitScript::all_frames(
                BridgeManifest::for_surface(SurfaceKind::Content).script(namespace)?,
            ))
            .with_init_script(InitScript::all_frames(notification_relay_script(namespace)?))
            .with_init_script(InitScript::all_frames(policy.guard_script()))
            .with_browser_args(browser_args)
            .with_link_policy(LinkPolicy::new(config.trusted_hosts.iter().cloned()));

        Ok(Self { chrome, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use messengy_compositor::SurfaceSource;

    fn plan(platform: Platform) -> SurfacePlan {
        SurfacePlan::build(
            &ShellConfig::default(),
            platform,
            &EngineFlags::platform_authentication(),
            &PermissionPolicy::content_surface(),
        )
        .unwrap()
    }

    #[test]
    fn test_sources() {
        let plan = plan(Platform::Windows);

        assert_eq!(
            plan.chrome.source,
            SurfaceSource::LocalDocument("title.html".to_string())
        );
        match &plan.content.source {
            SurfaceSource::Remote(url) => assert_eq!(url.as_str(), "https://www.messenger.com/"),
            other => panic!("unexpected content source: {other:?}"),
        }
    }

    #[test]
    fn test_only_content_surface_has_user_agent() {
        let mac = plan(Platform::MacOs);
        assert!(mac.chrome.user_agent.is_none());
        assert!(mac
            .content
            .user_agent
            .as_deref()
            .is_some_and(|ua| ua.contains("Macintosh")));

        let windows = plan(Platform::Windows);
        assert!(windows
            .content
            .user_agent
            .as_deref()
            .is_some_and(|ua| ua.contains("Windows NT")));
    }

    #[test]
    fn test_content_scripts_order() {
        let plan = plan(Platform::Linux);
        let scripts = &plan.content.init_scripts;

        assert_eq!(scripts.len(), 3);
        assert!(scripts[0].source.contains("bridge_notify"));
        assert!(scripts[1].source.contains("window.Notification = Notification;"));
        assert!(scripts[2].source.contains("permissions.query"));

        assert_eq!(plan.chrome.init_scripts.len(), 1);
        assert!(!plan.chrome.init_scripts[0].source.contains("bridge_notify"));
    }

    #[test]
    fn test_content_scripts_reach_subframes() {
        let plan = plan(Platform::Windows);

        assert!(plan.content.init_scripts.iter().all(|s| s.all_frames));
        assert!(plan.chrome.init_scripts.iter().all(|s| !s.all_frames));
    }

    #[test]
    fn test_surfaces_share_browser_args() {
        let plan = plan(Platform::Windows);
        assert!(plan.chrome.browser_args.is_some());
        assert_eq!(plan.chrome.browser_args, plan.content.browser_args);
    }

    #[test]
    fn test_link_policy_only_on_content() {
        let plan = plan(Platform::Windows);
        assert!(plan.chrome.link_policy.is_none());
        let policy = plan.content.link_policy.unwrap();
        assert!(policy.is_trusted_host("www.messenger.com"));
    }
}
