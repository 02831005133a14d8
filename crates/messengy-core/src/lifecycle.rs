//! Window lifecycle policy
//!
//! macOS apps stay running with no windows open and come back when the dock
//! icon is clicked; everywhere else closing the last window quits.

use messengy_compositor::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedAction {
    Exit,
    StayResident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactivateAction {
    /// No window left: build a new one
    Recreate,
    /// A hidden window exists: show it
    Show,
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecyclePolicy {
    pub stay_resident: bool,
}

impl LifecyclePolicy {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            stay_resident: platform == Platform::MacOs,
        }
    }

    pub fn current() -> Self {
        Self::for_platform(Platform::current())
    }

    pub fn on_all_windows_closed(&self) -> ClosedAction {
        if self.stay_resident {
            ClosedAction::StayResident
        } else {
            ClosedAction::Exit
        }
    }

    pub fn on_reactivate(&self, open_windows: usize, any_visible: bool) -> ReactivateAction {
        if open_windows == 0 {
            ReactivateAction::Recreate
        } else if !any_visible {
            ReactivateAction::Show
        } else {
            ReactivateAction::Nothing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_macos_stays_resident() {
        assert_eq!(
            LifecyclePolicy::for_platform(Platform::MacOs).on_all_windows_closed(),
            ClosedAction::StayResident
        );
        for platform in [Platform::Windows, Platform::Linux, Platform::Other] {
            assert_eq!(
                LifecyclePolicy::for_platform(platform).on_all_windows_closed(),
                ClosedAction::Exit
            );
        }
    }

    #[test]
    fn test_reactivation() {
        let policy = LifecyclePolicy::for_platform(Platform::MacOs);
        assert_eq!(policy.on_reactivate(0, false), ReactivateAction::Recreate);
        assert_eq!(policy.on_reactivate(1, false), ReactivateAction::Show);
        assert_eq!(policy.on_reactivate(1, true), ReactivateAction::Nothing);
    }
}
