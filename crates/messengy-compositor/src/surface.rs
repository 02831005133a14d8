//! Surfaces and the host seam
//!
//! A surface is one embedded, script-isolated web view. The compositor
//! describes each surface with a [`SurfaceSpec`] and lets a [`SurfaceHost`]
//! (the browser engine binding) create it.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::layout::{Bounds, Size};
use crate::navigation::LinkPolicy;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// Title bar and window controls, loaded from a bundled document
    Chrome,
    /// Third-party site
    Content,
}

impl SurfaceKind {
    /// Engine label of the surface
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceKind::Chrome => "chrome",
            SurfaceKind::Content => "content",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "chrome" => Some(SurfaceKind::Chrome),
            "content" => Some(SurfaceKind::Content),
            _ => None,
        }
    }
}

impl std::fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceSource {
    /// Path of a document bundled with the application
    LocalDocument(String),
    Remote(Url),
}

/// A script run before page scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitScript {
    pub source: String,
    /// Also run inside subframes, not just the top-level document
    pub all_frames: bool,
}

impl InitScript {
    pub fn top_frame(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            all_frames: false,
        }
    }

    pub fn all_frames(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            all_frames: true,
        }
    }
}

/// Everything a host needs to create a surface
#[derive(Debug, Clone)]
pub struct SurfaceSpec {
    pub kind: SurfaceKind,
    pub source: SurfaceSource,
    pub user_agent: Option<String>,
    /// Scripts run before page scripts, in order
    pub init_scripts: Vec<InitScript>,
    pub browser_args: Option<String>,
    pub link_policy: Option<LinkPolicy>,
    pub transparent: bool,
}

impl SurfaceSpec {
    pub fn chrome(document: impl Into<String>) -> Self {
        Self {
            kind: SurfaceKind::Chrome,
            source: SurfaceSource::LocalDocument(document.into()),
            user_agent: None,
            init_scripts: Vec::new(),
            browser_args: None,
            link_policy: None,
            transparent: true,
        }
    }

    pub fn content(url: Url) -> Self {
        Self {
            kind: SurfaceKind::Content,
            source: SurfaceSource::Remote(url),
            user_agent: None,
            init_scripts: Vec::new(),
            browser_args: None,
            link_policy: None,
            transparent: false,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_init_script(mut self, script: InitScript) -> Self {
        self.init_scripts.push(script);
        self
    }

    pub fn with_browser_args(mut self, args: impl Into<String>) -> Self {
        self.browser_args = Some(args.into());
        self
    }

    pub fn with_link_policy(mut self, policy: LinkPolicy) -> Self {
        self.link_policy = Some(policy);
        self
    }
}

/// A created surface, as seen by the compositor
pub trait Surface {
    fn set_bounds(&self, bounds: Bounds) -> Result<()>;

    fn set_zoom(&self, factor: f64) -> Result<()>;
}

/// Browser engine binding that owns the native window
pub trait SurfaceHost {
    type Surface: Surface;

    /// Current logical size of the window content area
    fn content_size(&self) -> Result<Size>;

    /// Create a surface, attach it to the window at `bounds` and start loading
    fn attach(&self, spec: &SurfaceSpec, bounds: Bounds) -> Result<Self::Surface>;
}
