//! Dual-surface compositor
//!
//! Owns the chrome and content surfaces of one window and keeps them tiled.
//! The two surfaces never reference each other; only the compositor knows
//! about both.

use parking_lot::Mutex;

use crate::layout::{Layout, Size};
use crate::surface::{Surface, SurfaceHost, SurfaceSpec};
use crate::zoom::ZoomLevel;
use crate::Result;

struct CompositorState {
    layout: Layout,
    zoom: ZoomLevel,
}

pub struct Compositor<H: SurfaceHost> {
    host: H,
    chrome: H::Surface,
    content: H::Surface,
    chrome_height: f64,
    state: Mutex<CompositorState>,
}

impl<H: SurfaceHost> Compositor<H> {
    /// Create both surfaces on `host` and lay them out for its current size
    pub fn initialize(
        host: H,
        chrome_height: f64,
        chrome_spec: &SurfaceSpec,
        content_spec: &SurfaceSpec,
    ) -> Result<Self> {
        let size = host.content_size()?;
        let layout = Layout::for_size(size, chrome_height);

        let chrome = host.attach(chrome_spec, layout.chrome)?;
        let content = host.attach(content_spec, layout.content)?;

        let zoom = ZoomLevel::default();
        content.set_zoom(zoom.factor())?;

        tracing::info!(
            width = size.width,
            height = size.height,
            chrome_height,
            "Surfaces attached"
        );

        Ok(Self {
            host,
            chrome,
            content,
            chrome_height,
            state: Mutex::new(CompositorState { layout, zoom }),
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn layout(&self) -> Layout {
        self.state.lock().layout
    }

    /// Re-tile both surfaces for a new window size.
    ///
    /// Returns `false` when the layout is unchanged and nothing was applied.
    pub fn on_resize(&self, width: f64, height: f64) -> Result<bool> {
        let layout = Layout::tile(width, height, self.chrome_height);

        let mut state = self.state.lock();
        if state.layout == layout {
            return Ok(false);
        }

        self.chrome.set_bounds(layout.chrome)?;
        self.content.set_bounds(layout.content)?;
        state.layout = layout;

        tracing::debug!(width, height, "Surfaces re-tiled");
        Ok(true)
    }

    /// Re-read the host size and re-tile
    pub fn refresh(&self) -> Result<bool> {
        let Size { width, height } = self.host.content_size()?;
        self.on_resize(width, height)
    }

    pub fn content_zoom(&self) -> f64 {
        self.state.lock().zoom.factor()
    }

    pub fn set_content_zoom(&self, factor: f64) -> Result<f64> {
        let zoom = ZoomLevel::new(factor)?;
        self.apply_zoom(zoom)
    }

    pub fn zoom_in(&self) -> Result<f64> {
        let next = self.state.lock().zoom.zoomed_in();
        self.apply_zoom(next)
    }

    pub fn zoom_out(&self) -> Result<f64> {
        let next = self.state.lock().zoom.zoomed_out();
        self.apply_zoom(next)
    }

    pub fn reset_zoom(&self) -> Result<f64> {
        self.apply_zoom(ZoomLevel::default())
    }

    fn apply_zoom(&self, zoom: ZoomLevel) -> Result<f64> {
        let mut state = self.state.lock();
        self.content.set_zoom(zoom.factor())?;
        state.zoom = zoom;

        tracing::info!(zoom = %zoom, "Content zoom changed");
        Ok(zoom.factor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompositorError;
    use crate::layout::Bounds;
    use crate::surface::{SurfaceKind, SurfaceSource};
    use std::sync::Arc;
    use url::Url;

    #[derive(Debug, Clone, PartialEq)]
    enum HostCall {
        Attach(SurfaceKind, Bounds),
        SetBounds(SurfaceKind, Bounds),
        SetZoom(SurfaceKind, f64),
    }

    type CallLog = Arc<Mutex<Vec<HostCall>>>;

    struct RecordingSurface {
        kind: SurfaceKind,
        calls: CallLog,
    }

    impl Surface for RecordingSurface {
        fn set_bounds(&self, bounds: Bounds) -> Result<()> {
            self.calls.lock().push(HostCall::SetBounds(self.kind, bounds));
            Ok(())
        }

        fn set_zoom(&self, factor: f64) -> Result<()> {
            self.calls.lock().push(HostCall::SetZoom(self.kind, factor));
            Ok(())
        }
    }

    struct RecordingHost {
        size: Size,
        calls: CallLog,
        sources: Arc<Mutex<Vec<SurfaceSource>>>,
    }

    impl RecordingHost {
        fn new(width: f64, height: f64) -> Self {
            Self {
                size: Size::new(width, height),
                calls: Arc::new(Mutex::new(Vec::new())),
                sources: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl SurfaceHost for RecordingHost {
        type Surface = RecordingSurface;

        fn content_size(&self) -> Result<Size> {
            Ok(self.size)
        }

        fn attach(&self, spec: &SurfaceSpec, bounds: Bounds) -> Result<RecordingSurface> {
            self.calls.lock().push(HostCall::Attach(spec.kind, bounds));
            self.sources.lock().push(spec.source.clone());
            Ok(RecordingSurface {
                kind: spec.kind,
                calls: Arc::clone(&self.calls),
            })
        }
    }

    struct FailingHost;

    impl SurfaceHost for FailingHost {
        type Surface = RecordingSurface;

        fn content_size(&self) -> Result<Size> {
            Ok(Size::new(1200.0, 820.0))
        }

        fn attach(&self, _spec: &SurfaceSpec, _bounds: Bounds) -> Result<RecordingSurface> {
            Err(CompositorError::Host("engine unavailable".to_string()))
        }
    }

    fn specs() -> (SurfaceSpec, SurfaceSpec) {
        (
            SurfaceSpec::chrome("title.html"),
            SurfaceSpec::content(Url::parse("https://www.messenger.com/").unwrap()),
        )
    }

    fn compositor() -> (Compositor<RecordingHost>, CallLog) {
        let host = RecordingHost::new(1200.0, 820.0);
        let calls = Arc::clone(&host.calls);
        let (chrome, content) = specs();
        let compositor = Compositor::initialize(host, 52.0, &chrome, &content).unwrap();
        (compositor, calls)
    }

    #[test]
    fn test_initialize_and_resize() {
        let (compositor, calls) = compositor();

        assert_eq!(
            *calls.lock(),
            vec![
                HostCall::Attach(SurfaceKind::Chrome, Bounds::new(0.0, 0.0, 1200.0, 52.0)),
                HostCall::Attach(SurfaceKind::Content, Bounds::new(0.0, 52.0, 1200.0, 768.0)),
                HostCall::SetZoom(SurfaceKind::Content, 1.0),
            ]
        );

        let sources = compositor.host().sources.lock().clone();
        assert_eq!(
            sources,
            vec![
                SurfaceSource::LocalDocument("title.html".to_string()),
                SurfaceSource::Remote(Url::parse("https://www.messenger.com/").unwrap()),
            ]
        );

        calls.lock().clear();
        assert!(compositor.on_resize(1000.0, 700.0).unwrap());
        assert_eq!(
            *calls.lock(),
            vec![
                HostCall::SetBounds(SurfaceKind::Chrome, Bounds::new(0.0, 0.0, 1000.0, 52.0)),
                HostCall::SetBounds(SurfaceKind::Content, Bounds::new(0.0, 52.0, 1000.0, 648.0)),
            ]
        );
    }

    #[test]
    fn test_resize_is_idempotent() {
        let (compositor, calls) = compositor();
        calls.lock().clear();

        assert!(compositor.on_resize(1400.0, 900.0).unwrap());
        let applied = calls.lock().len();

        assert!(!compositor.on_resize(1400.0, 900.0).unwrap());
        assert!(!compositor.on_resize(1400.0, 900.0).unwrap());
        assert_eq!(calls.lock().len(), applied);
        assert_eq!(
            compositor.layout().content,
            Bounds::new(0.0, 52.0, 1400.0, 848.0)
        );
    }

    #[test]
    fn test_zoom_operations() {
        let (compositor, calls) = compositor();

        compositor.zoom_in().unwrap();
        compositor.zoom_in().unwrap();
        let factor = compositor.zoom_in().unwrap();
        assert!((factor - 1.3).abs() < 1e-9);
        assert!((compositor.content_zoom() - 1.3).abs() < 1e-9);

        assert_eq!(compositor.reset_zoom().unwrap(), 1.0);
        assert_eq!(compositor.content_zoom(), 1.0);

        assert_eq!(compositor.set_content_zoom(9.0).unwrap(), 5.0);
        assert!(compositor.set_content_zoom(-2.0).is_err());
        assert_eq!(compositor.content_zoom(), 5.0);

        // Zoom only ever touches the content surface
        assert!(calls.lock().iter().all(|call| !matches!(
            call,
            HostCall::SetZoom(SurfaceKind::Chrome, _)
        )));
    }

    #[test]
    fn test_host_failure_propagates() {
        let (chrome, content) = specs();
        let result = Compositor::initialize(FailingHost, 52.0, &chrome, &content);
        assert!(matches!(result, Err(CompositorError::Host(_))));
    }
}
