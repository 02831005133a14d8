//! Surface tiling
//!
//! ```text
//! +-----------------------------+  y = 0
//! | chrome surface (height = H) |
//! +-----------------------------+  y = H
//! |                             |
//! | content surface             |
//! |                             |
//! +-----------------------------+  y = window height
//! ```

use serde::{Deserialize, Serialize};

/// Logical content size of a window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Surface bounds relative to the window content area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the interiors of both rectangles intersect
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Bounds of both surfaces for one window size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub chrome: Bounds,
    pub content: Bounds,
}

impl Layout {
    /// Tile a window of `width` x `height` into a chrome band of
    /// `chrome_height` and a content area below it.
    ///
    /// A window shorter than the band gives the whole height to the chrome
    /// surface and an empty content surface.
    pub fn tile(width: f64, height: f64, chrome_height: f64) -> Self {
        let width = sanitize(width);
        let height = sanitize(height);
        let band = sanitize(chrome_height).min(height);

        Self {
            chrome: Bounds::new(0.0, 0.0, width, band),
            content: Bounds::new(0.0, band, width, height - band),
        }
    }

    pub fn for_size(size: Size, chrome_height: f64) -> Self {
        Self::tile(size.width, size.height, chrome_height)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
