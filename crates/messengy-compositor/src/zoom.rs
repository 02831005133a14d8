//! Content surface zoom factor
//!
//! Factors are clamped to [`ZoomLevel::MIN`, `ZoomLevel::MAX`] and rounded to
//! two decimals, so repeated steps add up without floating point drift.

use serde::{Deserialize, Serialize};

use crate::error::CompositorError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ZoomLevel(f64);

impl ZoomLevel {
    pub const MIN: f64 = 0.25;
    pub const MAX: f64 = 5.0;
    pub const STEP: f64 = 0.1;
    pub const DEFAULT: f64 = 1.0;

    /// Build a zoom level from a user-supplied factor.
    ///
    /// Non-finite and non-positive factors are rejected; anything else is
    /// clamped into range.
    pub fn new(factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(CompositorError::InvalidZoom(factor));
        }
        Ok(Self::clamped(factor))
    }

    fn clamped(factor: f64) -> Self {
        let rounded = (factor * 100.0).round() / 100.0;
        Self(rounded.clamp(Self::MIN, Self::MAX))
    }

    pub fn factor(&self) -> f64 {
        self.0
    }

    pub fn zoomed_in(&self) -> Self {
        Self::clamped(self.0 + Self::STEP)
    }

    pub fn zoomed_out(&self) -> Self {
        Self::clamped(self.0 - Self::STEP)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_compose_additively() {
        let zoom = ZoomLevel::default().zoomed_in().zoomed_in().zoomed_in();
        assert!((zoom.factor() - 1.3).abs() < 1e-9);

        let zoom = zoom.zoomed_out().zoomed_out().zoomed_out();
        assert_eq!(zoom.factor(), 1.0);
        assert_eq!(zoom, ZoomLevel::default());
    }

    #[test]
    fn test_clamping() {
        assert_eq!(ZoomLevel::new(12.0).unwrap().factor(), ZoomLevel::MAX);
        assert_eq!(ZoomLevel::new(0.01).unwrap().factor(), ZoomLevel::MIN);

        let mut zoom = ZoomLevel::default();
        for _ in 0..100 {
            zoom = zoom.zoomed_out();
        }
        assert_eq!(zoom.factor(), ZoomLevel::MIN);
    }

    #[test]
    fn test_invalid_factors() {
        assert!(ZoomLevel::new(0.0).is_err());
        assert!(ZoomLevel::new(-1.0).is_err());
        assert!(ZoomLevel::new(f64::NAN).is_err());
        assert!(ZoomLevel::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ZoomLevel::new(1.25).unwrap().to_string(), "125%");
    }
}
