use std::ops::Range;

use crate::foundation::error::{KeepsakeError, KeepsakeResult};

pub use kurbo::{Affine, Point, Vec2};

/// Visible area, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
}

impl Viewport {
    /// Used whenever no usable viewport is available (headless, zero-sized frames).
    pub const FALLBACK: Viewport = Viewport {
        width: 1000.0,
        height: 1000.0,
    };

    /// Build a viewport from its size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both sides are finite and strictly positive.
    pub fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Pick `probe` when it is usable, `fallback` otherwise.
    pub fn resolve(probe: Option<Viewport>, fallback: Viewport) -> Viewport {
        match probe {
            Some(v) if v.is_usable() => v,
            _ => {
                tracing::debug!(?probe, ?fallback, "viewport unavailable, using fallback");
                fallback
            }
        }
    }

    /// Half-open horizontal span `[0, width)`.
    pub fn x_span(self) -> Range<f64> {
        0.0..self.width
    }
}

/// Half-open range of seconds, `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SecondsRange {
    /// Inclusive lower bound.
    pub start: f64,
    /// Exclusive upper bound.
    pub end: f64,
}

impl SecondsRange {
    /// Build a validated range.
    pub fn new(start: f64, end: f64) -> KeepsakeResult<Self> {
        let r = Self { start, end };
        r.validate("range")?;
        Ok(r)
    }

    /// Check `0 <= start < end`, both finite. `what` names the range in the error.
    pub fn validate(self, what: &str) -> KeepsakeResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(KeepsakeError::validation(format!(
                "{what} bounds must be finite"
            )));
        }
        if self.start < 0.0 {
            return Err(KeepsakeError::validation(format!(
                "{what} start must be >= 0"
            )));
        }
        if self.start >= self.end {
            return Err(KeepsakeError::validation(format!(
                "{what} start must be < end"
            )));
        }
        Ok(())
    }

    /// Whether `v` lies in `[start, end)`.
    pub fn contains(self, v: f64) -> bool {
        self.start <= v && v < self.end
    }

    /// `end - start`.
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Whether `self` lies entirely within `outer`.
    pub fn is_within(self, outer: SecondsRange) -> bool {
        outer.start <= self.start && self.end <= outer.end
    }

    /// The same bounds as a std range, for sampling.
    pub fn as_range(self) -> Range<f64> {
        self.start..self.end
    }
}

/// Position expressed as fractions of the viewport (`(0, 0)` top-left, `(1, 1)`
/// bottom-right).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    /// Horizontal fraction.
    pub fx: f64,
    /// Vertical fraction.
    pub fy: f64,
}

impl Anchor {
    /// Top-left corner.
    pub const TOP_LEFT: Anchor = Anchor::new(0.0, 0.0);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Anchor = Anchor::new(1.0, 1.0);
    /// Viewport center.
    pub const CENTER: Anchor = Anchor::new(0.5, 0.5);

    /// Build an anchor from fractions.
    pub const fn new(fx: f64, fy: f64) -> Self {
        Self { fx, fy }
    }

    /// Absolute position of this anchor inside `viewport`.
    pub fn resolve(self, viewport: Viewport) -> Point {
        Point::new(self.fx * viewport.width, self.fy * viewport.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
