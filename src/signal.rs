use crate::foundation::core::Viewport;

/// Source of the compact-mode flag.
///
/// Implementations report the current value; the [`crate::Stage`] regenerates its scene
/// when the value observed through [`crate::Stage::sync`] differs from the last one.
pub trait CompactSignal {
    /// Current compact-mode value.
    fn is_compact(&self) -> bool;
}

impl CompactSignal for bool {
    fn is_compact(&self) -> bool {
        *self
    }
}

impl<T: CompactSignal + ?Sized> CompactSignal for &T {
    fn is_compact(&self) -> bool {
        (**self).is_compact()
    }
}

/// Width threshold separating compact from full presentation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Breakpoint {
    /// Widths strictly below this value are compact.
    pub max_compact_width: f64,
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PX)
    }
}

impl Breakpoint {
    /// Conventional phone/tablet split.
    pub const DEFAULT_PX: f64 = 768.0;

    /// Build a breakpoint at `max_compact_width`.
    pub fn new(max_compact_width: f64) -> Self {
        Self { max_compact_width }
    }

    /// Classify a viewport. Missing or unusable viewports are never compact.
    pub fn classify(&self, viewport: Option<Viewport>) -> bool {
        match viewport {
            Some(v) if v.is_usable() => v.width < self.max_compact_width,
            _ => false,
        }
    }
}

/// Compact signal derived from a viewport and a breakpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSignal {
    /// Threshold used for classification.
    pub breakpoint: Breakpoint,
    /// Last reported viewport, if any.
    pub viewport: Option<Viewport>,
}

impl ViewportSignal {
    /// Signal for `viewport` at `breakpoint`.
    pub fn new(breakpoint: Breakpoint, viewport: Option<Viewport>) -> Self {
        Self {
            breakpoint,
            viewport,
        }
    }
}

impl CompactSignal for ViewportSignal {
    fn is_compact(&self) -> bool {
        self.breakpoint.classify(self.viewport)
    }
}

#[cfg(test)]
#[path = "../tests/unit/signal.rs"]
mod tests;
