use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::generate::ParticleStyle,
    foundation::{
        core::{SecondsRange, Viewport},
        error::{KeepsakeError, KeepsakeResult},
    },
    scene::SceneKind,
    signal::Breakpoint,
};

/// Embedded video shown in the landing modal.
pub const DEFAULT_VIDEO_URL: &str =
    "https://drive.google.com/file/d/1k6lI9LIQvWBufikVbcc8Cbwau8tIjXWI/preview";

/// Particle layer settings for one view.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerConfig {
    /// Particle count in full mode.
    pub particles_full: usize,
    /// Particle count in compact mode.
    pub particles_compact: usize,
    /// Loop duration range in full mode.
    pub duration_full: SecondsRange,
    /// Loop duration range in compact mode.
    pub duration_compact: SecondsRange,
}

impl LayerConfig {
    /// Rising-particle layer of the landing view.
    pub const LANDING: LayerConfig = LayerConfig {
        particles_full: 25,
        particles_compact: 8,
        duration_full: SecondsRange {
            start: 8.0,
            end: 20.0,
        },
        duration_compact: SecondsRange {
            start: 8.0,
            end: 14.0,
        },
    };

    /// Rising-particle layer of the farewell view.
    pub const FAREWELL: LayerConfig = LayerConfig {
        particles_full: 30,
        particles_compact: 10,
        duration_full: SecondsRange {
            start: 10.0,
            end: 20.0,
        },
        duration_compact: SecondsRange {
            start: 10.0,
            end: 16.0,
        },
    };

    /// Particle count for the given mode.
    pub fn particle_count(&self, compact: bool) -> usize {
        if compact {
            self.particles_compact
        } else {
            self.particles_full
        }
    }

    fn validate(&self, name: &str) -> KeepsakeResult<()> {
        self.duration_full
            .validate(&format!("{name}.duration_full"))?;
        self.duration_compact
            .validate(&format!("{name}.duration_compact"))?;
        if self.particles_compact > self.particles_full {
            return Err(KeepsakeError::config(format!(
                "{name}.particles_compact ({}) must not exceed particles_full ({})",
                self.particles_compact, self.particles_full
            )));
        }
        if self.duration_compact.end > self.duration_full.end {
            return Err(KeepsakeError::config(format!(
                "{name}.duration_compact must not outlast duration_full"
            )));
        }
        Ok(())
    }
}

/// Tunables for the whole experience. Every field has a default, so a partial JSON
/// document only overrides what it names.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Widths strictly below this value are compact.
    pub breakpoint_px: f64,
    /// Viewport used when the environment reports none.
    pub fallback_viewport: Viewport,
    /// Video embedded in the landing modal.
    pub video_url: String,
    /// Stagger delay range shared by both particle layers.
    pub delay: SecondsRange,
    /// Distance below the bottom edge where particles spawn.
    pub spawn_offset_px: f64,
    /// Vertical position particles rise to.
    pub exit_y_px: f64,
    /// Landing particle layer.
    pub landing: LayerConfig,
    /// Farewell particle layer.
    pub farewell: LayerConfig,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: Breakpoint::DEFAULT_PX,
            fallback_viewport: Viewport::FALLBACK,
            video_url: DEFAULT_VIDEO_URL.to_owned(),
            delay: SecondsRange {
                start: 0.0,
                end: 5.0,
            },
            spawn_offset_px: 50.0,
            exit_y_px: -50.0,
            landing: LayerConfig::LANDING,
            farewell: LayerConfig::FAREWELL,
        }
    }
}

impl StageConfig {
    /// Parse a configuration from a JSON reader. The result is validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> KeepsakeResult<Self> {
        let cfg: StageConfig = serde_json::from_reader(r)
            .map_err(|e| KeepsakeError::serde(format!("parse stage config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON string. The result is validated.
    pub fn from_json_str(s: &str) -> KeepsakeResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a configuration from a JSON file on disk. The result is validated.
    pub fn from_path(path: impl AsRef<Path>) -> KeepsakeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            KeepsakeError::config(format!("open stage config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every value is usable.
    pub fn validate(&self) -> KeepsakeResult<()> {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            return Err(KeepsakeError::validation(
                "breakpoint_px must be finite and > 0",
            ));
        }
        if !self.fallback_viewport.is_usable() {
            return Err(KeepsakeError::validation(
                "fallback_viewport must have finite, positive sides",
            ));
        }
        if self.video_url.trim().is_empty() {
            return Err(KeepsakeError::validation("video_url must be non-empty"));
        }
        self.delay.validate("delay")?;
        if !self.spawn_offset_px.is_finite() || self.spawn_offset_px < 0.0 {
            return Err(KeepsakeError::validation(
                "spawn_offset_px must be finite and >= 0",
            ));
        }
        if !self.exit_y_px.is_finite() || self.exit_y_px > 0.0 {
            return Err(KeepsakeError::validation(
                "exit_y_px must be finite and <= 0",
            ));
        }
        self.landing.validate("landing")?;
        self.farewell.validate("farewell")?;
        Ok(())
    }

    /// Particle layer of `kind`.
    pub fn layer(&self, kind: SceneKind) -> &LayerConfig {
        match kind {
            SceneKind::Landing => &self.landing,
            SceneKind::Farewell => &self.farewell,
        }
    }

    /// Generator parameters for the particle layer of `kind`.
    pub fn particle_style(&self, kind: SceneKind) -> ParticleStyle {
        let layer = self.layer(kind);
        ParticleStyle {
            duration_full: layer.duration_full,
            duration_compact: layer.duration_compact,
            delay: self.delay,
            spawn_offset_px: self.spawn_offset_px,
            exit_y_px: self.exit_y_px,
        }
    }

    /// Compact-mode classifier built from `breakpoint_px`.
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.breakpoint_px)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
