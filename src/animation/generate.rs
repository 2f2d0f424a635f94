use crate::{
    animation::{
        descriptor::{AnimationDescriptor, BatchId, DescriptorBatch, DescriptorId, Repeat},
        ease::Ease,
        path::{Channel, MotionPath},
    },
    foundation::{
        core::{Anchor, Point, SecondsRange, Viewport},
        random::RandomSource,
    },
};

/// Parameters of a rising particle layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleStyle {
    /// Loop duration range in full mode.
    pub duration_full: SecondsRange,
    /// Loop duration range in compact mode.
    pub duration_compact: SecondsRange,
    /// Stagger delay range.
    pub delay: SecondsRange,
    /// Distance below the bottom edge where particles spawn.
    pub spawn_offset_px: f64,
    /// Vertical position particles rise to (negative is above the top edge).
    pub exit_y_px: f64,
}

impl ParticleStyle {
    /// Duration range for the given mode.
    pub fn duration(&self, compact: bool) -> SecondsRange {
        if compact {
            self.duration_compact
        } else {
            self.duration_full
        }
    }
}

/// Fixed motion of a deterministic decoration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPreset {
    /// Channel keyframes.
    pub tracks: &'static [(Channel, &'static [f64])],
    /// Loop duration.
    pub duration_s: f64,
    /// Start delay.
    pub delay_s: f64,
    /// Segment easing.
    pub easing: Ease,
}

impl PathPreset {
    /// Owned motion path for this preset.
    pub fn motion_path(&self) -> MotionPath {
        self.tracks
            .iter()
            .fold(MotionPath::new(), |path, (channel, values)| {
                path.with(*channel, values.to_vec())
            })
    }
}

/// Deterministic decoration with a full-mode motion and an optional compact one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorPreset {
    /// Resting position.
    pub anchor: Anchor,
    /// Motion used in full mode.
    pub full: PathPreset,
    /// Motion used in compact mode; `None` hides the decoration there.
    pub compact: Option<PathPreset>,
}

impl DecorPreset {
    /// Motion for `compact`, or `None` when the decoration is not shown in that mode.
    pub fn variant(&self, compact: bool) -> Option<&PathPreset> {
        if compact {
            self.compact.as_ref()
        } else {
            Some(&self.full)
        }
    }
}

/// Produces fresh descriptor batches. Owns batch identity allocation.
#[derive(Debug)]
pub struct DescriptorGenerator {
    next_batch: u64,
    fallback: Viewport,
}

impl Default for DescriptorGenerator {
    fn default() -> Self {
        Self::new(Viewport::FALLBACK)
    }
}

impl DescriptorGenerator {
    /// Build a generator that substitutes `fallback` for unusable viewports.
    pub fn new(fallback: Viewport) -> Self {
        Self {
            next_batch: 1,
            fallback,
        }
    }

    /// Viewport used when none is available.
    pub fn fallback(&self) -> Viewport {
        self.fallback
    }

    fn allocate(&mut self) -> BatchId {
        let id = BatchId(self.next_batch);
        self.next_batch += 1;
        id
    }

    /// Generate `count` rising particles.
    ///
    /// Each particle spawns at a uniform `x` in `[0, width)` just below the bottom edge
    /// and rises past the top edge. Full mode adds horizontal drift toward a second
    /// uniform `x`. Durations come from the mode's range; delays stagger the starts.
    pub fn generate(
        &mut self,
        count: usize,
        compact: bool,
        viewport: Option<Viewport>,
        style: &ParticleStyle,
        rng: &mut dyn RandomSource,
    ) -> DescriptorBatch {
        let viewport = Viewport::resolve(viewport, self.fallback);
        let batch = self.allocate();
        let start_y = viewport.height + style.spawn_offset_px;
        let rise = style.exit_y_px - start_y;

        let descriptors = (0..count)
            .map(|i| {
                let x0 = rng.next_f64(viewport.x_span());
                let mut motion_path = MotionPath::new().with(Channel::TranslateY, [0.0, rise]);
                if !compact {
                    let x1 = rng.next_f64(viewport.x_span());
                    motion_path = motion_path.with(Channel::TranslateX, [0.0, x1 - x0]);
                }
                AnimationDescriptor {
                    id: DescriptorId {
                        batch,
                        ordinal: i,
                    },
                    initial_position: Point::new(x0, start_y),
                    motion_path,
                    duration_s: rng.next_f64(style.duration(compact).as_range()),
                    repeat: Repeat::Infinite,
                    delay_s: rng.next_f64(style.delay.as_range()),
                    easing: Ease::Linear,
                }
            })
            .collect();

        DescriptorBatch::new(batch, compact, descriptors)
    }

    /// Turn deterministic presets into descriptors, skipping presets hidden in this
    /// mode.
    pub fn fixed<'a>(
        &mut self,
        compact: bool,
        presets: impl IntoIterator<Item = &'a DecorPreset>,
        viewport: Option<Viewport>,
    ) -> DescriptorBatch {
        let viewport = Viewport::resolve(viewport, self.fallback);
        let batch = self.allocate();

        let descriptors = presets
            .into_iter()
            .filter_map(|p| p.variant(compact).map(|v| (p.anchor, v)))
            .enumerate()
            .map(|(i, (anchor, v))| AnimationDescriptor {
                id: DescriptorId {
                    batch,
                    ordinal: i,
                },
                initial_position: anchor.resolve(viewport),
                motion_path: v.motion_path(),
                duration_s: v.duration_s,
                repeat: Repeat::Infinite,
                delay_s: v.delay_s,
                easing: v.easing,
            })
            .collect();

        DescriptorBatch::new(batch, compact, descriptors)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/generate.rs"]
mod tests;
