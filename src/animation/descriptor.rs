use crate::{
    animation::{ease::Ease, path::MotionPath, path::Pose},
    foundation::core::Point,
};

/// Identity of one generated batch. Allocated monotonically, never reused.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BatchId(pub u64);

/// Identity of one descriptor: its batch plus its ordinal inside the batch.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DescriptorId {
    /// Owning batch.
    pub batch: BatchId,
    /// Position inside the batch, starting at 0.
    pub ordinal: usize,
}

/// Repeat policy of a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Loop until the owning scene unmounts.
    Infinite,
}

/// Declarative, immutable description of one looping animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationDescriptor {
    /// Unique identity.
    pub id: DescriptorId,
    /// Where the element starts, in viewport pixels.
    pub initial_position: Point,
    /// Channel keyframes for one loop; translations are offsets from
    /// `initial_position`.
    pub motion_path: MotionPath,
    /// Length of one loop.
    pub duration_s: f64,
    /// Repeat policy.
    pub repeat: Repeat,
    /// Delay before the first loop starts.
    pub delay_s: f64,
    /// Curve applied to each keyframe segment.
    pub easing: Ease,
}

impl AnimationDescriptor {
    /// Loop progress in `[0, 1)` after `elapsed_s` seconds since scheduling.
    ///
    /// The element rests at progress 0 until its delay has elapsed.
    pub fn progress_at(&self, elapsed_s: f64) -> f64 {
        let local = elapsed_s - self.delay_s;
        if local <= 0.0 || self.duration_s <= 0.0 {
            return 0.0;
        }
        match self.repeat {
            Repeat::Infinite => local.rem_euclid(self.duration_s) / self.duration_s,
        }
    }

    /// Resolved channel values after `elapsed_s` seconds since scheduling.
    pub fn pose_at(&self, elapsed_s: f64) -> Pose {
        self.motion_path
            .sample(self.progress_at(elapsed_s), self.easing)
    }
}

/// Descriptors generated together, owned by exactly one scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DescriptorBatch {
    id: BatchId,
    compact: bool,
    descriptors: Vec<AnimationDescriptor>,
}

impl DescriptorBatch {
    pub(crate) fn new(id: BatchId, compact: bool, descriptors: Vec<AnimationDescriptor>) -> Self {
        Self {
            id,
            compact,
            descriptors,
        }
    }

    /// Batch identity.
    pub fn id(&self) -> BatchId {
        self.id
    }

    /// Mode the batch was generated for.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the batch holds no descriptors.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptors in ordinal order.
    pub fn iter(&self) -> std::slice::Iter<'_, AnimationDescriptor> {
        self.descriptors.iter()
    }

    /// Descriptors as a slice.
    pub fn as_slice(&self) -> &[AnimationDescriptor] {
        &self.descriptors
    }

    /// Take ownership of the descriptors.
    pub fn into_vec(self) -> Vec<AnimationDescriptor> {
        self.descriptors
    }
}

impl<'a> IntoIterator for &'a DescriptorBatch {
    type Item = &'a AnimationDescriptor;
    type IntoIter = std::slice::Iter<'a, AnimationDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
