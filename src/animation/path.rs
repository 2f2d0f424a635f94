use crate::{
    animation::ease::Ease,
    foundation::core::{Affine, Point, Vec2},
};

/// Animatable property of a decorative element.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Horizontal offset from the initial position, in pixels.
    TranslateX,
    /// Vertical offset from the initial position, in pixels.
    TranslateY,
    /// Uniform scale factor.
    Scale,
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Rotation in degrees.
    Rotate,
}

impl Channel {
    /// Value of the channel when no track animates it.
    pub fn rest_value(self) -> f64 {
        match self {
            Self::Scale | Self::Opacity => 1.0,
            Self::TranslateX | Self::TranslateY | Self::Rotate => 0.0,
        }
    }
}

/// Keyframe values for one channel, evenly spaced over one loop.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    /// Animated property.
    pub channel: Channel,
    /// Ordered keyframe values; the first sits at progress 0 and the last at 1.
    pub values: Vec<f64>,
}

impl Track {
    /// Value at loop progress `progress` (clamped to `[0, 1]`), with `ease` applied to
    /// each segment between adjacent keyframes.
    pub fn sample(&self, progress: f64, ease: Ease) -> f64 {
        match self.values.as_slice() {
            [] => self.channel.rest_value(),
            [only] => *only,
            values => {
                let segments = values.len() - 1;
                let pos = progress.clamp(0.0, 1.0) * segments as f64;
                let i = (pos.floor() as usize).min(segments - 1);
                let local = ease.apply(pos - i as f64);
                let (a, b) = (values[i], values[i + 1]);
                a + (b - a) * local
            }
        }
    }
}

/// Ordered set of channel tracks describing one looped motion.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionPath {
    /// Tracks in insertion order; at most one per channel.
    pub tracks: Vec<Track>,
}

impl MotionPath {
    /// Empty path (element rests at its initial position).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the track for `channel`.
    pub fn with(mut self, channel: Channel, values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        match self.tracks.iter_mut().find(|t| t.channel == channel) {
            Some(t) => t.values = values,
            None => self.tracks.push(Track { channel, values }),
        }
        self
    }

    /// Track animating `channel`, if any.
    pub fn track(&self, channel: Channel) -> Option<&Track> {
        self.tracks.iter().find(|t| t.channel == channel)
    }

    /// Animated channels in insertion order.
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.tracks.iter().map(|t| t.channel)
    }

    /// Number of animated channels.
    pub fn axis_count(&self) -> usize {
        self.tracks.len()
    }

    /// Whether any translate or rotate channel is animated.
    pub fn has_spatial_motion(&self) -> bool {
        self.channels().any(|c| {
            matches!(
                c,
                Channel::TranslateX | Channel::TranslateY | Channel::Rotate
            )
        })
    }

    /// Resolve every channel at loop progress `progress`.
    pub fn sample(&self, progress: f64, ease: Ease) -> Pose {
        let value = |channel: Channel| {
            self.track(channel)
                .map_or(channel.rest_value(), |t| t.sample(progress, ease))
        };
        Pose {
            translate: Vec2::new(value(Channel::TranslateX), value(Channel::TranslateY)),
            scale: value(Channel::Scale),
            opacity: value(Channel::Opacity).clamp(0.0, 1.0),
            rotation_deg: value(Channel::Rotate),
        }
    }
}

/// Resolved values of every channel at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Pose {
    /// Offset from the initial position.
    pub translate: Vec2,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            opacity: 1.0,
            rotation_deg: 0.0,
        }
    }
}

impl Pose {
    /// Place an element whose pivot sits at `origin`.
    pub fn to_affine(self, origin: Point) -> Affine {
        // T(origin + translate) * R(rot) * S(scale)
        Affine::translate(origin.to_vec2() + self.translate)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/path.rs"]
mod tests;
