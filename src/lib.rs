//! Keepsake drives the view and animation orchestration of a small greeting experience.
//!
//! A session moves between a landing view (with an optional video modal) and a farewell
//! view. Every view change, modal toggle or compact-mode flip mounts a freshly composed
//! [`Scene`]: deterministic background glows, a randomized batch of rising particles and,
//! in full mode, a few floating accents. The public surface is stage-oriented:
//!
//! - Build a [`StageConfig`] (or load one from JSON)
//! - Create a [`Stage`] over an [`AnimationScheduler`] such as [`Timeline`]
//! - Feed it transitions, control presses and compact-mode signals
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Looping animation descriptors and their generator.
pub mod animation;
/// Stage configuration.
pub mod config;
/// Scene model and composition.
pub mod scene;
/// Animation schedulers.
pub mod schedule;
/// Stage: the single owner of a running session.
pub mod session;
/// Compact-mode signals.
pub mod signal;
/// View state machine.
pub mod state;

pub use crate::foundation::core::{Affine, Anchor, Point, SecondsRange, Vec2, Viewport};
pub use crate::foundation::error::{KeepsakeError, KeepsakeResult};
pub use crate::foundation::random::{RandomSource, SplitMix64, ThreadRandom};

pub use crate::animation::descriptor::{
    AnimationDescriptor, BatchId, DescriptorBatch, DescriptorId, Repeat,
};
pub use crate::animation::ease::Ease;
pub use crate::animation::generate::{DescriptorGenerator, ParticleStyle};
pub use crate::animation::path::{Channel, MotionPath, Pose, Track};
pub use crate::config::{DEFAULT_VIDEO_URL, LayerConfig, StageConfig};
pub use crate::scene::compose::SceneComposer;
pub use crate::scene::{Content, Control, Glow, Scene, SceneKind, VideoEmbed};
pub use crate::schedule::AnimationScheduler;
pub use crate::schedule::timeline::{SampledAnimation, Timeline, TimelineHandle};
pub use crate::session::{ModalProps, Stage};
pub use crate::signal::{Breakpoint, CompactSignal, ViewportSignal};
pub use crate::state::machine::{Transition, ViewMachine, ViewState};
