/// Scene composition.
pub mod compose;
/// Built-in decoration presets.
pub mod presets;

use crate::{
    animation::descriptor::{AnimationDescriptor, DescriptorBatch},
    foundation::core::Viewport,
    state::machine::Transition,
};

/// Which view a scene renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Entry view with the two primary actions.
    Landing,
    /// Full farewell message.
    Farewell,
}

/// User-facing controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Primary button on the landing view.
    RevealMessage,
    /// Primary button on the landing view.
    WatchVideo,
    /// Secondary button on the farewell view.
    Back,
}

impl Control {
    /// Transition triggered by pressing this control.
    pub fn transition(self) -> Transition {
        match self {
            Self::RevealMessage => Transition::RevealFarewell,
            Self::WatchVideo => Transition::OpenVideo,
            Self::Back => Transition::Back,
        }
    }

    /// Button text.
    pub fn label(self) -> &'static str {
        match self {
            Self::RevealMessage => "Reveal Message",
            Self::WatchVideo => "Watch Video",
            Self::Back => "Back",
        }
    }
}

/// Third-party video shown inside the modal.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VideoEmbed {
    /// URL loaded in a sandboxed frame.
    pub url: String,
}

/// Controls and modal content of a scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Content {
    /// Controls rendered in this view, in display order.
    pub controls: Vec<Control>,
    /// Present only while the video modal is open.
    pub video: Option<VideoEmbed>,
}

/// Large blurred background glow.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Glow {
    /// Looping motion.
    pub descriptor: AnimationDescriptor,
    /// Circle diameter.
    pub diameter_px: f64,
    /// Blur radius.
    pub blur_px: f64,
}

/// Everything mounted for the active view.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    /// Rendered view.
    pub kind: SceneKind,
    /// Mode the scene was composed for.
    pub compact: bool,
    /// Viewport the decorations were laid out against.
    pub viewport: Viewport,
    /// Background glows.
    pub glows: Vec<Glow>,
    /// Rising particle layer.
    pub particles: DescriptorBatch,
    /// Full-mode floating accents (empty in compact mode).
    pub accents: DescriptorBatch,
    /// Header, button and card loops.
    pub foreground: DescriptorBatch,
    /// Controls and modal content.
    pub content: Content,
}

impl Scene {
    /// Every descriptor of the scene: glows, particles, accents, then foreground loops.
    pub fn descriptors(&self) -> impl Iterator<Item = &AnimationDescriptor> + '_ {
        self.glows
            .iter()
            .map(|g| &g.descriptor)
            .chain(self.particles.iter())
            .chain(self.accents.iter())
            .chain(self.foreground.iter())
    }

    /// Number of looping animations the scene drives.
    pub fn animation_count(&self) -> usize {
        self.glows.len() + self.particles.len() + self.accents.len() + self.foreground.len()
    }

    /// Whether `control` is rendered in this scene.
    pub fn shows(&self, control: Control) -> bool {
        self.content.controls.contains(&control)
    }
}
