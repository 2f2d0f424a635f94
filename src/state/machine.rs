use std::str::FromStr;

use crate::{
    foundation::error::{KeepsakeError, KeepsakeResult},
    scene::SceneKind,
};

/// Displayed view plus the video-modal flag.
///
/// The modal flag only exists on `Landing`, so a farewell view with an open modal
/// cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Entry view; `video_open` is the modal overlay flag.
    Landing {
        /// Whether the video modal is open.
        video_open: bool,
    },
    /// Full farewell message.
    Farewell,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Landing { video_open: false }
    }
}

impl ViewState {
    /// Scene mounted for this state.
    pub fn scene_kind(self) -> SceneKind {
        match self {
            Self::Landing { .. } => SceneKind::Landing,
            Self::Farewell => SceneKind::Farewell,
        }
    }

    /// Modal flag; always false outside `Landing`.
    pub fn is_video_open(self) -> bool {
        matches!(self, Self::Landing { video_open: true })
    }

    /// Pure transition function. Transitions not valid from `self` return `self`.
    pub fn apply(self, transition: Transition) -> ViewState {
        match (self, transition) {
            (Self::Landing { .. }, Transition::RevealFarewell) => Self::Farewell,
            (Self::Farewell, Transition::Back) => Self::Landing { video_open: false },
            (Self::Landing { .. }, Transition::OpenVideo) => Self::Landing { video_open: true },
            (Self::Landing { .. }, Transition::CloseVideo) => Self::Landing { video_open: false },
            (state, _) => state,
        }
    }
}

/// User-triggered transition requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    /// Landing to Farewell; closes the modal.
    RevealFarewell,
    /// Farewell to Landing with the modal closed.
    Back,
    /// Open the video modal (Landing only).
    OpenVideo,
    /// Close the video modal.
    CloseVideo,
}

impl Transition {
    /// Every transition, in declaration order.
    pub const ALL: [Transition; 4] = [
        Transition::RevealFarewell,
        Transition::Back,
        Transition::OpenVideo,
        Transition::CloseVideo,
    ];

    /// Canonical text form, accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RevealFarewell => "reveal",
            Self::Back => "back",
            Self::OpenVideo => "open-video",
            Self::CloseVideo => "close-video",
        }
    }
}

impl FromStr for Transition {
    type Err = KeepsakeError;

    fn from_str(s: &str) -> KeepsakeResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reveal" | "reveal-farewell" => Ok(Self::RevealFarewell),
            "back" => Ok(Self::Back),
            "open-video" | "open" => Ok(Self::OpenVideo),
            "close-video" | "close" => Ok(Self::CloseVideo),
            other => Err(KeepsakeError::validation(format!(
                "unknown transition '{other}'"
            ))),
        }
    }
}

/// Single owner of the view state.
#[derive(Clone, Debug, Default)]
pub struct ViewMachine {
    state: ViewState,
}

impl ViewMachine {
    /// Start on the landing view with the modal closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Whether `transition` would change the current state.
    pub fn is_enabled(&self, transition: Transition) -> bool {
        self.state.apply(transition) != self.state
    }

    /// Apply `transition`. Returns whether the state changed; ignored requests are
    /// logged and otherwise have no effect.
    pub fn dispatch(&mut self, transition: Transition) -> bool {
        let next = self.state.apply(transition);
        if next == self.state {
            tracing::debug!(state = ?self.state, ?transition, "transition ignored");
            return false;
        }
        tracing::debug!(from = ?self.state, to = ?next, ?transition, "transition");
        self.state = next;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/machine.rs"]
mod tests;
