use crate::{
    config::StageConfig,
    foundation::{core::Viewport, error::KeepsakeResult, random::RandomSource},
    scene::{Control, Scene, compose::SceneComposer},
    schedule::AnimationScheduler,
    signal::{Breakpoint, CompactSignal},
    state::machine::{Transition, ViewMachine, ViewState},
};

/// Props handed to the video modal.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ModalProps {
    /// Whether the modal is shown.
    pub open: bool,
    /// Embedded video URL.
    pub url: String,
}

struct Mounted<H> {
    scene: Scene,
    // Dropping these cancels the scene's animations.
    handles: Vec<H>,
}

/// Single owner of a running greeting session.
///
/// The stage holds the view machine, the compact flag and the mounted scene together with the
/// scheduler handles of its animations. Any change to the view state (the modal flag included)
/// or to the compact flag unmounts the current scene and mounts a freshly composed one.
pub struct Stage<S: AnimationScheduler> {
    machine: ViewMachine,
    compact: bool,
    viewport: Option<Viewport>,
    breakpoint: Breakpoint,
    composer: SceneComposer,
    scheduler: S,
    rng: Box<dyn RandomSource>,
    mounted: Mounted<S::Handle>,
    mount_count: u64,
}

impl<S: AnimationScheduler> Stage<S> {
    /// Validate `config` and mount the landing scene.
    ///
    /// Compact mode is derived from `viewport` through the configured breakpoint; an unknown
    /// viewport starts in full mode and lays decorations out against the fallback viewport.
    pub fn new(
        config: StageConfig,
        scheduler: S,
        rng: impl RandomSource + 'static,
        viewport: Option<Viewport>,
    ) -> KeepsakeResult<Self> {
        config.validate()?;
        let breakpoint = config.breakpoint();
        let compact = breakpoint.classify(viewport);
        let machine = ViewMachine::new();
        let mut composer = SceneComposer::new(config);
        let mut rng: Box<dyn RandomSource> = Box::new(rng);

        let scene = composer.compose(machine.state(), compact, viewport, &mut *rng);
        let handles = schedule_all(&scheduler, &scene);
        tracing::info!(
            kind = ?scene.kind,
            compact,
            animations = handles.len(),
            "stage mounted"
        );

        Ok(Self {
            machine,
            compact,
            viewport,
            breakpoint,
            composer,
            scheduler,
            rng,
            mounted: Mounted { scene, handles },
            mount_count: 1,
        })
    }

    /// Current view state.
    pub fn state(&self) -> ViewState {
        self.machine.state()
    }

    /// Current compact flag.
    pub fn compact(&self) -> bool {
        self.compact
    }

    /// Last known viewport.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Mounted scene.
    pub fn scene(&self) -> &Scene {
        &self.mounted.scene
    }

    /// Scheduler driving the mounted animations.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Number of scenes mounted so far, the initial one included.
    pub fn mount_count(&self) -> u64 {
        self.mount_count
    }

    /// Apply `transition`; remounts when the state changes. Returns whether it did.
    pub fn dispatch(&mut self, transition: Transition) -> bool {
        if !self.machine.dispatch(transition) {
            return false;
        }
        self.remount();
        true
    }

    /// Handle a press on `control`. Presses on controls the mounted scene does not render
    /// are dropped.
    pub fn press(&mut self, control: Control) -> bool {
        if !self.mounted.scene.shows(control) {
            tracing::debug!(?control, kind = ?self.mounted.scene.kind, "press on hidden control");
            return false;
        }
        self.dispatch(control.transition())
    }

    /// Close request coming from the video modal.
    pub fn request_close(&mut self) -> bool {
        self.dispatch(Transition::CloseVideo)
    }

    /// Props for the video modal.
    pub fn modal(&self) -> ModalProps {
        ModalProps {
            open: self.machine.state().is_video_open(),
            url: self.composer.config().video_url.clone(),
        }
    }

    /// Compact-flag notification; remounts when the flag flips. Returns whether it did.
    pub fn set_compact(&mut self, compact: bool) -> bool {
        if compact == self.compact {
            return false;
        }
        tracing::debug!(from = self.compact, to = compact, "compact mode changed");
        self.compact = compact;
        self.remount();
        true
    }

    /// Re-read `signal` and apply its value.
    pub fn sync(&mut self, signal: &dyn CompactSignal) -> bool {
        self.set_compact(signal.is_compact())
    }

    /// Store a new viewport and re-classify compact mode. Only a mode flip regenerates
    /// the scene.
    ///
    /// An unusable viewport (zero-sized or non-finite) is stored so later scenes lay out
    /// against the fallback, but it never changes the mode.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.viewport = Some(viewport);
        if !viewport.is_usable() {
            tracing::debug!(?viewport, compact = self.compact, "unusable viewport, keeping mode");
            return false;
        }
        self.set_compact(self.breakpoint.classify(self.viewport))
    }

    fn remount(&mut self) {
        self.mounted.handles.clear();

        let scene = self.composer.compose(
            self.machine.state(),
            self.compact,
            self.viewport,
            &mut *self.rng,
        );
        let handles = schedule_all(&self.scheduler, &scene);
        self.mount_count += 1;
        tracing::info!(
            kind = ?scene.kind,
            compact = self.compact,
            video_open = self.machine.state().is_video_open(),
            animations = handles.len(),
            mount = self.mount_count,
            "scene remounted"
        );
        self.mounted = Mounted { scene, handles };
    }
}

fn schedule_all<S: AnimationScheduler>(scheduler: &S, scene: &Scene) -> Vec<S::Handle> {
    scene.descriptors().map(|d| scheduler.schedule(d)).collect()
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
