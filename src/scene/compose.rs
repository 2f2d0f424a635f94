use crate::{
    animation::generate::DescriptorGenerator,
    config::StageConfig,
    foundation::{core::Viewport, random::RandomSource},
    scene::{Content, Control, Glow, Scene, SceneKind, VideoEmbed, presets},
    state::machine::ViewState,
};

/// Builds the full scene for a view state. Every call regenerates every descriptor.
#[derive(Debug)]
pub struct SceneComposer {
    config: StageConfig,
    generator: DescriptorGenerator,
}

impl SceneComposer {
    /// Build a composer. `config` is expected to be validated.
    pub fn new(config: StageConfig) -> Self {
        let generator = DescriptorGenerator::new(config.fallback_viewport);
        Self { config, generator }
    }

    /// Configuration in use.
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    #[tracing::instrument(skip(self, rng))]
    /// Compose the scene for `view` in the given mode.
    pub fn compose(
        &mut self,
        view: ViewState,
        compact: bool,
        viewport: Option<Viewport>,
        rng: &mut dyn RandomSource,
    ) -> Scene {
        let kind = view.scene_kind();
        let viewport = Viewport::resolve(viewport, self.config.fallback_viewport);

        let glow_presets = presets::glows(kind);
        let glow_batch = self.generator.fixed(
            compact,
            glow_presets.iter().map(|g| &g.decor),
            Some(viewport),
        );
        let glows = glow_presets
            .iter()
            .filter(|g| g.decor.variant(compact).is_some())
            .zip(glow_batch.into_vec())
            .map(|(preset, descriptor)| Glow {
                descriptor,
                diameter_px: preset.diameter(compact),
                blur_px: presets::glow_blur(compact),
            })
            .collect();

        let layer = self.config.layer(kind);
        let particles = self.generator.generate(
            layer.particle_count(compact),
            compact,
            Some(viewport),
            &self.config.particle_style(kind),
            rng,
        );
        let accents = self
            .generator
            .fixed(compact, presets::accents(kind), Some(viewport));
        let foreground = self
            .generator
            .fixed(compact, presets::foreground(kind), Some(viewport));

        let controls = match kind {
            SceneKind::Landing => vec![Control::RevealMessage, Control::WatchVideo],
            SceneKind::Farewell => vec![Control::Back],
        };
        let video = view.is_video_open().then(|| VideoEmbed {
            url: self.config.video_url.clone(),
        });

        Scene {
            kind,
            compact,
            viewport,
            glows,
            particles,
            accents,
            foreground,
            content: Content { controls, video },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
