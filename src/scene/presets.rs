//! Fixed decorations of each scene.
//!
//! Every scene has two glows shown in both modes and three more shown only in full
//! mode. Compact glows pulse (scale + opacity); full glows also drift or spin.
//!
//! Foreground loops animate the header icons, button shimmers and farewell card. The
//! centre header icon and the card loops keep running in compact mode.

use crate::{
    animation::{
        ease::Ease,
        generate::{DecorPreset, PathPreset},
        path::Channel::{self, Opacity, Rotate, Scale, TranslateX, TranslateY},
    },
    foundation::core::Anchor,
    scene::SceneKind,
};

/// Blur radius of glows in full mode.
pub const GLOW_BLUR_FULL_PX: f64 = 64.0;
/// Blur radius of glows in compact mode.
pub const GLOW_BLUR_COMPACT_PX: f64 = 40.0;

/// A background glow: a decoration plus its size per mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPreset {
    /// Position and motion.
    pub decor: DecorPreset,
    /// Diameter in full mode.
    pub diameter_full_px: f64,
    /// Diameter in compact mode.
    pub diameter_compact_px: f64,
}

impl GlowPreset {
    /// Diameter for the given mode.
    pub fn diameter(&self, compact: bool) -> f64 {
        if compact {
            self.diameter_compact_px
        } else {
            self.diameter_full_px
        }
    }
}

/// Blur radius of every glow in the given mode.
pub fn glow_blur(compact: bool) -> f64 {
    if compact {
        GLOW_BLUR_COMPACT_PX
    } else {
        GLOW_BLUR_FULL_PX
    }
}

const fn looped(tracks: &'static [(Channel, &'static [f64])], duration_s: f64) -> PathPreset {
    PathPreset {
        tracks,
        duration_s,
        delay_s: 0.0,
        easing: Ease::EaseInOut,
    }
}

static LANDING_GLOWS: [GlowPreset; 5] = [
    GlowPreset {
        decor: DecorPreset {
            anchor: Anchor::TOP_LEFT,
            full: looped(
                &[
                    (Scale, &[1.0, 1.3, 1.0]),
                    (Opacity, &[0.4, 0.6, 0.4]),
                    (TranslateX, &[0.0, 100.0, 0.0]),
                    (TranslateY, &[0.0, 50.0, 0.0]),
                ],
                10.0,
            ),
            compact: Some(looped(
                &[(Scale, &[1.0, 1.15, 1.0]), (Opacity, &[0.4, 0.5, 0.4])],
                8.0,
            )),
        },
        diameter_full_px: 500.0,
        diameter_compact_px: 300.0,
    },
    GlowPreset {
        decor: DecorPreset {
            anchor: Anchor::BOTTOM_RIGHT,
            full: looped(
                &[
                    (Scale, &[1.2, 1.0, 1.2]),
                    (Opacity, &[0.5, 0.7, 0.5]),
                    (TranslateX, &[0.0, -80.0, 0.0]),
                    (TranslateY, &[0.0, -60.0, 0.0]),
                ],
                12.0,
            ),
            compact: Some(looped(
                &[(Scale, &[1.1, 1.0, 1.1]), (Opacity, &[0.4, 0.5, 0.4])],
                9.0,
            )),
        },
        diameter_full_px: 500.0,
        diameter_compact_px: 300.0,
    },
    GlowPreset {
        decor: DecorPreset {
            anchor: Anchor::CENTER,
            full: looped(
                &[
                    (Scale, &[1.0, 1.4, 1.0]),
                    (Opacity, &[0.3, 0.5, 0.3]),
                    (Rotate, &[0.0, 180.0, 360.0]),
                ],
                15.0,
            ),
            compact: None,
        },
        diameter_full_px: 384.0,
        diameter_compact_px: 384.0,
    },
    GlowPreset {
        decor: DecorPreset {
            anchor: Anchor::new(0.75, 0.25),
            full: looped(
                &[
                    (Scale, &[1.1, 1.0, 1.1]),
                    (Opacity, &[0.3, 0.5, 0.3]),
                    (TranslateX, &[0.0, -60.0, 0.0]),
                ],
                11.0,
            ),
            compact: None,
        },
        diameter_full_px: 320.0,
        diameter_compact_px: 320.0,
    },
    GlowPreset {
        decor: DecorPreset {
            anchor: Anchor::new(1.0 / 3.0, 2.0 / 3.0),
            full: looped(
                &[
                    (Scale, &[1.0, 1.2, 1.0]),
                    (Opacity, &[0.4, 0.6, 0.4]),
                    (TranslateY, &[0.0, 80.0, 0.0]),
                ],
                13.0,
            ),
            compact: None,
        },
        diameter_full_px: 288.0,
        diameter_compact_px: 288.0,
    },
];

static FAREWELL_GLOWS: [GlowPreset; 5] = [
    GlowPreset {
        decor: DecorPreset {
            anchor: Anchor::TOP_LEFT,
            full: looped(
                &[
                    (Scale, &[1.0, 1.2, 1.0]),
                    (Opacity, &[0.3, 0.5, 0.3]),
                    (TranslateX, &[0.0, 100.0, 0.0]),
                    (TranslateY, &[0.0, 50.0, 0.0]),
                ],
                8.0,
            ),
            compact: Some(looped(
                &[(Scale, &[1.0, 1.15, 1.0]), (Opacity, &[0.3, 0.4, 0.3])],
                6.0,
            )),
        },
        diameter_full_px: 384.0,
        diameter_compact_px: 256.0,
    },
    GlowPreset {
        decor: DecorPreset {
            anchor: Anchor::BOTTOM_RIGHT,
            full: looped(
                &[
                    (Scale, &[1.2, 1.0, 1.2]),
                    (Opacity, &[0.4, 0.6, 0.4]),
                    (TranslateX, &[0.0, -80.0, 0.0]),
                    (TranslateY, &[0.0, -60.0, 0.0]),
                ],
                10.0,
            ),
            compact: Some(looped(
                &[(Scale, &[1.1, 1.0, 1.1]), (Opacity, &[0.3, 0.5, 0.3])],
                8.0,
            )),
        },
        diameter_full_px: 384.0,
        diameter_compact_px: 256.0,
    },
    GlowPreset {
        decor: DecorPreset {
            anchor: Anchor::CENTER,
            full: looped(
                &[
                    (Scale, &[1.0, 1.3, 1.0]),
                    (Opacity, &[0.3, 0.5, 0.3]),
                    (Rotate, &[0.0, 180.0, 360.0]),
                ],
                12.0,
            ),
            compact: None,
        },
        diameter_full_px: 384.0,
        diameter_compact_px: 384.0,
    },
    GlowPreset {
        decor: DecorPreset {
            anchor: Anchor::new(0.75, 0.25),
            full: looped(
                &[
                    (Scale, &[1.0, 1.1, 1.0]),
                    (Opacity, &[0.2, 0.4, 0.2]),
                    (TranslateX, &[0.0, -50.0, 0.0]),
                ],
                9.0,
            ),
            compact: None,
        },
        diameter_full_px: 320.0,
        diameter_compact_px: 320.0,
    },
    GlowPreset {
        decor: DecorPreset {
            anchor: Anchor::new(0.25, 0.75),
            full: looped(
                &[
                    (Scale, &[1.1, 1.0, 1.1]),
                    (Opacity, &[0.25, 0.45, 0.25]),
                    (TranslateY, &[0.0, 70.0, 0.0]),
                ],
                11.0,
            ),
            compact: None,
        },
        diameter_full_px: 320.0,
        diameter_compact_px: 320.0,
    },
];

static LANDING_ACCENTS: [DecorPreset; 3] = [
    DecorPreset {
        anchor: Anchor::new(0.02, 0.25),
        full: looped(
            &[(TranslateY, &[0.0, -20.0, 0.0]), (Rotate, &[0.0, 10.0, 0.0])],
            4.0,
        ),
        compact: None,
    },
    DecorPreset {
        anchor: Anchor::new(0.98, 1.0 / 3.0),
        full: PathPreset {
            tracks: &[(TranslateY, &[0.0, 20.0, 0.0]), (Rotate, &[0.0, -10.0, 0.0])],
            duration_s: 5.0,
            delay_s: 1.0,
            easing: Ease::EaseInOut,
        },
        compact: None,
    },
    DecorPreset {
        anchor: Anchor::new(0.25, 0.75),
        full: PathPreset {
            tracks: &[(Scale, &[1.0, 1.2, 1.0]), (Rotate, &[0.0, 180.0, 360.0])],
            duration_s: 8.0,
            delay_s: 0.0,
            easing: Ease::Linear,
        },
        compact: None,
    },
];

const fn spin(tracks: &'static [(Channel, &'static [f64])], duration_s: f64) -> PathPreset {
    PathPreset {
        tracks,
        duration_s,
        delay_s: 0.0,
        easing: Ease::Linear,
    }
}

const fn delayed(preset: PathPreset, delay_s: f64) -> PathPreset {
    PathPreset { delay_s, ..preset }
}

const fn both_modes(anchor: Anchor, preset: PathPreset) -> DecorPreset {
    DecorPreset {
        anchor,
        full: preset,
        compact: Some(preset),
    }
}

const fn full_only(anchor: Anchor, preset: PathPreset) -> DecorPreset {
    DecorPreset {
        anchor,
        full: preset,
        compact: None,
    }
}

const SHIMMER: PathPreset = looped(&[(Scale, &[1.0, 1.2, 1.0])], 2.0);

static LANDING_FOREGROUND: [DecorPreset; 5] = [
    full_only(
        Anchor::new(0.44, 0.2),
        spin(&[(Rotate, &[0.0, 360.0]), (Scale, &[1.0, 1.1, 1.0])], 20.0),
    ),
    both_modes(
        Anchor::new(0.5, 0.2),
        looped(&[(TranslateY, &[0.0, -10.0, 0.0])], 3.0),
    ),
    full_only(
        Anchor::new(0.56, 0.2),
        spin(&[(Rotate, &[0.0, -360.0]), (Scale, &[1.0, 1.1, 1.0])], 20.0),
    ),
    full_only(Anchor::new(0.4, 0.7), SHIMMER),
    full_only(Anchor::new(0.6, 0.7), SHIMMER),
];

static FAREWELL_FOREGROUND: [DecorPreset; 7] = [
    full_only(
        Anchor::new(0.42, 0.12),
        looped(&[(TranslateY, &[0.0, -10.0, 0.0]), (Rotate, &[0.0, 5.0, 0.0])], 3.0),
    ),
    both_modes(
        Anchor::new(0.5, 0.12),
        delayed(
            looped(&[(TranslateY, &[0.0, -15.0, 0.0]), (Scale, &[1.0, 1.05, 1.0])], 3.0),
            0.2,
        ),
    ),
    full_only(
        Anchor::new(0.58, 0.12),
        delayed(
            looped(&[(TranslateY, &[0.0, -10.0, 0.0]), (Rotate, &[0.0, -5.0, 0.0])], 3.0),
            0.4,
        ),
    ),
    // Card signature heart, card corner sparkle and star, quote sparkle.
    both_modes(
        Anchor::new(0.72, 0.74),
        looped(&[(Scale, &[1.0, 1.1, 1.0]), (Rotate, &[0.0, 10.0, 0.0])], 2.0),
    ),
    both_modes(
        Anchor::new(0.8, 0.3),
        spin(&[(Rotate, &[0.0, 360.0]), (Scale, &[1.0, 1.2, 1.0])], 20.0),
    ),
    both_modes(
        Anchor::new(0.2, 0.78),
        spin(&[(Rotate, &[360.0, 0.0]), (Scale, &[1.0, 1.1, 1.0])], 15.0),
    ),
    both_modes(
        Anchor::new(0.3, 0.9),
        spin(&[(Rotate, &[0.0, 360.0]), (Scale, &[1.0, 1.2, 1.0])], 15.0),
    ),
];

const fn heart(i: u8) -> DecorPreset {
    let i = i as f64;
    DecorPreset {
        anchor: Anchor::new(0.20 + 0.15 * i, 0.10 + 0.20 * i),
        full: PathPreset {
            tracks: &[(TranslateY, &[0.0, -20.0, 0.0]), (Opacity, &[0.2, 0.4, 0.2])],
            duration_s: 3.0 + i,
            delay_s: 0.5 * i,
            easing: Ease::EaseInOut,
        },
        compact: None,
    }
}

static FAREWELL_ACCENTS: [DecorPreset; 5] = [heart(0), heart(1), heart(2), heart(3), heart(4)];

/// Glows of `kind`, always-present ones first.
pub fn glows(kind: SceneKind) -> &'static [GlowPreset] {
    match kind {
        SceneKind::Landing => &LANDING_GLOWS,
        SceneKind::Farewell => &FAREWELL_GLOWS,
    }
}

/// Full-mode-only floating accents of `kind`.
pub fn accents(kind: SceneKind) -> &'static [DecorPreset] {
    match kind {
        SceneKind::Landing => &LANDING_ACCENTS,
        SceneKind::Farewell => &FAREWELL_ACCENTS,
    }
}

/// Header, button and card loops of `kind`.
pub fn foreground(kind: SceneKind) -> &'static [DecorPreset] {
    match kind {
        SceneKind::Landing => &LANDING_FOREGROUND,
        SceneKind::Farewell => &FAREWELL_FOREGROUND,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
