use super::*;
use crate::foundation::random::SplitMix64;
use crate::scene::SceneKind;
use crate::schedule::timeline::Timeline;

const PHONE: Viewport = Viewport {
    width: 390.0,
    height: 844.0,
};
const DESKTOP: Viewport = Viewport {
    width: 1440.0,
    height: 900.0,
};

fn stage(viewport: Option<Viewport>) -> Stage<Timeline> {
    Stage::new(
        StageConfig::default(),
        Timeline::new(),
        SplitMix64::new(7),
        viewport,
    )
    .unwrap()
}

fn assert_handles_match(s: &Stage<Timeline>) {
    assert_eq!(s.scheduler().active_count(), s.scene().animation_count());
}

#[test]
fn mounts_landing_on_creation() {
    let s = stage(Some(DESKTOP));
    assert_eq!(s.state(), ViewState::Landing { video_open: false });
    assert_eq!(s.scene().kind, SceneKind::Landing);
    assert!(!s.compact());
    assert_eq!(s.mount_count(), 1);
    assert_handles_match(&s);
}

#[test]
fn compact_mode_follows_initial_viewport() {
    assert!(stage(Some(PHONE)).compact());
    assert!(!stage(None).compact());
    assert_eq!(stage(None).scene().viewport, Viewport::FALLBACK);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = StageConfig {
        breakpoint_px: -1.0,
        ..StageConfig::default()
    };
    assert!(Stage::new(cfg, Timeline::new(), SplitMix64::new(1), None).is_err());
}

#[test]
fn ignored_transition_keeps_scene() {
    let mut s = stage(Some(DESKTOP));
    let batch = s.scene().particles.id();
    assert!(!s.dispatch(Transition::Back));
    assert!(!s.request_close());
    assert_eq!(s.mount_count(), 1);
    assert_eq!(s.scene().particles.id(), batch);
}

#[test]
fn modal_open_and_close_regenerate() {
    let mut s = stage(Some(DESKTOP));
    let first = s.scene().particles.id();

    assert!(s.press(Control::WatchVideo));
    assert_eq!(
        s.modal(),
        ModalProps {
            open: true,
            url: crate::config::DEFAULT_VIDEO_URL.to_owned(),
        }
    );
    assert!(s.scene().content.video.is_some());
    let second = s.scene().particles.id();
    assert!(second > first);

    assert!(s.request_close());
    assert!(!s.modal().open);
    assert!(s.scene().content.video.is_none());
    assert!(s.scene().particles.id() > second);
    assert_eq!(s.mount_count(), 3);
    assert_handles_match(&s);
}

#[test]
fn press_on_hidden_control_is_dropped() {
    let mut s = stage(Some(DESKTOP));
    assert!(!s.press(Control::Back));
    assert!(s.press(Control::RevealMessage));
    assert!(!s.press(Control::WatchVideo));
    assert_eq!(s.state(), ViewState::Farewell);
    assert!(s.press(Control::Back));
    assert_eq!(s.scene().kind, SceneKind::Landing);
}

#[test]
fn old_handles_are_released_on_remount() {
    let mut s = stage(Some(DESKTOP));
    assert_eq!(s.scheduler().active_count(), 5 + 25 + 3 + 5);

    s.dispatch(Transition::RevealFarewell);
    assert_eq!(s.scheduler().active_count(), 5 + 30 + 5 + 7);
    let batch = s.scene().particles.id();
    let sampled = s.scheduler().sample();
    assert_eq!(sampled.iter().filter(|a| a.id.batch == batch).count(), 30);

    s.set_compact(true);
    assert_eq!(s.scheduler().active_count(), 2 + 10 + 5);
    assert_handles_match(&s);
}

#[test]
fn resize_only_regenerates_on_mode_flip() {
    let mut s = stage(Some(DESKTOP));
    assert!(!s.resize(Viewport::new(1024.0, 768.0)));
    assert_eq!(s.mount_count(), 1);
    assert_eq!(s.viewport(), Some(Viewport::new(1024.0, 768.0)));

    assert!(s.resize(PHONE));
    assert!(s.compact());
    assert_eq!(s.scene().particles.len(), 8);
    assert_eq!(s.scene().viewport, PHONE);
    assert_eq!(s.mount_count(), 2);
}

#[test]
fn unusable_resize_keeps_compact_mode() {
    let mut s = stage(Some(PHONE));
    assert!(s.compact());
    let batch = s.scene().particles.id();

    for degenerate in [Viewport::new(0.0, 0.0), Viewport::new(f64::NAN, 844.0)] {
        assert!(!s.resize(degenerate));
        assert!(s.compact());
        assert_eq!(s.mount_count(), 1);
        assert_eq!(s.scene().particles.id(), batch);
    }

    // Later scenes stay compact and lay out against the fallback.
    s.dispatch(Transition::RevealFarewell);
    assert!(s.compact());
    assert_eq!(s.scene().particles.len(), 10);
    assert_eq!(s.scene().viewport, Viewport::FALLBACK);

    assert!(s.resize(DESKTOP));
    assert!(!s.compact());
    assert_eq!(s.scene().particles.len(), 30);
}

#[test]
fn sync_reads_the_signal() {
    let mut s = stage(Some(DESKTOP));
    assert!(!s.sync(&false));
    assert!(s.sync(&true));
    assert!(s.compact());
    assert!(!s.sync(&true));
}
