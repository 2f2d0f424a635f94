use super::*;

#[test]
fn two_glows_in_compact_mode_five_in_full() {
    for kind in [SceneKind::Landing, SceneKind::Farewell] {
        let all = glows(kind);
        assert_eq!(all.len(), 5);
        let compact = all.iter().filter(|g| g.decor.variant(true).is_some()).count();
        assert_eq!(compact, 2, "{kind:?}");
        // Always-present glows come first.
        assert!(all[..2].iter().all(|g| g.decor.compact.is_some()));
    }
}

#[test]
fn compact_glows_only_pulse() {
    for kind in [SceneKind::Landing, SceneKind::Farewell] {
        for g in glows(kind) {
            if let Some(v) = g.decor.variant(true) {
                let path = v.motion_path();
                assert!(!path.has_spatial_motion(), "{kind:?}");
                assert!(path.track(Channel::Scale).is_some());
                assert!(path.track(Channel::Opacity).is_some());
            }
            let full = g.decor.full.motion_path();
            assert!(full.has_spatial_motion());
            assert!(full.axis_count() >= 3);
        }
    }
}

#[test]
fn compact_glows_are_smaller_and_softer() {
    for kind in [SceneKind::Landing, SceneKind::Farewell] {
        for g in &glows(kind)[..2] {
            assert!(g.diameter(true) < g.diameter(false));
        }
    }
    assert!(glow_blur(true) < glow_blur(false));
}

#[test]
fn accents_are_full_mode_only() {
    assert_eq!(accents(SceneKind::Landing).len(), 3);
    assert_eq!(accents(SceneKind::Farewell).len(), 5);
    for kind in [SceneKind::Landing, SceneKind::Farewell] {
        assert!(accents(kind).iter().all(|a| a.variant(true).is_none()));
    }
}

#[test]
fn farewell_hearts_are_staggered() {
    for (i, h) in accents(SceneKind::Farewell).iter().enumerate() {
        let i = i as f64;
        assert_eq!(h.full.duration_s, 3.0 + i);
        assert_eq!(h.full.delay_s, 0.5 * i);
        assert!((h.anchor.fx - (0.20 + 0.15 * i)).abs() < 1e-12);
    }
}

#[test]
fn centre_header_icon_loops_in_both_modes() {
    let landing = foreground(SceneKind::Landing);
    assert_eq!(landing.len(), 5);
    let always: Vec<_> = landing.iter().filter(|d| d.variant(true).is_some()).collect();
    assert_eq!(always.len(), 1);
    assert_eq!(always[0].anchor.fx, 0.5);
    let bob = always[0].full.motion_path();
    assert_eq!(bob.track(Channel::TranslateY).unwrap().values, vec![0.0, -10.0, 0.0]);
    assert_eq!(always[0].full.duration_s, 3.0);
}

#[test]
fn farewell_card_loops_survive_compact_mode() {
    let farewell = foreground(SceneKind::Farewell);
    assert_eq!(farewell.len(), 7);
    assert_eq!(farewell.iter().filter(|d| d.variant(true).is_some()).count(), 5);
    // Side header icons are full-mode only.
    assert!(farewell[0].compact.is_none());
    assert!(farewell[2].compact.is_none());
    assert_eq!(farewell[1].full.delay_s, 0.2);
    assert_eq!(farewell[2].full.delay_s, 0.4);
}

#[test]
fn spinning_loops_are_linear() {
    for kind in [SceneKind::Landing, SceneKind::Farewell] {
        for d in foreground(kind) {
            let spins = d
                .full
                .motion_path()
                .track(Channel::Rotate)
                .is_some_and(|t| t.values.iter().any(|v| v.abs() == 360.0));
            if spins {
                assert_eq!(d.full.easing, Ease::Linear, "{kind:?}");
            } else {
                assert_eq!(d.full.easing, Ease::EaseInOut, "{kind:?}");
            }
        }
    }
}
