use super::*;

#[test]
fn resolve_prefers_usable_probe() {
    let v = Viewport::new(390.0, 844.0);
    assert_eq!(Viewport::resolve(Some(v), Viewport::FALLBACK), v);
}

#[test]
fn resolve_falls_back_on_missing_or_degenerate_viewport() {
    let fb = Viewport::FALLBACK;
    assert_eq!(Viewport::resolve(None, fb), fb);
    assert_eq!(Viewport::resolve(Some(Viewport::new(0.0, 800.0)), fb), fb);
    assert_eq!(Viewport::resolve(Some(Viewport::new(800.0, -1.0)), fb), fb);
    assert_eq!(
        Viewport::resolve(Some(Viewport::new(f64::NAN, 800.0)), fb),
        fb
    );
}

#[test]
fn seconds_range_is_half_open() {
    let r = SecondsRange::new(8.0, 20.0).unwrap();
    assert!(r.contains(8.0));
    assert!(r.contains(19.999));
    assert!(!r.contains(20.0));
    assert!(!r.contains(7.999));
    assert_eq!(r.span(), 12.0);
}

#[test]
fn seconds_range_rejects_bad_bounds() {
    assert!(SecondsRange::new(5.0, 5.0).is_err());
    assert!(SecondsRange::new(6.0, 5.0).is_err());
    assert!(SecondsRange::new(-1.0, 5.0).is_err());
    assert!(SecondsRange::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn seconds_range_nesting() {
    let outer = SecondsRange::new(8.0, 20.0).unwrap();
    assert!(SecondsRange::new(8.0, 14.0).unwrap().is_within(outer));
    assert!(!SecondsRange::new(7.0, 14.0).unwrap().is_within(outer));
}

#[test]
fn anchor_resolves_against_viewport() {
    let v = Viewport::new(800.0, 600.0);
    assert_eq!(Anchor::TOP_LEFT.resolve(v), Point::new(0.0, 0.0));
    assert_eq!(Anchor::BOTTOM_RIGHT.resolve(v), Point::new(800.0, 600.0));
    assert_eq!(Anchor::CENTER.resolve(v), Point::new(400.0, 300.0));
}
