use super::*;

#[test]
fn width_below_breakpoint_is_compact() {
    let bp = Breakpoint::default();
    assert!(bp.classify(Some(Viewport::new(375.0, 812.0))));
    assert!(bp.classify(Some(Viewport::new(767.9, 600.0))));
    assert!(!bp.classify(Some(Viewport::new(768.0, 600.0))));
    assert!(!bp.classify(Some(Viewport::new(1440.0, 900.0))));
}

#[test]
fn unknown_viewport_is_full_mode() {
    let bp = Breakpoint::default();
    assert!(!bp.classify(None));
    assert!(!bp.classify(Some(Viewport::new(0.0, 0.0))));
    assert!(!bp.classify(Some(Viewport::new(f64::NAN, 400.0))));
}

#[test]
fn signals_report_their_value() {
    assert!(true.is_compact());
    assert!(!(&false).is_compact());

    let mut s = ViewportSignal::new(Breakpoint::new(500.0), Some(Viewport::new(480.0, 900.0)));
    assert!(s.is_compact());
    s.viewport = Some(Viewport::new(520.0, 900.0));
    assert!(!s.is_compact());

    let dynamic: &dyn CompactSignal = &s;
    assert!(!dynamic.is_compact());
}
