use super::*;
use crate::animation::{
    descriptor::{BatchId, Repeat},
    ease::Ease,
    path::{Channel, MotionPath},
};
use crate::foundation::core::Point;

fn particle(ordinal: usize, delay_s: f64) -> AnimationDescriptor {
    AnimationDescriptor {
        id: DescriptorId {
            batch: BatchId(7),
            ordinal,
        },
        initial_position: Point::new(100.0, 850.0),
        motion_path: MotionPath::new()
            .with(Channel::TranslateY, [0.0, -900.0])
            .with(Channel::Opacity, [0.0, 1.0]),
        duration_s: 10.0,
        repeat: Repeat::Infinite,
        delay_s,
        easing: Ease::Linear,
    }
}

#[test]
fn dropping_handle_stops_animation() {
    let tl = Timeline::new();
    let a = tl.schedule(&particle(0, 0.0));
    let b = tl.schedule(&particle(1, 0.0));
    assert_eq!(tl.active_count(), 2);
    assert_eq!(a.id().ordinal, 0);

    drop(a);
    assert_eq!(tl.active_count(), 1);
    assert_eq!(tl.sample()[0].id.ordinal, 1);

    drop(b);
    assert_eq!(tl.active_count(), 0);
    assert!(tl.sample().is_empty());
}

#[test]
fn handles_outliving_the_timeline_drop_cleanly() {
    let tl = Timeline::new();
    let h = tl.schedule(&particle(0, 0.0));
    drop(tl);
    drop(h);
}

#[test]
fn clones_share_clock_and_animations() {
    let tl = Timeline::new();
    let view = tl.clone();
    let _h = tl.schedule(&particle(0, 0.0));
    tl.advance(1.5);
    assert_eq!(view.now(), 1.5);
    assert_eq!(view.active_count(), 1);
}

#[test]
fn sample_places_element_along_its_path() {
    let tl = Timeline::new();
    let _h = tl.schedule(&particle(0, 0.0));
    tl.advance(5.0);

    let s = tl.sample();
    assert_eq!(s.len(), 1);
    let [_, _, _, _, x, y] = s[0].transform.as_coeffs();
    assert!((x - 100.0).abs() < 1e-9);
    assert!((y - 400.0).abs() < 1e-9);
    assert!((s[0].opacity - 0.5).abs() < 1e-9);
}

#[test]
fn progress_is_relative_to_scheduling_time() {
    let tl = Timeline::new();
    tl.advance(100.0);
    let _h = tl.schedule(&particle(0, 2.0));
    tl.advance(1.0);
    let [_, _, _, _, _, y] = tl.sample()[0].transform.as_coeffs();
    assert_eq!(y, 850.0, "still waiting for its delay");

    tl.advance(3.5);
    let [_, _, _, _, _, y] = tl.sample()[0].transform.as_coeffs();
    assert!((y - (850.0 - 225.0)).abs() < 1e-9);
}

#[test]
fn invalid_steps_do_not_move_the_clock() {
    let tl = Timeline::new();
    tl.advance(2.0);
    tl.advance(-1.0);
    tl.advance(f64::NAN);
    assert_eq!(tl.now(), 2.0);
}
