use super::*;

const CLOSED: ViewState = ViewState::Landing { video_open: false };
const OPEN: ViewState = ViewState::Landing { video_open: true };

#[test]
fn starts_on_landing_with_modal_closed() {
    let m = ViewMachine::new();
    assert_eq!(m.state(), CLOSED);
    assert_eq!(m.state().scene_kind(), SceneKind::Landing);
    assert!(!m.state().is_video_open());
}

#[test]
fn open_then_close_video() {
    let mut m = ViewMachine::new();
    assert!(m.dispatch(Transition::OpenVideo));
    assert_eq!(m.state(), OPEN);
    assert!(m.dispatch(Transition::CloseVideo));
    assert_eq!(m.state(), CLOSED);
}

#[test]
fn reveal_resets_modal_regardless_of_prior_value() {
    for start in [CLOSED, OPEN] {
        assert_eq!(start.apply(Transition::RevealFarewell), ViewState::Farewell);
    }
    assert!(!ViewState::Farewell.is_video_open());
}

#[test]
fn back_returns_to_closed_landing() {
    let mut m = ViewMachine::new();
    m.dispatch(Transition::OpenVideo);
    m.dispatch(Transition::RevealFarewell);
    assert!(m.dispatch(Transition::Back));
    assert_eq!(m.state(), CLOSED);
}

#[test]
fn close_is_idempotent() {
    let mut m = ViewMachine::new();
    assert!(!m.dispatch(Transition::CloseVideo));
    assert!(!m.dispatch(Transition::CloseVideo));
    assert_eq!(m.state(), CLOSED);
}

#[test]
fn invalid_transitions_are_no_ops() {
    let farewell = ViewState::Farewell;
    for t in [Transition::OpenVideo, Transition::CloseVideo, Transition::RevealFarewell] {
        assert_eq!(farewell.apply(t), farewell, "{t:?}");
    }
    for landing in [CLOSED, OPEN] {
        assert_eq!(landing.apply(Transition::Back), landing);
    }
    assert_eq!(OPEN.apply(Transition::OpenVideo), OPEN);
}

#[test]
fn open_video_in_farewell_has_no_observable_effect() {
    let mut m = ViewMachine::new();
    m.dispatch(Transition::RevealFarewell);
    assert!(!m.is_enabled(Transition::OpenVideo));
    assert!(!m.dispatch(Transition::OpenVideo));
    assert_eq!(m.state(), ViewState::Farewell);
    assert!(!m.state().is_video_open());
}

#[test]
fn enabled_set_per_state() {
    let enabled = |state: ViewState| -> Vec<Transition> {
        let m = ViewMachine { state };
        Transition::ALL
            .into_iter()
            .filter(|t| m.is_enabled(*t))
            .collect()
    };
    assert_eq!(
        enabled(CLOSED),
        vec![Transition::RevealFarewell, Transition::OpenVideo]
    );
    assert_eq!(
        enabled(OPEN),
        vec![Transition::RevealFarewell, Transition::CloseVideo]
    );
    assert_eq!(enabled(ViewState::Farewell), vec![Transition::Back]);
}

#[test]
fn transitions_parse_from_text() {
    for t in Transition::ALL {
        assert_eq!(t.as_str().parse::<Transition>().unwrap(), t);
    }
    assert_eq!(" Open ".parse::<Transition>().unwrap(), Transition::OpenVideo);
    assert!("sideways".parse::<Transition>().is_err());
}
