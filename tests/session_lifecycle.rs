use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use springkit::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Element that records every property write
#[derive(Default)]
struct RecordingElement {
    transform: Transform,
    alpha: f32,
    width: f32,
    alpha_writes: Vec<f32>,
    layer: Vec<LayerAnimation>,
}

impl RecordingElement {
    fn new(width: f32) -> Self {
        Self {
            alpha: 1.0,
            width,
            ..Default::default()
        }
    }
}

impl VisualElement for RecordingElement {
    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
        self.alpha_writes.push(alpha);
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn add_layer_animation(&mut self, animation: LayerAnimation) {
        self.layer.retain(|a| a.key != animation.key);
        self.layer.push(animation);
    }
}

fn run_to_end(session: &mut Session<RecordingElement>) -> AdvanceResult<VisualState> {
    let start = session.started_at().expect("transition should be running");
    let mut last = AdvanceResult::NoChange;
    for frame in 1..=240 {
        last = session.advance(start + Duration::from_secs_f32(frame as f32 / 60.0));
        if last.is_finished() {
            break;
        }
    }
    last
}

#[test]
fn test_every_preset_leaves_configuration_at_defaults() {
    init_logging();
    for preset in Preset::ALL {
        for direction in [Direction::From, Direction::To] {
            let mut session = Session::new(RecordingElement::new(120.0));
            session.configure(|c| {
                *c = Configuration::default()
                    .with_preset(preset)
                    .with_force(1.8)
                    .with_curve(Curve::Spring)
                    .with_rotate_degrees(90.0)
            });
            session.start(direction, None, std::time::Instant::now());

            assert!(
                run_to_end(&mut session).is_finished(),
                "{} did not finish",
                preset
            );
            assert_eq!(session.phase(), Phase::Idle);
            assert!(
                session.configuration().is_default(),
                "{} left {:?}",
                preset,
                session.configuration()
            );
        }
    }
}

#[test]
fn test_animate_from_lands_on_identity() {
    init_logging();
    let mut session = Session::new(RecordingElement::new(100.0));
    session.configure(|c| {
        c.preset = Preset::ZoomIn;
        c.damping = 0.3;
    });
    session.animate();

    let start = session.element().transform;
    assert!(!start.is_identity());

    assert_eq!(
        run_to_end(&mut session),
        AdvanceResult::Finished(VisualState::IDENTITY)
    );
    assert!(session.element().transform.is_identity());
    assert_eq!(session.element().alpha, 1.0);
}

#[test]
fn test_zoom_out_grows_and_fades() {
    init_logging();
    let mut session = Session::new(RecordingElement::new(100.0));
    session.configure(|c| c.preset = Preset::ZoomOut);
    session.animate();

    // zoomOut reverses the phase, so the element starts untouched
    assert!(session.element().transform.is_identity());
    let target = *session.target().unwrap();
    assert_eq!(target.alpha, 0.0);
    assert_eq!(target.transform.transform_point(1.0, 1.0), (2.0, 2.0));

    run_to_end(&mut session);
    assert_eq!(session.element().alpha, 0.0);
}

#[test]
fn test_deferred_autostart_runs_once_with_alpha_zeroed() {
    init_logging();
    let mut session = Session::with_configuration(
        RecordingElement::new(100.0),
        Configuration::default()
            .with_autostart(true)
            .with_preset(Preset::SlideUp),
    );

    session.did_move_to_window(AppState::Inactive);
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.element().alpha_writes.is_empty());

    session.did_become_active();
    assert_eq!(session.phase(), Phase::Transitioning);
    // Alpha is zeroed before the preset snaps the element into place
    assert_eq!(session.element().alpha_writes.first(), Some(&0.0));

    let writes = session.element().alpha_writes.len();
    session.did_become_active();
    assert_eq!(session.element().alpha_writes.len(), writes);
}

#[test]
fn test_chained_completions_run_in_order() {
    init_logging();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut session = Session::new(RecordingElement::new(100.0));

    let first = log.clone();
    session.configure(|c| c.preset = Preset::FadeInLeft);
    session.animate_next(move || first.borrow_mut().push("in"));
    run_to_end(&mut session);

    let second = log.clone();
    session.configure(|c| c.preset = Preset::FadeOut);
    session.animate_to_next(move || second.borrow_mut().push("out"));
    run_to_end(&mut session);

    assert_eq!(*log.borrow(), vec!["in", "out"]);
    assert_eq!(session.element().alpha, 0.0);
}

#[test]
fn test_flip_perspective_depends_on_element_width() {
    init_logging();
    let mut narrow = Session::new(RecordingElement::new(50.0));
    let mut wide = Session::new(RecordingElement::new(500.0));
    for session in [&mut narrow, &mut wide] {
        session.configure(|c| c.preset = Preset::FlipY);
        session.animate();
    }

    let perspective = |session: &Session<RecordingElement>| match session.element().layer[0].values
    {
        EffectValues::Flip { perspective, .. } => perspective,
        ref other => panic!("unexpected {:?}", other),
    };
    assert!((perspective(&narrow) - (-0.01)).abs() < 1e-6);
    assert!((perspective(&wide) - (-0.001)).abs() < 1e-6);
}

#[test]
fn test_reissued_effect_replaces_same_key() {
    init_logging();
    let mut session = Session::new(RecordingElement::new(100.0));
    session.configure(|c| c.preset = Preset::Shake);
    session.animate();
    session.configure(|c| {
        c.preset = Preset::Shake;
        c.force = 2.0;
    });
    session.animate();

    let layer = &session.element().layer;
    assert_eq!(layer.len(), 1);
    match &layer[0].values {
        EffectValues::Keyframes(track) => assert_eq!(track.values()[1], 60.0),
        other => panic!("unexpected {:?}", other),
    }
}
