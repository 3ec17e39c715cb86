//! Runs a few presets against a headless element and prints the frames.
//!
//! `RUST_LOG=debug cargo run --example presets_tour`

use std::time::{Duration, Instant};

use springkit::prelude::*;

struct HeadlessElement {
    transform: Transform,
    alpha: f32,
}

impl VisualElement for HeadlessElement {
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
    }

    fn width(&self) -> f32 {
        320.0
    }

    fn add_layer_animation(&mut self, animation: LayerAnimation) {
        println!(
            "  layer effect {:?} on {} for {:.2}s",
            animation.key,
            animation.property.key_path(),
            animation.total_secs()
        );
    }
}

fn main() {
    env_logger::init();

    let mut session = Session::new(HeadlessElement {
        transform: Transform::IDENTITY,
        alpha: 1.0,
    });

    for preset in [Preset::SlideUp, Preset::ZoomOut, Preset::Fall, Preset::Wobble] {
        println!("{}", preset);
        session.configure(|c| {
            c.preset = preset;
            c.curve = Curve::EaseOut;
            c.damping = 0.5;
        });

        let start = Instant::now();
        session.start(Direction::From, None, start);

        for frame in 0..=60 {
            let now = start + Duration::from_secs_f32(frame as f32 / 60.0);
            let result = session.advance(now);
            if frame % 10 == 0 || result.is_finished() {
                let element = session.element();
                let (x, y) = element.transform.translation();
                println!(
                    "  {:>3}ms  x {:>7.1}  y {:>7.1}  alpha {:.2}",
                    frame * 1000 / 60,
                    x,
                    y,
                    element.alpha
                );
            }
            if result.is_finished() {
                break;
            }
        }
    }
}
