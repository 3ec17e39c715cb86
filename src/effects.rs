//! Layer effects: keyframe and basic animations installed on an element's
//! persistent layer.
//!
//! The preset table describes *what* an effect animates ([`EffectSpec`]);
//! compiling it against a [`Configuration`] attaches duration, delay, repeat
//! count and pacing, producing a [`LayerAnimation`] the host can play. The
//! evaluation helpers (`progress_at`, `scalar_at`, `transform_at`) let a host
//! without its own animation engine sample the effect over time.

use crate::animation::{resolve_timing_function, KeyframeTrack, TimingFunction};
use crate::config::Configuration;
use crate::preset::{EffectKind, EffectSpec, FlipAxis};
use crate::transform::Transform;

/// Rotation of a full flip, in radians
const FLIP_ANGLE: f32 = std::f32::consts::PI;

/// Layer attribute an effect drives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerProperty {
    /// Uniform scale
    Scale,
    ScaleX,
    ScaleY,
    /// Rotation around z, in radians
    Rotation,
    /// Horizontal position
    PositionX,
    Opacity,
    /// Full 3D layer transform
    Transform,
}

impl LayerProperty {
    /// Conventional key path for this attribute
    pub fn key_path(&self) -> &'static str {
        match self {
            LayerProperty::Scale => "transform.scale",
            LayerProperty::ScaleX => "transform.scale.x",
            LayerProperty::ScaleY => "transform.scale.y",
            LayerProperty::Rotation => "transform.rotation",
            LayerProperty::PositionX => "position.x",
            LayerProperty::Opacity => "opacity",
            LayerProperty::Transform => "transform",
        }
    }
}

/// Concrete values an installed effect moves through
#[derive(Clone, Debug, PartialEq)]
pub enum EffectValues {
    Keyframes(KeyframeTrack),
    Basic { from: f32, to: f32 },
    /// Half turn around `axis`, with `perspective` as the m34 term
    Flip { axis: FlipAxis, perspective: f32 },
}

/// An effect ready to be installed on a layer
#[derive(Clone, Debug, PartialEq)]
pub struct LayerAnimation {
    /// Layer key; installing another effect with the same key replaces this one
    pub key: &'static str,
    pub property: LayerProperty,
    pub values: EffectValues,
    /// Pacing over one pass of `duration_secs`
    pub timing: TimingFunction,
    pub duration_secs: f32,
    /// Wait after installation before the first pass
    pub delay_secs: f32,
    /// Number of passes; zero or less plays once
    pub repeat_count: f32,
    /// Values are offsets from the layer's own value
    pub additive: bool,
    /// Each pass plays forward, then backward
    pub autoreverses: bool,
}

impl LayerAnimation {
    /// Attach timing from `config` to an effect description.
    ///
    /// `width` is the element's width; flips derive their perspective from it.
    pub fn compile(spec: &EffectSpec, config: &Configuration, width: f32) -> Self {
        let timing = if spec.paced {
            resolve_timing_function(config.curve, config.force)
        } else {
            TimingFunction::Linear
        };

        let mut repeat_count = config.repeat_count;
        let mut autoreverses = false;

        let values = match &spec.kind {
            EffectKind::Keyframes(track) => EffectValues::Keyframes(track.clone()),
            EffectKind::Basic {
                from,
                to,
                autoreverses: reverses,
                repeat_multiplier,
            } => {
                autoreverses = *reverses;
                repeat_count *= repeat_multiplier;
                EffectValues::Basic {
                    from: *from,
                    to: *to,
                }
            }
            EffectKind::Spin => EffectValues::Basic {
                from: 0.0,
                to: config.rotate_degrees.to_radians(),
            },
            EffectKind::Flip(axis) => EffectValues::Flip {
                axis: *axis,
                perspective: flip_perspective(width),
            },
        };

        Self {
            key: spec.key,
            property: spec.property,
            values,
            timing,
            duration_secs: config.duration,
            delay_secs: config.delay,
            repeat_count,
            additive: spec.additive,
            autoreverses,
        }
    }

    /// Length of one full cycle (forward plus backward when auto-reversing)
    pub fn cycle_secs(&self) -> f32 {
        if self.autoreverses {
            self.duration_secs * 2.0
        } else {
            self.duration_secs
        }
    }

    /// Time from installation until the effect is removed
    pub fn total_secs(&self) -> f32 {
        self.delay_secs.max(0.0) + self.cycle_secs().max(0.0) * self.repeat_count.max(1.0)
    }

    /// Paced progress through the current pass at `elapsed_secs` after
    /// installation, or `None` before the delay ends or after the last pass.
    pub fn progress_at(&self, elapsed_secs: f32) -> Option<f32> {
        let active = elapsed_secs - self.delay_secs.max(0.0);
        if active < 0.0 || self.duration_secs <= 0.0 || elapsed_secs >= self.total_secs() {
            return None;
        }

        let cycle = self.cycle_secs();
        let within = active % cycle;
        let raw = if self.autoreverses && within > self.duration_secs {
            (cycle - within) / self.duration_secs
        } else {
            within / self.duration_secs
        };
        Some(self.timing.evaluate(raw))
    }

    /// Scalar value of the effect at `elapsed_secs`, for scalar properties
    pub fn scalar_at(&self, elapsed_secs: f32) -> Option<f32> {
        let t = self.progress_at(elapsed_secs)?;
        match &self.values {
            EffectValues::Keyframes(track) => Some(track.sample(t)),
            EffectValues::Basic { from, to } => Some(from + (to - from) * t),
            EffectValues::Flip { .. } => None,
        }
    }

    /// Layer transform of a flip effect at `elapsed_secs`
    pub fn transform_at(&self, elapsed_secs: f32) -> Option<Transform> {
        let t = self.progress_at(elapsed_secs)?;
        match &self.values {
            EffectValues::Flip { axis, perspective } => Some(flip_transform(*axis, *perspective, t)),
            _ => None,
        }
    }

    /// Combine a scalar effect value with the layer's own value
    pub fn combine(&self, base: f32, value: f32) -> f32 {
        if !self.additive {
            return value;
        }
        match self.property {
            // Additive scale offsets are relative to the base scale
            LayerProperty::Scale | LayerProperty::ScaleX | LayerProperty::ScaleY => {
                base * (1.0 + value)
            }
            _ => base + value,
        }
    }
}

/// Perspective (m34) for a flip of an element `width` wide
pub fn flip_perspective(width: f32) -> f32 {
    if width <= 0.0 {
        log::debug!("Flip on an element without width, skipping perspective");
        return 0.0;
    }
    -1.0 / width / 2.0
}

/// Flip transform at paced progress `t`: rotation applied after the perspective
pub fn flip_transform(axis: FlipAxis, perspective: f32, t: f32) -> Transform {
    let (x, y, z) = axis.vector();
    Transform::rotate_axis(FLIP_ANGLE * t, x, y, z).then(&Transform::perspective(perspective))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Curve;
    use crate::preset::{resolve_preset, Preset};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn compile(preset: Preset, config: &Configuration, width: f32) -> Vec<LayerAnimation> {
        resolve_preset(preset, config.force)
            .effects()
            .iter()
            .map(|spec| LayerAnimation::compile(spec, config, width))
            .collect()
    }

    #[test]
    fn test_compile_takes_timing_from_configuration() {
        let config = Configuration::default()
            .with_duration(2.0)
            .with_delay(0.5)
            .with_repeat_count(3.0)
            .with_curve(Curve::EaseIn);
        let pulse = &compile(Preset::Pulse, &config, 100.0)[0];
        assert_eq!(pulse.key, "pulse");
        assert_eq!(pulse.duration_secs, 2.0);
        assert_eq!(pulse.delay_secs, 0.5);
        assert_eq!(pulse.repeat_count, 3.0);
        assert_eq!(pulse.timing, TimingFunction::EaseIn);
        assert!(pulse.additive);
    }

    #[test]
    fn test_unpaced_effects_ignore_curve() {
        let config = Configuration::default().with_curve(Curve::EaseOut);
        let swing = &compile(Preset::Swing, &config, 100.0)[0];
        assert_eq!(swing.timing, TimingFunction::Linear);
    }

    #[test]
    fn test_spin_uses_rotate_degrees() {
        let config = Configuration::default().with_rotate_degrees(180.0);
        let spin = &compile(Preset::Rotate, &config, 100.0)[0];
        match spin.values {
            EffectValues::Basic { from, to } => {
                assert_eq!(from, 0.0);
                assert!(approx_eq(to, std::f32::consts::PI));
            }
            ref other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_flash_reverses_with_doubled_repeats() {
        let config = Configuration::default()
            .with_duration(1.0)
            .with_repeat_count(1.0);
        let flash = &compile(Preset::Flash, &config, 100.0)[0];
        assert_eq!(flash.repeat_count, 2.0);
        assert!(flash.autoreverses);
        assert_eq!(flash.total_secs(), 4.0);

        assert!(approx_eq(flash.scalar_at(0.0).unwrap(), 1.0));
        assert!(approx_eq(flash.scalar_at(0.5).unwrap(), 0.5));
        assert!(approx_eq(flash.scalar_at(1.5).unwrap(), 0.5));
        assert!(approx_eq(flash.scalar_at(2.5).unwrap(), 0.5));
        assert_eq!(flash.scalar_at(4.0), None);
    }

    #[test]
    fn test_effect_waits_for_delay() {
        let config = Configuration::default()
            .with_duration(1.0)
            .with_delay(1.0)
            .with_curve(Curve::Linear);
        let shake = &compile(Preset::Shake, &config, 100.0)[0];
        assert_eq!(shake.scalar_at(0.5), None);
        assert!(approx_eq(shake.scalar_at(1.25).unwrap(), 30.0));
        assert_eq!(shake.scalar_at(2.0), None);
    }

    #[test]
    fn test_flip_perspective_follows_width() {
        let config = Configuration::default();
        let narrow = &compile(Preset::FlipX, &config, 100.0)[0];
        let wide = &compile(Preset::FlipX, &config, 400.0)[0];
        match (&narrow.values, &wide.values) {
            (
                EffectValues::Flip { perspective: a, .. },
                EffectValues::Flip { perspective: b, .. },
            ) => {
                assert!(approx_eq(*a, -0.005));
                assert!(approx_eq(*b, -0.00125));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(flip_perspective(0.0), 0.0);
    }

    #[test]
    fn test_flip_half_way_and_end() {
        let half = flip_transform(FlipAxis::Vertical, 0.0, 0.5);
        let (x, _) = half.transform_point(10.0, 0.0);
        assert!(approx_eq(x, 0.0));

        let end = flip_transform(FlipAxis::Horizontal, 0.0, 1.0);
        let (_, y) = end.transform_point(0.0, 10.0);
        assert!(approx_eq(y, -10.0));
    }

    #[test]
    fn test_combine_additive_scale_is_relative() {
        let config = Configuration::default();
        let pop = &compile(Preset::Pop, &config, 100.0)[0];
        assert!(approx_eq(pop.combine(2.0, 0.2), 2.4));

        let morph = &compile(Preset::Morph, &config, 100.0)[0];
        assert_eq!(morph.combine(2.0, 1.3), 1.3);
    }
}
