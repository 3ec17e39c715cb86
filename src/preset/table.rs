use super::Preset;
use crate::animation::KeyframeTrack;
use crate::config::Configuration;
use crate::effects::LayerProperty;

/// Unit travel distance for slide, squeeze and fade presets
const DISTANCE: f32 = 300.0;

/// Key times shared by most five-value tracks. They list one more time than
/// there are values, so the track ends up evenly spaced.
const SIX_STEPS: [f32; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

/// Field overwrites produced by a simple preset.
///
/// `None` leaves the configuration field untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PresetDelta {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
    pub rotate: Option<f32>,
    pub opacity: Option<f32>,
    pub animate_from: Option<bool>,
}

impl PresetDelta {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write the overwrites into `config`
    pub fn apply_to(&self, config: &mut Configuration) {
        if let Some(x) = self.x {
            config.x = x;
        }
        if let Some(y) = self.y {
            config.y = y;
        }
        if let Some(scale_x) = self.scale_x {
            config.scale_x = scale_x;
        }
        if let Some(scale_y) = self.scale_y {
            config.scale_y = scale_y;
        }
        if let Some(rotate) = self.rotate {
            config.rotate = rotate;
        }
        if let Some(opacity) = self.opacity {
            config.opacity = opacity;
        }
        if let Some(animate_from) = self.animate_from {
            config.animate_from = animate_from;
        }
    }
}

/// Axis a flip effect turns the element around
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipAxis {
    /// Vertical axis: the element turns left to right
    Vertical,
    /// Horizontal axis: the element turns top to bottom
    Horizontal,
}

impl FlipAxis {
    /// Unit rotation axis (x, y, z)
    pub fn vector(&self) -> (f32, f32, f32) {
        match self {
            FlipAxis::Vertical => (0.0, 1.0, 0.0),
            FlipAxis::Horizontal => (1.0, 0.0, 0.0),
        }
    }
}

/// What a layer effect animates between
#[derive(Clone, Debug, PartialEq)]
pub enum EffectKind {
    /// Sampled values over normalized time
    Keyframes(KeyframeTrack),
    /// Straight from/to animation
    Basic {
        from: f32,
        to: f32,
        autoreverses: bool,
        /// Multiplier applied to the configured repeat count
        repeat_multiplier: f32,
    },
    /// Rotation from zero by the configured `rotate_degrees`
    Spin,
    /// Half turn around an axis with perspective taken from the element width
    Flip(FlipAxis),
}

/// Description of one layer effect, before timing is attached
#[derive(Clone, Debug, PartialEq)]
pub struct EffectSpec {
    /// Layer key; a new effect with the same key replaces the old one
    pub key: &'static str,
    pub property: LayerProperty,
    pub kind: EffectKind,
    /// Paced by the resolved timing curve, or linearly when false
    pub paced: bool,
    /// Values are offsets from the layer's current value
    pub additive: bool,
}

impl EffectSpec {
    fn keyframes(
        key: &'static str,
        property: LayerProperty,
        times: &[f32],
        values: &[f32],
    ) -> Self {
        Self {
            key,
            property,
            kind: EffectKind::Keyframes(KeyframeTrack::new(times, values)),
            paced: true,
            additive: true,
        }
    }

    fn unpaced(mut self) -> Self {
        self.paced = false;
        self
    }

    fn absolute(mut self) -> Self {
        self.additive = false;
        self
    }
}

/// Output of the preset table
#[derive(Clone, Debug, PartialEq)]
pub enum PresetResult {
    Delta(PresetDelta),
    Effects(Vec<EffectSpec>),
}

impl PresetResult {
    /// The delta, or an empty one for effect presets
    pub fn delta(&self) -> PresetDelta {
        match self {
            PresetResult::Delta(delta) => *delta,
            PresetResult::Effects(_) => PresetDelta::default(),
        }
    }

    /// The layer effects, empty for simple presets
    pub fn effects(&self) -> &[EffectSpec] {
        match self {
            PresetResult::Delta(_) => &[],
            PresetResult::Effects(effects) => effects,
        }
    }
}

/// Resolve `preset` at amplitude `force`.
///
/// Pure: the same inputs always give the same result.
pub fn resolve_preset(preset: Preset, force: f32) -> PresetResult {
    let mut d = PresetDelta::default();

    match preset {
        Preset::Unset => {}

        Preset::SlideLeft => d.x = Some(DISTANCE * force),
        Preset::SlideRight => d.x = Some(-DISTANCE * force),
        Preset::SlideDown => d.y = Some(-DISTANCE * force),
        Preset::SlideUp => d.y = Some(DISTANCE * force),

        // Squeeze offsets ignore force; only the stretch scales with it
        Preset::SqueezeLeft => {
            d.x = Some(DISTANCE);
            d.scale_x = Some(3.0 * force);
        }
        Preset::SqueezeRight => {
            d.x = Some(-DISTANCE);
            d.scale_x = Some(3.0 * force);
        }
        Preset::SqueezeDown => {
            d.y = Some(-DISTANCE);
            d.scale_y = Some(3.0 * force);
        }
        Preset::SqueezeUp => {
            d.y = Some(DISTANCE);
            d.scale_y = Some(3.0 * force);
            // Overwritten: squeezeUp ends at 2x
            d.scale_y = Some(2.0 * force);
        }

        Preset::ZoomIn => {
            d.opacity = Some(0.0);
            d.scale_x = Some(2.0 * force);
            d.scale_y = Some(2.0 * force);
        }
        Preset::ZoomOut => {
            d.animate_from = Some(false);
            d.opacity = Some(0.0);
            d.scale_x = Some(2.0 * force);
            d.scale_y = Some(2.0 * force);
        }

        Preset::FadeIn => d.opacity = Some(0.0),
        Preset::FadeOut => {
            d.animate_from = Some(false);
            d.opacity = Some(0.0);
        }
        Preset::FadeInLeft => {
            d.opacity = Some(0.0);
            d.x = Some(DISTANCE * force);
        }
        Preset::FadeInRight => {
            d.x = Some(-DISTANCE * force);
            d.opacity = Some(0.0);
        }
        Preset::FadeInDown => {
            d.y = Some(-DISTANCE * force);
            d.opacity = Some(0.0);
        }
        Preset::FadeInUp => {
            d.y = Some(DISTANCE * force);
            d.opacity = Some(0.0);
        }

        Preset::Fall => {
            d.animate_from = Some(false);
            d.rotate = Some(15f32.to_radians());
            d.y = Some(2.0 * DISTANCE * force);
        }

        _ => return PresetResult::Effects(effects_for(preset, force)),
    }

    PresetResult::Delta(d)
}

fn effects_for(preset: Preset, force: f32) -> Vec<EffectSpec> {
    match preset {
        Preset::Rotate => vec![EffectSpec {
            key: "rotate",
            property: LayerProperty::Rotation,
            kind: EffectKind::Spin,
            paced: true,
            additive: true,
        }],
        Preset::HeartBeat => vec![EffectSpec::keyframes(
            "pulseHeart",
            LayerProperty::Scale,
            &[0.0, 0.2, 0.25, 0.35, 0.4, 1.0],
            &scaled(&[-0.3, -0.3, -0.1, -0.3, 0.1, -0.3], force),
        )],
        Preset::Pulse => vec![EffectSpec::keyframes(
            "pulse",
            LayerProperty::Scale,
            &[0.0, 0.25, 0.5, 0.75, 1.0],
            &scaled(&[-0.2, 0.0, 0.2, 0.0, -0.2], force),
        )],
        Preset::Shake => vec![EffectSpec::keyframes(
            "shake",
            LayerProperty::PositionX,
            &SIX_STEPS,
            &scaled(&[0.0, 30.0, -30.0, 30.0, 0.0], force),
        )],
        Preset::Pop => vec![EffectSpec::keyframes(
            "pop",
            LayerProperty::Scale,
            &SIX_STEPS,
            &scaled(&[0.0, 0.2, -0.2, 0.2, 0.0], force),
        )],
        Preset::Swing => vec![swing_rotation("swing", force)],
        Preset::Wobble => vec![
            swing_rotation("wobble", force),
            EffectSpec::keyframes(
                "x",
                LayerProperty::PositionX,
                &SIX_STEPS,
                &scaled(&[0.0, 30.0, -30.0, 30.0, 0.0], force),
            ),
        ],
        Preset::Morph => stretch_pair(
            [1.0, 1.3 * force, 0.7, 1.3 * force, 1.0],
            [1.0, 0.7, 1.3 * force, 0.7, 1.0],
        ),
        Preset::Squeeze => stretch_pair(
            [1.0, 1.5 * force, 0.5, 1.5 * force, 1.0],
            [1.0, 0.5, 1.0, 0.5, 1.0],
        ),
        Preset::Flash => vec![EffectSpec {
            key: "flash",
            property: LayerProperty::Opacity,
            kind: EffectKind::Basic {
                from: 1.0,
                to: 0.0,
                autoreverses: true,
                repeat_multiplier: 2.0,
            },
            paced: false,
            additive: false,
        }],
        Preset::FlipX => vec![flip(FlipAxis::Vertical)],
        Preset::FlipY => vec![flip(FlipAxis::Horizontal)],
        _ => Vec::new(),
    }
}

fn scaled(values: &[f32], force: f32) -> Vec<f32> {
    values.iter().map(|v| v * force).collect()
}

fn swing_rotation(key: &'static str, force: f32) -> EffectSpec {
    EffectSpec::keyframes(
        key,
        LayerProperty::Rotation,
        &SIX_STEPS,
        &[0.0, 0.3 * force, -0.3 * force, 0.3 * force, 0.0],
    )
    .unpaced()
}

fn stretch_pair(x: [f32; 5], y: [f32; 5]) -> Vec<EffectSpec> {
    vec![
        EffectSpec::keyframes("morphX", LayerProperty::ScaleX, &SIX_STEPS, &x).absolute(),
        EffectSpec::keyframes("morphY", LayerProperty::ScaleY, &SIX_STEPS, &y).absolute(),
    ]
}

fn flip(axis: FlipAxis) -> EffectSpec {
    EffectSpec {
        key: "3d",
        property: LayerProperty::Transform,
        kind: EffectKind::Flip(axis),
        paced: true,
        additive: false,
    }
}
