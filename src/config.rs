use crate::animation::{resolve_animation_options, Curve, Transition};
use crate::preset::Preset;
use crate::transform::Transform;

/// Named animation parameters attached to one element.
///
/// Callers fill it in before each `animate*` call; the session resets it
/// to [`Configuration::default`] when the cycle completes.
///
/// # Example
/// ```ignore
/// session.configure(|c| {
///     *c = Configuration::default()
///         .with_preset(Preset::SlideUp)
///         .with_curve(Curve::EaseOut)
///         .with_force(1.5)
/// });
/// session.animate();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    // Advanced values
    pub preset: Preset,
    pub curve: Curve,
    /// Animate when the element first appears in a window
    pub autostart: bool,
    /// Start hidden (alpha 0) when the element is created
    pub autohide: bool,
    /// Seconds before the motion starts
    pub delay: f32,
    /// Seconds the motion takes
    pub duration: f32,
    /// Amplitude multiplier for preset magnitudes
    pub force: f32,
    /// Spring damping ratio in [0, 1]
    pub damping: f32,
    /// Initial spring velocity
    pub velocity: f32,
    /// Target angle of the `rotate` preset, in degrees
    pub rotate_degrees: f32,
    /// Passes of a layer effect
    pub repeat_count: f32,

    // Basic values
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Rotation in radians
    pub rotate: f32,
    pub opacity: f32,
    /// Start in the preset state and move to identity (`true`), or the reverse
    pub animate_from: bool,
}

impl Configuration {
    pub const DEFAULT: Self = Self {
        preset: Preset::Unset,
        curve: Curve::Default,
        autostart: false,
        autohide: false,
        delay: 0.0,
        duration: 0.7,
        force: 1.0,
        damping: 0.7,
        velocity: 0.7,
        rotate_degrees: 0.0,
        repeat_count: 1.0,
        x: 0.0,
        y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        rotate: 0.0,
        opacity: 1.0,
        animate_from: false,
    };

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Transform described by the basic values
    pub fn transform(&self) -> Transform {
        Transform::compose(self.x, self.y, self.scale_x, self.scale_y, self.rotate)
    }

    /// Spring transition described by the timing values
    pub fn transition(&self) -> Transition {
        Transition::spring(self.duration)
            .delay(self.delay)
            .with_spring(self.damping, self.velocity)
            .options(resolve_animation_options(self.curve))
    }

    /// Set the preset from its configuration name.
    ///
    /// Unknown names log a warning and clear the preset.
    pub fn set_preset_name(&mut self, name: &str) {
        self.preset = Preset::from_name_lossy(name);
    }

    /// Set the curve from its configuration name.
    ///
    /// Unknown names log a warning and fall back to the default curve.
    pub fn set_curve_name(&mut self, name: &str) {
        self.curve = Curve::from_name_lossy(name);
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_autostart(mut self, autostart: bool) -> Self {
        self.autostart = autostart;
        self
    }

    pub fn with_autohide(mut self, autohide: bool) -> Self {
        self.autohide = autohide;
        self
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_force(mut self, force: f32) -> Self {
        self.force = force;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_rotate_degrees(mut self, degrees: f32) -> Self {
        self.rotate_degrees = degrees;
        self
    }

    pub fn with_repeat_count(mut self, repeat_count: f32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// Set the offset, in points
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_scale(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Set the rotation, in radians
    pub fn with_rotate(mut self, radians: f32) -> Self {
        self.rotate = radians;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationOptions;

    #[test]
    fn test_documented_defaults() {
        let c = Configuration::default();
        assert_eq!(c.duration, 0.7);
        assert_eq!(c.force, 1.0);
        assert_eq!(c.damping, 0.7);
        assert_eq!(c.velocity, 0.7);
        assert_eq!((c.scale_x, c.scale_y), (1.0, 1.0));
        assert_eq!(c.opacity, 1.0);
        assert_eq!(c.preset, Preset::Unset);
        assert_eq!(c.curve, Curve::Default);
        assert!(!c.autostart && !c.autohide && !c.animate_from);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut c = Configuration::default()
            .with_preset(Preset::Fall)
            .with_force(3.0)
            .with_offset(1.0, 2.0)
            .with_scale(2.0, 2.0)
            .with_opacity(0.0)
            .with_autostart(true);
        c.animate_from = true;
        assert!(!c.is_default());

        c.reset();
        assert!(c.is_default());
    }

    #[test]
    fn test_transition_carries_spring_values() {
        let c = Configuration::default()
            .with_duration(1.2)
            .with_delay(0.3)
            .with_damping(0.4)
            .with_velocity(2.0)
            .with_curve(Curve::EaseOut);
        let t = c.transition();
        assert_eq!(t.duration_secs, 1.2);
        assert_eq!(t.delay_secs, 0.3);
        let spring = t.spring.unwrap();
        assert_eq!(spring.damping_ratio, 0.4);
        assert_eq!(spring.initial_velocity, 2.0);
        assert_eq!(t.options, AnimationOptions::CURVE_EASE_OUT);
    }

    #[test]
    fn test_name_setters_are_lossy() {
        let mut c = Configuration::default();
        c.set_preset_name("pulse");
        c.set_curve_name("spring");
        assert_eq!(c.preset, Preset::Pulse);
        assert_eq!(c.curve, Curve::Spring);

        c.set_preset_name("nope");
        c.set_curve_name("nope");
        assert_eq!(c.preset, Preset::Unset);
        assert_eq!(c.curve, Curve::Default);
    }

    #[test]
    fn test_transform_composes_basic_values() {
        let c = Configuration::default().with_offset(10.0, 0.0);
        assert_eq!(c.transform().translation(), (10.0, 0.0));
    }
}
