//! Timing functions (easing curves) for animations.
//!
//! A [`Curve`] is the symbolic name a caller puts in the configuration. It
//! resolves two ways:
//!
//! - [`resolve_timing_function`] gives the precise pacing curve used by
//!   layer effects (keyframe and basic animations).
//! - [`resolve_animation_options`] gives the coarse curve flag used by the
//!   spring transition, which otherwise paces itself with damping and
//!   velocity.
//!
//! ## Example
//!
//! ```ignore
//! let timing = resolve_timing_function(Curve::Spring, 3.0);
//! assert_eq!(timing.control_points(), (0.5, 2.1, 1.0, 1.0));
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::ParseError;

/// Symbolic timing curve name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    /// No curve requested; resolves to the platform default pacing
    #[default]
    Default,
    EaseIn,
    EaseOut,
    EaseInOut,
    Linear,
    /// Overshooting curve whose bounce grows with the configured force
    Spring,
}

impl Curve {
    /// Every named curve, in declaration order
    pub const ALL: [Curve; 6] = [
        Curve::Default,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
        Curve::Linear,
        Curve::Spring,
    ];

    /// The name used in configuration strings
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Default => "",
            Curve::EaseIn => "easeIn",
            Curve::EaseOut => "easeOut",
            Curve::EaseInOut => "easeInOut",
            Curve::Linear => "linear",
            Curve::Spring => "spring",
        }
    }

    /// Parse a curve name, treating anything unrecognized as [`Curve::Default`]
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown timing curve {:?}, using default pacing", name);
            Curve::Default
        })
    }
}

impl FromStr for Curve {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Curve::ALL
            .into_iter()
            .find(|curve| curve.name() == s)
            .ok_or_else(|| ParseError::UnknownCurve(s.to_string()))
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Curve::Default => write!(f, "default"),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Timing function that controls the animation curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// Platform default pacing (a gentle ease)
    Default,
    /// Cubic bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl TimingFunction {
    /// Bezier control points (x1, y1, x2, y2) describing this curve
    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        match *self {
            TimingFunction::Linear => (0.0, 0.0, 1.0, 1.0),
            TimingFunction::EaseIn => (0.42, 0.0, 1.0, 1.0),
            TimingFunction::EaseOut => (0.0, 0.0, 0.58, 1.0),
            TimingFunction::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            TimingFunction::Default => (0.25, 0.1, 0.25, 1.0),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => (x1, y1, x2, y2),
        }
    }

    /// Evaluate the timing function at time t (0.0 to 1.0)
    /// Returns the interpolation factor (can exceed [0, 1] for overshoot)
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            other => {
                let (x1, y1, x2, y2) = other.control_points();
                cubic_bezier(t, x1, y1, x2, y2)
            }
        }
    }
}

impl Default for TimingFunction {
    fn default() -> Self {
        TimingFunction::Default
    }
}

bitflags! {
    /// Coarse curve options understood by the spring transition
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AnimationOptions: u8 {
        /// Accelerate from rest
        const CURVE_EASE_IN  = 0b001;
        /// Decelerate to rest
        const CURVE_EASE_OUT = 0b010;
        /// Accelerate, then decelerate
        const CURVE_EASE_IN_OUT = Self::CURVE_EASE_IN.bits() | Self::CURVE_EASE_OUT.bits();
        /// Constant pacing
        const CURVE_LINEAR   = 0b100;
    }
}

impl AnimationOptions {
    /// Pacing applied on top of the spring progress for these options
    pub fn timing_function(&self) -> TimingFunction {
        if *self == AnimationOptions::CURVE_EASE_IN_OUT {
            TimingFunction::EaseInOut
        } else if self.contains(AnimationOptions::CURVE_EASE_IN) {
            TimingFunction::EaseIn
        } else if self.contains(AnimationOptions::CURVE_EASE_OUT) {
            TimingFunction::EaseOut
        } else {
            TimingFunction::Linear
        }
    }
}

/// Resolve the precise pacing curve for layer effects.
///
/// `force` only matters for [`Curve::Spring`], whose second control point
/// rises with it: `(0.5, 1.1 + force / 3, 1, 1)`.
pub fn resolve_timing_function(curve: Curve, force: f32) -> TimingFunction {
    match curve {
        Curve::EaseIn => TimingFunction::EaseIn,
        Curve::EaseOut => TimingFunction::EaseOut,
        Curve::EaseInOut => TimingFunction::EaseInOut,
        Curve::Linear => TimingFunction::Linear,
        Curve::Spring => TimingFunction::CubicBezier(0.5, 1.1 + force / 3.0, 1.0, 1.0),
        Curve::Default => TimingFunction::Default,
    }
}

/// Resolve the coarse option flag for the spring transition.
///
/// Only the ease family maps through; spring and default pace linearly
/// because damping and velocity already shape the motion.
pub fn resolve_animation_options(curve: Curve) -> AnimationOptions {
    match curve {
        Curve::EaseIn => AnimationOptions::CURVE_EASE_IN,
        Curve::EaseOut => AnimationOptions::CURVE_EASE_OUT,
        Curve::EaseInOut => AnimationOptions::CURVE_EASE_IN_OUT,
        Curve::Linear | Curve::Spring | Curve::Default => AnimationOptions::CURVE_LINEAR,
    }
}

/// Cubic bezier curve evaluation
/// Assumes x1, x2 are in [0, 1] so x(t) is monotonic
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Newton-Raphson to solve for the curve parameter given x
    let mut current_t = t;
    for _ in 0..8 {
        let current_x = cubic_bezier_x(current_t, x1, x2);
        let current_slope = cubic_bezier_slope(current_t, x1, x2);
        if current_slope.abs() < 1e-6 {
            break;
        }
        current_t -= (current_x - t) / current_slope;
        current_t = current_t.clamp(0.0, 1.0);
    }
    cubic_bezier_y(current_t, y1, y2)
}

fn cubic_bezier_x(t: f32, x1: f32, x2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

fn cubic_bezier_y(t: f32, y1: f32, y2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

fn cubic_bezier_slope(t: f32, x1: f32, x2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in() {
        let result = TimingFunction::EaseIn.evaluate(0.5);
        assert!(result < 0.5); // Should be slower at start
    }

    #[test]
    fn test_ease_out() {
        let result = TimingFunction::EaseOut.evaluate(0.5);
        assert!(result > 0.5); // Should be faster at start
    }

    #[test]
    fn test_endpoints_are_fixed() {
        for timing in [
            TimingFunction::EaseIn,
            TimingFunction::EaseOut,
            TimingFunction::EaseInOut,
            TimingFunction::Default,
        ] {
            assert!(timing.evaluate(0.0).abs() < 1e-4, "{:?}", timing);
            assert!((timing.evaluate(1.0) - 1.0).abs() < 1e-4, "{:?}", timing);
        }
    }

    #[test]
    fn test_spring_curve_control_points_follow_force() {
        let timing = resolve_timing_function(Curve::Spring, 3.0);
        let (x1, y1, x2, y2) = timing.control_points();
        assert_eq!(x1, 0.5);
        assert!((y1 - 2.1).abs() < 1e-6);
        assert_eq!(x2, 1.0);
        assert_eq!(y2, 1.0);
    }

    #[test]
    fn test_spring_curve_overshoots() {
        let timing = resolve_timing_function(Curve::Spring, 1.0);
        let peak = (1..100)
            .map(|i| timing.evaluate(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0, "peak was {}", peak);
    }

    #[test]
    fn test_unrecognized_curves_resolve_to_default() {
        assert_eq!(
            resolve_timing_function(Curve::from_name_lossy("bouncy"), 1.0),
            TimingFunction::Default
        );
    }

    #[test]
    fn test_animation_options_collapse_to_linear() {
        assert_eq!(
            resolve_animation_options(Curve::Spring),
            AnimationOptions::CURVE_LINEAR
        );
        assert_eq!(
            resolve_animation_options(Curve::Spring),
            resolve_animation_options(Curve::from_name_lossy("unknownCurve"))
        );
        assert_eq!(
            resolve_animation_options(Curve::EaseInOut),
            AnimationOptions::CURVE_EASE_IN | AnimationOptions::CURVE_EASE_OUT
        );
    }

    #[test]
    fn test_options_map_back_to_timing() {
        assert_eq!(
            AnimationOptions::CURVE_EASE_IN_OUT.timing_function(),
            TimingFunction::EaseInOut
        );
        assert_eq!(
            AnimationOptions::CURVE_EASE_OUT.timing_function(),
            TimingFunction::EaseOut
        );
        assert_eq!(
            AnimationOptions::CURVE_LINEAR.timing_function(),
            TimingFunction::Linear
        );
    }

    #[test]
    fn test_curve_names_round_trip_through_parse() {
        assert_eq!("easeInOut".parse::<Curve>().unwrap(), Curve::EaseInOut);
        assert_eq!("".parse::<Curve>().unwrap(), Curve::Default);
        assert!("wobbly".parse::<Curve>().is_err());
    }
}
