mod animatable;
mod keyframes;
mod spring;
mod state;
mod timing;

pub use animatable::Animatable;
pub use keyframes::{Keyframe, KeyframeTrack};
pub use spring::{SpringConfig, SpringState};
pub use state::{AdvanceResult, AnimationState};
pub use timing::{
    resolve_animation_options, resolve_timing_function, AnimationOptions, Curve, TimingFunction,
};

/// Damping and launch speed of a spring-driven transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    /// Damping ratio, 1.0 settles without oscillating
    pub damping_ratio: f32,
    /// Initial velocity relative to the full distance per second
    pub initial_velocity: f32,
}

impl SpringParams {
    pub const DEFAULT: Self = Self {
        damping_ratio: 0.7,
        initial_velocity: 0.7,
    };
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for how a value moves from one state to another
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in seconds
    pub duration_secs: f32,
    /// Delay before animation starts in seconds
    pub delay_secs: f32,
    /// Coarse pacing; only consulted when `spring` is `None`
    pub options: AnimationOptions,
    /// Spring physics for the progress curve, or `None` for a plain timed curve
    pub spring: Option<SpringParams>,
}

impl Transition {
    /// Create a timed transition with the given duration and pacing
    pub fn new(duration_secs: f32, options: AnimationOptions) -> Self {
        Self {
            duration_secs,
            delay_secs: 0.0,
            options,
            spring: None,
        }
    }

    /// Spring transition with the standard damping and velocity (0.7 / 0.7)
    pub fn spring(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            delay_secs: 0.0,
            options: AnimationOptions::empty(),
            spring: Some(SpringParams::DEFAULT),
        }
    }

    /// Standard spring transition that waits `delay_secs` before moving
    pub fn spring_with_delay(duration_secs: f32, delay_secs: f32) -> Self {
        Self::spring(duration_secs).delay(delay_secs)
    }

    /// Constant-speed transition without spring physics
    pub fn linear(duration_secs: f32) -> Self {
        Self::new(duration_secs, AnimationOptions::CURVE_LINEAR)
    }

    pub fn ease_in(duration_secs: f32) -> Self {
        Self::new(duration_secs, AnimationOptions::CURVE_EASE_IN)
    }

    pub fn ease_out(duration_secs: f32) -> Self {
        Self::new(duration_secs, AnimationOptions::CURVE_EASE_OUT)
    }

    pub fn ease_in_out(duration_secs: f32) -> Self {
        Self::new(duration_secs, AnimationOptions::CURVE_EASE_IN_OUT)
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay_secs: f32) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_secs: f32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Set the coarse pacing options
    pub fn options(mut self, options: AnimationOptions) -> Self {
        self.options = options;
        self
    }

    /// Drive progress with a spring of the given damping ratio and velocity
    pub fn with_spring(mut self, damping_ratio: f32, initial_velocity: f32) -> Self {
        self.spring = Some(SpringParams {
            damping_ratio,
            initial_velocity,
        });
        self
    }

    /// Time from start of delay to the end of the motion
    pub fn total_secs(&self) -> f32 {
        self.delay_secs.max(0.0) + self.duration_secs.max(0.0)
    }
}

impl Default for Transition {
    /// Standard spring over 0.7 seconds
    fn default() -> Self {
        Self::spring(0.7)
    }
}
