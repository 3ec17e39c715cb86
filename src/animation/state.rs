use std::time::Instant;

use super::{Animatable, SpringConfig, SpringState, Transition};

/// Result of advancing an animation
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running, or still in its delay)
    NoChange,
    /// Value changed to a new value
    Changed(T),
    /// The animation reached its target on this advance
    Finished(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_) | AdvanceResult::Finished(_))
    }

    /// Returns true if this advance completed the animation
    pub fn is_finished(&self) -> bool {
        matches!(self, AdvanceResult::Finished(_))
    }
}

/// Animation state for a single animatable value.
///
/// The host drives it by calling [`AnimationState::advance`] with the frame
/// time; nothing happens between calls.
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value being animated towards
    target: T,
    /// Value when animation started
    start: T,
    /// Time when animation started (before the delay)
    start_time: Instant,
    /// Transition configuration
    transition: Transition,
    /// Spring state (for spring-driven transitions)
    spring_state: Option<SpringState>,
    /// Spring derived from the transition's damping ratio and duration
    spring_config: Option<SpringConfig>,
    running: bool,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, transition: Transition) -> Self {
        let mut state = Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            start_time: Instant::now(),
            transition: Transition::default(),
            spring_state: None,
            spring_config: None,
            running: false, // Start completed
        };
        state.set_transition(transition);
        state
    }

    /// Replace the transition used by the next animation
    pub fn set_transition(&mut self, transition: Transition) {
        self.spring_config = transition
            .spring
            .map(|s| SpringConfig::from_damping_ratio(s.damping_ratio, transition.duration_secs));
        self.transition = transition;
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Start an animation with an explicit starting value.
    ///
    /// Replaces any animation in flight; the previous target is dropped.
    pub fn start_at(&mut self, from: T, to: T, now: Instant) {
        self.current = from.clone();
        self.start = from;
        self.target = to;
        self.start_time = now;
        self.running = true;
        self.spring_state = self
            .transition
            .spring
            .map(|s| SpringState::with_velocity(s.initial_velocity));
    }

    /// Advance the animation to the frame time `now`
    pub fn advance(&mut self, now: Instant) -> AdvanceResult<T> {
        if !self.running {
            return AdvanceResult::NoChange;
        }

        let elapsed = now.saturating_duration_since(self.start_time).as_secs_f32();
        let adjusted_elapsed = elapsed - self.transition.delay_secs.max(0.0);

        if adjusted_elapsed < 0.0 {
            // Still in delay period
            return AdvanceResult::NoChange;
        }

        let duration = self.transition.duration_secs;
        if adjusted_elapsed >= duration {
            self.running = false;
            self.current = self.target.clone();
            return AdvanceResult::Finished(self.current.clone());
        }

        let eased_t = match (&mut self.spring_state, &self.spring_config) {
            (Some(spring_state), Some(config)) => spring_state.step(adjusted_elapsed, config),
            _ => {
                let t = adjusted_elapsed / duration;
                self.transition.options.timing_function().evaluate(t)
            }
        };

        let new_value = T::lerp(&self.start, &self.target, eased_t);
        log::trace!("Animation progress {:.3} at {:.3}s", eased_t, adjusted_elapsed);

        if new_value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = new_value.clone();
        AdvanceResult::Changed(new_value)
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Time the current animation was started, before its delay
    pub fn start_time(&self) -> Instant {
        self.start_time
    }
}
