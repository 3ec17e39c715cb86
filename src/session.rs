//! The animation session: applies a preset to an element and drives the
//! transition to completion.
//!
//! A session moves through four phases:
//!
//! ```text
//! Idle -> Preparing -> Transitioning -> Completing -> Idle
//! ```
//!
//! `animate*` calls run `Preparing` synchronously and return with the
//! session `Transitioning`. The host then calls [`Session::advance`] from its
//! frame loop; the advance that reaches the end of the transition runs the
//! completion callback, resets the configuration and returns to `Idle`.

use std::time::Instant;

use crate::animation::{AdvanceResult, AnimationState, Transition};
use crate::config::Configuration;
use crate::effects::LayerAnimation;
use crate::element::{AppState, VisualElement, VisualState};
use crate::preset::{resolve_preset, PresetResult};

/// Callback run once when a transition ends
pub type Completion = Box<dyn FnOnce()>;

/// Where a session is in its cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No transition; configuration at defaults unless the caller changed it
    Idle,
    /// Applying the preset and snapshotting from/to states
    Preparing,
    /// Transition scheduled, progressing on [`Session::advance`]
    Transitioning,
    /// Running the completion callback and resetting configuration
    Completing,
}

/// Which end of the preset the element starts from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Start in the preset state, end at identity
    From,
    /// Start where the element is, end in the preset state
    To,
}

/// Drives preset animations for a single element
pub struct Session<E: VisualElement> {
    element: E,
    config: Configuration,
    phase: Phase,
    animation: AnimationState<VisualState>,
    completion: Option<Completion>,
    /// Autostart was requested while the app was not active
    animate_after_active: bool,
}

impl<E: VisualElement> Session<E> {
    /// Bind a session to `element` with a default configuration
    pub fn new(element: E) -> Self {
        Self::with_configuration(element, Configuration::default())
    }

    pub fn with_configuration(element: E, config: Configuration) -> Self {
        let initial = VisualState::capture(&element);
        Self {
            element,
            config,
            phase: Phase::Idle,
            animation: AnimationState::new(initial, Transition::default()),
            completion: None,
            animate_after_active: false,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    /// Edit the configuration in place before the next `animate*` call
    pub fn configure(&mut self, f: impl FnOnce(&mut Configuration)) {
        f(&mut self.config);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    /// Time the running transition was scheduled, before its delay
    pub fn started_at(&self) -> Option<Instant> {
        self.is_animating().then(|| self.animation.start_time())
    }

    /// Target of the running transition
    pub fn target(&self) -> Option<&VisualState> {
        self.is_animating().then(|| self.animation.target())
    }

    /// Move from the preset state to the element's natural state
    pub fn animate(&mut self) {
        self.start(Direction::From, None, Instant::now());
    }

    /// Like [`Session::animate`], running `completion` when the transition ends
    pub fn animate_next(&mut self, completion: impl FnOnce() + 'static) {
        self.start(Direction::From, Some(Box::new(completion)), Instant::now());
    }

    /// Move from the element's current state to the preset state
    pub fn animate_to(&mut self) {
        self.start(Direction::To, None, Instant::now());
    }

    /// Like [`Session::animate_to`], running `completion` when the transition ends
    pub fn animate_to_next(&mut self, completion: impl FnOnce() + 'static) {
        self.start(Direction::To, Some(Box::new(completion)), Instant::now());
    }

    /// Schedule a transition starting at `now`.
    ///
    /// A transition already in flight is replaced: the new one starts from
    /// wherever the element currently is, and the replaced completion
    /// callback runs immediately without resetting the configuration.
    /// Layer effects installed earlier keep running.
    pub fn start(&mut self, direction: Direction, completion: Option<Completion>, now: Instant) {
        if self.phase == Phase::Transitioning {
            log::debug!("Replacing transition in flight");
            if let Some(previous) = self.completion.take() {
                previous();
            }
        }

        self.phase = Phase::Preparing;
        self.config.animate_from = direction == Direction::From;
        self.apply_preset();

        let preset_state = VisualState {
            transform: self.config.transform(),
            alpha: self.config.opacity,
        };

        // The preset may flip the direction (zoomOut, fadeOut, fall)
        let (from, to) = if self.config.animate_from {
            preset_state.apply_to(&mut self.element);
            (preset_state, VisualState::IDENTITY)
        } else {
            (VisualState::capture(&self.element), preset_state)
        };

        let transition = self.config.transition();
        log::debug!(
            "Starting {} transition ({:?}): {:.2}s after {:.2}s, damping {:.2}, velocity {:.2}",
            self.config.preset,
            if self.config.animate_from {
                Direction::From
            } else {
                Direction::To
            },
            transition.duration_secs,
            transition.delay_secs,
            self.config.damping,
            self.config.velocity
        );

        self.animation.set_transition(transition);
        self.animation.start_at(from, to, now);
        self.completion = completion;
        self.phase = Phase::Transitioning;
    }

    /// Resolve the configured preset into the record or onto the layer
    fn apply_preset(&mut self) {
        match resolve_preset(self.config.preset, self.config.force) {
            PresetResult::Delta(delta) => delta.apply_to(&mut self.config),
            PresetResult::Effects(effects) => {
                let width = self.element.width();
                for spec in &effects {
                    let animation = LayerAnimation::compile(spec, &self.config, width);
                    log::debug!(
                        "Installing layer effect {:?} on {}",
                        animation.key,
                        animation.property.key_path()
                    );
                    self.element.add_layer_animation(animation);
                }
            }
        }
    }

    /// Advance the running transition to the frame time `now`.
    ///
    /// Writes the interpolated state to the element. Returns
    /// [`AdvanceResult::Finished`] on the advance that completes the cycle.
    pub fn advance(&mut self, now: Instant) -> AdvanceResult<VisualState> {
        if self.phase != Phase::Transitioning {
            return AdvanceResult::NoChange;
        }

        let result = self.animation.advance(now);
        match &result {
            AdvanceResult::NoChange => {}
            AdvanceResult::Changed(state) => state.apply_to(&mut self.element),
            AdvanceResult::Finished(state) => {
                state.apply_to(&mut self.element);
                self.complete();
            }
        }
        result
    }

    fn complete(&mut self) {
        self.phase = Phase::Completing;
        if let Some(completion) = self.completion.take() {
            completion();
        }
        self.config.reset();
        self.phase = Phase::Idle;
        log::debug!("Transition complete, configuration reset");
    }

    /// Element was created: hide it if `autohide` is set
    pub fn awake(&mut self) {
        if self.config.autohide {
            self.element.set_alpha(0.0);
        }
    }

    /// Element was attached to a window while the app is in `app_state`.
    ///
    /// With `autostart` set, animates right away when the app is active and
    /// otherwise waits for [`Session::did_become_active`].
    pub fn did_move_to_window(&mut self, app_state: AppState) {
        if !self.config.autostart {
            return;
        }
        if !app_state.is_active() {
            log::debug!("App is {:?}, deferring autostart", app_state);
            self.animate_after_active = true;
            return;
        }
        self.element.set_alpha(0.0);
        self.animate();
    }

    /// The host app came to the foreground
    pub fn did_become_active(&mut self) {
        if self.animate_after_active {
            self.animate_after_active = false;
            self.element.set_alpha(0.0);
            self.animate();
        }
    }

    /// Whether an autostart is waiting for the app to become active
    pub fn is_waiting_for_active(&self) -> bool {
        self.animate_after_active
    }
}
