//! Declarative animation presets for retained visual elements.
//!
//! Attach a [`Configuration`](config::Configuration) to an element, pick a
//! [`Preset`](preset::Preset), and let a [`Session`](session::Session) move
//! the element in or out with a damped spring, or play keyframe effects on
//! its layer. The host supplies the element through
//! [`VisualElement`](element::VisualElement) and calls
//! [`Session::advance`](session::Session::advance) once per frame.

pub mod animation;
pub mod config;
pub mod effects;
pub mod element;
pub mod error;
pub mod preset;
pub mod session;
pub mod transform;

pub mod prelude {
    pub use crate::animation::{
        resolve_animation_options, resolve_timing_function, AdvanceResult, Animatable,
        AnimationOptions, AnimationState, Curve, KeyframeTrack, TimingFunction, Transition,
    };
    pub use crate::config::Configuration;
    pub use crate::effects::{EffectValues, LayerAnimation, LayerProperty};
    pub use crate::element::{AppState, VisualElement, VisualState};
    pub use crate::error::ParseError;
    pub use crate::preset::{resolve_preset, Preset, PresetDelta, PresetResult};
    pub use crate::session::{Completion, Direction, Phase, Session};
    pub use crate::transform::{compose, Transform};
}
