//! The narrow capability interface a host element exposes to a session.

use crate::animation::Animatable;
use crate::effects::LayerAnimation;
use crate::transform::Transform;

/// A visual element that presets can move, scale, rotate and fade.
///
/// The host owns rendering; the session only reads and writes these
/// properties and hands off layer effects.
pub trait VisualElement {
    /// Current 2D affine transform
    fn transform(&self) -> Transform;

    fn set_transform(&mut self, transform: Transform);

    /// Current opacity in [0, 1]
    fn alpha(&self) -> f32;

    fn set_alpha(&mut self, alpha: f32);

    /// Width of the element's layer, used for flip perspective
    fn width(&self) -> f32;

    /// Install an effect on the element's persistent layer.
    ///
    /// An effect with the same key as one already installed replaces it.
    /// Effects run independently of the session's transition and are never
    /// removed by it.
    fn add_layer_animation(&mut self, animation: LayerAnimation);
}

/// Whether the host application is in the foreground
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Active,
    /// Visible but not receiving events (e.g. during a system overlay)
    Inactive,
    Background,
}

impl AppState {
    pub fn is_active(&self) -> bool {
        matches!(self, AppState::Active)
    }
}

/// Transform and opacity of an element at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub transform: Transform,
    pub alpha: f32,
}

impl VisualState {
    /// Untransformed and fully opaque
    pub const IDENTITY: Self = Self {
        transform: Transform::IDENTITY,
        alpha: 1.0,
    };

    /// Read the state currently shown by `element`
    pub fn capture<E: VisualElement + ?Sized>(element: &E) -> Self {
        Self {
            transform: element.transform(),
            alpha: element.alpha(),
        }
    }

    /// Write this state to `element`
    pub fn apply_to<E: VisualElement + ?Sized>(&self, element: &mut E) {
        element.set_transform(self.transform);
        element.set_alpha(self.alpha);
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Animatable for VisualState {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            transform: Transform::lerp(&from.transform, &to.transform, t),
            // Spring progress overshoots; opacity cannot
            alpha: f32::lerp(&from.alpha, &to.alpha, t).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_state_lerp() {
        let from = VisualState {
            transform: Transform::translate(0.0, 300.0),
            alpha: 0.0,
        };
        let mid = VisualState::lerp(&from, &VisualState::IDENTITY, 0.5);
        assert_eq!(mid.transform.translation(), (0.0, 150.0));
        assert_eq!(mid.alpha, 0.5);
    }

    #[test]
    fn test_visual_state_lerp_clamps_alpha_on_overshoot() {
        let hidden = VisualState {
            transform: Transform::IDENTITY,
            alpha: 0.0,
        };
        assert_eq!(VisualState::lerp(&hidden, &VisualState::IDENTITY, 1.2).alpha, 1.0);
        assert_eq!(VisualState::lerp(&VisualState::IDENTITY, &hidden, 1.2).alpha, 0.0);
        assert_eq!(VisualState::lerp(&hidden, &VisualState::IDENTITY, -0.3).alpha, 0.0);
    }

    #[test]
    fn test_only_active_counts_as_foreground() {
        assert!(AppState::Active.is_active());
        assert!(!AppState::Inactive.is_active());
        assert!(!AppState::Background.is_active());
    }
}
