/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    /// t can exceed [0, 1] range for overshoot effects
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for (f32, f32) {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        (
            from.0 + (to.0 - from.0) * t,
            from.1 + (to.1 - from.1) * t,
        )
    }
}
