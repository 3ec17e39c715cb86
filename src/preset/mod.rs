//! Named animation presets and the table that turns them into geometry.
//!
//! A [`Preset`] is a closed set of recipes. Simple presets resolve to a
//! [`PresetDelta`] that overwrites offset, scale, rotation and opacity fields
//! of the configuration; advanced presets resolve to [`EffectSpec`]s played
//! on the element's layer.

mod table;

pub use table::{resolve_preset, EffectKind, EffectSpec, FlipAxis, PresetDelta, PresetResult};

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// An animation recipe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    /// No preset; the cycle only runs the plain from/to transition
    #[default]
    Unset,

    SlideLeft,
    SlideRight,
    SlideDown,
    SlideUp,

    SqueezeLeft,
    SqueezeRight,
    SqueezeDown,
    SqueezeUp,

    ZoomIn,
    ZoomOut,

    FadeIn,
    FadeOut,
    FadeInLeft,
    FadeInRight,
    FadeInDown,
    FadeInUp,

    Fall,

    Rotate,
    HeartBeat,
    Pulse,
    Shake,
    Pop,
    Swing,
    Morph,
    Squeeze,
    Wobble,
    Flash,
    FlipX,
    FlipY,
}

impl Preset {
    /// Every preset, in declaration order
    pub const ALL: [Preset; 30] = [
        Preset::Unset,
        Preset::SlideLeft,
        Preset::SlideRight,
        Preset::SlideDown,
        Preset::SlideUp,
        Preset::SqueezeLeft,
        Preset::SqueezeRight,
        Preset::SqueezeDown,
        Preset::SqueezeUp,
        Preset::ZoomIn,
        Preset::ZoomOut,
        Preset::FadeIn,
        Preset::FadeOut,
        Preset::FadeInLeft,
        Preset::FadeInRight,
        Preset::FadeInDown,
        Preset::FadeInUp,
        Preset::Fall,
        Preset::Rotate,
        Preset::HeartBeat,
        Preset::Pulse,
        Preset::Shake,
        Preset::Pop,
        Preset::Swing,
        Preset::Morph,
        Preset::Squeeze,
        Preset::Wobble,
        Preset::Flash,
        Preset::FlipX,
        Preset::FlipY,
    ];

    /// The name used in configuration strings
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Unset => "",
            Preset::SlideLeft => "slideLeft",
            Preset::SlideRight => "slideRight",
            Preset::SlideDown => "slideDown",
            Preset::SlideUp => "slideUp",
            Preset::SqueezeLeft => "squeezeLeft",
            Preset::SqueezeRight => "squeezeRight",
            Preset::SqueezeDown => "squeezeDown",
            Preset::SqueezeUp => "squeezeUp",
            Preset::ZoomIn => "zoomIn",
            Preset::ZoomOut => "zoomOut",
            Preset::FadeIn => "fadeIn",
            Preset::FadeOut => "fadeOut",
            Preset::FadeInLeft => "fadeInLeft",
            Preset::FadeInRight => "fadeInRight",
            Preset::FadeInDown => "fadeInDown",
            Preset::FadeInUp => "fadeInUp",
            Preset::Fall => "fall",
            Preset::Rotate => "rotate",
            Preset::HeartBeat => "heartBeat",
            Preset::Pulse => "pulse",
            Preset::Shake => "shake",
            Preset::Pop => "pop",
            Preset::Swing => "swing",
            Preset::Morph => "morph",
            Preset::Squeeze => "squeeze",
            Preset::Wobble => "wobble",
            Preset::Flash => "flash",
            Preset::FlipX => "flipX",
            Preset::FlipY => "flipY",
        }
    }

    /// Whether this preset plays layer effects instead of a geometric delta
    pub fn is_keyframe(&self) -> bool {
        matches!(
            self,
            Preset::Rotate
                | Preset::HeartBeat
                | Preset::Pulse
                | Preset::Shake
                | Preset::Pop
                | Preset::Swing
                | Preset::Morph
                | Preset::Squeeze
                | Preset::Wobble
                | Preset::Flash
                | Preset::FlipX
                | Preset::FlipY
        )
    }

    /// Parse a preset name, treating anything unrecognized as [`Preset::Unset`]
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown animation preset {:?}, ignoring", name);
            Preset::Unset
        })
    }
}

impl FromStr for Preset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| ParseError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Unset => write!(f, "unset"),
            other => write!(f, "{}", other.name()),
        }
    }
}
