//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod flame;
pub mod oscillator;
mod sweep;

use embassy_time::{Duration, Instant};
pub use flame::{FlameEffect, FlameVariant, falloff};
pub use oscillator::{Oscillator, Waveform};
pub use sweep::{
    Accent, EMERALD_ACCENT_INDEX, PaletteSweepEffect, SweepStart, SweepStep, SweepVariant,
};

use crate::color::Rgb;

const EFFECT_NAME_COOL_GLOW: &str = "cool_glow";
const EFFECT_NAME_COOL_MOON: &str = "cool_moon";
const EFFECT_NAME_WARM_GLOW: &str = "warm_glow";
const EFFECT_NAME_JUICY_PLUM: &str = "juicy_plum";
const EFFECT_NAME_EMERALD: &str = "emerald";
const EFFECT_NAME_FIRE: &str = "fire";
const EFFECT_NAME_EMBERS: &str = "embers";
const EFFECT_NAME_COALS: &str = "coals";

const EFFECT_ID_COOL_GLOW: u8 = 0;
const EFFECT_ID_COOL_MOON: u8 = 1;
const EFFECT_ID_WARM_GLOW: u8 = 2;
const EFFECT_ID_JUICY_PLUM: u8 = 3;
const EFFECT_ID_EMERALD: u8 = 4;
const EFFECT_ID_FIRE: u8 = 5;
const EFFECT_ID_EMBERS: u8 = 6;
const EFFECT_ID_COALS: u8 = 7;

/// Inputs shared by every effect for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameContext {
    /// Time since startup
    pub now: Instant,
    /// Rotating palette offset of the effect being rendered
    pub palette_offset: u8,
}

impl FrameContext {
    pub const fn new(now: Instant, palette_offset: u8) -> Self {
        Self {
            now,
            palette_offset,
        }
    }
}

pub trait Effect {
    /// Render a single frame into `leds`
    ///
    /// Every pixel of `leds` is overwritten.
    fn render(&self, frame: FrameContext, leds: &mut [Rgb]);
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, Copy)]
pub enum EffectSlot {
    CoolGlow(PaletteSweepEffect),
    CoolMoon(PaletteSweepEffect),
    WarmGlow(PaletteSweepEffect),
    JuicyPlum(PaletteSweepEffect),
    Emerald(PaletteSweepEffect),
    Fire(FlameEffect),
    Embers(FlameEffect),
    Coals(FlameEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectId {
    #[default]
    CoolGlow = EFFECT_ID_COOL_GLOW,
    CoolMoon = EFFECT_ID_COOL_MOON,
    WarmGlow = EFFECT_ID_WARM_GLOW,
    JuicyPlum = EFFECT_ID_JUICY_PLUM,
    Emerald = EFFECT_ID_EMERALD,
    Fire = EFFECT_ID_FIRE,
    Embers = EFFECT_ID_EMBERS,
    Coals = EFFECT_ID_COALS,
}

impl EffectId {
    /// Number of known effects
    pub const COUNT: usize = 8;

    /// All effects in button order
    pub const ALL: [Self; Self::COUNT] = [
        Self::CoolGlow,
        Self::CoolMoon,
        Self::WarmGlow,
        Self::JuicyPlum,
        Self::Emerald,
        Self::Fire,
        Self::Embers,
        Self::Coals,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_COOL_GLOW => Self::CoolGlow,
            EFFECT_ID_COOL_MOON => Self::CoolMoon,
            EFFECT_ID_WARM_GLOW => Self::WarmGlow,
            EFFECT_ID_JUICY_PLUM => Self::JuicyPlum,
            EFFECT_ID_EMERALD => Self::Emerald,
            EFFECT_ID_FIRE => Self::Fire,
            EFFECT_ID_EMBERS => Self::Embers,
            EFFECT_ID_COALS => Self::Coals,
            _ => return None,
        })
    }

    /// Position of the id in [`EffectId::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_slot(self) -> EffectSlot {
        match self {
            Self::CoolGlow => {
                EffectSlot::CoolGlow(PaletteSweepEffect::new(SweepVariant::CoolGlow))
            }
            Self::CoolMoon => {
                EffectSlot::CoolMoon(PaletteSweepEffect::new(SweepVariant::CoolMoon))
            }
            Self::WarmGlow => {
                EffectSlot::WarmGlow(PaletteSweepEffect::new(SweepVariant::WarmGlow))
            }
            Self::JuicyPlum => {
                EffectSlot::JuicyPlum(PaletteSweepEffect::new(SweepVariant::JuicyPlum))
            }
            Self::Emerald => {
                EffectSlot::Emerald(PaletteSweepEffect::new(SweepVariant::Emerald))
            }
            Self::Fire => EffectSlot::Fire(FlameEffect::new(FlameVariant::Fire)),
            Self::Embers => EffectSlot::Embers(FlameEffect::new(FlameVariant::Embers)),
            Self::Coals => EffectSlot::Coals(FlameEffect::new(FlameVariant::Coals)),
        }
    }

    /// Interval at which the palette offset of this effect advances
    ///
    /// `None` for effects that do not rotate their palette.
    pub const fn rotation_interval(self) -> Option<Duration> {
        self.to_slot().rotation_interval()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CoolGlow => EFFECT_NAME_COOL_GLOW,
            Self::CoolMoon => EFFECT_NAME_COOL_MOON,
            Self::WarmGlow => EFFECT_NAME_WARM_GLOW,
            Self::JuicyPlum => EFFECT_NAME_JUICY_PLUM,
            Self::Emerald => EFFECT_NAME_EMERALD,
            Self::Fire => EFFECT_NAME_FIRE,
            Self::Embers => EFFECT_NAME_EMBERS,
            Self::Coals => EFFECT_NAME_COALS,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_COOL_GLOW => Some(Self::CoolGlow),
            EFFECT_NAME_COOL_MOON => Some(Self::CoolMoon),
            EFFECT_NAME_WARM_GLOW => Some(Self::WarmGlow),
            EFFECT_NAME_JUICY_PLUM => Some(Self::JuicyPlum),
            EFFECT_NAME_EMERALD => Some(Self::Emerald),
            EFFECT_NAME_FIRE => Some(Self::Fire),
            EFFECT_NAME_EMBERS => Some(Self::Embers),
            EFFECT_NAME_COALS => Some(Self::Coals),
            _ => None,
        }
    }
}

impl Default for EffectSlot {
    fn default() -> Self {
        EffectId::CoolGlow.to_slot()
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render(&self, frame: FrameContext, leds: &mut [Rgb]) {
        match self {
            Self::CoolGlow(effect)
            | Self::CoolMoon(effect)
            | Self::WarmGlow(effect)
            | Self::JuicyPlum(effect)
            | Self::Emerald(effect) => effect.render(frame, leds),
            Self::Fire(effect) | Self::Embers(effect) | Self::Coals(effect) => {
                effect.render(frame, leds);
            }
        }
    }

    /// Get the effect ID for external observation
    pub const fn id(&self) -> EffectId {
        match self {
            Self::CoolGlow(_) => EffectId::CoolGlow,
            Self::CoolMoon(_) => EffectId::CoolMoon,
            Self::WarmGlow(_) => EffectId::WarmGlow,
            Self::JuicyPlum(_) => EffectId::JuicyPlum,
            Self::Emerald(_) => EffectId::Emerald,
            Self::Fire(_) => EffectId::Fire,
            Self::Embers(_) => EffectId::Embers,
            Self::Coals(_) => EffectId::Coals,
        }
    }

    /// Interval at which the palette offset of this effect advances
    pub const fn rotation_interval(&self) -> Option<Duration> {
        match self {
            Self::CoolGlow(effect)
            | Self::CoolMoon(effect)
            | Self::WarmGlow(effect)
            | Self::JuicyPlum(effect)
            | Self::Emerald(effect) => effect.rotation_interval(),
            Self::Fire(_) | Self::Embers(_) | Self::Coals(_) => None,
        }
    }
}
