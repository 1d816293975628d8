//! Palette sweep effects
//!
//! Paints a gradient stripe from a palette across the strip and pulses its
//! brightness with one or more oscillators. Rotating variants slide the
//! stripe along the strip as the palette offset advances.

use embassy_time::Duration;

use super::{Effect, FrameContext, Oscillator, oscillator};
use crate::{
    color::{Hsv, Rgb, hsv2rgb},
    palette::{self, GradientPalette},
};

const COOL_GLOW_PULSE: [Oscillator; 1] = [Oscillator::sine16(1, 64, 92, 0)];
const COOL_MOON_PULSE: [Oscillator; 2] = [
    Oscillator::sine8(1, 48, 92, 0),
    Oscillator::sine8(3, 32, 64, 96),
];
const WARM_GLOW_PULSE: [Oscillator; 2] = [
    Oscillator::sine8(1, 64, 92, 0),
    Oscillator::sine8(4, 32, 128, 128),
];
const JUICY_PLUM_PULSE: [Oscillator; 1] = [Oscillator::sine8(6, 64, 72, 0)];
const EMERALD_PULSE: [Oscillator; 1] = [Oscillator::sine8(2, 92, 128, 0)];

const COOL_GLOW_ROTATION: Duration = Duration::from_millis(200);
const COOL_MOON_ROTATION: Duration = Duration::from_millis(40);
const WARM_GLOW_ROTATION: Duration = Duration::from_millis(280);

/// Pixel that carries the emerald highlight
pub const EMERALD_ACCENT_INDEX: usize = 2;

const EMERALD_ACCENT: Accent = Accent {
    index: EMERALD_ACCENT_INDEX,
    hue: Oscillator::sine8(2, 128, 196, 0),
    value: Oscillator::sine8(2, 92, 128, 128),
};

/// Palette sweep preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVariant {
    /// Slowly drifting ice blues
    CoolGlow,
    /// Fast drifting moon silvers
    CoolMoon,
    /// Slowly drifting fire tones
    WarmGlow,
    /// Nearly solid plum
    JuicyPlum,
    /// Nearly solid emerald with a pulsing highlight
    Emerald,
}

/// Palette distance between neighbouring pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStep {
    /// Spread the whole palette across the strip
    Span,
    /// Fixed distance per pixel
    Fixed(u8),
}

/// Where the stripe starts on the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStart {
    /// Follow the palette offset, which advances once per interval
    Rotating(Duration),
    /// Always start at the same palette index
    Fixed(u8),
}

/// Single pixel painted directly from a hue/value pair on top of the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    /// Pixel index, skipped when the strip is shorter
    pub index: usize,
    /// Hue oscillator
    pub hue: Oscillator,
    /// Value oscillator
    pub value: Oscillator,
}

impl Accent {
    /// Accent color at the frame time
    pub fn color(&self, frame: FrameContext) -> Rgb {
        hsv2rgb(Hsv {
            hue: self.hue.value(frame.now),
            sat: 255,
            val: self.value.value(frame.now),
        })
    }
}

/// Palette sweep effect
#[derive(Debug, Clone, Copy)]
pub struct PaletteSweepEffect {
    palette: GradientPalette,
    pulse: &'static [Oscillator],
    step: SweepStep,
    start: SweepStart,
    accent: Option<Accent>,
}

impl PaletteSweepEffect {
    /// Create the effect for a preset
    pub const fn new(variant: SweepVariant) -> Self {
        match variant {
            SweepVariant::CoolGlow => Self {
                palette: palette::ICE,
                pulse: &COOL_GLOW_PULSE,
                step: SweepStep::Span,
                start: SweepStart::Rotating(COOL_GLOW_ROTATION),
                accent: None,
            },
            SweepVariant::CoolMoon => Self {
                palette: palette::MOON,
                pulse: &COOL_MOON_PULSE,
                step: SweepStep::Span,
                start: SweepStart::Rotating(COOL_MOON_ROTATION),
                accent: None,
            },
            SweepVariant::WarmGlow => Self {
                palette: palette::FIRE,
                pulse: &WARM_GLOW_PULSE,
                step: SweepStep::Span,
                start: SweepStart::Rotating(WARM_GLOW_ROTATION),
                accent: None,
            },
            SweepVariant::JuicyPlum => Self {
                palette: palette::PLUM,
                pulse: &JUICY_PLUM_PULSE,
                step: SweepStep::Fixed(1),
                start: SweepStart::Fixed(0),
                accent: None,
            },
            SweepVariant::Emerald => Self {
                palette: palette::EMERALD,
                pulse: &EMERALD_PULSE,
                step: SweepStep::Fixed(1),
                start: SweepStart::Fixed(0),
                accent: Some(EMERALD_ACCENT),
            },
        }
    }

    pub const fn palette(&self) -> GradientPalette {
        self.palette
    }

    pub const fn accent(&self) -> Option<Accent> {
        self.accent
    }

    /// Brightness applied to the sweep at the frame time
    pub fn brightness(&self, frame: FrameContext) -> u8 {
        oscillator::average(self.pulse, frame.now)
    }

    /// Palette index of the first pixel
    pub const fn start_index(&self, frame: FrameContext) -> u8 {
        match self.start {
            SweepStart::Rotating(_) => frame.palette_offset,
            SweepStart::Fixed(index) => index,
        }
    }

    /// Palette distance between neighbouring pixels on a strip of `len`
    pub fn step_for(&self, len: usize) -> u8 {
        match self.step {
            SweepStep::Span => u8::try_from(255 / len.max(1)).unwrap_or(0),
            SweepStep::Fixed(step) => step,
        }
    }

    /// Interval at which the palette offset should advance
    pub const fn rotation_interval(&self) -> Option<Duration> {
        match self.start {
            SweepStart::Rotating(interval) => Some(interval),
            SweepStart::Fixed(_) => None,
        }
    }
}

impl Effect for PaletteSweepEffect {
    fn render(&self, frame: FrameContext, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let brightness = self.brightness(frame);
        let start = self.start_index(frame);
        let step = self.step_for(leds.len());
        self.palette.fill(leds, start, step, brightness);

        if let Some(accent) = &self.accent {
            if let Some(led) = leds.get_mut(accent.index) {
                *led = accent.color(frame);
            }
        }
    }
}
