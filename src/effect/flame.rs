//! Noise driven flame effects
//!
//! Each pixel samples 3D noise that scrolls with time, then loses a
//! positional falloff so the flame is hottest toward the end of the strip.

use super::{Effect, FrameContext, Oscillator, oscillator};
use crate::{
    color::Rgb,
    math8::qsub8,
    noise::inoise8,
    palette::{self, GradientPalette},
};

const EMBERS_PULSE: [Oscillator; 3] = [
    Oscillator::sine8(1, 64, 128, 0),
    Oscillator::sine8(12, 64, 92, 0),
    Oscillator::sine8(120, 92, 148, 0),
];
const COALS_PULSE: [Oscillator; 3] = [
    Oscillator::sine8(1, 32, 64, 0),
    Oscillator::sine8(4, 64, 92, 128),
    Oscillator::sine8(6, 16, 128, 64),
];

/// Value the falloff ramp is folded around
const FALLOFF_FOLD: i64 = 32;

/// Flame preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlameVariant {
    /// Bright, fast flicker on the heat palette
    Fire,
    /// Dimmer, slower glow on the fire palette
    Embers,
    /// Darkest variant, deep slow pulses
    Coals,
}

/// Noise flame effect
#[derive(Debug, Clone, Copy)]
pub struct FlameEffect {
    palette: GradientPalette,
    /// Noise distance between neighbouring pixels
    stride: u16,
    /// Time divisor for the noise depth axis
    divisor: u16,
    pulse: &'static [Oscillator],
}

impl FlameEffect {
    /// Create the effect for a preset
    pub const fn new(variant: FlameVariant) -> Self {
        match variant {
            FlameVariant::Fire => Self {
                palette: palette::HEAT,
                stride: 92,
                divisor: 3,
                pulse: &[],
            },
            FlameVariant::Embers => Self {
                palette: palette::FIRE,
                stride: 32,
                divisor: 2,
                pulse: &EMBERS_PULSE,
            },
            FlameVariant::Coals => Self {
                palette: palette::FIRE,
                stride: 32,
                divisor: 2,
                pulse: &COALS_PULSE,
            },
        }
    }

    pub const fn palette(&self) -> GradientPalette {
        self.palette
    }

    /// Brightness applied to the flame at the frame time
    pub fn brightness(&self, frame: FrameContext) -> u8 {
        oscillator::average(self.pulse, frame.now)
    }

    /// Raw noise sample for pixel `index`
    #[allow(clippy::cast_possible_truncation)]
    pub fn noise_at(&self, index: usize, frame: FrameContext) -> u8 {
        let t = frame.now.as_millis();
        let i = u64::try_from(index).unwrap_or(u64::MAX);
        // Noise coordinates are 16 bit and wrap
        let y = i.wrapping_mul(u64::from(self.stride)).wrapping_add(t) as u16;
        let z = (t / u64::from(self.divisor.max(1))) as u16;
        inoise8(0, y, z)
    }

    /// Palette index for pixel `index` on a strip of `len`
    pub fn heat_at(&self, index: usize, len: usize, frame: FrameContext) -> u8 {
        qsub8(self.noise_at(index, frame), falloff(index, len))
    }
}

/// Positional damping for pixel `index` on a strip of `len`
///
/// `|(i - (len - 1)) * 255 / (len - 1) - 32|`, clamped to 255. The last
/// pixel gets the smallest damping (32), the first one the largest.
pub fn falloff(index: usize, len: usize) -> u8 {
    let last = i64::try_from(len.saturating_sub(1)).unwrap_or(i64::MAX);
    let i = i64::try_from(index).unwrap_or(last);
    let ramp = if last == 0 { 0 } else { (i - last) * 255 / last };
    u8::try_from((ramp - FALLOFF_FOLD).unsigned_abs()).unwrap_or(u8::MAX)
}

impl Effect for FlameEffect {
    fn render(&self, frame: FrameContext, leds: &mut [Rgb]) {
        let len = leds.len();
        let brightness = self.brightness(frame);

        for (i, led) in leds.iter_mut().enumerate() {
            let heat = self.heat_at(i, len, frame);
            *led = self.palette.color_at_scaled(heat, brightness);
        }
    }
}
