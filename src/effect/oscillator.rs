//! Beat-synced brightness oscillators

use embassy_time::Instant;

use crate::math8::{beatsin8, beatsin16};

/// Sine precision used by an [`Oscillator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// 8-bit piecewise sine
    Sine8,
    /// 16-bit piecewise sine, smoother at low beat rates
    Sine16,
}

/// Sine wave between `low` and `high`, beating `bpm` times per minute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oscillator {
    bpm: u16,
    low: u8,
    high: u8,
    phase: u8,
    waveform: Waveform,
}

impl Oscillator {
    /// 8-bit oscillator, `phase` is 0-255 for a full cycle
    pub const fn sine8(bpm: u16, low: u8, high: u8, phase: u8) -> Self {
        Self {
            bpm,
            low,
            high,
            phase,
            waveform: Waveform::Sine8,
        }
    }

    /// 16-bit oscillator, `phase` is 0-255 for a full cycle
    pub const fn sine16(bpm: u16, low: u8, high: u8, phase: u8) -> Self {
        Self {
            bpm,
            low,
            high,
            phase,
            waveform: Waveform::Sine16,
        }
    }

    pub const fn low(&self) -> u8 {
        self.low
    }

    pub const fn high(&self) -> u8 {
        self.high
    }

    /// Oscillator output at `now`, always within `low..=high`
    pub fn value(&self, now: Instant) -> u8 {
        match self.waveform {
            Waveform::Sine8 => beatsin8(self.bpm, self.low, self.high, self.phase, now),
            Waveform::Sine16 => {
                let value = beatsin16(
                    self.bpm,
                    u16::from(self.low),
                    u16::from(self.high),
                    u16::from(self.phase) << 8,
                    now,
                );
                u8::try_from(value).unwrap_or(self.high)
            }
        }
    }
}

/// Integer mean of all oscillators at `now`
///
/// An empty set means full brightness.
pub fn average(oscillators: &[Oscillator], now: Instant) -> u8 {
    if oscillators.is_empty() {
        return 255;
    }
    let sum: u32 = oscillators
        .iter()
        .map(|oscillator| u32::from(oscillator.value(now)))
        .sum();
    let count = u32::try_from(oscillators.len()).unwrap_or(u32::MAX);
    u8::try_from(sum / count).unwrap_or(u8::MAX)
}
