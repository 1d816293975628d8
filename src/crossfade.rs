//! Dual-buffer crossfade
//!
//! Two source buffers are composited into one output buffer using a blend
//! ratio that ramps by one unit per step toward the targeted source.

use crate::color::{Rgb, blend_colors};

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// One of the two source buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Shown at ratio 0
    First,
    /// Shown at ratio 255
    Second,
}

impl Slot {
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    /// The opposite slot
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Crossfade state and buffers for a strip of `N` pixels
#[derive(Debug, Clone)]
pub struct Crossfade<const N: usize> {
    sources: [[Rgb; N]; 2],
    output: [Rgb; N],
    /// 0 = all first source, 255 = all second source
    ratio: u8,
    target: Slot,
}

impl<const N: usize> Default for Crossfade<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Crossfade<N> {
    /// Create a crossfade showing the first source, all buffers black
    pub const fn new() -> Self {
        Self {
            sources: [[BLACK; N]; 2],
            output: [BLACK; N],
            ratio: 0,
            target: Slot::First,
        }
    }

    /// Current blend ratio
    pub const fn ratio(&self) -> u8 {
        self.ratio
    }

    /// Source the ratio is ramping toward
    pub const fn target(&self) -> Slot {
        self.target
    }

    /// Ramp toward `slot` from the current ratio
    pub fn ramp_toward(&mut self, slot: Slot) {
        self.target = slot;
    }

    pub const fn source(&self, slot: Slot) -> &[Rgb; N] {
        &self.sources[slot.index()]
    }

    /// Buffer a renderer writes the effect of `slot` into
    pub fn source_mut(&mut self, slot: Slot) -> &mut [Rgb; N] {
        &mut self.sources[slot.index()]
    }

    /// Result of the last [`Crossfade::step`]
    pub const fn output(&self) -> &[Rgb; N] {
        &self.output
    }

    /// Composite the sources at the current ratio, then move the ratio one
    /// unit toward the target
    ///
    /// The ratio saturates at 0 and 255 and stays there until retargeted.
    pub fn step(&mut self) {
        self.composite();
        self.ratio = match self.target {
            Slot::First => self.ratio.saturating_sub(1),
            Slot::Second => self.ratio.saturating_add(1),
        };
    }

    fn composite(&mut self) {
        let [first, second] = &self.sources;
        for ((out, a), b) in self.output.iter_mut().zip(first).zip(second) {
            *out = blend_colors(*a, *b, self.ratio);
        }
    }
}
