//! Output post-processing
//!
//! Filters run on the copy of the crossfade output that is handed to the
//! driver, never on the buffers the engine keeps between frames.

use crate::color::Rgb;
use crate::config::{DEFAULT_BRIGHTNESS, TYPICAL_LED_STRIP};

mod brightness;
mod color_correction;

pub use brightness::Brightness;
pub use color_correction::ColorCorrection;

pub trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}

/// Output settings of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Per-channel correction factors
    pub color_correction: Rgb,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            color_correction: TYPICAL_LED_STRIP,
        }
    }
}

/// Filter processor - applies post-processing to frames
///
/// Color correction runs first, then brightness.
#[derive(Debug, Clone, Copy)]
pub struct FilterProcessor {
    pub brightness: Brightness,
    pub color_correction: ColorCorrection,
}

impl FilterProcessor {
    pub const fn new(config: &OutputConfig) -> Self {
        Self {
            brightness: Brightness::new(config.brightness),
            color_correction: ColorCorrection::new(config.color_correction),
        }
    }

    /// Apply all filters to a frame
    pub fn apply(&self, frame: &mut [Rgb]) {
        self.color_correction.apply(frame);
        self.brightness.apply(frame);
    }
}

impl Default for FilterProcessor {
    fn default() -> Self {
        Self::new(&OutputConfig::default())
    }
}
