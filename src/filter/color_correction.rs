//! White balance for LED strips
//!
//! Blue and green dies of common strips are brighter than red ones; scaling
//! each channel down by a fixed factor evens them out.

use super::Filter;
use crate::color::Rgb;
use crate::math8::scale8;

/// Per-channel multiplicative correction (255 = channel untouched)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCorrection {
    factors: Rgb,
}

impl ColorCorrection {
    pub const fn new(factors: Rgb) -> Self {
        Self { factors }
    }

    pub const fn factors(&self) -> Rgb {
        self.factors
    }

    /// `false` when every factor is 255
    pub const fn is_active(&self) -> bool {
        !matches!(
            self.factors,
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        )
    }

    /// Corrected copy of `pixel`
    pub const fn correct(&self, pixel: Rgb) -> Rgb {
        Rgb {
            r: scale8(pixel.r, self.factors.r),
            g: scale8(pixel.g, self.factors.g),
            b: scale8(pixel.b, self.factors.b),
        }
    }
}

impl Filter for ColorCorrection {
    fn apply(&self, frame: &mut [Rgb]) {
        if self.is_active() {
            frame.iter_mut().for_each(|pixel| *pixel = self.correct(*pixel));
        }
    }
}
