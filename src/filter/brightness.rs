//! Global brightness

use super::Filter;
use crate::color::{Rgb, scale_color};

/// Scales every pixel by a fixed brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    level: u8,
}

impl Brightness {
    pub const fn new(level: u8) -> Self {
        Self { level }
    }

    pub const fn level(&self) -> u8 {
        self.level
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level;
    }
}

impl Filter for Brightness {
    fn apply(&self, frame: &mut [Rgb]) {
        match self.level {
            255 => {}
            0 => frame.fill(Rgb::default()),
            level => {
                for pixel in frame.iter_mut() {
                    *pixel = scale_color(*pixel, level);
                }
            }
        }
    }
}
