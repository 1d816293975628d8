//! Piecewise linear color gradients keyed by an 8-bit position

mod presets;

pub use presets::{EMERALD, FIRE, HEAT, ICE, MOON, PLUM};

use crate::color::{Rgb, blend_colors, scale_color};

/// A single gradient stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    /// Position on the gradient (0-255)
    pub position: u8,
    /// Color at this position
    pub color: Rgb,
}

impl GradientStop {
    pub const fn new(position: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            position,
            color: Rgb { r, g, b },
        }
    }
}

/// Immutable gradient palette
///
/// Stop positions are non-decreasing, the first stop sits at 0 and the last
/// at 255. Violations are rejected at compile time when the palette is a
/// `const`.
#[derive(Debug, Clone, Copy)]
pub struct GradientPalette {
    stops: &'static [GradientStop],
}

impl GradientPalette {
    /// Create a palette from its stops
    ///
    /// # Panics
    /// Panics if the stops do not span 0-255 in non-decreasing order.
    pub const fn new(stops: &'static [GradientStop]) -> Self {
        assert!(stops.len() >= 2, "palette needs at least two stops");
        assert!(stops[0].position == 0, "first stop must be at 0");
        assert!(
            stops[stops.len() - 1].position == 255,
            "last stop must be at 255"
        );
        let mut i = 1;
        while i < stops.len() {
            assert!(
                stops[i - 1].position <= stops[i].position,
                "stop positions must be non-decreasing"
            );
            i += 1;
        }
        Self { stops }
    }

    /// Gradient stops in order
    pub const fn stops(&self) -> &'static [GradientStop] {
        self.stops
    }

    /// Sample the palette at `index`
    ///
    /// Interpolates linearly between the two stops bracketing the index and
    /// returns the stop color exactly at stop positions.
    #[allow(clippy::cast_possible_truncation)]
    pub fn color_at(&self, index: u8) -> Rgb {
        for window in self.stops.windows(2) {
            let [lower, upper] = window else {
                continue;
            };
            if index >= upper.position {
                continue;
            }
            let span = u16::from(upper.position - lower.position).max(1);
            let offset = u16::from(index.saturating_sub(lower.position));
            let amount = (offset * 255 / span) as u8;
            return blend_colors(lower.color, upper.color, amount);
        }
        self.stops.last().map_or(Rgb::default(), |stop| stop.color)
    }

    /// Sample the palette at `index` and scale the result by `value`
    ///
    /// `value` of 255 leaves the color untouched, 0 gives black.
    pub fn color_at_scaled(&self, index: u8, value: u8) -> Rgb {
        let color = self.color_at(index);
        if value == 255 {
            return color;
        }
        scale_color(color, value)
    }

    /// Paint a gradient stripe across `leds`
    ///
    /// Pixel `i` is sampled at `start + i * step`, wrapping around the
    /// palette.
    pub fn fill(&self, leds: &mut [Rgb], start: u8, step: u8, value: u8) {
        let mut index = start;
        for led in leds {
            *led = self.color_at_scaled(index, value);
            index = index.wrapping_add(step);
        }
    }
}
