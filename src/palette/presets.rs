//! Built-in palettes

use super::{GradientPalette, GradientStop};

/// Build an array of gradient stops from `(position, r, g, b)` tuples
macro_rules! gradient_stops {
    ($(($position:expr, $r:expr, $g:expr, $b:expr)),* $(,)?) => {
        [
            $(GradientStop::new($position, $r, $g, $b)),*
        ]
    };
}

// Pale blue with a warm white crest
const ICE_STOPS: [GradientStop; 6] = gradient_stops![
    (0, 90, 92, 128),
    (16, 40, 90, 192),
    (64, 80, 128, 236),
    (128, 192, 192, 128),
    (196, 60, 128, 236),
    (255, 90, 92, 128),
];

// Reds, oranges and hot pinks
const FIRE_STOPS: [GradientStop; 8] = gradient_stops![
    (0, 230, 60, 0),
    (16, 255, 0, 0),
    (48, 255, 70, 96),
    (76, 255, 180, 0),
    (128, 255, 60, 96),
    (196, 122, 0, 0),
    (220, 186, 64, 0),
    (255, 255, 20, 0),
];

const PLUM_STOPS: [GradientStop; 6] = gradient_stops![
    (0, 209, 0, 209),
    (48, 255, 16, 209),
    (64, 192, 32, 255),
    (128, 255, 16, 209),
    (192, 255, 0, 230),
    (255, 209, 0, 209),
];

const EMERALD_STOPS: [GradientStop; 5] = gradient_stops![
    (0, 20, 200, 0),
    (64, 40, 255, 10),
    (128, 40, 255, 0),
    (192, 70, 200, 20),
    (255, 0, 255, 20),
];

// Cold silvers
const MOON_STOPS: [GradientStop; 5] = gradient_stops![
    (0, 210, 255, 245),
    (48, 168, 168, 165),
    (128, 98, 120, 120),
    (192, 159, 168, 179),
    (255, 220, 220, 245),
];

// Black -> red -> yellow -> white, 16 evenly spaced stops
const HEAT_STOPS: [GradientStop; 16] = gradient_stops![
    (0, 0x00, 0x00, 0x00),
    (17, 0x33, 0x00, 0x00),
    (34, 0x66, 0x00, 0x00),
    (51, 0x99, 0x00, 0x00),
    (68, 0xCC, 0x00, 0x00),
    (85, 0xFF, 0x00, 0x00),
    (102, 0xFF, 0x33, 0x00),
    (119, 0xFF, 0x66, 0x00),
    (136, 0xFF, 0x99, 0x00),
    (153, 0xFF, 0xCC, 0x00),
    (170, 0xFF, 0xFF, 0x00),
    (187, 0xFF, 0xFF, 0x33),
    (204, 0xFF, 0xFF, 0x66),
    (221, 0xFF, 0xFF, 0x99),
    (238, 0xFF, 0xFF, 0xCC),
    (255, 0xFF, 0xFF, 0xFF),
];

pub const ICE: GradientPalette = GradientPalette::new(&ICE_STOPS);
pub const FIRE: GradientPalette = GradientPalette::new(&FIRE_STOPS);
pub const PLUM: GradientPalette = GradientPalette::new(&PLUM_STOPS);
pub const EMERALD: GradientPalette = GradientPalette::new(&EMERALD_STOPS);
pub const MOON: GradientPalette = GradientPalette::new(&MOON_STOPS);
pub const HEAT: GradientPalette = GradientPalette::new(&HEAT_STOPS);
