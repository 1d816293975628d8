//! Default values of the reference hardware

use embassy_time::Duration;

use crate::color::{Rgb, rgb_from_u32};

/// Interval between crossfade steps
///
/// A full fade takes 255 steps, a little over five seconds.
pub const DEFAULT_BLEND_INTERVAL: Duration = Duration::from_millis(20);

/// Global output brightness
pub const DEFAULT_BRIGHTNESS: u8 = 160;

/// Color correction of a typical SMD5050 strip
pub const TYPICAL_LED_STRIP: Rgb = rgb_from_u32(0x00FF_B0F0);

/// Clicks buffered between two loop iterations
pub const CLICK_QUEUE_SIZE: usize = 4;
