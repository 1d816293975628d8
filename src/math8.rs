//! 8-bit and 16-bit fixed-point helpers in the style of `FastLED`'s lib8tion.

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale a 16-bit value by a factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Saturating 8-bit subtraction, clamps at 0
#[inline]
pub const fn qsub8(a: u8, b: u8) -> u8 {
    a.saturating_sub(b)
}

/// Saturating 8-bit addition, clamps at 255
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Ease in out quadratic
pub fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Piecewise linear approximation of sine.
///
/// Input angle is 0-255 for a full circle, output is 0-255 centered on 128.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn sin8(theta: u8) -> u8 {
    const B_M16_INTERLEAVE: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F;

    let mut secoffset = offset & 0x0F;
    if theta & 0x40 != 0 {
        secoffset += 1;
    }

    let section = (offset >> 4) as usize;
    let b = B_M16_INTERLEAVE[section * 2] as i16;
    let m16 = B_M16_INTERLEAVE[section * 2 + 1] as i16;

    let mx = (m16 * secoffset as i16) >> 4;
    let mut y = mx + b;
    if theta & 0x80 != 0 {
        y = -y;
    }
    (y + 128) as u8
}

/// Piecewise linear approximation of sine with 16-bit precision.
///
/// Input angle is 0-65535 for a full circle, output is -32767..=32767.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn sin16(theta: u16) -> i16 {
    const BASE: [u16; 8] = [0, 6393, 12539, 18204, 23170, 27245, 30273, 32137];
    const SLOPE: [u8; 8] = [49, 48, 44, 38, 31, 23, 14, 4];

    let mut offset = (theta & 0x3FFF) >> 3;
    if theta & 0x4000 != 0 {
        offset = 2047 - offset;
    }

    let section = (offset / 256) as usize;
    let b = BASE[section];
    let m = SLOPE[section] as u16;
    let secoffset8 = (offset as u8) / 2;

    let mx = m * secoffset8 as u16;
    let y = (mx + b) as i16;
    if theta & 0x8000 != 0 { -y } else { y }
}

/// Sawtooth phase (0-65535) of a wave beating `bpm` times per minute.
///
/// Values of `bpm` below 256 are whole beats per minute, larger values are
/// treated as Q8.8 fixed point.
#[allow(clippy::cast_possible_truncation)]
pub fn beat16(bpm: u16, now: Instant) -> u16 {
    let bpm88 = if bpm < 256 { u64::from(bpm) << 8 } else { u64::from(bpm) };
    ((now.as_millis().wrapping_mul(bpm88).wrapping_mul(280)) >> 16) as u16
}

/// Sawtooth phase (0-255) of a wave beating `bpm` times per minute.
#[allow(clippy::cast_possible_truncation)]
pub fn beat8(bpm: u16, now: Instant) -> u8 {
    (beat16(bpm, now) >> 8) as u8
}

/// Sine wave oscillating between `low` and `high` at `bpm` beats per minute
pub fn beatsin8(bpm: u16, low: u8, high: u8, phase: u8, now: Instant) -> u8 {
    let wave = sin8(beat8(bpm, now).wrapping_add(phase));
    let range = high.wrapping_sub(low);
    low.wrapping_add(scale8(wave, range))
}

/// 16-bit precision variant of [`beatsin8`]
#[allow(clippy::cast_sign_loss)]
pub fn beatsin16(bpm: u16, low: u16, high: u16, phase: u16, now: Instant) -> u16 {
    let wave = (sin16(beat16(bpm, now).wrapping_add(phase)) as u16).wrapping_add(32768);
    let range = high.wrapping_sub(low);
    low.wrapping_add(scale16(wave, range))
}

/// Average of two signed 7-bit values, rounding toward the first
#[inline]
pub const fn avg7(i: i8, j: i8) -> i8 {
    (i >> 1) + (j >> 1) + (i & 0x1)
}

/// Linear interpolation between two signed 7-bit values
#[inline]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn lerp7by8(a: i8, b: i8, frac: u8) -> i8 {
    if b > a {
        let delta = b.wrapping_sub(a) as u8;
        a.wrapping_add(scale8(delta, frac) as i8)
    } else {
        let delta = a.wrapping_sub(b) as u8;
        a.wrapping_sub(scale8(delta, frac) as i8)
    }
}
