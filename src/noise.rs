//! 3D coherent gradient noise with 8-bit output
//!
//! Integer Perlin noise as found in `FastLED` (`inoise8`). Coordinates are
//! 8.8 fixed point: the high byte selects the lattice cell, the low byte is
//! the position inside it. Lattice points always evaluate to 128.

use crate::math8::{avg7, ease_in_out_quad, lerp7by8, qadd8};

/// Ken Perlin's permutation table, with the first entry repeated so that
/// `perm(x + 1)` never needs to wrap.
const PERMUTATION: [u8; 257] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30,
    69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94,
    252, 219, 203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171,
    168, 68, 175, 74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60,
    211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1,
    216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86,
    164, 100, 109, 198, 173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118,
    126, 255, 82, 85, 212, 207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170,
    213, 119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39,
    253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34,
    242, 193, 238, 210, 144, 12, 191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49,
    192, 214, 31, 181, 199, 106, 157, 184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254,
    138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
    151,
];

/// Offset of the far corner of a cell in the signed in-cell coordinates
const CELL: i8 = i8::MIN;

#[inline]
fn perm(index: u16) -> u8 {
    PERMUTATION[usize::from(index) % PERMUTATION.len()]
}

/// Dot product of the in-cell position with one of 12 gradient directions
#[inline]
fn grad8(hash: u8, x: i8, y: i8, z: i8) -> i8 {
    let hash = hash & 0x0F;
    let mut u = if hash & 0x08 != 0 { y } else { x };
    let mut v = if hash < 4 {
        y
    } else if hash == 12 || hash == 14 {
        x
    } else {
        z
    };
    if hash & 0x01 != 0 {
        u = u.wrapping_neg();
    }
    if hash & 0x02 != 0 {
        v = v.wrapping_neg();
    }
    avg7(u, v)
}

/// Signed raw noise, roughly -64..=64
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn inoise8_raw(x: u16, y: u16, z: u16) -> i8 {
    // Lattice cell containing the point
    let cx = x >> 8;
    let cy = (y >> 8) as u8;
    let cz = (z >> 8) as u8;

    // Hash the cube corners
    let a = perm(cx).wrapping_add(cy);
    let aa = perm(u16::from(a)).wrapping_add(cz);
    let ab = perm(u16::from(a) + 1).wrapping_add(cz);
    let b = perm(cx + 1).wrapping_add(cy);
    let ba = perm(u16::from(b)).wrapping_add(cz);
    let bb = perm(u16::from(b) + 1).wrapping_add(cz);

    // Faded position inside the cell
    let u = ease_in_out_quad(x as u8);
    let v = ease_in_out_quad(y as u8);
    let w = ease_in_out_quad(z as u8);

    // Signed in-cell coordinates for the gradient function
    let xx = ((x as u8) >> 1) as i8;
    let yy = ((y as u8) >> 1) as i8;
    let zz = ((z as u8) >> 1) as i8;
    let (xn, yn, zn) = (
        xx.wrapping_add(CELL),
        yy.wrapping_add(CELL),
        zz.wrapping_add(CELL),
    );

    let x1 = lerp7by8(
        grad8(perm(u16::from(aa)), xx, yy, zz),
        grad8(perm(u16::from(ba)), xn, yy, zz),
        u,
    );
    let x2 = lerp7by8(
        grad8(perm(u16::from(ab)), xx, yn, zz),
        grad8(perm(u16::from(bb)), xn, yn, zz),
        u,
    );
    let x3 = lerp7by8(
        grad8(perm(u16::from(aa) + 1), xx, yy, zn),
        grad8(perm(u16::from(ba) + 1), xn, yy, zn),
        u,
    );
    let x4 = lerp7by8(
        grad8(perm(u16::from(ab) + 1), xx, yn, zn),
        grad8(perm(u16::from(bb) + 1), xn, yn, zn),
        u,
    );

    let y1 = lerp7by8(x1, x2, v);
    let y2 = lerp7by8(x3, x4, v);

    lerp7by8(y1, y2, w)
}

/// 3D noise, 0-255 centered on 128
#[allow(clippy::cast_sign_loss)]
pub fn inoise8(x: u16, y: u16, z: u16) -> u8 {
    let n = (inoise8_raw(x, y, z) as u8).wrapping_add(64);
    qadd8(n, n)
}
