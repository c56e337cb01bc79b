//! Luma calculation using ITU-R BT.601 integer weights.
//!
//! Monochrome output is derived from this luma plane. The weights are the
//! per-mille BT.601 coefficients and the division truncates, matching the
//! common integer RGB to L conversion used by image tools.

/// BT.601 weight for the red channel, in thousandths.
pub const LUMA_R: u32 = 299;

/// BT.601 weight for the green channel, in thousandths.
pub const LUMA_G: u32 = 587;

/// BT.601 weight for the blue channel, in thousandths.
pub const LUMA_B: u32 = 114;

/// Calculate luma from u8 RGB values (0 to 255).
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    ((LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32) / 1000) as u8
}

/// Convert interleaved RGB samples to one luma sample per pixel.
pub fn luma_plane(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .map(|px| luma_u8(px[0], px[1], px[2]))
        .collect()
}
