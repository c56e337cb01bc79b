//! Black and white reduction of a luma plane.
//!
//! Both functions return one sample per pixel: 1 for white, 0 for black.

/// Floyd-Steinberg error diffusion to two levels.
///
/// Works in integers: errors are accumulated in sixteenths and carried
/// through a single row-sized buffer, with the 7/16 right, 3/16 below-left,
/// 5/16 below and 1/16 below-right weights. A level strictly above 128 is
/// white. The error buffer is not reset between rows.
pub fn dither_floyd_steinberg(luma: &[u8], width: usize) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }

    let mut bits = Vec::with_capacity(luma.len());
    // errors[x + 1] holds the error diffused into column x of the next row
    let mut errors = vec![0i32; width + 1];

    for row in luma.chunks_exact(width) {
        let mut right = 0i32;
        let mut below = 0i32;
        let mut below_prev = 0i32;

        for (x, &value) in row.iter().enumerate() {
            let level = (value as i32 + (right + errors[x + 1]) / 16).clamp(0, 255);
            let out = if level > 128 { 255 } else { 0 };
            bits.push(u8::from(out == 255));

            let err = level - out;
            errors[x] = 3 * err + below;
            below = 5 * err + below_prev;
            below_prev = err;
            right = 7 * err;
        }
        errors[width] = below;
    }

    bits
}

/// Plain threshold at 128.
pub fn threshold(luma: &[u8]) -> Vec<u8> {
    luma.iter().map(|&v| u8::from(v >= 128)).collect()
}
