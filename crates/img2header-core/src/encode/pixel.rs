//! Per-pixel packing into the supported output representations.

use std::borrow::Cow;

use super::types::{EncodeError, EncodedArray, Element, EncodingMode, PixelBuffer, RowSource};

/// Pack 8-bit R, G, B into a 5/6/5 word.
///
/// Low-order bits are truncated, never rounded.
#[inline]
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3)
}

/// Swap the two bytes of a 16-bit word.
#[inline]
pub fn swap_bytes(word: u16) -> u16 {
    ((word & 0xff) << 8) | (word >> 8)
}

/// Pack up to 8 binary pixels into one byte, leftmost pixel in the MSB.
#[inline]
pub fn pack_mono_group(bits: &[u8]) -> u8 {
    bits.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1))
}

/// Encodes a [`PixelBuffer`] row by row.
///
/// Construction validates the buffer against the mode once, so rows can be
/// produced lazily while the header is being written.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    pixels: &'a PixelBuffer,
    mode: EncodingMode,
}

impl<'a> Encoder<'a> {
    /// Check that `pixels` can be encoded with `mode`.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::PixelFormatMismatch` if the buffer layout does not
    /// match the mode, and `EncodeError::UnalignedMonoWidth` if a monochrome
    /// width is not a multiple of 8.
    pub fn new(pixels: &'a PixelBuffer, mode: EncodingMode) -> Result<Self, EncodeError> {
        let expected = mode.pixel_format();
        if pixels.format() != expected {
            return Err(EncodeError::PixelFormatMismatch {
                mode,
                expected,
                actual: pixels.format(),
            });
        }

        if mode == EncodingMode::Mono1bpp && pixels.width() % 8 != 0 {
            return Err(EncodeError::UnalignedMonoWidth {
                width: pixels.width(),
            });
        }

        Ok(Self { pixels, mode })
    }

    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// Elements per row: the pixel width, or the byte width in mono mode.
    pub fn row_len(&self) -> usize {
        (self.pixels.width() / self.mode.pixels_per_element()) as usize
    }

    /// Encode a single row.
    pub fn encode_row(&self, y: u32) -> Vec<Element> {
        let samples = self.pixels.row(y);
        match self.mode {
            EncodingMode::Rgb888 => samples
                .chunks_exact(3)
                .map(|px| Element::Rgb([px[0], px[1], px[2]]))
                .collect(),
            EncodingMode::Rgb565 => samples
                .chunks_exact(3)
                .map(|px| Element::Word(rgb888_to_rgb565(px[0], px[1], px[2])))
                .collect(),
            EncodingMode::Rgb565Swapped => samples
                .chunks_exact(3)
                .map(|px| Element::Word(swap_bytes(rgb888_to_rgb565(px[0], px[1], px[2]))))
                .collect(),
            EncodingMode::Mono1bpp => samples
                .chunks_exact(8)
                .map(|group| Element::Byte(pack_mono_group(group)))
                .collect(),
        }
    }

    /// Encode the whole buffer into a flat array.
    pub fn encode_all(&self) -> EncodedArray {
        let mut elements = Vec::with_capacity(self.row_len() * self.pixels.height() as usize);
        for y in 0..self.pixels.height() {
            elements.extend(self.encode_row(y));
        }
        EncodedArray {
            mode: self.mode,
            row_len: self.row_len(),
            elements,
        }
    }
}

impl RowSource for Encoder<'_> {
    fn mode(&self) -> EncodingMode {
        self.mode
    }

    fn row_len(&self) -> usize {
        Encoder::row_len(self)
    }

    fn row_count(&self) -> usize {
        self.pixels.height() as usize
    }

    fn row(&self, index: usize) -> Cow<'_, [Element]> {
        Cow::Owned(self.encode_row(index as u32))
    }
}

/// Encode a pixel buffer with the given mode.
///
/// # Errors
///
/// See [`Encoder::new`].
pub fn encode(pixels: &PixelBuffer, mode: EncodingMode) -> Result<EncodedArray, EncodeError> {
    Ok(Encoder::new(pixels, mode)?.encode_all())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=24, 1u32..=24)
    }

    proptest! {
        /// Property: 565 packing follows the shift formula exactly.
        #[test]
        fn prop_rgb565_formula(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let word = rgb888_to_rgb565(r, g, b);
            let expected = ((r as u32 >> 3) << 11) | ((g as u32 >> 2) << 5) | (b as u32 >> 3);
            prop_assert_eq!(word as u32, expected);
            prop_assert!(expected <= 0xffff);
        }

        /// Property: swapped mode is the byte swap of plain 565.
        #[test]
        fn prop_swapped_is_byteswap(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let word = rgb888_to_rgb565(r, g, b);
            prop_assert_eq!(swap_bytes(word), word.swap_bytes());
        }

        /// Property: swapping twice restores the word.
        #[test]
        fn prop_swap_is_involution(word in any::<u16>()) {
            prop_assert_eq!(swap_bytes(swap_bytes(word)), word);
        }

        /// Property: packed bit i (from the MSB) is pixel i of the group.
        #[test]
        fn prop_mono_packing_msb_first(bits in prop::collection::vec(0u8..=1, 8)) {
            let byte = pack_mono_group(&bits);
            for (i, &bit) in bits.iter().enumerate() {
                prop_assert_eq!((byte >> (7 - i)) & 1, bit);
            }
        }

        /// Property: color modes emit one element per pixel.
        #[test]
        fn prop_color_element_count((width, height) in dimensions_strategy(), mode_idx in 0usize..3) {
            let mode = [EncodingMode::Rgb888, EncodingMode::Rgb565, EncodingMode::Rgb565Swapped][mode_idx];
            let pixels = PixelBuffer::rgb(width, height, vec![200u8; (width * height * 3) as usize]).unwrap();
            let array = encode(&pixels, mode).unwrap();

            prop_assert_eq!(array.len(), (width * height) as usize);
            prop_assert_eq!(array.row_count(), height as usize);
        }

        /// Property: mono emits width / 8 bytes per row.
        #[test]
        fn prop_mono_element_count(groups in 1u32..=8, height in 1u32..=16) {
            let width = groups * 8;
            let pixels = PixelBuffer::mono(width, height, vec![1u8; (width * height) as usize]).unwrap();
            let array = encode(&pixels, EncodingMode::Mono1bpp).unwrap();

            prop_assert_eq!(array.row_len(), (width / 8) as usize);
            prop_assert_eq!(array.len(), ((width / 8) * height) as usize);
            prop_assert!(array.elements().iter().all(|e| *e == Element::Byte(0xff)));
        }

        /// Property: widths that are not a multiple of 8 are rejected in mono mode.
        #[test]
        fn prop_mono_rejects_unaligned(width in 1u32..=64, height in 1u32..=4) {
            prop_assume!(width % 8 != 0);
            let pixels = PixelBuffer::mono(width, height, vec![0u8; (width * height) as usize]).unwrap();

            prop_assert_eq!(
                encode(&pixels, EncodingMode::Mono1bpp),
                Err(EncodeError::UnalignedMonoWidth { width })
            );
        }

        /// Property: same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in dimensions_strategy(),
            seed in any::<u8>(),
        ) {
            let samples: Vec<u8> = (0..width * height * 3)
                .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
                .collect();
            let pixels = PixelBuffer::rgb(width, height, samples).unwrap();

            let first = encode(&pixels, EncodingMode::Rgb565Swapped);
            let second = encode(&pixels, EncodingMode::Rgb565Swapped);
            prop_assert_eq!(first, second);
        }
    }
}
