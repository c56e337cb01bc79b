//! Pixel encoding pipeline for img2header.
//!
//! This module converts a decoded [`PixelBuffer`] into the element sequence
//! of the generated C array:
//! - RGB888: one `{r, g, b}` struct per pixel
//! - RGB565: one 16-bit word per pixel, 5/6/5 bits, truncated
//! - RGB565 swapped: as RGB565 with the two bytes of each word exchanged
//! - 1bpp mono: one byte per 8 horizontal pixels, leftmost pixel in the MSB
//!
//! # Architecture
//!
//! Validation happens once in [`Encoder::new`]. After that rows can be
//! encoded lazily (the header emitter pulls them one at a time through
//! [`RowSource`]) or all at once into an [`EncodedArray`].
//!
//! # Examples
//!
//! ```ignore
//! use img2header_core::encode::{encode, EncodingMode, PixelBuffer};
//!
//! let pixels = PixelBuffer::rgb(1, 1, vec![255, 0, 0]).unwrap();
//! let array = encode(&pixels, EncodingMode::Rgb565).unwrap();
//! assert_eq!(array.elements()[0].to_string(), "0xf800");
//! ```

mod pixel;
mod types;

pub use pixel::{encode, pack_mono_group, rgb888_to_rgb565, swap_bytes, Encoder};
pub use types::{
    Element, EncodeError, EncodedArray, EncodingMode, PixelBuffer, PixelFormat, RowSource,
};
