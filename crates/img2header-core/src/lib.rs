//! img2header Core - Image to C header conversion
//!
//! This crate turns raster images into constant arrays embedded in a C/C++
//! header, for firmware that cannot load image files at runtime.
//!
//! The pipeline has three stages:
//! 1. [`decode`] - image bytes to a validated [`PixelBuffer`]
//! 2. [`encode`] - pixels to RGB888, RGB565, swapped RGB565 or 1bpp elements
//! 3. [`emit`] - elements to the header text, streamed to a file
//!
//! [`convert()`] runs all three for one input/output pair.

pub mod convert;
pub mod decode;
pub mod emit;
pub mod encode;
pub mod luminance;

pub use convert::{convert, ConversionSummary, ConvertError, ConvertRequest};
pub use decode::{decode_image, DecodeOptions, MonoConversion};
pub use emit::{render_header, write_header, write_header_file, HeaderName};
pub use encode::{encode, EncodedArray, Encoder, EncodingMode, PixelBuffer, PixelFormat};
