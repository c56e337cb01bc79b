//! Image decoding adapter for img2header.
//!
//! This module turns encoded image files into the [`PixelBuffer`] consumed
//! by the pixel encoder:
//! - Decoding JPEG, PNG, BMP and GIF through the `image` crate
//! - Reduction to 1-bit black and white for monochrome output
//!
//! # Architecture
//!
//! Container parsing is entirely delegated to the `image` crate. This module
//! only selects the target [`PixelFormat`] and validates the resulting
//! buffer once, so the encoder never has to trust an untyped shape.
//!
//! # Examples
//!
//! ```ignore
//! use img2header_core::decode::{decode_image, DecodeOptions};
//! use img2header_core::encode::PixelFormat;
//!
//! let bytes = std::fs::read("logo.png").unwrap();
//! let pixels = decode_image(&bytes, PixelFormat::Rgb8, &DecodeOptions::default()).unwrap();
//! println!("Decoded {}x{} image", pixels.width(), pixels.height());
//! ```
//!
//! [`PixelBuffer`]: crate::encode::PixelBuffer
//! [`PixelFormat`]: crate::encode::PixelFormat

mod mono;
mod reader;
mod types;

pub use mono::{dither_floyd_steinberg, threshold};
pub use reader::decode_image;
pub use types::{DecodeError, DecodeOptions, MonoConversion};
