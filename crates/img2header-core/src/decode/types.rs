//! Core types for image decoding.

use thiserror::Error;

use crate::encode::EncodeError;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The decoded pixels could not be turned into a pixel buffer.
    #[error("Unusable pixel data: {0}")]
    Buffer(#[from] EncodeError),
}

/// How color pixels are reduced to black and white for 1bpp output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonoConversion {
    /// Floyd-Steinberg error diffusion on the luma plane.
    #[default]
    Dither,
    /// Luma of 128 or above is white, everything else black.
    Threshold,
}

/// Options for turning image bytes into a pixel buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Black/white reduction used for monochrome output.
    pub mono: MonoConversion,
}
