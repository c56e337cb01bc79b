//! Core types for pixel encoding.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

/// Error types for pixel encoding operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// More than one output format was requested at once.
    #[error("Conflicting encoding modes requested: {}", .flags.join(", "))]
    InvalidMode { flags: Vec<&'static str> },

    /// The pixel buffer layout does not match what the encoding mode consumes.
    #[error("Encoding mode {mode} requires {expected} pixels, got {actual}")]
    PixelFormatMismatch {
        mode: EncodingMode,
        expected: PixelFormat,
        actual: PixelFormat,
    },

    /// Monochrome rows must split into whole 8-pixel groups.
    #[error("Monochrome width must be a positive multiple of 8, got {width}")]
    UnalignedMonoWidth { width: u32 },

    /// A sample lies outside the range its pixel format allows.
    #[error("Unsupported channel depth: sample value {value} at index {index} exceeds {max}")]
    UnsupportedChannelDepth { index: usize, value: u8, max: u8 },

    /// Width or height is zero, or the buffer size overflows.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Sample count doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} samples, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Layout of the samples in a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Three 8-bit channels per pixel, R then G then B.
    Rgb8,
    /// One sample per pixel, 0 (black) or 1 (white).
    Mono1,
}

impl PixelFormat {
    /// Number of samples stored per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Mono1 => 1,
        }
    }

    /// Largest value a single sample may hold.
    #[inline]
    pub fn max_sample(self) -> u8 {
        match self {
            PixelFormat::Rgb8 => u8::MAX,
            PixelFormat::Mono1 => 1,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Rgb8 => f.write_str("RGB8"),
            PixelFormat::Mono1 => f.write_str("1-bit mono"),
        }
    }
}

/// Output representation of the encoded array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingMode {
    /// Struct of three bytes per pixel.
    #[default]
    Rgb888,
    /// Packed 16-bit 5/6/5 word per pixel.
    Rgb565,
    /// RGB565 with the two bytes of each word swapped.
    Rgb565Swapped,
    /// One bit per pixel, 8 pixels per byte, MSB first.
    Mono1bpp,
}

impl EncodingMode {
    /// Build the mode from the three independent command line switches.
    ///
    /// No switch selects [`EncodingMode::Rgb888`]. Any combination of two or
    /// more switches is rejected with [`EncodeError::InvalidMode`].
    pub fn from_flags(mono: bool, rgb565: bool, rgb565_swapped: bool) -> Result<Self, EncodeError> {
        let requested: Vec<(&'static str, EncodingMode)> = [
            (mono, "--mono", EncodingMode::Mono1bpp),
            (rgb565, "--rgb565", EncodingMode::Rgb565),
            (rgb565_swapped, "--rgb565swapped", EncodingMode::Rgb565Swapped),
        ]
        .into_iter()
        .filter(|(set, _, _)| *set)
        .map(|(_, flag, mode)| (flag, mode))
        .collect();

        match requested.as_slice() {
            [] => Ok(EncodingMode::Rgb888),
            [(_, mode)] => Ok(*mode),
            _ => Err(EncodeError::InvalidMode {
                flags: requested.iter().map(|(flag, _)| *flag).collect(),
            }),
        }
    }

    /// Pixel format the decoder must deliver for this mode.
    #[inline]
    pub fn pixel_format(self) -> PixelFormat {
        match self {
            EncodingMode::Mono1bpp => PixelFormat::Mono1,
            _ => PixelFormat::Rgb8,
        }
    }

    /// Number of source pixels covered by one output element.
    #[inline]
    pub fn pixels_per_element(self) -> u32 {
        match self {
            EncodingMode::Mono1bpp => 8,
            _ => 1,
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingMode::Rgb888 => f.write_str("RGB888"),
            EncodingMode::Rgb565 => f.write_str("RGB565"),
            EncodingMode::Rgb565Swapped => f.write_str("RGB565 (swapped)"),
            EncodingMode::Mono1bpp => f.write_str("1bpp mono"),
        }
    }
}

/// A decoded image with validated dimensions.
///
/// Samples are stored row-major from the top-left corner, `format.channels()`
/// samples per pixel. The buffer is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    format: PixelFormat,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer, checking dimensions, sample count and sample range.
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        samples: Vec<u8>,
    ) -> Result<Self, EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidDimensions { width, height });
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(format.channels()))
            .ok_or(EncodeError::InvalidDimensions { width, height })?;
        if samples.len() != expected {
            return Err(EncodeError::InvalidPixelData {
                expected,
                actual: samples.len(),
            });
        }

        let max = format.max_sample();
        if let Some((index, &value)) = samples.iter().enumerate().find(|(_, &v)| v > max) {
            return Err(EncodeError::UnsupportedChannelDepth { index, value, max });
        }

        Ok(Self {
            width,
            height,
            format,
            samples,
        })
    }

    /// Create an RGB buffer (3 bytes per pixel).
    pub fn rgb(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, EncodeError> {
        Self::new(width, height, PixelFormat::Rgb8, samples)
    }

    /// Create a monochrome buffer (one 0/1 sample per pixel).
    pub fn mono(width: u32, height: u32, bits: Vec<u8>) -> Result<Self, EncodeError> {
        Self::new(width, height, PixelFormat::Mono1, bits)
    }

    /// Create an RGB buffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, EncodeError> {
        let (width, height) = img.dimensions();
        Self::rgb(width, height, img.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Samples of one row, `width * channels` long.
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * self.format.channels();
        let start = y as usize * stride;
        &self.samples[start..start + stride]
    }

    /// Raw sample storage.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

/// One literal of the generated array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Packed monochrome byte.
    Byte(u8),
    /// RGB565 word (possibly byte swapped).
    Word(u16),
    /// RGB888 struct value.
    Rgb([u8; 3]),
}

impl fmt::Display for Element {
    /// Formats the element as a C initializer literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Element::Byte(b) => write!(f, "0x{b:02x}"),
            Element::Word(w) => write!(f, "0x{w:04x}"),
            Element::Rgb([r, g, b]) => write!(f, "{{0x{r:02x}, 0x{g:02x}, 0x{b:02x}}}"),
        }
    }
}

/// Anything that can hand the emitter its rows of encoded elements.
///
/// Implemented by the fully materialized [`EncodedArray`] and by the lazy
/// [`Encoder`](super::Encoder), which encodes each row on request.
pub trait RowSource {
    /// Encoding the rows were produced with.
    fn mode(&self) -> EncodingMode;

    /// Elements per row; this is the emitted width constant.
    fn row_len(&self) -> usize;

    /// Number of rows; this is the emitted height constant.
    fn row_count(&self) -> usize;

    /// Elements of row `index`.
    fn row(&self, index: usize) -> Cow<'_, [Element]>;
}

/// The encoded pixel data of a whole image, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedArray {
    pub(crate) mode: EncodingMode,
    pub(crate) row_len: usize,
    pub(crate) elements: Vec<Element>,
}

impl EncodedArray {
    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// All elements as one flat sequence.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the rows of the array.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Element> {
        self.elements.chunks_exact(self.row_len.max(1))
    }
}

impl RowSource for EncodedArray {
    fn mode(&self) -> EncodingMode {
        self.mode
    }

    fn row_len(&self) -> usize {
        self.row_len
    }

    fn row_count(&self) -> usize {
        if self.row_len == 0 {
            0
        } else {
            self.elements.len() / self.row_len
        }
    }

    fn row(&self, index: usize) -> Cow<'_, [Element]> {
        let start = index * self.row_len;
        Cow::Borrowed(&self.elements[start..start + self.row_len])
    }
}
