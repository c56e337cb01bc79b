//! Image decoding through the `image` crate.

use std::io::Cursor;

use image::{DynamicImage, ImageError, ImageReader};
use log::{debug, warn};

use super::mono::{dither_floyd_steinberg, threshold};
use super::{DecodeError, DecodeOptions, MonoConversion};
use crate::encode::{PixelBuffer, PixelFormat};
use crate::luminance::luma_plane;

/// Decode image bytes into a pixel buffer of the requested format.
///
/// The container format is guessed from the content (JPEG, PNG, BMP, GIF).
/// Pixels are taken in stored order; EXIF orientation tags are ignored.
/// Alpha is discarded and samples wider than 8 bits are narrowed.
/// For [`PixelFormat::Mono1`] the image is reduced to black and white as
/// configured by `options.mono`.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is not recognized.
/// Returns `DecodeError::CorruptedFile` if the image data is corrupted.
pub fn decode_image(
    bytes: &[u8],
    format: PixelFormat,
    options: &DecodeOptions,
) -> Result<PixelBuffer, DecodeError> {
    let img = decode_dynamic(bytes)?;

    let color = img.color();
    debug!("Decoded {}x{} image ({:?})", img.width(), img.height(), color);
    if color.has_alpha() {
        warn!("Discarding alpha channel");
    }
    if color.bytes_per_pixel() / color.channel_count() > 1 {
        warn!("Narrowing {:?} samples to 8 bits per channel", color);
    }

    let rgb = img.into_rgb8();
    match format {
        PixelFormat::Rgb8 => Ok(PixelBuffer::from_rgb_image(rgb)?),
        PixelFormat::Mono1 => {
            let (width, height) = rgb.dimensions();
            let luma = luma_plane(rgb.as_raw());
            let bits = match options.mono {
                MonoConversion::Dither => dither_floyd_steinberg(&luma, width as usize),
                MonoConversion::Threshold => threshold(&luma),
            };
            Ok(PixelBuffer::mono(width, height, bits)?)
        }
    }
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    fn encoded_bytes(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        encoded_bytes(img, ImageFormat::Png)
    }

    #[test]
    fn test_decode_png_rgb() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 10, y as u8 * 20, 7]));
        let bytes = png_bytes(DynamicImage::ImageRgb8(img));

        let buf = decode_image(&bytes, PixelFormat::Rgb8, &DecodeOptions::default()).unwrap();
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.row(1), &[0, 20, 7, 10, 20, 7, 20, 20, 7]);
    }

    #[test]
    fn test_decode_drops_alpha() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 0]));
        let bytes = png_bytes(DynamicImage::ImageRgba8(img));

        let buf = decode_image(&bytes, PixelFormat::Rgb8, &DecodeOptions::default()).unwrap();
        assert_eq!(buf.samples(), &[10, 20, 30]);
    }

    #[test]
    fn test_decode_mono_dither_black_white() {
        let img = RgbImage::from_fn(8, 2, |x, _| if x % 2 == 0 { Rgb([255; 3]) } else { Rgb([0; 3]) });
        let bytes = png_bytes(DynamicImage::ImageRgb8(img));

        let buf = decode_image(&bytes, PixelFormat::Mono1, &DecodeOptions::default()).unwrap();
        assert_eq!(buf.format(), PixelFormat::Mono1);
        assert_eq!(buf.row(0), &[1, 0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(buf.row(1), &[1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_decode_mono_threshold() {
        let img = RgbImage::from_fn(4, 1, |x, _| Rgb([[0, 127, 128, 255][x as usize]; 3]));
        let bytes = png_bytes(DynamicImage::ImageRgb8(img));
        let options = DecodeOptions {
            mono: MonoConversion::Threshold,
            ..Default::default()
        };

        let buf = decode_image(&bytes, PixelFormat::Mono1, &options).unwrap();
        assert_eq!(buf.samples(), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03], PixelFormat::Rgb8, &DecodeOptions::default());
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        let result = decode_image(&[], PixelFormat::Rgb8, &DecodeOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let img = RgbImage::from_pixel(16, 16, Rgb([1, 2, 3]));
        let bytes = png_bytes(DynamicImage::ImageRgb8(img));
        let truncated = &bytes[..bytes.len() / 2];

        let result = decode_image(truncated, PixelFormat::Rgb8, &DecodeOptions::default());
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_keeps_stored_pixel_order() {
        let img = RgbImage::from_fn(3, 1, |x, _| Rgb([[255, 0, 0], [0, 255, 0], [0, 0, 255]][x as usize]));
        let bytes = png_bytes(DynamicImage::ImageRgb8(img));

        let buf = decode_image(&bytes, PixelFormat::Rgb8, &DecodeOptions::default()).unwrap();
        assert_eq!((buf.width(), buf.height()), (3, 1));
        assert_eq!(buf.samples(), &[255, 0, 0, 0, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn test_decode_bmp() {
        let img = RgbImage::from_fn(2, 2, |x, y| Rgb([x as u8 * 100, y as u8 * 50, 9]));
        let bytes = encoded_bytes(DynamicImage::ImageRgb8(img), ImageFormat::Bmp);
        assert_eq!(&bytes[..2], b"BM");

        let buf = decode_image(&bytes, PixelFormat::Rgb8, &DecodeOptions::default()).unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 2));
        assert_eq!(buf.row(0), &[0, 0, 9, 100, 0, 9]);
        assert_eq!(buf.row(1), &[0, 50, 9, 100, 50, 9]);
    }

    #[test]
    fn test_decode_gif() {
        let img = RgbaImage::from_fn(8, 2, |x, _| {
            if x < 4 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let bytes = encoded_bytes(DynamicImage::ImageRgba8(img), ImageFormat::Gif);
        assert_eq!(&bytes[..3], b"GIF");

        let buf = decode_image(&bytes, PixelFormat::Mono1, &DecodeOptions::default()).unwrap();
        assert_eq!((buf.width(), buf.height()), (8, 2));
        assert_eq!(buf.row(0), &[1, 1, 1, 1, 0, 0, 0, 0]);
        assert_eq!(buf.row(1), &[1, 1, 1, 1, 0, 0, 0, 0]);
    }
}
