//! One-shot conversion: image file in, header file out.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, info};
use thiserror::Error;

use crate::decode::{decode_image, DecodeError, DecodeOptions};
use crate::emit::{write_header_file, EmitError, HeaderName};
use crate::encode::{EncodeError, Encoder, EncodingMode};

/// Errors that can occur while converting an image to a header.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input image could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Everything needed for one conversion.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub name: HeaderName,
    pub mode: EncodingMode,
    pub decode: DecodeOptions,
}

/// What was written by a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub mode: EncodingMode,
    /// Emitted width constant (bytes per row for mono).
    pub width: u32,
    pub height: u32,
    pub elements: usize,
}

/// Decode `request.input`, encode it and write the header to `request.output`.
///
/// The mode and pixel buffer are validated before the output file is
/// created, so a rejected conversion leaves no file behind.
pub fn convert(request: &ConvertRequest) -> Result<ConversionSummary, ConvertError> {
    let bytes = fs::read(&request.input).map_err(|source| ConvertError::ReadInput {
        path: request.input.clone(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), request.input.display());

    let pixels = decode_image(&bytes, request.mode.pixel_format(), &request.decode)?;
    let encoder = Encoder::new(&pixels, request.mode)?;
    let elements = write_header_file(&request.output, &request.name, &encoder)?;

    let summary = ConversionSummary {
        mode: request.mode,
        width: encoder.row_len() as u32,
        height: pixels.height(),
        elements,
    };
    info!(
        "Wrote {}x{} {} image '{}' to {}",
        pixels.width(),
        pixels.height(),
        summary.mode,
        request.name,
        request.output.display()
    );
    Ok(summary)
}
