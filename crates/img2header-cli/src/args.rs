//! Command-line argument definitions and conversion into a request.

use std::path::PathBuf;

use argh::FromArgs;
use img2header_core::{ConvertError, ConvertRequest, DecodeOptions, EncodingMode, HeaderName};

#[derive(FromArgs, Debug, PartialEq)]
/// Convert an image to a C++ header file with RGB pixel data.
pub struct Args {
    /// input image file path.
    #[argh(positional)]
    pub input_image: PathBuf,

    /// output C++ header file path.
    #[argh(positional)]
    pub output_header: PathBuf,

    /// identifier for header name.
    #[argh(positional)]
    pub header_name: String,

    /// output the pixel data as 1 bit monochrome.
    #[argh(switch)]
    pub mono: bool,

    /// output the pixel data in RGB565 format instead of RGB888.
    #[argh(switch)]
    pub rgb565: bool,

    /// output the pixel data in RGB565 with swapped bytes instead of RGB888.
    #[argh(switch, long = "rgb565swapped")]
    pub rgb565_swapped: bool,
}

impl Args {
    /// Validate the arguments and build the conversion request.
    pub fn to_request(&self) -> Result<ConvertRequest, ConvertError> {
        let mode = EncodingMode::from_flags(self.mono, self.rgb565, self.rgb565_swapped)?;
        let name = HeaderName::new(self.header_name.as_str())?;

        Ok(ConvertRequest {
            input: self.input_image.clone(),
            output: self.output_header.clone(),
            name,
            mode,
            decode: DecodeOptions::default(),
        })
    }
}
