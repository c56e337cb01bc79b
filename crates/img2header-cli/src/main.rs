//! img2header - convert an image into a C/C++ header with its pixel data.
//!
//! ```text
//! img2header <input_image> <output_header> <header_name> [--mono | --rgb565 | --rgb565swapped]
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `info`).

mod args;

use std::process::ExitCode;

use args::Args;
use img2header_core::{convert, ConvertError};
use log::error;

/// Run one conversion. The core logs the result, so nothing is reported here.
fn run(args: &Args) -> Result<(), ConvertError> {
    let request = args.to_request()?;
    convert(&request)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
