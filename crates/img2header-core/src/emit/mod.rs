//! C header emission for img2header.
//!
//! Serializes encoded pixel data into a header that any C or C++ translation
//! unit can `#include`:
//!
//! ```text
//! #ifndef IMAGE_DATA_<name>_H
//! #define IMAGE_DATA_<name>_H
//!
//! const int image_width_<name> = <width>;
//! const int image_height_<name> = <height>;
//!
//! const uint16_t image_data_<name>[] = {
//!     0xf800,    0xf800,
//!     0xf800,    0xf800
//! };
//!
//! #endif // IMAGE_DATA_<name>_H
//! ```
//!
//! RGB888 output additionally declares `struct RGB { r, g, b }` and uses it
//! as the element type; monochrome output uses `unsigned char` and reports
//! the width in bytes. The layout is kept byte-for-byte stable so downstream
//! builds can diff regenerated headers.

mod header;
mod types;

pub use header::{render_header, write_header, write_header_file};
pub use types::{EmitError, HeaderName};
