//! C header serialization.
//!
//! The document is streamed to the sink: preamble first, then each row as
//! the [`RowSource`] produces it, then the closing brace and include guard.
//! Separators are written *before* each element, so no trailing comma ever
//! reaches the output and nothing has to be stripped afterwards.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use super::{EmitError, HeaderName};
use crate::encode::{Element, EncodingMode, RowSource};

/// Indentation written before every element.
const ELEMENT_INDENT: &str = "    ";

const RGB_STRUCT: &str = "struct RGB {\n    unsigned char r;\n    unsigned char g;\n    unsigned char b;\n};\n\n";

/// C element type of the generated array.
fn element_type(mode: EncodingMode) -> &'static str {
    match mode {
        EncodingMode::Rgb888 => "RGB",
        EncodingMode::Rgb565 | EncodingMode::Rgb565Swapped => "uint16_t",
        EncodingMode::Mono1bpp => "unsigned char",
    }
}

/// Incremental writer for one header document.
struct HeaderWriter<'n, W: Write> {
    sink: W,
    name: &'n HeaderName,
    written: usize,
}

impl<'n, W: Write> HeaderWriter<'n, W> {
    /// Write everything up to and including the opening brace of the array.
    fn begin(
        mut sink: W,
        name: &'n HeaderName,
        mode: EncodingMode,
        width: usize,
        height: usize,
    ) -> Result<Self, EmitError> {
        let guard = name.include_guard();
        writeln!(sink, "#ifndef {guard}\n#define {guard}\n")?;
        writeln!(
            sink,
            "const int image_width_{name} = {width};\nconst int image_height_{name} = {height};\n"
        )?;
        if mode == EncodingMode::Rgb888 {
            sink.write_all(RGB_STRUCT.as_bytes())?;
        }
        writeln!(sink, "const {} image_data_{name}[] = {{", element_type(mode))?;

        Ok(Self {
            sink,
            name,
            written: 0,
        })
    }

    /// Append one row of elements.
    fn push_row(&mut self, row: &[Element]) -> Result<(), EmitError> {
        for (i, element) in row.iter().enumerate() {
            if self.written > 0 {
                let separator: &[u8] = if i == 0 { b",\n" } else { b"," };
                self.sink.write_all(separator)?;
            }
            write!(self.sink, "{}{}", ELEMENT_INDENT, element)?;
            self.written += 1;
        }
        Ok(())
    }

    /// Close the array and the include guard. Returns the element count.
    fn finish(mut self) -> Result<usize, EmitError> {
        writeln!(self.sink, "\n}};\n\n#endif // {}", self.name.include_guard())?;
        self.sink.flush()?;
        Ok(self.written)
    }
}

/// Stream a complete header document for `source` into `sink`.
///
/// Returns the number of array elements written.
///
/// # Errors
///
/// Returns `EmitError::Io` if the sink fails.
pub fn write_header<W: Write, S: RowSource + ?Sized>(
    sink: W,
    name: &HeaderName,
    source: &S,
) -> Result<usize, EmitError> {
    let mut writer = HeaderWriter::begin(
        sink,
        name,
        source.mode(),
        source.row_len(),
        source.row_count(),
    )?;
    for y in 0..source.row_count() {
        writer.push_row(&source.row(y))?;
    }
    writer.finish()
}

/// Render the header document into a string.
///
/// # Errors
///
/// Returns `EmitError::Io` if the rendered document is not valid UTF-8.
pub fn render_header<S: RowSource + ?Sized>(
    name: &HeaderName,
    source: &S,
) -> Result<String, EmitError> {
    let mut buffer = Vec::new();
    write_header(&mut buffer, name, source)?;
    String::from_utf8(buffer)
        .map_err(|e| EmitError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write the header document to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `EmitError::WriteFile` if the file cannot be created or written.
/// A write failure part way through may leave a truncated file behind.
pub fn write_header_file<S: RowSource + ?Sized>(
    path: &Path,
    name: &HeaderName,
    source: &S,
) -> Result<usize, EmitError> {
    let wrap = |source| EmitError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let written = write_header(BufWriter::new(file), name, source).map_err(|e| match e {
        EmitError::Io(io) => wrap(io),
        other => other,
    })?;

    debug!("Wrote {} elements to {}", written, path.display());
    Ok(written)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
