//! Mirror of the native library's status description table.
//!
//! Strings are kept byte-for-byte identical to the native
//! `status_to_string` so host messages match what native tooling prints.

use crate::status::Status;

/// Text the native library returns for codes outside its enumeration.
pub const UNKNOWN_STATUS: &str = "<unknown error status>";

/// The native library's stock description of a raw status code.
#[must_use]
pub fn status_to_string(code: i32) -> &'static str {
    let Some(status) = Status::from_raw(code) else {
        return UNKNOWN_STATUS;
    };
    match status {
        Status::Success => "no error has occurred",
        Status::NoMemory => "out of memory",
        Status::InvalidRestore => "cairo_restore() without matching cairo_save()",
        Status::InvalidPopGroup => "no saved group to pop, i.e. cairo_pop_group() without matching cairo_push_group()",
        Status::NoCurrentPoint => "no current point",
        Status::InvalidMatrix => "invalid matrix (not invertible)",
        Status::InvalidStatus => "invalid value for an input cairo_status_t",
        Status::NullPointer => "NULL pointer",
        Status::InvalidString => "input string not valid UTF-8",
        Status::InvalidPathData => "input path data not valid",
        Status::ReadError => "error while reading from input stream",
        Status::WriteError => "error while writing to output stream",
        Status::SurfaceFinished => "the target surface has been finished",
        Status::SurfaceTypeMismatch => "the surface type is not appropriate for the operation",
        Status::PatternTypeMismatch => "the pattern type is not appropriate for the operation",
        Status::InvalidContent => "invalid value for an input cairo_content_t",
        Status::InvalidFormat => "invalid value for an input cairo_format_t",
        Status::InvalidVisual => "invalid value for an input Visual*",
        Status::FileNotFound => "file not found",
        Status::InvalidDash => "invalid value for a dash setting",
        Status::InvalidDscComment => "invalid value for a DSC comment",
        Status::InvalidIndex => "invalid index passed to getter",
        Status::ClipNotRepresentable => "clip region not representable in desired format",
        Status::TempFileError => "error creating or writing to a temporary file",
        Status::InvalidStride => "invalid value for stride",
        Status::FontTypeMismatch => "the font type is not appropriate for the operation",
        Status::UserFontImmutable => "the user-font is immutable",
        Status::UserFontError => "error occurred in a user-font callback function",
        Status::NegativeCount => "negative number used where it is not allowed",
        Status::InvalidClusters => "input clusters do not represent the accompanying text and glyph arrays",
        Status::InvalidSlant => "invalid value for an input cairo_font_slant_t",
        Status::InvalidWeight => "invalid value for an input cairo_font_weight_t",
        Status::InvalidSize => "invalid value (typically too big) for the size of the input (surface, pattern, etc.)",
        Status::UserFontNotImplemented => "user-font method not implemented",
        Status::DeviceTypeMismatch => "the device type is not appropriate for the operation",
        Status::DeviceError => "an operation to the device caused an unspecified error",
        Status::InvalidMeshConstruction => "invalid operation during mesh pattern construction",
        Status::DeviceFinished => "the target device has been finished",
        Status::Jbig2GlobalMissing => {
            "CAIRO_MIME_TYPE_JBIG2_GLOBAL_ID used but no CAIRO_MIME_TYPE_JBIG2_GLOBAL data provided"
        }
        Status::PngError => "error occurred in libpng while reading from or writing to a PNG file",
        Status::FreetypeError => "error occurred in libfreetype",
        Status::Win32GdiError => "error occurred in the Windows Graphics Device Interface",
        Status::TagError => "invalid tag name, attributes, or nesting",
        Status::DwriteError => "Window Direct Write error",
        Status::SvgFontError => "error occurred while rendering an OpenType-SVG font",
    }
}
