use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

use crate::{
    error::{Error, check_status},
    native,
};

/// Result codes reported by the native graphics library.
///
/// Discriminants match the native enumeration exactly, so a raw code can be
/// round-tripped through [`Status::from_raw`] and [`Status::code`].
/// `Display` and `Into<&'static str>` yield the host-visible member name
/// (e.g. `NoMemory` -> "NO_MEMORY").
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    IntoStaticStr,
    EnumIter,
    EnumCount,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum Status {
    /// The only non-error code.
    Success = 0,
    NoMemory = 1,
    InvalidRestore = 2,
    InvalidPopGroup = 3,
    NoCurrentPoint = 4,
    InvalidMatrix = 5,
    InvalidStatus = 6,
    NullPointer = 7,
    InvalidString = 8,
    InvalidPathData = 9,
    /// Reported to the host as a plain I/O error.
    ReadError = 10,
    /// Reported to the host as a plain I/O error.
    WriteError = 11,
    SurfaceFinished = 12,
    SurfaceTypeMismatch = 13,
    PatternTypeMismatch = 14,
    InvalidContent = 15,
    InvalidFormat = 16,
    InvalidVisual = 17,
    FileNotFound = 18,
    InvalidDash = 19,
    InvalidDscComment = 20,
    InvalidIndex = 21,
    ClipNotRepresentable = 22,
    TempFileError = 23,
    InvalidStride = 24,
    FontTypeMismatch = 25,
    UserFontImmutable = 26,
    UserFontError = 27,
    NegativeCount = 28,
    InvalidClusters = 29,
    InvalidSlant = 30,
    InvalidWeight = 31,
    InvalidSize = 32,
    UserFontNotImplemented = 33,
    DeviceTypeMismatch = 34,
    DeviceError = 35,
    InvalidMeshConstruction = 36,
    DeviceFinished = 37,
    #[strum(serialize = "JBIG2_GLOBAL_MISSING")]
    #[serde(rename = "JBIG2_GLOBAL_MISSING")]
    Jbig2GlobalMissing = 38,
    PngError = 39,
    FreetypeError = 40,
    #[strum(serialize = "WIN32_GDI_ERROR")]
    #[serde(rename = "WIN32_GDI_ERROR")]
    Win32GdiError = 41,
    TagError = 42,
    DwriteError = 43,
    SvgFontError = 44,
}

impl Status {
    /// Looks up the member for a raw native code.
    ///
    /// Returns `None` for codes the enumeration does not know about, which
    /// newer native library versions may still report.
    #[must_use]
    pub fn from_raw(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }

    /// The raw native code.
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Host-visible member name, e.g. `"INVALID_RESTORE"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// The description shown to host users, see [`describe`].
    #[must_use]
    pub fn describe(self) -> &'static str {
        describe(self.code())
    }

    /// Translates this status into `Ok(())` or the matching [`Error`].
    pub fn check(self) -> Result<(), Error> {
        check_status(self.code())
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

/// Human-readable description of a raw status code.
///
/// Defers to the native library's own table except for the two codes whose
/// native text names native functions; those are rewritten to the host-level
/// `Context` methods users actually call.
#[must_use]
pub fn describe(code: i32) -> &'static str {
    match Status::from_raw(code) {
        Some(Status::InvalidRestore) => "Context.restore() without matching Context.save()",
        Some(Status::InvalidPopGroup) => "Context.pop_group() without matching Context.push_group()",
        _ => native::status_to_string(code),
    }
}
