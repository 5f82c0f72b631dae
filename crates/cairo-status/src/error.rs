//! Closed error model for failed native calls.
//!
//! A failed status code becomes exactly one [`Error`] variant:
//!
//! ```text
//! Error
//! ├── Library                  # the library's own structured error
//! ├── LibraryAndOutOfMemory    # library error that is also a memory error
//! └── Io                       # read/write failures from stream adapters
//! ```
//!
//! The dual-nature out-of-memory case is one concrete type, [`NoMemoryError`],
//! implementing both the [`LibraryError`] and [`OutOfMemory`] capabilities.

use std::{fmt, io};

use strum::{Display, IntoStaticStr};

use crate::{
    native,
    status::{Status, describe},
};

/// Capability shared by every error that is reported as the library's own
/// exception type.
pub trait LibraryError: std::error::Error {
    /// Raw native status code.
    fn code(&self) -> i32;

    /// Human-readable message, already passed through [`describe`].
    fn message(&self) -> &str;

    /// The rich status value, `None` if the code is not a known member.
    fn status(&self) -> Option<Status> {
        Status::from_raw(self.code())
    }
}

/// Capability marking memory exhaustion, matching the host's memory error.
pub trait OutOfMemory: std::error::Error {}

/// Which branch of the translator produced an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum ErrorKind {
    Library,
    LibraryAndOutOfMemory,
    Io,
}

/// The library's structured error: a message plus the originating status.
///
/// `Display` renders just the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    code: i32,
    message: &'static str,
}

impl StatusError {
    /// Creates an error for `code` using its [`describe`] text.
    #[must_use]
    pub fn new(code: i32) -> Self {
        Self {
            code,
            message: describe(code),
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for StatusError {}

impl LibraryError for StatusError {
    fn code(&self) -> i32 {
        self.code
    }

    fn message(&self) -> &str {
        self.message
    }
}

/// Memory exhaustion inside the native library.
///
/// Is both a [`LibraryError`] and an [`OutOfMemory`] error, so callers
/// matching on either capability observe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoMemoryError(StatusError);

impl NoMemoryError {
    #[must_use]
    pub fn new() -> Self {
        Self(StatusError::new(Status::NoMemory.code()))
    }
}

impl Default for NoMemoryError {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoMemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for NoMemoryError {}

impl LibraryError for NoMemoryError {
    fn code(&self) -> i32 {
        self.0.code
    }

    fn message(&self) -> &str {
        self.0.message
    }
}

impl OutOfMemory for NoMemoryError {}

/// A read or write failure reported by a stream adapter.
///
/// Carries the native description verbatim and is deliberately not a
/// [`LibraryError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoError {
    code: i32,
    message: &'static str,
}

impl IoError {
    #[must_use]
    pub fn new(code: i32) -> Self {
        Self {
            code,
            message: native::status_to_string(code),
        }
    }

    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for IoError {}

impl From<IoError> for io::Error {
    fn from(error: IoError) -> Self {
        Self::other(error)
    }
}

/// Any failure produced by [`check_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Library(StatusError),
    LibraryAndOutOfMemory(NoMemoryError),
    Io(IoError),
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Library(_) => ErrorKind::Library,
            Self::LibraryAndOutOfMemory(_) => ErrorKind::LibraryAndOutOfMemory,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// The error viewed as the library's own error, `None` for I/O failures.
    #[must_use]
    pub fn as_library(&self) -> Option<&dyn LibraryError> {
        match self {
            Self::Library(error) => Some(error),
            Self::LibraryAndOutOfMemory(error) => Some(error),
            Self::Io(_) => None,
        }
    }

    #[must_use]
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::LibraryAndOutOfMemory(_))
    }

    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Library(error) => error.code,
            Self::LibraryAndOutOfMemory(error) => error.0.code,
            Self::Io(error) => error.code,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<Status> {
        Status::from_raw(self.code())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Library(error) => error.message,
            Self::LibraryAndOutOfMemory(error) => error.0.message,
            Self::Io(error) => error.message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library(error) => error.fmt(f),
            Self::LibraryAndOutOfMemory(error) => error.fmt(f),
            Self::Io(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Library(error) => Some(error),
            Self::LibraryAndOutOfMemory(error) => Some(error),
            Self::Io(error) => Some(error),
        }
    }
}

impl From<StatusError> for Error {
    fn from(error: StatusError) -> Self {
        Self::Library(error)
    }
}

impl From<NoMemoryError> for Error {
    fn from(error: NoMemoryError) -> Self {
        Self::LibraryAndOutOfMemory(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Self {
        Self::Io(error)
    }
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Io(error) => error.into(),
            Error::LibraryAndOutOfMemory(error) => Self::new(io::ErrorKind::OutOfMemory, error),
            Error::Library(error) => Self::other(error),
        }
    }
}

/// Translates a raw native status code.
///
/// Success maps to `Ok(())`. Memory exhaustion becomes
/// [`Error::LibraryAndOutOfMemory`], read and write failures become
/// [`Error::Io`] with the native description, and every other code
/// (including codes outside [`Status`]) becomes [`Error::Library`].
pub fn check_status(code: i32) -> Result<(), Error> {
    let error: Error = match Status::from_raw(code) {
        Some(Status::Success) => return Ok(()),
        Some(Status::NoMemory) => NoMemoryError::new().into(),
        Some(Status::ReadError | Status::WriteError) => IoError::new(code).into(),
        _ => StatusError::new(code).into(),
    };
    tracing::debug!(
        code,
        status = Status::from_raw(code).map_or("<unknown>", Status::name),
        kind = %error.kind(),
        "native call failed"
    );
    Err(error)
}
