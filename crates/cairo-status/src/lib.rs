#![doc = include_str!("../../../README.md")]

mod error;
pub mod native;
mod status;

pub use crate::{
    error::{Error, ErrorKind, IoError, LibraryError, NoMemoryError, OutOfMemory, StatusError, check_status},
    status::{Status, describe},
};
