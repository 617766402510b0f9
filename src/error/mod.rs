//! Module with error types and the crate-wide result alias.

mod error_kinds;
mod network_error;

pub use self::error_kinds::FragmentErrorKind;
pub use self::network_error::ErrorKind;

use std::result;

/// Convenience alias over the crate error type.
pub type Result<T> = result::Result<T, ErrorKind>;
