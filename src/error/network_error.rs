use super::FragmentErrorKind;

use std::fmt::{self, Display, Formatter};
use std::io;

#[derive(Debug)]
/// Enum with all possible errors that could occur.
pub enum ErrorKind {
    /// Error relating to receiving or parsing a fragment.
    FragmentError(FragmentErrorKind),
    /// Wrapper around a std io::Error.
    IOError(io::Error),
    /// The configured datagram size leaves no room for payload after the header.
    ChunkSizeTooSmall(usize),
    /// The configured output queue capacity was zero.
    ZeroSizedEventBuffer,
    /// `send` was called without a socket and without a destination address.
    MissingTransportAndAddress,
}

impl Display for ErrorKind {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::FragmentError(e) => {
                write!(fmt, "Something went wrong with receiving/parsing fragments. Reason: {:?}.", e)
            }
            ErrorKind::IOError(e) => write!(fmt, "An IO Error occurred. Reason: {:?}.", e),
            ErrorKind::ChunkSizeTooSmall(size) => write!(
                fmt,
                "The configured datagram size ({} bytes) must exceed the fragment header size.",
                size
            ),
            ErrorKind::ZeroSizedEventBuffer => {
                write!(fmt, "The output queue capacity must be greater than zero.")
            }
            ErrorKind::MissingTransportAndAddress => {
                write!(fmt, "Neither a socket nor a destination address was given.")
            }
        }
    }
}

impl std::error::Error for ErrorKind {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ErrorKind::IOError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ErrorKind {
    fn from(inner: io::Error) -> ErrorKind {
        ErrorKind::IOError(inner)
    }
}

impl From<FragmentErrorKind> for ErrorKind {
    fn from(inner: FragmentErrorKind) -> Self {
        ErrorKind::FragmentError(inner)
    }
}
