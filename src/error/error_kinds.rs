use std::fmt::{self, Display, Formatter};

/// Errors that could occur with constructing/parsing fragment contents.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FragmentErrorKind {
    /// The buffer was too short to contain a fragment header.
    MalformedHeader,
    /// The fragment index was outside the declared fragment count.
    IndexOutOfRange {
        /// The 1-based index carried by the offending fragment.
        index: u64,
        /// The fragment count the reassembly was created with.
        total: u64,
    },
    /// Reassembly was finalized while one or more fragments were still missing.
    PacketLoss {
        /// Number of fragment slots still empty.
        missing: usize,
    },
    /// The declared fragment count exceeds the configured maximum.
    ExceededMaxFragments {
        /// The fragment count that was declared.
        count: u64,
        /// The configured maximum.
        max: u64,
    },
}

impl Display for FragmentErrorKind {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            FragmentErrorKind::MalformedHeader => {
                write!(fmt, "The buffer is too short to contain a fragment header.")
            }
            FragmentErrorKind::IndexOutOfRange { index, total } => {
                write!(fmt, "The fragment index {} is outside the range 1..={}.", index, total)
            }
            FragmentErrorKind::PacketLoss { missing } => {
                write!(fmt, "Packet loss detected, missing {} fragments.", missing)
            }
            FragmentErrorKind::ExceededMaxFragments { count, max } => {
                write!(
                    fmt,
                    "The declared fragment count {} is bigger than the allowed {} fragments.",
                    count, max
                )
            }
        }
    }
}
