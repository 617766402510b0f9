//! Module with fragment header logic.

mod fragment;
mod header_reader;
mod header_writer;

pub use self::fragment::FragmentHeader;
pub use self::header_reader::HeaderReader;
pub use self::header_writer::HeaderWriter;
