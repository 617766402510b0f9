use std::io::Cursor;

/// Trait for reading a header from a buffer.
pub trait HeaderReader {
    /// Associated type for the HeaderReader, since it reads it from a header.
    type Header;

    /// Reads the specified header from the given Cursor.
    fn read(rdr: &mut Cursor<&[u8]>) -> Self::Header;

    /// Returns the size of the header.
    fn size() -> usize;
}
