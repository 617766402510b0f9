use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use super::{HeaderReader, HeaderWriter};
use crate::error::{FragmentErrorKind, Result};
use crate::net::constants::FRAGMENT_HEADER_SIZE;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// This header represents a fragmented packet header.
///
/// Wire layout, 16 bytes total: `[index: u64 BE][count: u64 BE]`, followed by the fragment
/// payload. The index is 1-based; the last fragment of a message carries `index == count`.
pub struct FragmentHeader {
    index: u64,
    count: u64,
}

impl FragmentHeader {
    /// Creates a new fragment header with the given 1-based index and total fragment count.
    pub fn new(index: u64, count: u64) -> Self {
        FragmentHeader { index, count }
    }

    /// Returns the 1-based index of this fragment.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Returns the total number of fragments in the packet this fragment is part of.
    pub fn fragment_count(&self) -> u64 {
        self.count
    }
}

impl HeaderWriter for FragmentHeader {
    type Output = Result<()>;

    fn parse(&self, buffer: &mut Vec<u8>) -> Self::Output {
        buffer.write_u64::<BigEndian>(self.index)?;
        buffer.write_u64::<BigEndian>(self.count)?;
        Ok(())
    }
}

impl HeaderReader for FragmentHeader {
    type Header = Result<FragmentHeader>;

    fn read(rdr: &mut Cursor<&[u8]>) -> Self::Header {
        let remaining = rdr.get_ref().len() as u64 - rdr.position();
        if (remaining as usize) < FRAGMENT_HEADER_SIZE {
            return Err(FragmentErrorKind::MalformedHeader.into());
        }

        let index = rdr.read_u64::<BigEndian>()?;
        let count = rdr.read_u64::<BigEndian>()?;

        Ok(FragmentHeader { index, count })
    }

    fn size() -> usize {
        FRAGMENT_HEADER_SIZE
    }
}
