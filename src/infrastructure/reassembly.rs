use sha2::{Digest, Sha256};

use crate::error::{FragmentErrorKind, Result};

/// Accumulates the fragments of one in-flight message until all of them have arrived.
///
/// The buffer is created from the fragment count declared by the first fragment seen, so slots
/// never grow or re-index afterwards and completeness is an O(1) counter check instead of a
/// scan. Slots are filled by 1-based fragment index; a re-sent index overwrites the earlier
/// payload without double-counting (last write wins).
#[derive(Debug)]
pub struct ReassemblyBuffer {
    slots: Vec<Option<Box<[u8]>>>,
    received: usize,
    assembled: Option<Box<[u8]>>,
}

impl ReassemblyBuffer {
    /// Creates a buffer expecting `expected` fragments.
    pub fn new(expected: usize) -> Self {
        ReassemblyBuffer {
            slots: (0..expected).map(|_| None).collect(),
            received: 0,
            assembled: None,
        }
    }

    /// Returns the declared fragment count.
    pub fn expected(&self) -> usize {
        self.slots.len()
    }

    /// Returns how many distinct fragment slots have been filled so far.
    pub fn received(&self) -> usize {
        self.received
    }

    /// Stores the payload of fragment `index` (1-based).
    ///
    /// The data is copied, because callers reuse their receive buffer for the next datagram.
    /// Fails with `IndexOutOfRange` when the index falls outside `1..=expected`.
    pub fn add(&mut self, index: u64, data: &[u8]) -> Result<()> {
        if index < 1 || index > self.slots.len() as u64 {
            return Err(FragmentErrorKind::IndexOutOfRange {
                index,
                total: self.slots.len() as u64,
            }
            .into());
        }

        let slot = &mut self.slots[(index - 1) as usize];
        if slot.is_none() {
            self.received += 1;
        }
        *slot = Some(data.to_vec().into_boxed_slice());

        Ok(())
    }

    /// Returns `true` once every fragment slot has been filled.
    pub fn is_complete(&self) -> bool {
        self.received == self.slots.len()
    }

    /// Returns the number of fragment slots still empty.
    pub fn missing(&self) -> usize {
        self.slots.len() - self.received
    }

    /// Concatenates all fragments in index order into the original payload.
    ///
    /// Fails with `PacketLoss` while fragments are still missing. The result is cached, so
    /// repeated calls are cheap and return the same bytes.
    pub fn finalize(&mut self) -> Result<&[u8]> {
        if self.assembled.is_none() {
            let assembled = self.assemble()?;
            self.assembled = Some(assembled.into_boxed_slice());
        }

        Ok(self
            .assembled
            .as_deref()
            .expect("assembled data must exist after assemble"))
    }

    /// Returns the hex-encoded SHA-256 digest of the reassembled payload.
    ///
    /// Finalizes first if that has not happened yet, propagating `PacketLoss` for incomplete
    /// data.
    pub fn digest(&mut self) -> Result<String> {
        let data = self.finalize()?;
        let hash = Sha256::digest(data);

        Ok(hash.iter().map(|byte| format!("{:02x}", byte)).collect())
    }

    fn assemble(&self) -> Result<Vec<u8>> {
        if !self.is_complete() {
            return Err(FragmentErrorKind::PacketLoss {
                missing: self.missing(),
            }
            .into());
        }

        let total: usize = self.slots.iter().flatten().map(|slot| slot.len()).sum();
        let mut data = Vec::with_capacity(total);
        for slot in self.slots.iter().flatten() {
            data.extend_from_slice(slot);
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use sha2::{Digest, Sha256};

    use super::ReassemblyBuffer;
    use crate::error::{ErrorKind, FragmentErrorKind};

    #[test]
    fn reassembles_fragments_in_index_order() {
        let mut buffer = ReassemblyBuffer::new(3);
        buffer.add(2, b"def").unwrap();
        buffer.add(3, b"ghi").unwrap();
        assert!(!buffer.is_complete());
        buffer.add(1, b"abc").unwrap();
        assert!(buffer.is_complete());

        assert_eq!(buffer.finalize().unwrap(), b"abcdefghi");
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut buffer = ReassemblyBuffer::new(1);
        buffer.add(1, b"payload").unwrap();

        let first = buffer.finalize().unwrap().to_vec();
        let second = buffer.finalize().unwrap().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_fragment_is_reported_as_packet_loss() {
        let mut buffer = ReassemblyBuffer::new(3);
        buffer.add(1, b"abc").unwrap();
        buffer.add(3, b"ghi").unwrap();

        assert!(matches!(
            buffer.finalize(),
            Err(ErrorKind::FragmentError(FragmentErrorKind::PacketLoss {
                missing: 1
            }))
        ));
        assert!(matches!(
            buffer.digest(),
            Err(ErrorKind::FragmentError(FragmentErrorKind::PacketLoss {
                missing: 1
            }))
        ));
    }

    #[test]
    fn duplicate_fragment_does_not_double_count() {
        let mut buffer = ReassemblyBuffer::new(2);
        buffer.add(1, b"first").unwrap();
        buffer.add(1, b"later").unwrap();

        assert_eq!(buffer.received(), 1);
        assert!(!buffer.is_complete());

        // Last write wins.
        buffer.add(2, b"!").unwrap();
        assert_eq!(buffer.finalize().unwrap(), b"later!");
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let mut buffer = ReassemblyBuffer::new(2);

        assert!(matches!(
            buffer.add(0, b"x"),
            Err(ErrorKind::FragmentError(
                FragmentErrorKind::IndexOutOfRange { index: 0, total: 2 }
            ))
        ));
        assert!(matches!(
            buffer.add(3, b"x"),
            Err(ErrorKind::FragmentError(
                FragmentErrorKind::IndexOutOfRange { index: 3, total: 2 }
            ))
        ));
        assert_eq!(buffer.received(), 0);
    }

    #[test]
    fn digest_matches_independent_hash() {
        let payload = b"some payload worth hashing";
        let mut buffer = ReassemblyBuffer::new(1);
        buffer.add(1, payload).unwrap();

        let expected: String = Sha256::digest(&payload[..])
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect();
        assert_eq!(buffer.digest().unwrap(), expected);
    }

    #[test]
    fn empty_single_fragment_reassembles_to_empty() {
        let mut buffer = ReassemblyBuffer::new(1);
        buffer.add(1, b"").unwrap();

        assert!(buffer.is_complete());
        assert_eq!(buffer.finalize().unwrap(), b"");
    }
}
