//! Splitting an outgoing payload into ordered, bounded-size fragments.

/// Returns how many fragments are needed to carry `payload_length` bytes when every fragment
/// holds at most `fragment_size` payload bytes.
///
/// This is a ceiling division with one boundary rule: an empty payload still occupies exactly
/// one fragment, so a receiver observes an explicit zero-length message instead of silence.
pub fn fragments_needed(payload_length: usize, fragment_size: usize) -> usize {
    if payload_length == 0 {
        return 1;
    }

    let remainder = if payload_length % fragment_size > 0 {
        1
    } else {
        0
    };
    (payload_length / fragment_size) + remainder
}

/// Splits the given payload into borrowed fragment-sized slices, in ascending fragment order.
///
/// All fragments except the last are exactly `fragment_size` bytes; the last carries the
/// remainder. An empty payload yields a single empty slice.
pub fn split_into_fragments(payload: &[u8], fragment_size: usize) -> Vec<&[u8]> {
    let num_fragments = fragments_needed(payload.len(), fragment_size);
    let mut fragments = Vec::with_capacity(num_fragments);

    for fragment_id in 0..num_fragments {
        let start = fragment_id * fragment_size;
        let mut end = start + fragment_size;
        if end > payload.len() {
            end = payload.len();
        }

        fragments.push(&payload[start..end]);
    }

    fragments
}
