use std::default::Default;

use crate::error::{ErrorKind, Result};
use crate::net::constants::{
    DEFAULT_EVENT_BUFFER_SIZE, DEFAULT_MAX_DATAGRAM_SIZE, FRAGMENT_HEADER_SIZE,
    MAX_FRAGMENTS_DEFAULT,
};

#[derive(Clone, Debug)]
/// Contains the configuration options used by the sender and the receiving dispatcher.
///
/// A `Config` value is passed explicitly into [`send_to`](crate::net::send_to) and
/// [`start_receiving`](crate::net::start_receiving); there is no process-wide mutable state, so
/// concurrent operations with different settings cannot race each other.
pub struct Config {
    /// Maximum size of a single datagram in bytes, fragment header included.
    ///
    /// Must be larger than the 16-byte fragment header; everything above the header is payload
    /// room, so the effective chunk size is `max_datagram_size - 16`. Both sides of a link must
    /// agree on this value staying below the path MTU, but they do not need the same value:
    /// the receive buffer is sized from it, so the receiver's value must be at least the
    /// sender's. Defaults to `1024`.
    pub max_datagram_size: usize,
    /// Capacity of each of the two output queues (completed packets, errors) returned by
    /// [`start_receiving`](crate::net::start_receiving).
    ///
    /// When a queue is full the dispatcher blocks until the consumer catches up, which stalls
    /// reassembly for every peer multiplexed over that socket. Defaults to `1024`.
    pub event_buffer_size: usize,
    /// Maximum number of fragments a single message may be split into.
    ///
    /// The sender refuses payloads that would need more, and the dispatcher drops fragments
    /// whose header declares a larger count; reassembly slots are allocated up front from that
    /// declared count, so without a bound one hostile datagram could demand an absurd
    /// allocation. Defaults to `65536` (64 MiB messages at the default datagram size).
    pub max_fragments: usize,
}

impl Config {
    /// Checks the configuration for values that can never work.
    ///
    /// Called by the send and receive entry points before touching the socket; a `Config`
    /// constructed by hand can hold any values until then.
    pub fn validate(&self) -> Result<()> {
        if self.max_datagram_size <= FRAGMENT_HEADER_SIZE {
            return Err(ErrorKind::ChunkSizeTooSmall(self.max_datagram_size));
        }
        if self.event_buffer_size == 0 {
            return Err(ErrorKind::ZeroSizedEventBuffer);
        }
        Ok(())
    }

    /// Number of payload bytes that fit into one datagram after the fragment header.
    pub fn fragment_size(&self) -> usize {
        self.max_datagram_size - FRAGMENT_HEADER_SIZE
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_datagram_size: DEFAULT_MAX_DATAGRAM_SIZE,
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
            max_fragments: MAX_FRAGMENTS_DEFAULT,
        }
    }
}
