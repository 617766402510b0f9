/// Fragment header size: two big-endian `u64` fields, fragment index then fragment count.
pub const FRAGMENT_HEADER_SIZE: usize = 16;
/// Default max size of a datagram, header included.
pub const DEFAULT_MAX_DATAGRAM_SIZE: usize = 1024;
/// Default capacity of the packet and error output queues.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 1024;
/// Default max number of fragments a single message may be split into.
pub const MAX_FRAGMENTS_DEFAULT: usize = 65_536;
