//! Fragmentation and reassembly of large payloads over unreliable datagram transports.
//!
//! UDP only delivers (if at all) datagrams of bounded size, with no built-in fragmentation.
//! This library splits an arbitrarily large payload into ordered, header-tagged fragments on
//! the sending side, and runs a background dispatcher on the receiving side that reads one
//! socket, demultiplexes fragments by sender address, and hands fully reassembled payloads to
//! the application over a channel.
//!
//! There is deliberately no reliability layer on top: lost fragments are not retransmitted,
//! they are reported. A reassembly that is finalized with gaps surfaces as a packet-loss error
//! carrying the number of missing fragments.
//!
//! Each datagram starts with a fixed 16-byte header: the 1-based fragment index and the total
//! fragment count, both big-endian `u64`. The wire format carries no message id, so two
//! messages from the same address cannot be told apart while the first is still incomplete;
//! senders are expected to finish one message before starting the next.
//!
//! # Example
//!
//! ```no_run
//! use std::net::UdpSocket;
//!
//! use udpfrags::{send, start_receiving, Config};
//!
//! fn main() -> udpfrags::Result<()> {
//!     let config = Config::default();
//!
//!     // Receiving side: the dispatcher takes ownership of the socket.
//!     let server = UdpSocket::bind("127.0.0.1:12345")?;
//!     let (packets, _errors) = start_receiving(server, config.clone())?;
//!
//!     // Sending side: no socket yet, so one is created and returned for reuse.
//!     let addr = "127.0.0.1:12345".parse().unwrap();
//!     let _client = send(None, Some(addr), &vec![0xAB; 1_000_000], &config)?;
//!
//!     // The channel closes once the receiving socket is closed or times out.
//!     for packet in packets.iter() {
//!         println!("{} bytes from {}", packet.len(), packet.addr());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod infrastructure;
pub mod net;
pub mod packet;

mod config;

#[cfg(test)]
pub mod test_utils;

pub use crate::config::Config;
pub use crate::error::{ErrorKind, FragmentErrorKind, Result};
pub use crate::net::{send, send_to, start_receiving, DatagramSocket};
pub use crate::packet::Packet;
