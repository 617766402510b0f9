//! Module with packet types and the fragment header codec.

pub mod header;

mod packet;

pub use self::packet::Packet;
