//! Module with the fragmentation and reassembly building blocks.

mod reassembly;

pub mod fragmenter;

pub use self::reassembly::ReassemblyBuffer;
