//! In-memory network plumbing used by the unit tests.

mod network_emulator;

pub use self::network_emulator::{EmulatedSocket, NetworkEmulator};
