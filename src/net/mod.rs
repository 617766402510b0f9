//! Module with the transport abstraction, the fragmenting sender, and the receiving
//! dispatcher.

pub mod constants;

mod datagram_socket;
mod dispatcher;
mod sender;

pub use self::datagram_socket::DatagramSocket;
pub use self::dispatcher::start_receiving;
pub use self::sender::{send, send_to};
