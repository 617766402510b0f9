use std::fmt::Debug;
use std::io::Result;
use std::net::{SocketAddr, UdpSocket};

/// A datagram socket is a type of network socket which provides a connectionless point for
/// sending or receiving data packets.
///
/// Implementations must uphold the error contract of [`receive_packet`](Self::receive_packet) so
/// that the receiving dispatcher can tell terminal conditions apart from transient ones:
///
/// - a socket that has been closed surfaces `io::ErrorKind::ConnectionAborted` or
///   `io::ErrorKind::NotConnected`;
/// - an elapsed read timeout surfaces `io::ErrorKind::WouldBlock` or `io::ErrorKind::TimedOut`;
/// - every other error kind is treated as transient and the read loop keeps going.
pub trait DatagramSocket: Debug {
    /// Sends a single datagram to the given address.
    fn send_packet(&mut self, addr: &SocketAddr, payload: &[u8]) -> Result<usize>;

    /// Sends a single datagram to the peer this socket is connected to.
    fn send_packet_connected(&mut self, payload: &[u8]) -> Result<usize>;

    /// Receives a single datagram from the socket, blocking until one arrives.
    fn receive_packet<'a>(&mut self, buffer: &'a mut [u8]) -> Result<(&'a [u8], SocketAddr)>;

    /// Returns the socket address that this socket was created from.
    fn local_addr(&self) -> Result<SocketAddr>;
}

impl DatagramSocket for UdpSocket {
    fn send_packet(&mut self, addr: &SocketAddr, payload: &[u8]) -> Result<usize> {
        self.send_to(payload, addr)
    }

    fn send_packet_connected(&mut self, payload: &[u8]) -> Result<usize> {
        self.send(payload)
    }

    /// Receives a single datagram. With a read timeout configured via
    /// `UdpSocket::set_read_timeout`, an elapsed timeout surfaces as `WouldBlock` on Unix and
    /// `TimedOut` on Windows; both satisfy the trait contract.
    fn receive_packet<'a>(&mut self, buffer: &'a mut [u8]) -> Result<(&'a [u8], SocketAddr)> {
        let (len, addr) = self.recv_from(buffer)?;
        Ok((&buffer[..len], addr))
    }

    fn local_addr(&self) -> Result<SocketAddr> {
        UdpSocket::local_addr(self)
    }
}
