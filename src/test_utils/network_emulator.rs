use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};

use crate::net::DatagramSocket;

/// This type allows to share global state between all sockets created from the same instance of
/// `NetworkEmulator`.
type GlobalBindings = Arc<Mutex<HashMap<SocketAddr, Sender<(SocketAddr, Vec<u8>)>>>>;

/// Enables creating emulated sockets that share global state stored by this network emulator.
///
/// Unlike a real UDP socket, an emulated socket can be closed from another thread via
/// [`NetworkEmulator::close`], which unblocks a pending read with `ConnectionAborted`. That is
/// exactly the shutdown path the receiving dispatcher needs to be tested against.
#[derive(Debug, Default, Clone)]
pub struct NetworkEmulator {
    network: GlobalBindings,
}

impl NetworkEmulator {
    /// Creates an emulated socket by binding to an address.
    /// If another socket was already bound to this address, an error is returned instead.
    pub fn new_socket(&self, address: SocketAddr) -> io::Result<EmulatedSocket> {
        match self.network.lock().unwrap().entry(address) {
            Entry::Occupied(_) => Err(io::Error::new(
                io::ErrorKind::AddrInUse,
                "Cannot bind to address",
            )),
            Entry::Vacant(entry) => {
                let (sender, receiver) = unbounded();
                entry.insert(sender);
                Ok(EmulatedSocket {
                    network: self.network.clone(),
                    address,
                    peer: None,
                    incoming: receiver,
                    read_timeout: None,
                })
            }
        }
    }

    /// Closes the socket bound to the given address.
    ///
    /// A reader blocked on that socket observes `ConnectionAborted`, like a real transport
    /// closed out from under it.
    pub fn close(&self, address: SocketAddr) {
        self.network.lock().unwrap().remove(&address);
    }
}

/// Implementation of a socket that is created by `NetworkEmulator`.
#[derive(Debug)]
pub struct EmulatedSocket {
    network: GlobalBindings,
    address: SocketAddr,
    peer: Option<SocketAddr>,
    incoming: Receiver<(SocketAddr, Vec<u8>)>,
    read_timeout: Option<Duration>,
}

impl EmulatedSocket {
    /// Connects this socket to a peer, enabling `send_packet_connected`.
    pub fn connect(&mut self, peer: SocketAddr) {
        self.peer = Some(peer);
    }

    /// Sets the timeout after which a blocked `receive_packet` fails with `TimedOut`.
    pub fn set_read_timeout(&mut self, timeout: Option<Duration>) {
        self.read_timeout = timeout;
    }
}

impl DatagramSocket for EmulatedSocket {
    /// Sends a datagram to an address if there is a socket bound to it. Otherwise it will
    /// simply be ignored, like UDP into the void.
    fn send_packet(&mut self, addr: &SocketAddr, payload: &[u8]) -> io::Result<usize> {
        let bound = self.network.lock().unwrap().get(addr).cloned();
        if let Some(bound) = bound {
            let _ = bound.send((self.address, payload.to_vec()));
        }
        Ok(payload.len())
    }

    fn send_packet_connected(&mut self, payload: &[u8]) -> io::Result<usize> {
        match self.peer {
            Some(peer) => self.send_packet(&peer, payload),
            None => Err(io::ErrorKind::NotConnected.into()),
        }
    }

    /// Receives a datagram, blocking until one arrives, the configured timeout elapses, or the
    /// socket is closed through the emulator.
    fn receive_packet<'a>(&mut self, buffer: &'a mut [u8]) -> io::Result<(&'a [u8], SocketAddr)> {
        let received = match self.read_timeout {
            Some(timeout) => self.incoming.recv_timeout(timeout).map_err(|err| match err {
                RecvTimeoutError::Timeout => io::Error::from(io::ErrorKind::TimedOut),
                RecvTimeoutError::Disconnected => io::Error::from(io::ErrorKind::ConnectionAborted),
            })?,
            None => self
                .incoming
                .recv()
                .map_err(|_| io::Error::from(io::ErrorKind::ConnectionAborted))?,
        };

        // Like UDP, a datagram larger than the receive buffer is silently truncated.
        let (addr, payload) = received;
        let len = payload.len().min(buffer.len());
        let slice = &mut buffer[..len];
        slice.copy_from_slice(&payload[..len]);
        Ok((slice, addr))
    }

    /// Returns the socket address that this socket was created from.
    fn local_addr(&self) -> io::Result<SocketAddr> {
        Ok(self.address)
    }
}
