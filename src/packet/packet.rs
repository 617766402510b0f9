use std::net::SocketAddr;

#[derive(Clone, PartialEq, Eq, Debug)]
/// A fully reassembled payload together with the endpoint it came from.
pub struct Packet {
    /// The address of the endpoint that sent this data.
    addr: SocketAddr,
    /// The reassembled payload.
    payload: Box<[u8]>,
}

impl Packet {
    pub(crate) fn new(addr: SocketAddr, payload: Vec<u8>) -> Self {
        Packet {
            addr,
            payload: payload.into_boxed_slice(),
        }
    }

    /// Returns the payload (raw data) of this packet.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns the endpoint this packet was received from.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the length of the payload in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns `true` if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
