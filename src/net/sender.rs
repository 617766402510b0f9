use std::net::{SocketAddr, UdpSocket};

use log::trace;

use crate::config::Config;
use crate::error::{ErrorKind, FragmentErrorKind, Result};
use crate::infrastructure::fragmenter;
use crate::net::DatagramSocket;
use crate::packet::header::{FragmentHeader, HeaderWriter};

/// Fragments `payload` and writes the fragments to the socket, in ascending index order.
///
/// Each datagram is at most `config.max_datagram_size` bytes: a 16-byte fragment header
/// followed by up to [`Config::fragment_size`] payload bytes. An empty payload is sent as a
/// single zero-length fragment (1 of 1), so the receiving side still observes a message.
///
/// When `addr` is `None` the socket must be connected to its peer; otherwise every write
/// targets `addr` explicitly, which allows replying to many peers over one socket.
///
/// Payloads that would need more than `config.max_fragments` fragments are refused with
/// `ExceededMaxFragments` before anything is written.
///
/// Writes happen one at a time and the first failure aborts the rest of the send. Fragments
/// already written are not retracted; the receiver is left with an incomplete reassembly until
/// its transport is closed or times out.
pub fn send_to<T: DatagramSocket>(
    socket: &mut T,
    addr: Option<SocketAddr>,
    payload: &[u8],
    config: &Config,
) -> Result<()> {
    config.validate()?;

    let fragments = fragmenter::split_into_fragments(payload, config.fragment_size());
    if fragments.len() > config.max_fragments {
        return Err(FragmentErrorKind::ExceededMaxFragments {
            count: fragments.len() as u64,
            max: config.max_fragments as u64,
        }
        .into());
    }
    let fragment_count = fragments.len() as u64;

    trace!(
        "sending {} bytes as {} fragments",
        payload.len(),
        fragment_count
    );

    let mut datagram = Vec::with_capacity(config.max_datagram_size);
    for (fragment_id, chunk) in fragments.iter().enumerate() {
        datagram.clear();
        FragmentHeader::new(fragment_id as u64 + 1, fragment_count).parse(&mut datagram)?;
        datagram.extend_from_slice(chunk);

        match addr {
            Some(ref addr) => socket.send_packet(addr, &datagram)?,
            None => socket.send_packet_connected(&datagram)?,
        };
    }

    Ok(())
}

/// Fragments `payload` and sends it over UDP, creating a socket if none is supplied.
///
/// When `socket` is `None` and a destination address is given, an ephemeral socket is bound and
/// connected to that address; the socket is returned so follow-up sends (and
/// [`start_receiving`](crate::net::start_receiving) for replies) can reuse it. Fails with
/// `MissingTransportAndAddress` when neither a socket nor an address is supplied.
pub fn send(
    socket: Option<UdpSocket>,
    addr: Option<SocketAddr>,
    payload: &[u8],
    config: &Config,
) -> Result<UdpSocket> {
    let (mut socket, addr) = match (socket, addr) {
        (Some(socket), addr) => (socket, addr),
        (None, Some(addr)) => {
            let bind_addr: SocketAddr = if addr.is_ipv4() {
                ([0, 0, 0, 0], 0).into()
            } else {
                (std::net::Ipv6Addr::UNSPECIFIED, 0).into()
            };
            let socket = UdpSocket::bind(bind_addr)?;
            socket.connect(addr)?;
            (socket, None)
        }
        (None, None) => return Err(ErrorKind::MissingTransportAndAddress),
    };

    send_to(&mut socket, addr, payload, config)?;

    Ok(socket)
}
