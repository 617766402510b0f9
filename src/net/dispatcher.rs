use std::collections::HashMap;
use std::io::{self, Cursor};
use std::net::SocketAddr;
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, trace};

use crate::config::Config;
use crate::error::{ErrorKind, FragmentErrorKind, Result};
use crate::infrastructure::ReassemblyBuffer;
use crate::net::constants::FRAGMENT_HEADER_SIZE;
use crate::net::DatagramSocket;
use crate::packet::header::{FragmentHeader, HeaderReader};
use crate::packet::Packet;

/// Spawns the receiving dispatcher for the given socket.
///
/// The dispatcher is a single background thread that owns the socket, reads datagrams in a
/// loop, and reassembles them per sender address. Completed payloads arrive on the first
/// returned channel, receive-side errors on the second. Both channels are bounded by
/// `config.event_buffer_size`; when one fills up the dispatcher blocks on it, so a slow
/// consumer stalls reassembly for every peer multiplexed over this socket.
///
/// The only way to stop the dispatcher from outside is closing the socket; a read timeout
/// configured on the socket also terminates it (after the timeout error is emitted). Either
/// way both channels disconnect, so consumers detect shutdown by channel exhaustion.
pub fn start_receiving<TSocket: DatagramSocket + Send + 'static>(
    socket: TSocket,
    config: Config,
) -> Result<(Receiver<Packet>, Receiver<ErrorKind>)> {
    config.validate()?;

    let (packet_sender, packet_receiver) = bounded(config.event_buffer_size);
    let (error_sender, error_receiver) = bounded(config.event_buffer_size);

    let dispatcher = Dispatcher {
        socket,
        in_flight: HashMap::new(),
        receive_buffer: vec![0; config.max_datagram_size],
        max_fragments: config.max_fragments,
        packet_sender,
        error_sender,
    };

    thread::Builder::new()
        .name("udpfrags-dispatcher".to_string())
        .spawn(move || dispatcher.run())?;

    Ok((packet_receiver, error_receiver))
}

/// What a failed read means for the dispatcher loop.
enum ReadOutcome {
    /// The socket was closed; expected shutdown, no error emitted.
    Closed,
    /// The configured read timeout elapsed; emitted once, then terminal.
    Timeout,
    /// Anything else; emitted, loop continues.
    Transient,
}

fn classify(error: &io::Error) -> ReadOutcome {
    match error.kind() {
        io::ErrorKind::ConnectionAborted | io::ErrorKind::NotConnected => ReadOutcome::Closed,
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => ReadOutcome::Timeout,
        _ => ReadOutcome::Transient,
    }
}

struct Dispatcher<TSocket: DatagramSocket> {
    socket: TSocket,
    /// At most one in-flight reassembly per sender address. The wire format carries no message
    /// id, so a second message from the same address while one is incomplete merges into it.
    in_flight: HashMap<SocketAddr, ReassemblyBuffer>,
    receive_buffer: Vec<u8>,
    /// Upper bound on the fragment count a header may declare; reassembly slots are allocated
    /// from that count, so it must not be attacker-controlled.
    max_fragments: usize,
    packet_sender: Sender<Packet>,
    error_sender: Sender<ErrorKind>,
}

impl<TSocket: DatagramSocket> Dispatcher<TSocket> {
    fn run(self) {
        // This thread is the only one that ever touches `in_flight`, so it needs no locking.
        let Dispatcher {
            mut socket,
            mut in_flight,
            mut receive_buffer,
            max_fragments,
            packet_sender,
            error_sender,
        } = self;

        loop {
            let (payload, addr) = match socket.receive_packet(&mut receive_buffer) {
                Ok((payload, addr)) => (payload, addr),
                Err(err) => match classify(&err) {
                    ReadOutcome::Closed => {
                        trace!("socket closed, stopping dispatcher");
                        break;
                    }
                    ReadOutcome::Timeout => {
                        emit_error(&error_sender, err.into());
                        break;
                    }
                    ReadOutcome::Transient => {
                        emit_error(&error_sender, err.into());
                        continue;
                    }
                },
            };

            // No fragment identity to report errors against, so malformed input is dropped
            // silently. Exactly header-sized datagrams are kept: that is a zero-length
            // fragment, which an empty payload legitimately produces.
            if payload.len() < FRAGMENT_HEADER_SIZE {
                trace!("dropping undersized {}-byte datagram from {}", payload.len(), addr);
                continue;
            }

            let mut cursor = Cursor::new(payload);
            let header = match FragmentHeader::read(&mut cursor) {
                Ok(header) => header,
                Err(_) => continue,
            };
            if header.fragment_count() == 0 {
                trace!("dropping fragment with zero declared count from {}", addr);
                continue;
            }
            // Slots are allocated from the declared count, so an unchecked header could demand
            // an absurd allocation and take the whole dispatcher down with it.
            if header.fragment_count() > max_fragments as u64 {
                emit_error(
                    &error_sender,
                    FragmentErrorKind::ExceededMaxFragments {
                        count: header.fragment_count(),
                        max: max_fragments as u64,
                    }
                    .into(),
                );
                continue;
            }
            let chunk = &payload[FRAGMENT_HEADER_SIZE..];

            let builder = in_flight
                .entry(addr)
                .or_insert_with(|| ReassemblyBuffer::new(header.fragment_count() as usize));

            if let Err(err) = builder.add(header.index(), chunk) {
                emit_error(&error_sender, err);
                continue;
            }

            if builder.is_complete() {
                if let Some(mut builder) = in_flight.remove(&addr) {
                    match builder.finalize() {
                        Ok(data) => {
                            trace!("reassembled {} bytes from {}", data.len(), addr);
                            let packet = Packet::new(addr, data.to_vec());
                            if packet_sender.send(packet).is_err() {
                                error!("completed packet receiver was dropped");
                            }
                        }
                        Err(err) => emit_error(&error_sender, err),
                    }
                }
            }
        }

        // Dropping both senders here closes the channels; consumers observe disconnection.
    }
}

fn emit_error(error_sender: &Sender<ErrorKind>, error: ErrorKind) {
    if error_sender.send(error).is_err() {
        error!("error receiver was dropped");
    }
}
