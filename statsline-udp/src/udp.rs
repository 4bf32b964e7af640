use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use statsline::{MetricSink, StatsClient};
use tracing::trace;

use crate::SinkError;

/// A sink that sends each emitted line as its own UDP datagram.
///
/// The sink owns a locally-bound socket; the destination is resolved once at
/// construction time.
pub struct UdpMetricSink {
    socket: UdpSocket,
    addr: SocketAddr,
}

impl UdpMetricSink {
    /// Creates a sink sending to the given address from the given socket.
    ///
    /// # Errors
    ///
    /// If the address fails to resolve, or resolves to nothing, an error is returned.
    pub fn from<A: ToSocketAddrs>(addr: A, socket: UdpSocket) -> Result<Self, SinkError> {
        let addr = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| SinkError::InvalidAddress {
                reason: "address resolved to no candidates".to_string(),
            })?;

        Ok(UdpMetricSink { socket, addr })
    }

    /// Creates a sink targeting the address configured on a [`StatsClient`].
    ///
    /// # Errors
    ///
    /// If the client carries no address, or the address fails to resolve, an error is
    /// returned.
    pub fn for_client(client: &StatsClient, socket: UdpSocket) -> Result<Self, SinkError> {
        let (host, port) = client.address().ok_or_else(|| SinkError::InvalidAddress {
            reason: "client has no address configured".to_string(),
        })?;

        UdpMetricSink::from((host, port), socket)
    }

    /// The resolved destination address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl MetricSink for UdpMetricSink {
    fn emit(&self, line: &str) -> io::Result<usize> {
        trace!(metric = line, "sending datagram");
        self.socket.send_to(line.as_bytes(), self.addr)
    }
}
