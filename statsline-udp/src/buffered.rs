use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::sync::{Mutex, PoisonError};

use statsline::MetricSink;
use tracing::{error, trace};

use crate::SinkError;

const DEFAULT_BUFFER_CAPACITY: usize = 512;

/// A sink that batches lines into newline-joined datagrams.
///
/// Lines accumulate in a fixed-capacity buffer and are sent as a single datagram when
/// the next line would no longer fit, when [`flush`](BufferedUdpMetricSink::flush) is
/// called, or when the sink is dropped. The capacity should stay at or below the
/// receiving server's datagram buffer size.
pub struct BufferedUdpMetricSink {
    buffer: Mutex<String>,
    capacity: usize,
    socket: UdpSocket,
    addr: SocketAddr,
}

impl BufferedUdpMetricSink {
    /// Creates a sink sending to the given address with the default 512-byte buffer.
    ///
    /// # Errors
    ///
    /// If the address fails to resolve, or resolves to nothing, an error is returned.
    pub fn from<A: ToSocketAddrs>(addr: A, socket: UdpSocket) -> Result<Self, SinkError> {
        BufferedUdpMetricSink::with_capacity(addr, socket, DEFAULT_BUFFER_CAPACITY)
    }

    /// Creates a sink with the given buffer capacity in bytes.
    ///
    /// # Errors
    ///
    /// If the address fails to resolve, or resolves to nothing, an error is returned.
    pub fn with_capacity<A: ToSocketAddrs>(
        addr: A,
        socket: UdpSocket,
        capacity: usize,
    ) -> Result<Self, SinkError> {
        let addr = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| SinkError::InvalidAddress {
                reason: "address resolved to no candidates".to_string(),
            })?;

        Ok(BufferedUdpMetricSink {
            buffer: Mutex::new(String::with_capacity(capacity)),
            capacity,
            socket,
            addr,
        })
    }

    /// Sends any buffered lines immediately.
    ///
    /// # Errors
    ///
    /// If the datagram fails to send, the buffered lines are kept and the error is
    /// returned.
    pub fn flush(&self) -> io::Result<usize> {
        let mut buffer = self.lock();
        self.flush_buffer(&mut buffer)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, String> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn flush_buffer(&self, buffer: &mut String) -> io::Result<usize> {
        if buffer.is_empty() {
            return Ok(0);
        }

        let sent = self.socket.send_to(buffer.as_bytes(), self.addr)?;
        trace!(bytes = sent, "flushed buffered metrics");
        buffer.clear();
        Ok(sent)
    }
}

impl MetricSink for BufferedUdpMetricSink {
    fn emit(&self, line: &str) -> io::Result<usize> {
        let mut buffer = self.lock();
        let mut sent = 0;

        // A joined buffer costs one separator byte per line after the first.
        let joined_len = if buffer.is_empty() {
            line.len()
        } else {
            buffer.len() + 1 + line.len()
        };
        if joined_len > self.capacity && !buffer.is_empty() {
            sent += self.flush_buffer(&mut buffer)?;
        }

        if !buffer.is_empty() {
            buffer.push('\n');
        }
        buffer.push_str(line);

        if buffer.len() >= self.capacity {
            sent += self.flush_buffer(&mut buffer)?;
        }

        Ok(sent)
    }
}

impl Drop for BufferedUdpMetricSink {
    fn drop(&mut self) {
        let mut buffer = self.lock();
        if let Err(err) = self.flush_buffer(&mut buffer) {
            error!(error = %err, "failed to flush buffered metrics on drop");
        }
    }
}
