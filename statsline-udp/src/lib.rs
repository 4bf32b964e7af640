//! UDP datagram sinks for [`statsline`] metric lines.
//!
//! The `statsline` core is a pure string producer; this crate is the transport
//! collaborator that actually puts lines on the network. Two sinks are provided:
//!
//! - [`UdpMetricSink`] sends one datagram per emitted line.
//! - [`BufferedUdpMetricSink`] accumulates newline-joined lines in a fixed-capacity
//!   buffer and sends a datagram when the buffer fills, on [`flush`], or on drop,
//!   trading per-metric syscalls for batched sends.
//!
//! [`flush`]: BufferedUdpMetricSink::flush
//!
//! ```no_run
//! use std::net::UdpSocket;
//!
//! use statsline::{MetricSink, StatsClient};
//! use statsline_udp::UdpMetricSink;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StatsClient::new().addr("localhost", 8125).scope(["web"]);
//!
//! let socket = UdpSocket::bind("0.0.0.0:0")?;
//! let sink = UdpMetricSink::for_client(&client, socket)?;
//!
//! let metric = client.counter(["requests"])?.apply(1);
//! sink.emit(metric.as_str())?;
//! # Ok(())
//! # }
//! ```
//!
//! Delivery is best-effort, matching the protocol: failures surface as `io::Error`
//! from [`emit`](statsline::MetricSink::emit) and nothing is retried.

use std::io;

use thiserror::Error;

mod buffered;
mod udp;

pub use self::buffered::BufferedUdpMetricSink;
pub use self::udp::UdpMetricSink;

/// Errors that could occur while constructing a UDP sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The destination address was missing or could not be resolved.
    #[error("invalid sink address: {reason}")]
    InvalidAddress {
        /// Details about the failure.
        reason: String,
    },

    /// The underlying socket operation failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
