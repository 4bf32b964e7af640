//! An immutable, fluent client for building [StatsD] metric lines.
//!
//! [StatsD]: https://github.com/statsd/statsd/blob/master/docs/metric_types.md
//!
//! # Usage
//!
//! A [`StatsClient`] holds the root configuration: the destination address and a
//! hierarchical base scope. Every configuring call consumes the value and returns a
//! new one, so a client (or any builder derived from it) can be freely shared,
//! cloned, and branched without any of the chains interfering:
//!
//! ```
//! use statsline::StatsClient;
//!
//! # fn main() -> Result<(), statsline::BuildError> {
//! let client = StatsClient::new().addr("localhost", 8125).scope(["foo", "bar"]);
//!
//! let metric = client.counter(["baz", "boom"])?.sample(0.5)?.apply(1);
//! assert_eq!(metric.as_str(), "foo.bar.baz.boom:1|c|@0.5");
//! # Ok(())
//! # }
//! ```
//!
//! Gauges and sets carry arbitrary value types. Rather than requiring those types to
//! implement a trait, the builder takes an explicit [`ValueFormat`] capability record
//! alongside the value. The [`value`] module exports records for the primitive types,
//! and callers can declare their own as plain constants:
//!
//! ```
//! use statsline::{value, StatsClient};
//!
//! # fn main() -> Result<(), statsline::BuildError> {
//! let client = StatsClient::new().scope(["foo", "bar"]);
//!
//! let metric = client.gauge(["baz"], value::INT)?.scope(["zoom"]).apply(3);
//! assert_eq!(metric.as_str(), "foo.bar.baz.zoom:3|g");
//! # Ok(())
//! # }
//! ```
//!
//! The core is purely a string producer: applying a builder yields a [`Metric`] whose
//! line can be handed to any transport. The [`MetricSink`] trait is the seam for that
//! collaborator, and the `statsline-udp` crate provides datagram-based
//! implementations of it.

mod builder;
mod client;
mod error;
mod line;
mod segments;
mod sink;
pub mod value;

pub use self::builder::{MetricBuilder, TimerBuilder};
pub use self::client::StatsClient;
pub use self::error::BuildError;
pub use self::line::{Metric, MetricKind};
pub use self::segments::IntoSegments;
pub use self::sink::{MetricSink, NopMetricSink};
pub use self::value::ValueFormat;

/// An allocation-optimized string type.
///
/// Scope and metric-name segments accept both owned strings and `'static` string
/// slices, the latter without allocating.
pub type SharedString = std::borrow::Cow<'static, str>;
