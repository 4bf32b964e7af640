use crate::builder::{MetricBuilder, TimerBuilder};
use crate::line::MetricKind;
use crate::segments::IntoSegments;
use crate::value::{self, ValueFormat};
use crate::{BuildError, SharedString};

/// The immutable root configuration from which all metric builders are made.
///
/// A client carries the destination address and the base scope prefixed to every
/// metric it manufactures. Configuring calls consume the client and return a new one,
/// so a fully-configured client is typically created once at program start and shared
/// (or cloned) from there. The client performs no I/O: the address is plain data for
/// a transport collaborator to pick up.
#[derive(Clone, Debug, Default)]
pub struct StatsClient {
    addr: Option<(SharedString, u16)>,
    scope: Vec<SharedString>,
}

impl StatsClient {
    /// Creates a client with an empty scope and no address.
    pub fn new() -> Self {
        StatsClient::default()
    }

    /// Set the destination address.
    ///
    /// The host is not resolved or validated here; reachability is the transport's
    /// concern. Metrics built from a client without an address are still valid wire
    /// lines.
    #[must_use]
    pub fn addr<H: Into<SharedString>>(mut self, host: H, port: u16) -> Self {
        self.addr = Some((host.into(), port));
        self
    }

    /// Extend the base scope applied to every metric built from this client.
    ///
    /// Segments are appended in order, so `scope(a).scope(b)` is equivalent to
    /// `scope(a ++ b)`.
    #[must_use]
    pub fn scope<S: IntoSegments>(mut self, segments: S) -> Self {
        self.scope.extend(segments.into_segments());
        self
    }

    /// The configured destination address, if any.
    pub fn address(&self) -> Option<(&str, u16)> {
        self.addr.as_ref().map(|(host, port)| (host.as_ref(), *port))
    }

    /// The base scope segments.
    pub fn base_scope(&self) -> &[SharedString] {
        &self.scope
    }

    /// Creates a counter builder for plain integer counts.
    ///
    /// # Errors
    ///
    /// If the name has no segments, an error is returned.
    pub fn counter<S: IntoSegments>(&self, name: S) -> Result<MetricBuilder<i64>, BuildError> {
        self.counter_with(name, value::INT)
    }

    /// Creates a counter builder for a caller-described value type.
    ///
    /// # Errors
    ///
    /// If the name has no segments, an error is returned.
    pub fn counter_with<S, T>(
        &self,
        name: S,
        format: ValueFormat<T>,
    ) -> Result<MetricBuilder<T>, BuildError>
    where
        S: IntoSegments,
    {
        MetricBuilder::new(MetricKind::Counter, self.scope.clone(), name.into_segments(), format)
    }

    /// Creates a timer builder.
    ///
    /// # Errors
    ///
    /// If the name has no segments, an error is returned.
    pub fn time<S: IntoSegments>(&self, name: S) -> Result<TimerBuilder, BuildError> {
        TimerBuilder::new(self.scope.clone(), name.into_segments())
    }

    /// Creates a gauge builder for a caller-described value type.
    ///
    /// # Errors
    ///
    /// If the name has no segments, an error is returned.
    pub fn gauge<S, T>(
        &self,
        name: S,
        format: ValueFormat<T>,
    ) -> Result<MetricBuilder<T>, BuildError>
    where
        S: IntoSegments,
    {
        MetricBuilder::new(MetricKind::Gauge, self.scope.clone(), name.into_segments(), format)
    }

    /// Creates a set builder for a caller-described value type.
    ///
    /// # Errors
    ///
    /// If the name has no segments, an error is returned.
    pub fn set<S, T>(
        &self,
        name: S,
        format: ValueFormat<T>,
    ) -> Result<MetricBuilder<T>, BuildError>
    where
        S: IntoSegments,
    {
        MetricBuilder::new(MetricKind::Set, self.scope.clone(), name.into_segments(), format)
    }
}
