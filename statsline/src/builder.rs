use std::fmt;
use std::time::Duration;

use crate::line::{self, Metric, MetricKind};
use crate::segments::IntoSegments;
use crate::value::ValueFormat;
use crate::{BuildError, SharedString};

/// An immutable, fluent builder for a single metric.
///
/// Builders are manufactured by [`StatsClient`](crate::StatsClient) and carry the
/// client's base scope. Every configuring call consumes the builder and returns a new
/// one; the terminal calls ([`apply`](MetricBuilder::apply) and friends) render the
/// wire line. There is no shared mutable state anywhere in the chain, so builders can
/// be cloned and branched across threads without coordination.
///
/// The value type `T` is serialized through an explicit [`ValueFormat`] record rather
/// than a trait bound, so every operation below is available on every builder,
/// whatever its value type.
pub struct MetricBuilder<T> {
    kind: MetricKind,
    path: Vec<SharedString>,
    sample_rate: f64,
    format: ValueFormat<T>,
}

impl<T> MetricBuilder<T> {
    pub(crate) fn new(
        kind: MetricKind,
        scope: Vec<SharedString>,
        name: Vec<SharedString>,
        format: ValueFormat<T>,
    ) -> Result<Self, BuildError> {
        if name.is_empty() {
            return Err(BuildError::EmptyName);
        }

        let mut path = scope;
        path.extend(name);

        Ok(MetricBuilder { kind, path, sample_rate: 1.0, format })
    }

    /// Set the sample rate recorded on the wire line.
    ///
    /// A rate of `r` declares that the caller emits this metric for only an `r`
    /// fraction of events, letting the server scale counts back up. The implied
    /// default is 1.0, which is never written.
    ///
    /// # Errors
    ///
    /// If the rate is not a finite number in (0.0, 1.0], an error is returned and no
    /// builder state changes.
    pub fn sample(mut self, rate: f64) -> Result<Self, BuildError> {
        if !rate.is_finite() || rate <= 0.0 || rate > 1.0 {
            return Err(BuildError::InvalidSampleRate { rate });
        }

        self.sample_rate = rate;
        Ok(self)
    }

    /// Nest this metric under additional scope segments.
    ///
    /// The segments are appended to the metric's path in order, after anything the
    /// builder already carries. Composition is associative:
    /// `scope(a).scope(b)` is equivalent to `scope(a ++ b)`.
    #[must_use]
    pub fn scope<S: IntoSegments>(mut self, segments: S) -> Self {
        self.path.extend(segments.into_segments());
        self
    }

    /// The kind of metric this builder produces.
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// The configured sample rate.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Resolves this builder with the given value, producing the wire line.
    pub fn apply(self, value: T) -> Metric {
        self.finish(&value)
    }

    /// Resolves this builder with the value type's default.
    pub fn apply_default(self) -> Metric {
        let value = (self.format.default_value)();
        self.finish(&value)
    }

    /// Resolves this builder with the negation of the given value.
    ///
    /// This is the gauge-delta encoding: a leading `-` on the value marks a relative
    /// adjustment to a previously reported gauge rather than an absolute replacement.
    pub fn decrement(self, value: T) -> Metric {
        let value = (self.format.negate)(value);
        self.finish(&value)
    }

    fn finish(self, value: &T) -> Metric {
        let mut rendered = String::new();
        (self.format.write)(value, &mut rendered);

        Metric::from_line(line::render(&self.path, self.kind, &rendered, self.sample_rate))
    }
}

impl<T> Clone for MetricBuilder<T> {
    fn clone(&self) -> Self {
        MetricBuilder {
            kind: self.kind,
            path: self.path.clone(),
            sample_rate: self.sample_rate,
            format: self.format,
        }
    }
}

impl<T> fmt::Debug for MetricBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricBuilder")
            .field("kind", &self.kind)
            .field("path", &self.path)
            .field("sample_rate", &self.sample_rate)
            .finish_non_exhaustive()
    }
}

/// An immutable builder for timer metrics.
///
/// Timers take a [`Duration`] rather than a formatted value; the wire value is the
/// duration's whole-millisecond magnitude, saturating at `i64::MAX`.
#[derive(Clone, Debug)]
pub struct TimerBuilder {
    inner: MetricBuilder<i64>,
}

impl TimerBuilder {
    pub(crate) fn new(
        scope: Vec<SharedString>,
        name: Vec<SharedString>,
    ) -> Result<Self, BuildError> {
        let inner = MetricBuilder::new(MetricKind::Timer, scope, name, crate::value::INT)?;
        Ok(TimerBuilder { inner })
    }

    /// Set the sample rate recorded on the wire line.
    ///
    /// # Errors
    ///
    /// If the rate is not a finite number in (0.0, 1.0], an error is returned.
    pub fn sample(self, rate: f64) -> Result<Self, BuildError> {
        Ok(TimerBuilder { inner: self.inner.sample(rate)? })
    }

    /// Nest this metric under additional scope segments.
    #[must_use]
    pub fn scope<S: IntoSegments>(self, segments: S) -> Self {
        TimerBuilder { inner: self.inner.scope(segments) }
    }

    /// The configured sample rate.
    pub fn sample_rate(&self) -> f64 {
        self.inner.sample_rate()
    }

    /// Resolves this builder with the given duration, producing the wire line.
    pub fn apply(self, duration: Duration) -> Metric {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        self.inner.apply(millis)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::value::{self, ValueFormat};
    use crate::{BuildError, StatsClient};

    fn scoped_client() -> StatsClient {
        StatsClient::new().addr("localhost", 8125).scope(["foo", "bar"])
    }

    #[test]
    fn counter_with_sampling() {
        let client = scoped_client();
        let metric = client.counter(["baz", "boom"]).unwrap().sample(0.5).unwrap().apply(1);
        assert_eq!(metric.as_str(), "foo.bar.baz.boom:1|c|@0.5");
    }

    #[test]
    fn timer_with_sampling() {
        let client = scoped_client();
        let metric = client
            .time(["baz", "boom"])
            .unwrap()
            .sample(0.5)
            .unwrap()
            .apply(Duration::from_millis(100));
        assert_eq!(metric.as_str(), "foo.bar.baz.boom:100|ms|@0.5");
    }

    #[test]
    fn gauge_absolute() {
        let client = scoped_client();
        let metric = client.gauge(["baz", "boom"], value::INT).unwrap().apply(1);
        assert_eq!(metric.as_str(), "foo.bar.baz.boom:1|g");
    }

    #[test]
    fn gauge_scope_composes_on_generic_builders() {
        let client = scoped_client();
        let metric = client
            .gauge(["baz", "boom"], value::INT)
            .unwrap()
            .scope(["zoom", "doom"])
            .apply(3);
        assert_eq!(metric.as_str(), "foo.bar.baz.boom.zoom.doom:3|g");
    }

    #[test]
    fn set_member() {
        let client = scoped_client();
        let metric = client.set(["bar"], value::INT).unwrap().apply(1);
        assert_eq!(metric.as_str(), "foo.bar.bar:1|s");
    }

    #[test]
    fn scope_composition_is_associative() {
        let client = scoped_client();
        let split = client
            .counter(["baz"])
            .unwrap()
            .scope(["a"])
            .scope(["b"])
            .apply(1);
        let joined = client.counter(["baz"]).unwrap().scope(["a", "b"]).apply(1);
        assert_eq!(split, joined);
    }

    #[test]
    fn sample_rejects_out_of_range_rates() {
        let client = scoped_client();
        for rate in [0.0, -1.0, 1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = client.counter(["baz"]).unwrap().sample(rate);
            assert!(
                matches!(result, Err(BuildError::InvalidSampleRate { .. })),
                "rate {rate} should be rejected"
            );
        }
    }

    #[test]
    fn sample_accepts_boundary_rate() {
        let client = scoped_client();
        let metric = client.counter(["baz"]).unwrap().sample(1.0).unwrap().apply(1);
        assert_eq!(metric.as_str(), "foo.bar.baz:1|c");
    }

    #[test]
    fn configuring_calls_do_not_disturb_the_original() {
        let client = scoped_client();
        let base = client.counter(["baz"]).unwrap();
        let sampled = base.clone().sample(0.5).unwrap().scope(["deep"]);

        assert_eq!(base.apply(1).as_str(), "foo.bar.baz:1|c");
        assert_eq!(sampled.apply(1).as_str(), "foo.bar.baz.deep:1|c|@0.5");
    }

    #[test]
    fn accessor_is_idempotent() {
        let metric = scoped_client().counter(["baz"]).unwrap().apply(1);
        assert_eq!(metric.as_str(), metric.as_str());
        assert_eq!(metric.to_string(), metric.as_str());
    }

    #[test]
    fn gauge_decrement_negates() {
        let client = scoped_client();
        let metric = client.gauge(["baz"], value::INT).unwrap().decrement(3);
        assert_eq!(metric.as_str(), "foo.bar.baz:-3|g");
    }

    #[test]
    fn apply_default_uses_record_fallback() {
        let client = scoped_client();
        let metric = client.gauge(["baz"], value::INT).unwrap().apply_default();
        assert_eq!(metric.as_str(), "foo.bar.baz:0|g");
    }

    #[test]
    fn timer_saturates_at_i64_max() {
        let metric = scoped_client().time(["baz"]).unwrap().apply(Duration::MAX);
        assert_eq!(metric.as_str(), "foo.bar.baz:9223372036854775807|ms");
    }

    #[derive(Clone, Copy)]
    struct Inflight(i32);

    const INFLIGHT: ValueFormat<Inflight> = ValueFormat {
        default_value: || Inflight(0),
        negate: |value| Inflight(-value.0),
        write: |value, out| {
            let mut buf = itoa::Buffer::new();
            out.push_str(buf.format(value.0));
        },
    };

    #[test]
    fn caller_supplied_value_format() {
        let client = scoped_client();
        let metric = client.gauge(["inflight"], INFLIGHT).unwrap().apply(Inflight(12));
        assert_eq!(metric.as_str(), "foo.bar.inflight:12|g");

        let metric = client.gauge(["inflight"], INFLIGHT).unwrap().decrement(Inflight(2));
        assert_eq!(metric.as_str(), "foo.bar.inflight:-2|g");
    }

    #[test]
    fn counter_with_custom_format() {
        let client = scoped_client();
        let metric = client.counter_with(["work"], INFLIGHT).unwrap().apply(Inflight(4));
        assert_eq!(metric.as_str(), "foo.bar.work:4|c");
    }
}
