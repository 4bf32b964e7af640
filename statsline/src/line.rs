use std::fmt;

use crate::SharedString;

/// The kind of a metric, determining its wire type tag.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MetricKind {
    /// A monotonic count of events, tagged `c`.
    Counter,
    /// A duration in whole milliseconds, tagged `ms`.
    Timer,
    /// An instantaneous or relative measurement, tagged `g`.
    Gauge,
    /// A member of a cardinality set, tagged `s`.
    Set,
}

impl MetricKind {
    /// Wire type tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            MetricKind::Counter => "c",
            MetricKind::Timer => "ms",
            MetricKind::Gauge => "g",
            MetricKind::Set => "s",
        }
    }
}

/// A fully-resolved metric, holding its rendered wire line.
///
/// Produced by the terminal calls on a builder. The line is computed once; the
/// accessors are pure and can be called any number of times.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Metric {
    line: String,
}

impl Metric {
    pub(crate) fn from_line(line: String) -> Self {
        Metric { line }
    }

    /// The wire line for this metric.
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Consumes this metric, returning the wire line.
    pub fn into_string(self) -> String {
        self.line
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Renders a wire line: `<path>:<value>|<tag>[|@<rate>]`.
///
/// Path segments are joined with `.`. The sample rate suffix is written only when the
/// rate differs from the implied default of 1.0.
pub(crate) fn render(
    path: &[SharedString],
    kind: MetricKind,
    value: &str,
    sample_rate: f64,
) -> String {
    let path_len: usize = path.iter().map(|segment| segment.len() + 1).sum();
    let mut line = String::with_capacity(path_len + value.len() + 8);

    for segment in path {
        if !line.is_empty() {
            line.push('.');
        }
        line.push_str(segment);
    }

    line.push(':');
    line.push_str(value);
    line.push('|');
    line.push_str(kind.tag());

    if sample_rate != 1.0 {
        let mut buf = ryu::Buffer::new();
        line.push_str("|@");
        line.push_str(buf.format(sample_rate));
    }

    line
}
