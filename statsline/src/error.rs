use thiserror::Error;

/// Errors that could occur while configuring a metric builder.
///
/// All validation happens at configuration time: a builder that constructs
/// successfully always produces a well-formed wire line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// The sample rate was outside the half-open interval (0.0, 1.0].
    #[error("sample rate must be in (0.0, 1.0], got {rate}")]
    InvalidSampleRate {
        /// The rejected rate.
        rate: f64,
    },

    /// The metric name had no segments.
    #[error("metric name requires at least one segment")]
    EmptyName,
}
