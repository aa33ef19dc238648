//! Error types for the boreas-raster crate.

/// Error type for layer fetches from a [`RasterStore`](crate::RasterStore).
///
/// All of these are operational failures: the cache treats them as
/// non-fatal, logs them, and carries on with no resident layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Returned when the store has no layer catalog for a parameter.
    #[error("unknown weather parameter: {parameter}")]
    UnknownParameter {
        /// The parameter id that was requested.
        parameter: u32,
    },

    /// Returned when no published time slice matches a request.
    #[error("no time slice for parameter {parameter} at second {requested} of day")]
    NoSlice {
        /// The parameter id that was requested.
        parameter: u32,
        /// The requested time, seconds since local midnight.
        requested: u32,
    },

    /// Returned when the caller cancelled the fetch mid-flight.
    #[error("layer fetch cancelled")]
    Cancelled,

    /// Wraps a decode or I/O failure inside the store.
    #[error("layer load failed: {reason}")]
    Load {
        /// Description of the underlying failure.
        reason: String,
    },
}
