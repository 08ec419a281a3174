//! Error types for the classifier.

use thiserror::Error;

/// Errors raised when building or querying a [`NearestNeighborClassifier`].
///
/// The trees themselves never fail: a miss is reported through `Option`.
///
/// [`NearestNeighborClassifier`]: crate::NearestNeighborClassifier
#[derive(Debug, Error, PartialEq)]
pub enum ClassifierError {
    /// The resolution would make the lattice too large or too fine for the key tolerance.
    #[error("resolution {resolution} is above the maximum of {max}")]
    Resolution {
        /// The rejected resolution.
        resolution: u32,
        /// The largest accepted resolution.
        max: u32,
    },

    /// A sample position or window width was NaN or infinite.
    #[error("non-finite value {value}")]
    NonFinite {
        /// The rejected value.
        value: f64,
    },

    /// A prediction window with a negative half-width.
    #[error("negative window half-width {delta}")]
    NegativeDelta {
        /// The rejected half-width.
        delta: f64,
    },
}

/// Result type for classifier operations.
pub type Result<T> = std::result::Result<T, ClassifierError>;
