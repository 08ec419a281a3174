//! Construction parameters for the classifier.

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// Highest accepted resolution. Past this the lattice spacing gets within an order of magnitude
/// of [`KEY_TOLERANCE`][crate::KEY_TOLERANCE].
pub const MAX_RESOLUTION: u32 = 5;

/// Configuration for a [`NearestNeighborClassifier`][crate::NearestNeighborClassifier].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Number of decimal places samples are rounded to. The lattice holds `10^resolution + 1`
    /// keys spaced `10^-resolution` apart over `[0, 1]`.
    pub resolution: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { resolution: 1 }
    }
}

impl ClassifierConfig {
    /// A configuration with the given resolution.
    pub fn with_resolution(resolution: u32) -> Self {
        Self { resolution }
    }

    /// Checks the configuration can build a classifier.
    pub fn validate(&self) -> Result<()> {
        if self.resolution > MAX_RESOLUTION {
            return Err(ClassifierError::Resolution {
                resolution: self.resolution,
                max: MAX_RESOLUTION,
            });
        }
        Ok(())
    }
}
