use thiserror::Error;

use super::{CLIMATE_AXES, PARAMETER_COUNT};

/// An error raised while building climate parameters or a [`ParameterList`](super::ParameterList).
///
/// All of these are construction-time failures. Once a list is built, lookups
/// cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClimateError {
    /// An interval was authored with its minimum above its maximum.
    #[error("Minimum value cannot be greater than maximum! Minimum: {min}, maximum: {max}")]
    InvalidRange {
        /// The offending minimum.
        min: f32,
        /// The offending maximum.
        max: f32,
    },
    /// A parameter list was built from zero regions.
    #[error("At least one value is required to build the search tree")]
    EmptyDomain,
    /// A region or target had the wrong number of axes.
    #[error("Expected parameter count of {expected}, was {actual}")]
    DimensionMismatch {
        /// The required axis count.
        expected: usize,
        /// The axis count that was supplied.
        actual: usize,
    },
    /// The offset axis of a dynamically built region was not a single value.
    #[error("Offset must be a single value, was {min}..{max}")]
    InvalidOffset {
        /// Quantized minimum of the offset axis.
        min: i64,
        /// Quantized maximum of the offset axis.
        max: i64,
    },
}

impl ClimateError {
    pub(crate) const fn parameter_count(actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: PARAMETER_COUNT,
            actual,
        }
    }

    pub(crate) const fn target_count(actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: CLIMATE_AXES,
            actual,
        }
    }
}
