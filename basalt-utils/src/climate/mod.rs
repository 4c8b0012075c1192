//! Climate parameter space for multi-noise biome selection.
//!
//! Climate samples are quantized to fixed-point integers (scale 10000) before any
//! comparison happens, so authored regions and sampled targets go through the same
//! truncation and every distance is exact integer arithmetic. This keeps biome
//! lookup bit-reproducible for a given seed.
//!
//! # Key Types
//!
//! - [`Parameter`] - A closed quantized interval on one axis
//! - [`ParameterPoint`] - An authored region: six climate intervals plus an offset
//! - [`TargetPoint`] - A sampled, quantized climate vector
//! - [`ParameterList`] - The bulk-loaded R-tree that answers nearest-region queries
//! - [`LocalityCache`] - Per-worker warm-start hint for [`ParameterList::find_value_cached`]

mod error;
mod parameter;
mod parameter_list;
mod point;
mod rtree;

pub use error::ClimateError;
pub use parameter::Parameter;
pub use parameter_list::{LocalityCache, ParameterList};
pub use point::{ParameterPoint, TargetPoint};

/// Number of axes in a parameter space: six climate axes plus the offset axis.
pub const PARAMETER_COUNT: usize = 7;

/// Number of climate axes a [`TargetPoint`] carries.
pub const CLIMATE_AXES: usize = 6;

/// Fixed-point scale applied to every climate value.
pub const QUANTIZATION_FACTOR: f32 = 10000.0;

/// Quantize a climate value matching vanilla's `(long)(value * 10000.0F)`.
///
/// The multiplication happens in `f32` and the cast truncates toward zero.
/// Out-of-range values saturate and NaN maps to 0.
#[inline]
#[must_use]
pub fn quantize(value: f32) -> i64 {
    (value * QUANTIZATION_FACTOR) as i64
}

/// Quantize an `f64` climate sample.
///
/// Density functions produce `f64`, but vanilla narrows to `float` before
/// quantizing. Going through `f32` keeps sampled targets on the same grid as
/// authored parameters.
#[inline]
#[must_use]
pub fn quantize_coord(value: f64) -> i64 {
    quantize(value as f32)
}

/// Convert a quantized value back to a float.
#[inline]
#[must_use]
pub fn unquantize(value: i64) -> f32 {
    value as f32 / QUANTIZATION_FACTOR
}

/// Find the value of the region nearest to `target`.
///
/// Shorthand for [`ParameterList::find_value`] for callers that do not keep a
/// [`LocalityCache`].
#[inline]
#[must_use]
pub fn classify<'a, T>(list: &'a ParameterList<T>, target: &TargetPoint) -> &'a T {
    list.find_value(target)
}
