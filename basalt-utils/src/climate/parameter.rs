use std::fmt;

use super::{ClimateError, quantize, unquantize};

/// A parameter range for biome matching.
///
/// Represents a closed, quantized range `[min, max]` on one climate axis.
/// A value inside the range has distance 0; outside, the distance grows
/// linearly with the gap to the nearer edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Minimum value (quantized)
    pub min: i64,
    /// Maximum value (quantized)
    pub max: i64,
}

impl Parameter {
    /// Create a parameter range from already quantized bounds.
    ///
    /// Callers must uphold `min <= max`; use [`Parameter::try_new`] for untrusted input.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        debug_assert!(min <= max, "Parameter::new: min > max");
        Self { min, max }
    }

    /// Create a parameter range from quantized bounds, rejecting `min > max`.
    pub fn try_new(min: i64, max: i64) -> Result<Self, ClimateError> {
        if min > max {
            return Err(ClimateError::InvalidRange {
                min: unquantize(min),
                max: unquantize(max),
            });
        }
        Ok(Self { min, max })
    }

    /// Create a point parameter (`min == max`).
    ///
    /// Rejects values that are not finite or do not fit the quantized range.
    pub fn point(value: f32) -> Result<Self, ClimateError> {
        let quantized = quantize_authored(value).ok_or(ClimateError::InvalidRange {
            min: value,
            max: value,
        })?;
        Ok(Self {
            min: quantized,
            max: quantized,
        })
    }

    /// Create a parameter span from float bounds.
    pub fn span(min: f32, max: f32) -> Result<Self, ClimateError> {
        let invalid = ClimateError::InvalidRange { min, max };
        // Compared before quantizing: two floats can truncate to the same step.
        if min > max {
            return Err(invalid);
        }
        match (quantize_authored(min), quantize_authored(max)) {
            (Some(min), Some(max)) => Ok(Self { min, max }),
            _ => Err(invalid),
        }
    }

    /// Create the span running from the start of `min` to the end of `max`.
    pub fn span_of(min: &Self, max: &Self) -> Result<Self, ClimateError> {
        Self::try_new(min.min, max.max)
    }

    /// Expand this parameter to include another parameter, if any.
    #[must_use]
    pub const fn union(&self, other: Option<&Self>) -> Self {
        match other {
            Some(o) => Self {
                min: if o.min < self.min { o.min } else { self.min },
                max: if o.max > self.max { o.max } else { self.max },
            },
            None => *self,
        }
    }

    /// Distance from a quantized value to this range.
    ///
    /// Returns 0 if the value is within the range, otherwise the distance to the
    /// nearest edge.
    #[inline]
    #[must_use]
    pub const fn distance_to_value(&self, value: i64) -> i64 {
        let over = value.saturating_sub(self.max);
        let under = self.min.saturating_sub(value);
        if over > 0 {
            over
        } else if under > 0 {
            under
        } else {
            0
        }
    }

    /// Gap between two ranges, 0 when they overlap.
    #[inline]
    #[must_use]
    pub const fn distance_to_interval(&self, other: &Self) -> i64 {
        let over = other.min.saturating_sub(self.max);
        let under = self.min.saturating_sub(other.max);
        if over > 0 {
            over
        } else if under > 0 {
            under
        } else {
            0
        }
    }

    /// Center of the range, truncated toward zero.
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> i64 {
        // The halved sum of two i64s always fits back into an i64.
        ((i128::from(self.min) + i128::from(self.max)) / 2) as i64
    }

    /// Width of the range in quantized units, saturating at `i64::MAX`.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.max.saturating_sub(self.min)
    }

    /// Whether `min == max`.
    #[must_use]
    pub const fn is_point(&self) -> bool {
        self.min == self.max
    }
}

/// Quantize an authored bound, or `None` if it is not finite or saturates.
fn quantize_authored(value: f32) -> Option<i64> {
    let quantized = quantize(value);
    (value.is_finite() && quantized != i64::MIN && quantized != i64::MAX).then_some(quantized)
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "[{}]", unquantize(self.min))
        } else {
            write!(f, "[{}-{}]", unquantize(self.min), unquantize(self.max))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_value() {
        let param = Parameter::new(-5000, 5000);

        // Inside range
        assert_eq!(param.distance_to_value(0), 0);
        assert_eq!(param.distance_to_value(5000), 0);
        assert_eq!(param.distance_to_value(-5000), 0);

        // Outside range
        assert_eq!(param.distance_to_value(6000), 1000);
        assert_eq!(param.distance_to_value(-6000), 1000);
        assert_eq!(param.distance_to_value(10000), 5000);
    }

    #[test]
    fn distance_to_value_is_zero_exactly_inside() {
        let param = Parameter::new(-3, 7);
        for v in -20..=20 {
            let inside = (-3..=7).contains(&v);
            assert_eq!(param.distance_to_value(v) == 0, inside, "value {v}");
        }
    }

    #[test]
    fn distance_to_interval_is_zero_exactly_on_overlap() {
        let a = Parameter::new(-10, 10);
        for min in -30..=30 {
            for width in 0..8 {
                let b = Parameter::new(min, min + width);
                let overlap = a.min <= b.max && b.min <= a.max;
                assert_eq!(a.distance_to_interval(&b) == 0, overlap, "{a:?} vs {b:?}");
                assert_eq!(a.distance_to_interval(&b), b.distance_to_interval(&a));
            }
        }
        assert_eq!(a.distance_to_interval(&Parameter::new(15, 20)), 5);
        assert_eq!(a.distance_to_interval(&Parameter::new(-40, -12)), 2);
    }

    #[test]
    fn point_and_span_quantize() {
        assert_eq!(Parameter::point(0.5), Ok(Parameter::new(5000, 5000)));
        assert_eq!(
            Parameter::span(-1.0, 0.25),
            Ok(Parameter::new(-10000, 2500))
        );
    }

    #[test]
    fn span_rejects_inverted_bounds() {
        assert_eq!(
            Parameter::span(0.5, -0.5),
            Err(ClimateError::InvalidRange {
                min: 0.5,
                max: -0.5
            })
        );
        // Inverted before quantization even though both truncate to 0.
        assert!(Parameter::span(0.000_09, 0.000_01).is_err());
    }

    #[test]
    fn authored_bounds_must_fit_the_quantized_range() {
        for value in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN, 1.0e16, -1.0e16] {
            assert!(Parameter::point(value).is_err(), "{value}");
            assert!(Parameter::span(value, value).is_err(), "{value}");
        }
        assert!(Parameter::span(f32::NEG_INFINITY, 0.0).is_err());
        assert!(Parameter::span(0.0, 1.0e16).is_err());
        assert!(Parameter::span(-1.0e12, 1.0e12).is_ok());
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let full = Parameter::new(i64::MIN, i64::MAX);
        assert_eq!(full.midpoint(), 0);
        assert_eq!(full.width(), i64::MAX);
        assert_eq!(Parameter::new(i64::MAX, i64::MAX).midpoint(), i64::MAX);
        assert_eq!(Parameter::new(i64::MIN, i64::MIN).midpoint(), i64::MIN);
        assert_eq!(Parameter::new(i64::MAX - 1, i64::MAX).midpoint(), i64::MAX - 1);

        let origin = Parameter::new(0, 0);
        assert_eq!(origin.distance_to_value(i64::MIN), i64::MAX);
        assert_eq!(Parameter::new(-5, 5).distance_to_value(i64::MAX), i64::MAX - 5);
        assert_eq!(
            Parameter::new(i64::MIN, i64::MIN).distance_to_interval(&Parameter::new(10, 10)),
            i64::MAX
        );
    }

    #[test]
    fn span_of_joins_two_parameters() {
        let low = Parameter::new(-100, -50);
        let high = Parameter::new(20, 80);
        assert_eq!(Parameter::span_of(&low, &high), Ok(Parameter::new(-100, 80)));
        assert!(matches!(
            Parameter::span_of(&high, &low),
            Err(ClimateError::InvalidRange { .. })
        ));
    }

    #[test]
    fn union_grows_to_cover_both() {
        let a = Parameter::new(-10, 0);
        assert_eq!(a.union(None), a);
        assert_eq!(a.union(Some(&Parameter::new(5, 9))), Parameter::new(-10, 9));
        assert_eq!(a.union(Some(&Parameter::new(-3, -2))), a);
    }

    #[test]
    fn midpoint_truncates_toward_zero() {
        assert_eq!(Parameter::new(-3, 0).midpoint(), -1);
        assert_eq!(Parameter::new(0, 3).midpoint(), 1);
        assert_eq!(Parameter::new(-10000, 10000).midpoint(), 0);
        assert_eq!(Parameter::new(-1, 2).midpoint(), 0);
        assert_eq!(Parameter::new(-7, -4).midpoint(), -5);
    }

    #[test]
    fn display() {
        assert_eq!(Parameter::new(5000, 5000).to_string(), "[0.5]");
        assert_eq!(Parameter::new(-10000, 2500).to_string(), "[-1-0.25]");
    }
}
