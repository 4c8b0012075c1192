//! Climate points: sampled targets and authored regions.

use super::{CLIMATE_AXES, ClimateError, PARAMETER_COUNT, Parameter, quantize_coord};

/// A target point representing sampled climate values.
///
/// All values are quantized (multiplied by 10000) so that distance calculations
/// are plain integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TargetPoint {
    /// Temperature parameter
    pub temperature: i64,
    /// Humidity/vegetation parameter
    pub humidity: i64,
    /// Continentalness parameter (inland vs ocean)
    pub continentalness: i64,
    /// Erosion parameter
    pub erosion: i64,
    /// Depth parameter (surface vs underground)
    pub depth: i64,
    /// Weirdness/ridges parameter
    pub weirdness: i64,
}

impl TargetPoint {
    /// The origin of the climate space.
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0, 0);

    /// Create a new target point with quantized values.
    #[must_use]
    pub const fn new(
        temperature: i64,
        humidity: i64,
        continentalness: i64,
        erosion: i64,
        depth: i64,
        weirdness: i64,
    ) -> Self {
        Self {
            temperature,
            humidity,
            continentalness,
            erosion,
            depth,
            weirdness,
        }
    }

    /// Create a target point from raw sampler output (will be quantized).
    #[must_use]
    pub fn from_floats(
        temperature: f64,
        humidity: f64,
        continentalness: f64,
        erosion: f64,
        depth: f64,
        weirdness: f64,
    ) -> Self {
        Self {
            temperature: quantize_coord(temperature),
            humidity: quantize_coord(humidity),
            continentalness: quantize_coord(continentalness),
            erosion: quantize_coord(erosion),
            depth: quantize_coord(depth),
            weirdness: quantize_coord(weirdness),
        }
    }

    /// Create a target point from a slice of six quantized values.
    pub fn from_slice(values: &[i64]) -> Result<Self, ClimateError> {
        let &[temperature, humidity, continentalness, erosion, depth, weirdness] = values else {
            return Err(ClimateError::target_count(values.len()));
        };
        Ok(Self::new(
            temperature,
            humidity,
            continentalness,
            erosion,
            depth,
            weirdness,
        ))
    }

    /// The six climate values in axis order.
    #[must_use]
    pub const fn values(&self) -> [i64; CLIMATE_AXES] {
        [
            self.temperature,
            self.humidity,
            self.continentalness,
            self.erosion,
            self.depth,
            self.weirdness,
        ]
    }

    /// Convert to a 7-element array for tree lookups.
    /// The 7th element is always 0 (offset position).
    #[must_use]
    pub const fn to_parameter_array(&self) -> [i64; PARAMETER_COUNT] {
        [
            self.temperature,
            self.humidity,
            self.continentalness,
            self.erosion,
            self.depth,
            self.weirdness,
            0, // Offset target is always 0
        ]
    }
}

/// A region: six climate intervals plus an offset.
///
/// Contains ranges for all 6 climate parameters plus an offset. The offset has no
/// counterpart in a [`TargetPoint`]; it is a flat penalty added to the fitness,
/// which lets a region be made harder to select without moving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterPoint {
    /// Temperature range
    pub temperature: Parameter,
    /// Humidity range
    pub humidity: Parameter,
    /// Continentalness range
    pub continentalness: Parameter,
    /// Erosion range
    pub erosion: Parameter,
    /// Depth range
    pub depth: Parameter,
    /// Weirdness range
    pub weirdness: Parameter,
    /// Offset (quantized)
    pub offset: i64,
}

impl ParameterPoint {
    /// A region sitting at the origin with no offset.
    pub const ZERO: Self = Self::new(
        Parameter::new(0, 0),
        Parameter::new(0, 0),
        Parameter::new(0, 0),
        Parameter::new(0, 0),
        Parameter::new(0, 0),
        Parameter::new(0, 0),
        0,
    );

    /// Create a new parameter point.
    #[must_use]
    pub const fn new(
        temperature: Parameter,
        humidity: Parameter,
        continentalness: Parameter,
        erosion: Parameter,
        depth: Parameter,
        weirdness: Parameter,
        offset: i64,
    ) -> Self {
        Self {
            temperature,
            humidity,
            continentalness,
            erosion,
            depth,
            weirdness,
            offset,
        }
    }

    /// Create a parameter point where every axis is a single value.
    ///
    /// Fails like [`Parameter::point`] on values outside the quantized range.
    pub fn from_values(
        temperature: f32,
        humidity: f32,
        continentalness: f32,
        erosion: f32,
        depth: f32,
        weirdness: f32,
        offset: f32,
    ) -> Result<Self, ClimateError> {
        Ok(Self::new(
            Parameter::point(temperature)?,
            Parameter::point(humidity)?,
            Parameter::point(continentalness)?,
            Parameter::point(erosion)?,
            Parameter::point(depth)?,
            Parameter::point(weirdness)?,
            Parameter::point(offset)?.min,
        ))
    }

    /// Create a parameter point from a full parameter space.
    ///
    /// The slice must hold exactly [`PARAMETER_COUNT`] axes and the last one (the
    /// offset) must be a single value.
    pub fn from_axes(axes: &[Parameter]) -> Result<Self, ClimateError> {
        let &[temperature, humidity, continentalness, erosion, depth, weirdness, offset] = axes
        else {
            return Err(ClimateError::parameter_count(axes.len()));
        };
        if !offset.is_point() {
            return Err(ClimateError::InvalidOffset {
                min: offset.min,
                max: offset.max,
            });
        }
        Ok(Self::new(
            temperature,
            humidity,
            continentalness,
            erosion,
            depth,
            weirdness,
            offset.min,
        ))
    }

    /// Calculate the fitness (distance) between this parameter point and a target.
    ///
    /// Lower fitness = better match. Uses squared distances, saturating at
    /// `i64::MAX` so out-of-range samples still order correctly.
    #[must_use]
    #[expect(clippy::many_single_char_names, reason = "one letter per climate axis")]
    pub const fn fitness(&self, target: &TargetPoint) -> i64 {
        let t = self.temperature.distance_to_value(target.temperature);
        let h = self.humidity.distance_to_value(target.humidity);
        let c = self.continentalness.distance_to_value(target.continentalness);
        let e = self.erosion.distance_to_value(target.erosion);
        let d = self.depth.distance_to_value(target.depth);
        let w = self.weirdness.distance_to_value(target.weirdness);

        let mut fitness = t.saturating_mul(t);
        fitness = fitness.saturating_add(h.saturating_mul(h));
        fitness = fitness.saturating_add(c.saturating_mul(c));
        fitness = fitness.saturating_add(e.saturating_mul(e));
        fitness = fitness.saturating_add(d.saturating_mul(d));
        fitness = fitness.saturating_add(w.saturating_mul(w));
        fitness.saturating_add(self.offset.saturating_mul(self.offset))
    }

    /// The parameter space of this point, with the offset as a 7th single-value axis.
    #[must_use]
    pub const fn parameter_space(&self) -> [Parameter; PARAMETER_COUNT] {
        [
            self.temperature,
            self.humidity,
            self.continentalness,
            self.erosion,
            self.depth,
            self.weirdness,
            Parameter::new(self.offset, self.offset),
        ]
    }
}
