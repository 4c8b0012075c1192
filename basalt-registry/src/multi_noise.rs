//! Multi-noise biome source parameter lists.
//!
//! Presets live in `build_assets/multi_noise_biome_source_parameters.json`, keyed
//! by preset name, each a list of `{ biome, parameters }` entries in authoring
//! order. An axis is either a single number or a `[min, max]` pair; `offset` is
//! always a single number. Entry order matters: it decides ties.

use std::collections::BTreeMap;

use basalt_utils::climate::{ClimateError, Parameter, ParameterList, ParameterPoint};
use serde::Deserialize;

use crate::RegistryError;
use crate::biome::BiomeRef;
use crate::vanilla_biomes;

const PRESETS_JSON: &str =
    include_str!("../build_assets/multi_noise_biome_source_parameters.json");

/// A biome entry from a multi-noise parameter list.
#[derive(Deserialize)]
struct BiomeEntry {
    biome: String,
    parameters: BiomeParameters,
}

/// Climate parameters for a biome entry.
#[derive(Deserialize)]
struct BiomeParameters {
    temperature: Axis,
    humidity: Axis,
    continentalness: Axis,
    erosion: Axis,
    depth: Axis,
    weirdness: Axis,
    offset: f32,
}

/// One climate axis, either a point or a span.
#[derive(Deserialize)]
#[serde(untagged)]
enum Axis {
    Point(f32),
    Span([f32; 2]),
}

impl Axis {
    fn parameter(&self) -> Result<Parameter, ClimateError> {
        match *self {
            Self::Point(value) => Parameter::point(value),
            Self::Span([min, max]) => Parameter::span(min, max),
        }
    }
}

impl BiomeParameters {
    fn point(&self) -> Result<ParameterPoint, ClimateError> {
        Ok(ParameterPoint::new(
            self.temperature.parameter()?,
            self.humidity.parameter()?,
            self.continentalness.parameter()?,
            self.erosion.parameter()?,
            self.depth.parameter()?,
            self.weirdness.parameter()?,
            Parameter::point(self.offset)?.min,
        ))
    }
}

fn resolve(entries: Vec<BiomeEntry>) -> Result<Vec<(ParameterPoint, BiomeRef)>, RegistryError> {
    entries
        .into_iter()
        .map(|entry| {
            let biome = vanilla_biomes::by_key(&entry.biome)
                .ok_or_else(|| RegistryError::UnknownBiome(entry.biome.clone()))?;
            let point = entry
                .parameters
                .point()
                .map_err(|source| RegistryError::InvalidEntry {
                    biome: entry.biome,
                    source,
                })?;
            Ok((point, biome))
        })
        .collect()
}

fn presets() -> Result<BTreeMap<String, Vec<BiomeEntry>>, RegistryError> {
    Ok(serde_json::from_str(PRESETS_JSON)?)
}

/// Names of the bundled presets, e.g. `minecraft:nether`.
pub fn preset_names() -> Result<Vec<String>, RegistryError> {
    Ok(presets()?.into_keys().collect())
}

/// Build the parameter list of a bundled preset.
///
/// `name` may omit the `minecraft:` namespace.
pub fn preset(name: &str) -> Result<ParameterList<BiomeRef>, RegistryError> {
    let mut presets = presets()?;
    let key = if name.contains(':') {
        name.to_owned()
    } else {
        format!("minecraft:{name}")
    };
    let entries = presets
        .remove(&key)
        .ok_or_else(|| RegistryError::UnknownPreset(name.to_owned()))?;

    let list = ParameterList::new(resolve(entries)?)?;
    tracing::debug!(preset = %key, regions = list.len(), "loaded multi-noise preset");
    Ok(list)
}

/// Build a parameter list from a JSON array of `{ biome, parameters }` entries.
pub fn parameter_list_from_json(json: &str) -> Result<ParameterList<BiomeRef>, RegistryError> {
    let entries: Vec<BiomeEntry> = serde_json::from_str(json)?;
    Ok(ParameterList::new(resolve(entries)?)?)
}
