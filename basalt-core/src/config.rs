//! Server configuration, stored as JSON5 next to the binary.

use std::path::Path;
use std::{fs, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error that can occur while loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Config I/O error: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON5 for [`ServerConfig`].
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The default config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// World seed. Empty picks a random seed, a number is used as-is and any
    /// other text is hashed.
    pub seed: String,
    /// Default log filter, e.g. `info` or `basalt_core=debug`. `RUST_LOG` wins.
    pub log_level: String,
    /// World generation settings.
    pub world_gen: WorldGenConfig,
}

/// Biome generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Multi-noise preset name, e.g. `minecraft:nether`.
    pub preset: String,
    /// Chunks generated around the origin in each direction.
    pub radius: u32,
    /// Lowest section y.
    pub min_section_y: i32,
    /// Number of 16-block sections per chunk.
    pub section_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            seed: String::new(),
            log_level: "info".to_owned(),
            world_gen: WorldGenConfig::default(),
        }
    }
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            preset: "minecraft:nether".to_owned(),
            radius: 8,
            min_section_y: 0,
            section_count: 8,
        }
    }
}

impl ServerConfig {
    /// Parse a config from JSON5 text. Missing fields take their defaults.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json5::from_str(text)?)
    }

    /// Load the config at `path`, writing the defaults there first if the file
    /// does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string_pretty(&config)?)?;
            log::info!("Created default config at {}", path.display());
            return Ok(config);
        }

        Self::parse(&fs::read_to_string(path)?)
    }

    /// Resolve the configured seed to a world seed.
    #[must_use]
    pub fn world_seed(&self) -> i64 {
        if self.seed.is_empty() {
            rand::random()
        } else {
            self.seed.parse().unwrap_or_else(|_| {
                let mut hash: i64 = 0;
                for byte in self.seed.bytes() {
                    hash = hash.wrapping_mul(31).wrapping_add(i64::from(byte));
                }
                hash
            })
        }
    }
}
