//! Core server logic for Basalt: configuration, biome sources and per-chunk
//! biome generation.

pub mod chunk;
pub mod config;
pub mod worldgen;
