//! Shared utilities for the Basalt server.
//!
//! Hosts the [`climate`] module (the quantized climate space and the R-tree used by
//! multi-noise biome sources) and [`Identifier`].

pub mod climate;
mod identifier;

pub use identifier::{Identifier, InvalidIdentifier};
