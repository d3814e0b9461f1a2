//! Finite grid of chunks: world/local addressing, bulk authoring, and meshing.
#![forbid(unsafe_code)]

mod config;
mod error;
mod world;

pub use config::{ChunkSize, WorldConfig};
pub use error::WorldError;
pub use world::{ChunkWorld, WorldLocation};
