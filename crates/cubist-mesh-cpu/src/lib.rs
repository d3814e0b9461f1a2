//! CPU chunk mesher: unit-cube face tables, face emission, and per-chunk culling.
#![forbid(unsafe_code)]

mod build;
mod emit;
mod faces;
mod stats;
pub mod tables;

pub use build::{build_chunk_mesh, exposed_faces};
pub use emit::emit_cube;
pub use faces::IncludeFaces;
pub use stats::MeshStats;
