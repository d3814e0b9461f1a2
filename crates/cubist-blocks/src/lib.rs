//! Block types and the block-type to face-material mapping.
#![forbid(unsafe_code)]

pub mod config;
pub mod mapping;
pub mod types;

pub use mapping::{BlockDefinition, BlockMapping, MappingError, MaterialIndexMapping};
pub use types::{Block, BlockType};
