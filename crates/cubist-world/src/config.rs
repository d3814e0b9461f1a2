use std::fs;
use std::path::Path;

use cubist_chunk::{
    BufferPolicy, ChunkDims, DEFAULT_CHUNK_HEIGHT, DEFAULT_CHUNK_LENGTH, DEFAULT_CHUNK_WIDTH,
};
use serde::{Deserialize, Serialize};

use crate::error::WorldError;

const DEFAULT_WORLD_CHUNKS: usize = 4;

/// World layout loaded from TOML. Every field has a default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Chunks along X.
    pub world_width: usize,
    /// Chunks along Z.
    pub world_length: usize,
    /// Worker threads for bulk operations; 0 uses the global rayon pool.
    pub threads: usize,
    pub buffers: BufferPolicy,
    pub chunk: ChunkSize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_width: DEFAULT_WORLD_CHUNKS,
            world_length: DEFAULT_WORLD_CHUNKS,
            threads: 0,
            buffers: BufferPolicy::default(),
            chunk: ChunkSize::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkSize {
    pub width: usize,
    pub height: usize,
    pub length: usize,
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHUNK_WIDTH,
            height: DEFAULT_CHUNK_HEIGHT,
            length: DEFAULT_CHUNK_LENGTH,
        }
    }
}

impl WorldConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, WorldError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Checks the layout and returns the chunk dimensions it describes.
    pub fn validate(&self) -> Result<ChunkDims, WorldError> {
        if self.world_width == 0 || self.world_length == 0 {
            return Err(WorldError::InvalidConfig(format!(
                "world must be at least 1x1 chunks, got {}x{}",
                self.world_width, self.world_length
            )));
        }
        let dims = ChunkDims::new(self.chunk.width, self.chunk.height, self.chunk.length)
            .map_err(|e| WorldError::InvalidConfig(e.to_string()))?;
        // world-space block coordinates are i32
        let fits = |chunks: usize, blocks: usize| {
            chunks
                .checked_mul(blocks)
                .is_some_and(|n| n <= i32::MAX as usize)
        };
        if !fits(self.world_width, dims.width()) || !fits(self.world_length, dims.length()) {
            return Err(WorldError::InvalidConfig(format!(
                "world of {}x{} chunks of {}x{} blocks exceeds the i32 coordinate range",
                self.world_width,
                self.world_length,
                dims.width(),
                dims.length()
            )));
        }
        Ok(dims)
    }
}
