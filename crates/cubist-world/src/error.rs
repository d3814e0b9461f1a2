use cubist_chunk::ChunkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("invalid world config: {0}")]
    InvalidConfig(String),
    #[error("position ({x}, {y}, {z}) is outside the world")]
    OutsideWorld { x: i32, y: i32, z: i32 },
    #[error(transparent)]
    Chunk(#[from] ChunkError),
    #[error("failed to read world config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse world config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
