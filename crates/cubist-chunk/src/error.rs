use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("block index {index} out of range (chunk holds {len} blocks)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("local position ({x}, {y}, {z}) outside chunk bounds {width}x{height}x{length}")]
    PositionOutOfRange {
        x: i32,
        y: i32,
        z: i32,
        width: usize,
        height: usize,
        length: usize,
    },
    #[error(
        "invalid chunk dimensions {width}x{height}x{length}: each axis must be at least 1 \
         and a fully exposed chunk must fit u32 vertex indices"
    )]
    InvalidDimensions {
        width: usize,
        height: usize,
        length: usize,
    },
    #[error("chunk blocks have not been initialized")]
    NotInitialized,
}
