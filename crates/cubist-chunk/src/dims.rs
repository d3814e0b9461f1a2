use cubist_geom::IVec3;

use crate::error::ChunkError;
use crate::vertex::{FACES_PER_CUBE, VERTICES_PER_FACE};

pub const DEFAULT_CHUNK_WIDTH: usize = 16;
pub const DEFAULT_CHUNK_HEIGHT: usize = 16;
pub const DEFAULT_CHUNK_LENGTH: usize = 16;

/// Largest block count whose fully exposed mesh still has `u32`-addressable vertices.
pub const MAX_CHUNK_VOLUME: usize = u32::MAX as usize / (FACES_PER_CUBE * VERTICES_PER_FACE);

/// Validated chunk extents: `width` along X, `height` along Y, `length` along Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkDims {
    width: usize,
    height: usize,
    length: usize,
}

impl Default for ChunkDims {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHUNK_WIDTH,
            height: DEFAULT_CHUNK_HEIGHT,
            length: DEFAULT_CHUNK_LENGTH,
        }
    }
}

impl ChunkDims {
    pub fn new(width: usize, height: usize, length: usize) -> Result<Self, ChunkError> {
        let fits_i32 = |v: usize| i32::try_from(v).is_ok();
        let volume = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(length));
        if width == 0
            || height == 0
            || length == 0
            || !fits_i32(width)
            || !fits_i32(height)
            || !fits_i32(length)
            || volume.is_none_or(|v| v > MAX_CHUNK_VOLUME)
        {
            return Err(ChunkError::InvalidDimensions {
                width,
                height,
                length,
            });
        }
        Ok(Self {
            width,
            height,
            length,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn volume(&self) -> usize {
        self.width * self.height * self.length
    }

    /// Linear index `x + z*W + y*W*L`. Caller guarantees the coordinates are in range.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + z * self.width + y * self.width * self.length
    }

    /// Inverse of [`ChunkDims::index`].
    #[inline]
    pub fn position(&self, index: usize) -> IVec3 {
        let layer = self.width * self.length;
        let y = index / layer;
        let rem = index % layer;
        IVec3::new((rem % self.width) as i32, y as i32, (rem / self.width) as i32)
    }

    #[inline]
    pub fn contains(&self, pos: IVec3) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.z >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
            && (pos.z as usize) < self.length
    }

    /// Index of `pos`, or `None` when it lies outside the chunk.
    #[inline]
    pub fn index_of(&self, pos: IVec3) -> Option<usize> {
        self.contains(pos)
            .then(|| self.index(pos.x as usize, pos.y as usize, pos.z as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_axes() {
        assert!(ChunkDims::new(0, 16, 16).is_err());
        assert!(ChunkDims::new(16, 0, 16).is_err());
        assert!(ChunkDims::new(16, 16, 0).is_err());
        assert!(ChunkDims::new(1, 1, 1).is_ok());
    }

    #[test]
    fn rejects_volumes_past_u32_vertex_range() {
        let side = 1usize << 21;
        assert_eq!(
            ChunkDims::new(side, side, side),
            Err(ChunkError::InvalidDimensions {
                width: side,
                height: side,
                length: side
            })
        );
        // the largest accepted chunk still indexes every vertex with u32
        let d = ChunkDims::new(MAX_CHUNK_VOLUME, 1, 1).unwrap();
        assert!(d.volume() * FACES_PER_CUBE * VERTICES_PER_FACE <= u32::MAX as usize);
        assert!(ChunkDims::new(MAX_CHUNK_VOLUME + 1, 1, 1).is_err());
        assert!(ChunkDims::new(4096, 4096, 4096).is_err());
    }

    #[test]
    fn default_is_sixteen_cubed() {
        let d = ChunkDims::default();
        assert_eq!(d.volume(), 4096);
        assert_eq!(d.index(15, 15, 15), 4095);
        assert_eq!(d.index(1, 0, 0), 1);
        assert_eq!(d.index(0, 0, 1), 16);
        assert_eq!(d.index(0, 1, 0), 256);
    }

    #[test]
    fn index_of_rejects_outside() {
        let d = ChunkDims::default();
        assert_eq!(d.index_of(IVec3::new(-1, 0, 0)), None);
        assert_eq!(d.index_of(IVec3::new(0, 16, 0)), None);
        assert_eq!(d.index_of(IVec3::new(2, 3, 4)), Some(2 + 4 * 16 + 3 * 256));
    }
}
