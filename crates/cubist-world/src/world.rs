use std::sync::Arc;
use std::time::Instant;

use cubist_blocks::{Block, BlockMapping, BlockType};
use cubist_chunk::{Chunk, ChunkCoord, ChunkDims};
use cubist_geom::IVec3;
use cubist_mesh_cpu::{MeshStats, build_chunk_mesh};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::WorldConfig;
use crate::error::WorldError;

/// Where a world-space block lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldLocation {
    pub chunk: ChunkCoord,
    pub chunk_index: usize,
    pub local: IVec3,
    pub block_index: usize,
}

/// Fixed `world_width x world_length` grid of chunks, stored row-major by `cz`.
///
/// World X/Z split into chunk slot and local offset by Euclidean division; Y is
/// not subdivided, so the world is exactly one chunk tall.
#[derive(Debug)]
pub struct ChunkWorld {
    width: usize,
    length: usize,
    dims: ChunkDims,
    mapping: Arc<BlockMapping>,
    chunks: Vec<Chunk>,
    pool: Option<ThreadPool>,
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

// Runs `op` on the dedicated pool when one exists, otherwise on the global pool.
fn run_in<R: Send>(pool: Option<&ThreadPool>, op: impl FnOnce() -> R + Send) -> R {
    match pool {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

impl ChunkWorld {
    /// Validates `config` and allocates every chunk. Blocks stay uninitialized
    /// until [`ChunkWorld::initialize`] or a fill.
    pub fn new(config: &WorldConfig, mapping: Arc<BlockMapping>) -> Result<Self, WorldError> {
        let dims = config.validate()?;
        let pool = match config.threads {
            0 => None,
            n => Some(
                ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("cubist-world-{i}"))
                    .build()?,
            ),
        };
        let (width, length) = (config.world_width, config.world_length);
        let chunks = (0..width * length)
            .map(|i| {
                let coord = ChunkCoord::new((i % width) as i32, (i / width) as i32);
                Chunk::new(coord, dims, config.buffers)
            })
            .collect();
        log::info!(
            "world {}x{} chunks of {}x{}x{} blocks, buffers={:?}, threads={}",
            width,
            length,
            dims.width(),
            dims.height(),
            dims.length(),
            config.buffers,
            config.threads
        );
        Ok(Self {
            width,
            length,
            dims,
            mapping,
            chunks,
            pool,
        })
    }

    #[inline]
    pub fn dims(&self) -> ChunkDims {
        self.dims
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Size of the world in blocks along X, Y and Z.
    #[inline]
    pub fn world_size(&self) -> (usize, usize, usize) {
        (
            self.width * self.dims.width(),
            self.dims.height(),
            self.length * self.dims.length(),
        )
    }

    #[inline]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    #[inline]
    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    #[inline]
    pub fn chunk_at(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunk_index(coord).map(|i| &self.chunks[i])
    }

    #[inline]
    pub fn chunk_index(&self, coord: ChunkCoord) -> Option<usize> {
        let in_range = coord.cx >= 0
            && coord.cz >= 0
            && (coord.cx as usize) < self.width
            && (coord.cz as usize) < self.length;
        in_range.then(|| coord.cx as usize + coord.cz as usize * self.width)
    }

    #[inline]
    pub fn chunk_coord(&self, index: usize) -> Option<ChunkCoord> {
        (index < self.chunks.len())
            .then(|| ChunkCoord::new((index % self.width) as i32, (index / self.width) as i32))
    }

    /// Resolves a world-space block position to its chunk and local block.
    pub fn locate(&self, pos: IVec3) -> Result<WorldLocation, WorldError> {
        let outside = || WorldError::OutsideWorld {
            x: pos.x,
            y: pos.y,
            z: pos.z,
        };
        let w = self.dims.width() as i32;
        let l = self.dims.length() as i32;
        let chunk = ChunkCoord::new(pos.x.div_euclid(w), pos.z.div_euclid(l));
        let local = IVec3::new(pos.x.rem_euclid(w), pos.y, pos.z.rem_euclid(l));
        let chunk_index = self.chunk_index(chunk).ok_or_else(outside)?;
        let block_index = self.dims.index_of(local).ok_or_else(outside)?;
        Ok(WorldLocation {
            chunk,
            chunk_index,
            local,
            block_index,
        })
    }

    /// Inverse of [`ChunkWorld::locate`].
    #[inline]
    pub fn to_world(&self, chunk: ChunkCoord, local: IVec3) -> IVec3 {
        IVec3::new(
            chunk.cx * self.dims.width() as i32 + local.x,
            local.y,
            chunk.cz * self.dims.length() as i32 + local.z,
        )
    }

    pub fn block(&self, pos: IVec3) -> Result<&Block, WorldError> {
        let loc = self.locate(pos)?;
        Ok(self.chunks[loc.chunk_index].block(loc.block_index)?)
    }

    /// Resets every chunk to empty blocks at their grid positions.
    pub fn initialize(&mut self) {
        let start = Instant::now();
        let chunks = &mut self.chunks;
        run_in(self.pool.as_ref(), || {
            chunks.par_iter_mut().for_each(Chunk::initialize_blocks)
        });
        log::info!(
            target: "perf",
            "ms={:.2} world_initialize chunks={}",
            elapsed_ms(start),
            self.chunks.len()
        );
    }

    pub fn fill_all(&mut self, ty: BlockType) {
        let start = Instant::now();
        let chunks = &mut self.chunks;
        run_in(self.pool.as_ref(), || {
            chunks.par_iter_mut().for_each(|c| c.fill(ty))
        });
        log::info!(
            target: "perf",
            "ms={:.2} world_fill_all block={} chunks={}",
            elapsed_ms(start),
            ty,
            self.chunks.len()
        );
    }

    /// Sets every block to `f(world_position)`.
    pub fn fill_with<F>(&mut self, f: F)
    where
        F: Fn(IVec3) -> BlockType + Sync,
    {
        let start = Instant::now();
        let chunks = &mut self.chunks;
        run_in(self.pool.as_ref(), || {
            chunks.par_iter_mut().for_each(|c| {
                let origin = c.world_origin();
                c.fill_with(|local| f(origin + local));
            })
        });
        log::info!(
            target: "perf",
            "ms={:.2} world_fill_with chunks={}",
            elapsed_ms(start),
            self.chunks.len()
        );
    }

    /// Meshes every chunk and returns the combined counters.
    pub fn build_all_meshes(&mut self) -> MeshStats {
        let start = Instant::now();
        let mapping: &BlockMapping = &self.mapping;
        let chunks = &mut self.chunks;
        let stats: MeshStats = run_in(self.pool.as_ref(), || {
            chunks
                .par_iter_mut()
                .map(|c| build_chunk_mesh(c, mapping))
                .sum()
        });
        log::info!(
            target: "perf",
            "ms={:.2} world_build_all_meshes chunks={} emitted={} enclosed={} faces={} verts={} \
             idx={}",
            elapsed_ms(start),
            stats.chunks,
            stats.blocks_emitted,
            stats.blocks_enclosed,
            stats.faces,
            stats.vertices,
            stats.indices
        );
        stats
    }

    /// Clears the block at `pos` and re-meshes only its chunk.
    pub fn remove_block(&mut self, pos: IVec3) -> Result<MeshStats, WorldError> {
        self.set_block(pos, BlockType::Empty)
    }

    /// Writes `ty` at `pos` and re-meshes only its chunk.
    pub fn set_block(&mut self, pos: IVec3, ty: BlockType) -> Result<MeshStats, WorldError> {
        let loc = self.locate(pos)?;
        let chunk = &mut self.chunks[loc.chunk_index];
        chunk.set_block(loc.block_index, ty)?;
        let stats = build_chunk_mesh(chunk, &self.mapping);
        log::debug!(
            "set ({}, {}, {}) to {} in chunk ({}, {}); remeshed {} faces",
            pos.x,
            pos.y,
            pos.z,
            ty,
            loc.chunk.cx,
            loc.chunk.cz,
            stats.faces
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubist_chunk::{ChunkError, ChunkState};

    fn world(w: usize, l: usize) -> ChunkWorld {
        let cfg = WorldConfig {
            world_width: w,
            world_length: l,
            ..WorldConfig::default()
        };
        ChunkWorld::new(&cfg, Arc::new(BlockMapping::builtin())).unwrap()
    }

    #[test]
    fn chunks_are_laid_out_row_major() {
        let w = world(3, 2);
        assert_eq!(w.chunk_count(), 6);
        for (i, c) in w.chunks().iter().enumerate() {
            assert_eq!(w.chunk_index(c.coord()), Some(i));
            assert_eq!(w.chunk_coord(i), Some(c.coord()));
        }
        assert_eq!(w.chunk_coord(6), None);
        assert_eq!(w.chunk_index(ChunkCoord::new(3, 0)), None);
        assert_eq!(w.chunk_index(ChunkCoord::new(0, -1)), None);
        assert_eq!(w.world_size(), (48, 16, 32));
    }

    #[test]
    fn locate_splits_world_coordinates() {
        let w = world(2, 2);
        let loc = w.locate(IVec3::new(17, 5, 31)).unwrap();
        assert_eq!(loc.chunk, ChunkCoord::new(1, 1));
        assert_eq!(loc.chunk_index, 3);
        assert_eq!(loc.local, IVec3::new(1, 5, 15));
        assert_eq!(loc.block_index, w.dims().index(1, 5, 15));
        assert_eq!(w.to_world(loc.chunk, loc.local), IVec3::new(17, 5, 31));
    }

    #[test]
    fn locate_rejects_outside_positions() {
        let w = world(2, 2);
        for p in [
            IVec3::new(-1, 0, 0),
            IVec3::new(0, 0, 32),
            IVec3::new(0, 16, 0),
            IVec3::new(0, -1, 0),
        ] {
            assert!(matches!(w.locate(p), Err(WorldError::OutsideWorld { .. })), "{p:?}");
        }
    }

    #[test]
    fn access_before_initialize_fails() {
        let mut w = world(1, 1);
        assert!(matches!(
            w.block(IVec3::ZERO),
            Err(WorldError::Chunk(ChunkError::NotInitialized))
        ));
        assert!(w.remove_block(IVec3::ZERO).is_err());
        w.initialize();
        assert_eq!(w.block(IVec3::ZERO).unwrap().block_type, BlockType::Empty);
        assert!(w.chunks().iter().all(|c| c.state() == ChunkState::BlocksInitialized));
    }

    #[test]
    fn dedicated_pool_builds_meshes() {
        let cfg = WorldConfig {
            world_width: 2,
            world_length: 1,
            threads: 2,
            ..WorldConfig::default()
        };
        let mut w = ChunkWorld::new(&cfg, Arc::new(BlockMapping::builtin())).unwrap();
        w.fill_all(BlockType::Stone);
        let stats = w.build_all_meshes();
        assert_eq!(stats.chunks, 2);
        assert_eq!(stats.faces, 2 * 6 * 256);
    }
}
