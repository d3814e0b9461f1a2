//! Chunk block storage, addressing, and per-chunk mesh buffers.
#![forbid(unsafe_code)]

mod coord;
mod dims;
mod error;
mod vertex;

pub use coord::ChunkCoord;
pub use dims::{
    ChunkDims, DEFAULT_CHUNK_HEIGHT, DEFAULT_CHUNK_LENGTH, DEFAULT_CHUNK_WIDTH, MAX_CHUNK_VOLUME,
};
pub use error::ChunkError;
pub use vertex::{BufferPolicy, FACES_PER_CUBE, INDICES_PER_FACE, VERTICES_PER_FACE, VertexData};

use cubist_blocks::{Block, BlockType};
use cubist_geom::{Direction, IVec3};

/// Lifecycle of a chunk. Any block mutation drops a meshed chunk back to `Authored`
/// until the owning chunk is re-meshed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChunkState {
    Uninitialized,
    BlocksInitialized,
    Authored,
    Meshed,
}

/// Read-only view of a chunk's blocks, used by the mesher while the vertex
/// buffers are borrowed mutably.
#[derive(Clone, Copy, Debug)]
pub struct ChunkView<'a> {
    dims: ChunkDims,
    blocks: &'a [Block],
}

impl<'a> ChunkView<'a> {
    #[inline]
    pub fn dims(&self) -> ChunkDims {
        self.dims
    }

    #[inline]
    pub fn blocks(&self) -> &'a [Block] {
        self.blocks
    }

    #[inline]
    pub fn block_at(&self, pos: IVec3) -> Option<&'a Block> {
        self.dims.index_of(pos).and_then(|i| self.blocks.get(i))
    }

    /// Solid means any type but `Empty`. Positions outside the chunk are never solid.
    #[inline]
    pub fn is_solid_at(&self, pos: IVec3) -> bool {
        self.block_at(pos).is_some_and(Block::is_solid)
    }

    #[inline]
    pub fn is_adjacent_solid(&self, dir: Direction, pos: IVec3) -> bool {
        self.is_solid_at(pos + dir.offset())
    }
}

#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    dims: ChunkDims,
    blocks: Vec<Block>,
    mesh: VertexData,
    state: ChunkState,
}

impl Chunk {
    /// Allocates block storage and vertex buffers; blocks stay uninitialized until
    /// [`Chunk::initialize_blocks`].
    pub fn new(coord: ChunkCoord, dims: ChunkDims, policy: BufferPolicy) -> Self {
        let volume = dims.volume();
        Self {
            coord,
            dims,
            blocks: Vec::with_capacity(volume),
            mesh: VertexData::for_policy(policy, volume),
            state: ChunkState::Uninitialized,
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn dims(&self) -> ChunkDims {
        self.dims
    }

    #[inline]
    pub fn state(&self) -> ChunkState {
        self.state
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn mesh(&self) -> &VertexData {
        &self.mesh
    }

    /// World-space position of local block (0,0,0).
    #[inline]
    pub fn world_origin(&self) -> IVec3 {
        IVec3::new(
            self.coord.cx * self.dims.width() as i32,
            0,
            self.coord.cz * self.dims.length() as i32,
        )
    }

    #[inline]
    pub fn block_index(&self, x: usize, y: usize, z: usize) -> usize {
        self.dims.index(x, y, z)
    }

    #[inline]
    pub fn block_position(&self, index: usize) -> IVec3 {
        self.dims.position(index)
    }

    #[inline]
    pub fn contains_local(&self, pos: IVec3) -> bool {
        self.dims.contains(pos)
    }

    /// Resets every cell to an `Empty` block at its grid position.
    pub fn initialize_blocks(&mut self) {
        let dims = self.dims;
        self.blocks.clear();
        self.blocks
            .extend((0..dims.volume()).map(|i| Block::empty_at(dims.position(i))));
        self.state = ChunkState::BlocksInitialized;
    }

    pub fn block(&self, index: usize) -> Result<&Block, ChunkError> {
        self.check_index(index)?;
        Ok(&self.blocks[index])
    }

    pub fn block_at(&self, pos: IVec3) -> Result<&Block, ChunkError> {
        let index = self.index_for(pos)?;
        self.block(index)
    }

    pub fn set_block(&mut self, index: usize, ty: BlockType) -> Result<(), ChunkError> {
        self.check_index(index)?;
        self.blocks[index].block_type = ty;
        self.state = ChunkState::Authored;
        Ok(())
    }

    pub fn set_block_at(&mut self, pos: IVec3, ty: BlockType) -> Result<(), ChunkError> {
        let index = self.index_for(pos)?;
        self.set_block(index, ty)
    }

    #[inline]
    pub fn remove_block(&mut self, index: usize) -> Result<(), ChunkError> {
        self.set_block(index, BlockType::Empty)
    }

    #[inline]
    pub fn remove_block_at(&mut self, pos: IVec3) -> Result<(), ChunkError> {
        self.set_block_at(pos, BlockType::Empty)
    }

    /// Sets every block to `ty`, initializing storage first if needed.
    pub fn fill(&mut self, ty: BlockType) {
        self.fill_with(|_| ty);
    }

    /// Sets each block to `f(local_position)`, initializing storage first if needed.
    pub fn fill_with(&mut self, mut f: impl FnMut(IVec3) -> BlockType) {
        if self.state == ChunkState::Uninitialized {
            self.initialize_blocks();
        }
        for b in &mut self.blocks {
            b.block_type = f(b.position);
        }
        self.state = ChunkState::Authored;
    }

    #[inline]
    pub fn is_adjacent_solid(&self, dir: Direction, pos: IVec3) -> bool {
        self.view().is_adjacent_solid(dir, pos)
    }

    #[inline]
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }

    #[inline]
    pub fn is_all_empty(&self) -> bool {
        !self.blocks.iter().any(Block::is_solid)
    }

    #[inline]
    pub fn view(&self) -> ChunkView<'_> {
        ChunkView {
            dims: self.dims,
            blocks: &self.blocks,
        }
    }

    /// Splits the chunk into its block view and its vertex buffers for one mesh build.
    #[inline]
    pub fn mesh_parts(&mut self) -> (ChunkView<'_>, &mut VertexData) {
        (
            ChunkView {
                dims: self.dims,
                blocks: &self.blocks,
            },
            &mut self.mesh,
        )
    }

    /// Records that the vertex buffers now reflect the blocks.
    pub fn mark_meshed(&mut self) {
        if self.state != ChunkState::Uninitialized {
            self.state = ChunkState::Meshed;
        }
    }

    fn check_index(&self, index: usize) -> Result<(), ChunkError> {
        if self.state == ChunkState::Uninitialized {
            return Err(ChunkError::NotInitialized);
        }
        if index >= self.blocks.len() {
            return Err(ChunkError::IndexOutOfRange {
                index,
                len: self.blocks.len(),
            });
        }
        Ok(())
    }

    fn index_for(&self, pos: IVec3) -> Result<usize, ChunkError> {
        self.dims
            .index_of(pos)
            .ok_or(ChunkError::PositionOutOfRange {
                x: pos.x,
                y: pos.y,
                z: pos.z,
                width: self.dims.width(),
                height: self.dims.height(),
                length: self.dims.length(),
            })
    }
}
