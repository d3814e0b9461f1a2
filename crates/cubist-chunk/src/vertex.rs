use cubist_geom::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

pub const FACES_PER_CUBE: usize = 6;
pub const VERTICES_PER_FACE: usize = 4;
pub const INDICES_PER_FACE: usize = 6;

/// How a chunk sizes its vertex buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BufferPolicy {
    /// Reserve room for every block emitting all six faces; rebuilds never reallocate.
    #[default]
    Preallocate,
    /// Start empty and grow on demand.
    Grow,
}

/// Parallel vertex streams for one chunk mesh.
///
/// `uvs[i].z` is the texture-array layer of the face owning vertex `i`, not a
/// third texture axis.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct VertexData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub tangents: Vec<Vec4>,
    pub uvs: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl VertexData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers sized for `blocks` cubes with every face visible.
    pub fn with_block_capacity(blocks: usize) -> Self {
        let mut v = Self::new();
        v.reserve_quads(blocks * FACES_PER_CUBE);
        v
    }

    pub fn for_policy(policy: BufferPolicy, blocks: usize) -> Self {
        match policy {
            BufferPolicy::Preallocate => Self::with_block_capacity(blocks),
            BufferPolicy::Grow => Self::new(),
        }
    }

    /// Clears all arrays but retains capacity for reuse across rebuilds.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.tangents.clear();
        self.uvs.clear();
        self.indices.clear();
    }

    /// Pre-reserve capacity for `n_quads` additional quads.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        let verts = n_quads * VERTICES_PER_FACE;
        self.positions.reserve(verts);
        self.normals.reserve(verts);
        self.tangents.reserve(verts);
        self.uvs.reserve(verts);
        self.indices.reserve(n_quads * INDICES_PER_FACE);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.positions.len() / VERTICES_PER_FACE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex capacity currently reserved.
    #[inline]
    pub fn vertex_capacity(&self) -> usize {
        self.positions.capacity()
    }

    /// True when the stream lengths agree: equal per-vertex arrays, 6 indices per 4 vertices,
    /// and every index in range.
    pub fn is_consistent(&self) -> bool {
        let n = self.positions.len();
        n % VERTICES_PER_FACE == 0
            && self.normals.len() == n
            && self.tangents.len() == n
            && self.uvs.len() == n
            && self.indices.len() == n / VERTICES_PER_FACE * INDICES_PER_FACE
            && self.indices.iter().all(|&i| (i as usize) < n)
    }
}
