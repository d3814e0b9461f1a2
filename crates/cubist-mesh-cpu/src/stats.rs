use std::iter::Sum;
use std::ops::AddAssign;

/// Counters from one or more chunk mesh builds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshStats {
    pub chunks: usize,
    pub blocks_visited: usize,
    pub blocks_emitted: usize,
    /// Solid blocks skipped because every neighbor is solid.
    pub blocks_enclosed: usize,
    /// Emitted blocks whose type had no mapping entry (rendered with layer 0).
    pub blocks_unmapped: usize,
    pub faces: usize,
    pub vertices: usize,
    pub indices: usize,
    pub elapsed_ms: f64,
}

impl AddAssign for MeshStats {
    fn add_assign(&mut self, rhs: MeshStats) {
        self.chunks += rhs.chunks;
        self.blocks_visited += rhs.blocks_visited;
        self.blocks_emitted += rhs.blocks_emitted;
        self.blocks_enclosed += rhs.blocks_enclosed;
        self.blocks_unmapped += rhs.blocks_unmapped;
        self.faces += rhs.faces;
        self.vertices += rhs.vertices;
        self.indices += rhs.indices;
        self.elapsed_ms += rhs.elapsed_ms;
    }
}

impl Sum for MeshStats {
    fn sum<I: Iterator<Item = MeshStats>>(iter: I) -> Self {
        iter.fold(MeshStats::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}
