use std::time::Instant;

use cubist_blocks::BlockMapping;
use cubist_chunk::{Chunk, ChunkView};
use cubist_geom::{Direction, IVec3};

use crate::emit::emit_cube;
use crate::faces::IncludeFaces;
use crate::stats::MeshStats;

/// Faces of the block at `pos` whose neighbor is not solid. Neighbors outside the
/// chunk count as not solid, so chunk borders are always exposed.
#[inline]
pub fn exposed_faces(view: &ChunkView<'_>, pos: IVec3) -> IncludeFaces {
    Direction::ALL
        .into_iter()
        .filter(|&d| !view.is_adjacent_solid(d, pos))
        .collect()
}

/// Rebuilds `chunk`'s vertex buffers in place from its current blocks.
///
/// Buffers are cleared but keep their capacity. Vertex positions are chunk-local.
pub fn build_chunk_mesh(chunk: &mut Chunk, mapping: &BlockMapping) -> MeshStats {
    let start = Instant::now();
    let coord = chunk.coord();
    let mut stats = MeshStats {
        chunks: 1,
        ..MeshStats::default()
    };

    let (view, out) = chunk.mesh_parts();
    out.clear_keep_capacity();
    let mut next_vertex: u32 = 0;

    for block in view.blocks() {
        stats.blocks_visited += 1;
        if !block.is_solid() {
            continue;
        }
        let faces = exposed_faces(&view, block.position);
        if faces.is_empty() {
            stats.blocks_enclosed += 1;
            continue;
        }
        if !mapping.contains(block.block_type) {
            stats.blocks_unmapped += 1;
        }
        let materials = mapping.materials_for(block.block_type);
        stats.faces += emit_cube(out, block.position, faces, &materials, &mut next_vertex);
        stats.blocks_emitted += 1;
    }

    stats.vertices = out.vertex_count();
    stats.indices = out.index_count();
    chunk.mark_meshed();
    stats.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if stats.blocks_unmapped > 0 {
        log::trace!(
            "chunk ({}, {}): {} blocks without a mapping used layer 0",
            coord.cx,
            coord.cz,
            stats.blocks_unmapped
        );
    }
    log::debug!(
        "meshed chunk ({}, {}) emitted={} enclosed={} faces={} verts={} idx={} in {:.2}ms",
        coord.cx,
        coord.cz,
        stats.blocks_emitted,
        stats.blocks_enclosed,
        stats.faces,
        stats.vertices,
        stats.indices,
        stats.elapsed_ms
    );
    stats
}
