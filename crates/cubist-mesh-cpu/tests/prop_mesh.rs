use cubist_blocks::{BlockMapping, BlockType, MaterialIndexMapping};
use cubist_chunk::{BufferPolicy, Chunk, ChunkCoord, ChunkDims, VertexData};
use cubist_geom::{Direction, IVec3};
use cubist_mesh_cpu::{IncludeFaces, build_chunk_mesh, emit_cube, exposed_faces};
use proptest::prelude::*;

fn random_chunk(sx: usize, sy: usize, sz: usize, bits: &[bool]) -> Chunk {
    let dims = ChunkDims::new(sx, sy, sz).unwrap();
    let mut c = Chunk::new(ChunkCoord::default(), dims, BufferPolicy::Grow);
    c.initialize_blocks();
    c.fill_with(|p| {
        let i = dims.index(p.x as usize, p.y as usize, p.z as usize);
        if bits[i % bits.len()] { BlockType::Stone } else { BlockType::Empty }
    });
    c
}

proptest! {
    // Any face subset emits exactly 4 vertices and 6 in-range indices per face
    #[test]
    fn emit_counts_follow_mask(bits in any::<u8>(), start in 0u32..10_000, layer in 0u32..64) {
        let faces = IncludeFaces::from_bits(bits);
        let mut out = VertexData::new();
        let mut next = start;
        let mats = MaterialIndexMapping::uniform(layer);
        let n = emit_cube(&mut out, IVec3::ZERO, faces, &mats, &mut next);
        prop_assert_eq!(n, faces.len());
        prop_assert_eq!(out.vertex_count(), 4 * n);
        prop_assert_eq!(out.index_count(), 6 * n);
        prop_assert_eq!(next, start + 4 * n as u32);
        prop_assert!(out.indices.iter().all(|&i| i >= start && i < next));
        prop_assert!(out.uvs.iter().all(|uv| uv.z == layer as f32));
    }

    // A block's mask clears exactly the directions with a solid neighbor
    #[test]
    fn mask_matches_adjacency(bits in prop::collection::vec(any::<bool>(), 1..64)) {
        let c = random_chunk(3, 3, 3, &bits);
        let view = c.view();
        for b in view.blocks() {
            let mask = exposed_faces(&view, b.position);
            for d in Direction::ALL {
                prop_assert_eq!(mask.contains(d), !view.is_adjacent_solid(d, b.position));
            }
        }
    }

    // Face count equals the number of solid/non-solid (or border) adjacencies
    #[test]
    fn faces_match_exposed_adjacencies(
        sx in 1usize..=6, sy in 1usize..=6, sz in 1usize..=6,
        bits in prop::collection::vec(any::<bool>(), 1..64),
    ) {
        let mut c = random_chunk(sx, sy, sz, &bits);
        let mut want = 0usize;
        for b in c.blocks().iter().filter(|b| b.is_solid()) {
            for d in Direction::ALL {
                if !c.is_adjacent_solid(d, b.position) {
                    want += 1;
                }
            }
        }
        let stats = build_chunk_mesh(&mut c, &BlockMapping::builtin());
        prop_assert_eq!(stats.faces, want);
        prop_assert!(c.mesh().is_consistent());
        prop_assert_eq!(stats.blocks_emitted + stats.blocks_enclosed, c.solid_count());
    }

    // Meshing is a pure function of the blocks: rebuilding gives identical buffers
    #[test]
    fn rebuild_is_deterministic(bits in prop::collection::vec(any::<bool>(), 1..64)) {
        let mapping = BlockMapping::builtin();
        let mut c = random_chunk(4, 4, 4, &bits);
        build_chunk_mesh(&mut c, &mapping);
        let first = c.mesh().clone();
        build_chunk_mesh(&mut c, &mapping);
        prop_assert_eq!(c.mesh(), &first);
    }

    // Every emitted vertex lies inside the chunk's block extent
    #[test]
    fn vertices_stay_within_chunk(bits in prop::collection::vec(any::<bool>(), 1..64)) {
        let mut c = random_chunk(5, 3, 4, &bits);
        build_chunk_mesh(&mut c, &BlockMapping::builtin());
        for p in &c.mesh().positions {
            prop_assert!(p.x >= -0.5 && p.x <= 4.5);
            prop_assert!(p.y >= -0.5 && p.y <= 2.5);
            prop_assert!(p.z >= -0.5 && p.z <= 3.5);
        }
    }
}
