use cubist_blocks::MaterialIndexMapping;
use cubist_chunk::VertexData;
use cubist_geom::{Direction, IVec3, Vec3};

use crate::faces::IncludeFaces;
use crate::tables::{QUAD_INDICES, UV_CORNERS, corners, normal, tangent};

/// Appends one textured unit cube centered on `offset`, restricted to the faces in `faces`.
///
/// Faces are written in [`Direction::ALL`] order, 4 vertices and 6 indices each.
/// `next_vertex` is the index the first new vertex will receive; it is advanced by 4
/// per emitted face so one counter can be threaded through a whole chunk.
/// Returns the number of faces written.
pub fn emit_cube(
    out: &mut VertexData,
    offset: IVec3,
    faces: IncludeFaces,
    materials: &MaterialIndexMapping,
    next_vertex: &mut u32,
) -> usize {
    if faces.is_empty() {
        return 0;
    }
    let center = offset.as_vec3();
    let mut emitted = 0;
    for dir in faces.iter() {
        emit_face(out, center, dir, materials.get(dir), *next_vertex);
        *next_vertex += 4;
        emitted += 1;
    }
    emitted
}

#[inline]
fn emit_face(out: &mut VertexData, center: Vec3, dir: Direction, layer: u32, base: u32) {
    let n = normal(dir);
    let t = tangent(dir);
    let layer = layer as f32;
    for (corner, (u, v)) in corners(dir).iter().zip(UV_CORNERS) {
        out.positions.push(center + *corner);
        out.normals.push(n);
        out.tangents.push(t);
        out.uvs.push(Vec3::new(u, v, layer));
    }
    out.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
}
