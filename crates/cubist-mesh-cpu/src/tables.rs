//! Static unit-cube face tables, indexed by `Direction::index`.
//!
//! Corners are relative to the cube center and ordered so that `c1 - c0` runs along
//! the face's texture U axis and `c3 - c0` along its V axis. Quads are split into
//! triangles `(0, 2, 1)` and `(0, 3, 2)`, which are clockwise seen from outside the
//! cube in the left-handed, Y-up grid.

use cubist_geom::{Direction, Vec3, Vec4};

const H: f32 = 0.5;

pub const FACE_CORNERS: [[Vec3; 4]; 6] = [
    // Forward (+Z)
    [
        Vec3::new(H, -H, H),
        Vec3::new(-H, -H, H),
        Vec3::new(-H, H, H),
        Vec3::new(H, H, H),
    ],
    // Backward (-Z)
    [
        Vec3::new(-H, -H, -H),
        Vec3::new(H, -H, -H),
        Vec3::new(H, H, -H),
        Vec3::new(-H, H, -H),
    ],
    // Left (-X)
    [
        Vec3::new(-H, -H, H),
        Vec3::new(-H, -H, -H),
        Vec3::new(-H, H, -H),
        Vec3::new(-H, H, H),
    ],
    // Right (+X)
    [
        Vec3::new(H, -H, -H),
        Vec3::new(H, -H, H),
        Vec3::new(H, H, H),
        Vec3::new(H, H, -H),
    ],
    // Up (+Y)
    [
        Vec3::new(-H, H, -H),
        Vec3::new(H, H, -H),
        Vec3::new(H, H, H),
        Vec3::new(-H, H, H),
    ],
    // Down (-Y)
    [
        Vec3::new(-H, -H, H),
        Vec3::new(H, -H, H),
        Vec3::new(H, -H, -H),
        Vec3::new(-H, -H, -H),
    ],
];

/// Texture coordinates per corner, shared by every face.
pub const UV_CORNERS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];

pub const FACE_NORMALS: [Vec3; 6] = [
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
];

// xyz = texture U axis; w = -1 so cross(normal, tangent) * w is the V axis.
pub const FACE_TANGENTS: [Vec4; 6] = [
    Vec4::new(-1.0, 0.0, 0.0, -1.0),
    Vec4::new(1.0, 0.0, 0.0, -1.0),
    Vec4::new(0.0, 0.0, -1.0, -1.0),
    Vec4::new(0.0, 0.0, 1.0, -1.0),
    Vec4::new(1.0, 0.0, 0.0, -1.0),
    Vec4::new(1.0, 0.0, 0.0, -1.0),
];

/// Index offsets of the two triangles of a quad, relative to its first vertex.
pub const QUAD_INDICES: [u32; 6] = [0, 2, 1, 0, 3, 2];

#[inline]
pub fn corners(dir: Direction) -> &'static [Vec3; 4] {
    &FACE_CORNERS[dir.index()]
}

#[inline]
pub fn normal(dir: Direction) -> Vec3 {
    FACE_NORMALS[dir.index()]
}

#[inline]
pub fn tangent(dir: Direction) -> Vec4 {
    FACE_TANGENTS[dir.index()]
}
