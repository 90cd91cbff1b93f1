//! Static topology tables of the polyhedral solids.
//!
//! Each table is plain configuration handed to
//! [`build_polyhedron`](super::build_polyhedron); nothing here is computed.

use std::f32::consts::FRAC_1_SQRT_2;

use super::primitives::{FlatNormals, PolyhedronTable};

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
const MAGENTA: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Square pyramid: apex at (0, 1, 0), base corners at (±0.5, 0, ±0.5).
///
/// Four side faces plus a square base split into two triangles that share
/// two of its four slots (16 slots, 6 faces).
#[rustfmt::skip]
pub static SQUARE_PYRAMID: PolyhedronTable = PolyhedronTable {
    name: "square pyramid",
    positions: &[
        // front face
        [0.0, 1.0, 0.0], [0.5, 0.0, 0.5], [-0.5, 0.0, 0.5],
        // right face
        [0.0, 1.0, 0.0], [-0.5, 0.0, 0.5], [-0.5, 0.0, -0.5],
        // back face
        [0.0, 1.0, 0.0], [-0.5, 0.0, -0.5], [0.5, 0.0, -0.5],
        // left face
        [0.0, 1.0, 0.0], [0.5, 0.0, -0.5], [0.5, 0.0, 0.5],
        // base
        [0.5, 0.0, 0.5], [-0.5, 0.0, 0.5], [-0.5, 0.0, -0.5], [0.5, 0.0, -0.5],
    ],
    // Directions only; the shader normalizes.
    flat_normals: FlatNormals::Declared(&[
        [0.0, 1.0, 2.0], [0.0, 1.0, 2.0], [0.0, 1.0, 2.0],
        [-2.0, 1.0, 0.0], [-2.0, 1.0, 0.0], [-2.0, 1.0, 0.0],
        [0.0, 1.0, -2.0], [0.0, 1.0, -2.0], [0.0, 1.0, -2.0],
        [2.0, 1.0, 0.0], [2.0, 1.0, 0.0], [2.0, 1.0, 0.0],
        [0.0, -1.0, 0.0], [0.0, -1.0, 0.0], [0.0, -1.0, 0.0], [0.0, -1.0, 0.0],
    ]),
    colors: Some(&[
        RED, RED, RED,
        CYAN, CYAN, CYAN,
        MAGENTA, MAGENTA, MAGENTA,
        YELLOW, YELLOW, YELLOW,
        BLUE, BLUE, BLUE, BLUE,
    ]),
    tex_coords: Some(&[
        [0.5, 1.0], [0.0, 0.0], [1.0, 0.0],
        [0.5, 1.0], [0.0, 0.0], [1.0, 0.0],
        [0.5, 1.0], [0.0, 0.0], [1.0, 0.0],
        [0.5, 1.0], [0.0, 0.0], [1.0, 0.0],
        [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0],
    ]),
    indices: &[
        0, 1, 2, // front
        3, 4, 5, // right
        6, 7, 8, // back
        9, 10, 11, // left
        12, 13, 14, 12, 14, 15, // base
    ],
    adjacency: &[
        &[0, 3, 6, 9], // apex
        &[1, 11, 12],  // (0.5, 0, 0.5)
        &[2, 4, 13],   // (-0.5, 0, 0.5)
        &[5, 7, 14],   // (-0.5, 0, -0.5)
        &[8, 10, 15],  // (0.5, 0, -0.5)
    ],
};

const TOP: [f32; 3] = [0.0, FRAC_1_SQRT_2, 0.0];
const BOTTOM: [f32; 3] = [0.0, -FRAC_1_SQRT_2, 0.0];
const FRONT_LEFT: [f32; 3] = [-0.5, 0.0, 0.5];
const FRONT_RIGHT: [f32; 3] = [0.5, 0.0, 0.5];
const BACK_RIGHT: [f32; 3] = [0.5, 0.0, -0.5];
const BACK_LEFT: [f32; 3] = [-0.5, 0.0, -0.5];

/// Regular octahedron with unit edges: apexes at (0, ±√2/2, 0), equator on
/// the square (±0.5, 0, ±0.5).
///
/// Texture coordinates unwrap the upper half onto v ∈ [0.5, 1] and the lower
/// half onto v ∈ [0, 0.5].
#[rustfmt::skip]
pub static REGULAR_OCTAHEDRON: PolyhedronTable = PolyhedronTable {
    name: "regular octahedron",
    positions: &[
        TOP, FRONT_LEFT, FRONT_RIGHT,
        TOP, FRONT_RIGHT, BACK_RIGHT,
        TOP, BACK_RIGHT, BACK_LEFT,
        TOP, BACK_LEFT, FRONT_LEFT,
        BOTTOM, FRONT_LEFT, FRONT_RIGHT,
        BOTTOM, FRONT_RIGHT, BACK_RIGHT,
        BOTTOM, BACK_RIGHT, BACK_LEFT,
        BOTTOM, BACK_LEFT, FRONT_LEFT,
    ],
    // Lower faces are wound the other way round, so orientation comes from
    // the solid's center rather than from the winding.
    flat_normals: FlatNormals::Outward,
    colors: None,
    tex_coords: Some(&[
        [0.125, 1.0], [0.0, 0.5], [0.25, 0.5],
        [0.375, 1.0], [0.25, 0.5], [0.5, 0.5],
        [0.625, 1.0], [0.5, 0.5], [0.75, 0.5],
        [0.875, 1.0], [0.75, 0.5], [1.0, 0.5],
        [0.125, 0.0], [0.0, 0.5], [0.25, 0.5],
        [0.375, 0.0], [0.25, 0.5], [0.5, 0.5],
        [0.625, 0.0], [0.5, 0.5], [0.75, 0.5],
        [0.875, 0.0], [0.75, 0.5], [1.0, 0.5],
    ]),
    indices: &[
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, // upper half
        12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, // lower half
    ],
    adjacency: &[
        &[0, 3, 6, 9],     // top apex
        &[12, 15, 18, 21], // bottom apex
        &[1, 11, 13, 23],  // front left
        &[2, 4, 14, 16],   // front right
        &[5, 7, 17, 19],   // back right
        &[8, 10, 20, 22],  // back left
    ],
};
