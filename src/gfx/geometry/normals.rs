//! Normal calculation for flat and smooth shading.
//!
//! Flat normals are one vector per face, copied into each of its slots.
//! Smooth normals come from a [`SmoothNormals`] provider, picked per shape:
//! polyhedra average over adjacency groups, solids of revolution derive the
//! normal from the slot position.

use cgmath::{InnerSpace, Vector3};

use super::{AdjacencyGroup, ShapeTopology};
use crate::error::{MeshError, Result};

/// Fallback for normals that cannot be normalized.
pub const DEFAULT_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// Normalize `v`, reporting a zero-length (or non-finite) vector as degenerate.
pub fn try_normalize(slot: usize, v: Vector3<f32>) -> Result<Vector3<f32>> {
    let length = v.magnitude();
    if length > f32::EPSILON && length.is_finite() {
        Ok(v / length)
    } else {
        Err(MeshError::DegenerateNormal { slot })
    }
}

/// Unit normal of triangle `(a, b, c)` following its winding.
pub fn face_normal(slot: usize, a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Result<[f32; 3]> {
    let a = Vector3::from(a);
    let edge1 = Vector3::from(b) - a;
    let edge2 = Vector3::from(c) - a;
    try_normalize(slot, edge1.cross(edge2)).map(Into::into)
}

/// Unit normal of triangle `(a, b, c)` pointing away from the origin,
/// whatever the winding. Only meaningful for convex solids centred on the
/// origin.
pub fn outward_face_normal(slot: usize, a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Result<[f32; 3]> {
    let n = Vector3::from(face_normal(slot, a, b, c)?);
    let centroid = (Vector3::from(a) + Vector3::from(b) + Vector3::from(c)) / 3.0;
    let n = if n.dot(centroid) < 0.0 { -n } else { n };
    Ok(n.into())
}

/// Smooth-normal strategy of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothNormals {
    /// Arithmetic mean of the flat normals in each adjacency group of the
    /// topology.
    ///
    /// The mean is not renormalized, so corners shared by faces pointing in
    /// different directions get shorter normals.
    AdjacencyAverage,
    /// Per slot, `(x, up, z)` normalized, where `x, z` are taken from the slot
    /// position. `up` is a constant of the solid.
    AnalyticDirectional { up: f32 },
}

impl SmoothNormals {
    /// Compute one smooth normal per slot of `topology`.
    ///
    /// The result is a fresh array; the flat normals are left alone.
    /// Degenerate slots are logged and replaced with [`DEFAULT_NORMAL`].
    pub fn compute(&self, topology: &ShapeTopology) -> Vec<[f32; 3]> {
        match *self {
            SmoothNormals::AdjacencyAverage => {
                average_over_groups(topology.adjacency, &topology.flat_normals)
            }
            SmoothNormals::AnalyticDirectional { up } => topology
                .positions
                .iter()
                .enumerate()
                .map(|(slot, &position)| {
                    directional_normal(slot, position, up).unwrap_or_else(|err| {
                        log::warn!("{}: {err}, using +Y", topology.name);
                        DEFAULT_NORMAL
                    })
                })
                .collect(),
        }
    }
}

fn average_over_groups(groups: &[AdjacencyGroup], flat_normals: &[[f32; 3]]) -> Vec<[f32; 3]> {
    let mut smooth = flat_normals.to_vec();

    for group in groups {
        if group.is_empty() {
            continue;
        }
        let Some(members) = group
            .iter()
            .map(|&slot| flat_normals.get(slot as usize).copied())
            .collect::<Option<Vec<_>>>()
        else {
            log::warn!(
                "adjacency group {group:?} reaches past {} slots, left flat",
                flat_normals.len()
            );
            continue;
        };
        let sum = members
            .into_iter()
            .map(Vector3::from)
            .fold(Vector3::new(0.0, 0.0, 0.0), |acc, n| acc + n);
        let mean: [f32; 3] = (sum / group.len() as f32).into();

        for &slot in group.iter() {
            smooth[slot as usize] = mean;
        }
    }
    smooth
}

/// Normal of a solid of revolution around Y at `position`.
pub fn directional_normal(slot: usize, position: [f32; 3], up: f32) -> Result<[f32; 3]> {
    try_normalize(slot, Vector3::new(position[0], up, position[2])).map(Into::into)
}
