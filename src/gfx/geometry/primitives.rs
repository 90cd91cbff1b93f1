//! # Solid Construction
//!
//! One generic builder for table-driven polyhedra and one parametric
//! generator for the cone. Both return a validated [`ShapeTopology`].

use std::f32::consts::PI;

use super::{normals, AdjacencyGroup, ShapeTopology};
use crate::error::{MeshError, Result};

/// Where a table's flat normals come from.
#[derive(Debug, Clone, Copy)]
pub enum FlatNormals {
    /// One normal per slot, given by the table.
    Declared(&'static [[f32; 3]]),
    /// Derived from each face's edges, oriented away from the origin.
    Outward,
}

/// Immutable description of a polyhedron with per-face duplicated slots.
#[derive(Debug, Clone, Copy)]
pub struct PolyhedronTable {
    pub name: &'static str,
    pub positions: &'static [[f32; 3]],
    pub flat_normals: FlatNormals,
    pub colors: Option<&'static [[f32; 4]]>,
    pub tex_coords: Option<&'static [[f32; 2]]>,
    pub indices: &'static [u16],
    pub adjacency: &'static [AdjacencyGroup],
}

/// Build a polyhedron from its table.
///
/// Fails with [`MeshError::InvalidTopology`] if the table is inconsistent,
/// and with [`MeshError::DegenerateNormal`] if an `Outward` face has no area.
pub fn build_polyhedron(table: &PolyhedronTable) -> Result<ShapeTopology> {
    let positions = table.positions.to_vec();

    let flat_normals = match table.flat_normals {
        FlatNormals::Declared(declared) => declared.to_vec(),
        FlatNormals::Outward => outward_flat_normals(table)?,
    };

    let topology = ShapeTopology {
        name: table.name,
        positions,
        flat_normals,
        colors: table.colors.map(<[_]>::to_vec),
        tex_coords: table.tex_coords.map(<[_]>::to_vec),
        indices: table.indices.to_vec(),
        adjacency: table.adjacency,
    };
    topology.validate()?;

    log::debug!(
        "built {}: {} slots, {} faces, {} adjacency groups",
        topology.name,
        topology.slot_count(),
        topology.face_count(),
        topology.adjacency.len()
    );
    Ok(topology)
}

fn outward_flat_normals(table: &PolyhedronTable) -> Result<Vec<[f32; 3]>> {
    let slot_count = table.positions.len();
    let mut flat = vec![[0.0; 3]; slot_count];

    for face in table.indices.chunks_exact(3) {
        let [a, b, c] = [face[0] as usize, face[1] as usize, face[2] as usize];
        if a.max(b).max(c) >= slot_count {
            return Err(MeshError::invalid_topology(
                table.name,
                format!("face {face:?} indexes past {slot_count} slots"),
            ));
        }
        let p = table.positions;
        let n = normals::outward_face_normal(a, p[a], p[b], p[c])?;
        for slot in [a, b, c] {
            flat[slot] = n;
        }
    }
    Ok(flat)
}

/// Largest segment count whose slots still fit 16-bit indices.
pub const MAX_CONE_SEGMENTS: u32 = (u16::MAX as u32 + 1) / 3;

/// Parameters of the cone generator.
///
/// The cone stands on the Y axis, apex at `+half_height`, base circle at
/// `-half_height`. Only the lateral surface is generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeParams {
    /// Number of triangles around the axis (at least 3)
    pub segments: u32,
    pub radius: f32,
    pub half_height: f32,
    /// Color of every slot
    pub color: [f32; 4],
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            segments: 32,
            radius: 0.5,
            half_height: 0.5,
            color: [0.8, 0.8, 0.8, 1.0],
        }
    }
}

impl ConeParams {
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_half_height(mut self, half_height: f32) -> Self {
        self.half_height = half_height;
        self
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Constant substituted for the Y component when deriving smooth normals
    /// from slot positions: the radius over the full height, `r / H`.
    pub fn smooth_up(&self) -> f32 {
        self.radius / (2.0 * self.half_height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.segments < 3 {
            return Err(MeshError::invalid_parameter(
                "segments",
                format!("a cone needs at least 3 segments, got {}", self.segments),
            ));
        }
        if self.segments > MAX_CONE_SEGMENTS {
            return Err(MeshError::invalid_parameter(
                "segments",
                format!(
                    "{} segments overflow 16-bit indices (max {MAX_CONE_SEGMENTS})",
                    self.segments
                ),
            ));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(MeshError::invalid_parameter(
                "radius",
                format!("must be positive, got {}", self.radius),
            ));
        }
        if !(self.half_height.is_finite() && self.half_height > 0.0) {
            return Err(MeshError::invalid_parameter(
                "half_height",
                format!("must be positive, got {}", self.half_height),
            ));
        }
        if self.color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(MeshError::invalid_parameter(
                "color",
                format!("components must lie in [0, 1], got {:?}", self.color),
            ));
        }
        Ok(())
    }
}

/// Generate the lateral surface of a cone.
///
/// Face `i` is the apex followed by the base points at angles `i·Δ` and
/// `(i+1)·Δ`, `Δ = 2π / segments`. Its flat normal is the direction of the
/// facet plane, `(H·cos m, r·cos(Δ/2), H·sin m)` with `m` the middle angle of
/// the face and `H` the full height; it is not unit length.
pub fn build_cone(params: &ConeParams) -> Result<ShapeTopology> {
    params.validate()?;

    let segments = params.segments as usize;
    let r = params.radius;
    let h = params.half_height;
    let height = 2.0 * h;
    let angle_step = 2.0 * PI / params.segments as f32;
    let slant_y = r * (angle_step * 0.5).cos();

    let mut positions = Vec::with_capacity(segments * 3);
    let mut flat_normals = Vec::with_capacity(segments * 3);
    let mut indices = Vec::with_capacity(segments * 3);

    for i in 0..segments {
        let angle0 = i as f32 * angle_step;
        let angle1 = (i + 1) as f32 * angle_step;

        positions.push([0.0, h, 0.0]);
        positions.push([r * angle0.cos(), -h, r * angle0.sin()]);
        positions.push([r * angle1.cos(), -h, r * angle1.sin()]);

        let mid = angle0 + angle_step * 0.5;
        let normal = [height * mid.cos(), slant_y, height * mid.sin()];
        flat_normals.extend([normal; 3]);

        // MAX_CONE_SEGMENTS keeps this within u16.
        let base = (i * 3) as u16;
        indices.extend([base, base + 1, base + 2]);
    }

    let topology = ShapeTopology {
        name: "cone",
        colors: Some(vec![params.color; positions.len()]),
        positions,
        flat_normals,
        tex_coords: None,
        indices,
        adjacency: &[],
    };
    topology.validate()?;

    log::debug!(
        "built cone: {} segments, {} slots",
        params.segments,
        topology.slot_count()
    );
    Ok(topology)
}
