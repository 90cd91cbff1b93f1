//! # Procedural Geometry Generation
//!
//! This module builds the fixed topologies of the supported solids and the two
//! normal sets used to shade them.
//!
//! ## Supported Solids
//!
//! - **Square pyramid**: apex over a unit square base, declared face normals
//! - **Cone**: parametric, one triangle per base segment
//! - **Regular octahedron**: two square pyramids joined at the base
//!
//! ## Usage
//!
//! ```rust
//! use solidmesh::gfx::geometry::{build_cone, build_polyhedron, ConeParams, SQUARE_PYRAMID};
//!
//! let pyramid = build_polyhedron(&SQUARE_PYRAMID).unwrap();
//! assert_eq!(pyramid.face_count(), 6);
//!
//! let cone = build_cone(&ConeParams::default().with_segments(16)).unwrap();
//! assert_eq!(cone.index_count(), 48);
//! ```
//!
//! Vertices are duplicated per face: every face owns its own slots so that a
//! flat normal can be stored per slot. Slots that sit on the same corner of the
//! solid are tied together by adjacency groups, which is what smooth shading
//! averages over.

pub mod normals;
pub mod primitives;
pub mod shape;
pub mod tables;

pub use normals::SmoothNormals;
pub use primitives::*;
pub use shape::ShapeKind;
pub use tables::{REGULAR_OCTAHEDRON, SQUARE_PYRAMID};

use crate::error::{MeshError, Result};

/// Slot indices of one logical corner of a solid.
pub type AdjacencyGroup = &'static [u16];

/// Built geometry of one solid, ready for packing.
#[derive(Debug, Clone)]
pub struct ShapeTopology {
    /// Shape name used in logs and errors
    pub name: &'static str,
    /// Vertex positions (x, y, z), one per slot
    pub positions: Vec<[f32; 3]>,
    /// Flat normals, identical for the three slots of every face
    pub flat_normals: Vec<[f32; 3]>,
    /// RGBA colors, if the shape carries them
    pub colors: Option<Vec<[f32; 4]>>,
    /// Texture coordinates (u, v), if the shape carries them
    pub tex_coords: Option<Vec<[f32; 2]>>,
    /// Triangle list, three slot indices per face
    pub indices: Vec<u16>,
    /// Corner groups; empty for shapes smoothed analytically
    pub adjacency: &'static [AdjacencyGroup],
}

impl ShapeTopology {
    /// Number of vertex slots
    pub fn slot_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangular faces
    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Iterate over faces as slot index triples.
    pub fn faces(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|f| [f[0] as usize, f[1] as usize, f[2] as usize])
    }

    /// Check every structural invariant of the topology.
    ///
    /// Builders call this before handing a topology out, so a
    /// `ShapeTopology` obtained from them is always valid.
    pub fn validate(&self) -> Result<()> {
        let shape = self.name;
        let slots = self.slot_count();

        if self.indices.is_empty() || self.indices.len() % 3 != 0 {
            return Err(MeshError::invalid_topology(
                shape,
                format!("{} indices is not a positive multiple of 3", self.indices.len()),
            ));
        }
        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= slots) {
            return Err(MeshError::invalid_topology(
                shape,
                format!("index {bad} out of range for {slots} slots"),
            ));
        }

        check_len(shape, "normal", self.flat_normals.len(), slots)?;
        if let Some(colors) = &self.colors {
            check_len(shape, "color", colors.len(), slots)?;
        }
        if let Some(tex_coords) = &self.tex_coords {
            check_len(shape, "texcoord", tex_coords.len(), slots)?;
        }

        for (face, [a, b, c]) in self.faces().enumerate() {
            let n = self.flat_normals[a];
            if self.flat_normals[b] != n || self.flat_normals[c] != n {
                return Err(MeshError::invalid_topology(
                    shape,
                    format!("face {face} slots disagree on the flat normal"),
                ));
            }
        }

        if !self.adjacency.is_empty() {
            self.validate_adjacency()?;
        }
        Ok(())
    }

    /// Every slot in exactly one group, and group members share a position.
    fn validate_adjacency(&self) -> Result<()> {
        let shape = self.name;
        let mut owner = vec![None; self.slot_count()];

        for (group_idx, group) in self.adjacency.iter().enumerate() {
            let Some(&first) = group.first() else {
                return Err(MeshError::invalid_topology(
                    shape,
                    format!("adjacency group {group_idx} is empty"),
                ));
            };
            for &slot in group.iter() {
                let slot = slot as usize;
                let Some(entry) = owner.get_mut(slot) else {
                    return Err(MeshError::invalid_topology(
                        shape,
                        format!("adjacency group {group_idx} names missing slot {slot}"),
                    ));
                };
                if let Some(prev) = entry.replace(group_idx) {
                    return Err(MeshError::invalid_topology(
                        shape,
                        format!("slot {slot} is in groups {prev} and {group_idx}"),
                    ));
                }
                if self.positions[slot] != self.positions[first as usize] {
                    return Err(MeshError::invalid_topology(
                        shape,
                        format!("slot {slot} does not sit on the corner of group {group_idx}"),
                    ));
                }
            }
        }

        if let Some(orphan) = owner.iter().position(Option::is_none) {
            return Err(MeshError::invalid_topology(
                shape,
                format!("slot {orphan} belongs to no adjacency group"),
            ));
        }
        Ok(())
    }
}

fn check_len(shape: &'static str, channel: &str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(MeshError::invalid_topology(
            shape,
            format!("{channel} channel has {actual} entries for {expected} slots"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> ShapeTopology {
        ShapeTopology {
            name: "triangle",
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            flat_normals: vec![[0.0, 0.0, 1.0]; 3],
            colors: None,
            tex_coords: None,
            indices: vec![0, 1, 2],
            adjacency: &[],
        }
    }

    #[test]
    fn test_valid_triangle() {
        let t = triangle();
        assert!(t.validate().is_ok());
        assert_eq!(t.slot_count(), 3);
        assert_eq!(t.face_count(), 1);
        assert_eq!(t.faces().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut t = triangle();
        t.indices = vec![0, 1, 3];
        assert!(matches!(t.validate(), Err(MeshError::InvalidTopology { .. })));
    }

    #[test]
    fn test_partial_face() {
        let mut t = triangle();
        t.indices = vec![0, 1];
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_face_normals_must_agree() {
        let mut t = triangle();
        t.flat_normals[2] = [0.0, 1.0, 0.0];
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_adjacency_must_cover_every_slot() {
        static GROUPS: [AdjacencyGroup; 2] = [&[0], &[1]];
        let mut t = triangle();
        t.adjacency = &GROUPS;
        let err = t.validate().unwrap_err();
        assert!(err.to_string().contains("slot 2"));
    }

    #[test]
    fn test_adjacency_members_share_position() {
        static GROUPS: [AdjacencyGroup; 2] = [&[0, 1], &[2]];
        let mut t = triangle();
        t.adjacency = &GROUPS;
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_adjacency_rejects_duplicate_membership() {
        static GROUPS: [AdjacencyGroup; 3] = [&[0], &[1, 1], &[2]];
        let mut t = triangle();
        t.adjacency = &GROUPS;
        assert!(t.validate().is_err());
    }
}
