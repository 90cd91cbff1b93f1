//! Shape catalogue: which builder and which smooth-normal strategy a solid uses.

use std::fmt;

use super::primitives::{build_cone, build_polyhedron, ConeParams};
use super::tables::{REGULAR_OCTAHEDRON, SQUARE_PYRAMID};
use super::{normals::SmoothNormals, ShapeTopology};
use crate::error::Result;

/// The solids this crate can build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    SquarePyramid,
    Cone(ConeParams),
    RegularOctahedron,
}

impl ShapeKind {
    /// Build the topology of this shape.
    pub fn build(&self) -> Result<ShapeTopology> {
        match self {
            ShapeKind::SquarePyramid => build_polyhedron(&SQUARE_PYRAMID),
            ShapeKind::Cone(params) => build_cone(params),
            ShapeKind::RegularOctahedron => build_polyhedron(&REGULAR_OCTAHEDRON),
        }
    }

    /// Smooth-normal strategy of this shape.
    ///
    /// Polyhedra with planar faces average over their corner groups; the
    /// cone has no well-defined corner at the apex, so its normals come from
    /// the slot positions.
    pub fn smooth_normals(&self) -> SmoothNormals {
        match self {
            ShapeKind::SquarePyramid | ShapeKind::RegularOctahedron => {
                SmoothNormals::AdjacencyAverage
            }
            ShapeKind::Cone(params) => SmoothNormals::AnalyticDirectional {
                up: params.smooth_up(),
            },
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::SquarePyramid => write!(f, "{}", SQUARE_PYRAMID.name),
            ShapeKind::Cone(params) => write!(f, "cone ({} segments)", params.segments),
            ShapeKind::RegularOctahedron => write!(f, "{}", REGULAR_OCTAHEDRON.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_abs_diff_eq;
    use cgmath::{InnerSpace, Vector3};

    const EPS: f32 = 1e-6;

    fn mean(normals: &[[f32; 3]], slots: &[usize]) -> Vector3<f32> {
        slots
            .iter()
            .map(|&s| Vector3::from(normals[s]))
            .fold(Vector3::new(0.0, 0.0, 0.0), |a, n| a + n)
            / slots.len() as f32
    }

    #[test]
    fn test_strategy_follows_shape_kind() {
        assert_eq!(
            ShapeKind::SquarePyramid.smooth_normals(),
            SmoothNormals::AdjacencyAverage
        );
        assert_eq!(
            ShapeKind::RegularOctahedron.smooth_normals(),
            SmoothNormals::AdjacencyAverage
        );
        assert_eq!(
            ShapeKind::Cone(ConeParams::default()).smooth_normals(),
            SmoothNormals::AnalyticDirectional { up: 0.5 }
        );
        assert_eq!(
            ShapeKind::Cone(ConeParams::default().with_radius(1.0).with_half_height(2.0))
                .smooth_normals(),
            SmoothNormals::AnalyticDirectional { up: 0.25 }
        );
    }

    #[test]
    fn test_pyramid_apex_smooth_normal_points_up() {
        let kind = ShapeKind::SquarePyramid;
        let topology = kind.build().unwrap();
        let smooth = kind.smooth_normals().compute(&topology);

        for slot in [0, 3, 6, 9] {
            assert_eq!(topology.positions[slot], [0.0, 1.0, 0.0]);
            let n = smooth[slot];
            assert!(n[1] > 0.0);
            assert_eq!(n[0], 0.0);
            assert_eq!(n[2], 0.0);
        }
    }

    #[test]
    fn test_pyramid_corner_is_mean_of_its_faces() {
        let kind = ShapeKind::SquarePyramid;
        let topology = kind.build().unwrap();
        let smooth = kind.smooth_normals().compute(&topology);

        for group in SQUARE_PYRAMID.adjacency {
            let slots: Vec<usize> = group.iter().map(|&s| s as usize).collect();
            let expected = mean(&topology.flat_normals, &slots);
            for &slot in &slots {
                assert_abs_diff_eq!(smooth[slot][0], expected.x, epsilon = EPS);
                assert_abs_diff_eq!(smooth[slot][1], expected.y, epsilon = EPS);
                assert_abs_diff_eq!(smooth[slot][2], expected.z, epsilon = EPS);
            }
        }

        // Front-right base corner: front, left and base faces.
        assert_abs_diff_eq!(smooth[1][0], 2.0 / 3.0, epsilon = EPS);
        assert_abs_diff_eq!(smooth[1][1], 1.0 / 3.0, epsilon = EPS);
        assert_abs_diff_eq!(smooth[1][2], 2.0 / 3.0, epsilon = EPS);
    }

    #[test]
    fn test_smooth_normals_leave_flat_untouched() {
        let kind = ShapeKind::SquarePyramid;
        let topology = kind.build().unwrap();
        let before = topology.flat_normals.clone();
        let smooth = kind.smooth_normals().compute(&topology);
        assert_eq!(topology.flat_normals, before);
        assert_ne!(smooth, before);
    }

    #[test]
    fn test_octahedron_apexes_average_to_axis() {
        let kind = ShapeKind::RegularOctahedron;
        let topology = kind.build().unwrap();
        let smooth = kind.smooth_normals().compute(&topology);

        let third = 1.0 / 3f32.sqrt();
        for (slot, sign) in [(0, 1.0), (12, -1.0)] {
            assert_abs_diff_eq!(smooth[slot][0], 0.0, epsilon = EPS);
            assert_abs_diff_eq!(smooth[slot][1], sign * third, epsilon = EPS);
            assert_abs_diff_eq!(smooth[slot][2], 0.0, epsilon = EPS);
        }

        // Equator corners lie in the XZ plane, pointing at the corner.
        let n = Vector3::from(smooth[1]);
        assert_abs_diff_eq!(n.y, 0.0, epsilon = EPS);
        assert!(n.x < 0.0 && n.z > 0.0);
    }

    #[test]
    fn test_cone_smooth_normals() {
        let kind = ShapeKind::Cone(ConeParams::default());
        let topology = kind.build().unwrap();
        let smooth = kind.smooth_normals().compute(&topology);

        for (p, n) in topology.positions.iter().zip(&smooth) {
            let n = Vector3::from(*n);
            assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = EPS);
            // Horizontal parts are parallel and point the same way.
            assert_abs_diff_eq!(n.x * p[2] - n.z * p[0], 0.0, epsilon = EPS);
            assert!(n.x * p[0] + n.z * p[2] >= 0.0);
        }

        // Apex slot points straight up.
        assert_eq!(smooth[0], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_cone_smooth_uses_radius_over_height() {
        let params = ConeParams::default();
        let kind = ShapeKind::Cone(params);
        let topology = kind.build().unwrap();
        let smooth = kind.smooth_normals().compute(&topology);

        // Slot 1 is the first base point, at angle 0.
        let p = topology.positions[1];
        let up = params.radius / (2.0 * params.half_height);
        let expected = Vector3::new(p[0], up, p[2]).normalize();
        assert_abs_diff_eq!(smooth[1][0], expected.x, epsilon = EPS);
        assert_abs_diff_eq!(smooth[1][1], expected.y, epsilon = EPS);
        assert_abs_diff_eq!(smooth[1][2], expected.z, epsilon = EPS);

        let half = std::f32::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(smooth[1][0], half, epsilon = EPS);
        assert_abs_diff_eq!(smooth[1][1], half, epsilon = EPS);
        assert_abs_diff_eq!(smooth[1][2], 0.0, epsilon = EPS);
    }

    #[test]
    fn test_invalid_cone_fails_through_kind() {
        let kind = ShapeKind::Cone(ConeParams::default().with_segments(2));
        assert!(matches!(kind.build(), Err(MeshError::InvalidParameter { .. })));
    }

    #[test]
    fn test_display() {
        assert_eq!(ShapeKind::SquarePyramid.to_string(), "square pyramid");
        assert_eq!(
            ShapeKind::Cone(ConeParams::default()).to_string(),
            "cone (32 segments)"
        );
    }
}
