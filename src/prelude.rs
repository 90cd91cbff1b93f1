//! # Solidmesh Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use solidmesh::prelude::*;
//!
//! let device = MemoryDevice::new();
//! let cone = MeshDrawable::new(&device, ShapeKind::Cone(ConeParams::default())).unwrap();
//! assert_eq!(cone.index_count(), 96);
//! ```

// Errors
pub use crate::error::{MeshError, Result};

// Geometry
pub use crate::gfx::geometry::{
    build_cone, build_polyhedron, ConeParams, PolyhedronTable, ShapeKind, ShapeTopology,
    SmoothNormals, REGULAR_OCTAHEDRON, SQUARE_PYRAMID,
};

// Buffers and drawing
pub use crate::gfx::rendering::{Channel, ChannelLayout, InterleavedBuffer, Vertex};
pub use crate::gfx::{MeshDrawable, Shading};

// Devices
pub use crate::wgpu_utils::{
    DrawSolid, MemoryDevice, MemoryProgram, RecordingPass, RenderDevice, WgpuDevice,
};
