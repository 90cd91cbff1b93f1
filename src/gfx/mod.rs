//! # Graphics Module
//!
//! This module contains the mesh pipeline of the crate: procedural solid
//! construction, normal computation, attribute buffer packing and the
//! drawable that ties them to a device.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Topology tables, the cone generator and both normal sets
//! - **Rendering** ([`rendering`]) - Channel layout and the packed vertex buffer
//! - **Objects** ([`object`]) - [`MeshDrawable`], which owns the device buffers
//!
//! ## Usage
//!
//! ```rust
//! use solidmesh::gfx::{MeshDrawable, Shading};
//! use solidmesh::gfx::geometry::ShapeKind;
//! use solidmesh::wgpu_utils::MemoryDevice;
//!
//! let device = MemoryDevice::new();
//! let mut pyramid = MeshDrawable::new(&device, ShapeKind::SquarePyramid).unwrap();
//! pyramid.toggle_shading(&device, Shading::Smooth).unwrap();
//! pyramid.delete(&device).unwrap();
//! ```

pub mod geometry;
pub mod object;
pub mod rendering;

// Re-export commonly used types
pub use object::{MeshDrawable, Shading};
