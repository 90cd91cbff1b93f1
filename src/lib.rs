// src/lib.rs
//! Solidmesh
//!
//! Procedural solids (square pyramid, cone, regular octahedron) with flat and
//! smooth normal sets, packed into one attribute buffer that can switch
//! shading by re-sending only its normal range. Built on wgpu.

pub mod error;
pub mod gfx;
pub mod prelude;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use error::{MeshError, Result};
pub use gfx::{MeshDrawable, Shading};
