// src/wgpu_utils/mod.rs
//! WGPU utility functions and helpers
//!
//! Provides the device seam meshes are uploaded and drawn through, with a
//! wgpu implementation and a host-memory one.

pub mod memory_device;
pub mod render_device;

// Re-export main types
pub use memory_device::{DeviceOp, MemoryBuffer, MemoryDevice, MemoryProgram, RecordingPass};
pub use render_device::{BufferKind, DrawCall, DrawSolid, RenderDevice, WgpuDevice};
