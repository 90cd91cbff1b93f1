// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Handles the packed attribute buffer: channel formats, byte layout and the
//! upload and partial re-upload of its contents.

pub mod interleaved;
pub mod layout;
pub mod vertex;

// Re-export main types
pub use interleaved::{ChannelData, InterleavedBuffer};
pub use layout::{ChannelLayout, ChannelRange};
pub use vertex::{Channel, Vertex};
