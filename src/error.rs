//! Error type shared by mesh construction, normal computation and buffer management.

use thiserror::Error;

/// Everything that can go wrong while building, packing or drawing a solid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A shape constructor received an argument it cannot build geometry from.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A topology table breaks one of its own invariants (index range, face
    /// count, adjacency partition).
    #[error("invalid topology for {shape}: {reason}")]
    InvalidTopology { shape: &'static str, reason: String },

    /// Normalization hit a zero-length vector.
    #[error("degenerate normal at slot {slot}")]
    DegenerateNormal { slot: usize },

    /// A channel array does not have one entry per vertex slot.
    #[error("{channel} channel has {actual} floats, expected {expected}")]
    ChannelMismatch {
        channel: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A buffer or drawable was used outside its lifetime (before upload or
    /// after deletion).
    #[error("resource misuse: {0}")]
    ResourceMisuse(&'static str),
}

pub type Result<T, E = MeshError> = std::result::Result<T, E>;

impl MeshError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_topology(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidTopology {
            shape,
            reason: reason.into(),
        }
    }
}
