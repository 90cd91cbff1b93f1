//! # Vertex Data Structures
//!
//! Attribute channels of a solid and a per-slot view of the packed data.

/// One attribute channel of the packed vertex buffer.
///
/// The shader contract is fixed: position at location 0, normal at 1, color
/// at 2, texture coordinate at 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Position,
    Normal,
    Color,
    TexCoord,
}

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const NORMAL_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];
const COLOR_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32x4];
const TEX_COORD_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![3 => Float32x2];

impl Channel {
    /// Channels in packing order.
    pub const ALL: [Channel; 4] = [
        Channel::Position,
        Channel::Normal,
        Channel::Color,
        Channel::TexCoord,
    ];

    /// Floats per slot
    pub fn components(self) -> usize {
        match self {
            Channel::Position | Channel::Normal => 3,
            Channel::Color => 4,
            Channel::TexCoord => 2,
        }
    }

    /// Bytes per slot
    pub fn stride(self) -> u64 {
        (self.components() * std::mem::size_of::<f32>()) as u64
    }

    pub fn shader_location(self) -> u32 {
        self.attributes()[0].shader_location
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Position => "position",
            Channel::Normal => "normal",
            Channel::Color => "color",
            Channel::TexCoord => "texcoord",
        }
    }

    /// Attribute description of this channel, as the only attribute of its
    /// own vertex buffer slot.
    pub fn attributes(self) -> &'static [wgpu::VertexAttribute] {
        match self {
            Channel::Position => &POSITION_ATTRIBUTES,
            Channel::Normal => &NORMAL_ATTRIBUTES,
            Channel::Color => &COLOR_ATTRIBUTES,
            Channel::TexCoord => &TEX_COORD_ATTRIBUTES,
        }
    }

    /// Returns the vertex buffer layout of this channel for wgpu pipelines.
    pub fn desc(self) -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: self.attributes(),
        }
    }
}

/// Snapshot of one slot of a drawable.
///
/// `active` is the normal currently resident in the device buffer; it equals
/// either `face_normal` or `vertex_normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub face_normal: [f32; 3],
    /// Smooth normal, `None` until smooth shading was first requested
    pub vertex_normal: Option<[f32; 3]>,
    pub active: [f32; 3],
    pub color: Option<[f32; 4]>,
    pub tex_coord: Option<[f32; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_locations() {
        let locations: Vec<u32> = Channel::ALL.iter().map(|c| c.shader_location()).collect();
        assert_eq!(locations, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_strides_match_formats() {
        for channel in Channel::ALL {
            assert_eq!(channel.stride(), channel.attributes()[0].format.size());
            assert_eq!(channel.desc().array_stride, channel.stride());
        }
    }
}
