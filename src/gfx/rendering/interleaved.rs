//! Packed attribute buffer with a host-side mirror.
//!
//! All channels live in one device buffer at the offsets of a
//! [`ChannelLayout`]. The host copy is kept so the normal channel can be
//! swapped and re-sent alone.

use super::layout::ChannelLayout;
use super::vertex::Channel;
use crate::error::{MeshError, Result};
use crate::wgpu_utils::{BufferKind, RenderDevice};

/// Borrowed channel arrays to pack, one entry per slot.
#[derive(Debug, Clone, Copy)]
pub struct ChannelData<'a> {
    pub positions: &'a [[f32; 3]],
    pub normals: &'a [[f32; 3]],
    pub colors: Option<&'a [[f32; 4]]>,
    pub tex_coords: Option<&'a [[f32; 2]]>,
}

pub struct InterleavedBuffer<D: RenderDevice> {
    label: String,
    layout: ChannelLayout,
    data: Vec<f32>,
    buffer: Option<D::Buffer>,
}

impl<D: RenderDevice> InterleavedBuffer<D> {
    /// Lay the channels out back to back in host memory.
    ///
    /// Nothing is sent to the device until [`upload`](Self::upload).
    pub fn pack(label: impl Into<String>, channels: &ChannelData<'_>) -> Result<Self> {
        let slot_count = channels.positions.len();
        let layout = ChannelLayout::new(
            slot_count,
            channels.colors.is_some(),
            channels.tex_coords.is_some(),
        );

        let mut data = Vec::with_capacity(layout.total_size() as usize / std::mem::size_of::<f32>());
        for range in layout.ranges() {
            let floats: &[f32] = match range.channel {
                Channel::Position => channels.positions.as_flattened(),
                Channel::Normal => channels.normals.as_flattened(),
                Channel::Color => channels.colors.unwrap_or_default().as_flattened(),
                Channel::TexCoord => channels.tex_coords.unwrap_or_default().as_flattened(),
            };
            let expected = range.float_range().len();
            if floats.len() != expected {
                return Err(MeshError::ChannelMismatch {
                    channel: range.channel.name(),
                    expected,
                    actual: floats.len(),
                });
            }
            data.extend_from_slice(floats);
        }

        Ok(Self {
            label: label.into(),
            layout,
            data,
            buffer: None,
        })
    }

    pub fn layout(&self) -> &ChannelLayout {
        &self.layout
    }

    /// Host copy of one channel, if present.
    pub fn channel(&self, channel: Channel) -> Option<&[f32]> {
        self.layout
            .range(channel)
            .map(|r| &self.data[r.float_range()])
    }

    /// Host copy of the whole buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn buffer(&self) -> Option<&D::Buffer> {
        self.buffer.as_ref()
    }

    pub fn is_uploaded(&self) -> bool {
        self.buffer.is_some()
    }

    /// Allocate the device buffer and copy every channel into it.
    ///
    /// A buffer from an earlier upload is released first.
    pub fn upload(&mut self, device: &D) {
        if let Some(old) = self.buffer.take() {
            device.destroy_buffer(old);
        }

        let buffer = device.create_buffer(&self.label, BufferKind::Vertex, self.layout.total_size());
        for range in self.layout.ranges() {
            let bytes: &[u8] = bytemuck::cast_slice(&self.data[range.float_range()]);
            device.write_buffer(&buffer, range.offset, bytes);
        }
        log::debug!(
            "uploaded {}: {} bytes in {} channels",
            self.label,
            self.layout.total_size(),
            self.layout.ranges().len()
        );
        self.buffer = Some(buffer);
    }

    /// Replace the normal channel and re-send only its byte range.
    pub fn update_normals(&mut self, device: &D, normals: &[[f32; 3]]) -> Result<()> {
        let Some(buffer) = &self.buffer else {
            return Err(MeshError::ResourceMisuse("normal update before upload"));
        };
        // Position and normal channels are always present.
        let Some(range) = self.layout.range(Channel::Normal).copied() else {
            return Err(MeshError::ResourceMisuse("layout has no normal channel"));
        };

        let floats = normals.as_flattened();
        let target = &mut self.data[range.float_range()];
        if floats.len() != target.len() {
            return Err(MeshError::ChannelMismatch {
                channel: Channel::Normal.name(),
                expected: target.len(),
                actual: floats.len(),
            });
        }
        target.copy_from_slice(floats);

        device.write_buffer(buffer, range.offset, bytemuck::cast_slice(target));
        log::trace!("{}: rewrote normals {:?}", self.label, range.byte_range());
        Ok(())
    }

    /// Give the device buffer back for release; the host copy stays.
    pub fn take_buffer(&mut self) -> Option<D::Buffer> {
        self.buffer.take()
    }
}
