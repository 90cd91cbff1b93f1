//! Byte layout of the packed attribute buffer.
//!
//! Channels are stored back to back, each as one contiguous block:
//! all positions, then all normals, then colors and texture coordinates if
//! the shape has them.

use std::ops::Range;

use super::vertex::Channel;

/// Where one channel lives in the packed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    pub channel: Channel,
    /// Byte offset of the first slot
    pub offset: u64,
    /// Bytes covered by the channel
    pub size: u64,
}

impl ChannelRange {
    pub fn byte_range(&self) -> Range<u64> {
        self.offset..self.offset + self.size
    }

    /// Same range counted in floats.
    pub fn float_range(&self) -> Range<usize> {
        let float = std::mem::size_of::<f32>() as u64;
        (self.offset / float) as usize..((self.offset + self.size) / float) as usize
    }
}

/// Channel offsets of one packed buffer; fixed once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLayout {
    slot_count: usize,
    ranges: Vec<ChannelRange>,
    total_size: u64,
}

impl ChannelLayout {
    pub fn new(slot_count: usize, has_color: bool, has_tex_coord: bool) -> Self {
        let mut ranges = Vec::with_capacity(Channel::ALL.len());
        let mut offset = 0;

        for channel in Channel::ALL {
            let present = match channel {
                Channel::Position | Channel::Normal => true,
                Channel::Color => has_color,
                Channel::TexCoord => has_tex_coord,
            };
            if !present {
                continue;
            }
            let size = channel.stride() * slot_count as u64;
            ranges.push(ChannelRange {
                channel,
                offset,
                size,
            });
            offset += size;
        }

        Self {
            slot_count,
            ranges,
            total_size: offset,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Present channels in packing order.
    pub fn ranges(&self) -> &[ChannelRange] {
        &self.ranges
    }

    pub fn range(&self, channel: Channel) -> Option<&ChannelRange> {
        self.ranges.iter().find(|r| r.channel == channel)
    }

    /// Size of the whole buffer in bytes.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Vertex buffer layouts for a pipeline drawing this buffer, one slot per
    /// present channel, in the order [`ranges`](Self::ranges) returns them.
    pub fn vertex_buffer_layouts(&self) -> Vec<wgpu::VertexBufferLayout<'static>> {
        self.ranges.iter().map(|r| r.channel.desc()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_follow_concatenation_order() {
        let layout = ChannelLayout::new(16, true, true);
        let offsets: Vec<(Channel, u64, u64)> = layout
            .ranges()
            .iter()
            .map(|r| (r.channel, r.offset, r.size))
            .collect();
        assert_eq!(
            offsets,
            vec![
                (Channel::Position, 0, 192),
                (Channel::Normal, 192, 192),
                (Channel::Color, 384, 256),
                (Channel::TexCoord, 640, 128),
            ]
        );
        assert_eq!(layout.total_size(), 768);
    }

    #[test]
    fn test_missing_channels_are_skipped() {
        let layout = ChannelLayout::new(24, false, true);
        assert!(layout.range(Channel::Color).is_none());
        assert_eq!(layout.range(Channel::TexCoord).unwrap().offset, 2 * 24 * 12);
        assert_eq!(layout.vertex_buffer_layouts().len(), 3);
        assert_eq!(
            layout.vertex_buffer_layouts()[2].attributes[0].shader_location,
            3
        );
    }

    #[test]
    fn test_float_range() {
        let layout = ChannelLayout::new(4, false, false);
        let normal = layout.range(Channel::Normal).unwrap();
        assert_eq!(normal.float_range(), 12..24);
        assert_eq!(normal.byte_range(), 48..96);
    }
}
