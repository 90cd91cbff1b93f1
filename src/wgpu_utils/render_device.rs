// src/wgpu_utils/render_device.rs - Device seam for mesh buffers
use std::ops::Range;

use crate::gfx::rendering::layout::ChannelLayout;

/// What a device buffer is bound as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    Vertex,
    Index,
}

impl BufferKind {
    fn usages(self) -> wgpu::BufferUsages {
        match self {
            BufferKind::Vertex => wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            BufferKind::Index => wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        }
    }
}

/// The few device operations a mesh needs.
///
/// Implemented for wgpu by [`WgpuDevice`] and in host memory by
/// [`MemoryDevice`](super::memory_device::MemoryDevice).
pub trait RenderDevice {
    type Buffer;

    /// Allocate an uninitialized buffer of `size` bytes.
    fn create_buffer(&self, label: &str, kind: BufferKind, size: u64) -> Self::Buffer;

    /// Allocate a buffer holding `contents`.
    fn create_buffer_init(&self, label: &str, kind: BufferKind, contents: &[u8]) -> Self::Buffer;

    /// Copy `data` into `buffer` starting at byte `offset`.
    fn write_buffer(&self, buffer: &Self::Buffer, offset: u64, data: &[u8]);

    /// Release `buffer`. The handle is consumed.
    fn destroy_buffer(&self, buffer: Self::Buffer);
}

/// wgpu device and queue used for buffer allocation and uploads.
pub struct WgpuDevice {
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl WgpuDevice {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self { device, queue }
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}

impl RenderDevice for WgpuDevice {
    type Buffer = wgpu::Buffer;

    fn create_buffer(&self, label: &str, kind: BufferKind, size: u64) -> wgpu::Buffer {
        self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: kind.usages(),
            mapped_at_creation: false,
        })
    }

    fn create_buffer_init(&self, label: &str, kind: BufferKind, contents: &[u8]) -> wgpu::Buffer {
        // Pads to COPY_BUFFER_ALIGNMENT, which odd u16 index counts need.
        wgpu::util::DeviceExt::create_buffer_init(
            &self.device,
            &wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents,
                usage: kind.usages(),
            },
        )
    }

    fn write_buffer(&self, buffer: &wgpu::Buffer, offset: u64, data: &[u8]) {
        self.queue.write_buffer(buffer, offset, data);
    }

    fn destroy_buffer(&self, buffer: wgpu::Buffer) {
        buffer.destroy();
    }
}

/// Everything one indexed draw of a solid needs.
pub struct DrawCall<'a, B> {
    pub vertex_buffer: &'a B,
    pub index_buffer: &'a B,
    pub layout: &'a ChannelLayout,
    pub index_count: u32,
}

impl<B> DrawCall<'_, B> {
    /// Byte range of each present channel, in vertex-buffer slot order.
    pub fn slot_ranges(&self) -> impl Iterator<Item = (u32, Range<u64>)> + '_ {
        self.layout
            .ranges()
            .iter()
            .enumerate()
            .map(|(slot, r)| (slot as u32, r.byte_range()))
    }
}

/// A command stream that can draw solids with program `P`.
pub trait DrawSolid<B, P> {
    fn draw_solid(&mut self, program: &P, call: &DrawCall<'_, B>);
}

impl DrawSolid<wgpu::Buffer, wgpu::RenderPipeline> for wgpu::RenderPass<'_> {
    fn draw_solid(&mut self, pipeline: &wgpu::RenderPipeline, call: &DrawCall<'_, wgpu::Buffer>) {
        self.set_pipeline(pipeline);
        for (slot, range) in call.slot_ranges() {
            self.set_vertex_buffer(slot, call.vertex_buffer.slice(range));
        }
        self.set_index_buffer(call.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        self.draw_indexed(0..call.index_count, 0, 0..1);
    }
}
