// src/wgpu_utils/memory_device.rs - Host-memory device that records every operation
//! A [`RenderDevice`] backed by host memory.
//!
//! Buffers are plain byte vectors and every allocation, write and release is
//! appended to an operation log, so callers can check exactly which byte
//! ranges reached the "GPU". Single-threaded: state lives in `RefCell`s.

use std::cell::RefCell;
use std::ops::Range;

use super::render_device::{BufferKind, DrawCall, DrawSolid, RenderDevice};

/// Handle to a buffer of a [`MemoryDevice`].
#[derive(Debug, PartialEq, Eq)]
pub struct MemoryBuffer {
    id: usize,
}

impl MemoryBuffer {
    pub fn id(&self) -> usize {
        self.id
    }
}

/// One logged device operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceOp {
    Create {
        buffer: usize,
        kind: BufferKind,
        size: u64,
    },
    Write {
        buffer: usize,
        range: Range<u64>,
    },
    Destroy {
        buffer: usize,
    },
}

#[derive(Debug)]
struct StoredBuffer {
    label: String,
    kind: BufferKind,
    bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct MemoryDevice {
    buffers: RefCell<Vec<Option<StoredBuffer>>>,
    ops: RefCell<Vec<DeviceOp>>,
}

impl MemoryDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bytes of a live buffer.
    pub fn contents(&self, buffer: &MemoryBuffer) -> Option<Vec<u8>> {
        self.buffers
            .borrow()
            .get(buffer.id)
            .and_then(Option::as_ref)
            .map(|b| b.bytes.clone())
    }

    pub fn label(&self, buffer: &MemoryBuffer) -> Option<String> {
        self.buffers
            .borrow()
            .get(buffer.id)
            .and_then(Option::as_ref)
            .map(|b| b.label.clone())
    }

    pub fn kind(&self, buffer: &MemoryBuffer) -> Option<BufferKind> {
        self.buffers
            .borrow()
            .get(buffer.id)
            .and_then(Option::as_ref)
            .map(|b| b.kind)
    }

    pub fn is_live(&self, id: usize) -> bool {
        matches!(self.buffers.borrow().get(id), Some(Some(_)))
    }

    /// Number of buffers allocated and not yet destroyed.
    pub fn live_buffers(&self) -> usize {
        self.buffers.borrow().iter().flatten().count()
    }

    pub fn ops(&self) -> Vec<DeviceOp> {
        self.ops.borrow().clone()
    }

    /// Byte ranges written so far, per buffer id.
    pub fn writes(&self) -> Vec<(usize, Range<u64>)> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                DeviceOp::Write { buffer, range } => Some((*buffer, range.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn clear_log(&self) {
        self.ops.borrow_mut().clear();
    }

    fn allocate(&self, label: &str, kind: BufferKind, bytes: Vec<u8>) -> MemoryBuffer {
        let mut buffers = self.buffers.borrow_mut();
        let id = buffers.len();
        self.ops.borrow_mut().push(DeviceOp::Create {
            buffer: id,
            kind,
            size: bytes.len() as u64,
        });
        buffers.push(Some(StoredBuffer {
            label: label.to_owned(),
            kind,
            bytes,
        }));
        MemoryBuffer { id }
    }
}

impl RenderDevice for MemoryDevice {
    type Buffer = MemoryBuffer;

    fn create_buffer(&self, label: &str, kind: BufferKind, size: u64) -> MemoryBuffer {
        self.allocate(label, kind, vec![0; size as usize])
    }

    fn create_buffer_init(&self, label: &str, kind: BufferKind, contents: &[u8]) -> MemoryBuffer {
        self.allocate(label, kind, contents.to_vec())
    }

    fn write_buffer(&self, buffer: &MemoryBuffer, offset: u64, data: &[u8]) {
        let mut buffers = self.buffers.borrow_mut();
        let Some(Some(stored)) = buffers.get_mut(buffer.id) else {
            log::error!("write to released buffer {}", buffer.id);
            return;
        };
        let start = offset as usize;
        let end = start + data.len();
        if end > stored.bytes.len() {
            log::error!(
                "write of {start}..{end} past the end of {} ({} bytes)",
                stored.label,
                stored.bytes.len()
            );
            return;
        }
        stored.bytes[start..end].copy_from_slice(data);
        self.ops.borrow_mut().push(DeviceOp::Write {
            buffer: buffer.id,
            range: offset..end as u64,
        });
    }

    fn destroy_buffer(&self, buffer: MemoryBuffer) {
        let mut buffers = self.buffers.borrow_mut();
        match buffers.get_mut(buffer.id) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.ops
                    .borrow_mut()
                    .push(DeviceOp::Destroy { buffer: buffer.id });
            }
            _ => log::error!("buffer {} released twice", buffer.id),
        }
    }
}

/// Program handle accepted by [`RecordingPass`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryProgram {
    pub label: &'static str,
}

/// A draw captured by [`RecordingPass`], with the vertex bytes the draw saw.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub program: &'static str,
    pub vertex_buffer: usize,
    pub index_buffer: usize,
    pub slots: Vec<(u32, Range<u64>)>,
    pub index_count: u32,
    pub vertex_bytes: Vec<u8>,
}

/// Command stream that records draws against a [`MemoryDevice`].
pub struct RecordingPass<'d> {
    device: &'d MemoryDevice,
    draws: Vec<RecordedDraw>,
}

impl<'d> RecordingPass<'d> {
    pub fn new(device: &'d MemoryDevice) -> Self {
        Self {
            device,
            draws: Vec::new(),
        }
    }

    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }
}

impl DrawSolid<MemoryBuffer, MemoryProgram> for RecordingPass<'_> {
    fn draw_solid(&mut self, program: &MemoryProgram, call: &DrawCall<'_, MemoryBuffer>) {
        let Some(vertex_bytes) = self.device.contents(call.vertex_buffer) else {
            log::error!("draw with released vertex buffer {}", call.vertex_buffer.id);
            return;
        };
        if !self.device.is_live(call.index_buffer.id) {
            log::error!("draw with released index buffer {}", call.index_buffer.id);
            return;
        }
        self.draws.push(RecordedDraw {
            program: program.label,
            vertex_buffer: call.vertex_buffer.id,
            index_buffer: call.index_buffer.id,
            slots: call.slot_ranges().collect(),
            index_count: call.index_count,
            vertex_bytes,
        });
    }
}
