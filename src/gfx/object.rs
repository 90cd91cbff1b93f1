use crate::error::{MeshError, Result};
use crate::gfx::geometry::{ShapeKind, ShapeTopology, SmoothNormals};
use crate::gfx::rendering::interleaved::{ChannelData, InterleavedBuffer};
use crate::gfx::rendering::layout::ChannelLayout;
use crate::gfx::rendering::vertex::{Channel, Vertex};
use crate::wgpu_utils::{BufferKind, DrawCall, DrawSolid, RenderDevice};

/// Which normal set is resident in the vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// One normal per face
    #[default]
    Flat,
    /// Normals varying across adjacent faces
    Smooth,
}

impl Shading {
    pub fn toggled(self) -> Self {
        match self {
            Shading::Flat => Shading::Smooth,
            Shading::Smooth => Shading::Flat,
        }
    }
}

/// A solid uploaded to a device, ready to draw every frame.
///
/// Owns its vertex and index buffers exclusively. Starts flat-shaded.
pub struct MeshDrawable<D: RenderDevice> {
    kind: ShapeKind,
    topology: ShapeTopology,
    smooth: SmoothNormals,
    smooth_normals: Option<Vec<[f32; 3]>>,
    shading: Shading,
    vertices: InterleavedBuffer<D>,
    index_buffer: Option<D::Buffer>,
    index_count: u32,
}

impl<D: RenderDevice> MeshDrawable<D> {
    /// Build `kind`, pack it with flat normals and upload it to `device`.
    pub fn new(device: &D, kind: ShapeKind) -> Result<Self> {
        let topology = kind.build()?;

        let mut vertices = InterleavedBuffer::pack(
            format!("{kind} vertices"),
            &ChannelData {
                positions: &topology.positions,
                normals: &topology.flat_normals,
                colors: topology.colors.as_deref(),
                tex_coords: topology.tex_coords.as_deref(),
            },
        )?;
        vertices.upload(device);

        let index_buffer = device.create_buffer_init(
            &format!("{kind} indices"),
            BufferKind::Index,
            bytemuck::cast_slice(&topology.indices),
        );

        log::info!(
            "created {kind}: {} faces, {} slots",
            topology.face_count(),
            topology.slot_count()
        );

        Ok(Self {
            kind,
            smooth: kind.smooth_normals(),
            smooth_normals: None,
            shading: Shading::Flat,
            index_count: topology.index_count() as u32,
            topology,
            vertices,
            index_buffer: Some(index_buffer),
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn topology(&self) -> &ShapeTopology {
        &self.topology
    }

    pub fn layout(&self) -> &ChannelLayout {
        self.vertices.layout()
    }

    pub fn shading(&self) -> Shading {
        self.shading
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn vertex_buffer(&self) -> Option<&D::Buffer> {
        self.vertices.buffer()
    }

    pub fn index_buffer(&self) -> Option<&D::Buffer> {
        self.index_buffer.as_ref()
    }

    /// Normal channel as currently resident in the buffer.
    pub fn normal_channel(&self) -> &[f32] {
        self.vertices.channel(Channel::Normal).unwrap_or_default()
    }

    /// Smooth normals, if they were computed already.
    pub fn smooth_normals(&self) -> Option<&[[f32; 3]]> {
        self.smooth_normals.as_deref()
    }

    pub fn is_deleted(&self) -> bool {
        self.index_buffer.is_none()
    }

    /// Snapshot of one slot.
    pub fn vertex(&self, slot: usize) -> Option<Vertex> {
        let position = *self.topology.positions.get(slot)?;
        let active = self.normal_channel().get(slot * 3..slot * 3 + 3)?;

        Some(Vertex {
            position,
            face_normal: self.topology.flat_normals[slot],
            vertex_normal: self.smooth_normals.as_ref().map(|n| n[slot]),
            active: [active[0], active[1], active[2]],
            color: self.topology.colors.as_ref().map(|c| c[slot]),
            tex_coord: self.topology.tex_coords.as_ref().map(|t| t[slot]),
        })
    }

    /// Issue one indexed draw of the whole solid with `program`.
    pub fn draw<P, Pass>(&self, pass: &mut Pass, program: &P) -> Result<()>
    where
        Pass: DrawSolid<D::Buffer, P>,
    {
        let (Some(vertex_buffer), Some(index_buffer)) = (self.vertices.buffer(), &self.index_buffer)
        else {
            log::error!("draw of deleted {}", self.kind);
            return Err(MeshError::ResourceMisuse("draw after delete"));
        };

        pass.draw_solid(
            program,
            &DrawCall {
                vertex_buffer,
                index_buffer,
                layout: self.vertices.layout(),
                index_count: self.index_count,
            },
        );
        Ok(())
    }

    /// Switch the normal set in the vertex buffer.
    ///
    /// Smooth normals are computed the first time they are needed. Asking
    /// for the current mode does nothing.
    pub fn toggle_shading(&mut self, device: &D, shading: Shading) -> Result<()> {
        if self.is_deleted() {
            log::error!("shading change on deleted {}", self.kind);
            return Err(MeshError::ResourceMisuse("shading change after delete"));
        }
        if shading == self.shading {
            return Ok(());
        }

        let normals: &[[f32; 3]] = match shading {
            Shading::Flat => &self.topology.flat_normals,
            Shading::Smooth => self
                .smooth_normals
                .get_or_insert_with(|| self.smooth.compute(&self.topology)),
        };
        self.vertices.update_normals(device, normals)?;
        self.shading = shading;

        log::debug!("{} switched to {:?} shading", self.kind, shading);
        Ok(())
    }

    /// Release the vertex and index buffers.
    ///
    /// The drawable is unusable afterwards; drawing, changing shading or
    /// deleting again fails with [`MeshError::ResourceMisuse`].
    pub fn delete(&mut self, device: &D) -> Result<()> {
        let Some(index_buffer) = self.index_buffer.take() else {
            log::error!("{} deleted twice", self.kind);
            return Err(MeshError::ResourceMisuse("delete called twice"));
        };
        device.destroy_buffer(index_buffer);
        if let Some(vertex_buffer) = self.vertices.take_buffer() {
            device.destroy_buffer(vertex_buffer);
        }
        log::debug!("deleted {}", self.kind);
        Ok(())
    }
}
