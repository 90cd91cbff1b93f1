//! End-to-end behaviour of drawables on the host-memory device.

use solidmesh::gfx::geometry::{ConeParams, ShapeKind};
use solidmesh::gfx::rendering::Channel;
use solidmesh::wgpu_utils::{DeviceOp, MemoryDevice, MemoryProgram, RecordingPass};
use solidmesh::{MeshDrawable, MeshError, Shading};

const PROGRAM: MemoryProgram = MemoryProgram { label: "phong" };

fn all_kinds() -> [ShapeKind; 3] {
    [
        ShapeKind::SquarePyramid,
        ShapeKind::Cone(ConeParams::default()),
        ShapeKind::RegularOctahedron,
    ]
}

fn region(bytes: &[u8], mesh: &MeshDrawable<MemoryDevice>, channel: Channel) -> Vec<u8> {
    let range = mesh.layout().range(channel).unwrap().byte_range();
    bytes[range.start as usize..range.end as usize].to_vec()
}

#[test]
fn index_invariants_hold_for_every_shape() {
    let device = MemoryDevice::new();
    for kind in all_kinds() {
        let mesh = MeshDrawable::new(&device, kind).unwrap();
        let topology = mesh.topology();
        assert_eq!(topology.indices.len(), 3 * topology.face_count(), "{kind}");
        assert!(topology
            .indices
            .iter()
            .all(|&i| (i as usize) < topology.slot_count()));
    }
}

#[test]
fn smooth_then_flat_restores_flat_bits() {
    let device = MemoryDevice::new();
    for kind in all_kinds() {
        let mut mesh = MeshDrawable::new(&device, kind).unwrap();
        let uploaded = device.contents(mesh.vertex_buffer().unwrap()).unwrap();

        mesh.toggle_shading(&device, Shading::Smooth).unwrap();
        let smooth = device.contents(mesh.vertex_buffer().unwrap()).unwrap();
        assert_ne!(
            region(&smooth, &mesh, Channel::Normal),
            region(&uploaded, &mesh, Channel::Normal),
            "{kind}"
        );

        mesh.toggle_shading(&device, Shading::Flat).unwrap();
        let restored = device.contents(mesh.vertex_buffer().unwrap()).unwrap();
        assert_eq!(restored, uploaded, "{kind}");

        let flat: &[u8] = bytemuck::cast_slice(mesh.topology().flat_normals.as_flattened());
        assert_eq!(region(&restored, &mesh, Channel::Normal), flat);
    }
}

#[test]
fn toggles_leave_other_channels_untouched() {
    let device = MemoryDevice::new();
    let mut mesh = MeshDrawable::new(&device, ShapeKind::SquarePyramid).unwrap();
    let uploaded = device.contents(mesh.vertex_buffer().unwrap()).unwrap();

    for shading in [Shading::Smooth, Shading::Flat, Shading::Smooth] {
        mesh.toggle_shading(&device, shading).unwrap();
        let now = device.contents(mesh.vertex_buffer().unwrap()).unwrap();
        for range in mesh.layout().ranges() {
            if range.channel == Channel::Normal {
                continue;
            }
            assert_eq!(
                region(&now, &mesh, range.channel),
                region(&uploaded, &mesh, range.channel)
            );
        }
    }
}

#[test]
fn toggle_rewrites_exactly_the_normal_range() {
    let device = MemoryDevice::new();
    let mut mesh = MeshDrawable::new(&device, ShapeKind::Cone(ConeParams::default())).unwrap();
    let layout_before = mesh.layout().clone();
    device.clear_log();

    mesh.toggle_shading(&device, Shading::Smooth).unwrap();

    let buffer = mesh.vertex_buffer().unwrap().id();
    let normal = mesh.layout().range(Channel::Normal).unwrap().byte_range();
    assert_eq!(
        device.ops(),
        vec![DeviceOp::Write {
            buffer,
            range: normal
        }]
    );
    assert_eq!(mesh.layout(), &layout_before);
}

#[test]
fn draw_sees_latest_shading() {
    let device = MemoryDevice::new();
    let mut mesh = MeshDrawable::new(&device, ShapeKind::RegularOctahedron).unwrap();
    let mut pass = RecordingPass::new(&device);

    mesh.draw(&mut pass, &PROGRAM).unwrap();
    mesh.toggle_shading(&device, Shading::Smooth).unwrap();
    mesh.draw(&mut pass, &PROGRAM).unwrap();

    let draws = pass.draws();
    assert_eq!(draws.len(), 2);
    let flat: &[u8] = bytemuck::cast_slice(mesh.topology().flat_normals.as_flattened());
    let smooth: &[u8] = bytemuck::cast_slice(mesh.smooth_normals().unwrap().as_flattened());
    assert_eq!(region(&draws[0].vertex_bytes, &mesh, Channel::Normal), flat);
    assert_eq!(region(&draws[1].vertex_bytes, &mesh, Channel::Normal), smooth);
}

#[test]
fn cone_segment_scenarios() {
    let device = MemoryDevice::new();

    let err = MeshDrawable::new(&device, ShapeKind::Cone(ConeParams::default().with_segments(2)));
    assert!(matches!(err, Err(MeshError::InvalidParameter { .. })));

    let cone = MeshDrawable::new(&device, ShapeKind::Cone(ConeParams::default().with_segments(32)))
        .unwrap();
    assert_eq!(cone.topology().face_count(), 32);
    assert_eq!(cone.index_count(), 96);
}

#[test]
fn draw_after_delete_is_rejected() {
    let device = MemoryDevice::new();
    let mut mesh = MeshDrawable::new(&device, ShapeKind::SquarePyramid).unwrap();
    let mut pass = RecordingPass::new(&device);

    mesh.draw(&mut pass, &PROGRAM).unwrap();
    mesh.delete(&device).unwrap();

    assert!(matches!(
        mesh.draw(&mut pass, &PROGRAM),
        Err(MeshError::ResourceMisuse(_))
    ));
    assert_eq!(pass.draws().len(), 1);
    assert_eq!(device.live_buffers(), 0);
}

#[test]
fn drawables_do_not_share_buffers() {
    let device = MemoryDevice::new();
    let mut a = MeshDrawable::new(&device, ShapeKind::SquarePyramid).unwrap();
    let b = MeshDrawable::new(&device, ShapeKind::SquarePyramid).unwrap();
    let b_before = device.contents(b.vertex_buffer().unwrap()).unwrap();

    a.toggle_shading(&device, Shading::Smooth).unwrap();

    assert_ne!(a.vertex_buffer().unwrap().id(), b.vertex_buffer().unwrap().id());
    assert_eq!(device.contents(b.vertex_buffer().unwrap()).unwrap(), b_before);
}
