//! Headless report on the built-in solids.
//!
//! Builds every solid, uploads it, switches shading back and forth and prints
//! what ended up in the buffers. Runs against host memory by default, or a
//! real adapter with `--gpu`.

use anyhow::{Context, Result};
use clap::Parser;
use solidmesh::gfx::geometry::{ConeParams, ShapeKind};
use solidmesh::gfx::rendering::Channel;
use solidmesh::wgpu_utils::{MemoryDevice, RenderDevice, WgpuDevice};
use solidmesh::{MeshDrawable, Shading};

#[derive(Parser)]
#[command(name = "mesh_report")]
#[command(about = "Build the procedural solids and report their buffers", long_about = None)]
struct Cli {
    /// Cone segment count
    #[arg(short, long, default_value_t = 32)]
    segments: u32,

    /// Upload to a wgpu adapter instead of host memory
    #[arg(long)]
    gpu: bool,

    /// Leave every solid smooth-shaded
    #[arg(long)]
    smooth: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let kinds = [
        ShapeKind::SquarePyramid,
        ShapeKind::Cone(ConeParams::default().with_segments(cli.segments)),
        ShapeKind::RegularOctahedron,
    ];
    let final_shading = if cli.smooth {
        Shading::Smooth
    } else {
        Shading::Flat
    };

    if cli.gpu {
        let device = pollster::block_on(request_device())?;
        report(&device, &kinds, final_shading)?;
        device.queue().submit(None);
    } else {
        report(&MemoryDevice::new(), &kinds, final_shading)?;
    }
    Ok(())
}

async fn request_device() -> Result<WgpuDevice> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .context("no graphics adapter available")?;
    log::info!("using adapter {}", adapter.get_info().name);

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("mesh_report device"),
            required_features: wgpu::Features::default(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            memory_hints: wgpu::MemoryHints::default(),
            trace: wgpu::Trace::Off,
        })
        .await
        .context("failed to open the graphics device")?;
    Ok(WgpuDevice::new(device, queue))
}

fn report<D: RenderDevice>(device: &D, kinds: &[ShapeKind], final_shading: Shading) -> Result<()> {
    for &kind in kinds {
        let mut mesh =
            MeshDrawable::new(device, kind).with_context(|| format!("building {kind}"))?;

        println!("{kind}");
        println!(
            "  faces {:>4}  slots {:>4}  indices {:>4}  buffer {} bytes",
            mesh.topology().face_count(),
            mesh.topology().slot_count(),
            mesh.index_count(),
            mesh.layout().total_size()
        );
        for range in mesh.layout().ranges() {
            println!(
                "  {:<9} location {}  bytes {:?}",
                range.channel.name(),
                range.channel.shader_location(),
                range.byte_range()
            );
        }

        mesh.toggle_shading(device, Shading::Smooth)?;
        mesh.toggle_shading(device, final_shading)?;

        if let Some(v) = mesh.vertex(0) {
            println!("  slot 0 at {:?}", v.position);
            println!("    flat   {:?}", v.face_normal);
            if let Some(smooth) = v.vertex_normal {
                println!("    smooth {smooth:?}");
            }
            println!("    active {:?} ({:?})", v.active, mesh.shading());
        }
        if mesh.layout().range(Channel::Color).is_none() {
            log::debug!("{kind} has no color channel");
        }

        mesh.delete(device)?;
    }
    Ok(())
}
