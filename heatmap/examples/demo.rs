//! Animated heatmap in a window.
//!
//! Press space to switch between points and cells, escape to quit.

use std::error::Error;
use std::time::Instant;

use futures::executor::block_on;
use heatmap::{Grid, GridMode, Heatmap, HeatmapConfig};
use log::LevelFilter;
use winit::event::{
    ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent,
};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new();

    let window = WindowBuilder::new()
        .with_title("heatmap")
        .build(&event_loop)?;

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
    let surface = unsafe { instance.create_surface(&window) }?;

    let adapter =
        block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .ok_or("couldn't find a suitable adapter")?;

    let (device, queue) = block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("heatmap_device"),
            features: wgpu::Features::empty(),
            limits: wgpu::Limits::downlevel_defaults(),
        },
        None,
    ))?;

    let caps = surface.get_capabilities(&adapter);

    let format = caps
        .formats
        .iter()
        .copied()
        .find(|format| format.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .ok_or("surface is incompatible with the adapter")?;

    let size = window.inner_size();

    let mut surface_config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::Fifo,
        alpha_mode: caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto),
        view_formats: Vec::new(),
    };

    surface.configure(&device, &surface_config);

    let mut config = HeatmapConfig::default();
    let mut heatmap = Heatmap::new(&device, format, config)?;
    let started_at = Instant::now();

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                ..
            } => {
                control_flow.set_exit();
            }

            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Space),
                        ..
                    },
                ..
            } => {
                config = match config.mode {
                    GridMode::Points => HeatmapConfig::default(),
                    GridMode::Triangles => HeatmapConfig::points(),
                };

                match Heatmap::new(&device, format, config) {
                    Ok(new_heatmap) => heatmap = new_heatmap,
                    Err(err) => log::error!("Couldn't switch modes: {err}"),
                }
            }

            WindowEvent::Resized(size) => {
                surface_config.width = size.width.max(1);
                surface_config.height = size.height.max(1);
                surface.configure(&device, &surface_config);
            }

            _ => (),
        },

        Event::MainEventsCleared => {
            window.request_redraw();
        }

        Event::RedrawRequested(_) => {
            let time = started_at.elapsed().as_secs_f32();
            let values = waves(heatmap.grid(), heatmap.config().mode, time);

            if let Err(err) = heatmap.set_values(&values) {
                log::error!("Couldn't update heatmap: {err}");
                control_flow.set_exit();
                return;
            }

            heatmap.flush(&device, &queue);

            let frame = match surface.get_current_texture() {
                Ok(frame) => frame,

                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    surface.configure(&device, &surface_config);
                    return;
                }

                Err(err) => {
                    log::error!("Couldn't acquire frame: {err}");
                    control_flow.set_exit();
                    return;
                }
            };

            let view = frame
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());

            let mut encoder = device.create_command_encoder(
                &wgpu::CommandEncoderDescriptor {
                    label: Some("heatmap_encoder"),
                },
            );

            heatmap.render(&mut encoder, &view);
            queue.submit([encoder.finish()]);
            frame.present();
        }

        _ => (),
    })
}

/// Interference of two waves drifting across the grid.
fn waves(grid: Grid, mode: GridMode, time: f32) -> Vec<f32> {
    grid.samples(mode)
        .map(|pos| {
            (pos.x * 3.0 + time).sin() * (pos.y * 2.0 - time * 0.7).cos()
        })
        .collect()
}
