use crate::{GridMode, Vertex, VertexLayout};

/// Render pipeline drawing heatmap vertices straight into a color target.
#[derive(Debug)]
pub struct HeatmapPipeline {
    pipeline: wgpu::RenderPipeline,
}

impl HeatmapPipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        mode: GridMode,
    ) -> Self {
        log::debug!("Building pipeline; mode={mode:?}, format={format:?}");

        let shader = device
            .create_shader_module(wgpu::include_wgsl!("shaders/heatmap.wgsl"));

        let layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("heatmap_pipeline_layout"),
                bind_group_layouts: &[],
                push_constant_ranges: &[],
            });

        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("heatmap_pipeline"),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: "vs_main",
                    buffers: &[Vertex::LAYOUT],
                },
                primitive: wgpu::PrimitiveState {
                    topology: topology(mode),
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                multiview: None,
            });

        Self { pipeline }
    }

    pub fn bind<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_pipeline(&self.pipeline);
    }
}

fn topology(mode: GridMode) -> wgpu::PrimitiveTopology {
    match mode {
        GridMode::Points => wgpu::PrimitiveTopology::PointList,
        GridMode::Triangles => wgpu::PrimitiveTopology::TriangleList,
    }
}
