//! Grid heatmap rendered with wgpu.
//!
//! The vertex format itself lives in `heatmap-gpu`, so that everything that
//! needs to agree on it (this crate, the shader, tests acting as a GPU) shares
//! the same definition.

mod buffers;
mod config;
mod error;
mod grid;
mod layout;
mod pipeline;

pub mod packing;

pub use heatmap_gpu::*;

pub use self::buffers::*;
pub use self::config::*;
pub use self::error::*;
pub use self::grid::*;
pub use self::layout::*;
pub use self::pipeline::*;

/// Grid heatmap, ready to be drawn into a render target.
///
/// Heat values provided through [`Self::set_values()`] are kept on the host
/// until [`Self::flush()`]; [`Self::render()`] draws whatever got flushed.
pub struct Heatmap {
    config: HeatmapConfig,
    grid: Grid,
    pipeline: HeatmapPipeline,
    vertices: VertexBuffer,
}

impl Heatmap {
    /// Builds the pipeline and the vertex buffer for given config; vertices
    /// start with [`HeatmapConfig::base_color`].
    ///
    /// Fails if the config describes an empty grid.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        config: HeatmapConfig,
    ) -> Result<Self> {
        let grid = config.grid()?;

        log::info!(
            "Initializing; rows={}, cols={}, mode={:?}",
            grid.rows(),
            grid.cols(),
            config.mode,
        );

        let pipeline = HeatmapPipeline::new(device, format, config.mode);

        let vertices = VertexBuffer::new(
            device,
            "heatmap_vertices",
            grid.build(config.mode, |_| config.base_color),
        );

        Ok(Self {
            config,
            grid,
            pipeline,
            vertices,
        })
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Recolors the grid after given heat values; see [`Grid::heatmap()`].
    pub fn set_values(&mut self, values: &[f32]) -> Result<()> {
        *self.vertices = self.grid.heatmap(self.config.mode, values)?;

        Ok(())
    }

    pub fn flush(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        self.vertices.flush(device, queue);
    }

    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("heatmap_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.config.clear_color()),
                    store: true,
                },
            })],
            depth_stencil_attachment: None,
        });

        let len = self.vertices.uploaded_len();

        if len == 0 {
            return;
        }

        self.pipeline.bind(&mut pass);
        pass.set_vertex_buffer(0, self.vertices.slice());
        pass.draw(0..len as u32, 0..1);
    }
}
