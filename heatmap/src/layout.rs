use crate::Vertex;

/// Types that can be fed to a render pipeline as per-vertex input.
pub trait VertexLayout {
    const LAYOUT: wgpu::VertexBufferLayout<'static>;
}

impl VertexLayout for Vertex {
    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: Vertex::SIZE as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // pos
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: Vertex::POS_OFFSET as wgpu::BufferAddress,
                shader_location: 0,
            },
            // color
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: Vertex::COLOR_OFFSET as wgpu::BufferAddress,
                shader_location: 1,
            },
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex() {
        let target = Vertex::LAYOUT;

        assert_eq!(32, target.array_stride);
        assert_eq!(wgpu::VertexStepMode::Vertex, target.step_mode);
        assert_eq!(2, target.attributes.len());

        let pos = target.attributes[0];

        assert_eq!(0, pos.shader_location);
        assert_eq!(0, pos.offset);
        assert_eq!(wgpu::VertexFormat::Float32x2, pos.format);

        let color = target.attributes[1];

        assert_eq!(1, color.shader_location);
        assert_eq!(16, color.offset);
        assert_eq!(wgpu::VertexFormat::Float32x4, color.format);
    }

    #[test]
    fn attributes_fit_in_stride() {
        for attr in Vertex::LAYOUT.attributes {
            assert!(attr.offset + attr.format.size() <= Vertex::SIZE as u64);
        }
    }
}
