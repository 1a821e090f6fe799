use core::{fmt, mem};

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// A single heatmap vertex, as seen by both the host and the shader.
///
/// Layout is pinned to what the shading languages produce for the equivalent
/// `{ vec2<f32>, vec4<f32> }` declaration: `pos` lives at offset 0, `color`
/// is aligned to 16 bytes and the whole record takes 32 bytes. The bytes in
/// between are an explicit, always-zeroed padding member so that the type
/// stays [`Pod`].
#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable)]
pub struct Vertex {
    pub pos: Vec2,
    _padding: Vec2,
    pub color: Vec4,
}

impl Vertex {
    /// Distance, in bytes, between two consecutive vertices in a buffer.
    pub const SIZE: usize = mem::size_of::<Self>();

    pub const POS_OFFSET: usize = mem::offset_of!(Self, pos);
    pub const COLOR_OFFSET: usize = mem::offset_of!(Self, color);

    pub const fn new(pos: Vec2, color: Vec4) -> Self {
        Self {
            pos,
            _padding: Vec2::ZERO,
            color,
        }
    }
}

const _: () = {
    assert!(Vertex::SIZE == 32);
    assert!(Vertex::POS_OFFSET == 0);
    assert!(Vertex::COLOR_OFFSET == 16);
    assert!(mem::align_of::<Vertex>() == 16);
};

impl PartialEq for Vertex {
    fn eq(&self, rhs: &Self) -> bool {
        self.pos == rhs.pos && self.color == rhs.color
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("pos", &self.pos)
            .field("color", &self.color)
            .finish()
    }
}
