//! Conversions between vertices and the raw bytes the GPU reads.

use glam::{vec2, vec4};

use crate::{Error, Result, Vertex};

/// Lays vertices out back-to-back, exactly as they'll sit in a vertex buffer.
pub fn pack(vertices: &[Vertex]) -> Vec<u8> {
    bytemuck::cast_slice(vertices).to_vec()
}

/// Reverses [`pack()`]; the input doesn't have to be aligned.
pub fn unpack(bytes: &[u8]) -> Result<Vec<Vertex>> {
    if bytes.len() % Vertex::SIZE != 0 {
        return Err(Error::InvalidBufferLength {
            len: bytes.len(),
            stride: Vertex::SIZE,
        });
    }

    Ok(bytes
        .chunks_exact(Vertex::SIZE)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}

/// Reads a single vertex the way a shader does, i.e. by fetching the floats
/// at the agreed-upon stride and offsets instead of reinterpreting the bytes
/// as [`Vertex`].
pub fn read_vertex(bytes: &[u8], index: usize) -> Result<Vertex> {
    let count = bytes.len() / Vertex::SIZE;

    if index >= count {
        return Err(Error::OutOfBounds { index, count });
    }

    let vertex = &bytes[index * Vertex::SIZE..][..Vertex::SIZE];

    let read = |offset: usize| {
        f32::from_le_bytes([
            vertex[offset],
            vertex[offset + 1],
            vertex[offset + 2],
            vertex[offset + 3],
        ])
    };

    let pos = vec2(read(Vertex::POS_OFFSET), read(Vertex::POS_OFFSET + 4));

    let color = vec4(
        read(Vertex::COLOR_OFFSET),
        read(Vertex::COLOR_OFFSET + 4),
        read(Vertex::COLOR_OFFSET + 8),
        read(Vertex::COLOR_OFFSET + 12),
    );

    Ok(Vertex::new(pos, color))
}
