use std::mem;
use std::ops::{Deref, DerefMut};

use crate::Vertex;

/// Vertex buffer that exists both on the host machine and the GPU.
///
/// Vertices are kept in RAM and uploaded on [`Self::flush()`]; [`DerefMut`] is
/// used to track whether they've been modified since the last upload.
#[derive(Debug)]
pub struct VertexBuffer {
    label: String,
    buffer: wgpu::Buffer,
    data: Tracked<Vec<Vertex>>,
    uploaded: usize,
}

impl VertexBuffer {
    pub fn new(
        device: &wgpu::Device,
        label: impl Into<String>,
        data: Vec<Vertex>,
    ) -> Self {
        let label = label.into();
        let buffer = Self::allocate(device, &label, data.len());

        Self {
            label,
            buffer,
            data: Tracked::new(data),
            uploaded: 0,
        }
    }

    fn allocate(
        device: &wgpu::Device,
        label: &str,
        len: usize,
    ) -> wgpu::Buffer {
        let size = len.max(1) * Vertex::SIZE;

        log::info!("Allocating vertex buffer `{label}`; len={len}, size={size}");

        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::VERTEX,
            size: size as _,
            mapped_at_creation: false,
        })
    }

    /// Uploads vertices to the GPU, if they've changed since the last flush.
    ///
    /// Reallocates the underlying buffer when vertices don't fit in it anymore.
    pub fn flush(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        let dirty = self.data.take_dirty();
        let data: &[u8] = bytemuck::cast_slice::<Vertex, u8>(&self.data);

        match Upload::plan(dirty, data.len() as _, self.buffer.size()) {
            Upload::Skip => (),

            Upload::Write => {
                queue.write_buffer(&self.buffer, 0, data);
            }

            Upload::Reallocate => {
                self.buffer =
                    Self::allocate(device, &self.label, self.data.len());

                queue.write_buffer(&self.buffer, 0, data);
            }
        }

        if dirty {
            self.uploaded = self.data.len();
        }
    }

    /// Returns how many vertices the GPU-side buffer holds, as of the last
    /// [`Self::flush()`].
    pub fn uploaded_len(&self) -> usize {
        self.uploaded
    }

    /// Returns the part of the buffer holding the uploaded vertices, for use
    /// with [`wgpu::RenderPass::set_vertex_buffer()`].
    ///
    /// Vertices modified after the last flush are not covered; must not be
    /// called when [`Self::uploaded_len()`] is zero.
    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer
            .slice(..(self.uploaded * Vertex::SIZE) as wgpu::BufferAddress)
    }
}

impl Deref for VertexBuffer {
    type Target = Vec<Vertex>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for VertexBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// Host-side data that remembers whether it's been mutably accessed since the
/// last [`Self::take_dirty()`].
#[derive(Debug)]
struct Tracked<T> {
    data: T,
    dirty: bool,
}

impl<T> Tracked<T> {
    /// Wraps freshly created data, which is considered dirty (i.e. not
    /// uploaded yet).
    fn new(data: T) -> Self {
        Self { data, dirty: true }
    }

    fn take_dirty(&mut self) -> bool {
        mem::take(&mut self.dirty)
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for Tracked<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.dirty = true;

        &mut self.data
    }
}

/// What [`VertexBuffer::flush()`] has to do with the GPU-side buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Upload {
    Skip,
    Write,
    Reallocate,
}

impl Upload {
    fn plan(dirty: bool, size: u64, capacity: u64) -> Self {
        if !dirty || size == 0 {
            Self::Skip
        } else if size > capacity {
            Self::Reallocate
        } else {
            Self::Write
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{vec2, Vec4};

    use super::*;

    #[test]
    fn tracking() {
        let mut target = Tracked::new(vec![Vertex::default()]);

        assert!(target.take_dirty());
        assert!(!target.take_dirty());

        // Reading doesn't count as a modification
        assert_eq!(1, target.len());
        assert!(!target.take_dirty());

        target.push(Vertex::new(vec2(1.0, 2.0), Vec4::ONE));

        assert!(target.take_dirty());
        assert!(!target.take_dirty());
        assert_eq!(2, target.len());
    }

    #[test]
    fn upload_plan() {
        // Clean buffers are never touched
        assert_eq!(Upload::Skip, Upload::plan(false, 64, 64));
        assert_eq!(Upload::Skip, Upload::plan(false, 128, 64));

        // Nothing to write
        assert_eq!(Upload::Skip, Upload::plan(true, 0, 32));

        assert_eq!(Upload::Write, Upload::plan(true, 32, 64));
        assert_eq!(Upload::Write, Upload::plan(true, 64, 64));

        // Data outgrew the buffer
        assert_eq!(Upload::Reallocate, Upload::plan(true, 96, 64));
    }
}
