//! Sphere meshes uploaded to vertex and index buffers.

use wgpu::util::DeviceExt;

use crate::scene::sphere::SphereMesh;

/// An indexed triangle mesh resident on the GPU.
pub struct GpuMesh {
    /// Interleaved [`SphereVertex`](crate::scene::sphere::SphereVertex) data.
    pub vertex_buffer: wgpu::Buffer,
    /// `u32` triangle indices.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload `mesh`.
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &str, mesh: &SphereMesh) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertices")),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Indices")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
        }
    }

    /// Bind the buffers and draw one instance.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
