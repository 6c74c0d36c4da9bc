//! UV sphere tessellation.
//!
//! Vertex order, pole handling, and triangle winding follow the common
//! `SphereGeometry` layout: `(width + 1) * (height + 1)` vertices laid out
//! row by row from the north pole, with the degenerate pole triangles
//! omitted.

use std::f32::consts::{PI, TAU};

/// Interleaved sphere vertex: position, outward normal, texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
    /// Texture coordinate; `v = 0` is the north pole (top image row).
    pub uv: [f32; 2],
}

impl SphereVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    /// Vertex buffer layout matching `sphere.wgsl` locations 0..=2.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side indexed sphere mesh.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    /// Interleaved vertices.
    pub vertices: Vec<SphereVertex>,
    /// Triangle list indices (counter-clockwise when viewed from outside).
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Tessellate a sphere of `radius` with the given segment counts.
    ///
    /// Segment counts are clamped to at least 3 around and 2 from pole to
    /// pole.
    #[must_use]
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let w = width_segments.max(3);
        let h = height_segments.max(2);

        let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
        for iy in 0..=h {
            let v = iy as f32 / h as f32;
            let u_offset = if iy == 0 {
                0.5 / w as f32
            } else if iy == h {
                -0.5 / w as f32
            } else {
                0.0
            };
            let theta = v * PI;
            for ix in 0..=w {
                let u = ix as f32 / w as f32;
                let phi = u * TAU;
                let normal = [
                    -phi.cos() * theta.sin(),
                    theta.cos(),
                    phi.sin() * theta.sin(),
                ];
                vertices.push(SphereVertex {
                    position: normal.map(|c| c * radius),
                    normal,
                    uv: [u + u_offset, v],
                });
            }
        }

        let row = w + 1;
        let mut indices = Vec::with_capacity((6 * w * (h - 1)) as usize);
        for iy in 0..h {
            for ix in 0..w {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != h - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { vertices, indices }
    }

    /// Number of indices, as the draw call expects it.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn vertex_and_index_counts() {
        let mesh = SphereMesh::new(1.3, 62, 62);
        assert_eq!(mesh.vertices.len(), 63 * 63);
        assert_eq!(mesh.indices.len(), 6 * 62 * 61);
        assert_eq!(mesh.index_count(), mesh.indices.len() as u32);
    }

    #[test]
    fn vertices_lie_on_the_sphere() {
        let mesh = SphereMesh::new(50.0, 16, 12);
        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            assert!((p.length() - 50.0).abs() < 1e-3);
            assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn first_row_is_north_pole() {
        let mesh = SphereMesh::new(2.0, 8, 4);
        let top = mesh.vertices[0];
        assert!((top.position[1] - 2.0).abs() < 1e-6);
        assert_eq!(top.uv[1], 0.0);
        let bottom = mesh.vertices[mesh.vertices.len() - 1];
        assert!((bottom.position[1] + 2.0).abs() < 1e-5);
        assert_eq!(bottom.uv[1], 1.0);
    }

    #[test]
    fn triangles_wind_outward() {
        let mesh = SphereMesh::new(1.0, 12, 8);
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]]
                .map(|i| Vec3::from(mesh.vertices[i as usize].position));
            let face_normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(face_normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn degenerate_segment_counts_are_clamped() {
        let mesh = SphereMesh::new(1.0, 0, 0);
        assert_eq!(mesh.vertices.len(), 4 * 3);
        assert_eq!(mesh.indices.len(), 6 * 3);
    }

    #[test]
    fn indices_are_in_range() {
        let mesh = SphereMesh::new(1.0, 7, 5);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }
}
