//! Mesh data structures

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Interleaved layout of a mesh buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexLayout {
    /// position (3) + color (3)
    PositionColor,
    /// position (3) + color (3) + texcoord (2) + normal (3)
    #[default]
    PositionColorTexNormal,
}

impl VertexLayout {
    pub fn from_texcoord_normal(include_texcoord_normal: bool) -> Self {
        if include_texcoord_normal {
            VertexLayout::PositionColorTexNormal
        } else {
            VertexLayout::PositionColor
        }
    }

    /// Number of floats per vertex record
    pub fn stride(&self) -> usize {
        match self {
            VertexLayout::PositionColor => 6,
            VertexLayout::PositionColorTexNormal => 11,
        }
    }

    pub fn has_texcoord_normal(&self) -> bool {
        matches!(self, VertexLayout::PositionColorTexNormal)
    }

    /// Attribute locations as (location, component count, float offset)
    pub fn attributes(&self) -> &'static [(u32, usize, usize)] {
        match self {
            VertexLayout::PositionColor => &[(0, 3, 0), (1, 3, 3)],
            VertexLayout::PositionColorTexNormal => &[(0, 3, 0), (1, 3, 3), (2, 2, 6), (3, 3, 8)],
        }
    }
}

/// One expanded face-vertex reference
///
/// `uv` and `normal` are zero when the buffer layout does not carry them.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec3,
    pub uv: Vec2,
    pub normal: Vec3,
}

/// Non-indexed vertex buffer produced by the mesh loader
#[derive(Debug, Clone)]
pub struct MeshBuffer {
    pub name: String,
    pub layout: VertexLayout,
    pub vertices: Vec<Vertex>,
}

impl MeshBuffer {
    pub fn new(name: &str, layout: VertexLayout) -> Self {
        Self {
            name: name.to_string(),
            layout,
            vertices: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Flat float buffer in the configured layout
    pub fn interleaved(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertex_count() * self.stride());
        for vertex in &self.vertices {
            data.extend_from_slice(&vertex.position.to_array());
            data.extend_from_slice(&vertex.color.to_array());
            if self.layout.has_texcoord_normal() {
                data.extend_from_slice(&vertex.uv.to_array());
                data.extend_from_slice(&vertex.normal.to_array());
            }
        }
        data
    }

    /// Interleaved buffer as bytes, ready for upload
    pub fn to_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.interleaved()).to_vec()
    }

    /// Axis-aligned bounds of all positions, or `None` for an empty buffer
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(min, max), v| {
            (min.min(v.position), max.max(v.position))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f32) -> Vertex {
        Vertex {
            position: Vec3::new(x, 2.0 * x, -x),
            color: Vec3::X,
            uv: Vec2::new(0.25, 0.75),
            normal: Vec3::Z,
        }
    }

    #[test]
    fn test_interleaved_full_layout() {
        let mut mesh = MeshBuffer::new("full", VertexLayout::PositionColorTexNormal);
        mesh.vertices.push(vertex(1.0));
        mesh.vertices.push(vertex(2.0));

        let data = mesh.interleaved();
        assert_eq!(mesh.stride(), 11);
        assert_eq!(data.len(), mesh.vertex_count() * mesh.stride());
        assert_eq!(
            &data[..11],
            &[1.0, 2.0, -1.0, 1.0, 0.0, 0.0, 0.25, 0.75, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_interleaved_position_color_layout() {
        let mut mesh = MeshBuffer::new("short", VertexLayout::PositionColor);
        mesh.vertices.push(vertex(3.0));

        let data = mesh.interleaved();
        assert_eq!(mesh.stride(), 6);
        assert_eq!(data, vec![3.0, 6.0, -3.0, 1.0, 0.0, 0.0]);
        assert_eq!(mesh.to_bytes().len(), 6 * std::mem::size_of::<f32>());
    }

    #[test]
    fn test_attribute_offsets_cover_stride() {
        for layout in [VertexLayout::PositionColor, VertexLayout::PositionColorTexNormal] {
            let (_, count, offset) = *layout.attributes().last().unwrap();
            assert_eq!(offset + count, layout.stride());
        }
    }

    #[test]
    fn test_bounds() {
        let mut mesh = MeshBuffer::new("bounds", VertexLayout::PositionColor);
        assert!(mesh.bounds().is_none());
        mesh.vertices.push(vertex(1.0));
        mesh.vertices.push(vertex(-2.0));
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(-2.0, -4.0, -1.0));
        assert_eq!(max, Vec3::new(1.0, 2.0, 2.0));
    }
}
