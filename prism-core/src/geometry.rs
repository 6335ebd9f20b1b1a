/// Vertex storage shared by every tessellator
use nalgebra::{Point3, Vector3};

/// Floats stored per vertex: position (3) followed by normal (3)
pub const FLOATS_PER_VERTEX: usize = 6;

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }

    fn from_slice(chunk: &[f32]) -> Self {
        Self {
            position: Point3::new(chunk[0], chunk[1], chunk[2]),
            normal: Vector3::new(chunk[3], chunk[4], chunk[5]),
        }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Calculate the face normal from the triangle's vertices
    ///
    /// Follows the winding order, so a counter-clockwise triangle seen from
    /// outside yields an outward normal.
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }

    pub fn area(&self) -> f32 {
        let [a, b, c] = &self.vertices;
        (b.position - a.position)
            .cross(&(c.position - a.position))
            .norm()
            * 0.5
    }
}

/// Flat interleaved triangle list: every 6 floats is one vertex,
/// every 3 vertices is one triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBuffer {
    data: Vec<f32>,
}

impl VertexBuffer {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Reserve room for `triangles` triangles
    pub fn with_triangle_capacity(triangles: usize) -> Self {
        Self {
            data: Vec::with_capacity(triangles * 3 * FLOATS_PER_VERTEX),
        }
    }

    pub fn push_vertex(&mut self, position: Point3<f32>, normal: Vector3<f32>) {
        self.data
            .extend_from_slice(&[position.x, position.y, position.z]);
        self.data.extend_from_slice(&[normal.x, normal.y, normal.z]);
    }

    pub fn push_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        for v in [a, b, c] {
            self.push_vertex(v.position, v.normal);
        }
    }

    /// Emit a quad as two triangles sharing the TL-BR diagonal.
    ///
    /// Corners are named as seen from the side the quad faces; the output is
    /// counter-clockwise from that side.
    pub fn push_tile(
        &mut self,
        top_left: Vertex,
        top_right: Vertex,
        bottom_left: Vertex,
        bottom_right: Vertex,
    ) {
        self.push_triangle(top_left, bottom_left, bottom_right);
        self.push_triangle(top_left, bottom_right, top_right);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Number of floats in the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.data.len() / FLOATS_PER_VERTEX
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.data
            .chunks_exact(FLOATS_PER_VERTEX)
            .map(Vertex::from_slice)
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.data
            .chunks_exact(FLOATS_PER_VERTEX * 3)
            .map(|tri| {
                Triangle::new(
                    Vertex::from_slice(&tri[0..6]),
                    Vertex::from_slice(&tri[6..12]),
                    Vertex::from_slice(&tri[12..18]),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(x: f32, y: f32) -> Vertex {
        Vertex::new(Point3::new(x, y, 0.0), Vector3::z())
    }

    #[test]
    fn test_push_vertex_layout() {
        let mut buffer = VertexBuffer::new();
        buffer.push_vertex(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(buffer.as_slice(), &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0]);
        assert_eq!(buffer.vertex_count(), 1);
        assert_eq!(buffer.triangle_count(), 0);
    }

    #[test]
    fn test_tile_is_two_ccw_triangles() {
        let mut buffer = VertexBuffer::new();
        buffer.push_tile(flat(0.0, 1.0), flat(1.0, 1.0), flat(0.0, 0.0), flat(1.0, 0.0));

        assert_eq!(buffer.triangle_count(), 2);
        for triangle in buffer.triangles() {
            assert!((triangle.calculate_normal() - Vector3::z()).norm() < 1e-6);
            assert!((triangle.area() - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_vertices_round_trip_through_slice() {
        let mut buffer = VertexBuffer::with_triangle_capacity(1);
        buffer.push_triangle(flat(0.0, 0.0), flat(1.0, 0.0), flat(0.0, 1.0));
        let vertices: Vec<Vertex> = buffer.vertices().collect();
        assert_eq!(vertices[1], flat(1.0, 0.0));
    }
}
