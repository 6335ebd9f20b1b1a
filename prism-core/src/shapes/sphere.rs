/// UV sphere tessellation
use std::f32::consts::PI;

use nalgebra::{Point3, Vector3};

use super::{emit_tile, ring_point, wedge_angle, Corners, Tessellate, TileKind};
use crate::geometry::{Vertex, VertexBuffer};

const RADIUS: f32 = 0.5;

/// UV sphere of radius 0.5: `param1` latitude bands pole to pole,
/// `param2` wedges around the y axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl Tessellate for Sphere {
    const MIN_PARAM1: i32 = 2;
    const MIN_PARAM2: i32 = 3;

    fn generate(&self, param1: i32, param2: i32) -> VertexBuffer {
        let (bands, wedges) = Self::clamp(param1, param2);
        let mut buffer = VertexBuffer::with_triangle_capacity(Self::triangle_count(param1, param2));

        for w in 0..wedges {
            make_wedge(&mut buffer, bands, wedge_angle(w, wedges), wedge_angle(w + 1, wedges));
        }
        buffer
    }

    fn triangle_count(param1: i32, param2: i32) -> usize {
        let (bands, wedges) = Self::clamp(param1, param2);
        wedges as usize * (2 * bands as usize - 2)
    }
}

fn latitude_point(phi: f32, theta: f32) -> Point3<f32> {
    ring_point(RADIUS * phi.sin(), theta, RADIUS * phi.cos())
}

fn normal(p: &Point3<f32>) -> Vector3<f32> {
    p.coords.normalize()
}

fn make_wedge(buffer: &mut VertexBuffer, bands: u32, current: f32, next: f32) {
    let north = Point3::new(0.0, RADIUS, 0.0);
    let south = Point3::new(0.0, -RADIUS, 0.0);
    let v = |p: Point3<f32>| Vertex::new(p, normal(&p));

    for i in 0..bands {
        let top_phi = PI * i as f32 / bands as f32;
        let bottom_phi = PI * (i + 1) as f32 / bands as f32;

        let corners = Corners {
            top_left: latitude_point(top_phi, next),
            top_right: latitude_point(top_phi, current),
            bottom_left: latitude_point(bottom_phi, next),
            bottom_right: latitude_point(bottom_phi, current),
        };

        if i == 0 {
            buffer.push_triangle(v(north), v(corners.bottom_left), v(corners.bottom_right));
        } else if i == bands - 1 {
            buffer.push_triangle(v(corners.top_left), v(south), v(corners.top_right));
        } else {
            emit_tile(buffer, TileKind::BodyTile, &corners, normal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::test_support::*;

    #[test]
    fn test_minimum_resolution() {
        let buffer = Sphere.generate(2, 3);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.len() % 18, 0);
        assert_eq!(buffer.triangle_count(), 6);
        assert_unit_normals(&buffer);
    }

    #[test]
    fn test_parameters_are_clamped() {
        assert_eq!(Sphere.generate(0, -4), Sphere.generate(2, 3));
        assert_eq!(Sphere.generate(1, 3), Sphere.generate(2, 3));
    }

    #[test]
    fn test_triangle_count() {
        let buffer = Sphere.generate(5, 7);
        assert_eq!(buffer.triangle_count(), 7 * (2 * 5 - 2));
    }

    #[test]
    fn test_vertices_lie_on_sphere() {
        let buffer = Sphere.generate(6, 9);
        for vertex in buffer.vertices() {
            assert!((vertex.position.coords.norm() - RADIUS).abs() < 1e-5);
            assert!((vertex.normal - vertex.position.coords * 2.0).norm() < 1e-5);
        }
    }

    #[test]
    fn test_closed_and_outward() {
        for (p1, p2) in [(2, 3), (3, 4), (10, 12)] {
            let buffer = Sphere.generate(p1, p2);
            assert_outward_winding(&buffer);
            assert_no_degenerate_triangles(&buffer);
            assert_within_unit_cube(&buffer);
        }
    }
}
