/// Capped cylinder tessellation
use nalgebra::{Point3, Vector3};

use super::{emit_cap, emit_tile, ring_point, wedge_angle, Corners, Tessellate, TileKind};
use crate::geometry::VertexBuffer;

const RADIUS: f32 = 0.5;
const TOP_Y: f32 = 0.5;
const BOTTOM_Y: f32 = -0.5;

/// Capped cylinder of radius 0.5 from `y = -0.5` to `y = 0.5`:
/// `param1` height bands (and cap rings), `param2` wedges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cylinder;

impl Tessellate for Cylinder {
    const MIN_PARAM1: i32 = 3;
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
        wedges as usize * (6 * bands as usize - 2)
    }
}

// horizontal only: the side never tilts
fn normal(p: &Point3<f32>) -> Vector3<f32> {
    Vector3::new(p.x, 0.0, p.z).normalize()
}

fn make_wedge(buffer: &mut VertexBuffer, bands: u32, current: f32, next: f32) {
    for i in 0..bands {
        let y_top = TOP_Y - i as f32 / bands as f32;
        let y_bottom = TOP_Y - (i + 1) as f32 / bands as f32;

        let corners = Corners {
            top_left: ring_point(RADIUS, next, y_top),
            top_right: ring_point(RADIUS, current, y_top),
            bottom_left: ring_point(RADIUS, next, y_bottom),
            bottom_right: ring_point(RADIUS, current, y_bottom),
        };
        emit_tile(buffer, TileKind::BodyTile, &corners, normal);
    }

    emit_cap(buffer, TileKind::TopCap, TOP_Y, RADIUS, bands, current, next);
    emit_cap(buffer, TileKind::BottomCap, BOTTOM_Y, RADIUS, bands, current, next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::test_support::*;

    #[test]
    fn test_parameters_are_clamped() {
        assert_eq!(Cylinder.generate(2, 2), Cylinder.generate(3, 3));
    }

    #[test]
    fn test_triangle_count() {
        assert_eq!(Cylinder.generate(3, 3).triangle_count(), 3 * 16);
        assert_eq!(Cylinder.generate(5, 10).triangle_count(), 10 * (6 * 5 - 2));
    }

    #[test]
    fn test_side_normals_are_horizontal() {
        let buffer = Cylinder.generate(4, 12);
        for vertex in buffer.vertices() {
            let n = vertex.normal;
            if n.y == 0.0 {
                let radial = Vector3::new(vertex.position.x, 0.0, vertex.position.z) * 2.0;
                assert!((n - radial).norm() < 1e-5);
            } else {
                // caps sit at the ends with a constant axis normal
                assert_eq!(n.x, 0.0);
                assert_eq!(n.z, 0.0);
                assert_eq!(vertex.position.y, 0.5 * n.y);
            }
        }
    }

    #[test]
    fn test_closed_and_outward() {
        for (p1, p2) in [(3, 3), (5, 8), (10, 24)] {
            let buffer = Cylinder.generate(p1, p2);
            assert_unit_normals(&buffer);
            assert_outward_winding(&buffer);
            assert_no_degenerate_triangles(&buffer);
            assert_within_unit_cube(&buffer);
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        assert_eq!(Cylinder.generate(7, 9), Cylinder.generate(7, 9));
    }
}
