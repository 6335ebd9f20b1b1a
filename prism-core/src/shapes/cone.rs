/// Cone tessellation
use nalgebra::{Point3, Vector3};

use super::{emit_cap, emit_tile, ring_point, wedge_angle, Corners, Tessellate, TileKind};
use crate::geometry::VertexBuffer;

const APEX_Y: f32 = 0.5;
const BASE_Y: f32 = -0.5;
const BASE_RADIUS: f32 = 0.5;

/// Cone with its apex at `y = 0.5` and a base disk of radius 0.5 at
/// `y = -0.5`: `param1` height bands, `param2` wedges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cone;

impl Tessellate for Cone {
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
        wedges as usize * (4 * bands as usize - 2)
    }
}

/// Surface radius at height `y`
fn radius_at(y: f32) -> f32 {
    (APEX_Y - y) / 2.0
}

/// Gradient of `x^2 + z^2 - ((0.5 - y) / 2)^2`, normalized
fn normal(p: &Point3<f32>) -> Vector3<f32> {
    Vector3::new(2.0 * p.x, 0.25 - 0.5 * p.y, 2.0 * p.z).normalize()
}

fn make_wedge(buffer: &mut VertexBuffer, bands: u32, current: f32, next: f32) {
    let apex = Point3::new(0.0, APEX_Y, 0.0);

    for i in 0..bands {
        let y_top = APEX_Y - i as f32 / bands as f32;
        let y_bottom = APEX_Y - (i + 1) as f32 / bands as f32;
        let (r_top, r_bottom) = (radius_at(y_top), radius_at(y_bottom));

        let bottom_left = ring_point(r_bottom, next, y_bottom);
        let bottom_right = ring_point(r_bottom, current, y_bottom);

        if i == 0 {
            let corners = Corners {
                top_left: apex,
                top_right: apex,
                bottom_left,
                bottom_right,
            };
            emit_tile(buffer, TileKind::ApexFan, &corners, normal);
        } else {
            let corners = Corners {
                top_left: ring_point(r_top, next, y_top),
                top_right: ring_point(r_top, current, y_top),
                bottom_left,
                bottom_right,
            };
            emit_tile(buffer, TileKind::BodyTile, &corners, normal);
        }
    }

    emit_cap(buffer, TileKind::BottomCap, BASE_Y, BASE_RADIUS, bands, current, next);
}
