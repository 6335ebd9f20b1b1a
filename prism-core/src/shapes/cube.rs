/// Cube tessellation
use nalgebra::{Point3, Vector3};

use super::Tessellate;
use crate::geometry::{Vertex, VertexBuffer};

/// Axis-aligned cube spanning `[-0.5, 0.5]^3`, each face split into a
/// `param1 x param1` grid. `param2` is unused.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cube;

/// A face as (outward normal, right, up) seen from outside; `right x up = normal`
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
];

impl Tessellate for Cube {
    const MIN_PARAM1: i32 = 1;
    const MIN_PARAM2: i32 = 0;

    fn generate(&self, param1: i32, _param2: i32) -> VertexBuffer {
        let (divisions, _) = Self::clamp(param1, Self::MIN_PARAM2);
        let mut buffer = VertexBuffer::with_triangle_capacity(Self::triangle_count(param1, 0));

        for (normal, right, up) in FACES {
            make_face(
                &mut buffer,
                divisions,
                Vector3::from(normal),
                Vector3::from(right),
                Vector3::from(up),
            );
        }
        buffer
    }

    fn triangle_count(param1: i32, _param2: i32) -> usize {
        let (divisions, _) = Self::clamp(param1, Self::MIN_PARAM2);
        12 * (divisions as usize).pow(2)
    }
}

fn make_face(
    buffer: &mut VertexBuffer,
    divisions: u32,
    normal: Vector3<f32>,
    right: Vector3<f32>,
    up: Vector3<f32>,
) {
    let origin = Point3::from((normal - right + up) * 0.5);
    let step_right = right / divisions as f32;
    let step_down = -up / divisions as f32;
    let v = |row: u32, col: u32| {
        Vertex::new(
            origin + step_right * col as f32 + step_down * row as f32,
            normal,
        )
    };

    for row in 0..divisions {
        for col in 0..divisions {
            buffer.push_tile(
                v(row, col),
                v(row, col + 1),
                v(row + 1, col),
                v(row + 1, col + 1),
            );
        }
    }
}
