/// Tessellation of the four parametric solids
///
/// Every solid fits the unit cube `[-0.5, 0.5]^3` and is emitted as a
/// counter-clockwise triangle list with per-vertex normals. `param1` sets the
/// subdivision along the axis (or the face grid for the cube) and `param2`
/// the number of wedges around the y axis. Parameters below a shape's minimum
/// are clamped, never rejected.
use nalgebra::{Point3, Vector3};

use crate::geometry::{Vertex, VertexBuffer};
use crate::scene::PrimitiveKind;

mod cone;
mod cube;
mod cylinder;
mod sphere;

pub use cone::Cone;
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use sphere::Sphere;

/// Common contract of the tessellators
pub trait Tessellate {
    const MIN_PARAM1: i32;
    const MIN_PARAM2: i32;

    /// Generate a fresh buffer for the given resolution.
    fn generate(&self, param1: i32, param2: i32) -> VertexBuffer;

    /// Triangles `generate` emits for these parameters, after clamping
    fn triangle_count(param1: i32, param2: i32) -> usize;

    /// Raise both parameters to this shape's minimum.
    fn clamp(param1: i32, param2: i32) -> (u32, u32) {
        let clamped = (param1.max(Self::MIN_PARAM1), param2.max(Self::MIN_PARAM2));
        if clamped != (param1, param2) {
            log::trace!(
                "clamped tessellation parameters ({param1}, {param2}) to ({}, {})",
                clamped.0,
                clamped.1
            );
        }
        (clamped.0 as u32, clamped.1 as u32)
    }
}

impl PrimitiveKind {
    /// Tessellate this kind of solid.
    pub fn tessellate(self, param1: i32, param2: i32) -> VertexBuffer {
        match self {
            PrimitiveKind::Sphere => Sphere.generate(param1, param2),
            PrimitiveKind::Cube => Cube.generate(param1, param2),
            PrimitiveKind::Cone => Cone.generate(param1, param2),
            PrimitiveKind::Cylinder => Cylinder.generate(param1, param2),
        }
    }
}

/// How a patch between two rings is turned into triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TileKind {
    /// Curved side surface, normals from the shape's analytic normal
    BodyTile,
    /// Flat disk facing +y
    TopCap,
    /// Flat disk facing -y
    BottomCap,
    /// Top edge collapsed to one apex vertex
    ApexFan,
}

/// Patch corners as seen from outside the solid.
///
/// For caps the top edge is the inner ring; at the disk center it collapses
/// to a point and a single triangle is emitted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Corners {
    pub top_left: Point3<f32>,
    pub top_right: Point3<f32>,
    pub bottom_left: Point3<f32>,
    pub bottom_right: Point3<f32>,
}

/// Emit one patch into `buffer`. `body_normal` supplies the surface normal
/// for `BodyTile` and `ApexFan` patches.
pub(crate) fn emit_tile<F>(buffer: &mut VertexBuffer, kind: TileKind, c: &Corners, body_normal: F)
where
    F: Fn(&Point3<f32>) -> Vector3<f32>,
{
    match kind {
        TileKind::BodyTile => {
            let v = |p: Point3<f32>| Vertex::new(p, body_normal(&p));
            buffer.push_tile(
                v(c.top_left),
                v(c.top_right),
                v(c.bottom_left),
                v(c.bottom_right),
            );
        }
        TileKind::TopCap => emit_flat(buffer, c, Vector3::y()),
        TileKind::BottomCap => emit_flat(buffer, c, -Vector3::y()),
        TileKind::ApexFan => {
            // the apex has no defined normal; borrow the one below it
            let mid = Point3::from((c.bottom_left.coords + c.bottom_right.coords) * 0.5);
            buffer.push_triangle(
                Vertex::new(c.top_left, body_normal(&mid)),
                Vertex::new(c.bottom_left, body_normal(&c.bottom_left)),
                Vertex::new(c.bottom_right, body_normal(&c.bottom_right)),
            );
        }
    }
}

fn emit_flat(buffer: &mut VertexBuffer, c: &Corners, normal: Vector3<f32>) {
    let v = |p: Point3<f32>| Vertex::new(p, normal);
    if c.top_left == c.top_right {
        buffer.push_triangle(v(c.top_left), v(c.bottom_left), v(c.bottom_right));
    } else {
        buffer.push_tile(
            v(c.top_left),
            v(c.top_right),
            v(c.bottom_left),
            v(c.bottom_right),
        );
    }
}

/// Point on the ring of `radius` at height `y`, angle measured from +x towards +z
pub(crate) fn ring_point(radius: f32, theta: f32, y: f32) -> Point3<f32> {
    Point3::new(radius * theta.cos(), y, radius * theta.sin())
}

/// Angle of wedge boundary `i` out of `wedges`
pub(crate) fn wedge_angle(i: u32, wedges: u32) -> f32 {
    std::f32::consts::TAU * i as f32 / wedges as f32
}

/// Flat disk at height `y` for one wedge, split into `rings` concentric bands.
///
/// `current`/`next` are the wedge's bounding angles; `kind` picks the facing.
pub(crate) fn emit_cap(
    buffer: &mut VertexBuffer,
    kind: TileKind,
    y: f32,
    radius: f32,
    rings: u32,
    current: f32,
    next: f32,
) {
    // seen from above, the next angle is on the left; from below, on the right
    let (left, right) = match kind {
        TileKind::TopCap => (next, current),
        _ => (current, next),
    };

    for k in 0..rings {
        let inner = radius * k as f32 / rings as f32;
        let outer = radius * (k + 1) as f32 / rings as f32;
        let corners = Corners {
            top_left: ring_point(inner, left, y),
            top_right: ring_point(inner, right, y),
            bottom_left: ring_point(outer, left, y),
            bottom_right: ring_point(outer, right, y),
        };
        emit_tile(buffer, kind, &corners, |_| Vector3::zeros());
    }
}

/// All four tessellated solids at one resolution.
///
/// A change of parameters discards and rebuilds every buffer; there is no
/// incremental update.
#[derive(Debug, Clone)]
pub struct ShapeBuffers {
    params: (i32, i32),
    sphere: VertexBuffer,
    cube: VertexBuffer,
    cone: VertexBuffer,
    cylinder: VertexBuffer,
}

impl ShapeBuffers {
    pub fn new(param1: i32, param2: i32) -> Self {
        let mut buffers = Self {
            params: (param1, param2),
            sphere: VertexBuffer::new(),
            cube: VertexBuffer::new(),
            cone: VertexBuffer::new(),
            cylinder: VertexBuffer::new(),
        };
        buffers.regenerate();
        buffers
    }

    /// Requested (unclamped) parameters of the current buffers
    pub fn params(&self) -> (i32, i32) {
        self.params
    }

    /// Regenerate if the parameters changed. Returns whether it did.
    pub fn update(&mut self, param1: i32, param2: i32) -> bool {
        if self.params == (param1, param2) {
            return false;
        }
        self.params = (param1, param2);
        self.regenerate();
        true
    }

    /// Rebuild every buffer from the current parameters.
    pub fn regenerate(&mut self) {
        let (param1, param2) = self.params;
        self.sphere = Sphere.generate(param1, param2);
        self.cube = Cube.generate(param1, param2);
        self.cone = Cone.generate(param1, param2);
        self.cylinder = Cylinder.generate(param1, param2);

        log::debug!(
            "regenerated shape buffers for ({param1}, {param2}): sphere={} cube={} cone={} cylinder={} vertices",
            self.sphere.vertex_count(),
            self.cube.vertex_count(),
            self.cone.vertex_count(),
            self.cylinder.vertex_count()
        );
    }

    pub fn get(&self, kind: PrimitiveKind) -> &VertexBuffer {
        match kind {
            PrimitiveKind::Sphere => &self.sphere,
            PrimitiveKind::Cube => &self.cube,
            PrimitiveKind::Cone => &self.cone,
            PrimitiveKind::Cylinder => &self.cylinder,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::geometry::VertexBuffer;

    /// Every triangle winds counter-clockwise relative to its vertex normals.
    pub fn assert_outward_winding(buffer: &VertexBuffer) {
        for (i, triangle) in buffer.triangles().enumerate() {
            let face = triangle.calculate_normal();
            let [a, b, c] = &triangle.vertices;
            let average = (a.normal + b.normal + c.normal) / 3.0;
            assert!(
                face.dot(&average) > 0.0,
                "triangle {i} winds against its normals: {triangle:?}"
            );
        }
    }

    pub fn assert_unit_normals(buffer: &VertexBuffer) {
        for vertex in buffer.vertices() {
            assert!(
                (vertex.normal.norm() - 1.0).abs() < 1e-5,
                "normal {:?} is not unit length",
                vertex.normal
            );
        }
    }

    pub fn assert_no_degenerate_triangles(buffer: &VertexBuffer) {
        for triangle in buffer.triangles() {
            assert!(triangle.area() > 1e-7, "zero-area triangle {triangle:?}");
        }
    }

    pub fn assert_within_unit_cube(buffer: &VertexBuffer) {
        for vertex in buffer.vertices() {
            for c in vertex.position.iter() {
                assert!(c.abs() <= 0.5 + 1e-5, "{:?} leaves the unit cube", vertex.position);
            }
        }
    }
}
