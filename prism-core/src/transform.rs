/// Scene transformations and the matrix helpers built on them
use nalgebra::{Matrix3, Matrix4, Vector3};

/// One entry of a scene node's transformation list
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    Translate(Vector3<f32>),
    /// Rotation about `axis` (need not be normalized) by `angle` radians
    Rotate { axis: Vector3<f32>, angle: f32 },
    Scale(Vector3<f32>),
    Matrix(Matrix4<f32>),
}

impl Transformation {
    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        Self::Translate(Vector3::new(x, y, z))
    }

    pub fn rotate(axis: Vector3<f32>, angle: f32) -> Self {
        Self::Rotate { axis, angle }
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self::Scale(Vector3::new(x, y, z))
    }

    /// The 4x4 matrix this transformation applies
    pub fn matrix(&self) -> Matrix4<f32> {
        match self {
            Self::Translate(offset) => Matrix4::new_translation(offset),
            Self::Rotate { axis, angle } => Matrix4::new_rotation(axis.normalize() * *angle),
            Self::Scale(factors) => Matrix4::new_nonuniform_scaling(factors),
            Self::Matrix(m) => *m,
        }
    }
}

/// Compose a transformation list left to right: `I * T0 * T1 * ...`
pub fn compose(transformations: &[Transformation]) -> Matrix4<f32> {
    transformations
        .iter()
        .fold(Matrix4::identity(), |acc, t| acc * t.matrix())
}

/// Inverse of `m`. A singular matrix yields all-NaN entries.
pub fn inverse(m: &Matrix4<f32>) -> Matrix4<f32> {
    m.try_inverse()
        .unwrap_or_else(|| Matrix4::from_element(f32::NAN))
}

/// Inverse-transpose of the upper 3x3 block of `m`, for transforming normals.
/// A singular block yields all-NaN entries.
pub fn normal_matrix(m: &Matrix4<f32>) -> Matrix3<f32> {
    let linear: Matrix3<f32> = m.fixed_view::<3, 3>(0, 0).into_owned();
    linear
        .try_inverse()
        .map(|inv| inv.transpose())
        .unwrap_or_else(|| Matrix3::from_element(f32::NAN))
}

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Rotation matrix applying X, then Y, then Z
    pub fn matrix(&self) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(self.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, self.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, self.z));

        rz * ry * rx
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}
