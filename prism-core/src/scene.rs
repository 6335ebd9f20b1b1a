/// Scene data model: the node tree handed over by a scene reader and the
/// flat render data produced from it
use std::path::PathBuf;

use nalgebra::{Matrix3, Matrix4, Point3, Vector3, Vector4};

use crate::lights::Light;
use crate::transform::{self, Transformation};

/// RGBA color
pub type Color = Vector4<f32>;

/// The four parametric solids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Sphere,
    Cube,
    Cone,
    Cylinder,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 4] = [
        PrimitiveKind::Sphere,
        PrimitiveKind::Cube,
        PrimitiveKind::Cone,
        PrimitiveKind::Cylinder,
    ];
}

/// Image mapped onto a material. Loading the image is left to the consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureMap {
    pub path: PathBuf,
    pub repeat_u: f32,
    pub repeat_v: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
    pub texture: Option<TextureMap>,
}

impl Material {
    /// Flat material of a single diffuse color with a faint ambient term
    pub fn diffuse(color: Color) -> Self {
        Self {
            ambient: color * 0.2,
            diffuse: color,
            specular: Vector4::new(1.0, 1.0, 1.0, 1.0),
            shininess: 16.0,
            texture: None,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Vector4::new(1.0, 1.0, 1.0, 1.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveRef {
    pub kind: PrimitiveKind,
    pub material: Material,
}

impl PrimitiveRef {
    pub fn new(kind: PrimitiveKind, material: Material) -> Self {
        Self { kind, material }
    }
}

/// A node of the scene tree. Children are owned exclusively by their parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneNode {
    pub transformations: Vec<Transformation>,
    pub primitives: Vec<PrimitiveRef>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformations.push(transformation);
        self
    }

    pub fn with_primitive(mut self, primitive: PrimitiveRef) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// This node's own transform: its transformation list composed in order
    pub fn local_transform(&self) -> Matrix4<f32> {
        transform::compose(&self.transformations)
    }

    /// Primitives held by this node and all of its descendants
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
            + self
                .children
                .iter()
                .map(SceneNode::primitive_count)
                .sum::<usize>()
    }
}

/// A primitive instance placed in world space
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedShape {
    pub kind: PrimitiveKind,
    pub material: Material,
    /// Cumulative model matrix
    pub ctm: Matrix4<f32>,
    pub inverse_ctm: Matrix4<f32>,
    /// Inverse-transpose of the upper 3x3 of `ctm`
    pub normal_matrix: Matrix3<f32>,
}

impl ResolvedShape {
    pub fn new(primitive: &PrimitiveRef, ctm: Matrix4<f32>) -> Self {
        Self {
            kind: primitive.kind,
            material: primitive.material.clone(),
            ctm,
            inverse_ctm: transform::inverse(&ctm),
            normal_matrix: transform::normal_matrix(&ctm),
        }
    }
}

/// Scene-wide lighting coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalData {
    pub ka: f32,
    pub kd: f32,
    pub ks: f32,
}

impl Default for GlobalData {
    fn default() -> Self {
        Self {
            ka: 0.5,
            kd: 0.5,
            ks: 0.5,
        }
    }
}

/// Camera as described by the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    pub position: Point3<f32>,
    pub look: Vector3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view in radians
    pub height_angle: f32,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 5.0),
            look: Vector3::new(0.0, 0.0, -1.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            height_angle: std::f32::consts::FRAC_PI_4,
        }
    }
}

/// Everything a renderer needs to draw one loaded scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderData {
    pub global: GlobalData,
    pub camera: CameraData,
    pub lights: Vec<Light>,
    /// One record per primitive instance, in traversal order
    pub shapes: Vec<ResolvedShape>,
}
