/// Prism Core Library - Scene resolution and primitive tessellation
///
/// This library turns a scene tree of transformed nodes into a flat list of
/// world-space shapes, and generates the vertex buffers for the four
/// parametric primitives (sphere, cube, cone, cylinder). Everything here is
/// CPU-side and free of any windowing or GPU dependency.

pub mod assembly;
pub mod camera;
pub mod error;
pub mod geometry;
pub mod lights;
pub mod resolver;
pub mod scene;
pub mod settings;
pub mod shapes;
pub mod transform;

// Re-export commonly used types
pub use assembly::{load_render_data, Scene, SceneDescription, SceneSource};
pub use camera::Camera;
pub use error::{Result, SceneError};
pub use geometry::{Triangle, Vertex, VertexBuffer, FLOATS_PER_VERTEX};
pub use lights::{Light, LightKind, ShaderLight};
pub use resolver::resolve;
pub use scene::{
    CameraData, GlobalData, Material, PrimitiveKind, PrimitiveRef, RenderData, ResolvedShape,
    SceneNode, TextureMap,
};
pub use settings::Settings;
pub use shapes::{Cone, Cube, Cylinder, ShapeBuffers, Sphere, Tessellate};
pub use transform::{RotationState, Transformation};
