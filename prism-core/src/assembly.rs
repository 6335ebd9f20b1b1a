/// Scene assembly: pulls a description from a scene reader, resolves it and
/// keeps the tessellated shape buffers in step with the current settings
use crate::camera::Camera;
use crate::error::{Result, SceneError};
use crate::geometry::VertexBuffer;
use crate::lights::{self, Light, ShaderLight};
use crate::resolver;
use crate::scene::{CameraData, GlobalData, PrimitiveKind, RenderData, SceneNode};
use crate::settings::Settings;
use crate::shapes::ShapeBuffers;

/// Raw scene as produced by a scene reader
#[derive(Debug, Clone, Default)]
pub struct SceneDescription {
    pub global: GlobalData,
    pub camera: CameraData,
    pub lights: Vec<Light>,
    pub root: Option<SceneNode>,
}

/// Anything that can produce a scene description (file readers, generators)
pub trait SceneSource {
    fn read(&self) -> Result<SceneDescription>;
}

impl SceneSource for SceneDescription {
    fn read(&self) -> Result<SceneDescription> {
        Ok(self.clone())
    }
}

/// Read `source` and resolve it into render data.
pub fn load_render_data<S: SceneSource + ?Sized>(source: &S) -> Result<RenderData> {
    let description = source.read()?;
    validate_camera(&description.camera)?;
    let root = description.root.ok_or(SceneError::MissingRoot)?;

    let shapes = resolver::resolve(&root);
    log::info!(
        "loaded scene: {} shapes, {} lights",
        shapes.len(),
        description.lights.len()
    );

    Ok(RenderData {
        global: description.global,
        camera: description.camera,
        lights: description.lights,
        shapes,
    })
}

fn validate_camera(camera: &CameraData) -> Result<()> {
    let reason = if camera.look.norm() < f32::EPSILON {
        Some("look vector is zero")
    } else if camera.up.cross(&camera.look).norm() < f32::EPSILON * camera.look.norm() {
        Some("up vector is zero or parallel to look")
    } else if !(camera.height_angle > 0.0 && camera.height_angle < std::f32::consts::PI) {
        Some("height angle must be in (0, pi)")
    } else {
        None
    };

    match reason {
        Some(reason) => {
            log::warn!("rejecting camera {camera:?}: {reason}");
            Err(SceneError::InvalidCamera(reason.to_string()))
        }
        None => Ok(()),
    }
}

/// A loaded scene together with the vertex buffers needed to draw it
#[derive(Debug, Clone)]
pub struct Scene {
    render_data: RenderData,
    buffers: ShapeBuffers,
    settings: Settings,
}

impl Scene {
    pub fn load<S: SceneSource + ?Sized>(source: &S, settings: Settings) -> Result<Self> {
        let render_data = load_render_data(source)?;
        let buffers = ShapeBuffers::new(settings.shape_parameter_1, settings.shape_parameter_2);
        Ok(Self {
            render_data,
            buffers,
            settings,
        })
    }

    /// Replace the loaded scene. On error the previous scene is kept.
    pub fn reload<S: SceneSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        self.render_data = load_render_data(source)?;
        Ok(())
    }

    /// Change the tessellation resolution. Returns whether buffers were rebuilt.
    pub fn set_shape_parameters(&mut self, param1: i32, param2: i32) -> bool {
        self.settings = self.settings.with_shape_parameters(param1, param2);
        self.buffers.update(param1, param2)
    }

    pub fn render_data(&self) -> &RenderData {
        &self.render_data
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn buffer(&self, kind: PrimitiveKind) -> &VertexBuffer {
        self.buffers.get(kind)
    }

    /// Camera for a viewport of the given size using the current clip planes
    pub fn camera(&self, width: u32, height: u32) -> Camera {
        Camera::new(
            self.render_data.camera,
            width,
            height,
            self.settings.near_plane,
            self.settings.far_plane,
        )
    }

    pub fn shader_lights(&self) -> Vec<ShaderLight> {
        lights::pack_lights(&self.render_data.lights)
    }
}
