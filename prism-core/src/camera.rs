/// View and projection matrices for a scene camera
use nalgebra::{Matrix4, Point3, Vector4};

use crate::scene::CameraData;

/// Near plane used when the requested one is not positive
const MIN_NEAR_PLANE: f32 = 1e-3;

/// A scene camera bound to a viewport and clip planes
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub data: CameraData,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// A zero-sized viewport is treated as one pixel wide/high, and clip
    /// planes are pushed apart so the projection is always well formed.
    pub fn new(data: CameraData, width: u32, height: u32, near: f32, far: f32) -> Self {
        let near = if near > 0.0 { near } else { MIN_NEAR_PLANE };
        let far = if far > near {
            far
        } else {
            log::warn!("far plane {far} is not beyond near plane {near}, using {}", near * 2.0);
            near * 2.0
        };

        Self {
            data,
            aspect: width.max(1) as f32 / height.max(1) as f32,
            near,
            far,
        }
    }

    /// World-to-camera transformation
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let eye = self.data.position;
        Matrix4::look_at_rh(&eye, &(eye + self.data.look), &self.data.up)
    }

    /// Camera-to-world transformation
    pub fn inverse_view_matrix(&self) -> Matrix4<f32> {
        crate::transform::inverse(&self.view_matrix())
    }

    /// Perspective projection using the scene's vertical field of view
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.data.height_angle, self.near, self.far)
    }

    /// Camera position recovered from the view matrix
    pub fn world_position(&self) -> Point3<f32> {
        self.inverse_view_matrix().transform_point(&Point3::origin())
    }

    /// Project a model-space point to pixel coordinates and NDC depth.
    ///
    /// Returns `None` for points behind the camera or outside the viewport.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let mvp = self.projection_matrix() * self.view_matrix() * model_matrix;
        let clip = mvp * Vector4::new(point.x, point.y, point.z, 1.0);

        // Prevent division by near-zero depth values
        if clip.w < 1e-6 {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let depth = clip.z / clip.w;

        // Clip test
        if !(-1.0..=1.0).contains(&ndc_x) || !(-1.0..=1.0).contains(&ndc_y) {
            return None;
        }

        // Convert to screen space
        let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;

        Some((screen_x, screen_y, depth))
    }
}
