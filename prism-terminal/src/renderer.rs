/// ASCII rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
use prism_core::{Camera, GlobalData, Light, Material, VertexBuffer};
use std::io::Write;

/// Character luminosity ramp for depth/shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Lighting inputs shared by every shape drawn in a frame
pub struct Lighting<'a> {
    pub global: &'a GlobalData,
    pub lights: &'a [Light],
    pub eye: Point3<f32>,
}

/// One shape instance to draw: its mesh plus world placement
pub struct DrawCall<'a> {
    pub buffer: &'a VertexBuffer,
    pub model: Matrix4<f32>,
    pub normal_matrix: Matrix3<f32>,
    pub material: &'a Material,
}

/// ASCII renderer that converts shaded triangle lists to terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
    }

    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    /// Rasterize one shape with per-vertex (Gouraud) shading.
    pub fn draw(&mut self, call: &DrawCall, camera: &Camera, lighting: &Lighting) {
        'triangles: for triangle in call.buffer.triangles() {
            let mut projected = [(0.0, 0.0, 0.0, 0.0); 3];

            for (slot, vertex) in projected.iter_mut().zip(&triangle.vertices) {
                let Some((x, y, z)) = camera.project_to_screen(
                    &vertex.position,
                    &call.model,
                    self.width as u32,
                    self.height as u32,
                ) else {
                    continue 'triangles; // Triangle is clipped
                };

                let world = call.model.transform_point(&vertex.position);
                let normal = (call.normal_matrix * vertex.normal).normalize();
                *slot = (x, y, z, shade(&world, &normal, call.material, lighting));
            }

            self.rasterize_triangle(&projected);
        }
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32, f32); 3]) {
        let [v0, v1, v2] = *coords;

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                else {
                    continue;
                };
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                let idx = y as usize * self.width + x as usize;
                if depth < self.depth_buffer[idx] {
                    let brightness = w0 * v0.3 + w1 * v1.3 + w2 * v2.3;
                    self.depth_buffer[idx] = depth;
                    self.char_buffer[idx] = ramp(brightness);
                }
            }
        }
    }

    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_at(x, y);

                // Color based on character intensity
                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn luminance(c: &nalgebra::Vector4<f32>) -> f32 {
    0.2126 * c.x + 0.7152 * c.y + 0.0722 * c.z
}

/// Phong intensity at a world-space point, reduced to a single luminance
pub fn shade(
    point: &Point3<f32>,
    normal: &Vector3<f32>,
    material: &Material,
    lighting: &Lighting,
) -> f32 {
    let global = lighting.global;
    let to_eye = (lighting.eye - point).normalize();
    let mut intensity = global.ka * luminance(&material.ambient);

    for light in lighting.lights {
        let to_light = light.direction_to_light(point);
        let strength = luminance(&light.color)
            * light.attenuation(light.distance_to(point))
            * light.spot_falloff(point);

        let diffuse = normal.dot(&to_light).max(0.0);
        let reflected = *normal * (2.0 * normal.dot(&to_light)) - to_light;
        let specular = if diffuse > 0.0 {
            reflected.dot(&to_eye).max(0.0).powf(material.shininess)
        } else {
            0.0
        };

        intensity += strength
            * (global.kd * luminance(&material.diffuse) * diffuse
                + global.ks * luminance(&material.specular) * specular);
    }

    intensity.clamp(0.0, 1.0)
}

fn ramp(brightness: f32) -> char {
    let index = (brightness.clamp(0.0, 1.0) * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
    LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)]
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector4;
    use prism_core::{CameraData, PrimitiveKind};

    fn lighting<'a>(global: &'a GlobalData, lights: &'a [Light]) -> Lighting<'a> {
        Lighting {
            global,
            lights,
            eye: Point3::new(0.0, 0.0, 5.0),
        }
    }

    #[test]
    fn test_shade_facing_light_is_brighter() {
        let global = GlobalData::default();
        let lights = [Light::directional(
            Vector4::new(1.0, 1.0, 1.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        )];
        let material = Material::default();
        let lit = lighting(&global, &lights);

        let facing = shade(&Point3::origin(), &Vector3::z(), &material, &lit);
        let away = shade(&Point3::origin(), &-Vector3::z(), &material, &lit);
        assert!(facing > away);
        assert!((0.0..=1.0).contains(&facing));
    }

    #[test]
    fn test_ramp_bounds() {
        assert_eq!(ramp(-1.0), ' ');
        assert_eq!(ramp(2.0), '@');
    }

    #[test]
    fn test_draw_cube_marks_center() {
        let global = GlobalData::default();
        let lights = [Light::directional(
            Vector4::new(1.0, 1.0, 1.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        )];
        let material = Material::default();
        let buffer = PrimitiveKind::Cube.tessellate(2, 0);
        let camera = Camera::new(CameraData::default(), 40, 20, 0.1, 100.0);

        let mut renderer = AsciiRenderer::new(40, 20);
        renderer.draw(
            &DrawCall {
                buffer: &buffer,
                model: Matrix4::identity(),
                normal_matrix: Matrix3::identity(),
                material: &material,
            },
            &camera,
            &lighting(&global, &lights),
        );
        assert_ne!(renderer.char_at(20, 10), ' ');
        assert_eq!(renderer.char_at(0, 0), ' ');

        renderer.clear();
        assert_eq!(renderer.char_at(20, 10), ' ');
    }
}
