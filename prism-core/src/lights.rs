/// Scene lights and their flattened shader representation
use nalgebra::{Point3, Vector3, Vector4};

use crate::scene::Color;

/// Upper bound on lights a shader consumes
pub const MAX_LIGHTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Directional {
        direction: Vector3<f32>,
    },
    Point {
        position: Point3<f32>,
    },
    Spot {
        position: Point3<f32>,
        direction: Vector3<f32>,
        /// Width of the soft edge, in radians, measured inward from `angle`
        penumbra: f32,
        /// Half-angle of the outer cone in radians
        angle: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub color: Color,
    /// Attenuation coefficients (constant, linear, quadratic)
    pub function: Vector3<f32>,
    pub kind: LightKind,
}

impl Light {
    pub fn directional(color: Color, direction: Vector3<f32>) -> Self {
        Self {
            color,
            function: Vector3::new(1.0, 0.0, 0.0),
            kind: LightKind::Directional { direction },
        }
    }

    pub fn point(color: Color, position: Point3<f32>, function: Vector3<f32>) -> Self {
        Self {
            color,
            function,
            kind: LightKind::Point { position },
        }
    }

    /// Distance attenuation `min(1, 1 / (c0 + c1 d + c2 d^2))`.
    /// Directional lights are never attenuated.
    pub fn attenuation(&self, distance: f32) -> f32 {
        if let LightKind::Directional { .. } = self.kind {
            return 1.0;
        }
        let f = self.function;
        let denom = f.x + f.y * distance + f.z * distance * distance;
        if denom <= 0.0 {
            1.0
        } else {
            (1.0 / denom).min(1.0)
        }
    }

    /// Angular falloff of a spot light towards `point`; 1 for other kinds.
    pub fn spot_falloff(&self, point: &Point3<f32>) -> f32 {
        let LightKind::Spot {
            position,
            direction,
            penumbra,
            angle,
        } = self.kind
        else {
            return 1.0;
        };

        let to_point = (point - position).normalize();
        let x = to_point.dot(&direction.normalize()).clamp(-1.0, 1.0).acos();
        let inner = angle - penumbra;

        if x <= inner {
            1.0
        } else if x > angle {
            0.0
        } else {
            let t = (x - inner) / (angle - inner);
            1.0 - (-2.0 * t * t * t + 3.0 * t * t)
        }
    }

    /// Unit vector from `point` towards the light
    pub fn direction_to_light(&self, point: &Point3<f32>) -> Vector3<f32> {
        match self.kind {
            LightKind::Directional { direction } => -direction.normalize(),
            LightKind::Point { position } | LightKind::Spot { position, .. } => {
                (position - point).normalize()
            }
        }
    }

    pub fn distance_to(&self, point: &Point3<f32>) -> f32 {
        match self.kind {
            LightKind::Directional { .. } => f32::INFINITY,
            LightKind::Point { position } | LightKind::Spot { position, .. } => {
                (position - point).norm()
            }
        }
    }
}

/// Light record laid out the way a shader array expects it.
/// Fields that do not apply to a light's kind are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderLight {
    pub position: Vector3<f32>,
    pub direction: Vector3<f32>,
    pub color: Vector4<f32>,
    pub function: Vector3<f32>,
    pub penumbra: f32,
    pub angle: f32,
    /// 0 directional, 1 spot, 2 point
    pub light_type: i32,
}

impl From<&Light> for ShaderLight {
    fn from(light: &Light) -> Self {
        let zero = Vector3::zeros();
        let (position, direction, penumbra, angle, light_type) = match light.kind {
            LightKind::Directional { direction } => (zero, direction, 0.0, 0.0, 0),
            LightKind::Spot {
                position,
                direction,
                penumbra,
                angle,
            } => (position.coords, direction, penumbra, angle, 1),
            LightKind::Point { position } => (position.coords, zero, 0.0, 0.0, 2),
        };

        Self {
            position,
            direction,
            color: light.color,
            function: light.function,
            penumbra,
            angle,
            light_type,
        }
    }
}

/// Pack lights in list order, dropping any beyond [`MAX_LIGHTS`].
pub fn pack_lights(lights: &[Light]) -> Vec<ShaderLight> {
    if lights.len() > MAX_LIGHTS {
        log::warn!(
            "scene has {} lights, only the first {} are used",
            lights.len(),
            MAX_LIGHTS
        );
    }
    lights.iter().take(MAX_LIGHTS).map(ShaderLight::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Color {
        Vector4::new(1.0, 1.0, 1.0, 1.0)
    }

    fn spot() -> Light {
        Light {
            color: white(),
            function: Vector3::new(1.0, 0.0, 0.0),
            kind: LightKind::Spot {
                position: Point3::origin(),
                direction: Vector3::new(0.0, -1.0, 0.0),
                penumbra: 0.2,
                angle: 0.6,
            },
        }
    }

    #[test]
    fn test_attenuation_is_capped_at_one() {
        let light = Light::point(white(), Point3::origin(), Vector3::new(0.5, 0.0, 0.0));
        assert_eq!(light.attenuation(0.0), 1.0);

        let far = Light::point(white(), Point3::origin(), Vector3::new(1.0, 0.0, 1.0));
        assert!((far.attenuation(2.0) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_directional_light_ignores_distance() {
        let light = Light::directional(white(), Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(light.attenuation(100.0), 1.0);
        let to_light = light.direction_to_light(&Point3::origin());
        assert!((to_light - Vector3::y()).norm() < 1e-6);
    }

    #[test]
    fn test_spot_falloff_regions() {
        let light = spot();
        assert_eq!(light.spot_falloff(&Point3::new(0.0, -1.0, 0.0)), 1.0);
        // 45 degrees is outside the 0.6 rad cone
        assert_eq!(light.spot_falloff(&Point3::new(1.0, -1.0, 0.0)), 0.0);

        let edge = light.spot_falloff(&Point3::new(0.5f32.tan(), -1.0, 0.0));
        assert!(edge > 0.0 && edge < 1.0);
    }

    #[test]
    fn test_shader_light_type_codes() {
        let packed = pack_lights(&[
            Light::directional(white(), Vector3::new(0.0, -1.0, 0.0)),
            spot(),
            Light::point(white(), Point3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 0.0, 0.0)),
        ]);
        let codes: Vec<i32> = packed.iter().map(|l| l.light_type).collect();
        assert_eq!(codes, vec![0, 1, 2]);
        assert_eq!(packed[0].position, Vector3::zeros());
        assert_eq!(packed[2].direction, Vector3::zeros());
        assert_eq!(packed[2].position, Vector3::new(1.0, 2.0, 3.0));
        assert!((packed[1].angle - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_pack_truncates_to_max() {
        let lights = vec![Light::directional(white(), Vector3::new(0.0, -1.0, 0.0)); MAX_LIGHTS + 3];
        assert_eq!(pack_lights(&lights).len(), MAX_LIGHTS);
    }
}
