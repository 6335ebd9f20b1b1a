/// Built-in scene used when no other scene source is wired in
use nalgebra::{Point3, Vector3, Vector4};
use prism_core::{
    CameraData, GlobalData, Light, LightKind, Material, PrimitiveKind, PrimitiveRef,
    SceneDescription, SceneNode, Transformation,
};

fn shape(kind: PrimitiveKind, r: f32, g: f32, b: f32) -> PrimitiveRef {
    PrimitiveRef::new(kind, Material::diffuse(Vector4::new(r, g, b, 1.0)))
}

/// One of each primitive arranged on a plinth, with a nested stack on top
pub fn demo_scene() -> SceneDescription {
    let stack = SceneNode::new()
        .with_transformation(Transformation::translate(0.0, 0.75, 0.0))
        .with_primitive(shape(PrimitiveKind::Cylinder, 0.8, 0.8, 0.8))
        .with_child(
            SceneNode::new()
                .with_transformation(Transformation::translate(0.0, 0.75, 0.0))
                .with_transformation(Transformation::scale(0.6, 0.6, 0.6))
                .with_primitive(shape(PrimitiveKind::Sphere, 0.9, 0.3, 0.3)),
        );

    let root = SceneNode::new()
        .with_child(
            SceneNode::new()
                .with_transformation(Transformation::translate(0.0, -0.6, 0.0))
                .with_transformation(Transformation::scale(4.0, 0.2, 2.0))
                .with_primitive(shape(PrimitiveKind::Cube, 0.6, 0.6, 0.6)),
        )
        .with_child(
            SceneNode::new()
                .with_transformation(Transformation::translate(-1.4, 0.0, 0.0))
                .with_primitive(shape(PrimitiveKind::Sphere, 0.3, 0.6, 0.9)),
        )
        .with_child(
            SceneNode::new()
                .with_transformation(Transformation::translate(1.4, 0.0, 0.0))
                .with_transformation(Transformation::rotate(Vector3::y(), 0.6))
                .with_primitive(shape(PrimitiveKind::Cube, 0.3, 0.9, 0.4)),
        )
        .with_child(
            SceneNode::new()
                .with_transformation(Transformation::translate(0.0, 0.0, -0.6))
                .with_primitive(shape(PrimitiveKind::Cone, 0.9, 0.8, 0.2))
                .with_child(stack),
        );

    SceneDescription {
        global: GlobalData {
            ka: 0.5,
            kd: 0.6,
            ks: 0.4,
        },
        camera: CameraData {
            position: Point3::new(0.0, 2.0, 6.0),
            look: Vector3::new(0.0, -0.35, -1.0),
            up: Vector3::y(),
            height_angle: 0.8,
        },
        lights: vec![
            Light::directional(Vector4::new(1.0, 1.0, 1.0, 1.0), Vector3::new(-1.0, -1.0, -1.0)),
            Light {
                color: Vector4::new(0.8, 0.8, 0.8, 1.0),
                function: Vector3::new(1.0, 0.1, 0.02),
                kind: LightKind::Spot {
                    position: Point3::new(0.0, 4.0, 2.0),
                    direction: Vector3::new(0.0, -1.0, -0.5),
                    penumbra: 0.15,
                    angle: 0.5,
                },
            },
        ],
        root: Some(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::load_render_data;

    #[test]
    fn test_demo_scene_loads() {
        let data = load_render_data(&demo_scene()).unwrap();
        assert_eq!(data.shapes.len(), 6);
        assert_eq!(data.lights.len(), 2);
        // the sphere on top of the stack inherits the cone node's offset
        let top = &data.shapes[5];
        assert_eq!(top.kind, PrimitiveKind::Sphere);
        let centre = top.ctm.transform_point(&Point3::origin());
        assert!((centre - Point3::new(0.0, 1.5, -0.6)).norm() < 1e-5);
    }
}
