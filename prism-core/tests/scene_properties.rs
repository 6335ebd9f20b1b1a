use nalgebra::{Matrix4, Point3, Vector3, Vector4};
use prism_core::{
    resolve, Cone, Cube, Cylinder, Material, PrimitiveKind, PrimitiveRef, SceneNode, Sphere,
    Tessellate, Transformation, VertexBuffer,
};

fn primitive(kind: PrimitiveKind) -> PrimitiveRef {
    PrimitiveRef::new(kind, Material::default())
}

/// A deeper tree mixing every transformation kind
fn sample_tree() -> SceneNode {
    let skew = Matrix4::new(
        1.0, 0.3, 0.0, 0.5, //
        0.0, 1.0, 0.0, 0.0, //
        0.2, 0.0, 1.0, -1.0, //
        0.0, 0.0, 0.0, 1.0,
    );

    SceneNode::new()
        .with_transformation(Transformation::rotate(Vector3::new(1.0, 1.0, 0.0), 0.7))
        .with_primitive(primitive(PrimitiveKind::Cube))
        .with_child(
            SceneNode::new()
                .with_transformation(Transformation::translate(2.0, -1.0, 0.5))
                .with_transformation(Transformation::scale(1.0, 3.0, 0.5))
                .with_primitive(primitive(PrimitiveKind::Sphere))
                .with_primitive(primitive(PrimitiveKind::Cone))
                .with_child(
                    SceneNode::new()
                        .with_transformation(Transformation::Matrix(skew))
                        .with_primitive(primitive(PrimitiveKind::Cylinder)),
                ),
        )
        .with_child(SceneNode::new().with_child(SceneNode::new()))
        .with_child(
            SceneNode::new()
                .with_transformation(Transformation::scale(0.25, 0.25, 4.0))
                .with_primitive(primitive(PrimitiveKind::Sphere)),
        )
}

#[test]
fn shape_count_matches_primitive_count() {
    let tree = sample_tree();
    assert_eq!(resolve(&tree).len(), tree.primitive_count());
    assert_eq!(resolve(&tree).len(), 5);
}

#[test]
fn siblings_resolve_in_listed_order() {
    let root = SceneNode::new()
        .with_child(SceneNode::new().with_primitive(primitive(PrimitiveKind::Cone)))
        .with_child(SceneNode::new().with_primitive(primitive(PrimitiveKind::Cube)));
    let kinds: Vec<_> = resolve(&root).iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![PrimitiveKind::Cone, PrimitiveKind::Cube]);
}

#[test]
fn every_inverse_undoes_its_matrix() {
    for shape in resolve(&sample_tree()) {
        assert!((shape.inverse_ctm * shape.ctm - Matrix4::identity()).norm() < 1e-4);
    }
}

#[test]
fn normal_matrix_keeps_normals_perpendicular() {
    // tangent/normal pairs on a surface in local space
    let pairs = [
        (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)),
        (Vector3::new(1.0, 1.0, 0.0), Vector3::new(-1.0, 1.0, 0.0)),
        (Vector3::new(0.0, 0.3, 1.0), Vector3::new(0.0, 1.0, -0.3)),
    ];

    for shape in resolve(&sample_tree()) {
        for (tangent, normal) in pairs {
            let t = shape.ctm * Vector4::new(tangent.x, tangent.y, tangent.z, 0.0);
            let n = shape.normal_matrix * normal;
            let dot = Vector3::new(t.x, t.y, t.z).normalize().dot(&n.normalize());
            assert!(dot.abs() < 1e-5, "dot {dot} for {:?}", shape.kind);
        }
    }
}

#[test]
fn chained_translate_scale_places_origin() {
    let root = SceneNode::new().with_child(
        SceneNode::new()
            .with_transformation(Transformation::translate(1.0, 0.0, 0.0))
            .with_child(
                SceneNode::new()
                    .with_transformation(Transformation::scale(2.0, 2.0, 2.0))
                    .with_primitive(primitive(PrimitiveKind::Cube)),
            ),
    );
    let shape = &resolve(&root)[0];
    let world = shape.ctm.transform_point(&Point3::origin());
    assert!((world - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-6);
    // a corner of the unit cube lands twice as far out
    let corner = shape.ctm.transform_point(&Point3::new(0.5, 0.5, 0.5));
    assert!((corner - Point3::new(2.0, 1.0, 1.0)).norm() < 1e-6);
}

#[test]
fn resolve_leaves_tree_untouched() {
    let tree = sample_tree();
    let copy = tree.clone();
    let _ = resolve(&tree);
    assert_eq!(tree, copy);
}

fn all_shapes(param1: i32, param2: i32) -> Vec<VertexBuffer> {
    vec![
        Sphere.generate(param1, param2),
        Cube.generate(param1, param2),
        Cone.generate(param1, param2),
        Cylinder.generate(param1, param2),
    ]
}

#[test]
fn tessellators_are_idempotent() {
    for (p1, p2) in [(1, 1), (3, 5), (9, 17)] {
        assert_eq!(all_shapes(p1, p2), all_shapes(p1, p2));
    }
}

#[test]
fn buffers_are_whole_triangles_with_unit_normals() {
    for buffer in all_shapes(4, 6) {
        assert!(!buffer.is_empty());
        assert_eq!(buffer.len() % 18, 0);
        for vertex in buffer.vertices() {
            assert!((vertex.normal.norm() - 1.0).abs() < 1e-5);
        }
    }
}

#[test]
fn closed_meshes_enclose_expected_volume() {
    // divergence theorem: V = 1/3 * sum(centroid . face_normal * area)
    fn volume(buffer: &VertexBuffer) -> f32 {
        buffer
            .triangles()
            .map(|t| {
                let [a, b, c] = t.vertices.map(|v| v.position.coords);
                a.dot(&b.cross(&c)) / 6.0
            })
            .sum()
    }

    let pi = std::f32::consts::PI;
    assert!((volume(&Cube.generate(3, 0)) - 1.0).abs() < 1e-4);
    assert!((volume(&Sphere.generate(64, 64)) - pi / 6.0).abs() < 0.01);
    assert!((volume(&Cylinder.generate(8, 64)) - pi / 4.0).abs() < 0.01);
    assert!((volume(&Cone.generate(8, 64)) - pi / 12.0).abs() < 0.01);
}
