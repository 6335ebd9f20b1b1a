/// Scene graph resolver: flattens a node tree into world-space shapes
///
/// Traversal is depth-first pre-order with children visited in list order.
/// Each primitive's model matrix is the product of every ancestor's local
/// transform, root first: `M = T_root * ... * T_parent * T_own`.
/// A singular cumulative matrix is not trapped; its inverse and normal
/// matrix come out as NaN.
use nalgebra::Matrix4;

use crate::scene::{ResolvedShape, SceneNode};

/// Resolve every primitive under `root` into a flat list.
pub fn resolve(root: &SceneNode) -> Vec<ResolvedShape> {
    let mut shapes = Vec::with_capacity(root.primitive_count());
    resolve_into(root, &mut shapes);
    shapes
}

/// Append the resolved primitives under `root` to `shapes`.
pub fn resolve_into(root: &SceneNode, shapes: &mut Vec<ResolvedShape>) {
    visit(root, &Matrix4::identity(), shapes);
}

// `parent` is the product of every ancestor's local transform
fn visit(node: &SceneNode, parent: &Matrix4<f32>, shapes: &mut Vec<ResolvedShape>) {
    let ctm = parent * node.local_transform();

    shapes.extend(
        node.primitives
            .iter()
            .map(|primitive| ResolvedShape::new(primitive, ctm)),
    );

    for child in &node.children {
        visit(child, &ctm, shapes);
    }
}
