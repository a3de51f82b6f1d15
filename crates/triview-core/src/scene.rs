//! Scene state: meshes, per-mesh transforms and the selection cursor.

use glam::{Mat4, Vec3};

use crate::command::{Axis, CycleDirection, Sign};
use crate::config::interaction;
use crate::error::SceneError;
use crate::mesh::Mesh;

/// The scene: an ordered mesh list, a parallel list of per-mesh affine
/// transforms, and the selection cursor.
///
/// Meshes and materials are immutable after construction. Transforms and the
/// cursor are mutated in place by the selection commands; the emphasis scale
/// that highlights the selected mesh is folded directly into its transform
/// rather than tracked separately, so every transition that moves the cursor
/// away from a mesh first composes the inverse scale back out.
#[derive(Debug)]
pub struct SceneModel {
    meshes: Vec<Mesh>,
    transforms: Vec<Mat4>,
    cursor: Option<usize>,
}

impl SceneModel {
    /// Build a scene from validated mesh records.
    ///
    /// Each mesh starts with the identity transform and nothing selected.
    /// Fails if any mesh violates its structural invariants; a scene is
    /// either fully valid or not constructed at all.
    pub fn new(meshes: Vec<Mesh>) -> Result<Self, SceneError> {
        for (index, mesh) in meshes.iter().enumerate() {
            mesh.validate(index)?;
        }
        let transforms = vec![Mat4::IDENTITY; meshes.len()];
        Ok(Self {
            meshes,
            transforms,
            cursor: None,
        })
    }

    /// All meshes in scene order.
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// All per-mesh transforms, parallel to [`Self::meshes`].
    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    /// Number of meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// True if the scene has no meshes.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Total triangle count across all meshes.
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(Mesh::triangle_count).sum()
    }

    /// Index of the selected mesh, or `None` when nothing is selected.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Move the selection cursor one step in `direction`, wrapping at both
    /// ends.
    ///
    /// The outgoing selection (if any) gets its emphasis scale undone before
    /// the cursor moves; the incoming selection gets it applied. From no
    /// selection, `Next` selects the first mesh and `Previous` the last.
    /// With no meshes this is a no-op.
    pub fn cycle_selection(&mut self, direction: CycleDirection) {
        if self.meshes.is_empty() {
            return;
        }
        if let Some(current) = self.cursor {
            self.scale_emphasis(current, 1.0 / interaction::EMPHASIS_SCALE);
        }
        let next = match (direction, self.cursor) {
            (CycleDirection::Next, None) => 0,
            (CycleDirection::Next, Some(i)) => (i + 1) % self.meshes.len(),
            (CycleDirection::Previous, None | Some(0)) => self.meshes.len() - 1,
            (CycleDirection::Previous, Some(i)) => i - 1,
        };
        self.scale_emphasis(next, interaction::EMPHASIS_SCALE);
        self.cursor = Some(next);
    }

    /// Clear the selection, undoing the selected mesh's emphasis scale.
    ///
    /// No-op when nothing is selected.
    pub fn clear_selection(&mut self) {
        if let Some(current) = self.cursor.take() {
            self.scale_emphasis(current, 1.0 / interaction::EMPHASIS_SCALE);
        }
    }

    /// Translate the selected mesh by the fixed step along `axis`.
    ///
    /// No-op when nothing is selected.
    pub fn translate_selection(&mut self, axis: Axis, sign: Sign) {
        let Some(index) = self.cursor else {
            return;
        };
        let offset = axis.unit() * (sign.factor() * interaction::TRANSLATE_STEP);
        self.transforms[index] *= Mat4::from_translation(offset);
    }

    /// Rotate the selected mesh by the fixed angle about `axis`, pivoting on
    /// the mesh's own local centroid.
    ///
    /// The centroid is recomputed from the mesh data on every call, never
    /// cached, and the pivot is composed into the existing transform as
    /// translate(+centroid) * rotate * translate(-centroid), so the
    /// world-space image of the centroid is unchanged no matter what the
    /// mesh has accumulated before. No-op when nothing is selected.
    pub fn rotate_selection(&mut self, axis: Axis, sign: Sign) {
        let Some(index) = self.cursor else {
            return;
        };
        let centroid = self.meshes[index].centroid();
        let pivot = Mat4::from_translation(centroid)
            * axis.rotation(sign.factor() * interaction::ROTATE_STEP)
            * Mat4::from_translation(-centroid);
        self.transforms[index] *= pivot;
    }

    fn scale_emphasis(&mut self, index: usize, factor: f32) {
        // Emphasis scales x and y only; z stays at unit scale.
        self.transforms[index] *= Mat4::from_scale(Vec3::new(factor, factor, 1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    const EPSILON: f32 = 1e-5;

    fn material() -> Material {
        Material {
            ambient: [0.1, 0.1, 0.1],
            diffuse: [0.5, 0.5, 0.5],
            specular: [0.3, 0.3, 0.3],
            shininess: 11.0,
        }
    }

    fn mesh_at(x: f32) -> Mesh {
        Mesh {
            material: material(),
            vertices: vec![[x, 0.0, 0.0], [x + 1.0, 0.0, 0.0], [x, 1.0, 0.0]],
            normals: vec![[0.0, 0.0, -1.0]; 3],
            triangles: vec![[0, 1, 2]],
        }
    }

    fn scene_with(count: usize) -> SceneModel {
        SceneModel::new((0..count).map(|i| mesh_at(i as f32)).collect()).unwrap()
    }

    fn assert_mat4_eq(actual: &Mat4, expected: &Mat4) {
        let a = actual.to_cols_array();
        let e = expected.to_cols_array();
        for (index, (x, y)) in a.iter().zip(e.iter()).enumerate() {
            assert!(
                (x - y).abs() < EPSILON,
                "matrices differ at element {index}: {x} vs {y}\nactual: {actual:?}\nexpected: {expected:?}"
            );
        }
    }

    #[test]
    fn test_new_scene_has_identity_transforms_and_no_selection() {
        let scene = scene_with(3);
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.cursor(), None);
        for transform in scene.transforms() {
            assert_mat4_eq(transform, &Mat4::IDENTITY);
        }
    }

    #[test]
    fn test_cycle_next_from_none_selects_first() {
        let mut scene = scene_with(3);
        scene.cycle_selection(CycleDirection::Next);
        assert_eq!(scene.cursor(), Some(0));
    }

    #[test]
    fn test_cycle_previous_from_none_selects_last() {
        let mut scene = scene_with(3);
        scene.cycle_selection(CycleDirection::Previous);
        assert_eq!(scene.cursor(), Some(2));
    }

    #[test]
    fn test_cycle_wraps_at_both_ends() {
        let mut scene = scene_with(2);
        scene.cycle_selection(CycleDirection::Next);
        scene.cycle_selection(CycleDirection::Next);
        scene.cycle_selection(CycleDirection::Next);
        assert_eq!(scene.cursor(), Some(0));
        scene.cycle_selection(CycleDirection::Previous);
        assert_eq!(scene.cursor(), Some(1));
    }

    #[test]
    fn test_full_cycle_restores_cursor_and_transforms() {
        let mut scene = scene_with(4);
        scene.cycle_selection(CycleDirection::Next);
        let initial: Vec<Mat4> = scene.transforms().to_vec();
        for _ in 0..4 {
            scene.cycle_selection(CycleDirection::Next);
        }
        assert_eq!(scene.cursor(), Some(0));
        for (transform, expected) in scene.transforms().iter().zip(initial.iter()) {
            assert_mat4_eq(transform, expected);
        }
    }

    #[test]
    fn test_cycle_on_empty_scene_is_noop() {
        let mut scene = scene_with(0);
        scene.cycle_selection(CycleDirection::Next);
        scene.cycle_selection(CycleDirection::Previous);
        assert_eq!(scene.cursor(), None);
    }

    #[test]
    fn test_deselect_restores_scale_but_keeps_translation() {
        let mut scene = scene_with(2);
        scene.cycle_selection(CycleDirection::Next);
        scene.translate_selection(Axis::X, Sign::Pos);
        scene.translate_selection(Axis::Y, Sign::Neg);
        scene.clear_selection();
        assert_eq!(scene.cursor(), None);

        // The emphasis is gone and only the two translations remain. The
        // translation offsets were composed while the emphasis scale was in
        // effect, so they are scaled by it: exactly what undoing the
        // emphasis afterwards leaves behind.
        let s = interaction::EMPHASIS_SCALE;
        let step = interaction::TRANSLATE_STEP;
        let expected = Mat4::from_translation(glam::Vec3::new(s * step, -(s * step), 0.0));
        assert_mat4_eq(&scene.transforms()[0], &expected);
    }

    #[test]
    fn test_deselect_without_selection_is_noop() {
        let mut scene = scene_with(2);
        scene.clear_selection();
        assert_eq!(scene.cursor(), None);
        for transform in scene.transforms() {
            assert_mat4_eq(transform, &Mat4::IDENTITY);
        }
    }

    #[test]
    fn test_translate_without_selection_changes_nothing() {
        let mut scene = scene_with(3);
        scene.translate_selection(Axis::X, Sign::Pos);
        scene.rotate_selection(Axis::Y, Sign::Neg);
        assert_eq!(scene.cursor(), None);
        for transform in scene.transforms() {
            assert_mat4_eq(transform, &Mat4::IDENTITY);
        }
    }

    #[test]
    fn test_translate_composes_in_local_space() {
        let mut scene = scene_with(1);
        scene.cycle_selection(CycleDirection::Next);
        scene.clear_selection();
        scene.cycle_selection(CycleDirection::Next);
        scene.translate_selection(Axis::Z, Sign::Pos);
        let transform = scene.transforms()[0];
        let moved = transform.transform_point3(Vec3::ZERO);
        let s = interaction::EMPHASIS_SCALE;
        // z is outside the emphasis plane, so the step is unscaled.
        assert!((moved.z - interaction::TRANSLATE_STEP).abs() < EPSILON);
        assert!(moved.x.abs() < EPSILON && moved.y.abs() < EPSILON);
        // x/y still carry the emphasis scale of the active selection.
        let unit = transform.transform_vector3(Vec3::X);
        assert!((unit.x - s).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_preserves_world_image_of_centroid() {
        let mut scene = scene_with(1);
        scene.cycle_selection(CycleDirection::Next);
        // Accumulate an arbitrary prior transform first.
        scene.translate_selection(Axis::X, Sign::Pos);
        scene.rotate_selection(Axis::Y, Sign::Pos);
        scene.translate_selection(Axis::Z, Sign::Neg);

        let centroid = scene.meshes()[0].centroid();
        let before = scene.transforms()[0].transform_point3(centroid);
        scene.rotate_selection(Axis::X, Sign::Neg);
        let after = scene.transforms()[0].transform_point3(centroid);
        assert!(
            (before - after).length() < EPSILON,
            "centroid moved: {before:?} -> {after:?}"
        );
    }

    #[test]
    fn test_rotate_zero_triangle_mesh_pivots_on_origin() {
        let mesh = Mesh {
            material: material(),
            vertices: vec![[1.0, 2.0, 3.0]],
            normals: vec![],
            triangles: vec![],
        };
        let mut scene = SceneModel::new(vec![mesh]).unwrap();
        scene.cycle_selection(CycleDirection::Next);
        scene.rotate_selection(Axis::Z, Sign::Pos);
        let origin = scene.transforms()[0].transform_point3(Vec3::ZERO);
        assert!(origin.length() < EPSILON);
    }

    #[test]
    fn test_new_rejects_invalid_mesh() {
        let mut bad = mesh_at(0.0);
        bad.triangles.push([0, 1, 9]);
        assert!(SceneModel::new(vec![mesh_at(0.0), bad]).is_err());
    }
}
