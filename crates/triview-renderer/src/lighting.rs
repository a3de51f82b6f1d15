//! The per-fragment shading contract.
//!
//! The GPU runs this formula from `shaders/mesh.wgsl`; this module is the
//! same formula on the CPU so the contract can be unit tested. The two must
//! be kept in sync by hand; there is exactly one light, one formula and one
//! constant between them.

use glam::{Mat4, Vec3};

/// Fixed specular exponent used by the shading stage.
///
/// Materials declare their own exponent ([`Material::shininess`]) and it is
/// parsed and carried, but the shading stage does not consume it; it uses
/// this literal for every mesh. Wiring the declared exponent through would
/// visibly change output, so the substitution is kept and flagged here
/// rather than silently resolved (see DESIGN.md).
///
/// [`Material::shininess`]: triview_core::Material
pub const SPECULAR_EXPONENT: f32 = 17.0;

/// Direction from a surface point toward the light, with the light position
/// transformed into view space.
pub fn light_direction(position: Vec3, view: &Mat4, light_position: Vec3) -> Vec3 {
    let light_view = view.transform_point3(light_position);
    (light_view - position).normalize()
}

/// Direction from a surface point toward the untransformed eye position.
pub fn eye_direction(position: Vec3, eye: Vec3) -> Vec3 {
    (eye - position).normalize()
}

/// Shade one fragment.
///
/// `normal`, `light_dir` and `eye_dir` are the interpolated unit vectors the
/// rasterizer hands the fragment stage. Per channel: ambient floored at
/// zero, diffuse scaled by `max(dot(N,L), 0)`, Blinn specular from the
/// half-vector raised to [`SPECULAR_EXPONENT`]. The sum is floored at zero
/// but not clamped above 1; any clamping happens at the
/// backend's output stage. Alpha is always 1.
pub fn shade(
    normal: Vec3,
    light_dir: Vec3,
    eye_dir: Vec3,
    ambient: [f32; 3],
    diffuse: [f32; 3],
    specular: [f32; 3],
) -> [f32; 4] {
    let half_vector = (eye_dir + light_dir).normalize();
    let n_dot_l = normal.dot(light_dir);
    let n_dot_h = normal.dot(half_vector);

    let mut color = [0.0, 0.0, 0.0, 1.0];
    for channel in 0..3 {
        let amb = ambient[channel].max(0.0);
        let dif = diffuse[channel] * n_dot_l.max(0.0);
        let spec = (specular[channel] * n_dot_h.max(0.0).powf(SPECULAR_EXPONENT)).max(0.0);
        color[channel] = (amb + dif + spec).max(0.0);
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    const AMBIENT: [f32; 3] = [0.1, 0.1, 0.1];
    const DIFFUSE: [f32; 3] = [0.5, 0.5, 0.5];
    const SPECULAR: [f32; 3] = [0.3, 0.3, 0.3];

    #[test]
    fn test_head_on_lighting_sums_all_terms() {
        // N, L and E all +Z: every dot product is 1, so each channel is
        // exactly ambient + diffuse + specular.
        let color = shade(Vec3::Z, Vec3::Z, Vec3::Z, AMBIENT, DIFFUSE, SPECULAR);
        for channel in 0..3 {
            assert!((color[channel] - 0.9).abs() < EPSILON);
        }
        assert_eq!(color[3], 1.0);
    }

    #[test]
    fn test_grazing_light_leaves_only_ambient() {
        // Light perpendicular to the normal: diffuse vanishes, and the
        // half-vector is 45 degrees off the normal so the high exponent
        // drives specular toward zero.
        let color = shade(Vec3::Z, Vec3::X, Vec3::Z, AMBIENT, DIFFUSE, SPECULAR);
        let expected = 0.1 + 0.3 * (45f32.to_radians().cos()).powf(SPECULAR_EXPONENT);
        assert!((color[0] - expected).abs() < EPSILON);
    }

    #[test]
    fn test_output_is_not_clamped_above_one() {
        let color = shade(
            Vec3::Z,
            Vec3::Z,
            Vec3::Z,
            [0.9, 0.9, 0.9],
            [0.9, 0.9, 0.9],
            [0.9, 0.9, 0.9],
        );
        assert!(color[0] > 1.0);
    }

    #[test]
    fn test_negative_ambient_is_floored() {
        let color = shade(
            Vec3::Z,
            Vec3::X,
            Vec3::Z,
            [-0.5, -0.5, -0.5],
            [0.0; 3],
            [0.0; 3],
        );
        assert_eq!(color[0], 0.0);
    }

    #[test]
    fn test_back_facing_light_contributes_no_diffuse() {
        // dot(N, L) < 0 is floored, not mirrored.
        let l = Vec3::new(1.0, 0.0, -1.0).normalize();
        let color = shade(Vec3::Z, l, Vec3::Z, [0.0; 3], DIFFUSE, [0.0; 3]);
        assert_eq!(color[0], 0.0);
    }

    #[test]
    fn test_declared_material_exponent_is_not_consumed() {
        // The shading formula has no shininess input at all; the constant is
        // what the shader uses regardless of what a material declares.
        assert_eq!(SPECULAR_EXPONENT, 17.0);
    }

    #[test]
    fn test_light_direction_uses_view_space_light() {
        // A view translating everything by -2 on z moves the light with it.
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0));
        let dir = light_direction(Vec3::ZERO, &view, Vec3::new(0.0, 0.0, 1.0));
        assert!((dir - Vec3::NEG_Z).length() < EPSILON);
    }

    #[test]
    fn test_eye_direction_points_from_surface_to_eye() {
        let dir = eye_direction(Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 0.0));
        assert!((dir - Vec3::Y).length() < EPSILON);
    }

    #[test]
    fn test_alpha_is_always_one() {
        let color = shade(Vec3::Z, Vec3::X, Vec3::Y, [0.0; 3], [0.0; 3], [0.0; 3]);
        assert_eq!(color[3], 1.0);
    }
}
