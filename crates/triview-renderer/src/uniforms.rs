//! Per-frame uniform data.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use triview_core::Camera;
use triview_core::config::light;

/// Frame uniform buffer data sent to the GPU (160 bytes).
///
/// Rebuilt from the camera every frame; nothing here is cached. The light
/// position is the fixed world-space position; the shader transforms it
/// into view space. The eye rides along untransformed so every vertex sees
/// the identical eye position when deriving its eye direction.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniform {
    /// View matrix from the camera pose.
    pub view: [[f32; 4]; 4],
    /// Projection matrix for the current viewport aspect.
    pub projection: [[f32; 4]; 4],
    /// World-space point-light position (w = 1).
    pub light_position: [f32; 4],
    /// Untransformed eye position (w = 1).
    pub eye: [f32; 4],
}

impl FrameUniform {
    /// Build the frame uniforms for the camera's current pose.
    pub fn new(camera: &Camera, aspect: f32) -> Self {
        let eye = camera.eye();
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: camera.projection_matrix(aspect).to_cols_array_2d(),
            light_position: [light::POSITION.x, light::POSITION.y, light::POSITION.z, 1.0],
            eye: [eye.x, eye.y, eye.z, 1.0],
        }
    }
}

impl Default for FrameUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            light_position: [light::POSITION.x, light::POSITION.y, light::POSITION.z, 1.0],
            eye: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_carries_untransformed_eye() {
        let camera = Camera::new();
        let uniform = FrameUniform::new(&camera, 1.0);
        let eye = camera.eye();
        assert_eq!(uniform.eye, [eye.x, eye.y, eye.z, 1.0]);
    }

    #[test]
    fn test_uniform_matrices_match_camera_derivation() {
        let camera = Camera::new();
        let uniform = FrameUniform::new(&camera, 1.5);
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(
            uniform.projection,
            camera.projection_matrix(1.5).to_cols_array_2d()
        );
    }

    #[test]
    fn test_light_position_is_the_fixed_point_light() {
        let uniform = FrameUniform::new(&Camera::new(), 1.0);
        assert_eq!(uniform.light_position, [-0.5, 1.5, -0.5, 1.0]);
    }
}
