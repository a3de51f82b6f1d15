//! Fixed configuration values for the viewer.
//!
//! Everything the interaction loop treats as a constant lives here: the
//! initial camera pose, projection planes, per-command step sizes and the
//! light position. There is no configuration file; these are the values.

/// Initial camera pose and projection parameters.
pub mod camera {
    use glam::Vec3;

    /// Initial eye position.
    pub const EYE: Vec3 = Vec3::new(0.5, 0.5, -0.5);
    /// Initial look-direction offset; the view target is `eye + at`.
    pub const AT: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    /// Initial up vector.
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// Vertical field of view in radians.
    pub const FOV: f32 = 90.0 * core::f32::consts::PI / 180.0;
    /// Near clip plane.
    pub const NEAR_PLANE: f32 = 0.1;
    /// Far clip plane.
    pub const FAR_PLANE: f32 = 100.0;
}

/// Step sizes and angles applied per input command.
pub mod interaction {
    /// Eye translation step per key press, world units.
    pub const EYE_STEP: f32 = 0.5;
    /// Look rotation about the eye per key press, radians (0.5 degrees).
    pub const LOOK_STEP: f32 = 0.5 * core::f32::consts::PI / 180.0;
    /// Selected-mesh translation step per key press, world units.
    pub const TRANSLATE_STEP: f32 = 0.5;
    /// Selected-mesh rotation about its centroid per key press, radians.
    pub const ROTATE_STEP: f32 = 0.5;
    /// In-plane scale factor folded into the transform of the selected mesh.
    pub const EMPHASIS_SCALE: f32 = 1.2;
}

/// Fixed scene lighting.
pub mod light {
    use glam::Vec3;

    /// World-space position of the single point light.
    pub const POSITION: Vec3 = Vec3::new(-0.5, 1.5, -0.5);
}

/// Scene source.
pub mod scene {
    /// URL the startup scene description is fetched from.
    pub const INPUT_TRIANGLES_URL: &str = "https://ncsucgclass.github.io/prog3/triangles.json";
}
