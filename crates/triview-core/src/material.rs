//! Mesh surface material.

use serde::{Deserialize, Serialize};

/// Phong material attached to a mesh.
///
/// Color components are fractions in `[0, 1]`. `shininess` (the `n` field of
/// the scene description) is the material's declared specular exponent; it is
/// carried through loading but the shading stage currently substitutes a
/// fixed exponent for it, see `triview-renderer`'s lighting module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Ambient reflectance (RGB).
    pub ambient: [f32; 3],
    /// Diffuse reflectance (RGB).
    pub diffuse: [f32; 3],
    /// Specular reflectance (RGB).
    pub specular: [f32; 3],
    /// Declared specular exponent.
    #[serde(rename = "n")]
    pub shininess: f32,
}
