//! Scene description loading.
//!
//! The scene is a JSON array of mesh records fetched once at startup. Loading
//! is the only fallible stage of the viewer: after a scene passes validation
//! here, every later operation on it is total.

use std::path::Path;

use crate::error::SceneError;
use crate::mesh::Mesh;
use crate::scene::SceneModel;

/// Fetch and validate a scene description over HTTP.
pub fn fetch_scene(url: &str) -> Result<SceneModel, SceneError> {
    tracing::info!(url, "fetching scene description");
    let records: Vec<Mesh> = ureq::get(url)
        .call()
        .map_err(|e| SceneError::Fetch(e.to_string()))?
        .body_mut()
        .read_json()
        .map_err(|e| SceneError::Parse(e.to_string()))?;
    build(records)
}

/// Load and validate a scene description from a local file.
pub fn load_scene_from_path(path: impl AsRef<Path>) -> Result<SceneModel, SceneError> {
    let text =
        std::fs::read_to_string(path.as_ref()).map_err(|e| SceneError::Io(e.to_string()))?;
    parse_scene(&text)
}

/// Parse and validate a scene description from JSON text.
pub fn parse_scene(json: &str) -> Result<SceneModel, SceneError> {
    let records: Vec<Mesh> =
        serde_json::from_str(json).map_err(|e| SceneError::Parse(e.to_string()))?;
    build(records)
}

fn build(meshes: Vec<Mesh>) -> Result<SceneModel, SceneError> {
    let scene = SceneModel::new(meshes)?;
    tracing::info!(
        meshes = scene.len(),
        triangles = scene.triangle_count(),
        "scene loaded"
    );
    Ok(scene)
}
