//! Scene loading and validation errors.

/// Errors raised while fetching, parsing or validating a scene description.
///
/// Any of these is fatal at startup: the viewer has no defined behavior
/// without a fully loaded scene.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SceneError {
    #[error("transport error: {0}")]
    Fetch(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("mesh {mesh}: triangle {triangle} references vertex {index} but the mesh has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        mesh: usize,
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("mesh {mesh}: expected {expected} corner normals for {triangles} triangles, found {found}")]
    NormalCountMismatch {
        mesh: usize,
        triangles: usize,
        expected: usize,
        found: usize,
    },
}
