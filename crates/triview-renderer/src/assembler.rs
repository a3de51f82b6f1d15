//! Scene-to-buffer assembly.
//!
//! Flattens a [`SceneModel`] into the flat arrays the rasterization backend
//! consumes, concatenating mesh by mesh in scene order. The whole set is
//! recomputed on every render: per-mesh transforms are mutable and there is
//! no incremental-update path, so a rebuild costs O(total triangles) per
//! frame. At this scene scale that is the simplest correct design; it is the
//! first thing to revisit if scenes ever grow past a few thousand triangles.

use triview_core::SceneModel;

/// Flat vertex-attribute and index buffers for one render of the scene.
///
/// `positions` and the three material arrays have one entry per vertex;
/// `transforms` and `normals` have one entry per triangle corner; `indices`
/// are valid against the concatenated `positions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneBuffers {
    /// Vertex positions, 3 floats each.
    pub positions: Vec<f32>,
    /// Per-vertex ambient color, 4 floats each, alpha 1.
    pub ambient: Vec<f32>,
    /// Per-vertex diffuse color, 4 floats each, alpha 1.
    pub diffuse: Vec<f32>,
    /// Per-vertex specular color, 4 floats each, alpha 1.
    pub specular: Vec<f32>,
    /// Per-corner 4x4 mesh transform, 16 floats each, column-major.
    pub transforms: Vec<f32>,
    /// Per-corner normal, 3 floats each.
    pub normals: Vec<f32>,
    /// Global triangle-corner indices into `positions`.
    pub indices: Vec<u32>,
}

impl SceneBuffers {
    /// Number of vertices in the concatenated position array.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangle corners (equals the index count).
    pub fn corner_count(&self) -> usize {
        self.indices.len()
    }
}

/// Assemble the backend buffers for the scene's current state.
///
/// Each mesh's material is broadcast to every one of its vertices; each
/// mesh's current transform is written once per corner of every one of its
/// triangles; corner normals are looked up by corner occurrence; and the
/// mesh's local vertex indices are shifted by the running vertex total of
/// the meshes before it. A mesh with no triangles still contributes its
/// vertices, materials and offset, and nothing else.
pub fn assemble(scene: &SceneModel) -> SceneBuffers {
    let mut buffers = SceneBuffers::default();
    let mut base = 0u32;

    for (mesh, transform) in scene.meshes().iter().zip(scene.transforms()) {
        for position in &mesh.vertices {
            buffers.positions.extend_from_slice(position);
        }
        for _ in 0..mesh.vertex_count() {
            push_color(&mut buffers.ambient, mesh.material.ambient);
            push_color(&mut buffers.diffuse, mesh.material.diffuse);
            push_color(&mut buffers.specular, mesh.material.specular);
        }

        let matrix = transform.to_cols_array();
        for (t, triangle) in mesh.triangles.iter().enumerate() {
            for (c, &index) in triangle.iter().enumerate() {
                buffers.indices.push(base + index);
                buffers.transforms.extend_from_slice(&matrix);
                buffers.normals.extend_from_slice(&mesh.corner_normal(t, c));
            }
        }

        base += mesh.vertex_count() as u32;
    }

    buffers
}

fn push_color(buffer: &mut Vec<f32>, color: [f32; 3]) {
    buffer.extend_from_slice(&color);
    buffer.push(1.0);
}
