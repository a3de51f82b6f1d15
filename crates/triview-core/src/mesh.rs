//! Triangle mesh data.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::material::Material;

/// One independently selectable and transformable triangle mesh.
///
/// `normals` are corner normals, indexed by triangle-corner occurrence: the
/// normal for corner `c` of triangle `t` is `normals[3 * t + c]`. They are
/// not parallel to `vertices`: a vertex position shared by
/// several triangles can carry a different normal in each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Surface material, shared by every triangle of the mesh.
    pub material: Material,
    /// Vertex positions, local object space.
    pub vertices: Vec<[f32; 3]>,
    /// Corner normals, one per triangle corner in triangle order.
    pub normals: Vec<[f32; 3]>,
    /// Triangles as triples of zero-based local vertex indices.
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Number of vertex positions.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of triangle corners (3 per triangle).
    pub fn corner_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// The normal designated for corner `corner` of triangle `triangle`.
    ///
    /// Callers must only pass corners of validated meshes; the lookup is
    /// in-bounds by the validation invariant.
    pub fn corner_normal(&self, triangle: usize, corner: usize) -> [f32; 3] {
        self.normals[3 * triangle + corner]
    }

    /// Unweighted mean, in local object space, of the vertex positions
    /// referenced by the mesh's triangle corners.
    ///
    /// A position referenced by several corners counts once per reference.
    /// A mesh with no triangles has no referenced corners and answers the
    /// local origin.
    pub fn centroid(&self) -> Vec3 {
        let corners = self.corner_count();
        if corners == 0 {
            return Vec3::ZERO;
        }
        let mut sum = Vec3::ZERO;
        for triangle in &self.triangles {
            for &index in triangle {
                sum += Vec3::from(self.vertices[index as usize]);
            }
        }
        sum / corners as f32
    }

    /// Check the structural invariants of one mesh record.
    ///
    /// `mesh_index` is the mesh's position in the scene, used only for error
    /// reporting. Verifies that every triangle vertex index is in range and
    /// that there is exactly one corner normal per triangle corner.
    pub fn validate(&self, mesh_index: usize) -> Result<(), SceneError> {
        for (t, triangle) in self.triangles.iter().enumerate() {
            for &index in triangle {
                if index as usize >= self.vertices.len() {
                    return Err(SceneError::VertexIndexOutOfRange {
                        mesh: mesh_index,
                        triangle: t,
                        index,
                        vertex_count: self.vertices.len(),
                    });
                }
            }
        }
        let expected = self.corner_count();
        if self.normals.len() != expected {
            return Err(SceneError::NormalCountMismatch {
                mesh: mesh_index,
                triangles: self.triangles.len(),
                expected,
                found: self.normals.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material() -> Material {
        Material {
            ambient: [0.1, 0.1, 0.1],
            diffuse: [0.5, 0.5, 0.5],
            specular: [0.3, 0.3, 0.3],
            shininess: 11.0,
        }
    }

    fn triangle_mesh() -> Mesh {
        Mesh {
            material: material(),
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![[0.0, 0.0, -1.0]; 3],
            triangles: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn test_centroid_counts_corner_references() {
        // Two triangles sharing vertices 0 and 2: shared positions are
        // averaged once per referencing corner, not once per vertex.
        let mesh = Mesh {
            material: material(),
            vertices: vec![
                [0.0, 0.0, 0.0],
                [3.0, 0.0, 0.0],
                [0.0, 3.0, 0.0],
                [3.0, 3.0, 0.0],
            ],
            normals: vec![[0.0, 0.0, -1.0]; 6],
            triangles: vec![[0, 1, 2], [2, 3, 0]],
        };
        let centroid = mesh.centroid();
        assert!((centroid.x - 1.5).abs() < 1e-6);
        assert!((centroid.y - 1.5).abs() < 1e-6);
        assert_eq!(centroid.z, 0.0);
    }

    #[test]
    fn test_centroid_of_empty_mesh_is_origin() {
        let mesh = Mesh {
            material: material(),
            vertices: vec![[5.0, 5.0, 5.0]],
            normals: vec![],
            triangles: vec![],
        };
        assert_eq!(mesh.centroid(), Vec3::ZERO);
    }

    #[test]
    fn test_validate_accepts_well_formed_mesh() {
        assert!(triangle_mesh().validate(0).is_ok());
    }

    #[test]
    fn test_validate_rejects_vertex_index_out_of_range() {
        let mut mesh = triangle_mesh();
        mesh.triangles[0][2] = 3;
        match mesh.validate(4) {
            Err(SceneError::VertexIndexOutOfRange {
                mesh: 4,
                triangle: 0,
                index: 3,
                vertex_count: 3,
            }) => {}
            other => panic!("expected out-of-range error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_normal_count_mismatch() {
        let mut mesh = triangle_mesh();
        mesh.normals.pop();
        match mesh.validate(1) {
            Err(SceneError::NormalCountMismatch {
                mesh: 1,
                expected: 3,
                found: 2,
                ..
            }) => {}
            other => panic!("expected count mismatch, got {other:?}"),
        }
    }
}
