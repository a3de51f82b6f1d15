//! GPU vertex stream for the mesh pass.

use bytemuck::{Pod, Zeroable};

use crate::assembler::SceneBuffers;

/// One triangle corner as the mesh pipeline consumes it.
///
/// The assembler's flat arrays mix per-vertex data (positions, materials)
/// with per-corner data (normals, transforms), which indexed drawing cannot
/// express. This stream de-indexes them into corner order: entry `i` pairs
/// the vertex `indices[i]` points at with corner `i`'s normal and transform,
/// and the pass draws non-indexed.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CornerVertex {
    /// Vertex position, local object space.
    pub position: [f32; 3],
    /// Corner normal.
    pub normal: [f32; 3],
    /// Material ambient color, alpha 1.
    pub ambient: [f32; 4],
    /// Material diffuse color, alpha 1.
    pub diffuse: [f32; 4],
    /// Material specular color, alpha 1.
    pub specular: [f32; 4],
    /// Mesh transform, column-major.
    pub model: [[f32; 4]; 4],
}

impl CornerVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 9] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x4, // ambient
        3 => Float32x4, // diffuse
        4 => Float32x4, // specular
        5 => Float32x4, // model column 0
        6 => Float32x4, // model column 1
        7 => Float32x4, // model column 2
        8 => Float32x4, // model column 3
    ];

    /// Vertex buffer layout for the mesh pipeline.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CornerVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// De-index the assembled buffers into one corner-ordered stream.
    pub fn stream(buffers: &SceneBuffers) -> Vec<CornerVertex> {
        buffers
            .indices
            .iter()
            .enumerate()
            .map(|(corner, &index)| {
                let v = index as usize;
                let mut model = [[0.0; 4]; 4];
                for (column, values) in model.iter_mut().enumerate() {
                    let offset = corner * 16 + column * 4;
                    values.copy_from_slice(&buffers.transforms[offset..offset + 4]);
                }
                CornerVertex {
                    position: slice3(&buffers.positions, v),
                    normal: slice3(&buffers.normals, corner),
                    ambient: slice4(&buffers.ambient, v),
                    diffuse: slice4(&buffers.diffuse, v),
                    specular: slice4(&buffers.specular, v),
                    model,
                }
            })
            .collect()
    }
}

fn slice3(buffer: &[f32], index: usize) -> [f32; 3] {
    [buffer[3 * index], buffer[3 * index + 1], buffer[3 * index + 2]]
}

fn slice4(buffer: &[f32], index: usize) -> [f32; 4] {
    [
        buffer[4 * index],
        buffer[4 * index + 1],
        buffer[4 * index + 2],
        buffer[4 * index + 3],
    ]
}
