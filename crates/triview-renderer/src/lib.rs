//! Rasterization backend for the triview viewer.
//!
//! Turns a `triview_core::SceneModel` into what the GPU consumes: the flat
//! buffer set of the [`assembler`], the per-frame [`uniforms`], and the
//! single-light shading pass of the [`mesh_renderer`]. The shading formula
//! lives twice, in `shaders/mesh.wgsl` for the GPU and in [`lighting`] for
//! the tests; the two are kept in sync by hand.

pub mod assembler;
pub mod lighting;
pub mod mesh_renderer;
pub mod pipeline;
pub mod uniforms;
pub mod vertex;

pub use assembler::{SceneBuffers, assemble};
pub use mesh_renderer::MeshRenderer;
pub use uniforms::FrameUniform;
pub use vertex::CornerVertex;
