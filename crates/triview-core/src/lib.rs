//! Scene state and interaction logic for the triview viewer.
//!
//! This crate is the CPU side of the viewer: the scene data model loaded
//! once at startup, the camera, and the command state machine that mutates
//! per-mesh transforms and the selection cursor in response to discrete
//! input commands. It knows nothing about the GPU; `triview-renderer`
//! flattens a [`SceneModel`] into the buffers a rasterization backend
//! consumes.

pub mod camera;
pub mod command;
pub mod config;
pub mod error;
pub mod load;
pub mod material;
pub mod mesh;
pub mod scene;

pub use camera::Camera;
pub use command::{Axis, Command, CycleDirection, Sign, apply_command};
pub use error::SceneError;
pub use load::{fetch_scene, load_scene_from_path, parse_scene};
pub use material::Material;
pub use mesh::Mesh;
pub use scene::SceneModel;
