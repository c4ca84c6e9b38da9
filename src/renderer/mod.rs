//! Rendering module
//!
//! The scene is drawn against the `Canvas` trait. `MeshCanvas` tessellates it
//! into triangles that the WebGPU pipeline uploads each frame.

pub mod canvas;
pub mod mesh;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, Stroke};
pub use mesh::MeshCanvas;
pub use pipeline::RenderState;
pub use scene::{SceneStyle, draw_scene};
pub use vertex::Vertex;
