//! WebGPU rendering module
//!
//! Bodies are tessellated into colored triangles on the CPU each frame and
//! drawn with a single flat-color pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use shapes::world_vertices;
pub use vertex::Vertex;
