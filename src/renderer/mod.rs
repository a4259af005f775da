//! Rendering support
//!
//! Turns the simulation state into a backend-agnostic scene: a triangle
//! mesh for paddles and ball plus text items for the title and scores.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Scene, TextItem};
pub use vertex::{Mesh, Vertex};
