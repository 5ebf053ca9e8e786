pub mod approx;
pub mod combinatorial;
pub mod error;
pub mod graph;
pub mod vertex_cover;

// Re-export the public surface of each module
pub use graph::*;
pub use vertex_cover::*;
