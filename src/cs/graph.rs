//! Undirected graph model used by the vertex cover algorithms.
//!
//! - `undirected`: vertices, canonical edges and the `Graph` container
//! - `generators`: path, cycle, star, complete and random graphs

pub mod generators;
pub mod undirected;

pub use undirected::{Edge, Graph, Vertex};
