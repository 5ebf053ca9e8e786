//! Approximation algorithms for Vertex Cover.
//!
//! - `greedy_vertex_cover`: highest residual degree first, no guarantee
//! - `vertex_cover_two`: both endpoints of an uncovered edge, factor 2

pub mod greedy_vertex_cover;
pub mod vertex_cover_two;

pub use greedy_vertex_cover::GreedyStepper;
pub use vertex_cover_two::TwoApproximationStepper;
