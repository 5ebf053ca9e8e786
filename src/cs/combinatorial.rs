pub mod backtracking;
pub mod brute_force_vertex_cover;

pub use backtracking::SubsetIndices;
pub use brute_force_vertex_cover::BruteForceStepper;
