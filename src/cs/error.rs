use thiserror::Error;

/// Errors produced while building graphs or resolving algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("vertex {0} is not in the graph")]
    VertexNotFound(usize),

    #[error("invalid edge: self-loop on vertex {0}")]
    InvalidEdge(usize),

    #[error("algorithm '{name}' not found. Available: {available}")]
    AlgorithmNotFound { name: String, available: String },

    #[error("input too large: {0}")]
    InputTooLarge(String),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
