use crate::graph::VertexId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex {vertex} does not exist (graph has {vertex_count} vertices)")]
    InvalidIndex {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("path weight overflow while searching from {origin} towards {destination}")]
    WeightOverflow {
        origin: VertexId,
        destination: VertexId,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
