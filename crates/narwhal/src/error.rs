#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("link {from} -> {to} references a missing vertex (graph has {vertex_count} vertices)")]
    InvalidIndex {
        from: i64,
        to: i64,
        vertex_count: usize,
    },

    #[error("node {name:?} has unrecognized category code {code}")]
    UnrecognizedCategory { name: String, code: i64 },

    #[error("{item} is missing field `{field}`")]
    MissingField { item: &'static str, field: &'static str },

    #[error("link {from} -> {to} has weight {value} outside 0..=4294967295")]
    InvalidWeight { from: i64, to: i64, value: i64 },

    #[error("layout requires at least one vertex")]
    EmptyGraph,

    #[error("canvas must have finite positive dimensions, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("layout option `{option}` has invalid value {value}")]
    InvalidOption { option: &'static str, value: f64 },

    #[error("failed to build layout matrices: {0}")]
    MatrixBuild(#[from] narwhal_graphlib::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
