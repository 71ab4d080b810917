#![forbid(unsafe_code)]

//! Headless Kamada-Kawai layout for weighted undirected graphs.
//!
//! `narwhal` takes parsed node/link records, seeds each vertex near an anchor for its category,
//! and relaxes the positions against graph-theoretic distances. Rendering, input handling and
//! file parsing are left to the caller.

pub use narwhal_graphlib as graphlib;

pub mod algo;
pub mod error;
pub mod graph;
mod rng;

pub use algo::KamadaKawaiOptions;
pub use algo::kamada_kawai::{LayoutReport, LayoutSession, Matrices, Termination};
pub use error::{Error, Result};
pub use graph::{
    Canvas, Category, Gender, Graph, GraphLink, GraphNode, LoadReport, Member, Placement,
    SeedOptions, Skipped, add_member, load_graph,
};
pub use narwhal_graphlib::Point;

/// Headless layout entry point: builds the matrices for `graph`, relaxes it, and writes the final
/// positions back into its vertices.
pub fn layout<N>(
    graph: &mut graphlib::Graph<N>,
    options: &KamadaKawaiOptions,
) -> Result<LayoutReport> {
    algo::kamada_kawai::layout(graph, options)
}
