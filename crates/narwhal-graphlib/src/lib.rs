#![forbid(unsafe_code)]

//! Weighted graph container and path search used by `narwhal`.
//!
//! The container stores every undirected edge as two directed adjacency entries, in insertion
//! order. Path search walks those entries and never mutates the graph.

pub mod alg;
pub mod error;
pub mod graph;

pub use alg::{Path, PathSearch, Preference, greedy_farthest_path, shortest_path};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Point, Vertex, VertexId};
