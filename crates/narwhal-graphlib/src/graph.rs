//! Adjacency-list graph with positioned vertices and weighted edges.
//!
//! Vertices and edges are addressed by dense indices ([`VertexId`], [`EdgeId`]) handed out in
//! insertion order. Each vertex keeps its outgoing edges in insertion order; path search relies
//! on that order for tie-breaking.

use crate::error::{Error, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
    pub const SPIRAL_SPACING: f64 = 10.0;

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The `index`-th point of a golden-angle spiral around the origin. Distinct indices give
    /// distinct points, spaced roughly [`Point::SPIRAL_SPACING`] apart.
    pub fn spiral(index: usize) -> Self {
        const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;
        let r = Self::SPIRAL_SPACING * (index as f64).sqrt();
        let theta = index as f64 * GOLDEN_ANGLE;
        Self::new(r * theta.cos(), r * theta.sin())
    }
}

#[derive(Debug, Clone)]
pub struct Vertex<N> {
    pub label: N,
    pub position: Point,
    out_edges: Vec<EdgeId>,
}

impl<N> Vertex<N> {
    /// Outgoing edges in insertion order.
    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }
}

/// A directed adjacency entry. Undirected graphs store one entry per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: VertexId,
    pub neighbor: VertexId,
    pub weight: u32,
}

#[derive(Debug, Clone)]
pub struct Graph<N> {
    directed: bool,
    vertices: Vec<Vertex<N>>,
    edges: Vec<Edge>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Graph<N> {
    /// Creates an empty undirected graph.
    pub fn new() -> Self {
        Self {
            directed: false,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn new_directed() -> Self {
        Self {
            directed: true,
            ..Self::new()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Appends a vertex at [`Point::spiral`] of its index, so vertices added this way never
    /// coincide.
    pub fn add_vertex(&mut self, label: N) -> VertexId {
        let position = Point::spiral(self.vertices.len());
        self.add_vertex_at(label, position)
    }

    pub fn add_vertex_at(&mut self, label: N, position: Point) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            label,
            position,
            out_edges: Vec::new(),
        });
        id
    }

    /// Appends `source -> neighbor` and, for undirected graphs, `neighbor -> source` with the
    /// same weight. Self-loops are accepted.
    pub fn add_edge(&mut self, source: VertexId, neighbor: VertexId, weight: u32) -> Result<()> {
        self.check(source)?;
        self.check(neighbor)?;

        self.push_edge(source, neighbor, weight);
        if !self.directed {
            self.push_edge(neighbor, source, weight);
        }
        Ok(())
    }

    fn push_edge(&mut self, source: VertexId, neighbor: VertexId, weight: u32) {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source,
            neighbor,
            weight,
        });
        self.vertices[source.0].out_edges.push(id);
    }

    pub(crate) fn check(&self, v: VertexId) -> Result<()> {
        if v.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::InvalidIndex {
                vertex: v,
                vertex_count: self.vertices.len(),
            })
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, v: VertexId) -> Option<&Vertex<N>> {
        self.vertices.get(v.0)
    }

    pub fn vertex_mut(&mut self, v: VertexId) -> Option<&mut Vertex<N>> {
        self.vertices.get_mut(v.0)
    }

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex<N>> {
        self.vertices.iter()
    }

    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn edge(&self, e: EdgeId) -> Option<&Edge> {
        self.edges.get(e.0)
    }

    /// Outgoing edges of `v` in insertion order; empty for unknown vertices.
    pub fn out_edges(&self, v: VertexId) -> impl Iterator<Item = (EdgeId, &Edge)> {
        let edges = &self.edges;
        self.vertices
            .get(v.0)
            .map(|vx| vx.out_edges.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&id| (id, &edges[id.0]))
    }

    /// `(neighbor, weight)` pairs of `v`, in insertion order.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, u32)> {
        self.out_edges(v).map(|(_, e)| (e.neighbor, e.weight))
    }

    pub fn positions(&self) -> Vec<Point> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Overwrites vertex positions in order. Extra entries on either side are ignored.
    pub fn set_positions(&mut self, positions: &[Point]) {
        for (vertex, &p) in self.vertices.iter_mut().zip(positions) {
            vertex.position = p;
        }
    }
}
