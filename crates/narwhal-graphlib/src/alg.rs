//! Greedy label-setting path search.
//!
//! Both searches share one skeleton: seed the frontier with the source's outgoing edges, then
//! repeatedly settle the preferred frontier entry and expand its destination along edges that
//! have not been traversed yet. Every directed edge is expanded at most once per search. Ties go
//! to the earliest frontier entry, so adjacency insertion order decides between equal totals.
//!
//! With [`Preference::Lightest`] this is a uniform-cost (Dijkstra-style) search. With
//! [`Preference::Heaviest`] it is a heuristic: it reports the heaviest path the once-per-edge
//! greedy expansion happens to produce, which is not the longest simple path in general.
//!
//! Traversal marks live in a set owned by each search, so searches never observe each other and
//! the graph is left untouched.

use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// Settle the frontier entry with the minimum total weight.
    Lightest,
    /// Settle the frontier entry with the maximum total weight.
    Heaviest,
}

impl Preference {
    fn prefers(self, candidate: u64, incumbent: u64) -> bool {
        match self {
            Preference::Lightest => candidate < incumbent,
            Preference::Heaviest => candidate > incumbent,
        }
    }
}

/// A path from `vertices[0]` to the last entry, with its summed edge weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub total: u64,
}

impl Path {
    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn destination(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }
}

#[derive(Debug, Clone, Copy)]
struct Step {
    destination: VertexId,
    total: u64,
    previous: Option<usize>,
}

/// The settled paths of one search from a single source.
///
/// A single run answers queries for every destination: the expansion order does not depend on
/// the destination, only the final pick among settled paths does.
#[derive(Debug, Clone)]
pub struct PathSearch {
    source: VertexId,
    preference: Preference,
    steps: Vec<Step>,
    settled: Vec<usize>,
}

impl PathSearch {
    pub fn run<N>(graph: &Graph<N>, source: VertexId, preference: Preference) -> Result<Self> {
        graph.check(source)?;

        let mut traversed: FxHashSet<EdgeId> = FxHashSet::default();
        let mut steps: Vec<Step> = Vec::new();
        let mut frontier: Vec<usize> = Vec::new();
        let mut settled: Vec<usize> = Vec::new();

        for (id, edge) in graph.out_edges(source) {
            traversed.insert(id);
            frontier.push(steps.len());
            steps.push(Step {
                destination: edge.neighbor,
                total: u64::from(edge.weight),
                previous: None,
            });
        }

        while !frontier.is_empty() {
            let mut pick = 0;
            for (pos, &ix) in frontier.iter().enumerate().skip(1) {
                if preference.prefers(steps[ix].total, steps[frontier[pick]].total) {
                    pick = pos;
                }
            }
            let current = frontier.remove(pick);
            let Step {
                destination, total, ..
            } = steps[current];

            for (id, edge) in graph.out_edges(destination) {
                if !traversed.insert(id) {
                    continue;
                }
                let total = total
                    .checked_add(u64::from(edge.weight))
                    .ok_or(Error::WeightOverflow {
                        origin: source,
                        destination: edge.neighbor,
                    })?;
                frontier.push(steps.len());
                steps.push(Step {
                    destination: edge.neighbor,
                    total,
                    previous: Some(current),
                });
            }

            settled.push(current);
        }

        Ok(Self {
            source,
            preference,
            steps,
            settled,
        })
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Total weight of the preferred settled path ending at `destination`.
    ///
    /// `None` when the search never reached `destination`. The source itself is only reported
    /// when a cycle leads back to it.
    pub fn total_to(&self, destination: VertexId) -> Option<u64> {
        self.best_step(destination).map(|ix| self.steps[ix].total)
    }

    pub fn path_to(&self, destination: VertexId) -> Option<Path> {
        let last = self.best_step(destination)?;
        let mut vertices = Vec::new();
        let mut cursor = Some(last);
        while let Some(ix) = cursor {
            vertices.push(self.steps[ix].destination);
            cursor = self.steps[ix].previous;
        }
        vertices.push(self.source);
        vertices.reverse();
        Some(Path {
            vertices,
            total: self.steps[last].total,
        })
    }

    /// Number of paths settled by the search (one per traversed edge).
    pub fn settled_len(&self) -> usize {
        self.settled.len()
    }

    fn best_step(&self, destination: VertexId) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &ix in &self.settled {
            if self.steps[ix].destination != destination {
                continue;
            }
            match best {
                Some(b) if !self.preference.prefers(self.steps[ix].total, self.steps[b].total) => {}
                _ => best = Some(ix),
            }
        }
        best
    }
}

fn search<N>(
    graph: &Graph<N>,
    source: VertexId,
    destination: VertexId,
    preference: Preference,
) -> Result<Option<Path>> {
    graph.check(source)?;
    graph.check(destination)?;
    if source == destination {
        return Ok(Some(Path {
            vertices: vec![source],
            total: 0,
        }));
    }
    Ok(PathSearch::run(graph, source, preference)?.path_to(destination))
}

/// Minimum-weight path from `source` to `destination`.
///
/// Returns `Ok(None)` when `destination` is unreachable and a zero-weight single-vertex path
/// when `source == destination`.
pub fn shortest_path<N>(
    graph: &Graph<N>,
    source: VertexId,
    destination: VertexId,
) -> Result<Option<Path>> {
    search(graph, source, destination, Preference::Lightest)
}

/// Heaviest path found by the once-per-edge greedy expansion. See the module docs: this is a
/// length-scale heuristic, not an exact longest path.
pub fn greedy_farthest_path<N>(
    graph: &Graph<N>,
    source: VertexId,
    destination: VertexId,
) -> Result<Option<Path>> {
    search(graph, source, destination, Preference::Heaviest)
}
