//! Dense pairwise matrices derived from path search: graph distance `D`, ideal length `L` and
//! stiffness `K`.
//!
//! Unreachable pairs keep `D[i][j] = 0`, which zeroes the matching `L` and `K` entries so
//! disconnected components exert no spring force on each other.

use crate::error::Result;
use nalgebra::DMatrix;
use narwhal_graphlib::{Graph, PathSearch, Preference, VertexId};

#[derive(Debug, Clone)]
pub struct Matrices {
    pub distance: DMatrix<f64>,
    pub ideal_length: DMatrix<f64>,
    pub stiffness: DMatrix<f64>,
    /// Unordered vertex pairs with no connecting path.
    pub unreachable_pairs: usize,
}

impl Matrices {
    pub fn build<N>(graph: &Graph<N>, spring_constant: f64, reference_length: f64) -> Result<Self> {
        let (distance, unreachable_pairs) = distance_matrix(graph)?;
        let ideal_length = ideal_length_matrix(graph, &distance, reference_length)?;
        let stiffness = stiffness_matrix(&distance, spring_constant);
        tracing::debug!(
            vertices = graph.vertex_count(),
            unreachable_pairs,
            "layout matrices built"
        );
        Ok(Self {
            distance,
            ideal_length,
            stiffness,
            unreachable_pairs,
        })
    }

    pub fn len(&self) -> usize {
        self.distance.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `D[i][j]`: shortest-path weight between `i` and `j`, `0` on the diagonal and for unreachable
/// pairs. Also returns the number of unreachable unordered pairs.
pub fn distance_matrix<N>(graph: &Graph<N>) -> Result<(DMatrix<f64>, usize)> {
    let n = graph.vertex_count();
    let mut d = DMatrix::<f64>::zeros(n, n);
    let mut unreachable = 0;

    for i in 0..n {
        let search = PathSearch::run(graph, VertexId(i), Preference::Lightest)?;
        for j in (i + 1)..n {
            match search.total_to(VertexId(j)) {
                Some(total) => {
                    d[(i, j)] = total as f64;
                    d[(j, i)] = total as f64;
                }
                None => unreachable += 1,
            }
        }
    }

    Ok((d, unreachable))
}

/// `L[i][j] = (L0 / farthest(i, j)) * D[i][j]`, or `0` when either factor is zero.
///
/// `farthest` is the greedy heaviest-path heuristic, evaluated from the lower index of each pair
/// and mirrored.
pub fn ideal_length_matrix<N>(
    graph: &Graph<N>,
    distance: &DMatrix<f64>,
    reference_length: f64,
) -> Result<DMatrix<f64>> {
    let n = graph.vertex_count();
    let mut l = DMatrix::<f64>::zeros(n, n);

    for i in 0..n {
        if (i + 1..n).all(|j| distance[(i, j)] == 0.0) {
            continue;
        }
        let search = PathSearch::run(graph, VertexId(i), Preference::Heaviest)?;
        for j in (i + 1)..n {
            let dij = distance[(i, j)];
            let farthest = search.total_to(VertexId(j)).unwrap_or(0);
            if farthest == 0 || dij == 0.0 {
                continue;
            }
            let lij = reference_length / farthest as f64 * dij;
            l[(i, j)] = lij;
            l[(j, i)] = lij;
        }
    }

    Ok(l)
}

/// `K[i][j] = spring_constant / D[i][j]^2`, or `0` where `D[i][j] == 0`.
pub fn stiffness_matrix(distance: &DMatrix<f64>, spring_constant: f64) -> DMatrix<f64> {
    distance.map(|dij| {
        if dij == 0.0 {
            0.0
        } else {
            spring_constant / (dij * dij)
        }
    })
}
