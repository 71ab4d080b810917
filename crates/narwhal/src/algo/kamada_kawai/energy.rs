//! Kamada-Kawai spring energy, its per-vertex gradient magnitude and the Newton step that
//! relaxes one vertex with every other vertex held fixed.

use super::matrix::Matrices;
use nalgebra::{Matrix2, Vector2};
use narwhal_graphlib::Point;

/// Total spring energy `Σ_{i<j} ½·K[i][j]·(d_ij − L[i][j])²`, where `d_ij` is the current
/// Euclidean separation. Non-negative whenever every `K[i][j] >= 0`.
pub fn energy(positions: &[Point], m: &Matrices) -> f64 {
    let n = positions.len();
    let mut total = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let d = positions[i].distance_to(positions[j]);
            let gap = d - m.ideal_length[(i, j)];
            total += 0.5 * m.stiffness[(i, j)] * gap * gap;
        }
    }
    total
}

fn gradient(i: usize, positions: &[Point], m: &Matrices) -> Vector2<f64> {
    let pi = positions[i];
    let mut g = Vector2::zeros();
    for (j, pj) in positions.iter().enumerate() {
        if j == i {
            continue;
        }
        let delta = Vector2::new(pi.x - pj.x, pi.y - pj.y);
        let d = delta.norm();
        if d == 0.0 {
            continue;
        }
        g += m.stiffness[(i, j)] * (delta - delta * (m.ideal_length[(i, j)] / d));
    }
    g
}

/// `ΔM(i)`: magnitude of the energy gradient with respect to vertex `i`'s coordinates.
pub fn delta_m(i: usize, positions: &[Point], m: &Matrices) -> f64 {
    gradient(i, positions, m).norm()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NewtonStep {
    pub dx: f64,
    pub dy: f64,
    /// Neighbour pairs skipped for zero separation, plus one if the Hessian was singular.
    pub degenerate_pairs: usize,
    /// Displacement components that came out non-finite and were zeroed.
    pub clamped: usize,
}

/// One Newton-Raphson step for vertex `i`: solves `H·δ = −∇E` with the local 2×2 Hessian.
pub fn newton_step(i: usize, positions: &[Point], m: &Matrices) -> NewtonStep {
    let pi = positions[i];
    let mut grad = Vector2::<f64>::zeros();
    let mut hessian = Matrix2::<f64>::zeros();
    let mut step = NewtonStep::default();

    for (j, pj) in positions.iter().enumerate() {
        if j == i {
            continue;
        }
        let (dx, dy) = (pi.x - pj.x, pi.y - pj.y);
        let d = dx.hypot(dy);
        let d3 = d * d * d;
        if d == 0.0 || d3 == 0.0 {
            step.degenerate_pairs += 1;
            tracing::trace!(i, j, "zero separation, pair skipped");
            continue;
        }
        let k = m.stiffness[(i, j)];
        let l = m.ideal_length[(i, j)];

        grad.x += k * (dx - l * dx / d);
        grad.y += k * (dy - l * dy / d);

        hessian[(0, 0)] += k * (1.0 - l * dy * dy / d3);
        hessian[(0, 1)] += k * (l * dx * dy / d3);
        hessian[(1, 0)] += k * (l * dy * dx / d3);
        hessian[(1, 1)] += k * (1.0 - l * dx * dx / d3);
    }

    let delta = match hessian.try_inverse() {
        Some(inverse) => inverse * -grad,
        None => {
            step.degenerate_pairs += 1;
            tracing::trace!(i, "singular hessian, vertex left in place");
            Vector2::zeros()
        }
    };

    step.clamped = delta.iter().filter(|v| !v.is_finite()).count();
    if step.clamped > 0 {
        tracing::trace!(i, dx = delta.x, dy = delta.y, "non-finite displacement clamped");
    }
    let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
    step.dx = finite_or_zero(delta.x);
    step.dy = finite_or_zero(delta.y);
    step
}
